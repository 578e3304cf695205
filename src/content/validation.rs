//! Validation for locomotion tuning values.

use crate::movement::LocomotionTuning;

/// A tuning field outside its allowed range.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "locomotion tuning '{}' = {} must be {}",
            self.field, self.value, self.requirement
        )
    }
}

/// Helper macro for checking a field against a bound
macro_rules! check_field {
    ($errors:expr, $tuning:expr, $field:ident, $ok:expr, $requirement:expr) => {
        let value = $tuning.$field;
        if !$ok(value) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value,
                requirement: $requirement,
            });
        }
    };
}

/// Validate tuning values.
/// Returns a list of validation errors, empty if everything is in range.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let positive = |v: f32| v > 0.0;
    let non_negative = |v: f32| v >= 0.0;

    // Speed limits gate force admission
    check_field!(errors, tuning, forward_speed_limit, positive, "> 0");
    check_field!(errors, tuning, run_speed_limit, positive, "> 0");
    check_field!(errors, tuning, backward_speed_limit, positive, "> 0");

    check_field!(errors, tuning, jump_power, non_negative, ">= 0");
    check_field!(errors, tuning, rotational_speed, non_negative, ">= 0");
    check_field!(errors, tuning, walk_acceleration, non_negative, ">= 0");
    check_field!(errors, tuning, run_acceleration, non_negative, ">= 0");
    check_field!(errors, tuning, backward_acceleration, non_negative, ">= 0");
    check_field!(errors, tuning, climb_speed, non_negative, ">= 0");
    check_field!(errors, tuning, slide_speed, non_negative, ">= 0");

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(validate_tuning(&LocomotionTuning::default()).is_empty());
    }

    #[test]
    fn test_non_positive_limits_are_flagged() {
        let tuning = LocomotionTuning {
            forward_speed_limit: 0.0,
            backward_speed_limit: -1.0,
            ..LocomotionTuning::default()
        };

        let errors = validate_tuning(&tuning);
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["forward_speed_limit", "backward_speed_limit"]);
        assert_eq!(
            errors[0].to_string(),
            "locomotion tuning 'forward_speed_limit' = 0 must be > 0"
        );
    }

    #[test]
    fn test_negative_speeds_are_flagged() {
        let tuning = LocomotionTuning {
            climb_speed: -0.5,
            ..LocomotionTuning::default()
        };

        let errors = validate_tuning(&tuning);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "climb_speed");
    }
}
