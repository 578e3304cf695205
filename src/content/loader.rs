//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::LocomotionTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct, naming `source` in any error.
fn parse_single<T>(source: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: source.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse locomotion tuning from RON text. Missing fields keep their defaults.
pub fn parse_locomotion_tuning(
    source: &str,
    contents: &str,
) -> Result<LocomotionTuning, ContentLoadError> {
    parse_single(source, contents)
}

/// Load locomotion tuning from `<base_path>/locomotion.ron`.
pub fn load_locomotion_tuning(base_path: &Path) -> Result<LocomotionTuning, ContentLoadError> {
    let path = base_path.join("locomotion.ron");
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(&path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_locomotion_tuning(&file_name, &contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_tuning() {
        let tuning = parse_locomotion_tuning(
            "inline",
            r#"(
                jump_power: 6.0,
                rotational_speed: 8.0,
                forward_speed_limit: 2.5,
                run_speed_limit: 5.0,
                backward_speed_limit: 1.5,
                walk_acceleration: 10.0,
                run_acceleration: 16.0,
                backward_acceleration: 6.0,
                climb_speed: 2.0,
                slide_speed: 0.5,
            )"#,
        )
        .expect("tuning should parse");

        assert_eq!(tuning.jump_power, 6.0);
        assert_eq!(tuning.run_speed_limit, 5.0);
        assert_eq!(tuning.slide_speed, 0.5);
    }

    #[test]
    fn test_partial_tuning_keeps_defaults() {
        let tuning = parse_locomotion_tuning("inline", "(jump_power: 9.0)").expect("partial");
        let defaults = LocomotionTuning::default();

        assert_eq!(tuning.jump_power, 9.0);
        assert_eq!(tuning.forward_speed_limit, defaults.forward_speed_limit);
        assert_eq!(tuning.climb_speed, defaults.climb_speed);
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = parse_locomotion_tuning("broken.ron", "(jump_power: )").unwrap_err();
        assert_eq!(err.file, "broken.ron");
        assert!(err.to_string().starts_with("Failed to load broken.ron"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_locomotion_tuning(Path::new("does/not/exist")).unwrap_err();
        assert!(err.message.starts_with("IO error"));
    }

    #[test]
    fn test_shipped_tuning_file_parses() {
        let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
        let tuning = load_locomotion_tuning(&base).expect("assets/data/locomotion.ron");
        assert!(tuning.forward_speed_limit > 0.0);
    }
}
