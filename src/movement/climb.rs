//! Movement domain: resolving a character pressed against a climbable block.
//!
//! Blocks sit on a unit grid. When the character is blocked by one, how far
//! its feet are into the current unit cell decides whether it is facing a
//! wall (slide sideways) or a ledge (climb up).

use bevy::prelude::*;

use super::capabilities::CharacterBody;
use super::speed_gate::round2;

/// Lower bound of the reach band treated as a climbable ledge.
pub const LEDGE_MIN_REACH: f32 = 0.5;
/// Upper bound (exclusive) of the ledge band.
pub const LEDGE_MAX_REACH: f32 = 0.99;
/// How far below a block's top the feet may be and still count as landing on it.
pub const SIDE_HIT_TOLERANCE: f32 = 0.1;

/// Grid axis the character is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PositiveX,
    NegativeX,
    PositiveZ,
    NegativeZ,
    None,
}

/// Which displacement a blocked character gets this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbPath {
    Lateral,
    Vertical,
    Hold,
}

/// Displacement actually applied by the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClimbMove {
    None,
    Lateral(Vec3),
    Vertical(f32),
}

/// Fractional height of the feet inside the current unit cell, in `[0, 1)`.
pub fn reach(feet_y: f32) -> f32 {
    round2(feet_y).rem_euclid(1.0)
}

pub fn classify(reach: f32, grounded: bool) -> ClimbPath {
    let on_ledge = (LEDGE_MIN_REACH..LEDGE_MAX_REACH).contains(&reach);
    if grounded && !on_ledge {
        ClimbPath::Lateral
    } else if on_ledge {
        ClimbPath::Vertical
    } else {
        ClimbPath::Hold
    }
}

/// Snap a forward vector to a grid axis.
///
/// An exact axis match after rounding wins. Otherwise the larger horizontal
/// component decides; equal components give `Direction::None`.
pub fn facing_direction(forward: Vec3) -> Direction {
    match (forward.x.round() as i32, forward.z.round() as i32) {
        (1, 0) => return Direction::PositiveX,
        (-1, 0) => return Direction::NegativeX,
        (0, 1) => return Direction::PositiveZ,
        (0, -1) => return Direction::NegativeZ,
        _ => {}
    }

    let (x, z) = (forward.x.abs(), forward.z.abs());
    if x > z {
        if forward.x > 0.0 {
            Direction::PositiveX
        } else {
            Direction::NegativeX
        }
    } else if z > x {
        if forward.z > 0.0 {
            Direction::PositiveZ
        } else {
            Direction::NegativeZ
        }
    } else {
        Direction::None
    }
}

/// Sideways offset for a character blocked while facing `direction`.
///
/// The facing axis picks which axis to move along; the sign comes from the
/// raw forward vector's component on that other axis, not from `direction`.
/// A facing of exactly zero on that axis slides positive.
pub fn lateral_offset(direction: Direction, forward: Vec3, step: f32) -> Vec3 {
    match direction {
        Direction::PositiveZ | Direction::NegativeZ => Vec3::X * step * sign(forward.x),
        Direction::PositiveX | Direction::NegativeX => Vec3::Z * step * sign(forward.z),
        Direction::None => Vec3::ZERO,
    }
}

/// A block contact is a side hit when the feet are clearly below its top.
pub fn is_side_hit(feet_y: f32, block_top: f32) -> bool {
    feet_y < block_top - SIDE_HIT_TOLERANCE
}

/// A block only blocks the character when its top is above the feet.
pub fn is_blocking(feet_y: f32, block_top: f32) -> bool {
    round2(block_top) > round2(feet_y)
}

/// Nudge a blocked body sideways or up. Called every qualifying physics tick.
pub fn resolve<B: CharacterBody>(
    body: &mut B,
    grounded: bool,
    climb_speed: f32,
    slide_speed: f32,
    dt: f32,
) -> ClimbMove {
    let position = body.position();
    match classify(reach(position.y), grounded) {
        ClimbPath::Lateral => {
            let forward = body.forward();
            let offset = lateral_offset(facing_direction(forward), forward, slide_speed * dt);
            if offset == Vec3::ZERO {
                return ClimbMove::None;
            }
            body.set_position(position + offset);
            ClimbMove::Lateral(offset)
        }
        ClimbPath::Vertical => {
            let rise = climb_speed * dt;
            body.set_gravity(false);
            body.set_position(position + Vec3::Y * rise);
            ClimbMove::Vertical(rise)
        }
        ClimbPath::Hold => ClimbMove::None,
    }
}

fn sign(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reach_is_fraction_of_rounded_height() {
        assert!((reach(2.3) - 0.3).abs() < 1e-4);
        assert!((reach(0.7) - 0.7).abs() < 1e-4);
        assert!(reach(3.0).abs() < 1e-4);
        // 0.996 rounds up to the next whole cell
        assert!(reach(0.996).abs() < 1e-4);
    }

    #[test]
    fn test_reach_of_negative_height_stays_in_unit_range() {
        let r = reach(-0.25);
        assert!((r - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_classify_bands() {
        assert_eq!(classify(0.3, true), ClimbPath::Lateral);
        assert_eq!(classify(0.7, true), ClimbPath::Vertical);
        assert_eq!(classify(0.7, false), ClimbPath::Vertical);
        assert_eq!(classify(0.995, true), ClimbPath::Lateral);
        assert_eq!(classify(0.5, true), ClimbPath::Vertical);
        assert_eq!(classify(0.99, true), ClimbPath::Lateral);
    }

    #[test]
    fn test_classify_airborne_outside_ledge_holds() {
        assert_eq!(classify(0.3, false), ClimbPath::Hold);
        assert_eq!(classify(0.995, false), ClimbPath::Hold);
    }

    #[test]
    fn test_facing_direction_axis_aligned() {
        assert_eq!(facing_direction(Vec3::Z), Direction::PositiveZ);
        assert_eq!(facing_direction(Vec3::NEG_Z), Direction::NegativeZ);
        assert_eq!(facing_direction(Vec3::X), Direction::PositiveX);
        assert_eq!(facing_direction(Vec3::NEG_X), Direction::NegativeX);
    }

    #[test]
    fn test_facing_direction_larger_component_wins() {
        assert_eq!(
            facing_direction(Vec3::new(-0.9, 0.0, 0.2)),
            Direction::NegativeX
        );
        assert_eq!(
            facing_direction(Vec3::new(0.3, 0.0, -0.4)),
            Direction::NegativeZ
        );
        assert_eq!(
            facing_direction(Vec3::new(0.7, 0.0, 0.6)),
            Direction::PositiveX
        );
    }

    #[test]
    fn test_facing_direction_ties_and_zero_are_none() {
        assert_eq!(facing_direction(Vec3::ZERO), Direction::None);
        assert_eq!(
            facing_direction(Vec3::new(0.6, 0.0, 0.6)),
            Direction::None
        );
        assert_eq!(facing_direction(Vec3::Y), Direction::None);
    }

    #[test]
    fn test_lateral_offset_uses_other_axis_sign_of_forward() {
        // Facing mostly +Z but leaning toward -X slides along -X.
        let forward = Vec3::new(-0.2, 0.0, 0.9);
        let offset = lateral_offset(Direction::PositiveZ, forward, 0.5);
        assert_eq!(offset, Vec3::new(-0.5, 0.0, 0.0));

        // Facing -X, leaning +Z slides along +Z regardless of the -X facing.
        let forward = Vec3::new(-0.9, 0.0, 0.1);
        let offset = lateral_offset(Direction::NegativeX, forward, 0.5);
        assert_eq!(offset, Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_lateral_offset_zero_component_slides_positive() {
        let offset = lateral_offset(Direction::NegativeZ, Vec3::NEG_Z, 0.25);
        assert_eq!(offset, Vec3::new(0.25, 0.0, 0.0));
    }

    #[test]
    fn test_lateral_offset_none_direction_is_zero() {
        let offset = lateral_offset(Direction::None, Vec3::new(0.6, 0.0, 0.6), 1.0);
        assert_eq!(offset, Vec3::ZERO);
    }

    #[test]
    fn test_side_hit_tolerance() {
        // Block top 1.0 above the feet: side face.
        assert!(is_side_hit(0.0, 1.0));
        // Feet resting on top, with a little sink.
        assert!(!is_side_hit(0.95, 1.0));
        assert!(!is_side_hit(1.0, 1.0));
        assert!(is_side_hit(0.85, 1.0));
    }

    #[test]
    fn test_block_under_feet_is_not_blocking() {
        assert!(is_blocking(0.7, 1.0));
        assert!(is_blocking(0.98, 1.0));
        assert!(!is_blocking(1.0, 1.0));
        assert!(!is_blocking(0.998, 1.0));
        assert!(!is_blocking(2.0, 1.0));
    }
}
