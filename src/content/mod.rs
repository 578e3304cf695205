//! Content domain: data-driven locomotion tuning.

mod loader;
mod validation;

pub use loader::load_locomotion_tuning;
pub use validation::validate_tuning;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::LocomotionTuning;

/// Directory holding the RON data files, relative to the working directory.
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(load_tuning_or_default(Path::new(DATA_DIR)));
    }
}

/// Load tuning from disk, falling back to defaults when the file is unusable.
/// Out-of-range values are reported but kept.
fn load_tuning_or_default(base_path: &Path) -> LocomotionTuning {
    let tuning = match load_locomotion_tuning(base_path) {
        Ok(tuning) => {
            info!("Loaded locomotion tuning from {}", base_path.display());
            tuning
        }
        Err(e) => {
            warn!("{}; using default locomotion tuning", e);
            LocomotionTuning::default()
        }
    };

    for error in validate_tuning(&tuning) {
        warn!("{}", error);
    }

    tuning
}
