//! Movement domain: whether the character rests on a surface.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundedState(bool);

impl GroundedState {
    pub fn set(&mut self, grounded: bool) {
        self.0 = grounded;
    }

    pub fn is_grounded(&self) -> bool {
        self.0
    }
}
