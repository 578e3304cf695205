//! Movement domain: requested locomotion intent.

/// Mutually exclusive motion requests. Only one can be pending at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Idle,
    Walk,
    Run,
    Backward,
}

/// Pending locomotion intent for one character.
///
/// Motion requests are held in a single slot so applying one always clears
/// the others. Jump lives beside it and is never touched by motion changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentState {
    motion: Option<Motion>,
    jump: bool,
}

impl IntentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motion(&self) -> Option<Motion> {
        self.motion
    }

    pub fn apply_idle(&mut self) {
        self.motion = Some(Motion::Idle);
    }

    pub fn apply_walk(&mut self) {
        self.motion = Some(Motion::Walk);
    }

    pub fn apply_run(&mut self) {
        self.motion = Some(Motion::Run);
    }

    pub fn apply_backward(&mut self) {
        self.motion = Some(Motion::Backward);
    }

    pub fn apply_jump(&mut self) {
        self.jump = true;
    }

    pub fn cancel_idle(&mut self) {
        self.cancel(Motion::Idle);
    }

    pub fn cancel_walk(&mut self) {
        self.cancel(Motion::Walk);
    }

    pub fn cancel_run(&mut self) {
        self.cancel(Motion::Run);
    }

    pub fn cancel_backward(&mut self) {
        self.cancel(Motion::Backward);
    }

    pub fn cancel_jump(&mut self) {
        self.jump = false;
    }

    pub fn is_idle(&self) -> bool {
        self.motion == Some(Motion::Idle)
    }

    pub fn is_walk(&self) -> bool {
        self.motion == Some(Motion::Walk)
    }

    pub fn is_run(&self) -> bool {
        self.motion == Some(Motion::Run)
    }

    pub fn is_backward(&self) -> bool {
        self.motion == Some(Motion::Backward)
    }

    pub fn is_jump(&self) -> bool {
        self.jump
    }

    // Cancelling a motion that is not the pending one leaves the slot alone.
    fn cancel(&mut self, motion: Motion) {
        if self.motion == Some(motion) {
            self.motion = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_intent_is_empty() {
        let intent = IntentState::new();
        assert!(intent.motion().is_none());
        assert!(!intent.is_jump());
    }

    #[test]
    fn test_apply_run_clears_other_motions() {
        let mut intent = IntentState::new();
        intent.apply_walk();
        intent.apply_run();

        assert!(intent.is_run());
        assert!(!intent.is_walk());
        assert!(!intent.is_backward());
        assert!(!intent.is_idle());
    }

    #[test]
    fn test_each_apply_is_exclusive() {
        let cases: [(fn(&mut IntentState), Motion); 4] = [
            (IntentState::apply_idle, Motion::Idle),
            (IntentState::apply_walk, Motion::Walk),
            (IntentState::apply_run, Motion::Run),
            (IntentState::apply_backward, Motion::Backward),
        ];

        for (apply, expected) in cases {
            let mut intent = IntentState::new();
            intent.apply_backward();
            intent.apply_idle();
            apply(&mut intent);

            assert_eq!(intent.motion(), Some(expected));
            let flags = [
                intent.is_idle(),
                intent.is_walk(),
                intent.is_run(),
                intent.is_backward(),
            ];
            assert_eq!(flags.iter().filter(|set| **set).count(), 1);
        }
    }

    #[test]
    fn test_cancel_only_clears_matching_motion() {
        let mut intent = IntentState::new();
        intent.apply_walk();

        intent.cancel_run();
        assert!(intent.is_walk());

        intent.cancel_walk();
        assert!(intent.motion().is_none());
    }

    #[test]
    fn test_jump_is_independent_of_motion() {
        let mut intent = IntentState::new();
        intent.apply_jump();
        intent.apply_run();
        assert!(intent.is_jump());
        assert!(intent.is_run());

        intent.cancel_jump();
        assert!(!intent.is_jump());
        assert!(intent.is_run());

        intent.apply_jump();
        intent.cancel_run();
        assert!(intent.is_jump());
    }
}
