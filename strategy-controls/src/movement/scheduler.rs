use bevy::prelude::*;

/// Claimants that can hold an entity's exclusive action slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Hold,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Hold => "hold",
        }
    }
}

/// Something that can be pre-empted by the scheduler.
pub trait Action {
    fn cancel(&mut self);
}

/// Resolves a claimant to the action it controls on the same entity.
///
/// Claimants without cancellable state (such as holding position) return `None`.
pub trait ActionLookup {
    fn action_mut(&mut self, kind: ActionKind) -> Option<&mut dyn Action>;
}

/// Exclusive action slot for one controllable entity. At most one claimant holds it.
#[derive(Component, Debug, Default)]
pub struct ActionScheduler {
    current: Option<ActionKind>,
}

impl ActionScheduler {
    /// Grant the slot to `claimant`, cancelling the previous holder if it differs.
    ///
    /// Returns `false` when `claimant` already held the slot; nothing is cancelled then.
    pub fn request_slot(&mut self, claimant: ActionKind, lookup: &mut dyn ActionLookup) -> bool {
        if self.current == Some(claimant) {
            return false;
        }

        if let Some(previous) = self.current.replace(claimant) {
            if let Some(action) = lookup.action_mut(previous) {
                action.cancel();
            }
            info!(
                "Action slot: {} pre-empted by {}",
                previous.as_str(),
                claimant.as_str()
            );
        } else {
            debug!("Action slot granted to {}", claimant.as_str());
        }
        true
    }

    /// Release the slot if `claimant` still holds it.
    pub fn finish(&mut self, claimant: ActionKind) -> bool {
        if self.current == Some(claimant) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<ActionKind> {
        self.current
    }

    pub fn is_held_by(&self, claimant: ActionKind) -> bool {
        self.current == Some(claimant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        move_cancels: u32,
    }

    impl Action for Recorder {
        fn cancel(&mut self) {
            self.move_cancels += 1;
        }
    }

    impl ActionLookup for Recorder {
        fn action_mut(&mut self, kind: ActionKind) -> Option<&mut dyn Action> {
            match kind {
                ActionKind::Move => Some(self as &mut dyn Action),
                ActionKind::Hold => None,
            }
        }
    }

    #[test]
    fn first_claim_cancels_nothing() {
        let mut scheduler = ActionScheduler::default();
        let mut recorder = Recorder::default();

        assert!(scheduler.request_slot(ActionKind::Move, &mut recorder));
        assert_eq!(scheduler.current(), Some(ActionKind::Move));
        assert_eq!(recorder.move_cancels, 0);
    }

    #[test]
    fn repeated_claim_is_not_a_preemption() {
        let mut scheduler = ActionScheduler::default();
        let mut recorder = Recorder::default();
        scheduler.request_slot(ActionKind::Move, &mut recorder);

        assert!(!scheduler.request_slot(ActionKind::Move, &mut recorder));
        assert_eq!(recorder.move_cancels, 0);
    }

    #[test]
    fn different_claimant_cancels_the_holder() {
        let mut scheduler = ActionScheduler::default();
        let mut recorder = Recorder::default();
        scheduler.request_slot(ActionKind::Move, &mut recorder);

        assert!(scheduler.request_slot(ActionKind::Hold, &mut recorder));
        assert_eq!(recorder.move_cancels, 1);
        assert!(scheduler.is_held_by(ActionKind::Hold));

        // Hold has nothing to cancel.
        scheduler.request_slot(ActionKind::Move, &mut recorder);
        assert_eq!(recorder.move_cancels, 1);
    }

    #[test]
    fn finish_only_releases_the_holder() {
        let mut scheduler = ActionScheduler::default();
        let mut recorder = Recorder::default();
        scheduler.request_slot(ActionKind::Hold, &mut recorder);

        assert!(!scheduler.finish(ActionKind::Move));
        assert_eq!(scheduler.current(), Some(ActionKind::Hold));
        assert!(scheduler.finish(ActionKind::Hold));
        assert_eq!(scheduler.current(), None);
    }
}
