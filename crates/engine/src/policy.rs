use rand::prelude::*;

use crate::core::GameSnapshot;
use crate::types::GameAction;

/// Picks the next input for an unattended game.
///
/// Returns `None` to let gravity act alone this tick.
///
/// Object-safe so it can be used as `Box<dyn Policy>`.
pub trait Policy {
    fn choose_action(&mut self, snapshot: &GameSnapshot) -> Option<GameAction>;
}

/// Idle entries weight the table so pieces drift before they drop.
const RANDOM_ACTIONS: [Option<GameAction>; 8] = [
    Some(GameAction::MOVE_LEFT),
    Some(GameAction::MOVE_RIGHT),
    Some(GameAction::MOVE_DOWN),
    Some(GameAction::Rotate),
    Some(GameAction::HardDrop),
    None,
    None,
    None,
];

pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_action(&mut self, snapshot: &GameSnapshot) -> Option<GameAction> {
        if !snapshot.playable() {
            return None;
        }
        RANDOM_ACTIONS.choose(&mut self.rng).copied().flatten()
    }
}

/// Hard-drops every piece where it spawns.
#[derive(Debug, Default, Clone, Copy)]
pub struct DropPolicy;

impl Policy for DropPolicy {
    fn choose_action(&mut self, snapshot: &GameSnapshot) -> Option<GameAction> {
        snapshot.playable().then_some(GameAction::HardDrop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::PieceKind;

    #[test]
    fn random_policy_is_seeded() {
        let mut game = GameState::new(1);
        game.start();
        let snap = game.snapshot();

        let mut a = RandomPolicy::new(42);
        let mut b = RandomPolicy::new(42);
        for _ in 0..64 {
            assert_eq!(a.choose_action(&snap), b.choose_action(&snap));
        }
    }

    #[test]
    fn random_policy_never_pauses_or_restarts() {
        let mut game = GameState::new(1);
        game.start();
        let snap = game.snapshot();

        let mut policy = RandomPolicy::new(7);
        for _ in 0..256 {
            let action = policy.choose_action(&snap);
            assert!(!matches!(
                action,
                Some(GameAction::Pause) | Some(GameAction::Start)
            ));
        }
    }

    #[test]
    fn policies_idle_when_not_playable() {
        let snap = GameSnapshot::default();
        assert_eq!(RandomPolicy::new(0).choose_action(&snap), None);
        assert_eq!(DropPolicy.choose_action(&snap), None);
    }

    #[test]
    fn drop_policy_hard_drops() {
        let mut game = GameState::with_source(crate::core::ScriptedSource::repeat(PieceKind::T));
        game.start();
        assert_eq!(
            DropPolicy.choose_action(&game.snapshot()),
            Some(GameAction::HardDrop)
        );
    }
}
