//! Unattended play: seeded games driven by simulated time and a policy.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::RunnerConfig;
use crate::engine::{Driver, DropPolicy, Policy, RandomPolicy};
use crate::types::GameAction;

/// Outcome of one unattended game, printed as a JSON line by the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub game: u32,
    pub seed: u64,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces: u32,
    pub game_over: bool,
    pub elapsed_ms: u64,
}

/// Play game `index` of the batch described by `config`.
pub fn play_game(config: &RunnerConfig, index: u32) -> GameSummary {
    let seed = config.game_seed(index);
    let mut policy: Box<dyn Policy> = if config.drop_only {
        Box::new(DropPolicy)
    } else {
        Box::new(RandomPolicy::new(seed))
    };

    let mut driver = Driver::seeded(seed);
    driver.dispatch(GameAction::Start);
    debug!(game = index, seed, "game started");

    while !driver.state().game_over() && driver.pieces_locked() < config.max_pieces {
        if let Some(action) = policy.choose_action(&driver.snapshot()) {
            driver.dispatch(action);
        }
        driver.tick(config.tick_ms);
    }

    let state = driver.state();
    let summary = GameSummary {
        game: index,
        seed,
        score: state.score(),
        level: state.level(),
        lines: state.lines(),
        pieces: driver.pieces_locked(),
        game_over: state.game_over(),
        elapsed_ms: driver.elapsed_ms(),
    };
    info!(
        game = index,
        score = summary.score,
        lines = summary.lines,
        pieces = summary.pieces,
        game_over = summary.game_over,
        "game finished"
    );
    summary
}

/// Play every game in the batch, in order.
pub fn play_all(config: &RunnerConfig) -> Vec<GameSummary> {
    (0..config.games).map(|i| play_game(config, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(drop_only: bool) -> RunnerConfig {
        RunnerConfig {
            seed: 5,
            games: 2,
            max_pieces: 200,
            tick_ms: 50,
            drop_only,
        }
    }

    #[test]
    fn drop_only_games_end_quickly() {
        // Every piece lands on the centre stack, so the game tops out
        // long before the piece cap.
        let summary = play_game(&config(true), 0);
        assert!(summary.game_over);
        assert!(summary.pieces < 200);
        assert_eq!(summary.seed, 5);
    }

    #[test]
    fn same_seed_same_game() {
        let a = play_game(&config(false), 1);
        let b = play_game(&config(false), 1);
        assert_eq!(a, b);
        assert_eq!(a.seed, 6);
    }

    #[test]
    fn piece_cap_stops_game() {
        let config = RunnerConfig {
            max_pieces: 3,
            ..config(false)
        };
        let summary = play_game(&config, 0);
        assert!(summary.game_over || summary.pieces == 3);
        assert!(summary.pieces <= 3);
    }

    #[test]
    fn play_all_runs_each_game() {
        let summaries = play_all(&config(true));
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].game, 0);
        assert_eq!(summaries[1].game, 1);
    }

    #[test]
    fn summary_serializes_flat() {
        let summary = play_game(&config(true), 0);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["seed"], 5);
        assert_eq!(value["game_over"], true);
    }
}
