use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Pause between the turn announcement and the timed prompt
    pub ready_pause_ms: u64,
    pub player_one_name: String,
    pub player_two_name: String,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ready_pause_ms: 1500,
            player_one_name: "Player 1".to_string(),
            player_two_name: "Player 2".to_string(),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = GameConfig::default();

        let game = GameConfig {
            ready_pause_ms: env::var("READY_PAUSE_MS")
                .unwrap_or_else(|_| defaults.ready_pause_ms.to_string())
                .parse()
                .context("READY_PAUSE_MS must be a number of milliseconds")?,
            player_one_name: env::var("PLAYER_ONE_NAME").unwrap_or(defaults.player_one_name),
            player_two_name: env::var("PLAYER_TWO_NAME").unwrap_or(defaults.player_two_name),
            seed: env::var("GAME_SEED")
                .ok()
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("GAME_SEED must be an unsigned integer")?,
        };

        Ok(Config { game })
    }

    pub fn ready_pause(&self) -> Duration {
        Duration::from_millis(self.game.ready_pause_ms)
    }
}
