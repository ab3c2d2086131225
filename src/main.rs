mod config;
mod dictionary;
mod error;
mod game;
mod input;
mod models;
mod utils;

use std::io;

use anyhow::{Context, Result};
use config::Config;
use dictionary::VocabularyBank;
use game::{GameSession, TurnEngine, Verdict};
use input::ConsoleInput;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // stdout belongs to the game console, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocab_matrix=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Vocabulary Matrix...");

    let config = Config::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    let vocabulary =
        VocabularyBank::load().context("Embedded word corpus has no playable words")?;

    let rng = match config.game.seed {
        Some(seed) => {
            tracing::info!("Using fixed RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut engine = TurnEngine::new(&vocabulary, rng, config.ready_pause());
    let mut session = GameSession::new(
        config.game.player_one_name.clone(),
        config.game.player_two_name.clone(),
    );

    let summary = session.run(
        &mut engine,
        &mut ConsoleInput::stdin(),
        &mut io::stdout().lock(),
    )?;

    for card in &summary.cards {
        tracing::info!(
            player = %card.player,
            cells_won = card.cells_won,
            total_time = card.total_time,
            final_score = card.final_score,
            "Final score for {}",
            card.name
        );
    }

    match &summary.verdict {
        Verdict::Winner { name, .. } => tracing::info!(
            turns = summary.turns_played,
            "{} wins ({})",
            name,
            summary
                .reasons
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Verdict::Draw => tracing::info!(turns = summary.turns_played, "Game drawn"),
    }

    Ok(())
}
