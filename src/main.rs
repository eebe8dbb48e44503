//! Terminal match-3 runner (default binary).
//!
//! Line-oriented: prints the board with coloured tiles, then reads swaps as
//! `row col row col` from stdin. Uses crossterm for styling only, so it works in
//! pipes as well as interactive terminals.
//!
//! Configuration comes from `MATCH3_*` environment variables (see
//! `EngineConfig::from_env`) plus `MATCH3_SEED` for the RNG. Set `RUST_LOG` to see
//! engine tracing on stderr.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::queue;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use tracing::info;
use tracing_subscriber::EnvFilter;

use match3::core::{Engine, EngineConfig, MoveOutcome};
use match3::session::{GameRegistry, GameView, SessionError};
use match3::types::{Color, Swap};

const HELP: &str =
    "commands: <row> <col> <row> <col> to swap, `new` for a fresh board, `quit` to exit";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = EngineConfig::from_env().context("invalid MATCH3_* configuration")?;
    let seed = seed_from_env();
    info!(seed, size = config.board_size(), "starting match3");
    let registry = GameRegistry::new(Engine::with_seed(config, seed));

    let player = registry.register_player("player").await;
    let mut game = registry.create_game(player.id).await?;

    let mut out = io::stdout();
    writeln!(out, "{}", HELP)?;
    render(&mut out, &game)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "h" | "help" => writeln!(out, "{}", HELP)?,
            "new" => {
                game = registry.create_game(player.id).await?;
                render(&mut out, &game)?;
            }
            _ => match parse_swap(input) {
                Some(swap) => match registry.make_move(game.id, swap).await {
                    Ok(reply) => {
                        match &reply.outcome {
                            MoveOutcome::Resolved(report) => writeln!(
                                out,
                                "+{} points ({} cleared, {} chain reactions)",
                                report.score_delta,
                                report.cleared(),
                                report.chain_reactions()
                            )?,
                            MoveOutcome::Rejected(reason) => writeln!(
                                out,
                                "illegal move ({}), board unchanged",
                                reason.as_str()
                            )?,
                        }
                        game = reply.game;
                        render(&mut out, &game)?;
                    }
                    Err(SessionError::Engine(err)) => writeln!(out, "error: {}", err)?,
                    Err(err) => return Err(err.into()),
                },
                None => writeln!(out, "could not parse `{}`; {}", input, HELP)?,
            },
        }
    }

    Ok(())
}

fn seed_from_env() -> u32 {
    std::env::var("MATCH3_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(1)
        })
}

/// Parse `r1 c1 r2 c2` (commas allowed)
fn parse_swap(input: &str) -> Option<Swap> {
    let nums: Vec<i32> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect::<Option<_>>()?;

    match nums.as_slice() {
        &[r1, c1, r2, c2] => Some(Swap::from_coords(r1, c1, r2, c2)),
        _ => None,
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Yellow => TermColor::Yellow,
        Color::Purple => TermColor::Magenta,
        Color::Orange => TermColor::DarkYellow,
    }
}

fn render(out: &mut impl Write, game: &GameView) -> Result<()> {
    queue!(out, Print(format!("\ngame {}  score {}\n   ", game.id.0, game.score)))?;
    for col in 0..game.board.size() {
        queue!(out, Print(format!("{} ", col)))?;
    }
    queue!(out, Print("\n"))?;

    for (row, cells) in game.board.rows().enumerate() {
        queue!(out, Print(format!("{:>2} ", row)))?;
        for cell in cells {
            match cell {
                Some(tile) => queue!(
                    out,
                    SetForegroundColor(term_color(tile.color)),
                    Print(format!("{} ", tile.color.letter())),
                    ResetColor
                )?,
                None => queue!(out, Print(". "))?,
            }
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()?;
    Ok(())
}
