//! NoGo match runner.
//!
//! Plays games between two agents configured with `key=value` strings, the
//! same strings an external game driver would hand them, and reports the
//! results. Optionally writes a JSON record of every game.

use anyhow::{bail, Context, Result};
use clap::Parser;
use nogo_board::{NoGoBoard, DEFAULT_SIZE};
use nogo_core::{Board, Color};
use nogo_mcts::{config::DEFAULT_SEED, Agent, AgentConfig, MctsPlayer};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Play NoGo matches between MCTS agents.
#[derive(Parser)]
#[command(name = "nogo-arena")]
#[command(about = "Play NoGo matches between configured agents")]
struct Cli {
    /// Options for the black agent, e.g. "name=mcts N=1000 seed=1".
    /// The role is always black.
    #[arg(long, default_value = "name=mcts N=200")]
    black: String,

    /// Options for the white agent. Without N or T it plays randomly.
    #[arg(long, default_value = "name=random")]
    white: String,

    /// Number of games to play.
    #[arg(short, long, default_value = "10")]
    games: usize,

    /// Board width.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    width: usize,

    /// Board height.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    height: usize,

    /// Write every game as JSON to this file.
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// A finished game.
#[derive(Serialize, Debug)]
struct GameRecord {
    index: usize,
    black: String,
    white: String,
    /// Moves in play order, as board coordinates.
    moves: Vec<String>,
    winner: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Parse agent options, forcing the role.
fn agent_config(args: &str, role: Color) -> Result<AgentConfig> {
    let args = format!("{} role={}", args, role);
    AgentConfig::from_args(&args).with_context(|| format!("invalid {} agent options: {}", role, args))
}

/// Give each game its own seed so parallel games differ but stay reproducible.
fn seeded_for_game(config: &AgentConfig, index: usize) -> AgentConfig {
    let base = config.seed.unwrap_or(DEFAULT_SEED);
    AgentConfig {
        seed: Some(base.wrapping_add(index as u64 * 1000)),
        ..config.clone()
    }
}

/// Play one game to the end. The side that cannot move loses.
fn play_game(
    index: usize,
    black: &AgentConfig,
    white: &AgentConfig,
    width: usize,
    height: usize,
) -> Result<GameRecord> {
    let mut black_player = MctsPlayer::new(seeded_for_game(black, index));
    let mut white_player = MctsPlayer::new(seeded_for_game(white, index));
    let mut board = NoGoBoard::with_size(width, height);
    let mut moves = Vec::new();

    let flag = format!("{}:{}", black.name, white.name);
    Agent::<NoGoBoard>::open_episode(&mut black_player, &flag);
    Agent::<NoGoBoard>::open_episode(&mut white_player, &flag);

    let winner = loop {
        let color = board.to_move();
        let player = match color {
            Color::Black => &mut black_player,
            Color::White => &mut white_player,
        };

        let Some(mv) = player.take_action(&board) else {
            break color.opponent();
        };
        if mv.color != color {
            bail!("{} played out of turn: {}", player.config().name, mv);
        }
        let placement = board.place(mv);
        if !placement.is_legal() {
            bail!("{} played illegal move {}: {:?}", player.config().name, mv, placement);
        }
        debug!(game = index, %color, cell = %board.cell_name(mv.cell), "move");
        moves.push(board.cell_name(mv.cell));
    };

    Agent::<NoGoBoard>::close_episode(&mut black_player, &flag);
    Agent::<NoGoBoard>::close_episode(&mut white_player, &flag);

    Ok(GameRecord {
        index,
        black: black.name.clone(),
        white: white.name.clone(),
        moves,
        winner: winner.to_string(),
    })
}

fn write_records(path: &PathBuf, records: &[GameRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)
        .with_context(|| format!("Failed to write game records to {:?}", path))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if cli.width == 0 || cli.height == 0 {
        bail!("board dimensions must be non-zero");
    }
    let black = agent_config(&cli.black, Color::Black)?;
    let white = agent_config(&cli.white, Color::White)?;

    info!(
        games = cli.games,
        width = cli.width,
        height = cli.height,
        black = %black.name,
        white = %white.name,
        "starting match"
    );
    let start = Instant::now();

    let records: Vec<GameRecord> = (0..cli.games)
        .into_par_iter()
        .map(|i| play_game(i, &black, &white, cli.width, cli.height))
        .collect::<Result<_>>()?;

    if let Some(path) = &cli.record {
        write_records(path, &records)?;
        info!(path = ?path, "game records written");
    }

    let elapsed = start.elapsed();
    let black_wins = records.iter().filter(|r| r.winner == "black").count();
    let white_wins = records.len() - black_wins;
    let total_moves: usize = records.iter().map(|r| r.moves.len()).sum();

    println!("\nCompleted in {:.2}s", elapsed.as_secs_f64());
    println!("Games played: {}", records.len());
    if !records.is_empty() {
        println!(
            "Average game length: {:.1} moves",
            total_moves as f64 / records.len() as f64
        );
    }
    println!("{} (black) wins: {}", black.name, black_wins);
    println!("{} (white) wins: {}", white.name, white_wins);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_forces_role() {
        let config = agent_config("name=x role=white N=5", Color::Black).unwrap();
        assert_eq!(config.role, Color::Black);
        assert_eq!(config.iterations, Some(5));
    }

    #[test]
    fn test_agent_config_rejects_bad_name() {
        assert!(agent_config("name=a;b", Color::White).is_err());
    }

    #[test]
    fn test_seeded_for_game() {
        let config = agent_config("seed=10", Color::Black).unwrap();
        assert_eq!(seeded_for_game(&config, 0).seed, Some(10));
        assert_eq!(seeded_for_game(&config, 2).seed, Some(2010));
    }

    #[test]
    fn test_play_game() {
        let black = agent_config("name=searcher N=20", Color::Black).unwrap();
        let white = agent_config("name=random", Color::White).unwrap();
        let record = play_game(0, &black, &white, 4, 4).unwrap();

        assert!(!record.moves.is_empty());
        assert!(record.moves.len() < 16);
        // The last player to move wins.
        let expected = if record.moves.len() % 2 == 1 { "black" } else { "white" };
        assert_eq!(record.winner, expected);
    }

    #[test]
    fn test_play_game_is_reproducible() {
        let black = agent_config("N=15 seed=4", Color::Black).unwrap();
        let white = agent_config("seed=5", Color::White).unwrap();

        let a = play_game(3, &black, &white, 4, 4).unwrap();
        let b = play_game(3, &black, &white, 4, 4).unwrap();
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.winner, b.winner);
    }

    #[test]
    fn test_record_serializes() {
        let record = GameRecord {
            index: 1,
            black: "a".to_string(),
            white: "b".to_string(),
            moves: vec!["A1".to_string(), "C3".to_string()],
            winner: "white".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["moves"][1], "C3");
        assert_eq!(json["winner"], "white");
    }
}
