//! Isolation: a negamax engine for the game of Isolation.
//!
//! ## Usage
//!
//! - `isolation` - Play against the engine in the terminal
//! - `isolation play --human-first` - Play, moving first
//! - `isolation selfplay --random-opponent --seed 7` - Watch the engine play
//! - `isolation bestmove --depth 8` - Print the engine's opening move
//!
//! Set `RUST_LOG=debug` to see search statistics on stderr.

use anyhow::{Result, ensure};
use clap::{Args, Parser, Subcommand};

use isolation::board::{Board, Player};
use isolation::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use isolation::game::{Game, GameConfig};
use isolation::position::str_coord;
use isolation::search::{NEG_INFINITY, POS_INFINITY, search_root_with_stats};
use isolation::terminal::Terminal;

/// Isolation: a two-player pawn game with an alpha-beta engine
#[derive(Parser)]
#[command(name = "isolation")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play {
        #[command(flatten)]
        board: BoardArgs,
        /// Move first without being asked
        #[arg(long)]
        human_first: bool,
        /// Let the engine move first without being asked
        #[arg(long, conflicts_with = "human_first")]
        engine_first: bool,
    },
    /// Let the engine play a full game and print every move
    Selfplay {
        #[command(flatten)]
        board: BoardArgs,
        /// Replace the second player with a random mover
        #[arg(long)]
        random_opponent: bool,
        /// Seed for the random mover
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the engine's first move from the start position
    Bestmove {
        /// Board size (NxN)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Search depth in plies
        #[arg(long, default_value_t = 6)]
        depth: u32,
    },
}

#[derive(Args)]
struct BoardArgs {
    /// Board size (NxN)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Cap on the engine's search depth
    #[arg(long)]
    max_depth: Option<u32>,
}

impl BoardArgs {
    fn config(&self) -> Result<GameConfig> {
        check_size(self.size)?;
        Ok(GameConfig {
            size: self.size,
            max_depth: self.max_depth,
        })
    }
}

fn check_size(size: usize) -> Result<()> {
    ensure!(size >= MIN_SIZE, "board size must be at least {MIN_SIZE}, got {size}");
    ensure!(size <= MAX_SIZE, "board size must be at most {MAX_SIZE}, got {size}");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            board,
            human_first,
            engine_first,
        }) => {
            let first = if human_first {
                Some(true)
            } else if engine_first {
                Some(false)
            } else {
                None
            };
            Terminal::stdio().run(board.config()?, first)
        }
        Some(Commands::Selfplay {
            board,
            random_opponent,
            seed,
        }) => run_selfplay(board.config()?, random_opponent, seed),
        Some(Commands::Bestmove { size, depth }) => run_bestmove(size, depth),
        None => Terminal::stdio().run(GameConfig::default(), None),
    }
}

fn run_selfplay(config: GameConfig, random_opponent: bool, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut game = Game::new(config);
    println!("{}", game.board());

    while !game.is_over() {
        let player = game.to_move();
        let played = if random_opponent && player == Player::Second {
            if game.declare_if_stuck() {
                break;
            }
            let moves = game.legal_moves();
            let mv = moves[rng.usize(..moves.len())];
            game.play(mv)?;
            Some(mv)
        } else {
            game.play_engine()
        };
        if let Some(mv) = played {
            println!("Move {}: {player} to {}", game.moves_played(), str_coord(mv));
            println!("{}", game.board());
        }
    }

    if let Some(winner) = game.winner() {
        println!("Winner: {winner} after {} moves", game.moves_played());
    }
    Ok(())
}

fn run_bestmove(size: usize, depth: u32) -> Result<()> {
    check_size(size)?;
    ensure!(depth > 0, "depth must be at least 1");
    let mut board = Board::new(size);
    let result = search_root_with_stats(Player::First, &mut board, depth, NEG_INFINITY, POS_INFINITY);
    match result.best_move {
        Some(mv) => println!("bestmove {mv} score {:.2} nodes {}", result.score, result.nodes),
        None => println!("bestmove none nodes {}", result.nodes),
    }
    Ok(())
}
