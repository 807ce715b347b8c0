#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tictactoe::{
    config::{default_document_path, DEFAULT_GAME_ID, DEFAULT_PLAYER_ID, DEFAULT_POLL_INTERVAL},
    init_logging, print_game, AiPlayer, CliPlayer, GameSession, GameState, GameStore,
    InMemoryStore, JsonFileStore, Mark, PlayerNode, Winner,
};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in this terminal, against a friend or the computer.
    Local {
        #[arg(long, help = "Let the computer play this mark (X or O)")]
        ai: Option<Mark>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play one mark of a game stored in a JSON file shared with another process.
    Play {
        #[arg(long, help = "Game document file (default: test-game.json)")]
        file: Option<PathBuf>,
        #[arg(long = "as", help = "Mark played from this terminal (X or O)")]
        mark: Mark,
        #[arg(long, help = "Let the computer choose this terminal's moves")]
        ai: bool,
        #[arg(long, help = "How often to check the file for changes, in milliseconds")]
        poll_ms: Option<u64>,
        #[arg(long, default_value = DEFAULT_PLAYER_ID)]
        player_id: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Write a fresh game to a JSON file.
    Reset {
        #[arg(long, help = "Game document file (default: test-game.json)")]
        file: Option<PathBuf>,
        #[arg(long, default_value = DEFAULT_PLAYER_ID)]
        player_id: String,
    },
    /// Print the board and status stored in a JSON file.
    Show {
        #[arg(long, help = "Game document file (default: test-game.json)")]
        file: Option<PathBuf>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn document_path(file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| default_document_path(DEFAULT_GAME_ID))
}

#[cfg(feature = "std")]
fn announce(winner: Option<Winner>) {
    match winner {
        Some(Winner::Mark(m)) => println!("\n{} wins!", m),
        Some(Winner::Draw) => println!("\nA draw!"),
        None => println!("\nGame left unfinished."),
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { ai, seed } => {
            println!("Starting local game...");
            let mut rng = make_rng(seed);
            let mut session = GameSession::new(InMemoryStore::new(), DEFAULT_PLAYER_ID);
            session.connect().await?;

            let mut node = PlayerNode::new(session).with_display(true);
            for mark in Mark::ALL {
                if ai == Some(mark) {
                    node = node.with_player(mark, Box::new(AiPlayer::new()));
                } else {
                    node = node.with_player(mark, Box::new(CliPlayer::new()));
                }
            }
            let winner = node.run(&mut rng).await?;
            announce(winner);
        }
        Commands::Play {
            file,
            mark,
            ai,
            poll_ms,
            player_id,
            seed,
        } => {
            let path = document_path(file);
            let poll = poll_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_POLL_INTERVAL);
            println!("Playing {} using {}...", mark, path.display());
            let mut rng = make_rng(seed);
            let store = JsonFileStore::with_poll_interval(path, poll);
            let mut session = GameSession::new(store, player_id);
            session.connect().await?;

            let mut node = PlayerNode::new(session).with_display(true);
            node = if ai {
                node.with_player(mark, Box::new(AiPlayer::new()))
            } else {
                node.with_player(mark, Box::new(CliPlayer::new()))
            };
            let winner = node.run(&mut rng).await?;
            announce(winner);
        }
        Commands::Reset { file, player_id } => {
            let path = document_path(file);
            let mut session = GameSession::new(JsonFileStore::new(&path), player_id);
            session.reset().await?;
            println!("New game written to {}", path.display());
            print_game(&session.state());
        }
        Commands::Show { file } => {
            let path = document_path(file);
            let store = JsonFileStore::new(&path);
            match store.read().await? {
                Some(doc) => {
                    let state = GameState {
                        board: doc.board()?,
                        turn: doc.turn,
                        winner: doc.winner,
                        revision: doc.revision,
                    };
                    print_game(&state);
                    println!("Revision {}, updated {}", doc.revision, doc.updated_at);
                }
                None => println!("No game at {}", path.display()),
            }
        }
    }
    Ok(())
}
