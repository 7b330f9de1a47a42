use anyhow::Result;
use clap::{Parser, Subcommand};

use arcade_engine::catalog::{available_games, seed_catalog, MemoryCatalogStore};
use arcade_engine::progress::MemoryProfileStore;
use arcade_engine::{ChessSession, GameModal, PacingConfig, Profile, TicTacToeSession, XpLedger};

mod terminal;

use terminal::TerminalHost;

/// Mini-games against a computer opponent
#[derive(Parser)]
#[command(name = "mini-arcade")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the opponent's random choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the opponent's thinking pause and the result pause
    #[arg(long, global = true)]
    fast: bool,

    /// Name the earned XP is credited to
    #[arg(long, global = true, default_value = "player")]
    user: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play tic-tac-toe rounds against the computer
    Tictactoe,
    /// Play chess against the computer
    Chess,
    /// Print the game catalog as JSON
    Catalog,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let pacing = if cli.fast { PacingConfig::instant() } else { PacingConfig::default() };

    match cli.command {
        Some(Commands::Catalog) => print_catalog(),
        Some(Commands::Chess) => {
            let host = new_host(&cli.user)?;
            let modal = GameModal::open(ChessSession::new(cli.seed), host, pacing);
            let host = terminal::play_chess(modal)?;
            host.print_summary();
            Ok(())
        }
        Some(Commands::Tictactoe) | None => {
            let host = new_host(&cli.user)?;
            let modal = GameModal::open(TicTacToeSession::new(cli.seed), host, pacing);
            let host = terminal::play_tictactoe(modal)?;
            host.print_summary();
            Ok(())
        }
    }
}

fn new_host(user: &str) -> Result<TerminalHost> {
    let mut store = MemoryProfileStore::new();
    store.insert(user, Profile::default());
    let ledger = XpLedger::load(&store, user)?;
    Ok(TerminalHost::new(ledger, store))
}

fn print_catalog() -> Result<()> {
    let mut store = MemoryCatalogStore::new();
    seed_catalog(&mut store)?;
    let games = available_games(&store);
    println!("{}", serde_json::to_string_pretty(&games)?);
    Ok(())
}
