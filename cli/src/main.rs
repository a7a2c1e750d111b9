use clap::Parser;
use nsweeper_core::{CellCount, Coord, GameConfig};
use simplelog::{Config, WriteLogger};

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width, at least 10
    #[arg(long, default_value_t = 10)]
    width: Coord,

    /// Board height, at least 10
    #[arg(long, default_value_t = 10)]
    height: Coord,

    /// Number of mines, at least 10
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(log_level) = args.verbose.log_level() {
        WriteLogger::init(log_level.to_level_filter(), Config::default(), std::io::stderr())?;
    }
    log::debug!("seed: {:?}", args.seed);

    let config = GameConfig::new((args.width, args.height), args.mines);
    let mut session = session::Session::new(config, args.seed);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)?;

    let board = session.board();
    log::debug!(
        "Leaving, last game lost: {}, won: {}",
        board.is_lost(),
        board.is_won()
    );
    Ok(())
}
