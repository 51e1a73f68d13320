//! Terminal front end: plays a Starfall Blackjack session on stdin/stdout.

use std::io;

use anyhow::{bail, Context, Error};
use log::info;
use pico_args::Arguments;
use starfall_blackjack::{session, GameConfig, StarfallGame, StdConsole, TextTerminal};

const HELP: &str = "\
Play Starfall Blackjack against Diamond, a dealer who cheats

USAGE:
  starfall [OPTIONS]

OPTIONS:
  --bankroll   N           Starting bankroll in dollars  [default: env STARFALL_BANKROLL or 100]
  --seed       N           Seed for a replayable session [default: env STARFALL_SEED or random]

FLAGS:
  --summary-json           Print the session summary as JSON when the game ends
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log filter, logs go to stderr (e.g. starfall_blackjack=debug)
";

struct Args {
    bankroll: Option<u32>,
    seed: Option<u64>,
    summary_json: bool,
}

fn parse_args() -> Result<Args, Error> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bankroll: pargs.opt_value_from_str("--bankroll")?,
        seed: pargs.opt_value_from_str("--seed")?,
        summary_json: pargs.contains("--summary-json"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }
    Ok(args)
}

fn main() -> Result<(), Error> {
    env_logger::builder().format_target(false).init();

    let args = parse_args()?;
    let mut config = GameConfig::from_env().context("invalid environment")?;
    if let Some(bankroll) = args.bankroll {
        config.starting_bankroll = bankroll;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    info!("starting session with {config:?}");

    let mut game = StarfallGame::from_config(&config)?;
    let mut terminal = TextTerminal::new(StdConsole::new(io::stdin().lock(), io::stdout()));
    let summary = session::play_session(&mut game, &mut terminal).context("session aborted")?;

    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
