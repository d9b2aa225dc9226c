//! Play blackjack against the dealer on the terminal.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blackjack::{Game, IoConsole, Session, TableOptions};

#[derive(Parser)]
#[command(name = "blackjack")]
#[command(about = "Single-player blackjack against the dealer")]
struct Cli {
    /// Chips the player starts with
    #[arg(long, default_value_t = 10_000)]
    chips: usize,

    /// Smallest accepted bet
    #[arg(long, default_value_t = 100)]
    min_bet: usize,

    /// Number of 52-card decks in the shoe
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..))]
    decks: u8,

    /// Blackjack payout ratio
    #[arg(long, default_value_t = 1.5)]
    blackjack_pays: f64,

    /// Total the dealer stands on
    #[arg(long, default_value_t = 17)]
    dealer_stands_on: u8,

    /// Share of the shoe dealt before it is rebuilt between rounds (0 = never)
    #[arg(long, default_value_t = 0.0)]
    penetration: f64,

    /// Seed for the shuffle; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log game events to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn table_options(&self) -> TableOptions {
        TableOptions::default()
            .with_starting_chips(self.chips)
            .with_min_bet(self.min_bet)
            .with_decks(self.decks)
            .with_blackjack_pays(self.blackjack_pays)
            .with_dealer_stands_on(self.dealer_stands_on)
            .with_penetration(self.penetration)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "blackjack=debug"
    } else {
        "blackjack=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "shuffling up");

    let game = Game::new(cli.table_options(), seed);
    let mut session = Session::new(game, IoConsole::stdio());
    session.run().context("blackjack session ended unexpectedly")?;

    Ok(())
}
