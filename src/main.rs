//! Command-line entry point: runs one simulation and prints the report.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{Game, GameOptions, RoundResult};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of decks in the shoe.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..))]
    decks: u8,

    /// Shuffle seed (default: current UNIX time).
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only print the final report.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn options(&self) -> GameOptions {
        GameOptions::default().with_decks(self.decks)
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_round(out: &mut impl Write, round: &RoundResult) -> io::Result<()> {
    writeln!(
        out,
        "Player Hand: {}= {}",
        round.player_hand,
        round.player_value()
    )?;
    writeln!(
        out,
        "Dealer Hand: {}= {}",
        round.dealer_hand,
        round.dealer_value()
    )?;
    writeln!(out, "Result: {}", round.outcome.message())?;
    writeln!(out)
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing();

    let seed = args.seed();
    info!(decks = args.decks, seed, "starting simulation");

    let mut game = Game::new(args.options(), seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut write_result = Ok(());
    let stats = game.run_with(|round| {
        if !args.quiet && write_result.is_ok() {
            write_result = write_round(&mut out, round);
        }
    });
    write_result?;

    write!(out, "{stats}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bjsim::{Card, Hand, Outcome, Rank, Suit};

    #[test]
    fn defaults_to_one_deck() {
        let args = Args::parse_from(["bjsim"]);
        assert_eq!(args.decks, 1);
        assert!(args.seed.is_none());
        assert!(!args.quiet);
        assert_eq!(args.options(), GameOptions::default());
    }

    #[test]
    fn parses_decks_and_seed() {
        let args = Args::parse_from(["bjsim", "--decks", "6", "--seed", "7", "-q"]);
        assert_eq!(args.options().decks, 6);
        assert_eq!(args.seed(), 7);
        assert!(args.quiet);
    }

    #[test]
    fn rejects_zero_decks() {
        let err = Args::try_parse_from(["bjsim", "--decks", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn round_summary_format() {
        let round = RoundResult {
            player_hand: Hand::from_cards(&[
                Card::new(Rank::Ten, Suit::Clubs),
                Card::new(Rank::Nine, Suit::Hearts),
            ]),
            dealer_hand: Hand::from_cards(&[
                Card::new(Rank::Six, Suit::Spades),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Five, Suit::Clubs),
            ]),
            outcome: Outcome::Loss,
            shoe_exhausted: false,
        };

        let mut buf = Vec::new();
        write_round(&mut buf, &round).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Player Hand: 10 Clubs 9 Hearts = 19\n\
             Dealer Hand: 6 Spades K Diamonds 5 Clubs = 21\n\
             Result: Dealer wins!\n\n"
        );
    }
}
