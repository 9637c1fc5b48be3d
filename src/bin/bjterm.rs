//! Terminal blackjack.

use std::io;
use std::process::ExitCode;

use bjterm::render::{hand_art, hand_log};
use bjterm::{
    BetError, Card, DEFAULT_STARTING_BALANCE, GameOptions, HandOutcome, MAX_STARTING_BALANCE,
    RoundResult, RoundView, Session, SessionError, SessionSummary, Table, TerminalInput,
};
use clap::Parser;
use log::LevelFilter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(name = "bjterm", version, about = "Play blackjack against the dealer")]
struct Args {
    /// Starting balance
    #[arg(long, default_value_t = DEFAULT_STARTING_BALANCE, value_parser = clap::value_parser!(u64).range(1..=MAX_STARTING_BALANCE))]
    balance: u64,

    /// Seed for the shuffle (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log engine events to stderr (`RUST_LOG` is honoured otherwise)
    #[arg(short, long)]
    verbose: bool,
}

struct TerminalTable;

fn draw_hand(owner: &str, cards: &[Card], hide_first: bool) {
    println!("\n--- {owner} ---");
    print!("{}", hand_art(cards, hide_first));
    println!("Log: {}", hand_log(cards, hide_first));
}

impl Table for TerminalTable {
    fn session_started(&mut self, _balance: u64) {
        println!("===================================");
        println!("        BLACKJACK ENGINE           ");
        println!("===================================");
    }

    fn show_table(&mut self, view: RoundView<'_>) {
        draw_hand("DEALER HAND", view.dealer.cards(), view.hide_dealer_hole);
        draw_hand("PLAYER HAND", view.player.cards(), false);
        println!("\nYOUR TOTAL: {}", view.player.value());
    }

    fn bet_rejected(&mut self, amount: i64, error: BetError) {
        println!("Invalid bet {amount}: {error}. Input must be between 1 and current balance.");
    }

    fn dealer_turn(&mut self) {
        println!("\n--- DEALER'S TURN ---");
    }

    fn round_over(&mut self, view: RoundView<'_>, result: &RoundResult) {
        if result.dealer_played {
            draw_hand("FINAL DEALER HAND", view.dealer.cards(), false);
        }

        let bet = result.bet;
        match result.outcome {
            HandOutcome::Bust => println!("\nBUST! Player went over 21. Balance -${bet}"),
            HandOutcome::Win => println!("WINNER! Player beats Dealer. Balance +${bet}"),
            HandOutcome::Lose => println!("DEALER WINS! Player loses. Balance -${bet}"),
            HandOutcome::Push => println!("PUSH! It's a tie. Bet returned."),
        }
    }

    fn game_over(&mut self) {
        println!("\nGAME OVER! Zero balance.");
    }

    fn session_over(&mut self, summary: &SessionSummary) {
        println!(
            "\nFINAL BALANCE: ${}\nTerminating session...",
            summary.final_balance
        );
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let options = GameOptions::default().with_starting_balance(args.balance);
    let mut session = match args.seed {
        Some(seed) => Session::new(options, seed),
        None => Session::with_rng(options, ChaCha8Rng::from_os_rng()),
    };

    let mut input = TerminalInput::new(io::stdin().lock(), io::stdout());
    let mut table = TerminalTable;

    match session.run(&mut input, &mut table) {
        Ok(_) => ExitCode::SUCCESS,
        Err(SessionError::Input(err)) => {
            log::info!("stopping: {err}");
            table.session_over(&session.summary());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}
