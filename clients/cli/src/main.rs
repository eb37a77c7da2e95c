use clap::Parser;
use log::{debug, error, info};
use std::io::{self, BufRead, Write};
use twentyone::{ActionOutcome, EngineError, Round, RoundPhase, RoundReason, Shoe};

mod input;
mod render;

#[derive(Parser)]
#[command(
    name = "twentyone",
    about = "Console blackjack table for one dealer and up to five players"
)]
struct Cli {
    /// Number of players at the table (1-5)
    players: u8,

    /// Seed the shoe shuffle for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final round summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if !(1..=5).contains(&cli.players) {
        eprintln!("number of players must be between 1 and 5");
        std::process::exit(1);
    }

    if let Err(err) = run(&cli) {
        error!("round aborted: {err}");
        eprintln!("round aborted: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let shoe = match cli.seed {
        Some(seed) => Shoe::seeded(seed),
        None => Shoe::from_entropy(),
    };
    let names: Vec<String> = (1..=cli.players).map(|n| format!("Player {n}")).collect();

    let mut round = Round::new(shoe, names);
    round.deal()?;
    info!(
        "dealt {} players, {} cards left in the shoe",
        cli.players,
        round.shoe_remaining()
    );

    if round.reason() == Some(RoundReason::DealerBlackjack) {
        println!("{}", render::dealer_line(&round.dealer_view(true)));
        println!("Dealer blackjack. The round is over.");
    } else {
        play_turns(&mut round)?;
        let reason = round.play_dealer()?;
        debug!("dealer turn finished: {reason:?}");
        println!();
        println!("{}", render::dealer_line(&round.dealer_view(true)));
        if reason == RoundReason::DealerBusted {
            println!("Dealer busted.");
        }
    }

    let summary = round.summary().ok_or("round did not resolve")?;
    render::print_summary(&summary);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn play_turns(round: &mut Round) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(turn) = round.current_turn() {
        println!();
        println!("{}", render::dealer_line(&round.dealer_view(false)));
        println!("{}", render::hand_line(&turn.player, &turn.hand));

        let action = loop {
            print!("[1] hit  [2] stand  [3] split > ");
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Err("input stream closed".into()),
            };
            match input::parse_action(&line) {
                Some(action) => break action,
                None => println!("invalid input"),
            }
        };

        match round.play(action) {
            Ok(ActionOutcome::CardDrawn(card)) => println!("drew {card}"),
            Ok(ActionOutcome::Busted(card)) => println!("drew {card} - busted"),
            Ok(ActionOutcome::Stood) => println!("standing"),
            Ok(ActionOutcome::SplitInto(..)) => println!("hand split in two"),
            // A rejected split is recoverable: the hand stays in play and
            // the loop comes back around to it.
            Err(EngineError::InvalidSplit) => println!("cannot split"),
            Err(err) => return Err(err.into()),
        }
    }

    debug_assert_eq!(round.phase(), RoundPhase::DealerTurn);
    Ok(())
}
