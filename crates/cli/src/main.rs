// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs Poker odds calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use outs_cards::CardSet;
use outs_eval::{OddsCalculator, OddsConfig};

#[derive(Debug, Parser)]
#[clap(
    about = "Computes the odds of making each Poker hand for the given cards",
    long_about = "Computes the odds of making each Poker hand for the given cards.

Cards are a rank followed by a suit, the ranks are 2 to 10, J, Q, K, and
A or 1 for an ace, the suits are C (clubs), D (diamonds), H (hearts) and
S (spades). Spaces between cards are optional.

Example: poker-odds -a \"KS QS\" -b \"JS 10S 2D\""
)]
struct Cli {
    /// The hole cards, for example "KS QS".
    #[clap(long = "hole", short = 'a')]
    hole: String,
    /// The board cards, none, 3, 4 or 5 cards.
    #[clap(long, short, default_value = "")]
    board: String,
    /// Number of worker threads.
    #[clap(long = "workers", short = 'g', default_value_t = 3,
           value_parser = clap::value_parser!(u16).range(1..=256))]
    workers: u16,
    /// Prints the parsed cards and debug logs.
    #[clap(long, short)]
    verbose: bool,
    /// Prints the results as JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let hole = cli
        .hole
        .parse::<CardSet>()
        .context("Error parsing your hole cards")?;
    let board = cli
        .board
        .parse::<CardSet>()
        .context("Error parsing the board")?;

    if cli.verbose {
        println!("Your hole cards: '{hole}'");
        println!("The board: '{board}'");
    }

    let config = OddsConfig {
        workers: cli.workers as usize,
        ..Default::default()
    };

    let calc = OddsCalculator::new(&hole, &board, config)?;
    if board.is_empty() {
        warn!(
            "Computing the odds for {} pre-flop boards, this will take a while, use -g to add workers",
            calc.num_spreads()
        );
    }

    let histogram = calc.run()?;
    if cli.verbose {
        if let Some(best) = histogram.best() {
            println!("Best possible hand: {best}");
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&histogram)?);
    } else {
        print!("{histogram}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["poker-odds", "-a", "KS QS"]).unwrap();
        assert_eq!(cli.hole, "KS QS");
        assert_eq!(cli.board, "");
        assert_eq!(cli.workers, 3);
        assert!(!cli.verbose);
        assert!(!cli.json);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "poker-odds",
            "--hole",
            "AS KS",
            "-b",
            "QS JS 2D",
            "-g",
            "8",
            "-v",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.board, "QS JS 2D");
        assert_eq!(cli.workers, 8);
        assert!(cli.verbose);
        assert!(cli.json);
    }

    #[test]
    fn invalid_flags() {
        // Missing hole cards.
        assert!(Cli::try_parse_from(["poker-odds"]).is_err());
        assert!(Cli::try_parse_from(["poker-odds", "-a", "KS QS", "-g", "0"]).is_err());
        assert!(Cli::try_parse_from(["poker-odds", "-a", "KS QS", "-g", "x"]).is_err());

        let err = Cli::try_parse_from(["poker-odds", "-h"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn help_explains_cards() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("A or 1 for an ace"));
        assert!(help.contains("Example: poker-odds -a"));
    }

    #[test]
    fn invalid_cards() {
        let cli = Cli::try_parse_from(["poker-odds", "-a", "KS QX"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(err.to_string(), "Error parsing your hole cards");

        let cli = Cli::try_parse_from(["poker-odds", "-a", "KS QS", "-b", "KS 2D 3D"]).unwrap();
        assert!(run(&cli).is_err());
    }

    #[test]
    fn river_odds() {
        let cli =
            Cli::try_parse_from(["poker-odds", "-a", "KS QS", "-b", "JS 10S 9S 2D 3C"]).unwrap();
        assert!(run(&cli).is_ok());

        let cli = Cli::try_parse_from([
            "poker-odds",
            "-v",
            "-a",
            "KS QS",
            "-b",
            "JS 10S 9S 2D 3C",
        ])
        .unwrap();
        assert!(run(&cli).is_ok());
    }
}
