//! hashaudit - Dictionary-attack hash auditor
//!
//! Hashes every candidate in a wordlist with a selected digest algorithm and
//! reports which digests match a supplied set of target hashes. CPU-bound,
//! single-threaded, intended for security testing and education.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{debug, warn};
use std::path::PathBuf;

mod hashing;
mod matching;
mod wordlist;

use hashing::Algorithm;

/// Dictionary-attack hash auditor
#[derive(Parser)]
#[command(name = "hashaudit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to wordlist file (one candidate password per line)
    #[arg(short, long)]
    wordlist: PathBuf,

    /// Path to file with target hashes (one hex hash per line)
    #[arg(short = 'H', long)]
    hashes: PathBuf,

    /// Hash algorithm
    #[arg(short, long, value_enum, default_value = "sha256")]
    algorithm: Algorithm,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_secs()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    println!(
        "{} Loading wordlist from {}",
        "[*]".blue(),
        cli.wordlist.display()
    );
    let words = wordlist::load_lines(&cli.wordlist)?;
    println!("{} Loaded {} words", "[+]".green(), words.len());

    println!(
        "{} Loading target hashes from {}",
        "[*]".blue(),
        cli.hashes.display()
    );
    let targets = wordlist::load_lines(&cli.hashes)?;
    println!("{} Loaded {} target hashes", "[+]".green(), targets.len());

    // Advisory only: malformed targets stay in the comparison set.
    for target in &targets {
        if target.len() != cli.algorithm.hex_len() {
            warn!(
                "target hash '{}' is {} characters; expected {} for {}",
                target,
                target.len(),
                cli.algorithm.hex_len(),
                cli.algorithm.name()
            );
        }
    }

    println!(
        "{} Computing {} hashes on CPU",
        "[*]".blue(),
        cli.algorithm.name()
    );
    let (digests, elapsed) = hashing::hash_wordlist(&words, cli.algorithm);
    println!(
        "{} Hashing completed in {:.2} seconds",
        "[+]".green(),
        elapsed.as_secs_f64()
    );
    debug!("computed {} digests", digests.len());

    println!("{} Comparing hashes", "[*]".blue());
    let matches = matching::find_matches(&digests, &targets, &words);

    if matches.is_empty() {
        println!("{} No matches found", "[-]".yellow());
    } else {
        println!("\nFound matches:");
        for m in &matches {
            println!(
                "{} Password: {} matches hash: {}",
                "[+]".green(),
                m.candidate,
                m.target
            );
        }
    }

    Ok(())
}
