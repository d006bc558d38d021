use std::io::{self, BufRead, Write};

use anyhow::Context;
use battleships::{
    attack, init_logging, is_game_over, place_fleet, random_attack, AttackOutcome, Board, Fleet,
    Session, SessionStore, Strategy, DEFAULT_BOARD_SIZE,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

const PLAYER: &str = "player";
const BOT: &str = "bot";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bombard your own auto-placed board until it is cleared.
    Solo {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play a full game against a random bot.
    Versus {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = Strategy::Simple)]
        strategy: Strategy,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solo { size, seed } => run_solo(size, seed),
        Commands::Versus {
            size,
            seed,
            strategy,
        } => run_versus(size, seed, strategy),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Single-board loop: the player shells their own fleet until the board is
/// clear. Mostly useful for poking at the engine by hand.
fn run_solo(size: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut board = Board::new(size)?;
    let mut fleet = Fleet::load_default()?;
    place_fleet(&mut board, &fleet, Strategy::Simple, &mut rng)?;

    println!("Welcome to Battleships!");
    println!("{}", board);
    while !is_game_over(&board) {
        let coordinate = read_coordinates(size)?;
        report(attack(coordinate, &mut board, &mut fleet), "You");
        println!("{}", board);
    }
    println!("Board cleared, game over.");
    Ok(())
}

/// Alternating-turn game against a uniform-random bot. Both boards live in
/// a session store; every rules decision goes through the engine.
fn run_versus(size: usize, seed: Option<u64>, strategy: Strategy) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let fleet = Fleet::load_default()?;

    let mut player_board = Board::new(size)?;
    place_fleet(&mut player_board, &fleet, strategy, &mut rng)?;
    let mut bot_board = Board::new(size)?;
    place_fleet(&mut bot_board, &fleet, Strategy::Random, &mut rng)?;
    log::debug!("fleets placed, {} ships per side", fleet.len());

    let mut store = SessionStore::new();
    store.insert(PLAYER, Session::new(player_board, fleet.clone()));
    store.insert(BOT, Session::new(bot_board, fleet));

    println!("Welcome to Battleships! You against the bot.");
    let mut turns = 0usize;
    let winner = loop {
        turns += 1;

        println!("\nYour move.");
        let coordinate = read_coordinates(size)?;
        let bot = store.get_mut(BOT).context("bot session missing")?;
        report(attack(coordinate, &mut bot.board, &mut bot.fleet), "You");
        if is_game_over(&bot.board) {
            break PLAYER;
        }

        println!("\nBot's move.");
        let shot = random_attack(&mut rng, size);
        log::debug!("bot attacks ({}, {})", shot.0, shot.1);
        let player = store.get_mut(PLAYER).context("player session missing")?;
        report(attack(shot, &mut player.board, &mut player.fleet), "Bot");
        println!("{}", player.board);
        if is_game_over(&player.board) {
            break BOT;
        }
    };

    println!("GAME OVER!");
    let result = json!({ "winner": winner, "turns": turns });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn report(outcome: AttackOutcome, who: &str) {
    match outcome {
        AttackOutcome::Hit => println!("{} hit!", who),
        AttackOutcome::Miss => println!("{} missed.", who),
    }
}

/// Prompt until the player enters two digits (column then row) that lie on
/// the board.
fn read_coordinates(size: usize) -> anyhow::Result<(usize, usize)> {
    let stdin = io::stdin();
    loop {
        print!("Enter coordinates (column then row, e.g. 04): ");
        io::stdout().flush()?;
        let mut entry = String::new();
        if stdin.lock().read_line(&mut entry)? == 0 {
            anyhow::bail!("input closed before the game finished");
        }
        let entry = entry.trim();
        let digits: Vec<usize> = entry
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| d as usize))
            .collect();
        if entry.chars().count() == 2 && digits.len() == 2 && digits.iter().all(|&d| d < size) {
            return Ok((digits[0], digits[1]));
        }
        println!("Invalid coordinates, try again.");
    }
}
