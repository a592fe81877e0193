//! war-rs: the two-player card game War
//!
//! Goals:
//! - Deterministic play given a seed (shuffle and cut are injectable)
//! - Every card accounted for at every step of a match
//! - Presentation kept behind the [`report::Reporter`] trait
//!
//! ## Quick start: play a seeded match
//! ```no_run
//! use war_rs::game::{Game, GameConfig};
//! use war_rs::report::NullReporter;
//!
//! let config = GameConfig::new("Ann", "Bob").with_seed(42);
//! let mut game = Game::start(&config, &mut NullReporter).unwrap();
//! let summary = game.play(&mut NullReporter).unwrap();
//! println!("{} won after {} hands", summary.winner_name().unwrap(), summary.hands_played);
//! ```
//!
//! ## Stepping through a hand
//! ```
//! use war_rs::game::{Game, Seat, StepOutcome};
//! use war_rs::report::NullReporter;
//!
//! let mut game = Game::with_hands("Ann", "As 2c".parse().unwrap(), "Bob", "3h 2d".parse().unwrap());
//! let outcome = game.step(&mut NullReporter).unwrap();
//! assert_eq!(outcome, StepOutcome::HandWon { winner: Seat::First, cards: 2 });
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin war-rs
//! ```
//! or play straight through on the console with `--plain`.

pub mod cards;
pub mod deck;
pub mod game;
pub mod hand;
pub mod report;
pub mod tui;
