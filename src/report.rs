//! Presentation hooks called by the game engine.
//!
//! The engine never reads anything back from a [`Reporter`]; implementations
//! are free to print, record, or drop what they receive.

use crate::cards::Card;
use crate::game::GameSummary;
use std::io::{self, Write};

const RULE: &str = "---------------------------";

pub trait Reporter {
    /// A whole deck, laid out over `rows` lines.
    fn report_deck(&mut self, _cards: &[Card], _label: &str, _rows: usize) {}
    fn report_hand(&mut self, _player: &str, _cards: &[Card], _count: usize) {}
    fn report_cards_in_play(&mut self, _first: &str, _c1: Card, _second: &str, _c2: Card) {}
    fn report_hand_winner(&mut self, _player: &str) {}
    fn report_war_start(&mut self) {}
    fn report_forfeit(&mut self, _player: &str) {}
    fn report_final_stats(&mut self, _summary: &GameSummary) {}
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Plain-text reporter for a console.
///
/// Write failures do not interrupt the game; the first one is kept and can be
/// collected with [`ConsoleReporter::take_error`].
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            self.error = Some(e);
        }
    }
}

/// Lay out cards over `rows` lines, each card followed by a space.
pub fn format_deck(cards: &[Card], label: Option<&str>, rows: usize) -> String {
    let mut text = format!("{RULE}\n");
    if let Some(label) = label {
        text.push_str(label);
        text.push('\n');
    }
    let per_row = cards.len().div_ceil(rows.max(1)).max(1);
    for row in cards.chunks(per_row) {
        for card in row {
            text.push_str(&card.detailed());
            text.push(' ');
        }
        text.push('\n');
    }
    text
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report_deck(&mut self, cards: &[Card], label: &str, rows: usize) {
        let text = format_deck(cards, Some(label), rows);
        self.emit(&format!("{text}\n"));
    }

    fn report_hand(&mut self, player: &str, cards: &[Card], count: usize) {
        let text = format_deck(cards, Some(&format!("{player} ({count})")), 1);
        self.emit(&format!("{text}\n\n"));
    }

    fn report_cards_in_play(&mut self, first: &str, c1: Card, second: &str, c2: Card) {
        self.emit(&format!(
            "{first}'s card {}\n{second}'s card {}\n\n",
            c1.detailed(),
            c2.detailed()
        ));
    }

    fn report_hand_winner(&mut self, player: &str) {
        self.emit(&format!("Player {player} won the hand!\n\n"));
    }

    fn report_war_start(&mut self) {
        self.emit("\n *****  W A R *****\n\n");
    }

    fn report_forfeit(&mut self, player: &str) {
        self.emit(&format!(
            "Player {player} does not have enough cards to continue and has lost!\n\n"
        ));
    }

    fn report_final_stats(&mut self, summary: &GameSummary) {
        let mut text = format!("Total hands played: {}\n", summary.hands_played);
        for p in &summary.players {
            text.push_str(&format!(
                "{} - Hands won: {}, Hands lost: {}\n",
                p.name, p.won, p.lost
            ));
        }
        if let Some(name) = summary.winner_name() {
            text.push_str(&format!("{name} Is the Winner!!\n"));
        }
        self.emit(&text);
    }
}

/// Something the engine reported, kept for later display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameEvent {
    Deck { label: String, cards: Vec<Card> },
    Hand { player: String, cards: Vec<Card> },
    CardsInPlay { first: String, c1: Card, second: String, c2: Card },
    HandWinner(String),
    WarStart,
    Forfeit(String),
    FinalStats(GameSummary),
}

impl GameEvent {
    /// One-line description, used by the terminal UI log.
    pub fn describe(&self) -> String {
        match self {
            GameEvent::Deck { label, cards } => format!("{label} ({} cards)", cards.len()),
            GameEvent::Hand { player, cards } => format!("{player} holds {}", cards.len()),
            GameEvent::CardsInPlay { first, c1, second, c2 } => {
                format!("{first} {c1}  vs  {second} {c2}")
            }
            GameEvent::HandWinner(name) => format!("{name} won the hand"),
            GameEvent::WarStart => "W A R".to_string(),
            GameEvent::Forfeit(name) => format!("{name} ran out of cards"),
            GameEvent::FinalStats(summary) => match summary.winner_name() {
                Some(name) => format!("{name} wins after {} hands", summary.hands_played),
                None => format!("{} hands played", summary.hands_played),
            },
        }
    }
}

/// Records every report as a [`GameEvent`].
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn recent(&self, n: usize) -> &[GameEvent] {
        let start = self.events.len().saturating_sub(n);
        &self.events[start..]
    }
}

impl Reporter for EventLog {
    fn report_deck(&mut self, cards: &[Card], label: &str, _rows: usize) {
        self.events.push(GameEvent::Deck { label: label.to_string(), cards: cards.to_vec() });
    }

    fn report_hand(&mut self, player: &str, cards: &[Card], _count: usize) {
        self.events.push(GameEvent::Hand { player: player.to_string(), cards: cards.to_vec() });
    }

    fn report_cards_in_play(&mut self, first: &str, c1: Card, second: &str, c2: Card) {
        self.events.push(GameEvent::CardsInPlay {
            first: first.to_string(),
            c1,
            second: second.to_string(),
            c2,
        });
    }

    fn report_hand_winner(&mut self, player: &str) {
        self.events.push(GameEvent::HandWinner(player.to_string()));
    }

    fn report_war_start(&mut self) {
        self.events.push(GameEvent::WarStart);
    }

    fn report_forfeit(&mut self, player: &str) {
        self.events.push(GameEvent::Forfeit(player.to_string()));
    }

    fn report_final_stats(&mut self, summary: &GameSummary) {
        self.events.push(GameEvent::FinalStats(summary.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::standard_deck;

    #[test]
    fn deck_table_splits_into_rows() {
        let text = format_deck(&standard_deck(), Some("Starting Deck"), 4);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], "Starting Deck");
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with("2♣(0) 3♣(1) "));
        assert!(lines[5].ends_with("A♠(12) "));
    }

    #[test]
    fn console_prints_war_and_winner_lines() {
        let mut r = ConsoleReporter::new(Vec::new());
        let cards = parse_cards("Ks Kd").unwrap();
        r.report_cards_in_play("Ann", cards[0], "Bob", cards[1]);
        r.report_war_start();
        r.report_hand_winner("Bob");
        assert!(r.take_error().is_none());
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.contains("Ann's card K♠(11)\nBob's card K♦(11)\n"));
        assert!(out.contains(" *****  W A R *****"));
        assert!(out.contains("Player Bob won the hand!"));
    }

    #[test]
    fn event_log_keeps_order() {
        let mut log = EventLog::new();
        log.report_war_start();
        log.report_forfeit("Bob");
        assert_eq!(log.events(), &[GameEvent::WarStart, GameEvent::Forfeit("Bob".into())]);
        assert_eq!(log.recent(1), &[GameEvent::Forfeit("Bob".into())]);
        assert_eq!(log.recent(10).len(), 2);
    }
}
