use crate::cards::{compare, Card, Comparison};
use crate::deck::{Deck, DeckError};
use crate::hand::Hand;
use crate::report::Reporter;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Cards each player puts face down when a war is declared.
pub const WAR_STAKE: usize = 3;

/// One of the two player positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Seats in drawing order.
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub const fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    NotStarted,
    /// Held only while the deck is split between the hands; `deal` and
    /// `deal_deck` return in `ResolvingHand`.
    Dealing,
    ResolvingHand,
    WarEscalation,
    HandResolved,
    GameOver,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("cannot split {0} cards into two equal hands")]
    UnevenDeck(usize),
    #[error("cards have already been dealt")]
    AlreadyDealt,
    #[error("game is not in progress: {0:?}")]
    NotInProgress(Phase),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// What a single comparison step ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepOutcome {
    /// A clean comparison; `cards` is how many the winner collected.
    HandWon { winner: Seat, cards: usize },
    /// Tie; both stakes are down and the pile holds `pile` cards.
    War { pile: usize },
    /// `loser` could not draw and the game is over.
    Forfeit { loser: Seat },
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) hands_won: u64,
    pub(crate) hands_lost: u64,
    pub(crate) is_winner: bool,
}

impl Player {
    fn new(name: String, hand: Hand) -> Self {
        Self { name, hand, hands_won: 0, hands_lost: 0, is_winner: false }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's face-down cards
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hands_won(&self) -> u64 {
        self.hands_won
    }

    pub fn hands_lost(&self) -> u64 {
        self.hands_lost
    }

    pub fn is_winner(&self) -> bool {
        self.is_winner
    }
}

/// Names plus the two sources of randomness for a match.
///
/// ```
/// use war_rs::game::{Game, GameConfig};
/// use war_rs::report::NullReporter;
///
/// let config = GameConfig::new("Ann", "Bob").with_seed(7).with_cut(12);
/// let game = Game::start(&config, &mut NullReporter).unwrap();
/// assert_eq!(game.players()[0].hand().len(), 26);
/// assert_eq!(game.total_cards(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub names: [String; 2],
    /// Seed for the shuffle and cut RNG; a fresh one is drawn when unset.
    pub seed: Option<u64>,
    /// Fixed cut point; drawn from [`crate::deck::CUT_RANGE`] when unset.
    pub cut: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl GameConfig {
    pub const DEFAULT_NAMES: [&'static str; 2] = ["Player 1", "Player 2"];

    /// Blank names fall back to "Player 1" / "Player 2".
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        let pick = |name: String, fallback: &str| {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        };
        Self {
            names: [
                pick(first.into(), Self::DEFAULT_NAMES[0]),
                pick(second.into(), Self::DEFAULT_NAMES[1]),
            ],
            seed: None,
            cut: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_cut(mut self, cut: usize) -> Self {
        self.cut = Some(cut);
        self
    }

    pub fn rng(&self) -> ChaCha8Rng {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        ChaCha8Rng::seed_from_u64(seed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub name: String,
    pub won: u64,
    pub lost: u64,
    pub cards: usize,
}

/// Final (or running) totals handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub hands_played: u64,
    pub wars: u64,
    pub players: [PlayerStats; 2],
    pub winner: Option<Seat>,
}

impl GameSummary {
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|seat| self.players[seat.index()].name.as_str())
    }
}

/// A two-player game of War.
///
/// Cards live in exactly one place at a time: a player's hand, the face-up
/// `in_play` pair, or the war `pile`.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game {
    pub(crate) players: [Player; 2],
    pub(crate) in_play: Vec<Card>,
    pub(crate) pile: Vec<Card>,
    pub(crate) hands_played: u64,
    pub(crate) wars: u64,
    pub(crate) phase: Phase,
}

impl Game {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            players: [
                Player::new(first.into(), Hand::default()),
                Player::new(second.into(), Hand::default()),
            ],
            in_play: Vec::with_capacity(2),
            pile: Vec::new(),
            hands_played: 0,
            wars: 0,
            phase: Phase::NotStarted,
        }
    }

    /// A game already in progress with the given hands.
    pub fn with_hands(
        first: impl Into<String>,
        first_hand: Hand,
        second: impl Into<String>,
        second_hand: Hand,
    ) -> Self {
        let mut game = Self::new(first, second);
        game.players[0].hand = first_hand;
        game.players[1].hand = second_hand;
        game.phase = Phase::ResolvingHand;
        game
    }

    /// Build a game from `config` and deal it.
    pub fn start(config: &GameConfig, reporter: &mut dyn Reporter) -> Result<Self, GameError> {
        let [first, second] = config.names.clone();
        let mut game = Self::new(first, second);
        let mut rng = config.rng();
        game.deal(&mut rng, config.cut, reporter)?;
        Ok(game)
    }

    /// Shuffle a standard deck with `rng`, cut it and deal it.
    ///
    /// Returns the cut point used.
    pub fn deal<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        cut: Option<usize>,
        reporter: &mut dyn Reporter,
    ) -> Result<usize, GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::AlreadyDealt);
        }
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);
        reporter.report_deck(deck.as_slice(), "Starting Deck, BEFORE Cutting", 4);

        let at = cut.unwrap_or_else(|| Deck::random_cut_point(rng));
        deck.cut(at)?;
        reporter.report_deck(deck.as_slice(), &format!("Starting Deck, cut at card {at}"), 4);
        debug!(cut = at, "deck cut");

        self.distribute(deck, reporter)?;
        Ok(at)
    }

    /// Deal a prepared deck as-is: first half to the first seat.
    pub fn deal_deck(&mut self, deck: Deck, reporter: &mut dyn Reporter) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::AlreadyDealt);
        }
        self.distribute(deck, reporter)
    }

    fn distribute(&mut self, deck: Deck, reporter: &mut dyn Reporter) -> Result<(), GameError> {
        if deck.len() % 2 != 0 {
            return Err(GameError::UnevenDeck(deck.len()));
        }
        self.phase = Phase::Dealing;
        let mut cards = deck.into_cards();
        let second = cards.split_off(cards.len() / 2);
        self.players[0].hand = Hand::new(cards);
        self.players[1].hand = Hand::new(second);
        self.phase = Phase::ResolvingHand;
        debug!(per_player = self.players[0].hand.len(), "cards dealt");
        self.report_hands(reporter);
        Ok(())
    }

    /// Resolve a single comparison, including the war stakes on a tie.
    pub fn step(&mut self, reporter: &mut dyn Reporter) -> Result<StepOutcome, GameError> {
        match self.phase {
            Phase::ResolvingHand | Phase::WarEscalation => {}
            Phase::HandResolved => self.phase = Phase::ResolvingHand,
            other => return Err(GameError::NotInProgress(other)),
        }

        for seat in Seat::BOTH {
            match self.players[seat.index()].hand.draw() {
                Ok(card) => self.in_play.push(card),
                Err(_) => return Ok(self.forfeit(seat, reporter)),
            }
        }
        let (c1, c2) = (self.in_play[0], self.in_play[1]);
        reporter.report_cards_in_play(&self.players[0].name, c1, &self.players[1].name, c2);

        match compare(c1, c2) {
            Comparison::FirstHigher => Ok(self.award_hand(Seat::First, reporter)),
            Comparison::SecondHigher => Ok(self.award_hand(Seat::Second, reporter)),
            Comparison::Equal => {
                self.phase = Phase::WarEscalation;
                self.wars = self.wars.saturating_add(1);
                reporter.report_war_start();
                debug!(rank = c1.rank(), pile = self.pile.len(), "war declared");
                for seat in Seat::BOTH {
                    match self.players[seat.index()].hand.draw_n(WAR_STAKE) {
                        Ok(stake) => self.pile.extend(stake),
                        Err(_) => return Ok(self.forfeit(seat, reporter)),
                    }
                }
                self.pile.append(&mut self.in_play);
                Ok(StepOutcome::War { pile: self.pile.len() })
            }
        }
    }

    /// Step until the current hand is won or the game ends.
    pub fn play_hand(&mut self, reporter: &mut dyn Reporter) -> Result<StepOutcome, GameError> {
        loop {
            let outcome = self.step(reporter)?;
            if !matches!(outcome, StepOutcome::War { .. }) {
                self.report_hands(reporter);
                return Ok(outcome);
            }
        }
    }

    /// Play hands until one player cannot continue.
    ///
    /// There is no hand limit: two hands that keep trading the same cards
    /// can play forever.
    pub fn play(&mut self, reporter: &mut dyn Reporter) -> Result<GameSummary, GameError> {
        while !self.is_over() {
            self.play_hand(reporter)?;
        }
        let summary = self.summary();
        info!(
            hands = summary.hands_played,
            wars = summary.wars,
            winner = summary.winner_name().unwrap_or_default(),
            "game over"
        );
        reporter.report_final_stats(&summary);
        Ok(summary)
    }

    fn award_hand(&mut self, winner: Seat, reporter: &mut dyn Reporter) -> StepOutcome {
        let loser = winner.opponent();
        let (w, l) = (winner.index(), loser.index());
        self.players[w].hands_won = self.players[w].hands_won.saturating_add(1);
        self.players[l].hands_lost = self.players[l].hands_lost.saturating_add(1);

        let cards = self.in_play.len() + self.pile.len();
        let hand = &mut self.players[winner.index()].hand;
        hand.add_cards(self.in_play.drain(..));
        hand.add_cards(self.pile.drain(..));

        self.hands_played = self.hands_played.saturating_add(1);
        self.phase = Phase::HandResolved;
        debug!(winner = %self.players[winner.index()].name, cards, "hand won");
        reporter.report_hand_winner(&self.players[winner.index()].name);
        StepOutcome::HandWon { winner, cards }
    }

    fn forfeit(&mut self, loser: Seat, reporter: &mut dyn Reporter) -> StepOutcome {
        let winner = loser.opponent();
        self.players[winner.index()].is_winner = true;

        self.pile.append(&mut self.in_play);
        let remnant = self.players[loser.index()].hand.drain_all();
        let hand = &mut self.players[winner.index()].hand;
        hand.add_cards(self.pile.drain(..));
        hand.add_cards(remnant);

        self.phase = Phase::GameOver;
        info!(loser = %self.players[loser.index()].name, "player forfeits");
        reporter.report_forfeit(&self.players[loser.index()].name);
        StepOutcome::Forfeit { loser }
    }

    fn report_hands(&self, reporter: &mut dyn Reporter) {
        for p in &self.players {
            reporter.report_hand(&p.name, &p.hand.to_vec(), p.hand.len());
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Hands settled by a clean comparison; the forfeited hand is not counted.
    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    pub fn wars(&self) -> u64 {
        self.wars
    }

    /// Face-up cards of the comparison in progress.
    pub fn in_play(&self) -> &[Card] {
        &self.in_play
    }

    /// War stakes waiting for the next clean comparison.
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Every card the game holds, wherever it sits.
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum::<usize>()
            + self.in_play.len()
            + self.pile.len()
    }

    pub fn winner(&self) -> Option<Seat> {
        Seat::BOTH.into_iter().find(|s| self.players[s.index()].is_winner)
    }

    pub fn summary(&self) -> GameSummary {
        let stats = |p: &Player| PlayerStats {
            name: p.name.clone(),
            won: p.hands_won,
            lost: p.hands_lost,
            cards: p.hand.len(),
        };
        GameSummary {
            hands_played: self.hands_played,
            wars: self.wars,
            players: [stats(&self.players[0]), stats(&self.players[1])],
            winner: self.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::report::NullReporter;

    fn game(first: &str, second: &str) -> Game {
        Game::with_hands("A", first.parse().unwrap(), "B", second.parse().unwrap())
    }

    #[test]
    fn clean_win_moves_both_cards_to_winner() {
        let mut g = game("As 2c", "3h 2d");
        let outcome = g.step(&mut NullReporter).unwrap();
        assert_eq!(outcome, StepOutcome::HandWon { winner: Seat::First, cards: 2 });
        assert_eq!(g.players[0].hand.to_vec(), parse_cards("2c As 3h").unwrap());
        assert_eq!(g.players[1].hand.to_vec(), parse_cards("2d").unwrap());
        assert_eq!(g.phase(), Phase::HandResolved);
        assert_eq!(g.hands_played(), 1);
    }

    #[test]
    fn war_takes_four_from_each() {
        let mut g = game("7c 2c 3c 4c Ac", "7d 2d 3d 4d Kd");
        let outcome = g.step(&mut NullReporter).unwrap();
        assert_eq!(outcome, StepOutcome::War { pile: 8 });
        assert_eq!(g.players[0].hand.len(), 1);
        assert_eq!(g.players[1].hand.len(), 1);
        assert!(g.in_play().is_empty());
        assert_eq!(g.phase(), Phase::WarEscalation);
        assert_eq!(g.hands_played(), 0);
        assert_eq!(g.wars(), 1);
    }

    #[test]
    fn step_before_deal_is_rejected() {
        let mut g = Game::new("A", "B");
        assert_eq!(
            g.step(&mut NullReporter),
            Err(GameError::NotInProgress(Phase::NotStarted))
        );
    }

    #[test]
    fn dealing_twice_is_rejected() {
        let mut g = Game::new("A", "B");
        g.deal_deck(Deck::standard(), &mut NullReporter).unwrap();
        assert_eq!(
            g.deal_deck(Deck::standard(), &mut NullReporter),
            Err(GameError::AlreadyDealt)
        );
    }

    #[test]
    fn odd_deck_is_rejected() {
        let mut g = Game::new("A", "B");
        let deck = Deck::from_cards(parse_cards("2c 3c 4c").unwrap());
        assert_eq!(g.deal_deck(deck, &mut NullReporter), Err(GameError::UnevenDeck(3)));
        assert_eq!(g.phase(), Phase::NotStarted);
    }

    #[test]
    fn dealing_is_never_left_behind() {
        let mut g = Game::new("A", "B");
        g.deal_deck(Deck::standard(), &mut NullReporter).unwrap();
        assert_eq!(g.phase(), Phase::ResolvingHand);

        let mut g = Game::new("A", "B");
        let err = g.deal(&mut ChaCha8Rng::seed_from_u64(3), Some(60), &mut NullReporter);
        assert!(matches!(err, Err(GameError::Deck(_))));
        assert_eq!(g.phase(), Phase::NotStarted);
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut g = game("As 2c", "3h 2d");
        g.hands_played = u64::MAX;
        g.players[0].hands_won = u64::MAX;
        g.players[1].hands_lost = u64::MAX;
        let outcome = g.step(&mut NullReporter).unwrap();
        assert_eq!(outcome, StepOutcome::HandWon { winner: Seat::First, cards: 2 });
        assert_eq!(g.hands_played(), u64::MAX);
        assert_eq!(g.players[0].hands_won(), u64::MAX);
        assert_eq!(g.players[1].hands_lost(), u64::MAX);

        let mut g = game("5c 6c 7c 8c 9c", "5d 6d 7d 8d 9d");
        g.wars = u64::MAX;
        assert_eq!(g.step(&mut NullReporter).unwrap(), StepOutcome::War { pile: 8 });
        assert_eq!(g.wars(), u64::MAX);
    }

    #[test]
    fn blank_names_fall_back() {
        let c = GameConfig::new("  ", "Bob");
        assert_eq!(c.names, ["Player 1".to_string(), "Bob".to_string()]);
    }
}
