use crate::cards::{Card, Face, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Range the engine draws its cut point from.
pub const CUT_RANGE: RangeInclusive<usize> = 10..=24;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cut point {at} is past the end of a {len}-card deck")]
    CutOutOfRange { at: usize, len: usize },
}

/// The 52 cards in their pre-shuffle order: suit-major, face ascending.
///
/// ```
/// use war_rs::deck::standard_deck;
///
/// let cards = standard_deck();
/// assert_eq!(cards.len(), 52);
/// assert_eq!(cards[0].to_string(), "2♣");
/// assert_eq!(cards[51].to_string(), "A♠");
/// ```
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for face in Face::ALL {
            cards.push(Card::new(suit, face));
        }
    }
    cards
}

/// An ordered deck, alive only between construction and dealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        Self { cards: standard_deck() }
    }

    /// Wrap an arbitrary card sequence, e.g. a fixed deck for a test.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Move the first `at` cards, in order, beneath the rest.
    ///
    /// ```
    /// use war_rs::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// let before = deck.as_slice().to_vec();
    /// deck.cut(10).unwrap();
    /// assert_eq!(deck.as_slice()[0], before[10]);
    /// assert_eq!(deck.as_slice()[42], before[0]);
    /// ```
    pub fn cut(&mut self, at: usize) -> Result<(), DeckError> {
        if at > self.cards.len() {
            return Err(DeckError::CutOutOfRange { at, len: self.cards.len() });
        }
        self.cards.rotate_left(at);
        Ok(())
    }

    /// Draw a cut point from [`CUT_RANGE`].
    pub fn random_cut_point<R: Rng + ?Sized>(rng: &mut R) -> usize {
        rng.random_range(CUT_RANGE)
    }
}
