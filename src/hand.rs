use crate::cards::{parse_cards, Card};
use std::collections::VecDeque;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hand is empty")]
    EmptyHand,
    #[error("not enough cards in hand: need {needed}, have {available}")]
    InsufficientCards { needed: usize, available: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's face-down stack. Cards are drawn from the front and won
/// cards go to the back.
///
/// ```
/// use war_rs::hand::Hand;
///
/// let mut hand: Hand = "As 2c 3d".parse().unwrap();
/// assert_eq!(hand.draw().unwrap().to_string(), "A♠");
/// assert_eq!(hand.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: VecDeque<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards: cards.into() }
    }

    pub fn draw(&mut self) -> Result<Card, HandError> {
        self.cards.pop_front().ok_or(HandError::EmptyHand)
    }

    /// Remove the top `k` cards in order. Leaves the hand untouched on failure.
    pub fn draw_n(&mut self, k: usize) -> Result<Vec<Card>, HandError> {
        if self.cards.len() < k {
            return Err(HandError::InsufficientCards { needed: k, available: self.cards.len() });
        }
        Ok(self.cards.drain(..k).collect())
    }

    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    pub fn drain_all(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Hand::new(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn draw_takes_from_front_until_empty() {
        let mut h = hand("Kh 4s");
        assert_eq!(h.draw().unwrap(), "Kh".parse().unwrap());
        assert_eq!(h.draw().unwrap(), "4s".parse().unwrap());
        assert_eq!(h.draw(), Err(HandError::EmptyHand));
        assert!(h.is_empty());
    }

    #[test]
    fn draw_n_is_all_or_nothing() {
        let mut h = hand("2c 3c");
        assert_eq!(h.draw_n(3), Err(HandError::InsufficientCards { needed: 3, available: 2 }));
        assert_eq!(h.len(), 2);

        let mut h = hand("2c 3c 4c 5c");
        let drawn = h.draw_n(3).unwrap();
        assert_eq!(drawn, parse_cards("2c 3c 4c").unwrap());
        assert_eq!(h.to_vec(), parse_cards("5c").unwrap());
    }

    #[test]
    fn add_cards_appends_in_order() {
        let mut h = hand("9d");
        h.add_cards(parse_cards("Jc Qc").unwrap());
        assert_eq!(h.to_vec(), parse_cards("9d Jc Qc").unwrap());
    }

    #[test]
    fn drain_all_empties_hand() {
        let mut h = hand("9d Td");
        assert_eq!(h.drain_all(), parse_cards("9d Td").unwrap());
        assert_eq!(h.len(), 0);
        assert!(h.drain_all().is_empty());
    }

    #[test]
    fn bad_text_is_rejected() {
        assert!(matches!("Zz".parse::<Hand>(), Err(HandError::CardParse(_))));
    }
}
