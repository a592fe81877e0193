use std::fmt;
use std::str::FromStr;

/// The four suits. Suit never takes part in card comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    pub const fn glyph(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamond | Suit::Heart)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "club" | "clubs" => Ok(Suit::Club),
            "diamond" | "diamonds" => Ok(Suit::Diamond),
            "heart" | "hearts" => Ok(Suit::Heart),
            "spade" | "spades" => Ok(Suit::Spade),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::Club),
            'd' | '♦' => Ok(Suit::Diamond),
            'h' | '♥' => Ok(Suit::Heart),
            's' | '♠' => Ok(Suit::Spade),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// Card faces from Two (low) to Ace (high).
///
/// The discriminant is the War rank: Two is 0, Ace is 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Face {
    pub const ALL: [Face; 13] = [
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
        Face::Ace,
    ];

    const COURT: &'static str = "JQKA";

    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
            Face::Ace => "A",
        }
    }

    /// Numeric faces 2 through 10.
    pub fn from_number(n: u8) -> Option<Face> {
        match n {
            2..=10 => Face::ALL.get(usize::from(n - 2)).copied(),
            _ => None,
        }
    }

    /// Court faces and the ace, by abbreviation (`J`, `Q`, `K`, `A`).
    pub fn from_abbrev(abbrev: char) -> Option<Face> {
        let idx = Self::COURT.find(abbrev)?;
        Face::ALL.get(idx + 9).copied()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FaceParseError {
    #[error("invalid face: '{0}'")]
    Invalid(String),
}

impl FromStr for Face {
    type Err = FaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let face = match upper.as_str() {
            "T" => Some(Face::Ten),
            "J" | "Q" | "K" | "A" => upper.chars().next().and_then(Face::from_abbrev),
            digits => digits.parse::<u8>().ok().and_then(Face::from_number),
        };
        face.ok_or_else(|| FaceParseError::Invalid(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid card spec: {0}")]
    InvalidCardSpec(String),
}

/// A playing card: suit + face. Immutable once built.
///
/// ```
/// use war_rs::cards::{Card, Face, Suit};
///
/// let card = Card::new(Suit::Spade, Face::Ace);
/// assert_eq!(card.rank(), 12);
/// assert_eq!(card.to_string(), "A♠");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    face: Face,
}

impl Card {
    pub const fn new(suit: Suit, face: Face) -> Self {
        Self { suit, face }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn face(self) -> Face {
        self.face
    }

    pub const fn rank(self) -> u8 {
        self.face.rank()
    }

    /// Card label with its rank, e.g. `10♣(8)`.
    pub fn detailed(self) -> String {
        format!("{self}({})", self.rank())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

/// Build a numeric card (2 through 10).
///
/// ```
/// use war_rs::cards::{make_numeric_card, Suit};
///
/// assert_eq!(make_numeric_card(Suit::Club, 10).unwrap().rank(), 8);
/// assert!(make_numeric_card(Suit::Club, 11).is_err());
/// ```
pub fn make_numeric_card(suit: Suit, n: u8) -> Result<Card, CardError> {
    Face::from_number(n)
        .map(|face| Card::new(suit, face))
        .ok_or_else(|| CardError::InvalidCardSpec(format!("numeric card {n}")))
}

/// Build a court card or ace from its abbreviation.
pub fn make_face_card(suit: Suit, abbrev: char) -> Result<Card, CardError> {
    Face::from_abbrev(abbrev)
        .map(|face| Card::new(suit, face))
        .ok_or_else(|| CardError::InvalidCardSpec(format!("face card '{abbrev}'")))
}

/// Outcome of comparing two cards by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    FirstHigher,
    SecondHigher,
    Equal,
}

/// Compare two cards on rank alone.
pub fn compare(first: Card, second: Card) -> Comparison {
    match first.rank().cmp(&second.rank()) {
        std::cmp::Ordering::Greater => Comparison::FirstHigher,
        std::cmp::Ordering::Less => Comparison::SecondHigher,
        std::cmp::Ordering::Equal => Comparison::Equal,
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Face(#[from] FaceParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // face is everything but the last char; suit is the last char
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        if split == 0 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let face = Face::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(suit, face))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use war_rs::cards::{parse_cards, Card, Face, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Suit::Spade, Face::Ace));
/// assert_eq!(cards[2], Card::new(Suit::Club, Face::Ten));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
