use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use war_rs::cards::{compare, Card, Comparison, Face, Suit};
use war_rs::deck::{standard_deck, Deck, DECK_SIZE};

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Club), Just(Suit::Diamond), Just(Suit::Heart), Just(Suit::Spade),]
}

fn any_face() -> impl Strategy<Value = Face> {
    (0usize..13).prop_map(|i| Face::ALL[i])
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_suit(), any_face()).prop_map(|(s, f)| Card::new(s, f))
}

fn as_set(cards: &[Card]) -> HashSet<Card> {
    cards.iter().copied().collect()
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(as_set(deck.as_slice()), as_set(&standard_deck()));
    }

    #[test]
    fn cut_is_a_rotation(seed in any::<u64>(), at in 0usize..=DECK_SIZE) {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let before = deck.as_slice().to_vec();
        deck.cut(at).unwrap();
        let expected: Vec<Card> = before[at..].iter().chain(&before[..at]).copied().collect();
        prop_assert_eq!(deck.as_slice(), expected.as_slice());
    }

    #[test]
    fn compare_is_antisymmetric(a in any_card(), b in any_card()) {
        let forward = compare(a, b);
        let backward = compare(b, a);
        match forward {
            Comparison::FirstHigher => prop_assert_eq!(backward, Comparison::SecondHigher),
            Comparison::SecondHigher => prop_assert_eq!(backward, Comparison::FirstHigher),
            Comparison::Equal => {
                prop_assert_eq!(backward, Comparison::Equal);
                prop_assert_eq!(a.face(), b.face());
            }
        }
        prop_assert_eq!(forward == Comparison::FirstHigher, a.rank() > b.rank());
    }

    #[test]
    fn same_face_always_ties(f in any_face(), s1 in any_suit(), s2 in any_suit()) {
        prop_assert_eq!(compare(Card::new(s1, f), Card::new(s2, f)), Comparison::Equal);
    }
}

#[test]
fn standard_deck_faces_are_monotonic_for_every_suit() {
    let cards = standard_deck();
    for suit in Suit::ALL {
        let ranks: Vec<u8> = cards.iter().filter(|c| c.suit() == suit).map(|c| c.rank()).collect();
        assert_eq!(ranks, (0..13).collect::<Vec<u8>>());
    }
    assert_eq!(as_set(&cards).len(), DECK_SIZE);
}
