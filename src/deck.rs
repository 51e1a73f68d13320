use std::fmt;

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

/// Labels and weights of a standard suit, in enumeration order.
pub const LABELS: [(&str, u8); 16] = [
    ("N", 1),
    ("A", 1),
    ("E", 1),
    ("O", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
    ("J", 10),
    ("Q", 10),
    ("K", 10),
];

/// Labels eligible for the 10-point reduction.
pub const SOFT_LABELS: [&str; 4] = ["N", "A", "E", "O"];

pub const WILDCARD_LABEL: &str = "Tarot Card";

pub const DECK_SIZE: usize = Suit::STANDARD.len() * LABELS.len() + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Suit {
    FivePointedStar,
    FourPointedStar,
    UpsideDownSpade,
    X,
    Joker,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [
        Suit::FivePointedStar,
        Suit::FourPointedStar,
        Suit::UpsideDownSpade,
        Suit::X,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::FivePointedStar => "5-Pointed Star",
            Suit::FourPointedStar => "4-Pointed Star",
            Suit::UpsideDownSpade => "Upside-Down Spade",
            Suit::X => "X",
            Suit::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Card {
    pub suit: Suit,
    pub label: &'static str,
    pub value: u8,
}

impl Card {
    /// Callers pass labels taken from `LABELS`.
    pub(crate) fn new(suit: Suit, label: &'static str) -> Self {
        let value = LABELS
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| *v)
            .unwrap_or(0);
        Card { suit, label, value }
    }

    /// Looks up a standard-suit card by label. `None` for the Joker suit or
    /// a label the deck does not carry.
    pub fn standard(suit: Suit, label: &str) -> Option<Self> {
        if suit == Suit::Joker {
            return None;
        }
        LABELS
            .iter()
            .find(|(l, _)| *l == label)
            .map(|&(label, value)| Card { suit, label, value })
    }

    pub fn wildcard() -> Self {
        Card {
            suit: Suit::Joker,
            label: WILDCARD_LABEL,
            value: 0,
        }
    }

    pub fn is_soft(&self) -> bool {
        SOFT_LABELS.contains(&self.label)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.label, self.suit)
    }
}

/// Draw pile for a single round. Cards are taken from the end.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck in enumeration order: suit-major, label-minor, wildcard last.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::STANDARD {
            for (label, _) in LABELS {
                cards.push(Card::new(suit, label));
            }
        }
        cards.push(Card::wildcard());
        Deck { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        deck
    }

    /// Stacked deck. The last card of `cards` is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}
