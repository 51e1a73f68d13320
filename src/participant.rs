use serde::Serialize;

use crate::{deck::Card, hand};

/// Whole dollars.
pub type Chips = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Bankroll {
    Limited(Chips),
    /// The house never runs out.
    Unlimited,
}

impl Bankroll {
    pub fn available(&self) -> Chips {
        match self {
            Bankroll::Limited(chips) => *chips,
            Bankroll::Unlimited => Chips::MAX,
        }
    }

    pub fn is_broke(&self) -> bool {
        matches!(self, Bankroll::Limited(0))
    }

    pub(crate) fn credit(&mut self, amount: Chips) {
        if let Bankroll::Limited(chips) = self {
            *chips = chips.saturating_add(amount);
        }
    }

    pub(crate) fn debit(&mut self, amount: Chips) {
        if let Bankroll::Limited(chips) = self {
            *chips = chips.saturating_sub(amount);
        }
    }
}

#[derive(Clone, Debug)]
pub struct Participant {
    name: String,
    hand: Vec<Card>,
    bankroll: Bankroll,
}

impl Participant {
    pub fn player(name: &str, chips: Chips) -> Self {
        Participant {
            name: name.to_string(),
            hand: Vec::new(),
            bankroll: Bankroll::Limited(chips),
        }
    }

    pub fn dealer(name: &str) -> Self {
        Participant {
            name: name.to_string(),
            hand: Vec::new(),
            bankroll: Bankroll::Unlimited,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn first_card(&self) -> Option<&Card> {
        self.hand.first()
    }

    pub fn bankroll(&self) -> Bankroll {
        self.bankroll
    }

    pub(crate) fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes the most recently added card.
    pub fn discard_last(&mut self) -> Option<Card> {
        self.hand.pop()
    }

    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }

    pub fn value(&self) -> u32 {
        hand::score(&self.hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Suit;

    #[test]
    fn test_hand_lifecycle() {
        let mut player = Participant::player("You", 100);
        player.add_card(Card::new(Suit::X, "K"));
        player.add_card(Card::new(Suit::X, "7"));
        assert_eq!(player.value(), 17);
        assert_eq!(player.first_card(), Some(&Card::new(Suit::X, "K")));

        assert_eq!(player.discard_last(), Some(Card::new(Suit::X, "7")));
        assert_eq!(player.value(), 10);

        player.reset_hand();
        assert!(player.hand().is_empty());
        assert_eq!(player.value(), 0);
        assert_eq!(player.discard_last(), None);
    }

    #[test]
    fn test_limited_bankroll_never_negative() {
        let mut bankroll = Bankroll::Limited(30);
        bankroll.debit(50);
        assert_eq!(bankroll, Bankroll::Limited(0));
        assert!(bankroll.is_broke());
        bankroll.credit(15);
        assert_eq!(bankroll.available(), 15);
    }

    #[test]
    fn test_dealer_bankroll_is_unlimited() {
        let mut dealer = Participant::dealer("Diamond");
        dealer.bankroll_mut().debit(1_000_000);
        assert_eq!(dealer.bankroll(), Bankroll::Unlimited);
        assert!(!dealer.bankroll().is_broke());
    }
}
