use crate::deck::Card;

pub const BUST_LIMIT: u32 = 21;

/// Best total for a hand. Soft cards count 1; while the total is over 21,
/// 10 is taken off per soft card still available.
pub fn score(hand: &[Card]) -> u32 {
    let mut total = 0;
    let mut soft = 0;

    for card in hand {
        total += u32::from(card.value);
        if card.is_soft() { soft += 1; }
    }

    while total > BUST_LIMIT && soft > 0 {
        total -= 10;
        soft -= 1;
    }

    total
}

pub fn is_bust(value: u32) -> bool {
    value > BUST_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Suit;

    fn cards(labels: &[&'static str]) -> Vec<Card> {
        labels.iter().map(|l| Card::new(Suit::X, *l)).collect()
    }

    #[test]
    fn test_empty_hand_is_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn test_soft_cards_count_one() {
        assert_eq!(score(&cards(&["N", "A"])), 2);
    }

    #[test]
    fn test_reduction_stops_once_under_limit() {
        // 4 + 20 = 24, one reduction brings it to 14
        assert_eq!(score(&cards(&["N", "A", "E", "O", "10", "10"])), 14);
    }

    #[test]
    fn test_no_reduction_without_soft_cards() {
        assert_eq!(score(&cards(&["K", "Q", "3"])), 23);
        assert!(is_bust(23));
        assert!(!is_bust(21));
    }

    #[test]
    fn test_wildcard_adds_nothing() {
        let mut hand = cards(&["K", "9"]);
        hand.push(Card::wildcard());
        assert_eq!(score(&hand), 19);
    }
}
