//! Diamond's turn: draw to 17, with a chance of mischief before every draw.

use log::trace;
use rand::Rng;
use serde::Serialize;

use crate::{
    deck::{Card, Deck},
    error::GameError,
    participant::Participant,
};

pub const DEALER_STANDS_ON: u32 = 17;
pub const CHEAT_CHANCE: f64 = 0.3;
pub const SNEAK_CHANCE: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "card", rename_all = "camelCase")]
pub enum DealerMove {
    /// Mischief roll succeeded.
    Smirk,
    /// Extra card slipped into the hand.
    SneakDraw(Card),
    /// Last card dropped from the hand.
    Discard(Card),
    Draw(Card),
}

/// Plays the dealer's hand until it is worth at least 17. Every move is
/// appended to `moves`, including the ones made before a failed draw.
pub fn play_turn<R: Rng + ?Sized>(
    dealer: &mut Participant,
    deck: &mut Deck,
    rng: &mut R,
    moves: &mut Vec<DealerMove>,
) -> Result<(), GameError> {
    while dealer.value() < DEALER_STANDS_ON {
        cheat(dealer, deck, rng, moves)?;

        let card = deck.draw().ok_or(GameError::DeckExhausted)?;
        dealer.add_card(card);
        moves.push(DealerMove::Draw(card));
    }
    Ok(())
}

fn cheat<R: Rng + ?Sized>(
    dealer: &mut Participant,
    deck: &mut Deck,
    rng: &mut R,
    moves: &mut Vec<DealerMove>,
) -> Result<(), GameError> {
    let roll: f64 = rng.gen();
    trace!("mischief roll {roll:.3}");
    if roll >= CHEAT_CHANCE {
        return Ok(());
    }
    moves.push(DealerMove::Smirk);

    let sneak: f64 = rng.gen();
    trace!("sneak roll {sneak:.3}");
    if sneak < SNEAK_CHANCE && dealer.value() < DEALER_STANDS_ON {
        let card = deck.draw().ok_or(GameError::DeckExhausted)?;
        dealer.add_card(card);
        moves.push(DealerMove::SneakDraw(card));
    } else if let Some(card) = dealer.discard_last() {
        moves.push(DealerMove::Discard(card));
    }
    Ok(())
}
