use crate::Card;
use serde::{Deserialize, Serialize};

/// Stable identity of a hand within a round. Numbers shift when a split
/// renumbers a player's hands; ids never do, which is what the turn
/// work-queue tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandStatus {
    InPlay,
    Standing,
    Busted,
}

/// Score a set of cards: all non-ace ranks are summed first, then each ace
/// adds 11 if that keeps the running total at or below 21, otherwise 1.
///
/// The per-ace decision is greedy, not a global re-optimization. With a ten
/// and two aces the first ace fits as 11 and the second busts the hand at
/// 22, even though valuing both as 1 would give 12. This matches the
/// reference behavior exactly.
pub fn calculate_score(cards: &[Card]) -> u8 {
    let mut total: u16 = cards
        .iter()
        .filter(|c| !c.is_ace())
        .map(|c| u16::from(c.value()))
        .sum();
    for _ in cards.iter().filter(|c| c.is_ace()) {
        total += if total + 11 <= 21 { 11 } else { 1 };
    }
    // Anything past 255 is deep in bust territory; clamp rather than wrap.
    u8::try_from(total).unwrap_or(u8::MAX)
}

pub fn is_busted(cards: &[Card]) -> bool {
    calculate_score(cards) > 21
}

/// Two cards can be split when their ranks are equal. Two aces qualify, as
/// do any two ten-value cards.
pub fn can_split_cards(first: Card, second: Card) -> bool {
    first == second
}

/// An ordered sequence of drawn cards belonging to one holder slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub status: HandStatus,
    id: HandId,
    number: u8,
}

impl Hand {
    pub(crate) fn new(id: HandId, number: u8, cards: Vec<Card>) -> Self {
        Self {
            cards,
            status: HandStatus::InPlay,
            id,
            number,
        }
    }

    pub fn id(&self) -> HandId {
        self.id
    }

    /// 1-based slot index among the holder's hands. Renumbered after a
    /// split.
    pub fn number(&self) -> u8 {
        self.number
    }

    pub(crate) fn set_number(&mut self, number: u8) {
        self.number = number;
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Recomputed on demand, never cached.
    pub fn score(&self) -> u8 {
        calculate_score(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && can_split_cards(self.cards[0], self.cards[1])
    }

    pub fn is_in_play(&self) -> bool {
        self.status == HandStatus::InPlay
    }
}
