use crate::{Card, EngineError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Copies of each rank Ace through Nine at fill time.
pub const LOW_RANK_COPIES: usize = 25;
/// Copies of ten-value cards at fill time.
pub const TEN_COPIES: usize = 96;
/// Total cards in a freshly filled shoe.
pub const SHOE_SIZE: usize = 9 * LOW_RANK_COPIES + TEN_COPIES;

/// The shared card source. The composition is deliberately not a standard
/// multi-deck shoe: aces get the same count as ranks 2..9 and ten-value
/// cards are heavily overrepresented. House rules, reproduced as found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// A filled, shuffled shoe using the given rng.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut shoe = Self {
            cards: Vec::with_capacity(SHOE_SIZE),
        };
        shoe.fill();
        shoe.shuffle_in_place(rng);
        shoe
    }

    /// Deterministic shoe for reproducible deals.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn from_entropy() -> Self {
        Self::shuffled(&mut rand::thread_rng())
    }

    /// A shoe that yields exactly `cards`, in the listed order. Used by
    /// tests and rigged demos.
    pub fn stacked(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    /// Resets to the canonical composition: 25 copies of each rank
    /// Ace..Nine plus 96 ten-value cards. Order is unspecified until the
    /// next shuffle.
    pub fn fill(&mut self) {
        self.cards.clear();
        for card in Card::ALL {
            let copies = if card == Card::Ten {
                TEN_COPIES
            } else {
                LOW_RANK_COPIES
            };
            for _ in 0..copies {
                self.cards.push(card);
            }
        }
    }

    pub fn shuffle_in_place<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn draw_card(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::ShoeEmpty)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_shoe_size() {
        let shoe = Shoe::seeded(0);
        assert_eq!(shoe.remaining(), SHOE_SIZE);
        assert_eq!(SHOE_SIZE, 321);
    }

    #[test]
    fn test_fill_composition() {
        let mut shoe = Shoe::seeded(7);
        let mut counts = [0usize; 10];
        while let Ok(card) = shoe.draw_card() {
            counts[card.value() as usize - 1] += 1;
        }
        for count in &counts[..9] {
            assert_eq!(*count, LOW_RANK_COPIES);
        }
        assert_eq!(counts[9], TEN_COPIES);
    }

    #[test]
    fn test_draw_shrinks_by_one_and_conserves_total() {
        let mut shoe = Shoe::seeded(42);
        let mut drawn = 0;
        for _ in 0..SHOE_SIZE {
            shoe.draw_card().unwrap();
            drawn += 1;
            assert_eq!(drawn + shoe.remaining(), SHOE_SIZE);
        }
        assert!(shoe.is_empty());
    }

    #[test]
    fn test_draw_from_empty_shoe_fails() {
        let mut shoe = Shoe::stacked(vec![Card::Five]);
        assert_eq!(shoe.draw_card(), Ok(Card::Five));
        assert_eq!(shoe.draw_card(), Err(EngineError::ShoeEmpty));
    }

    #[test]
    fn test_stacked_draw_order() {
        let mut shoe = Shoe::stacked(vec![Card::Ace, Card::Ten, Card::Three]);
        assert_eq!(shoe.draw_card(), Ok(Card::Ace));
        assert_eq!(shoe.draw_card(), Ok(Card::Ten));
        assert_eq!(shoe.draw_card(), Ok(Card::Three));
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let mut a = Shoe::seeded(42);
        let mut b = Shoe::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.draw_card(), b.draw_card());
        }
    }
}
