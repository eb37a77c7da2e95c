use crate::{Card, EngineError, Hand, HandId, Shoe};
use serde::{Deserialize, Serialize};

/// Ceiling on hands per holder: one initial deal plus at most one split of
/// a split.
pub const MAX_HANDS: usize = 3;

pub const DEALER_NAME: &str = "Dealer";

/// The capability shared by players and the dealer: owning a bounded,
/// ordered list of hands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Holder {
    pub hands: Vec<Hand>,
    next_id: u32,
}

impl Holder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new hand with the next sequential number, built from the
    /// given cards.
    pub fn add_hand(&mut self, cards: Vec<Card>) -> Result<HandId, EngineError> {
        if self.hands.len() >= MAX_HANDS {
            return Err(EngineError::TooManyHands);
        }
        let id = HandId(self.next_id);
        self.next_id += 1;
        let number = self.hands.len() as u8 + 1;
        self.hands.push(Hand::new(id, number, cards));
        Ok(id)
    }

    pub fn hand(&self, id: HandId) -> Option<&Hand> {
        self.hands.iter().find(|h| h.id() == id)
    }

    pub fn hand_mut(&mut self, id: HandId) -> Option<&mut Hand> {
        self.hands.iter_mut().find(|h| h.id() == id)
    }

    pub fn in_play_ids(&self) -> Vec<HandId> {
        self.hands
            .iter()
            .filter(|h| h.is_in_play())
            .map(|h| h.id())
            .collect()
    }

    fn renumber(&mut self) {
        for (index, hand) in self.hands.iter_mut().enumerate() {
            hand.set_number(index as u8 + 1);
        }
    }
}

/// A holder with a display name and the split capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub holder: Holder,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holder: Holder::new(),
        }
    }

    /// Splits a two-card pair into two hands, each completed with one draw
    /// from the shoe. The original hand is removed, the new hands are
    /// appended, and every hand is renumbered 1..N in list order.
    pub fn split_hand(
        &mut self,
        id: HandId,
        shoe: &mut Shoe,
    ) -> Result<(HandId, HandId), EngineError> {
        let index = self
            .holder
            .hands
            .iter()
            .position(|h| h.id() == id)
            .ok_or(EngineError::InvalidSplit)?;
        if !self.holder.hands[index].can_split() || self.holder.hands.len() >= MAX_HANDS {
            return Err(EngineError::InvalidSplit);
        }

        let first_card = self.holder.hands[index].cards[0];
        let second_card = self.holder.hands[index].cards[1];
        let first_draw = shoe.draw_card()?;
        let second_draw = shoe.draw_card()?;

        self.holder.hands.remove(index);
        let first = self.holder.add_hand(vec![first_card, first_draw])?;
        let second = self.holder.add_hand(vec![second_card, second_draw])?;
        self.holder.renumber();
        Ok((first, second))
    }
}

/// The house. Fixed identity, exactly one hand per round, no split
/// capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dealer {
    pub holder: Holder,
}

impl Dealer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &'static str {
        DEALER_NAME
    }

    pub fn deal_hand(&mut self, cards: Vec<Card>) -> Result<HandId, EngineError> {
        if !self.holder.hands.is_empty() {
            return Err(EngineError::TooManyHands);
        }
        self.holder.add_hand(cards)
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.holder.hands.first()
    }

    pub fn hand_mut(&mut self) -> Option<&mut Hand> {
        self.holder.hands.first_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(values: &[u8]) -> Vec<Card> {
        values
            .iter()
            .map(|v| Card::from_value(*v).unwrap())
            .collect()
    }

    #[test]
    fn test_add_hand_numbers_sequentially() {
        let mut holder = Holder::new();
        holder.add_hand(cards(&[2, 3])).unwrap();
        holder.add_hand(cards(&[4, 5])).unwrap();
        assert_eq!(holder.hands[0].number(), 1);
        assert_eq!(holder.hands[1].number(), 2);
    }

    #[test]
    fn test_fourth_hand_is_rejected() {
        let mut holder = Holder::new();
        for _ in 0..MAX_HANDS {
            holder.add_hand(cards(&[2, 3])).unwrap();
        }
        assert_eq!(
            holder.add_hand(cards(&[2, 3])),
            Err(EngineError::TooManyHands)
        );
        assert_eq!(holder.hands.len(), MAX_HANDS);
    }

    #[test]
    fn test_split_hand_draws_one_card_each() {
        let mut player = Player::new("Ona");
        let id = player.holder.add_hand(cards(&[8, 8])).unwrap();
        let mut shoe = Shoe::stacked(cards(&[3, 4]));

        let (first, second) = player.split_hand(id, &mut shoe).unwrap();

        assert_eq!(player.holder.hands.len(), 2);
        assert_eq!(player.holder.hand(first).unwrap().cards, cards(&[8, 3]));
        assert_eq!(player.holder.hand(second).unwrap().cards, cards(&[8, 4]));
        assert_eq!(player.holder.hand(first).unwrap().score(), 11);
        assert_eq!(player.holder.hand(second).unwrap().score(), 12);
        assert!(player.holder.hand(id).is_none());
        assert!(shoe.is_empty());
    }

    #[test]
    fn test_split_renumbers_contiguously() {
        let mut player = Player::new("Ona");
        player.holder.add_hand(cards(&[9, 7])).unwrap();
        let id = player.holder.add_hand(cards(&[8, 8])).unwrap();
        let mut shoe = Shoe::stacked(cards(&[2, 3]));

        player.split_hand(id, &mut shoe).unwrap();

        let numbers: Vec<u8> = player.holder.hands.iter().map(|h| h.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_split_rejects_non_pair() {
        let mut player = Player::new("Ona");
        let id = player.holder.add_hand(cards(&[8, 9])).unwrap();
        let mut shoe = Shoe::stacked(cards(&[2, 3]));
        assert_eq!(
            player.split_hand(id, &mut shoe),
            Err(EngineError::InvalidSplit)
        );
        assert_eq!(shoe.remaining(), 2);
    }

    #[test]
    fn test_split_rejects_at_hand_cap() {
        let mut player = Player::new("Ona");
        player.holder.add_hand(cards(&[9, 7])).unwrap();
        player.holder.add_hand(cards(&[6, 5])).unwrap();
        let id = player.holder.add_hand(cards(&[8, 8])).unwrap();
        let mut shoe = Shoe::stacked(cards(&[2, 3]));
        assert_eq!(
            player.split_hand(id, &mut shoe),
            Err(EngineError::InvalidSplit)
        );
        assert_eq!(player.holder.hands.len(), 3);
    }

    #[test]
    fn test_split_of_a_split_up_to_cap() {
        let mut player = Player::new("Ona");
        let id = player.holder.add_hand(cards(&[8, 8])).unwrap();
        let mut shoe = Shoe::stacked(cards(&[8, 4, 2, 3]));

        let (first, _) = player.split_hand(id, &mut shoe).unwrap();
        // First new hand drew another 8 and can be split once more.
        let (a, b) = player.split_hand(first, &mut shoe).unwrap();

        assert_eq!(player.holder.hands.len(), 3);
        let numbers: Vec<u8> = player.holder.hands.iter().map(|h| h.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(player.holder.hand(a).unwrap().cards, cards(&[8, 2]));
        assert_eq!(player.holder.hand(b).unwrap().cards, cards(&[8, 3]));
    }

    #[test]
    fn test_dealer_single_hand_only() {
        let mut dealer = Dealer::new();
        dealer.deal_hand(cards(&[10, 6])).unwrap();
        assert_eq!(
            dealer.deal_hand(cards(&[2, 2])),
            Err(EngineError::TooManyHands)
        );
        assert_eq!(dealer.name(), DEALER_NAME);
    }
}
