use serde::{Deserialize, Serialize};
use std::fmt;

/// A card rank. No suit is modeled; `Ten` stands for every ten-value card
/// (ten, jack, queen, king alike).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl Card {
    pub const ALL: [Card; 10] = [
        Card::Ace,
        Card::Two,
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Six,
        Card::Seven,
        Card::Eight,
        Card::Nine,
        Card::Ten,
    ];

    /// Hard rank value in [1, 10]. The soft value of an ace is a scoring
    /// concern, not a card property.
    pub fn value(&self) -> u8 {
        match self {
            Card::Ace => 1,
            Card::Two => 2,
            Card::Three => 3,
            Card::Four => 4,
            Card::Five => 5,
            Card::Six => 6,
            Card::Seven => 7,
            Card::Eight => 8,
            Card::Nine => 9,
            Card::Ten => 10,
        }
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, Card::Ace)
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Card::Ace),
            2 => Some(Card::Two),
            3 => Some(Card::Three),
            4 => Some(Card::Four),
            5 => Some(Card::Five),
            6 => Some(Card::Six),
            7 => Some(Card::Seven),
            8 => Some(Card::Eight),
            9 => Some(Card::Nine),
            10 => Some(Card::Ten),
            _ => None,
        }
    }

    pub fn to_display(&self) -> &'static str {
        match self {
            Card::Ace => "A",
            Card::Two => "2",
            Card::Three => "3",
            Card::Four => "4",
            Card::Five => "5",
            Card::Six => "6",
            Card::Seven => "7",
            Card::Eight => "8",
            Card::Nine => "9",
            Card::Ten => "10",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trips_through_from_value() {
        for card in Card::ALL {
            assert_eq!(Card::from_value(card.value()), Some(card));
        }
    }

    #[test]
    fn test_from_value_rejects_out_of_range() {
        assert_eq!(Card::from_value(0), None);
        assert_eq!(Card::from_value(11), None);
    }

    #[test]
    fn test_ace_is_ace() {
        assert!(Card::Ace.is_ace());
        assert!(!Card::Ten.is_ace());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::Ace.to_string(), "A");
        assert_eq!(Card::Seven.to_string(), "7");
        assert_eq!(Card::Ten.to_string(), "10");
    }
}
