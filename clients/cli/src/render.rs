use twentyone::{Card, DealerSnapshot, HandOutcome, HandSnapshot, RoundSummary, DEALER_NAME};

pub fn cards_line(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_display)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn dealer_line(view: &DealerSnapshot) -> String {
    let cards = view
        .cards
        .iter()
        .map(|c| c.as_ref().map_or("??", Card::to_display))
        .collect::<Vec<_>>()
        .join(" ");
    match view.score {
        Some(score) => format!("{DEALER_NAME}: {cards} ({score})"),
        None => format!("{DEALER_NAME}: {cards}"),
    }
}

pub fn hand_line(player: &str, hand: &HandSnapshot) -> String {
    format!(
        "{player}, hand {}: {} ({})",
        hand.number,
        cards_line(&hand.cards),
        hand.score
    )
}

pub fn outcome_word(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Won => "won",
        HandOutcome::Lost => "lost",
        HandOutcome::Finished => "finished",
    }
}

pub fn print_summary(summary: &RoundSummary) {
    println!();
    println!(
        "{DEALER_NAME}: {} ({})",
        cards_line(&summary.dealer_cards),
        summary.dealer_score
    );
    for hand in &summary.hands {
        println!(
            "{}, hand {}: {} ({}) - {}",
            hand.player,
            hand.number,
            cards_line(&hand.cards),
            hand.score,
            outcome_word(hand.outcome)
        );
    }
    if summary.dealer_wins_overall {
        println!("The dealer wins the table.");
    } else {
        println!("The dealer loses the table.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twentyone::HandStatus;

    #[test]
    fn test_cards_line() {
        assert_eq!(
            cards_line(&[Card::Ace, Card::Ten, Card::Three]),
            "A 10 3"
        );
    }

    #[test]
    fn test_dealer_line_concealed() {
        let view = DealerSnapshot {
            cards: vec![Some(Card::Ten), None],
            score: None,
        };
        assert_eq!(dealer_line(&view), "Dealer: 10 ??");
    }

    #[test]
    fn test_dealer_line_revealed() {
        let view = DealerSnapshot {
            cards: vec![Some(Card::Ten), Some(Card::Seven)],
            score: Some(17),
        };
        assert_eq!(dealer_line(&view), "Dealer: 10 7 (17)");
    }

    #[test]
    fn test_hand_line() {
        let hand = HandSnapshot {
            number: 2,
            cards: vec![Card::Eight, Card::Three],
            score: 11,
            status: HandStatus::InPlay,
        };
        assert_eq!(hand_line("Player 1", &hand), "Player 1, hand 2: 8 3 (11)");
    }
}
