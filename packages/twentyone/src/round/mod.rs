use crate::{Card, Dealer, EngineError, Hand, HandId, HandStatus, Player, Shoe};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Current phase of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Dealing,
    PlayerTurns,
    DealerTurn,
    Resolved,
}

/// How the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundReason {
    /// Dealer's two dealt cards scored exactly 21; no player turn ran.
    DealerBlackjack,
    DealerBusted,
    NormalEnd,
}

/// A player's choice for the hand currently in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
    Split,
}

/// What an applied action did to the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A card was drawn and the hand stays in play.
    CardDrawn(Card),
    /// The drawn card pushed the hand past 21.
    Busted(Card),
    Stood,
    SplitInto(HandId, HandId),
}

/// Outcome of a single player hand at resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    Won,
    Lost,
    /// Non-win: the hand survived but did not beat the dealer. Ties land
    /// here too, since no wagering exists.
    Finished,
}

/// Read-only view of one hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandSnapshot {
    pub number: u8,
    pub cards: Vec<Card>,
    pub score: u8,
    pub status: HandStatus,
}

impl From<&Hand> for HandSnapshot {
    fn from(hand: &Hand) -> Self {
        Self {
            number: hand.number(),
            cards: hand.cards.clone(),
            score: hand.score(),
            status: hand.status,
        }
    }
}

/// The hand currently awaiting an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnSnapshot {
    pub player: String,
    pub hand: HandSnapshot,
}

/// Dealer's hand as the table sees it. While concealed, only the first card
/// is visible and no score is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealerSnapshot {
    pub cards: Vec<Option<Card>>,
    pub score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandResult {
    pub player: String,
    pub number: u8,
    pub cards: Vec<Card>,
    pub score: u8,
    pub outcome: HandOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub reason: RoundReason,
    pub dealer_cards: Vec<Card>,
    pub dealer_score: u8,
    /// The table-level verdict: dealer wins iff it did not bust and no
    /// player hand's raw score exceeds its own. Computed independently of
    /// the per-hand outcomes; a busted 25 still counts as "exceeding" here.
    pub dealer_wins_overall: bool,
    pub hands: Vec<HandResult>,
}

/// One round of play: setup, per-player turns, dealer policy, resolution.
/// The shoe is owned and threaded through every draw; there is no ambient
/// randomness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    shoe: Shoe,
    players: Vec<Player>,
    dealer: Dealer,
    phase: RoundPhase,
    reason: Option<RoundReason>,
    current_player: usize,
    pending: VecDeque<HandId>,
    turn: Option<(usize, HandId)>,
}

impl Round {
    pub fn new<I, S>(shoe: Shoe, player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            shoe,
            players: player_names.into_iter().map(Player::new).collect(),
            dealer: Dealer::new(),
            phase: RoundPhase::Dealing,
            reason: None,
            current_player: 0,
            pending: VecDeque::new(),
            turn: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn reason(&self) -> Option<RoundReason> {
        self.reason
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Deals two cards to every player and then two to the dealer. If the
    /// dealer's dealt hand scores exactly 21 the round resolves immediately
    /// as a dealer blackjack and no player turn ever runs.
    pub fn deal(&mut self) -> Result<(), EngineError> {
        if self.phase != RoundPhase::Dealing {
            return Err(EngineError::OutOfTurn);
        }

        for player in &mut self.players {
            let first = self.shoe.draw_card()?;
            let second = self.shoe.draw_card()?;
            player.holder.add_hand(vec![first, second])?;
        }
        let first = self.shoe.draw_card()?;
        let second = self.shoe.draw_card()?;
        self.dealer.deal_hand(vec![first, second])?;

        let dealer_hand = self.dealer.hand().ok_or(EngineError::OutOfTurn)?;
        if dealer_hand.cards.len() == 2 && dealer_hand.score() == 21 {
            self.reason = Some(RoundReason::DealerBlackjack);
            self.phase = RoundPhase::Resolved;
            return Ok(());
        }

        self.phase = RoundPhase::PlayerTurns;
        self.current_player = 0;
        self.pending = self
            .players
            .first()
            .map(|p| p.holder.in_play_ids().into())
            .unwrap_or_default();
        self.advance_turn();
        Ok(())
    }

    /// The hand currently awaiting an action, if any.
    pub fn current_turn(&self) -> Option<TurnSnapshot> {
        let (player_index, id) = self.turn?;
        let player = self.players.get(player_index)?;
        let hand = player.holder.hand(id)?;
        Some(TurnSnapshot {
            player: player.name.clone(),
            hand: HandSnapshot::from(hand),
        })
    }

    /// Applies an action to the current hand. `InvalidSplit` is recoverable:
    /// the hand stays in play and the caller is expected to reprompt.
    pub fn play(&mut self, action: Action) -> Result<ActionOutcome, EngineError> {
        if self.phase != RoundPhase::PlayerTurns {
            return Err(EngineError::OutOfTurn);
        }
        let (player_index, id) = self.turn.ok_or(EngineError::OutOfTurn)?;

        match action {
            Action::Hit => {
                let card = self.shoe.draw_card()?;
                let hand = self.players[player_index]
                    .holder
                    .hand_mut(id)
                    .ok_or(EngineError::OutOfTurn)?;
                hand.add_card(card);
                if hand.is_busted() {
                    hand.status = HandStatus::Busted;
                    self.advance_turn();
                    Ok(ActionOutcome::Busted(card))
                } else {
                    Ok(ActionOutcome::CardDrawn(card))
                }
            }
            Action::Stand => {
                let hand = self.players[player_index]
                    .holder
                    .hand_mut(id)
                    .ok_or(EngineError::OutOfTurn)?;
                hand.status = HandStatus::Standing;
                self.advance_turn();
                Ok(ActionOutcome::Stood)
            }
            Action::Split => {
                let (first, second) =
                    self.players[player_index].split_hand(id, &mut self.shoe)?;
                // The new hands join the back of this player's queue and are
                // played within the same turn pass.
                self.pending.push_back(first);
                self.pending.push_back(second);
                self.advance_turn();
                Ok(ActionOutcome::SplitInto(first, second))
            }
        }
    }

    /// Runs the fixed dealer policy: draw while the score is strictly below
    /// 17. Sets and returns the round reason.
    pub fn play_dealer(&mut self) -> Result<RoundReason, EngineError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(EngineError::OutOfTurn);
        }

        loop {
            let score = self.dealer.hand().ok_or(EngineError::OutOfTurn)?.score();
            if score >= 17 {
                break;
            }
            let card = self.shoe.draw_card()?;
            if let Some(hand) = self.dealer.hand_mut() {
                hand.add_card(card);
            }
        }

        let reason = if let Some(hand) = self.dealer.hand_mut() {
            if hand.is_busted() {
                hand.status = HandStatus::Busted;
                RoundReason::DealerBusted
            } else {
                hand.status = HandStatus::Standing;
                RoundReason::NormalEnd
            }
        } else {
            return Err(EngineError::OutOfTurn);
        };

        self.reason = Some(reason);
        self.phase = RoundPhase::Resolved;
        Ok(reason)
    }

    /// Dealer's hand as the table may see it: concealed during play, fully
    /// revealed once `reveal_all` is set.
    pub fn dealer_view(&self, reveal_all: bool) -> DealerSnapshot {
        let Some(hand) = self.dealer.hand() else {
            return DealerSnapshot {
                cards: Vec::new(),
                score: None,
            };
        };
        if reveal_all {
            DealerSnapshot {
                cards: hand.cards.iter().copied().map(Some).collect(),
                score: Some(hand.score()),
            }
        } else {
            DealerSnapshot {
                cards: hand
                    .cards
                    .iter()
                    .enumerate()
                    .map(|(i, c)| if i == 0 { Some(*c) } else { None })
                    .collect(),
                score: None,
            }
        }
    }

    /// Per-hand outcomes and the aggregate table verdict. Only available
    /// once the round has resolved.
    pub fn summary(&self) -> Option<RoundSummary> {
        if self.phase != RoundPhase::Resolved {
            return None;
        }
        let reason = self.reason?;
        let dealer_hand = self.dealer.hand()?;
        let dealer_score = dealer_hand.score();

        let mut hands = Vec::new();
        for player in &self.players {
            for hand in &player.holder.hands {
                let score = hand.score();
                let outcome = if hand.status == HandStatus::Busted {
                    HandOutcome::Lost
                } else if reason == RoundReason::DealerBusted || score > dealer_score {
                    HandOutcome::Won
                } else {
                    HandOutcome::Finished
                };
                hands.push(HandResult {
                    player: player.name.clone(),
                    number: hand.number(),
                    cards: hand.cards.clone(),
                    score,
                    outcome,
                });
            }
        }

        let dealer_wins_overall =
            dealer_score <= 21 && hands.iter().all(|h| h.score <= dealer_score);

        Some(RoundSummary {
            reason,
            dealer_cards: dealer_hand.cards.clone(),
            dealer_score,
            dealer_wins_overall,
            hands,
        })
    }

    /// Moves the turn pointer to the next in-play hand: the current player's
    /// queue first, then the next player's in-play hands. When everything is
    /// drained the round moves to the dealer turn.
    fn advance_turn(&mut self) {
        self.turn = None;
        loop {
            while let Some(id) = self.pending.pop_front() {
                let in_play = self.players[self.current_player]
                    .holder
                    .hand(id)
                    .map_or(false, Hand::is_in_play);
                if in_play {
                    self.turn = Some((self.current_player, id));
                    return;
                }
            }
            self.current_player += 1;
            if self.current_player >= self.players.len() {
                self.phase = RoundPhase::DealerTurn;
                return;
            }
            self.pending = self.players[self.current_player]
                .holder
                .in_play_ids()
                .into();
        }
    }
}
