mod card;
mod error;
mod hand;
mod holder;
mod round;
mod shoe;

pub use card::Card;
pub use error::EngineError;
pub use hand::{calculate_score, can_split_cards, is_busted, Hand, HandId, HandStatus};
pub use holder::{Dealer, Holder, Player, DEALER_NAME, MAX_HANDS};
pub use round::{
    Action, ActionOutcome, DealerSnapshot, HandOutcome, HandResult, HandSnapshot, Round,
    RoundPhase, RoundReason, RoundSummary, TurnSnapshot,
};
pub use shoe::{Shoe, LOW_RANK_COPIES, SHOE_SIZE, TEN_COPIES};
