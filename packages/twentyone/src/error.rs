use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Drawing was attempted on an exhausted shoe. Fatal to the round.
    #[error("the shoe is out of cards")]
    ShoeEmpty,

    /// A holder was asked to take a fourth hand. Unreachable when split
    /// gating is correct, so treated as a broken invariant.
    #[error("a holder may not have more than {} hands", crate::MAX_HANDS)]
    TooManyHands,

    /// A split was requested on a hand that is not a two-card pair, or the
    /// player is already at the hand cap. Recoverable at the turn loop.
    #[error("hand cannot be split")]
    InvalidSplit,

    /// An engine operation was called in the wrong round phase or with no
    /// hand awaiting an action.
    #[error("no action is expected in the current round state")]
    OutOfTurn,
}
