use twentyone::Action;

/// Maps a turn-prompt token to an action: "1" hit, "2" stand, "3" split.
/// Anything else is rejected and the caller reprompts.
pub fn parse_action(token: &str) -> Option<Action> {
    match token.trim() {
        "1" => Some(Action::Hit),
        "2" => Some(Action::Stand),
        "3" => Some(Action::Split),
        _ => None,
    }
}
