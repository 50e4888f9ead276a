use crate::chronograph::State;
use std::fmt::Display;

/// Operation that was attempted on a chronograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    Split,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Start => write!(f, "start"),
            Action::Stop => write!(f, "stop"),
            Action::Split => write!(f, "split"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChronographError {
    /// A start, stop or split was issued out of order.
    InvalidState {
        name: String,
        action: Action,
        state: State,
    },
}

impl ChronographError {
    pub(crate) fn invalid_state(name: &str, action: Action, state: State) -> Self {
        ChronographError::InvalidState {
            name: name.to_string(),
            action,
            state,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ChronographError::InvalidState { name, .. } => name,
        }
    }
}

impl Display for ChronographError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChronographError::InvalidState {
                name,
                action,
                state,
            } => write!(
                f,
                "Cannot {} Chronograph '{}' while it is {}",
                action, name, state
            ),
        }
    }
}

impl std::error::Error for ChronographError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_the_chronograph() {
        let err = ChronographError::invalid_state("TestCase", Action::Start, State::Running);

        assert_eq!(err.name(), "TestCase");
        assert_eq!(
            err.to_string(),
            "Cannot start Chronograph 'TestCase' while it is running"
        );
    }
}
