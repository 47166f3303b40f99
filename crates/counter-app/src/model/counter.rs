//! Counter state and the actions that drive it.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// State owned by the counter store.
///
/// `count` only ever changes through `Increment` / `Decrement` / `Reset`. The sync outcome
/// touches `is_loading` and `error` only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

/// The user intents that change the count. Also the identifier sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterActionKind {
    Increment,
    Decrement,
    Reset,
}

impl CounterActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterActionKind::Increment => "increment",
            CounterActionKind::Decrement => "decrement",
            CounterActionKind::Reset => "reset",
        }
    }

    /// Applies the intent to a count.
    pub fn apply(&self, count: i64) -> i64 {
        match self {
            CounterActionKind::Increment => count.saturating_add(1),
            CounterActionKind::Decrement => count.saturating_sub(1),
            CounterActionKind::Reset => 0,
        }
    }
}

impl Display for CounterActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the counter store understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    // View actions
    Increment,
    Decrement,
    Reset,
    SetLoading(bool),
    /// `None` clears the error.
    SetError(Option<String>),

    // Internal actions
    /// Mirror `count` to the server; produced as the follow-up of a counter change.
    SendCounter {
        action: CounterActionKind,
        count: i64,
    },
}

impl CounterAction {
    /// The counter intent behind this action, if it changes the count.
    pub fn kind(&self) -> Option<CounterActionKind> {
        match self {
            CounterAction::Increment => Some(CounterActionKind::Increment),
            CounterAction::Decrement => Some(CounterActionKind::Decrement),
            CounterAction::Reset => Some(CounterActionKind::Reset),
            CounterAction::SetLoading(_)
            | CounterAction::SetError(_)
            | CounterAction::SendCounter { .. } => None,
        }
    }
}

impl From<CounterActionKind> for CounterAction {
    fn from(kind: CounterActionKind) -> Self {
        match kind {
            CounterActionKind::Increment => CounterAction::Increment,
            CounterActionKind::Decrement => CounterAction::Decrement,
            CounterActionKind::Reset => CounterAction::Reset,
        }
    }
}
