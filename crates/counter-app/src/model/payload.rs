use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CounterActionKind;

/// JSON body posted to the counter endpoint.
///
/// `action` is left out of the JSON entirely in count-only mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<CounterActionKind>,
    pub count: i64,
    pub timestamp: DateTime<Utc>,
}

impl CounterPayload {
    pub fn new(action: Option<CounterActionKind>, count: i64) -> Self {
        Self {
            action,
            count,
            timestamp: Utc::now(),
        }
    }
}
