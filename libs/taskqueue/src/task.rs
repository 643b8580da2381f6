use serde::{Deserialize, Serialize};

/// A unit of work as the application hands it to the queue.
///
/// Ordering is not a property of the task itself: the queue keys entries
/// by the `i32` priority passed alongside at push time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub payload: Vec<u8>,
}

impl Task {
    pub fn new(id: &str, payload: Vec<u8>) -> Self {
        Self {
            id: id.to_string(),
            payload,
        }
    }

    pub fn with_empty_load(id: &str) -> Self {
        Self {
            id: id.to_string(),
            payload: vec![],
        }
    }
}
