//! Collaborator interfaces at the engine boundary: the backend client and
//! the pending store.

use inflow_types::{Answer, Properties, Screen};

/// The transport collaborator.
///
/// All calls are fire-and-forget from the engine's perspective once handed
/// off; retry/backoff policy belongs to the implementation, not to the
/// engine.
pub trait BackendClient {
    /// The error type for this client.
    type Error: Into<anyhow::Error>;

    /// Fetch the ordered screen list of a survey.
    fn fetch_survey_screens(&mut self, survey_id: &str) -> Result<Vec<Screen>, Self::Error>;

    /// Submit a completed flow's answer sequence.
    fn submit_answers(&mut self, survey_id: &str, answers: &[Answer]) -> Result<(), Self::Error>;

    /// Register or update a user with sanitized traits.
    fn add_user(&mut self, user_id: &str, traits: &Properties) -> Result<(), Self::Error>;

    /// Upload one analytics event with sanitized parameters.
    fn add_event(&mut self, name: &str, parameters: &Properties) -> Result<(), Self::Error>;
}

/// An analytics item held back until the network/identity is ready.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingItem {
    /// An event recorded before identity was established.
    Event {
        name: String,
        parameters: Properties,
    },

    /// A user-trait update recorded before identity was established.
    UserUpdate { user_id: String, traits: Properties },
}

/// Local holding area for analytics items generated before the backend can
/// accept them. Enqueued items are sanitized already.
pub trait PendingStore {
    /// Append one item.
    fn enqueue(&mut self, item: PendingItem);

    /// Remove and return all held items, oldest first.
    fn drain_pending(&mut self) -> Vec<PendingItem>;
}

/// A pending store backed by a plain in-memory queue.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPendingStore {
    items: Vec<PendingItem>,
}

impl InMemoryPendingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PendingStore for InMemoryPendingStore {
    fn enqueue(&mut self, item: PendingItem) {
        self.items.push(item);
    }

    fn drain_pending(&mut self) -> Vec<PendingItem> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_drains_in_arrival_order() {
        let mut store = InMemoryPendingStore::new();
        store.enqueue(PendingItem::Event {
            name: "first".to_string(),
            parameters: Properties::new(),
        });
        store.enqueue(PendingItem::Event {
            name: "second".to_string(),
            parameters: Properties::new(),
        });
        let drained = store.drain_pending();
        assert_eq!(drained.len(), 2);
        assert!(matches!(&drained[0], PendingItem::Event { name, .. } if name == "first"));
        assert!(store.is_empty());
    }
}
