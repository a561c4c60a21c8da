//! Analytics tracking: event recording and user identification over an
//! injected backend client and pending store.

use inflow_types::Properties;

use crate::client::{BackendClient, PendingItem, PendingStore};
use crate::sanitize::sanitize;

/// Records analytics events and user-trait updates.
///
/// Parameters pass through the sanitizer before leaving the engine. Events
/// recorded before a user identity exists are held on the pending store and
/// uploaded, oldest first, once [`log_user`](Self::log_user) establishes
/// one. Upload failures are logged and not retried here - retry policy
/// belongs to the backend client.
#[derive(Debug)]
pub struct Tracker<C: BackendClient, S: PendingStore> {
    client: C,
    store: S,
    user_id: Option<String>,
}

impl<C: BackendClient, S: PendingStore> Tracker<C, S> {
    /// Create a tracker with no established identity.
    pub fn new(client: C, store: S) -> Self {
        Self {
            client,
            store,
            user_id: None,
        }
    }

    /// The current analytics identity, if one was established.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Access the injected backend client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Record one analytics event.
    ///
    /// Parameters are sanitized; with no identity established yet the event
    /// is queued instead of uploaded.
    pub fn record_event(&mut self, name: &str, parameters: Properties) {
        let parameters = sanitize(parameters);
        if self.user_id.is_some() {
            if let Err(err) = self.client.add_event(name, &parameters) {
                let err: anyhow::Error = err.into();
                log::warn!("failed to upload event {name:?}: {err}");
            }
        } else {
            log::debug!("no analytics identity yet, queueing event {name:?}");
            self.store.enqueue(PendingItem::Event {
                name: name.to_string(),
                parameters,
            });
        }
    }

    /// Establish (or update) the analytics identity and drain the pending
    /// queue.
    ///
    /// Traits are sanitized. Calling this again for the same user with no
    /// new traits does not re-register the user; pending items are drained
    /// either way.
    pub fn log_user(&mut self, user_id: &str, traits: Option<Properties>) {
        let traits = traits.map(sanitize).unwrap_or_default();
        let already_known = self.user_id.as_deref() == Some(user_id);
        if !already_known || !traits.is_empty() {
            if let Err(err) = self.client.add_user(user_id, &traits) {
                let err: anyhow::Error = err.into();
                log::warn!("failed to register user {user_id:?}: {err}");
                return;
            }
            self.user_id = Some(user_id.to_string());
        }
        self.upload_pending();
    }

    fn upload_pending(&mut self) {
        for item in self.store.drain_pending() {
            match item {
                PendingItem::Event { name, parameters } => {
                    if let Err(err) = self.client.add_event(&name, &parameters) {
                        let err: anyhow::Error = err.into();
                        log::warn!("failed to upload pending event {name:?}: {err}");
                    }
                }
                PendingItem::UserUpdate { user_id, traits } => {
                    if let Err(err) = self.client.add_user(&user_id, &traits) {
                        let err: anyhow::Error = err.into();
                        log::warn!("failed to upload pending user update: {err}");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::InMemoryPendingStore;
    use inflow_types::{Answer, PropertyValue, Screen};
    use chrono::{TimeZone, Utc};

    /// A backend client that records every call.
    #[derive(Debug, Default)]
    struct RecordingClient {
        events: Vec<(String, Properties)>,
        users: Vec<(String, Properties)>,
        fail_add_user: bool,
    }

    impl BackendClient for RecordingClient {
        type Error = anyhow::Error;

        fn fetch_survey_screens(&mut self, _survey_id: &str) -> Result<Vec<Screen>, Self::Error> {
            Ok(Vec::new())
        }

        fn submit_answers(&mut self, _survey_id: &str, _answers: &[Answer]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn add_user(&mut self, user_id: &str, traits: &Properties) -> Result<(), Self::Error> {
            if self.fail_add_user {
                anyhow::bail!("add_user refused");
            }
            self.users.push((user_id.to_string(), traits.clone()));
            Ok(())
        }

        fn add_event(&mut self, name: &str, parameters: &Properties) -> Result<(), Self::Error> {
            self.events.push((name.to_string(), parameters.clone()));
            Ok(())
        }
    }

    fn props(entries: Vec<(&str, PropertyValue)>) -> Properties {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn events_before_identity_are_queued_then_drained() {
        let mut tracker = Tracker::new(RecordingClient::default(), InMemoryPendingStore::new());
        tracker.record_event("app_open", Properties::new());
        assert!(tracker.client().events.is_empty());

        tracker.log_user("user_1", None);
        assert_eq!(tracker.client().events.len(), 1);
        assert_eq!(tracker.client().events[0].0, "app_open");
        assert_eq!(tracker.user_id(), Some("user_1"));
    }

    #[test]
    fn event_parameters_are_sanitized() {
        let ts = Utc.with_ymd_and_hms(2022, 4, 30, 10, 0, 0).unwrap();
        let mut tracker = Tracker::new(RecordingClient::default(), InMemoryPendingStore::new());
        tracker.log_user("user_1", None);
        tracker.record_event(
            "purchase",
            props(vec![
                ("date", PropertyValue::Timestamp(ts)),
                ("some_object", PropertyValue::Opaque),
            ]),
        );
        let (_, parameters) = &tracker.client().events[0];
        assert_eq!(parameters["date"], PropertyValue::Int(ts.timestamp()));
        assert!(!parameters.contains_key("some_object"));
    }

    #[test]
    fn repeated_log_user_does_not_reregister() {
        let mut tracker = Tracker::new(RecordingClient::default(), InMemoryPendingStore::new());
        tracker.log_user("user_1", None);
        tracker.log_user("user_1", None);
        assert_eq!(tracker.client().users.len(), 1);
    }

    #[test]
    fn log_user_with_new_traits_updates_the_user() {
        let mut tracker = Tracker::new(RecordingClient::default(), InMemoryPendingStore::new());
        tracker.log_user("user_1", None);
        tracker.log_user("user_1", Some(props(vec![("plan", PropertyValue::from("pro"))])));
        assert_eq!(tracker.client().users.len(), 2);
    }

    #[test]
    fn user_traits_are_sanitized() {
        let ts = Utc.with_ymd_and_hms(2022, 4, 30, 10, 0, 0).unwrap();
        let mut tracker = Tracker::new(RecordingClient::default(), InMemoryPendingStore::new());
        tracker.log_user(
            "user_1",
            Some(props(vec![
                ("signed_up", PropertyValue::Timestamp(ts)),
                ("handle", PropertyValue::Opaque),
            ])),
        );
        let (_, traits) = &tracker.client().users[0];
        assert_eq!(traits["signed_up"], PropertyValue::Int(ts.timestamp()));
        assert!(!traits.contains_key("handle"));
    }

    #[test]
    fn failed_registration_keeps_identity_unset() {
        let client = RecordingClient {
            fail_add_user: true,
            ..RecordingClient::default()
        };
        let mut tracker = Tracker::new(client, InMemoryPendingStore::new());
        tracker.log_user("user_1", None);
        assert_eq!(tracker.user_id(), None);
    }
}
