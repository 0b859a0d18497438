//! Channel store - the only write path for channel data
//!
//! The dashboard reads channels and aggregates through [`ChannelStore`] and
//! never mutates records directly.

use tgbridge_core::Channel;

/// Result of a toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether a channel with the id existed
    pub found: bool,
    /// Connected flag read before the toggle. `false` when not found.
    pub was_connected: bool,
}

impl ToggleOutcome {
    /// Confirmation text for the toast, chosen from the pre-toggle value
    pub fn confirmation(&self) -> &'static str {
        if self.was_connected {
            "Channel disconnected"
        } else {
            "Channel connected"
        }
    }
}

/// Storage abstraction for the dashboard's channel list
pub trait ChannelStore: std::fmt::Debug + Send {
    /// All channels in display order
    fn channels(&self) -> &[Channel];

    /// Flip the connected flag of the channel with `id`.
    ///
    /// Unknown ids leave the store untouched.
    fn toggle(&mut self, id: &str) -> ToggleOutcome;

    fn get(&self, id: &str) -> Option<&Channel> {
        self.channels().iter().find(|c| c.id == id)
    }

    fn len(&self) -> usize {
        self.channels().len()
    }

    fn is_empty(&self) -> bool {
        self.channels().is_empty()
    }

    /// Sum of message counts over all channels, saturating at `u64::MAX`
    fn total_messages(&self) -> u64 {
        self.channels()
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.messages_count))
    }

    /// Number of connected channels
    fn active_channels(&self) -> usize {
        self.channels().iter().filter(|c| c.connected).count()
    }
}

/// Channels held in process memory for the lifetime of the dashboard
#[derive(Debug, Clone, Default)]
pub struct InMemoryChannelStore {
    channels: Vec<Channel>,
}

impl InMemoryChannelStore {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }
}

impl ChannelStore for InMemoryChannelStore {
    fn channels(&self) -> &[Channel] {
        &self.channels
    }

    fn toggle(&mut self, id: &str) -> ToggleOutcome {
        let was_connected = self.get(id).map(|c| c.connected).unwrap_or(false);

        // Every record with a matching id flips; seed data is not deduplicated
        let mut found = false;
        for channel in self.channels.iter_mut().filter(|c| c.id == id) {
            channel.toggle_connection();
            found = true;
        }

        ToggleOutcome {
            found,
            was_connected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgbridge_core::{default_channels, ChannelStatus};

    fn fixture_store() -> InMemoryChannelStore {
        InMemoryChannelStore::new(default_channels())
    }

    #[test]
    fn test_fixture_aggregates() {
        let store = fixture_store();
        assert_eq!(store.total_messages(), 1899);
        assert_eq!(store.active_channels(), 2);
    }

    #[test]
    fn test_toggle_random_connects_it() {
        let mut store = fixture_store();
        let outcome = store.toggle("3");

        assert!(outcome.found);
        assert!(!outcome.was_connected);
        assert_eq!(outcome.confirmation(), "Channel connected");

        let random = store.get("3").unwrap();
        assert!(random.connected);
        assert_eq!(random.status(), ChannelStatus::Active);
        assert_eq!(store.active_channels(), 3);
        assert_eq!(store.total_messages(), 1899);
    }

    #[test]
    fn test_toggle_only_touches_target() {
        let mut store = fixture_store();
        let before = store.channels().to_vec();
        store.toggle("1");

        let after = store.channels();
        assert_eq!(after.len(), before.len());
        assert!(!after[0].connected);
        assert_eq!(after[0].status(), ChannelStatus::Paused);
        assert_eq!(after[0].messages_count, before[0].messages_count);
        assert_eq!(after[0].last_message, before[0].last_message);
        assert_eq!(after[1..], before[1..]);
    }

    #[test]
    fn test_toggle_connected_channel_reports_disconnect() {
        let mut store = fixture_store();
        let outcome = store.toggle("2");
        assert!(outcome.was_connected);
        assert_eq!(outcome.confirmation(), "Channel disconnected");
        assert_eq!(store.active_channels(), 1);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = fixture_store();
        let before = store.channels().to_vec();
        let outcome = store.toggle("does-not-exist");

        assert!(!outcome.found);
        assert!(!outcome.was_connected);
        assert_eq!(outcome.confirmation(), "Channel connected");
        assert_eq!(store.channels(), before.as_slice());
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut store = fixture_store();
        let before = store.channels().to_vec();
        store.toggle("2");
        store.toggle("2");
        assert_eq!(store.channels(), before.as_slice());
    }

    #[test]
    fn test_toggle_clears_error_status() {
        let mut store = InMemoryChannelStore::new(vec![Channel::new("x", "ops", "Infra")
            .with_connected(true)
            .with_error("bot removed from chat")]);
        assert_eq!(store.get("x").unwrap().status(), ChannelStatus::Error);

        let outcome = store.toggle("x");
        assert!(outcome.was_connected);
        assert_eq!(store.get("x").unwrap().status(), ChannelStatus::Paused);
    }

    #[test]
    fn test_aggregates_track_every_toggle() {
        let mut store = fixture_store();
        for id in ["1", "3", "2", "3", "1"] {
            store.toggle(id);
            let expected_active = store.channels().iter().filter(|c| c.connected).count();
            assert_eq!(store.active_channels(), expected_active);
            assert_eq!(store.total_messages(), 1899);
            for ch in store.channels() {
                assert_eq!(ch.status() == ChannelStatus::Active, ch.connected);
            }
        }
    }

    #[test]
    fn test_total_messages_saturates_on_huge_seed_counts() {
        // TOML integers top out at i64::MAX; three of them overflow u64
        let huge = i64::MAX as u64;
        let store = InMemoryChannelStore::new(
            ["a", "b", "c"]
                .into_iter()
                .map(|id| Channel::new(id, id, "Big").with_messages_count(huge))
                .collect(),
        );
        assert_eq!(store.total_messages(), u64::MAX);
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryChannelStore::default();
        assert!(store.is_empty());
        assert_eq!(store.total_messages(), 0);
        assert_eq!(store.active_channels(), 0);
    }
}
