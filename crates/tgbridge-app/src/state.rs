//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use tgbridge_core::{default_channels, default_notifications, AppPhase, Channel, Notification};

use crate::channel_store::{ChannelStore, InMemoryChannelStore};
use crate::config::Settings;
use crate::toast::Toast;

/// Complete dashboard state
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Channel records; all writes go through the store
    pub channels: Box<dyn ChannelStore>,

    /// Notification feed, newest first
    pub notifications: Vec<Notification>,

    /// Index of the highlighted channel row
    pub selected: usize,

    /// Currently visible toast
    pub toast: Option<Toast>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State seeded with the built-in fixtures and default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// State seeded from settings; empty seed tables fall back to fixtures
    pub fn with_settings(settings: Settings) -> Self {
        let channels = if settings.channels.is_empty() {
            default_channels()
        } else {
            settings.channels.clone()
        };
        let notifications = if settings.notifications.is_empty() {
            default_notifications()
        } else {
            settings.notifications.clone()
        };

        Self::with_store(
            settings,
            Box::new(InMemoryChannelStore::new(channels)),
            notifications,
        )
    }

    pub fn with_store(
        settings: Settings,
        channels: Box<dyn ChannelStore>,
        notifications: Vec<Notification>,
    ) -> Self {
        Self {
            phase: AppPhase::Initializing,
            settings,
            channels,
            notifications,
            selected: 0,
            toast: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Request application quit
    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    pub fn selected_channel(&self) -> Option<&Channel> {
        self.channels.channels().get(self.selected)
    }

    /// Move selection down, wrapping to the top
    pub fn select_next(&mut self) {
        let len = self.channels.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        let len = self.channels.len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.channels.len().saturating_sub(1);
    }

    // ─────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.settings.ui.toast_duration_ms)
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Drop the toast once its duration has elapsed
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }
}
