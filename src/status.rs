//! JSON snapshot of the dashboard data for `tgbridge status`

use serde::Serialize;
use tgbridge_app::AppState;
use tgbridge_core::prelude::*;
use tgbridge_core::{Channel, ChannelStatus, Notification};

/// Channel record with its derived status
#[derive(Debug, Serialize)]
pub struct ChannelSnapshot<'a> {
    #[serde(flatten)]
    pub channel: &'a Channel,
    pub status: ChannelStatus,
}

/// Everything the dashboard shows, as data
#[derive(Debug, Serialize)]
pub struct StatusSnapshot<'a> {
    pub channels: Vec<ChannelSnapshot<'a>>,
    pub total_messages: u64,
    pub active_channels: usize,
    pub notifications: &'a [Notification],
}

impl<'a> StatusSnapshot<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        let channels = state
            .channels
            .channels()
            .iter()
            .map(|channel| ChannelSnapshot {
                channel,
                status: channel.status(),
            })
            .collect();

        Self {
            channels,
            total_messages: state.channels.total_messages(),
            active_channels: state.channels.active_channels(),
            notifications: &state.notifications,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
