//! # tgbridge-core - Core Domain Types
//!
//! Foundation crate for the Discord to Telegram bridge. Provides domain types,
//! seed fixtures, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Channel`] - A Discord channel and its forwarding state
//! - [`ChannelStatus`] - Derived status (Active, Paused, Error) with its [`StatusColor`]
//! - [`Notification`] - A feed entry with its [`NotificationKind`] and [`IconId`]
//!
//! ### Fixtures (`fixtures`)
//! - [`default_channels()`], [`default_notifications()`] - Built-in seed data
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use tgbridge_core::prelude::*;
//! ```

pub mod error;
pub mod fixtures;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all tgbridge crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use fixtures::{default_channels, default_notifications};
pub use types::{
    AppPhase, Channel, ChannelStatus, IconId, Notification, NotificationKind, StatusColor,
};
