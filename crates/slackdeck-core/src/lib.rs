//! # slackdeck-core - Core Domain Types
//!
//! Foundation crate for Slack Deck. Provides domain types, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Identity`] - The authenticated user (id + display name)
//! - [`Channel`] - A conversation the user can read from or post to
//! - [`ChatMessage`] - A single fetched message, author already resolved
//! - [`Presence`] - Broadcast availability (Active, Away, Do Not Disturb)
//! - [`MessageReceipt`] - Acknowledgement of a posted message
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use slackdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{Channel, ChatMessage, Identity, MessageReceipt, Presence};
