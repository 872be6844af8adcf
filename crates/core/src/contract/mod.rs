//! Contract types shared by every component
//!
//! These types are how history is addressed and filtered:
//!
//! - `timestamp`: microsecond commit times and the uncommitted sentinel
//! - `stamp`: the status/time/author/module/path coordinate of a version
//! - `view`: stamp filters for coordinate-scoped reads
//! - `alias`: identifiers issued by external authorities
//!
//! ## Usage
//!
//! ```
//! use termstore_core::contract::{Stamp, Timestamp, ViewCoordinate};
//! ```

pub mod alias;
pub mod stamp;
pub mod timestamp;
pub mod view;

// Re-exports
pub use alias::{AliasValue, IdAlias};
pub use stamp::Stamp;
pub use timestamp::Timestamp;
pub use view::ViewCoordinate;
