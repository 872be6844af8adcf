//! Chronicles, versions and analogs
//!
//! This crate implements the edit model for terminology components:
//! - **Version**: immutable snapshot of a component at one stamp
//! - **Analog**: mutable staging copy used to propose the next version
//! - **Chronicle**: append-only history of one component, with optimistic
//!   commit and at most one pending version
//! - **Validators**: veto hooks consulted by setters and commits
//!
//! ## Editing
//!
//! ```
//! use termstore_chronicle::{Chronicle, Validators};
//! use termstore_core::{DescriptionPayload, Nid, Stamp, Status, Timestamp};
//!
//! let stamp = |t| Stamp::new(Status::Active, Timestamp::from_micros(t), Nid::new(2), Nid::new(3), Nid::new(4));
//! let chronicle: Chronicle<DescriptionPayload> = Chronicle::new(Nid::new(42), Validators::new());
//!
//! let mut analog = chronicle.new_analog(stamp(100));
//! analog.set_concept(Nid::new(10))?;
//! analog.set_type_nid(Nid::new(11))?;
//! analog.set_text("Heart")?;
//! let version = chronicle.commit(analog)?;
//!
//! assert_eq!(chronicle.latest_version(None), Some(version));
//! # Ok::<(), termstore_core::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! Analogs are owned values and hold no locks. Any number of editors may
//! seed analogs from the same chronicle; the first to commit wins and the
//! rest get `Error::StaleBasis` and must re-seed. Readers never observe a
//! partially appended version.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analog;
pub mod chronicle;
pub mod validation;
pub mod version;

pub use analog::Analog;
pub use chronicle::{Chronicle, Lifecycle};
pub use validation::{Candidate, CommitRule, EditValidator, FieldRule, Validators};
pub use version::{Version, VersionHistory};
