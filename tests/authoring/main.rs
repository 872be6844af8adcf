//! End-to-end authoring tests through the public `termstore` API.

mod common;

mod concurrency;
mod identities;
mod refex;
mod scenarios;
mod validators;
