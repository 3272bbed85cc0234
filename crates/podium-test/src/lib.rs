//! Shared test fixtures for Podium crates.
//!
//! This crate provides record builders and canned record collections.
//! It only depends on `podium-core` so every engine crate can use it as a
//! dev-dependency.
//!
//! - [`builder`] - fluent [`PerformanceRecord`](podium_core::PerformanceRecord) builder
//! - [`history`] - one athlete's improving 400m history
//! - [`conference`] - a conference championship field
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! podium-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use podium_test::{performance, four_hundred_history};
//! use podium_test::conference::conference_meet;
//! ```

pub mod builder;
pub mod conference;
pub mod history;

pub use builder::{performance, RecordBuilder};
pub use conference::conference_meet;
pub use history::four_hundred_history;
