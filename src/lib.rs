//! # Vehicle Models
//!
//! Vehicle composition models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Vehicle types and their [`twine_core::Model`] adapters.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `trace` and `debug` levels and never
//! installs a subscriber.

pub mod models;
