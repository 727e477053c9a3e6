//! Car and engine composition.
//!
//! A car holds its engine by value, so the engine has no lifetime of its own
//! and is dropped with the car.

mod car;
mod engine;
mod error;
mod report;

pub use car::Car;
pub use engine::Engine;
pub use error::DriveError;
pub use report::Report;
