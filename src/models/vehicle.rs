//! Vehicle models.
//!
//! A [`Car`] owns exactly one [`Engine`] and describes itself with a
//! one-line [`Report`]:
//!
//! ```
//! use vehicle_models::models::vehicle::Car;
//!
//! let car = Car::new("Tesla Model S");
//! assert_eq!(
//!     car.report().to_string(),
//!     "Driving Tesla Model S with 200 HP engine",
//! );
//! ```
//!
//! The [`Drive`] type exposes the same computation as a [`twine_core::Model`].
//! The domain types live in the internal [`core`] module.

mod core;
mod drive;

pub use self::core::{Car, DriveError, Engine, Report};
pub use drive::Drive;
