//! Builds a car and drives it.
//!
//! Run with `cargo run --example drive`.

use vehicle_models::models::vehicle::Car;

fn main() {
    Car::new("Tesla Model S").drive();
}
