use uom::si::{f64::Power, power};

/// An engine with a fixed horsepower rating.
///
/// The rating is not validated; zero and negative values are stored as given.
///
/// # Example
///
/// ```
/// use vehicle_models::models::vehicle::Engine;
///
/// let engine = Engine::new(200);
/// assert_eq!(engine.horsepower(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Engine {
    horsepower: i32,
}

impl Engine {
    /// Creates an engine rated at `horsepower`.
    #[must_use]
    pub fn new(horsepower: i32) -> Self {
        Self { horsepower }
    }

    /// Returns the horsepower rating exactly as constructed.
    #[must_use]
    pub fn horsepower(&self) -> i32 {
        self.horsepower
    }

    /// Returns the rating as a typed power quantity in mechanical horsepower.
    #[must_use]
    pub fn power(&self) -> Power {
        Power::new::<power::horsepower>(f64::from(self.horsepower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::{horsepower as hp_unit, kilowatt};

    #[test]
    fn horsepower_parameter_is_an_integer_binding() {
        let rating: i32 = 350;
        let engine = Engine::new(rating);
        assert_eq!(engine, Engine { horsepower: 350 });
    }

    #[test]
    fn horsepower_is_stored_verbatim() {
        for hp in [200, 0, -1, i32::MIN, i32::MAX] {
            assert_eq!(Engine::new(hp).horsepower(), hp);
        }
    }

    #[test]
    fn power_matches_rating() {
        let rated = Engine::new(200).power();

        assert_relative_eq!(rated.get::<hp_unit>(), 200.0, epsilon = 1e-9);

        // One mechanical horsepower is roughly 745.7 W.
        assert_relative_eq!(rated.get::<kilowatt>(), 149.14, epsilon = 0.01);
    }

    #[test]
    fn negative_rating_gives_negative_power() {
        let rated = Engine::new(-50).power();
        assert_relative_eq!(rated.get::<hp_unit>(), -50.0, epsilon = 1e-9);
    }
}
