use std::io::{self, Write};

use super::{DriveError, Engine, Report};

/// A car that owns exactly one [`Engine`].
///
/// Every car is built with a stock engine of [`Car::STOCK_HORSEPOWER`].
/// Neither the model name nor the engine can change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Car {
    model: String,
    engine: Engine,
}

impl Car {
    /// Horsepower of the engine fitted to every new car.
    pub const STOCK_HORSEPOWER: i32 = 200;

    /// Creates a car with the given model name and a stock engine.
    ///
    /// The model name is taken verbatim; empty text is allowed.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        let model = model.into();
        let engine = Engine::new(Self::STOCK_HORSEPOWER);
        tracing::trace!(%model, horsepower = engine.horsepower(), "built car");
        Self { model, engine }
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the owned engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Reads the model name and engine rating into a [`Report`].
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            model: self.model.clone(),
            horsepower: self.engine.horsepower(),
        }
    }

    /// Prints the drive report to standard output.
    ///
    /// A failed write to stdout is logged and otherwise ignored.
    ///
    /// ```
    /// use vehicle_models::models::vehicle::Car;
    ///
    /// // Prints "Driving Tesla Model S with 200 HP engine".
    /// Car::new("Tesla Model S").drive();
    /// ```
    pub fn drive(&self) {
        self.drive_or_warn(&mut io::stdout().lock());
    }

    fn drive_or_warn(&self, out: &mut impl Write) {
        if let Err(err) = self.drive_to(out) {
            tracing::warn!(model = %self.model, error = %err, "drive report not written");
        }
    }

    /// Writes the drive report, followed by a newline, to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`DriveError::Write`] if `out` fails.
    pub fn drive_to(&self, out: &mut impl Write) -> Result<(), DriveError> {
        let report = self.report();
        tracing::debug!(model = %report.model, "driving");
        writeln!(out, "{report}")?;
        Ok(())
    }
}
