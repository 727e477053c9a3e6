use std::fmt;

/// Snapshot of a car's model name and engine rating.
///
/// Displays as `Driving {model} with {horsepower} HP engine`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Report {
    /// Model name, verbatim.
    pub model: String,

    /// Engine horsepower, verbatim.
    pub horsepower: i32,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Driving {} with {} HP engine",
            self.model, self.horsepower
        )
    }
}
