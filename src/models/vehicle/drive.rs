use std::convert::Infallible;

use twine_core::Model;

use super::{Car, Report};

/// Model adapter that reads a [`Car`] into its drive [`Report`].
///
/// ```
/// use twine_core::Model;
/// use vehicle_models::models::vehicle::{Car, Drive};
///
/// let report = Drive.call(&Car::new("Tesla Model S")).unwrap();
/// assert_eq!(report.horsepower, 200);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Drive;

impl Model for Drive {
    type Input = Car;
    type Output = Report;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_to_car_report() {
        let car = Car::new("Corolla");
        let report = Drive.call(&car).unwrap();

        assert_eq!(report, car.report());
        assert_eq!(report.to_string(), "Driving Corolla with 200 HP engine");
    }
}
