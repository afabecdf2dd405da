use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};

/// Upper bound on the total number of vehicles in a single request.
pub const MAX_VEHICLES: u64 = 1 << 20;

/// A group of identical vehicles that must be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Length of a single vehicle, in the same unit as the listing dimensions
    pub length: u32,
    /// Number of vehicles of this length
    pub quantity: u32,
}

impl VehicleSpec {
    pub fn new(length: u32, quantity: u32) -> Result<Self, InvalidInputError> {
        let spec = Self { length, quantity };
        spec.validate()?;
        Ok(spec)
    }

    /// Checks that both the length and the quantity are positive.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.length == 0 {
            return Err(InvalidInputError::NonPositiveVehicleLength);
        }
        if self.quantity == 0 {
            return Err(InvalidInputError::NonPositiveQuantity {
                length: self.length,
            });
        }
        Ok(())
    }
}

/// Total number of vehicles described by the specs. Errors if it exceeds [`MAX_VEHICLES`].
pub fn count_vehicles(specs: &[VehicleSpec]) -> Result<u64, InvalidInputError> {
    let count: u64 = specs.iter().map(|spec| spec.quantity as u64).sum();
    match count <= MAX_VEHICLES {
        true => Ok(count),
        false => Err(InvalidInputError::TooManyVehicles { count }),
    }
}

/// Expands the specs into one length per vehicle, longest first.
///
/// Placing long vehicles first makes the feasibility search fail sooner on hopeless branches.
pub fn normalize_vehicles(specs: &[VehicleSpec]) -> Vec<u32> {
    let mut lengths: Vec<u32> = specs
        .iter()
        .flat_map(|spec| std::iter::repeat_n(spec.length, spec.quantity as usize))
        .collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_quantities_longest_first() {
        let specs = [
            VehicleSpec::new(20, 1).unwrap(),
            VehicleSpec::new(10, 2).unwrap(),
            VehicleSpec::new(30, 1).unwrap(),
        ];
        assert_eq!(normalize_vehicles(&specs), vec![30, 20, 10, 10]);
    }

    #[test]
    fn rejects_zero_length_and_quantity() {
        assert_eq!(
            VehicleSpec::new(0, 1),
            Err(InvalidInputError::NonPositiveVehicleLength)
        );
        assert_eq!(
            VehicleSpec::new(10, 0),
            Err(InvalidInputError::NonPositiveQuantity { length: 10 })
        );
    }

    #[test]
    fn vehicle_count_is_capped() {
        let specs = [
            VehicleSpec::new(10, u32::MAX).unwrap(),
            VehicleSpec::new(20, u32::MAX).unwrap(),
        ];
        assert_eq!(
            count_vehicles(&specs),
            Err(InvalidInputError::TooManyVehicles {
                count: 2 * u32::MAX as u64
            })
        );

        let at_limit = [VehicleSpec::new(1, MAX_VEHICLES as u32).unwrap()];
        assert_eq!(count_vehicles(&at_limit), Ok(MAX_VEHICLES));
        let over = [
            VehicleSpec::new(1, MAX_VEHICLES as u32).unwrap(),
            VehicleSpec::new(2, 1).unwrap(),
        ];
        assert!(count_vehicles(&over).is_err());
    }
}
