use tracing::trace;

use crate::error::{MenuError, Result};
use crate::models::{AnnotatedDish, Dish};

/// Units of a dish needed to feed `party_size` people: `ceil(party_size / serving_capacity)`.
///
/// `None` when `serving_capacity` is not positive.
#[inline]
fn units_needed(party_size: u32, serving_capacity: i64) -> Option<u32> {
    let capacity = u64::try_from(serving_capacity).ok().filter(|&c| c > 0)?;
    // At most party_size, so the conversion cannot fail.
    u32::try_from(u64::from(party_size).div_ceil(capacity)).ok()
}

/// Cost one request's party size onto every catalog row.
///
/// Fails on the first row that cannot be costed. Output order matches the input.
pub fn annotate(dishes: &[Dish], party_size: u32) -> Result<Vec<AnnotatedDish<'_>>> {
    if party_size == 0 {
        return Err(MenuError::InvalidConstraint(
            "party size must be positive".to_string(),
        ));
    }

    dishes
        .iter()
        .enumerate()
        .map(|(row, dish)| {
            dish.validate(row)?;
            let units = units_needed(party_size, dish.serving_capacity).ok_or_else(|| {
                MenuError::malformed(row, &dish.name, "serving capacity must be positive")
            })?;
            let total_cost = dish.price_per_unit * f64::from(units);
            trace!(row, dish = %dish.name, units, total_cost, "annotated dish");
            Ok(AnnotatedDish {
                row,
                dish,
                units_needed: units,
                total_cost,
            })
        })
        .collect()
}
