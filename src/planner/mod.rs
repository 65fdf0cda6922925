pub mod annotate;
pub mod constants;
pub mod filter;
pub mod request;
pub mod selection;

pub use annotate::annotate;
pub use constants::*;
pub use filter::filter_dishes;
pub use request::{normalize_labels, split_labels, MenuRequest};
pub use selection::{select_menus, CoursePools};

use tracing::info;

use crate::error::Result;
use crate::models::{Dish, MenuSet};

/// Run one request against a catalog: validate, annotate, filter, then select menus.
///
/// An empty `MenuSet` means no menu fits the constraints and is not an error.
pub fn generate_menus(catalog: &[Dish], request: &MenuRequest) -> Result<MenuSet> {
    let request = request.validate()?;
    let annotated = annotate(catalog, request.party_size)?;
    let pool = filter_dishes(
        &annotated,
        request.course_types.as_slice(),
        request.diet_preferences.as_slice(),
    );

    info!(
        catalog = catalog.len(),
        candidates = pool.len(),
        budget = request.budget,
        party_size = request.party_size,
        "generating menus"
    );

    let menus = select_menus(&pool, request.course_types.as_slice(), request.budget);
    info!(menus = menus.len(), "menu generation finished");
    Ok(menus)
}
