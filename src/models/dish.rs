use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Course label whose dishes bypass the diet filter.
pub const DESSERT_COURSE: &str = "dessert";

/// Canonical form of a course or diet label: trimmed and lowercased.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// A dish record as it appears in the catalog.
///
/// Column names follow the catalog CSV header (`name,course,diet,Price,No Of Peoples Can Eat,Images`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,

    pub course: String,

    pub diet: String,

    #[serde(rename = "Price")]
    pub price_per_unit: f64,

    /// Number of people one unit feeds. Signed so malformed rows survive parsing and get reported.
    #[serde(rename = "No Of Peoples Can Eat")]
    pub serving_capacity: i64,

    #[serde(rename = "Images", default)]
    pub image_link: Option<String>,
}

impl Dish {
    /// Normalized course label.
    pub fn course_key(&self) -> String {
        normalize_label(&self.course)
    }

    /// Normalized diet label.
    pub fn diet_key(&self) -> String {
        normalize_label(&self.diet)
    }

    /// Identity used to keep menus distinct: normalized name and course.
    pub fn key(&self) -> (String, String) {
        (normalize_label(&self.name), self.course_key())
    }

    pub fn is_dessert(&self) -> bool {
        self.course_key() == DESSERT_COURSE
    }

    /// Image link, treating blank values as absent.
    pub fn image(&self) -> Option<&str> {
        self.image_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }

    /// Check the row can be costed: positive serving capacity, finite non-negative price.
    pub fn validate(&self, row: usize) -> Result<()> {
        if self.serving_capacity <= 0 {
            return Err(MenuError::malformed(
                row,
                &self.name,
                format!("serving capacity must be positive, got {}", self.serving_capacity),
            ));
        }
        if !self.price_per_unit.is_finite() || self.price_per_unit < 0.0 {
            return Err(MenuError::malformed(
                row,
                &self.name,
                format!("price must be a non-negative number, got {}", self.price_per_unit),
            ));
        }
        Ok(())
    }
}
