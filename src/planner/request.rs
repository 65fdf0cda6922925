use crate::error::{MenuError, Result};
use crate::models::normalize_label;

/// Constraints for one menu generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRequest {
    /// Total spend allowed per menu.
    pub budget: f64,

    /// Number of people to feed.
    pub party_size: u32,

    /// Courses to fill, in priority order.
    pub course_types: Vec<String>,

    /// Accepted diet tags (desserts are exempt).
    pub diet_preferences: Vec<String>,
}

impl MenuRequest {
    pub fn new(
        budget: f64,
        party_size: u32,
        course_types: Vec<String>,
        diet_preferences: Vec<String>,
    ) -> Self {
        Self {
            budget,
            party_size,
            course_types,
            diet_preferences,
        }
    }

    /// Check the constraints and return a copy with normalized labels.
    ///
    /// Blank labels are dropped and repeated labels keep their first position.
    pub fn validate(&self) -> Result<MenuRequest> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(MenuError::InvalidConstraint(format!(
                "budget must be positive, got {}",
                self.budget
            )));
        }
        if self.party_size == 0 {
            return Err(MenuError::InvalidConstraint(
                "party size must be positive".to_string(),
            ));
        }

        let course_types = normalize_labels(&self.course_types);
        if course_types.is_empty() {
            return Err(MenuError::InvalidConstraint(
                "at least one course type is required".to_string(),
            ));
        }

        let diet_preferences = normalize_labels(&self.diet_preferences);
        if diet_preferences.is_empty() {
            return Err(MenuError::InvalidConstraint(
                "at least one diet preference is required".to_string(),
            ));
        }

        Ok(MenuRequest {
            budget: self.budget,
            party_size: self.party_size,
            course_types,
            diet_preferences,
        })
    }
}

/// Normalize, drop blanks, and de-duplicate while preserving order.
pub fn normalize_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let key = normalize_label(label.as_ref());
        if !key.is_empty() && !out.contains(&key) {
            out.push(key);
        }
    }
    out
}

/// Split comma-separated user input into labels.
pub fn split_labels(input: &str) -> Vec<String> {
    normalize_labels(&input.split(',').collect::<Vec<_>>())
}
