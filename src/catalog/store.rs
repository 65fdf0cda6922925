use crate::models::{normalize_label, Dish};

/// An immutable, ordered snapshot of the dish table.
///
/// A dish's index here is its row key for the duration of a request.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Distinct normalized course labels in first-seen order.
    pub fn courses(&self) -> Vec<String> {
        distinct(self.dishes.iter().map(Dish::course_key))
    }

    /// Distinct normalized diet labels in first-seen order.
    pub fn diets(&self) -> Vec<String> {
        distinct(self.dishes.iter().map(Dish::diet_key))
    }

    /// Number of dishes tagged with a course (normalized comparison).
    pub fn count_course(&self, course: &str) -> usize {
        let key = normalize_label(course);
        self.dishes.iter().filter(|d| d.course_key() == key).count()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

fn distinct(labels: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        if !label.is_empty() && !out.contains(&label) {
            out.push(label);
        }
    }
    out
}
