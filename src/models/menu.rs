use serde::Serialize;

use crate::models::Dish;

/// A catalog dish costed for one request.
///
/// `row` is the dish's position in the loaded catalog and identifies it across menu attempts.
#[derive(Debug, Clone, Copy)]
pub struct AnnotatedDish<'a> {
    pub row: usize,
    pub dish: &'a Dish,
    pub units_needed: u32,
    pub total_cost: f64,
}

/// One course of a generated menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuLineItem {
    pub dish: String,
    pub course: String,
    pub diet: String,
    pub price_per_unit: f64,
    pub units_needed: u32,
    pub total_cost: f64,
    pub image_link: Option<String>,
}

impl From<&AnnotatedDish<'_>> for MenuLineItem {
    fn from(annotated: &AnnotatedDish<'_>) -> Self {
        let dish = annotated.dish;
        Self {
            dish: dish.name.clone(),
            course: dish.course.clone(),
            diet: dish.diet.clone(),
            price_per_unit: dish.price_per_unit,
            units_needed: annotated.units_needed,
            total_cost: annotated.total_cost,
            image_link: dish.image().map(str::to_string),
        }
    }
}

/// A complete menu: one line item per requested course, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Menu {
    pub items: Vec<MenuLineItem>,
    pub total_cost: f64,
}

impl Menu {
    pub fn new(items: Vec<MenuLineItem>) -> Self {
        let total_cost = items.iter().map(|item| item.total_cost).sum();
        Self { items, total_cost }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The menus proposed for one request. Empty means the constraints could not be met.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuSet {
    pub menus: Vec<Menu>,
}

impl MenuSet {
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Menu> {
        self.menus.iter()
    }
}

impl<'a> IntoIterator for &'a MenuSet {
    type Item = &'a Menu;
    type IntoIter = std::slice::Iter<'a, Menu>;

    fn into_iter(self) -> Self::IntoIter {
        self.menus.iter()
    }
}
