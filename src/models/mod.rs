mod dish;
mod menu;

pub use dish::{normalize_label, Dish, DESSERT_COURSE};
pub use menu::{AnnotatedDish, Menu, MenuLineItem, MenuSet};
