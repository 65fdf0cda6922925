pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{MenuError, Result};
pub use models::{Dish, Menu, MenuLineItem, MenuSet};
pub use planner::{generate_menus, MenuRequest};
