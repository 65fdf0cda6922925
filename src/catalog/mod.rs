mod loader;
mod store;

pub use loader::{load_catalog, CatalogFormat, CatalogReport, RowPolicy, SkippedRow};
pub use store::Catalog;
