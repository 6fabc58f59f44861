mod catalog_error;
mod catalog_source;

pub use catalog_error::CatalogError;
pub use catalog_source::CatalogSource;
