mod embedded_source;
mod file_source;
mod loader;

pub use embedded_source::EmbeddedCatalogSource;
pub use file_source::FileCatalogSource;
pub use loader::load_catalog;
