pub mod catalog;
pub mod observability;
