pub mod catalog;

pub use catalog::{CatalogDocument, Category, ContactInfo, Item};
