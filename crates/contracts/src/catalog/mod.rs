pub mod document;

pub use document::{CatalogDocument, Category, ContactInfo, Item};
