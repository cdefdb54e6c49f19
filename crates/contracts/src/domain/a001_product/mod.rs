pub mod aggregate;

pub use aggregate::{CatalogError, Product, ProductCatalog};
