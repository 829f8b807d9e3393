pub mod error;
pub mod generator;
pub mod inflector;
pub mod metadata;
pub mod naming;
pub mod types;

pub use generator::{BaseNamespaces, Direction, MetadataGenerator};
pub use naming::{NamingStrategy, ShortNamingStrategy};
