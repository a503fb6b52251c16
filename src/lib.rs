pub mod catalog;
pub mod collections;
pub mod config;
pub mod course;
pub mod error;
pub mod logger;
pub mod menu;

pub use catalog::{load_catalog, LoadReport};
pub use collections::{HashTable, DEFAULT_SIZE};
pub use config::{Config, OutputFormat};
pub use course::Course;
pub use error::{CatalogError, Error, Result};
pub use menu::{Command, Flow, Session};
