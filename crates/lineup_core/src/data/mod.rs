//! Game data module
//!
//! Static hero and perk tables, embedded into the binary.

pub mod catalog;

pub use catalog::{
    default_catalog, Catalog, Hero, Perk, CATALOG_JSON, CATALOG_PATH_ENV, PATCH_DATE_FORMAT,
};
