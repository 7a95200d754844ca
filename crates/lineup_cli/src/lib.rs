//! lineup_cli - terminal front-end for the lineup planner
//!
//! Catalog selection and text rendering, shared by the `lineup` binary.

pub mod config;
#[cfg(feature = "cli")]
pub mod logging;
pub mod render;

pub use config::load_catalog;
pub use render::{render_features, render_table, render_team};
