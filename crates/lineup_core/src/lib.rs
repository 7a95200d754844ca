//! # lineup_core - Auto Chess lineup planner
//!
//! Hero catalog, table ordering and team synergy logic behind the lineup
//! planner, with a JSON API for UI hosts.
//!
//! ## Features
//! - Embedded hero/perk catalog, parsed once
//! - Column sorting with stable tie-breakers
//! - Species/class synergy counts with active perks
//! - Lineups encoded into shareable `?heroes=` links
//!
//! ```
//! use lineup_core::{aggregate_features, default_catalog, sort_heroes, Lineup, SortState};
//!
//! let catalog = default_catalog();
//! let lineup = Lineup::from_query(catalog, "?heroes=Axe,Juggernaut");
//! let summary = aggregate_features(catalog, lineup.names());
//! assert_eq!(summary[0].feature, "Orc");
//! assert_eq!(summary[0].count, 2);
//!
//! let rows = sort_heroes(catalog.heroes(), &SortState::default());
//! assert_eq!(rows[0].cost, 1);
//! ```

pub mod api;
pub mod data;
pub mod error;
pub mod search;
pub mod sort;
pub mod team;
pub mod view;

// Re-export main API functions
pub use api::{lineup_view_json, team_summary_json, LineupRequest};
pub use data::{default_catalog, Catalog, Hero, Perk};
pub use error::{LineupError, Result};
pub use search::matches_search;
pub use sort::{
    comparators, compare_heroes, sort_heroes, split_halves, Comparator, SortColumn, SortKey,
    SortState,
};
pub use team::{aggregate_features, features_list, ActivePerk, FeatureSummary, Lineup};
pub use view::{FeatureCell, HeroRow, LineupView, RenderedView, ViewAction};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
