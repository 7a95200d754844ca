//! Hero catalog
//!
//! The default catalog is embedded with `include_str!` and parsed once on
//! first access. Alternative catalogs (newer patches, test fixtures) are
//! loaded from JSON files with the same layout.
//!
//! ```json
//! {
//!   "lastPatch": "2018/02/05",
//!   "heroes": [{ "name": "Axe", "species": ["Orc"], "className": "Warrior", "cost": 1 }],
//!   "perks": [{ "feature": "Orc", "requiredCount": 2, "description": "..." }]
//! }
//! ```

use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{LineupError, Result};

// ============================================================================
// Embedded data
// ============================================================================

/// Default catalog JSON (51 heroes, 44 perks)
pub const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// Env var for overriding the catalog file used by front-ends.
pub const CATALOG_PATH_ENV: &str = "LINEUP_CATALOG_PATH";

/// Date format of `lastPatch`.
pub const PATCH_DATE_FORMAT: &str = "%Y/%m/%d";

// ============================================================================
// Types
// ============================================================================

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    /// Species tags, first one is the sort key
    pub species: Vec<String>,
    pub class_name: String,
    pub cost: u32,
}

impl Hero {
    pub fn new(name: &str, species: &[&str], class_name: &str, cost: u32) -> Self {
        Self {
            name: name.to_string(),
            species: species.iter().map(|s| s.to_string()).collect(),
            class_name: class_name.to_string(),
            cost,
        }
    }

    /// Species tags followed by the class name.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.species
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.class_name.as_str()))
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features().any(|f| f == feature)
    }
}

/// Bonus unlocked once `required_count` picked heroes share `feature`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perk {
    pub feature: String,
    pub required_count: u32,
    pub description: String,
}

impl Perk {
    pub fn new(feature: &str, required_count: u32, description: &str) -> Self {
        Self {
            feature: feature.to_string(),
            required_count,
            description: description.to_string(),
        }
    }

    pub fn is_active(&self, count: u32) -> bool {
        count >= self.required_count
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    #[serde(default)]
    last_patch: String,
    heroes: Vec<Hero>,
    #[serde(default)]
    perks: Vec<Perk>,
}

/// Read-only hero and perk tables with name/feature lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    last_patch: String,
    heroes: Vec<Hero>,
    perks: Vec<Perk>,
    hero_index: FxHashMap<String, usize>,
    perk_index: FxHashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate or empty names and zero thresholds.
    pub fn new(last_patch: impl Into<String>, heroes: Vec<Hero>, perks: Vec<Perk>) -> Result<Self> {
        let mut hero_index = FxHashMap::default();
        for (i, hero) in heroes.iter().enumerate() {
            if hero.name.trim().is_empty() {
                return Err(LineupError::InvalidCatalog(format!("hero #{} has an empty name", i)));
            }
            if hero.class_name.trim().is_empty() {
                return Err(LineupError::InvalidCatalog(format!(
                    "hero '{}' has an empty class name",
                    hero.name
                )));
            }
            if hero_index.insert(hero.name.clone(), i).is_some() {
                return Err(LineupError::InvalidCatalog(format!(
                    "duplicate hero name: {}",
                    hero.name
                )));
            }
        }

        let known: FxHashSet<&str> = heroes.iter().flat_map(Hero::features).collect();
        let mut perk_index: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, perk) in perks.iter().enumerate() {
            if perk.required_count == 0 {
                return Err(LineupError::InvalidCatalog(format!(
                    "perk '{}' on {} has a zero threshold",
                    perk.description, perk.feature
                )));
            }
            if !known.contains(perk.feature.as_str()) {
                warn!(feature = %perk.feature, "perk references a feature no hero carries");
            }
            perk_index.entry(perk.feature.clone()).or_default().push(i);
        }

        Ok(Self { last_patch: last_patch.into(), heroes, perks, hero_index, perk_index })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.last_patch, file.heroes, file.perks)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            heroes = catalog.heroes.len(),
            perks = catalog.perks.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn perks(&self) -> &[Perk] {
        &self.perks
    }

    pub fn last_patch(&self) -> &str {
        &self.last_patch
    }

    /// `None` when `lastPatch` is missing or not `YYYY/MM/DD`.
    pub fn last_patch_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.last_patch, PATCH_DATE_FORMAT).ok()
    }

    pub fn hero(&self, name: &str) -> Option<&Hero> {
        self.hero_index.get(name).map(|&i| &self.heroes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hero_index.contains_key(name)
    }

    /// Perks keyed by `feature`, in catalog order.
    pub fn perks_for<'a>(&'a self, feature: &str) -> impl Iterator<Item = &'a Perk> + 'a {
        self.perk_index
            .get(feature)
            .into_iter()
            .flatten()
            .map(move |&i| &self.perks[i])
    }

    /// Every species tag and class name, first-seen order over the hero table.
    pub fn features(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.heroes.iter().flat_map(Hero::features).filter(|f| seen.insert(*f)).collect()
    }
}

// ============================================================================
// Cached default (parsed once)
// ============================================================================

static DEFAULT_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Embedded catalog, parsed on first call.
pub fn default_catalog() -> &'static Catalog {
    DEFAULT_CATALOG.get_or_init(|| {
        Catalog::from_json(CATALOG_JSON).expect("Embedded hero catalog JSON is corrupted")
    })
}
