// 라인업 (선택된 영웅 목록)
use serde::Serialize;
use tracing::debug;

use super::share;
use crate::data::{Catalog, Hero};

/// Picked heroes in pick order, no duplicates.
///
/// Serializes as a plain name array. Built only through the catalog-checked
/// constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lineup {
    names: Vec<String>,
}

impl Lineup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep catalog names only, first occurrence wins.
    pub fn from_names<I, S>(catalog: &Catalog, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lineup = Self::new();
        for name in names {
            let name = name.as_ref();
            if !catalog.contains(name) {
                debug!(name, "dropping unknown hero");
                continue;
            }
            if !lineup.contains(name) {
                lineup.names.push(name.to_string());
            }
        }
        lineup
    }

    /// Decode a share token (`Axe,Tiny`).
    pub fn from_share_token(catalog: &Catalog, token: &str) -> Self {
        Self::from_names(catalog, share::decode_names(token))
    }

    /// Read the `heroes` parameter of a query string; empty when absent or ambiguous.
    pub fn from_query(catalog: &Catalog, query: &str) -> Self {
        match share::parse_query(query) {
            Some(token) => Self::from_share_token(catalog, &token),
            None => Self::new(),
        }
    }

    /// Add if absent, remove if present. Returns `true` when changed.
    ///
    /// Unknown names are ignored.
    pub fn toggle(&mut self, catalog: &Catalog, name: &str) -> bool {
        if let Some(index) = self.position(name) {
            self.names.remove(index);
            return true;
        }
        if !catalog.contains(name) {
            debug!(name, "ignoring toggle of unknown hero");
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Catalog records in pick order.
    pub fn heroes<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Hero> + 'a {
        self.names.iter().filter_map(|n| catalog.hero(n))
    }

    pub fn share_token(&self) -> String {
        share::encode_names(&self.names)
    }

    pub fn share_query(&self) -> String {
        share::share_query(&self.names)
    }

    pub fn share_link(&self, base: &str) -> String {
        share::share_link(base, &self.names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_catalog;

    #[test]
    fn test_toggle_adds_then_removes() {
        let catalog = default_catalog();
        let mut lineup = Lineup::new();

        assert!(lineup.toggle(catalog, "Axe"));
        assert!(lineup.toggle(catalog, "Tiny"));
        assert!(lineup.toggle(catalog, "Lina"));
        assert_eq!(lineup.names(), ["Axe", "Tiny", "Lina"]);

        assert!(lineup.toggle(catalog, "Tiny"));
        assert_eq!(lineup.names(), ["Axe", "Lina"]);
        assert!(!lineup.contains("Tiny"));

        // re-adding appends at the end
        assert!(lineup.toggle(catalog, "Tiny"));
        assert_eq!(lineup.names(), ["Axe", "Lina", "Tiny"]);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut lineup = Lineup::new();
        assert!(!lineup.toggle(default_catalog(), "Pudge"));
        assert!(lineup.is_empty());
    }

    #[test]
    fn test_from_names_filters_and_dedupes() {
        let lineup =
            Lineup::from_names(default_catalog(), ["Axe", "Nobody", "Tiny", "Axe", "", "Lina"]);
        assert_eq!(lineup.names(), ["Axe", "Tiny", "Lina"]);
        assert_eq!(lineup.len(), 3);
    }

    #[test]
    fn test_from_query() {
        let catalog = default_catalog();
        let lineup = Lineup::from_query(catalog, "?heroes=Axe,Shadow%20Shaman,Bogus");
        assert_eq!(lineup.names(), ["Axe", "Shadow Shaman"]);

        assert!(Lineup::from_query(catalog, "?other=1").is_empty());
        assert!(Lineup::from_query(catalog, "?heroes=Axe&heroes=Tiny").is_empty());
    }

    #[test]
    fn test_share_round_trip_through_catalog() {
        let catalog = default_catalog();
        let lineup = Lineup::from_names(catalog, ["Nature's Prophet", "Anti-Mage", "Axe"]);
        let query = lineup.share_query();
        assert_eq!(Lineup::from_query(catalog, &query), lineup);
        assert_eq!(Lineup::from_share_token(catalog, &lineup.share_token()), lineup);
    }

    #[test]
    fn test_clear_and_heroes() {
        let catalog = default_catalog();
        let mut lineup = Lineup::from_names(catalog, ["Tiny", "Axe"]);
        let costs: Vec<u32> = lineup.heroes(catalog).map(|h| h.cost).collect();
        assert_eq!(costs, vec![1, 1]);

        lineup.clear();
        assert!(lineup.is_empty());
        assert_eq!(lineup.share_link("/"), "/");
    }

    #[test]
    fn test_serializes_as_name_array() {
        let catalog = default_catalog();
        let lineup = Lineup::from_names(catalog, ["Axe", "Nobody", "Axe", "Tiny"]);
        assert_eq!(serde_json::to_string(&lineup).unwrap(), r#"["Axe","Tiny"]"#);
    }
}
