//! Lineup screen state and its render model.
//!
//! The front-end owns a [`LineupView`] and feeds user input through
//! [`LineupView::apply`]; [`LineupView::render`] turns it into plain rows
//! for whatever draws the screen (terminal, JSON host).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::data::{Catalog, Hero};
use crate::search::matches_search;
use crate::sort::{sort_heroes, split_halves, SortColumn, SortState};
use crate::team::{aggregate_features, features_list, FeatureSummary, Lineup};

/// User input on the lineup screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "camelCase")]
pub enum ViewAction {
    /// Row click
    ToggleHero(String),
    /// Header click
    SortBy(SortColumn),
    /// Search box edit
    Search(String),
    /// "Clear lineup" link
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupView {
    pub sort: SortState,
    pub search: String,
    /// Hide rows not matching a non-empty `search` instead of only highlighting them
    pub only_matches: bool,
    pub lineup: Lineup,
}

/// A species or class label in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCell {
    pub name: String,
    /// Feature is carried by someone in the lineup
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRow {
    pub name: String,
    pub species: Vec<FeatureCell>,
    pub class: FeatureCell,
    pub cost: u32,
    pub picked: bool,
    /// Name matches the search box
    pub name_highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedView {
    pub last_patch: String,
    pub sort: SortState,
    pub left: Vec<HeroRow>,
    pub right: Vec<HeroRow>,
    pub team_size: usize,
    pub features: Vec<FeatureSummary>,
    /// `heroes=...`, empty for an empty lineup
    pub share_query: String,
}

impl LineupView {
    pub fn new(lineup: Lineup) -> Self {
        Self { lineup, ..Self::default() }
    }

    /// Apply one input. Returns `true` when the lineup (and so the share link) changed.
    pub fn apply(&mut self, catalog: &Catalog, action: ViewAction) -> bool {
        match action {
            ViewAction::ToggleHero(name) => self.lineup.toggle(catalog, &name),
            ViewAction::SortBy(column) => {
                self.sort.toggle(column);
                false
            }
            ViewAction::Search(text) => {
                self.search = text;
                false
            }
            ViewAction::Clear => {
                let changed = !self.lineup.is_empty();
                self.lineup.clear();
                changed
            }
        }
    }

    pub fn render(&self, catalog: &Catalog) -> RenderedView {
        let picked = self.lineup.names();
        let present: FxHashSet<String> = features_list(catalog, picked).into_iter().collect();

        let filtering = self.only_matches && !self.search.is_empty();
        let rows: Vec<HeroRow> = sort_heroes(catalog.heroes(), &self.sort)
            .into_iter()
            .filter(|hero| !filtering || matches_search(&hero.name, &self.search))
            .map(|hero| self.row(hero, &present))
            .collect();
        let (left, right) = split_halves(&rows);

        RenderedView {
            last_patch: catalog.last_patch().to_string(),
            sort: self.sort,
            left: left.to_vec(),
            right: right.to_vec(),
            team_size: self.lineup.len(),
            features: aggregate_features(catalog, picked),
            share_query: self.lineup.share_query(),
        }
    }

    fn row(&self, hero: &Hero, present: &FxHashSet<String>) -> HeroRow {
        let cell = |name: &str| FeatureCell {
            name: name.to_string(),
            highlight: present.contains(name),
        };
        HeroRow {
            name: hero.name.clone(),
            species: hero.species.iter().map(|s| cell(s)).collect(),
            class: cell(&hero.class_name),
            cost: hero.cost,
            picked: self.lineup.contains(&hero.name),
            name_highlight: matches_search(&hero.name, &self.search),
        }
    }
}
