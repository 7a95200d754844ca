// Lineup JSON API Layer
// Lets a UI host drive the lineup screen with JSON strings

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::data::{default_catalog, Catalog};
use crate::error::{LineupError, Result};
use crate::sort::{SortColumn, SortState};
use crate::team::{aggregate_features, FeatureSummary, Lineup};
use crate::view::{LineupView, RenderedView, ViewAction};

// ========== Request/Response Structures ==========

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupRequest {
    /// Share token (`Axe,Tiny`)
    #[serde(default)]
    pub heroes: Option<String>,
    /// Raw query string or link; mutually exclusive with `heroes`
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub ascending: Option<bool>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub only_matches: bool,
    /// Names toggled in order after decoding the lineup
    #[serde(default)]
    pub toggle: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupViewResponse {
    pub success: bool,
    pub view: Option<RenderedView>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaryResponse {
    pub success: bool,
    pub heroes: Vec<String>,
    pub team_size: usize,
    pub features: Vec<FeatureSummary>,
    pub share_query: String,
    pub error: Option<String>,
}

impl LineupRequest {
    /// Empty input means defaults.
    pub fn parse(request_json: &str) -> Result<Self> {
        if request_json.trim().is_empty() {
            return Ok(Self::default());
        }
        let request: Self = serde_json::from_str(request_json)?;
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        if self.heroes.is_some() && self.query.is_some() {
            return Err(LineupError::InvalidRequest(
                "heroes and query are mutually exclusive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn lineup(&self, catalog: &Catalog) -> Lineup {
        match (&self.heroes, &self.query) {
            (Some(token), _) => Lineup::from_share_token(catalog, token),
            (None, Some(query)) => Lineup::from_query(catalog, query),
            (None, None) => Lineup::new(),
        }
    }

    /// Build the screen state, then replay `toggle`.
    pub fn into_view(self, catalog: &Catalog) -> LineupView {
        let lineup = self.lineup(catalog);
        let sort = SortState::new(
            self.sort_by.as_deref().map(SortColumn::parse).unwrap_or_default(),
            self.ascending.unwrap_or(true),
        );
        let mut view = LineupView {
            sort,
            search: self.search.unwrap_or_default(),
            only_matches: self.only_matches,
            lineup,
        };
        for name in self.toggle {
            if !view.apply(catalog, ViewAction::ToggleHero(name.clone())) {
                debug!(name = %name, "toggle ignored");
            }
        }
        view
    }
}

fn to_json<T: Serialize>(response: &T) -> String {
    serde_json::to_string(response)
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}

fn request_error(err: LineupError) -> String {
    if err.is_user_error() {
        warn!(error = %err, "rejecting lineup request");
        format!("Invalid request format: {}", err)
    } else {
        error!(error = %err, "lineup request failed");
        format!("Internal error: {}", err)
    }
}

// ========== Public API Functions ==========

/// Render the full lineup screen against the embedded catalog.
pub fn lineup_view_json(request_json: &str) -> String {
    lineup_view_json_with(default_catalog(), request_json)
}

pub fn lineup_view_json_with(catalog: &Catalog, request_json: &str) -> String {
    let request = match LineupRequest::parse(request_json) {
        Ok(req) => req,
        Err(e) => {
            return to_json(&LineupViewResponse {
                success: false,
                view: None,
                error: Some(request_error(e)),
            });
        }
    };

    let view = request.into_view(catalog);
    to_json(&LineupViewResponse { success: true, view: Some(view.render(catalog)), error: None })
}

/// Team panel only: lineup, feature counts and share query.
pub fn team_summary_json(request_json: &str) -> String {
    team_summary_json_with(default_catalog(), request_json)
}

pub fn team_summary_json_with(catalog: &Catalog, request_json: &str) -> String {
    let request = match LineupRequest::parse(request_json) {
        Ok(req) => req,
        Err(e) => {
            return to_json(&TeamSummaryResponse {
                success: false,
                heroes: vec![],
                team_size: 0,
                features: vec![],
                share_query: String::new(),
                error: Some(request_error(e)),
            });
        }
    };

    let lineup = request.into_view(catalog).lineup;
    to_json(&TeamSummaryResponse {
        success: true,
        heroes: lineup.names().to_vec(),
        team_size: lineup.len(),
        features: aggregate_features(catalog, lineup.names()),
        share_query: lineup.share_query(),
        error: None,
    })
}
