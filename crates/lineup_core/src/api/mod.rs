pub mod lineup_json;

pub use lineup_json::{
    lineup_view_json, lineup_view_json_with, team_summary_json, team_summary_json_with,
    LineupRequest, LineupViewResponse, TeamSummaryResponse,
};
