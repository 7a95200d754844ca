//! Plain-text rendering of the lineup screen.
//!
//! Markers: `+` before a picked hero, `<` after a name matching the search,
//! `[Feature]` for a species/class present in the lineup.

use std::fmt::Write;

use lineup_core::{Catalog, FeatureCell, FeatureSummary, HeroRow, RenderedView};

const NAME_WIDTH: usize = 21;
const SPECIES_WIDTH: usize = 18;
const CLASS_WIDTH: usize = 14;
const COST_WIDTH: usize = 4;
const SEPARATOR: &str = " | ";

fn cell(feature: &FeatureCell) -> String {
    if feature.highlight {
        format!("[{}]", feature.name)
    } else {
        feature.name.clone()
    }
}

fn row_width() -> usize {
    2 + NAME_WIDTH + 1 + SPECIES_WIDTH + 1 + CLASS_WIDTH + 1 + COST_WIDTH
}

fn format_row(row: Option<&HeroRow>) -> String {
    let Some(row) = row else {
        return " ".repeat(row_width());
    };
    let marker = if row.picked { '+' } else { ' ' };
    let name = if row.name_highlight { format!("{}<", row.name) } else { row.name.clone() };
    let species = row.species.iter().map(cell).collect::<Vec<_>>().join(" ");
    format!(
        "{} {:<nw$} {:<sw$} {:<cw$} {:>kw$}",
        marker,
        name,
        species,
        cell(&row.class),
        row.cost,
        nw = NAME_WIDTH,
        sw = SPECIES_WIDTH,
        cw = CLASS_WIDTH,
        kw = COST_WIDTH,
    )
}

fn format_header() -> String {
    format!(
        "  {:<nw$} {:<sw$} {:<cw$} {:>kw$}",
        "Name",
        "Species",
        "Class",
        "Cost",
        nw = NAME_WIDTH,
        sw = SPECIES_WIDTH,
        cw = CLASS_WIDTH,
        kw = COST_WIDTH,
    )
}

/// Two hero tables side by side, followed by the team panel.
pub fn render_table(view: &RenderedView) -> String {
    let mut out = String::new();
    let direction = if view.sort.ascending { "ascending" } else { "descending" };
    let _ = writeln!(
        out,
        "Last patch: {}    Sort: {} {}",
        view.last_patch, view.sort.column, direction
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}{}{}", format_header(), SEPARATOR, format_header());

    let height = view.left.len().max(view.right.len());
    for i in 0..height {
        let line = format!(
            "{}{}{}",
            format_row(view.left.get(i)),
            SEPARATOR,
            format_row(view.right.get(i))
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = writeln!(out);
    out.push_str(&render_team(view.team_size, &view.features, &view.share_query));
    out
}

/// "Team size" panel with feature counts and active perks.
pub fn render_team(team_size: usize, features: &[FeatureSummary], share_query: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Team size: {}", team_size);
    for summary in features {
        let _ = writeln!(out, "{} x {}", summary.feature, summary.count);
        for perk in &summary.active_perks {
            let _ = writeln!(out, "  ({}): {}", perk.required_count, perk.description);
        }
    }
    if share_query.is_empty() {
        let _ = writeln!(out, "Share: (empty lineup)");
    } else {
        let _ = writeln!(out, "Share: ?{}", share_query);
    }
    out
}

/// Every feature with all of its perks, inactive ones included.
pub fn render_features(catalog: &Catalog) -> String {
    let mut out = String::new();
    for feature in catalog.features() {
        let carriers = catalog.heroes().iter().filter(|h| h.has_feature(feature)).count();
        let _ = writeln!(out, "{} ({} heroes)", feature, carriers);
        for perk in catalog.perks_for(feature) {
            let _ = writeln!(out, "  ({}): {}", perk.required_count, perk.description);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::{default_catalog, Lineup, LineupView};

    #[test]
    fn test_render_table_marks_picked_and_highlighted() {
        let catalog = default_catalog();
        let mut view = LineupView::new(Lineup::from_names(catalog, ["Axe"]));
        view.search = "tin".to_string();
        let text = render_table(&view.render(catalog));

        assert!(text.starts_with("Last patch: 2018/02/05    Sort: cost ascending"));
        assert!(text.contains("+ Axe "));
        assert!(text.contains("[Orc]"));
        assert!(text.contains("[Warrior]"));
        assert!(text.contains("Tinker<"));
        assert!(text.contains("Team size: 1"));
        assert!(text.contains("Share: ?heroes=Axe"));
    }

    #[test]
    fn test_render_table_row_count() {
        let catalog = default_catalog();
        let text = render_table(&LineupView::default().render(catalog));
        let rows = text.lines().skip(3).take_while(|l| !l.is_empty()).count();
        assert_eq!(rows, 26);
    }

    #[test]
    fn test_render_team_panel() {
        let catalog = default_catalog();
        let lineup = Lineup::from_names(catalog, ["Enchantress", "Venomancer"]);
        let features = lineup_core::aggregate_features(catalog, lineup.names());
        let text = render_team(lineup.len(), &features, &lineup.share_query());

        let expected = "Team size: 2\n\
                        Beast x 2\n  (2): All friendly units +10% attack damage\n\
                        Druid x 1\n\
                        Warlock x 1\n\
                        Share: ?heroes=Enchantress,Venomancer\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_team_empty() {
        let text = render_team(0, &[], "");
        assert_eq!(text, "Team size: 0\nShare: (empty lineup)\n");
    }

    #[test]
    fn test_render_features_lists_inactive_perks() {
        let text = render_features(default_catalog());
        assert!(text.starts_with("Orc (4 heroes)\n  (2): Friendly orcs gain +250 max HP\n"));
        assert!(text.contains("  (9): Friendly warriors gain another +9 armor"));
    }
}
