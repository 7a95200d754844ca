//! Lineup planner CLI
//!
//! Sortable hero table, team synergies and share links in the terminal.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use lineup_core::{Catalog, Lineup, LineupView, SortColumn, SortState, ViewAction};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Plan and share Auto Chess lineups", long_about = None)]
struct Cli {
    /// Catalog JSON file (embedded catalog when unset)
    #[arg(long, global = true, env = "LINEUP_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Explicit tracing filter, e.g. "lineup_core=debug"
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct LineupArgs {
    /// Share token, e.g. "Axe,Shadow Shaman"
    #[arg(long, conflicts_with = "query")]
    heroes: Option<String>,

    /// Query string or full share link, e.g. "?heroes=Axe,Tiny"
    #[arg(long)]
    query: Option<String>,
}

#[cfg(feature = "cli")]
impl LineupArgs {
    fn lineup(&self, catalog: &Catalog) -> Lineup {
        match (&self.heroes, &self.query) {
            (Some(token), _) => Lineup::from_share_token(catalog, token),
            (None, Some(query)) => Lineup::from_query(catalog, query),
            (None, None) => Lineup::new(),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum JsonKind {
    /// Full screen: sorted rows, team panel, share query
    View,
    /// Team panel only
    Team,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print the hero table and the team panel
    Table {
        #[command(flatten)]
        lineup: LineupArgs,

        /// Sort column: name, species, class or cost
        #[arg(long, default_value = "cost")]
        sort: String,

        /// Sort descending
        #[arg(long, default_value = "false")]
        desc: bool,

        /// Highlight heroes whose name contains this text
        #[arg(long)]
        search: Option<String>,

        /// Only list heroes matching --search
        #[arg(long, default_value = "false")]
        only_matches: bool,
    },

    /// Print team size, feature counts and active perks
    Team {
        #[command(flatten)]
        lineup: LineupArgs,
    },

    /// Add/remove heroes and print the resulting share link
    Toggle {
        #[command(flatten)]
        lineup: LineupArgs,

        /// Page path the link points to
        #[arg(long, default_value = "/")]
        base: String,

        /// Hero names to toggle, in order
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List every feature with its perks
    Features {
        /// Print perks as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Answer a JSON API request (reads stdin when REQUEST is omitted)
    Json {
        #[arg(value_enum)]
        kind: JsonKind,

        request: Option<String>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    lineup_cli::logging::init_logging(cli.verbose, cli.log_filter.as_deref());

    let catalog = lineup_cli::load_catalog(cli.catalog.as_deref())?;
    tracing::debug!(heroes = catalog.heroes().len(), "catalog ready");

    match cli.command {
        Commands::Table { lineup, sort, desc, search, only_matches } => {
            let view = LineupView {
                sort: SortState::new(SortColumn::parse(&sort), !desc),
                search: search.unwrap_or_default(),
                only_matches,
                lineup: lineup.lineup(&catalog),
            };
            print!("{}", lineup_cli::render_table(&view.render(&catalog)));
        }

        Commands::Team { lineup } => {
            let lineup = lineup.lineup(&catalog);
            let features = lineup_core::aggregate_features(&catalog, lineup.names());
            print!("{}", lineup_cli::render_team(lineup.len(), &features, &lineup.share_query()));
        }

        Commands::Toggle { lineup, base, names } => {
            let mut view = LineupView::new(lineup.lineup(&catalog));
            for name in names {
                if !view.apply(&catalog, ViewAction::ToggleHero(name.clone())) {
                    eprintln!("Unknown hero ignored: {}", name);
                }
            }
            println!("{}", view.lineup.share_link(&base));
        }

        Commands::Features { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.perks())?);
            } else {
                print!("{}", lineup_cli::render_features(&catalog));
            }
        }

        Commands::Json { kind, request } => {
            let request = match request {
                Some(request) => request,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            let response = match kind {
                JsonKind::View => lineup_core::api::lineup_view_json_with(&catalog, &request),
                JsonKind::Team => lineup_core::api::team_summary_json_with(&catalog, &request),
            };
            println!("{}", response);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("lineup CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
