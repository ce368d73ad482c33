use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directory_core::{
    config::{load_settings, Settings},
    filter_panel::distinct_specialties,
    query::{self, QueryParams, QueryPatch},
    render::ListView,
    PageController,
};
use reqwest::Client;
use shared::domain::{ConsultationMode, Doctor, SortKey};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "doctor-tools", about = "Headless doctor directory queries")]
struct Cli {
    /// Roster endpoint returning a JSON array of doctors.
    #[arg(long, global = true)]
    roster_url: Option<String>,
    /// Read the roster from a local JSON file instead of the endpoint.
    #[arg(long, global = true)]
    roster_file: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the doctors a page URL shows.
    List {
        #[arg(long)]
        url: Option<String>,
    },
    /// Print every specialty in the roster, sorted.
    Specialties,
    /// Print the page URL for a set of filters.
    Link {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        mode: Option<String>,
        #[arg(long, value_delimiter = ',')]
        specialties: Vec<String>,
        #[arg(long)]
        sort: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref()).context("loading settings")?;
    if let Some(roster_url) = cli.roster_url {
        settings.roster_url = roster_url;
        settings.roster_file = None;
    }
    if let Some(roster_file) = cli.roster_file {
        settings.roster_file = Some(roster_file);
    }

    match cli.command {
        Command::List { url } => {
            let page_url = match url {
                Some(raw) => Url::parse(&raw).with_context(|| format!("invalid page url {raw:?}"))?,
                None => settings.page_url()?,
            };
            let roster = fetch_roster(&settings).await?;
            let page = page_for(&page_url, roster);
            print!("{}", ListView::from_doctors(page.filtered()));
            println!();
            println!("{} of {} doctors", page.filtered().len(), page.roster().len());
        }
        Command::Specialties => {
            let roster = fetch_roster(&settings).await?;
            for name in distinct_specialties(&roster) {
                println!("{name}");
            }
        }
        Command::Link {
            search,
            mode,
            specialties,
            sort,
        } => {
            let base = settings.page_url()?;
            let link = link_for(&base, search, mode, specialties, sort)?;
            println!("{link}");
        }
    }

    Ok(())
}

async fn fetch_roster(settings: &Settings) -> Result<Vec<Doctor>> {
    let source = settings.roster_location()?.into_source(Client::new());
    source
        .fetch()
        .await
        .with_context(|| format!("fetching roster from {}", source.describe()))
}

fn page_for(page_url: &Url, roster: Vec<Doctor>) -> PageController {
    let mut page = PageController::new(QueryParams::from_url(page_url));
    page.begin_fetch();
    page.roster_loaded(roster);
    page
}

fn link_for(
    base: &Url,
    search: Option<String>,
    mode: Option<String>,
    specialties: Vec<String>,
    sort: Option<String>,
) -> Result<Url> {
    let mut patch = QueryPatch::new();
    if let Some(search) = search.filter(|s| !s.is_empty()) {
        patch = patch.scalar(query::SEARCH, search);
    }
    if let Some(mode) = mode {
        if let Some(mode) = ConsultationMode::from_param(&mode)? {
            patch = patch.scalar(query::MODE, mode.label());
        }
    }
    patch = patch.list(query::SPECIALTIES, specialties);
    if let Some(sort) = sort {
        patch = patch.scalar(query::SORT, sort.parse::<SortKey>()?.as_param());
    }

    let mut params = QueryParams::from_url(base);
    params.patch(&patch);
    Ok(params.apply_to_url(base))
}
