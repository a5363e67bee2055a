use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Client;
use snapdash::{
    export,
    render::{self, Dashboard},
    Config, Pipeline, Section,
};
use std::path::PathBuf;
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the SNAP participation dashboard from ACS 5-year estimates.
#[derive(Parser, Debug)]
#[command(name = "snapdash", version)]
struct Args {
    /// YAML config file (defaults to ./snapdash.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ignore cached responses and fetch again
    #[arg(long, global = true)]
    refresh: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the dashboard page
    Render {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print one resolved view as JSON
    View {
        /// choropleth, bar or scatter
        #[arg(long)]
        section: Section,
        /// Dropdown label, e.g. "Unemployment Rate"
        #[arg(long)]
        option: String,
    },
    /// Write the feature table to Parquet
    Export {
        #[arg(long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,snapdash=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    // ─── 2) config + pipeline ────────────────────────────────────────
    let config = Config::load(args.config.as_deref())?;
    info!(endpoint = %config.endpoint, geography = %config.geography, "startup");
    let source = config.endpoint.clone();
    let default_output = config.output.clone();
    let pipeline = Pipeline::new(Client::new(), config)?;
    if args.refresh {
        pipeline.refresh()?;
    }

    // ─── 3) build the feature table ──────────────────────────────────
    let start = Instant::now();
    let table = pipeline.table().await?;
    info!(
        rows = table.len(),
        dropped = table.dropped().len(),
        elapsed = ?start.elapsed(),
        "feature table ready"
    );

    // ─── 4) dispatch ─────────────────────────────────────────────────
    match args.command.unwrap_or(Command::Render { output: None }) {
        Command::Render { output } => {
            let path = output.unwrap_or(default_output);
            render::write_dashboard(&table, &Dashboard::new(source), &path)?;
        }
        Command::View { section, option } => {
            let view = section.resolve(&option).view(&table);
            let json = serde_json::to_string_pretty(&render::render_view(&view))
                .context("serialising view")?;
            println!("{}", json);
        }
        Command::Export { output } => {
            export::write_parquet(&table, &output)?;
        }
    }
    Ok(())
}
