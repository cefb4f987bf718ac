use std::{
    cell::RefCell,
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    rc::Rc,
    thread,
};

mod config;
mod console;
mod controller;

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use dashboard_core::{Dashboard, ScenarioStore, SharedRenderer, SharedSurface};
use demo_data::{load_document, resolve_source, DocumentOrigin, Jitter, LoadedDocument};
use shared::{domain::ScenarioState, error::UserNotice};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{load_settings, Settings},
    console::ConsoleRenderer,
    controller::orchestration::{feed_script, run_event_loop},
};

/// Replays a toggle-dashboard session and prints every rendering call.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "dashboard.toml")]
    config: PathBuf,
    /// HTTP(S) URL of the aggregates document; wins over --data-path.
    #[arg(long)]
    data_url: Option<String>,
    #[arg(long)]
    data_path: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    skip_unchanged: bool,
    /// Session script; stdin when absent.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Element ids to treat as absent from the page.
    #[arg(long = "omit")]
    omitted: Vec<String>,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(v) = &self.data_url {
            settings.data_url = Some(v.clone());
        }
        if let Some(v) = &self.data_path {
            settings.data_path = Some(v.clone());
        }
        if let Some(v) = self.seed {
            settings.jitter_seed = v;
        }
        if self.skip_unchanged {
            settings.skip_unchanged = true;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    args.apply(&mut settings);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&args, &settings) {
        tracing::error!("startup failed: {err:#}");
        eprintln!("{}", UserNotice::load_failure().message);
        return Err(err);
    }
    Ok(())
}

fn run(args: &Args, settings: &Settings) -> Result<()> {
    let loaded = fetch_document(settings)?;
    match &loaded.origin {
        DocumentOrigin::Source(source) => println!("data {source}"),
        DocumentOrigin::Mock { reason } => println!("data mock ({reason})"),
    }

    let mut console = ConsoleRenderer::new(io::stdout());
    for element in &args.omitted {
        console.omit(element.as_str());
    }
    let console = Rc::new(RefCell::new(console));
    let renderer: SharedRenderer = console.clone();
    let surface: SharedSurface = console;

    let store = ScenarioStore::new(ScenarioState::default())
        .with_skip_unchanged(settings.skip_unchanged);
    let mut dashboard = Dashboard::new(store, renderer);
    demo_data::install(&mut dashboard, &surface, Jitter::new(settings.jitter_seed));
    dashboard.start();

    let script = match &args.script {
        Some(path) => Some(
            File::open(path)
                .with_context(|| format!("failed to open script '{}'", path.display()))?,
        ),
        None => None,
    };

    let (event_tx, event_rx) = bounded(256);
    let feeder = thread::spawn(move || match script {
        Some(file) => feed_script(BufReader::new(file), &event_tx),
        None => feed_script(io::stdin().lock(), &event_tx),
    });

    let applied = run_event_loop(&mut dashboard, &event_rx);
    let queued = feeder
        .join()
        .map_err(|_| anyhow::anyhow!("script reader thread panicked"))??;
    tracing::info!(
        queued,
        applied,
        scenario = %dashboard.store().scenario(),
        unattached = dashboard.unattached().len(),
        "session finished"
    );
    Ok(())
}

/// One-shot load on a throwaway runtime; the dashboard itself stays
/// single-threaded.
fn fetch_document(settings: &Settings) -> Result<LoadedDocument> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build runtime for data load")?;

    let source = match resolve_source(
        settings.data_url.as_deref(),
        settings.data_path.as_deref(),
        settings.fetch_timeout(),
    ) {
        Ok(source) => source,
        Err(err) => {
            tracing::warn!("ignoring data source: {err:#}");
            None
        }
    };
    Ok(runtime.block_on(load_document(source.as_deref())))
}
