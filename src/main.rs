use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use log::Level;
use simplelog::{ConfigBuilder, WriteLogger};

use sports_events::core::clock::{Clock, SystemClock};
use sports_events::core::config::{self, ConfigNotes, Overrides};
use sports_events::core::service::EventsApiService;
use sports_events::core::store::EventStore;
use sports_events::network::NetworkManager;
use sports_events::tui;

#[derive(Parser)]
#[command(name = "sports-events", about = "Upcoming sports events with favorites")]
struct Args {
    /// Base URL of the events feed (overrides config file and env)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Fetch once, print the catalog to stdout and exit
    #[arg(long)]
    plain: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger needs the resolved config, so config loading only records
    // what it would have logged.
    let mut notes = ConfigNotes::default();
    let file_config = config::load_config(&mut notes).unwrap_or_else(|e| {
        eprintln!("Warning: {e}, using defaults");
        notes.record(Level::Warn, format!("{e}, using defaults"));
        config::AppConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &Overrides::from_env(args.base_url),
        &mut notes,
    );

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => eprintln!("Warning: cannot open log file {}: {e}", resolved.log_file),
    }
    notes.flush();

    log::info!("Sports events starting up with feed: {}", resolved.base_url);

    let api = EventsApiService::new(NetworkManager::default(), resolved.base_url.clone())
        .with_catalog_path(resolved.catalog_path.clone());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = Arc::new(EventStore::new(Arc::new(api), clock.clone()));

    if args.plain {
        store.refresh().await;
        let error = store.fetch_error();
        if !error.is_empty() {
            return Err(std::io::Error::other(error));
        }
        print!("{}", tui::plain::render_plain(&store.sports(), clock.now()));
        return Ok(());
    }

    tui::run(store, clock, resolved.toast)
}
