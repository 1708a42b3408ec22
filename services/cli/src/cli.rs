use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use outfitly::catalog::OutfitCatalog;
use outfitly::domain::{Gender, ThermalProfile};
use outfitly::error::AppError;
use outfitly::orchestrator::{RecommendationOrchestrator, RecommendationUpdate};
use outfitly::preferences::{PreferenceKey, PreferencesStore};
use outfitly::weather::{fetch_conditions, Location, Resource, WeatherFeed};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::infra::{self, Overrides};
use crate::render;

#[derive(Parser, Debug)]
#[command(
    name = "outfitly",
    about = "Weather-aware outfit recommendations from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the weather once and print a recommendation
    Recommend(RecommendArgs),
    /// Refresh the weather periodically and print every new recommendation
    Watch(WatchArgs),
    /// Inspect or change stored preferences
    Preferences {
        #[command(subcommand)]
        command: PreferencesCommand,
    },
    /// Inspect the outfit catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Args, Debug, Default)]
struct LocationArgs {
    /// City name. Defaults to the last city a recommendation was made for.
    city: Option<String>,
    /// Latitude; used together with --lon instead of a city
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude; used together with --lat instead of a city
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Use this gender for this run only (male, female, unisex)
    #[arg(long)]
    gender: Option<Gender>,
    /// Use this thermal profile for this run only (normal, pigeon, warm-blooded)
    #[arg(long)]
    profile: Option<ThermalProfile>,
}

impl LocationArgs {
    /// Where to fetch weather for, plus the flags that apply to this run only.
    fn resolve(self, store: &PreferencesStore) -> Result<(Location, Overrides), AppError> {
        let location = infra::resolve_location(self.city, self.lat, self.lon, store)?;
        let overrides = Overrides {
            gender: self.gender,
            thermal_profile: self.profile,
        };
        Ok((location, overrides))
    }
}

#[derive(Args, Debug)]
struct RecommendArgs {
    #[command(flatten)]
    location: LocationArgs,
    /// Also fetch the forecast and include forecast risk alerts
    #[arg(long)]
    forecast: bool,
    /// Print the recommendation as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct WatchArgs {
    #[command(flatten)]
    location: LocationArgs,
    /// Seconds between refreshes
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,
    /// Stop after this many refreshes
    #[arg(long)]
    refreshes: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum PreferencesCommand {
    /// Print every stored preference
    Show,
    /// Validate and store one preference
    Set { key: PreferenceKey, value: String },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List every outfit in the catalog
    List {
        /// Import this CSV instead of the configured catalog
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Recommend(args) => recommend(args).await,
        Command::Watch(args) => watch(args).await,
        Command::Preferences { command } => preferences(command),
        Command::Catalog {
            command: CatalogCommand::List { csv },
        } => {
            let config = infra::bootstrap()?;
            let catalog = infra::catalog(&config.storage, csv.as_deref())?;
            render::print_outfits(&catalog.all_outfits()?);
            Ok(())
        }
    }
}

async fn recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = infra::bootstrap()?;
    let store = infra::preferences(&config.storage)?;
    let catalog = infra::catalog(&config.storage, None)?;
    let client = infra::weather_client(&config)?;
    let (location, overrides) = args.location.resolve(&store)?;

    let conditions = fetch_conditions(client.as_ref(), &location, args.forecast).await?;
    let preferences = overrides.apply(store.snapshot());

    let orchestrator = RecommendationOrchestrator::new(catalog);
    let update = orchestrator.recommend(&conditions, &preferences)?;
    store.update_last_city(conditions.weather.city_name.clone())?;

    if args.json {
        let body = serde_json::to_string_pretty(&update).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        render::print_weather(&conditions.weather);
        render::print_forecast(&conditions);
        render::print_update(&update);
    }
    Ok(())
}

async fn watch(args: WatchArgs) -> Result<(), AppError> {
    let config = infra::bootstrap()?;
    let store = infra::preferences(&config.storage)?;
    let catalog = infra::catalog(&config.storage, None)?;
    let client = infra::weather_client(&config)?;
    let (location, overrides) = args.location.resolve(&store)?;

    let feed = WeatherFeed::new(client);
    let orchestrator = Arc::new(RecommendationOrchestrator::new(catalog));
    let (sender, mut updates) = mpsc::channel(8);
    let conditions = feed.subscribe_conditions();
    let preferences = infra::with_overrides(store.subscribe(), overrides);
    let worker =
        tokio::spawn(async move { orchestrator.run(conditions, preferences, sender).await });

    info!(%location, interval_secs = args.interval, "watching weather");
    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval));
    let mut completed = 0u32;
    let mut printer = UpdatePrinter::default();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                feed.refresh(&location).await;
                completed += 1;
                match feed.state().resource() {
                    Resource::Success(current) => {
                        render::print_weather(&current.weather);
                        store.update_last_city(current.weather.city_name)?;
                    }
                    Resource::Error(message) => {
                        warn!(%message, "weather refresh failed");
                        println!("offline: {message}");
                        feed.dismiss_error();
                    }
                    Resource::Loading => {}
                }
                if args.refreshes.is_some_and(|limit| completed >= limit) {
                    break;
                }
            }
            Some(emitted) = updates.recv() => printer.print(emitted),
        }
    }

    // Closing both inputs lets the loop flush its last update and stop.
    drop(feed);
    drop(store);
    while let Some(emitted) = updates.recv().await {
        printer.print(emitted);
    }
    if let Err(err) = worker.await {
        warn!(error = %err, "recommendation worker aborted");
    }
    Ok(())
}

/// Prints each distinct recommendation once; failures are always shown.
#[derive(Default)]
struct UpdatePrinter {
    last: Option<RecommendationUpdate>,
}

impl UpdatePrinter {
    fn print(&mut self, emitted: Resource<RecommendationUpdate>) {
        match emitted {
            Resource::Success(update) => {
                if self.last.as_ref() != Some(&update) {
                    render::print_update(&update);
                    self.last = Some(update);
                }
            }
            Resource::Error(message) => {
                println!("recommendation unavailable: {message}");
                self.last = None;
            }
            Resource::Loading => {}
        }
    }
}

fn preferences(command: PreferencesCommand) -> Result<(), AppError> {
    let config = infra::bootstrap()?;
    let store = infra::preferences(&config.storage)?;

    match command {
        PreferencesCommand::Show => render::print_preferences(&store.snapshot()),
        PreferencesCommand::Set { key, value } => {
            if store.set_raw(key, &value)? {
                println!("{key} updated");
            } else {
                println!("{key} unchanged");
            }
        }
    }
    Ok(())
}
