use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use dotenvy::dotenv;
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, OffsetDateTime,
};

use rounds_application::prelude as flows;
use rounds_core::{
    entities::{Address, Distance, GeoPoint},
    gateways::geocoding::GeocodingGateway as _,
    usecases,
    util::pacing::Pacer,
};
use rounds_map::{geojson::GeoJsonWidget, MapSurface, MapView};

use crate::{config::Config, gateways, store::FileStore};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Parser)]
#[command(
    name = "rounds",
    about = "Route planning and mileage tracking for independent contractors",
    version
)]
struct Cli {
    #[arg(long, global = true, value_name = "FILE", help = "Configuration file")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan the route for one day of appointments
    Plan(PlanArgs),
    /// Resolve a single address to coordinates
    Geocode(GeocodeArgs),
    /// Manage the mileage log
    #[command(subcommand)]
    Miles(MilesCommands),
}

#[derive(Args)]
struct PlanArgs {
    #[arg(
        long,
        value_parser = parse_date,
        value_name = "DATE",
        help = "Day to plan as `2024-06-03` (defaults to today)"
    )]
    date: Option<Date>,
    #[arg(
        long,
        value_name = "ADDRESS",
        help = "Start address, overriding the saved preference (empty clears it)"
    )]
    start: Option<String>,
    #[arg(
        long,
        value_name = "ADDRESS",
        help = "End address, overriding the saved preference (empty clears it)"
    )]
    end: Option<String>,
    #[arg(
        long,
        action = ArgAction::SetTrue,
        help = "Persist the start and end addresses for the next runs"
    )]
    save_prefs: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "Write the planned route as a GeoJSON feature collection"
    )]
    geojson: Option<PathBuf>,
    #[arg(
        long,
        action = ArgAction::SetTrue,
        help = "Record the planned route in the mileage log"
    )]
    log_miles: bool,
}

#[derive(Args)]
struct GeocodeArgs {
    #[arg(value_name = "ADDRESS", help = "Address to resolve")]
    address: String,
}

#[derive(Subcommand)]
enum MilesCommands {
    /// Add an entry to the mileage log
    Add(MilesAddArgs),
    /// List the mileage log, newest first
    List,
}

#[derive(Args)]
struct MilesAddArgs {
    #[arg(
        long,
        value_parser = parse_date,
        value_name = "DATE",
        help = "Day of the trip (defaults to today)"
    )]
    date: Option<Date>,
    #[arg(long, value_name = "MILES", help = "Distance in miles")]
    miles: f64,
    #[arg(long, help = "Purpose of the trip")]
    purpose: Option<String>,
    #[arg(long, help = "Additional notes")]
    notes: Option<String>,
}

pub async fn run() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    let config = Config::try_load_from_file_or_default(cli.config.as_deref())?;
    let store = FileStore::try_load(&config.store.data_file)?;
    match cli.command {
        Commands::Plan(args) => plan(&config, &store, args).await,
        Commands::Geocode(args) => geocode(&config, args).await,
        Commands::Miles(MilesCommands::Add(args)) => miles_add(&store, args),
        Commands::Miles(MilesCommands::List) => miles_list(&store),
    }
}

async fn plan(config: &Config, store: &FileStore, args: PlanArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(today);
    let mut prefs = flows::load_route_prefs(store)?;
    if let Some(start) = &args.start {
        prefs.start_address = Some(Address::from(start.as_str())).filter(|a| !a.is_empty());
    }
    if let Some(end) = &args.end {
        prefs.end_address = Some(Address::from(end.as_str())).filter(|a| !a.is_empty());
    }
    if args.save_prefs {
        flows::save_route_prefs(store, &prefs)?;
        store.save()?;
    }

    let geocoder = gateways::geocoding_gateway(&config.geocoding)?;
    let pacer = Pacer::new(config.geocoding.lookup_spacing);

    let planned = if let Some(file) = &args.geojson {
        let mut surface = MapSurface::new();
        // The view is recentered on the first stop by the flow.
        let view = MapView::new(GeoPoint::from_lat_lng_deg(0.0, 0.0), config.map.zoom);
        surface.mount(GeoJsonWidget::new(), view);
        let planned =
            flows::plan_and_render(store, &geocoder, &pacer, &prefs, date, &mut surface).await?;
        let widget = surface.unmount().expect("Mounted map widget");
        fs::write(file, widget.to_json_string()?)
            .with_context(|| format!("Failed to write {}", file.display()))?;
        println!("Wrote {}", file.display());
        planned
    } else {
        flows::plan_route(store, &geocoder, &pacer, &prefs, date).await?
    };

    println!("Route for {date}:");
    for (number, stop) in planned.stops.iter().enumerate() {
        println!("{:>3}. {} ({})", number + 1, stop.label, stop.point);
    }
    if planned.skipped > 0 {
        println!("Skipped {} unresolved locations", planned.skipped);
    }
    println!("Estimated distance: {} mi", planned.distance);
    println!(
        "Directions: {}",
        usecases::build_directions_link(&planned.addresses)?
    );

    if args.log_miles {
        let entry = flows::log_planned_trip(store, &planned, date)?;
        store.save()?;
        println!("Logged {} mi in the mileage log", entry.distance);
    }
    Ok(())
}

async fn geocode(config: &Config, args: GeocodeArgs) -> Result<()> {
    let geocoder = gateways::geocoding_gateway(&config.geocoding)?;
    let address = Address::from(args.address);
    let Some(point) = geocoder.resolve_address(&address).await else {
        bail!("'{address}' could not be resolved");
    };
    println!("{point}");
    Ok(())
}

fn miles_add(store: &FileStore, args: MilesAddArgs) -> Result<()> {
    let entry = usecases::add_mileage_entry(
        store,
        usecases::NewMileageEntry {
            date: args.date.unwrap_or_else(today),
            distance: args.miles,
            purpose: args.purpose,
            notes: args.notes,
        },
    )?;
    store.save()?;
    println!("Logged {} mi for {}", entry.distance, entry.date);
    Ok(())
}

fn miles_list(store: &FileStore) -> Result<()> {
    let entries = usecases::mileage_log(store)?;
    if entries.is_empty() {
        println!("The mileage log is empty.");
        return Ok(());
    }
    for entry in &entries {
        let miles = entry.distance.to_string();
        let purpose = entry.purpose.as_deref().unwrap_or("-");
        println!("{}  {miles:>8} mi  {}", entry.date, purpose);
    }
    let total: Distance = entries.iter().map(|entry| entry.distance).sum();
    println!("Total: {} mi over {} entries", total, entries.len());
    Ok(())
}

fn parse_date(input: &str) -> Result<Date, String> {
    Date::parse(input, DATE_FORMAT).map_err(|err| format!("Invalid date '{input}': {err}"))
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parse_dates_from_the_command_line() {
        assert_eq!(date!(2024 - 06 - 03), parse_date("2024-06-03").unwrap());
        assert!(parse_date("03.06.2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }
}
