//! AltitudeReady CLI - altitude acclimation planner.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use altready_core::{
    city_elevation, compute_plan_with, generate_schedule, search_cities, AcclimationPlan,
    ActivityLevel, PlannerConfig, Trip, TripId, TripInput, UserProfile,
};
use altready_progress::{
    departs_before_acclimated, trip_full_intensity_date, trip_status, BasicProgressTracker,
    ProgressSnapshot, ProgressTracker, TripProgress,
};
use altready_storage::{JsonStorage, Storage};

#[derive(Parser)]
#[command(name = "altready")]
#[command(about = "Plan altitude acclimation for mountain trips", long_about = None)]
struct Cli {
    /// Directory for saved trips and profile
    #[arg(long, env = "ALTREADY_DATA_DIR", default_value = ".altready")]
    data_dir: PathBuf,

    /// Planner constants (JSON)
    #[arg(long, env = "ALTREADY_PLANNER_CONFIG")]
    planner_config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute an acclimation plan without saving it
    Plan {
        /// Home altitude in feet, or a known city
        #[arg(long)]
        home: String,
        /// Destination altitude in feet, or a known city
        #[arg(long)]
        destination: String,
        /// Fitness level (beginner, average, fit, athlete)
        #[arg(long)]
        fitness: Option<String>,
        /// Planned activity (light, moderate, intense, extreme)
        #[arg(long)]
        activity: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Manage saved trips
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Show acclimation progress for a trip
    Progress {
        /// Trip ID
        id: String,
    },
    /// Show trip counts and active trip progress
    Status,
    /// Search the city elevation table
    Cities {
        /// At least two characters
        query: String,
    },
    /// Manage the user profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand)]
enum TripCommands {
    /// Add a trip
    Add {
        /// Destination name
        #[arg(long)]
        destination: String,
        /// Trip title
        #[arg(long)]
        name: Option<String>,
        /// Home altitude in feet (defaults to the profile)
        #[arg(long)]
        home: Option<String>,
        /// Destination altitude in feet (defaults to a city lookup)
        #[arg(long)]
        destination_altitude: Option<String>,
        /// Arrival date (YYYY-MM-DD)
        #[arg(long)]
        arrival: String,
        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        departure: String,
        /// Fitness level
        #[arg(long)]
        fitness: Option<String>,
        /// Planned activity
        #[arg(long)]
        activity: Option<String>,
    },
    /// List trips, newest first
    List,
    /// Show trip details and schedule
    Show {
        /// Trip ID
        id: String,
    },
    /// Delete a trip
    Delete {
        /// Trip ID
        id: String,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the profile
    Show,
    /// Update profile fields
    Set {
        /// Your name
        #[arg(long)]
        name: Option<String>,
        /// Home city
        #[arg(long)]
        home_city: Option<String>,
        /// Home altitude in feet
        #[arg(long)]
        home_altitude: Option<i32>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_planner_config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        Some(path) => {
            let config = PlannerConfig::from_json_file(path)
                .with_context(|| format!("Failed to load planner config {}", path.display()))?;
            debug!(path = %path.display(), "Loaded planner config");
            Ok(config)
        }
        None => Ok(PlannerConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_planner_config(cli.planner_config.as_deref())?;

    match cli.command {
        Commands::Plan { home, destination, fitness, activity, json } => {
            let input = TripInput {
                home_altitude: Some(altitude_arg(&home)),
                destination_altitude: Some(altitude_arg(&destination)),
                fitness_level: fitness,
                activity_level: activity,
                ..Default::default()
            };
            let params = input.validate()?;
            let plan = compute_plan_with(&params, &config);

            if json {
                let schedule = generate_schedule(&plan);
                let out = serde_json::json!({ "plan": plan, "schedule": schedule });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_plan(&plan, params.activity_level);
                print_schedule(&plan);
            }
        }
        Commands::Trip { command } => {
            let mut storage = JsonStorage::new(&cli.data_dir).await?;
            run_trip_command(&mut storage, command, &config).await?;
        }
        Commands::Progress { id } => {
            let trip_id = parse_trip_id(&id)?;
            let storage = JsonStorage::new(&cli.data_dir).await?;
            let tracker = BasicProgressTracker::new(storage);
            let Some(result) = tracker.get_trip_progress(trip_id).await else {
                println!("Trip not found");
                return Ok(());
            };

            print_trip_progress(&result);
        }
        Commands::Status => {
            let storage = JsonStorage::new(&cli.data_dir).await?;
            let tracker = BasicProgressTracker::new(storage);
            let snapshot = tracker.snapshot().await;

            println!("AltitudeReady Status");
            println!("  Total trips: {}", snapshot.total_trips);
            println!("  Upcoming: {}", snapshot.upcoming_trips);
            println!("  Active: {}", snapshot.active_trips);
            println!("  Past: {}", snapshot.past_trips);

            for result in &snapshot.active_progress {
                println!();
                print_trip_progress(result);
            }
        }
        Commands::Cities { query } => {
            let matches = search_cities(&query);
            if matches.is_empty() {
                println!("No matching cities");
            }
            for key in matches {
                if let Some(feet) = city_elevation(&key) {
                    println!("  {:<32} {:>6} ft", key, feet);
                }
            }
        }
        Commands::Profile { command } => {
            let mut storage = JsonStorage::new(&cli.data_dir).await?;
            run_profile_command(&mut storage, command).await?;
        }
    }

    Ok(())
}

async fn run_trip_command<S: Storage>(
    storage: &mut S,
    command: TripCommands,
    config: &PlannerConfig,
) -> Result<()> {
    match command {
        TripCommands::Add {
            destination,
            name,
            home,
            destination_altitude,
            arrival,
            departure,
            fitness,
            activity,
        } => {
            let home = match home {
                Some(home) => Some(altitude_arg(&home)),
                None => storage
                    .load_profile()
                    .await?
                    .and_then(|p| p.effective_home_altitude())
                    .map(|feet| feet.to_string()),
            };
            let destination_altitude = destination_altitude
                .map(|raw| altitude_arg(&raw))
                .or_else(|| city_elevation(&destination).map(|feet| feet.to_string()));

            let input = TripInput {
                home_altitude: home,
                destination_altitude,
                fitness_level: fitness,
                activity_level: activity,
                arrival_date: Some(arrival),
                departure_date: Some(departure),
            };
            let params = input.validate()?;
            let (Some(arrival), Some(departure)) = (params.arrival_date, params.departure_date)
            else {
                return Err(anyhow!("Arrival and departure dates are required"));
            };

            let mut trip = Trip::new(destination, params, arrival, departure, config)?;
            if let Some(name) = name {
                trip = trip.with_name(name);
            }

            storage.save_trip(&trip).await?;
            storage.commit("Add trip").await?;
            info!(trip_id = %trip.id, "Added trip");

            println!("Added trip: {} - {}", trip.id, trip.display_name());
            if departs_before_acclimated(&trip) {
                println!(
                    "  Note: you leave before full intensity ({})",
                    trip_full_intensity_date(&trip)
                );
            }
        }
        TripCommands::List => {
            let trips = storage.list_trips().await?;
            let now = Utc::now();

            println!("Trips ({})", trips.len());
            for trip in trips {
                println!(
                    "  {} | {} | {} -> {} | {} ({} ft)",
                    trip.id,
                    trip_status(&trip, now).as_str(),
                    trip.arrival_date,
                    trip.departure_date,
                    trip.display_name(),
                    trip.plan.altitude_change_feet,
                );
            }
        }
        TripCommands::Show { id } => {
            let trip_id = parse_trip_id(&id)?;
            let Some(trip) = storage.load_trip(trip_id).await? else {
                println!("Trip not found");
                return Ok(());
            };
            let result = TripProgress::at(trip, Utc::now());
            let trip = &result.trip;

            println!("Trip: {}", trip.id);
            println!("  Name: {}", trip.display_name());
            println!("  Destination: {}", trip.destination_name);
            println!("  Dates: {} -> {} ({} days)", trip.arrival_date, trip.departure_date, trip.length_days());
            println!("  Status: {}", result.status.as_str());
            println!("  Created: {}", trip.created_at);
            print_plan(&trip.plan, trip.params.activity_level);
            print_schedule(&trip.plan);
            print_progress(&result.progress);
        }
        TripCommands::Delete { id } => {
            let trip_id = parse_trip_id(&id)?;
            storage.delete_trip(trip_id).await?;
            storage.commit("Delete trip").await?;
            info!(%trip_id, "Deleted trip");
            println!("Deleted trip: {}", trip_id);
        }
    }

    Ok(())
}

async fn run_profile_command<S: Storage>(storage: &mut S, command: ProfileCommands) -> Result<()> {
    let mut profile = storage.load_profile().await?.unwrap_or_default();

    match command {
        ProfileCommands::Show => print_profile(&profile),
        ProfileCommands::Set { name, home_city, home_altitude } => {
            if name.is_none() && home_city.is_none() && home_altitude.is_none() {
                return Err(anyhow!("Nothing to update"));
            }
            if name.is_some() {
                profile.name = name;
            }
            if home_city.is_some() {
                profile.home_city = home_city;
            }
            if home_altitude.is_some() {
                profile.home_altitude_feet = home_altitude;
            }
            profile.updated_at = Some(Utc::now());

            storage.save_profile(&profile).await?;
            storage.commit("Update profile").await?;
            print_profile(&profile);
        }
    }

    Ok(())
}

/// Accept either whole feet or a city from the elevation table.
///
/// Unknown names pass through unchanged so validation can report them.
fn altitude_arg(raw: &str) -> String {
    if raw.trim().parse::<i32>().is_ok() {
        return raw.trim().to_string();
    }
    city_elevation(raw).map_or_else(|| raw.to_string(), |feet| feet.to_string())
}

fn parse_trip_id(raw: &str) -> Result<TripId> {
    raw.trim().parse().map_err(|_| anyhow!("Invalid trip ID: {}", raw))
}

fn print_plan(plan: &AcclimationPlan, activity: ActivityLevel) {
    println!("Acclimation plan");
    println!("  Altitude change: {:+} ft", plan.altitude_change_feet);
    println!("  Risk: {}", plan.risk_level);
    println!("  Recommended days: {} ({})", plan.recommended_days, activity.description());
    println!("  Light activity from day {}", plan.first_activity_day);
    println!("  Moderate activity from day {}", plan.moderate_activity_day);
    println!("  Full intensity from day {}", plan.full_intensity_day);
    println!("  Hydration: {:.1} L/day", plan.daily_hydration_liters);
    println!("  Calories: {:+}%", plan.calorie_increase_percent);
    for precaution in plan.risk_level.precautions() {
        println!("  - {}", precaution);
    }
}

fn print_schedule(plan: &AcclimationPlan) {
    println!("Schedule");
    for day in generate_schedule(plan) {
        println!(
            "  Day {:>2} | {:<18} | {:>3}% | {}",
            day.day_number,
            day.activity_label,
            day.intensity_percent,
            day.tips.join("; "),
        );
    }
}

fn print_trip_progress(result: &TripProgress) {
    println!("{} [{}] {}", result.trip.display_name(), result.trip.id, result.status.as_str());
    if result.days_until_full_intensity > 0 {
        println!(
            "  Full intensity: {} (in {} days)",
            result.full_intensity_date, result.days_until_full_intensity
        );
    } else {
        println!("  Full intensity: {} (reached)", result.full_intensity_date);
    }
    print_progress(&result.progress);
}

fn print_progress(progress: &ProgressSnapshot) {
    println!(
        "  Progress: {:.0}% (day {} of {})",
        progress.percent_complete,
        progress.day_number.max(0),
        progress.days_total,
    );
    println!("  Guidance: {}", progress.guidance_tier);
    for tip in progress.guidance_tier.tips() {
        println!("  - {}", tip);
    }
    if let Some(today) = &progress.today {
        println!("  Today: {} ({}%)", today.activity_label, today.intensity_percent);
    }
}

fn print_profile(profile: &UserProfile) {
    println!("Profile");
    println!("  Name: {}", profile.name.as_deref().unwrap_or("-"));
    println!("  Home city: {}", profile.home_city.as_deref().unwrap_or("-"));
    match profile.effective_home_altitude() {
        Some(feet) => println!("  Home altitude: {} ft", feet),
        None => println!("  Home altitude: -"),
    }
}
