// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use tripweave_core::protocol::{DayPlan, HotelRecord, HotelResult};
use tripweave_core::session::loading_label;
use tripweave_core::{
    BudgetLevel, CabinClass, ClientConfig, ConversationSession, FlightForm, FormResult, HotelForm,
    HttpTransport, ItineraryForm, Submission, TravelStyle,
};
use tripweave_lexicon::geo::resolve_with_tier;
use tripweave_lexicon::FlightRecord;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the chat backend
    #[arg(short, long, env = "TRIPWEAVE_BACKEND")]
    backend: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a day-by-day itinerary
    Plan {
        destination: String,
        #[arg(short, long, default_value_t = 3)]
        days: u32,
        /// relaxed, balanced or packed
        #[arg(short, long, default_value_t = TravelStyle::Balanced)]
        style: TravelStyle,
        /// low, medium or high
        #[arg(short, long, default_value_t = BudgetLevel::Medium)]
        budget: BudgetLevel,
    },
    /// Search one-way flights; cities and countries are resolved to airport codes
    Flights {
        origin: String,
        destination: String,
        /// Departure date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        #[arg(short, long, default_value_t = 1)]
        passengers: u32,
        /// economy, premium_economy, business or first
        #[arg(short, long, default_value_t = CabinClass::Economy)]
        cabin: CabinClass,
    },
    /// Search hotels for a stay
    Hotels {
        destination: String,
        /// YYYY-MM-DD
        #[arg(long)]
        check_in: NaiveDate,
        /// YYYY-MM-DD
        #[arg(long)]
        check_out: NaiveDate,
    },
    /// Send a free-form message
    Chat {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Show the airport code each input resolves to (no backend needed)
    Resolve {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Check that the backend is up
    Health,
    /// Show the effective client configuration
    Config {
        /// Persist the effective settings as the new defaults
        #[arg(long)]
        save: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ClientConfig::load();
    if let Some(backend) = cli.backend {
        config.base_url = backend;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    log::debug!(
        "Effective client config — base_url={} timeout_secs={}",
        config.base_url,
        config.timeout_secs
    );

    match &cli.command {
        Commands::Resolve { inputs } => return resolve_inputs(inputs),
        Commands::Config { save } => return show_config(&config, *save),
        _ => {}
    }

    let session = ConversationSession::new(HttpTransport::new(&config)?);
    let submission = match cli.command {
        Commands::Health => {
            let health = session.transport().health().await?;
            println!("{}: {}", health.status, health.message);
            return Ok(());
        }
        Commands::Plan {
            destination,
            days,
            style,
            budget,
        } => {
            let form = ItineraryForm {
                days,
                destination,
                style,
                budget,
            };
            eprintln!("Planning your trip...");
            session.plan_itinerary(&form).await?
        }
        Commands::Flights {
            origin,
            destination,
            date,
            passengers,
            cabin,
        } => {
            let mut form = FlightForm::new(origin, destination, date);
            form.passengers = passengers;
            form.cabin = cabin;
            eprintln!("Searching flights...");
            session.search_flights(&form).await?
        }
        Commands::Hotels {
            destination,
            check_in,
            check_out,
        } => {
            let form = HotelForm {
                destination,
                check_in,
                check_out,
            };
            eprintln!("Finding hotels...");
            session.search_hotels(&form).await?
        }
        Commands::Chat { message } => {
            let message = message.join(" ");
            eprintln!("{}", loading_label(&message));
            session.chat(&message).await?
        }
        Commands::Resolve { .. } | Commands::Config { .. } => return Ok(()),
    };

    match submission {
        Submission::Succeeded(result) => {
            print_result(&result);
            Ok(())
        }
        Submission::Failed(message) => bail!(message),
        Submission::Dropped => bail!("A request for this form is already in progress"),
    }
}

fn show_config(config: &ClientConfig, save: bool) -> Result<()> {
    println!("Config file: {}", ClientConfig::default_path().display());
    println!("Backend:     {}", config.base_url);
    println!("Timeout:     {}s", config.timeout_secs);
    println!("User agent:  {}", config.user_agent);
    if save {
        config.save()?;
        println!("Saved.");
    }
    Ok(())
}

fn resolve_inputs(inputs: &[String]) -> Result<()> {
    let mut failures = 0;
    for input in inputs {
        match resolve_with_tier(input) {
            Ok((code, tier)) => println!("{:<24} {}  ({:?})", input, code, tier),
            Err(e) => {
                println!("{:<24} {}", input, e);
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{} of {} inputs could not be resolved", failures, inputs.len());
    }
    Ok(())
}

fn print_result(result: &FormResult) {
    match result {
        FormResult::Itinerary { narration, days } => {
            if let Some(text) = narration {
                println!("{}\n", text);
            }
            print_days(days);
        }
        FormResult::Flights {
            flights,
            origin,
            destination,
        } => {
            println!("Flights from {} to {}", origin, destination);
            print_flights(flights);
        }
        FormResult::Hotels { narration, hotels } => {
            if let Some(text) = narration {
                println!("{}\n", text);
            }
            print_hotels(hotels);
        }
        FormResult::Chat {
            content,
            itinerary,
            flights,
            hotels,
        } => {
            println!("{}", content);
            if let Some(days) = itinerary {
                println!();
                print_days(days);
            }
            if !flights.is_empty() {
                println!();
                print_flights(flights);
            }
            if !hotels.is_empty() {
                println!();
                print_hotels(hotels);
            }
        }
    }
}

fn print_days(days: &[DayPlan]) {
    for day in days {
        println!("Day {}: {}", day.day, day.title_or_default());
        if let Some(description) = &day.description {
            println!("  {}", description);
        }
        let Some(slots) = &day.slots else { continue };
        for (label, activities) in [
            ("Morning", &slots.morning),
            ("Afternoon", &slots.afternoon),
            ("Evening", &slots.evening),
        ] {
            for activity in activities {
                match &activity.description {
                    Some(d) => println!("  {:<10} {} - {}", label, activity.name, d),
                    None => println!("  {:<10} {}", label, activity.name),
                }
            }
        }
    }
}

fn print_flights(flights: &[FlightRecord]) {
    if flights.is_empty() {
        println!("No flights found.");
        return;
    }
    for (i, flight) in flights.iter().enumerate() {
        if !flight.is_structured() {
            println!("{:>2}. {}", i + 1, flight.raw_text);
            continue;
        }
        println!(
            "{:>2}. {:<10} {} {} → {} {}  {}  {}  {}  {}",
            i + 1,
            flight.flight_number,
            flight.departure.airport,
            flight.departure.time,
            flight.arrival.airport,
            flight.arrival.time,
            flight.duration,
            flight.stops_label(),
            flight.price,
            flight.cabin
        );
        if let Some(baggage) = &flight.baggage {
            println!(
                "    Baggage: checked {}, cabin {}",
                baggage.checked.as_deref().unwrap_or("N/A"),
                baggage.cabin.as_deref().unwrap_or("N/A")
            );
        }
    }
}

fn print_hotels(hotels: &[HotelResult]) {
    if hotels.is_empty() {
        println!("No hotels found.");
        return;
    }
    for (i, hotel) in hotels.iter().enumerate() {
        match hotel {
            HotelResult::Text(text) => println!("{:>2}. {}", i + 1, text),
            HotelResult::Listing(listing) => print_listing(i + 1, listing),
            HotelResult::Other(value) => println!("{:>2}. {}", i + 1, value),
        }
    }
}

fn print_listing(n: usize, hotel: &HotelRecord) {
    println!(
        "{:>2}. {}  {}",
        n,
        hotel.name.as_deref().unwrap_or("Unnamed hotel"),
        hotel.price.as_deref().unwrap_or("")
    );
    match (hotel.rating, hotel.reviews) {
        (Some(rating), Some(reviews)) => println!("    ★ {:.1} ({} reviews)", rating, reviews),
        (Some(rating), None) => println!("    ★ {:.1}", rating),
        _ => {}
    }
    if !hotel.amenities.is_empty() {
        println!("    {}", hotel.amenity_preview());
    }
    if let Some(link) = &hotel.link {
        println!("    {}", link);
    }
}
