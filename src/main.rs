use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use clap::{Args, Parser, Subcommand};
use placelog::core::{score, service::PlaceService, store::JsonPlaceStore};
use placelog::domain::model::{
    LodgingType, NewPlace, NewVisit, PlaceDetails, PlaceFilter, PlaceKind, SmokingPolicy, SortBy,
    StayType, VenueType,
};
use placelog::domain::ports::ConfigProvider;
use placelog::domain::presets;
use placelog::utils::{logger, validation::Validate};
use placelog::{CliConfig, LocalStorage};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "placelog")]
#[command(about = "Shared log of places visited on business travel")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Args)]
struct FilterArgs {
    /// lodging | venue
    #[arg(long, value_parser = PlaceKind::from_str)]
    kind: Option<PlaceKind>,

    #[arg(long)]
    country: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    station: Option<String>,

    #[arg(long)]
    line: Option<String>,

    #[arg(long)]
    genre: Option<String>,

    /// Matches places where any visit carries this situation tag
    #[arg(long)]
    situation: Option<String>,

    /// Matches places whose best visit rating reaches this
    #[arg(long)]
    min_rating: Option<u8>,

    #[arg(long)]
    price_min: Option<u32>,

    #[arg(long)]
    price_max: Option<u32>,

    /// Case-insensitive substring over name, city, station and tags
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    fn into_filter(self) -> PlaceFilter {
        PlaceFilter {
            kind: self.kind,
            country: self.country,
            city: self.city,
            station: self.station,
            line: self.line,
            genre: self.genre,
            situation: self.situation,
            min_rating: self.min_rating,
            price_min: self.price_min,
            price_max: self.price_max,
            search_text: self.search,
        }
    }
}

#[derive(Debug, Clone, Args)]
struct VisitArgs {
    #[arg(long)]
    author: String,

    /// 1-5
    #[arg(long)]
    rating: u8,

    /// 1-5
    #[arg(long)]
    revisit_intent: u8,

    /// Visit date (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date)]
    date: Option<DateTime<Utc>>,

    #[arg(long, default_value = "")]
    comment: String,

    /// May be given multiple times
    #[arg(long)]
    situation: Vec<String>,

    #[arg(long)]
    price_min: Option<u32>,

    #[arg(long)]
    price_max: Option<u32>,
}

impl VisitArgs {
    fn into_new_visit(self) -> NewVisit {
        NewVisit {
            visited_at: self.date.unwrap_or_else(Utc::now),
            author: self.author,
            rating: self.rating,
            revisit_intent: self.revisit_intent,
            comment: self.comment,
            situation: self.situation,
            price_min: self.price_min,
            price_max: self.price_max,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List places, filtered and sorted
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// recommended | rating | revisit-intent | visit-count | recent-visit
        #[arg(long, value_parser = SortBy::from_str)]
        sort: Option<SortBy>,
    },
    /// Show one place with its score and recommendation reasons
    Show { id: String },
    /// Append a visit to an existing place
    AddVisit {
        place_id: String,

        #[command(flatten)]
        visit: VisitArgs,
    },
    /// Delete a place and its visit history
    Remove { id: String },
    /// Write the visit table to a file or stdout
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long)]
        output: Option<String>,
    },
    /// Print distinct countries, cities, stations and lines
    Suggest,
    /// Insert a handful of sample records
    Seed,
    /// Delete every record
    Clear {
        #[arg(long)]
        yes: bool,
    },
}

fn parse_date(s: &str) -> Result<DateTime<Utc>, String> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| e.to_string())?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| "invalid date".to_string())?;
    Ok(Utc.from_utc_datetime(&midnight))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.config.verbose);

    let settings = cli.config.resolve()?;
    if let Err(e) = settings.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    tracing::debug!(data_dir = %settings.data_dir, "opening store");

    let storage = LocalStorage::new(settings.data_dir().to_string());
    let store = JsonPlaceStore::open(storage).await?;
    let service = PlaceService::new(store);

    match cli.command {
        Command::List { filter, sort } => {
            let filter = filter.into_filter();
            let places = service.list(Some(&filter), sort).await?;
            let count = places.len();
            for scored in score::with_scores(places, Utc::now()) {
                let place = &scored.place;
                println!(
                    "{:.2}  {}  {} / {} · {}  [{} visits, last rating {}]  {}",
                    scored.score,
                    place.name,
                    place.country,
                    place.city,
                    place.genre,
                    place.visits.len(),
                    place.last_visit().map_or(0, |v| v.rating),
                    place.id,
                );
            }
            println!("{} place(s)", count);
        }
        Command::Show { id } => match service.get(&id).await? {
            Some(place) => {
                println!("{}", serde_json::to_string_pretty(&place)?);
                let now = Utc::now();
                println!("score: {:.3}", score::score(&place, now));
                for reason in score::recommendation_reasons(&place, now) {
                    println!("  - {}", reason);
                }
            }
            None => {
                eprintln!("no place with id {}", id);
                std::process::exit(1);
            }
        },
        Command::AddVisit { place_id, visit } => {
            let new_visit = visit.into_new_visit();
            new_visit.validate()?;
            let place = service.add_visit(&place_id, new_visit).await?;
            println!(
                "✅ added visit to {} ({} visits total)",
                place.name,
                place.visits.len()
            );
        }
        Command::Remove { id } => {
            service.remove_place(&id).await?;
            println!("✅ removed {}", id);
        }
        Command::Export { filter, output } => {
            let filter = filter.into_filter();
            let table = service.export_table(Some(&filter)).await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &table)?;
                    println!("✅ exported to {}", path);
                }
                None => println!("{}", table),
            }
        }
        Command::Suggest => {
            let s = service.suggestions().await?;
            println!("countries: {}", s.countries.join(", "));
            println!("cities:    {}", s.cities.join(", "));
            println!("stations:  {}", s.stations.join(", "));
            println!("lines:     {}", s.lines.join(", "));
            println!();
            println!("venue genres:   {}", presets::VENUE_GENRES.join(", "));
            println!("lodging genres: {}", presets::LODGING_GENRES.join(", "));
            println!("situations:     {}", presets::SITUATIONS.join(", "));
            println!("price shortcuts (venue):   {:?}", presets::VENUE_PRICE_SHORTCUTS);
            println!("price shortcuts (lodging): {:?}", presets::LODGING_PRICE_SHORTCUTS);
        }
        Command::Seed => {
            let mut created = 0;
            for (place, first, later_visits) in sample_places(settings.department()) {
                place.validate()?;
                let stored = service.create_place_with_first_visit(place, first).await?;
                for visit in later_visits {
                    service.add_visit(&stored.id, visit).await?;
                }
                created += 1;
            }
            println!("✅ seeded {} sample place(s)", created);
        }
        Command::Clear { yes } => {
            if !yes {
                eprintln!("refusing to delete all records without --yes");
                std::process::exit(1);
            }
            let count = service.clear_all().await?;
            println!("✅ removed {} place(s)", count);
        }
    }

    Ok(())
}

fn sample_places(department: &str) -> Vec<(NewPlace, NewVisit, Vec<NewVisit>)> {
    let visit = |days_ago: i64,
                 author: &str,
                 rating: u8,
                 revisit_intent: u8,
                 comment: &str,
                 situation: &[&str],
                 price_min: Option<u32>,
                 price_max: Option<u32>| NewVisit {
        visited_at: Utc::now() - Duration::days(days_ago),
        author: author.to_string(),
        rating,
        revisit_intent,
        comment: comment.to_string(),
        situation: situation.iter().map(|s| s.to_string()).collect(),
        price_min,
        price_max,
    };

    vec![
        (
            NewPlace {
                details: PlaceDetails::Lodging {
                    lodging_type: LodgingType::Business,
                    stay_type: StayType::Short,
                    breakfast: Some(true),
                    wifi_quality: Some(4),
                    desk_work_friendly: Some(4),
                    access_score: Some(5),
                },
                name: "Shinagawa Business Hotel".to_string(),
                country: "Japan".to_string(),
                city: "Tokyo".to_string(),
                area: Some("Shinagawa".to_string()),
                station: "Shinagawa".to_string(),
                line: Some("JR Yamanote Line".to_string()),
                genre: "business".to_string(),
                tags: vec!["near station".to_string(), "breakfast".to_string()],
                department: department.to_string(),
            },
            visit(
                45,
                "Yamada",
                4,
                4,
                "Close to the station and the wifi holds up for evening calls.",
                &["night before trip", "budget"],
                Some(12_000),
                Some(12_000),
            ),
            vec![],
        ),
        (
            NewPlace {
                details: PlaceDetails::Lodging {
                    lodging_type: LodgingType::Standard,
                    stay_type: StayType::Short,
                    breakfast: Some(true),
                    wifi_quality: Some(3),
                    desk_work_friendly: Some(3),
                    access_score: Some(4),
                },
                name: "Osaka Grand Hotel".to_string(),
                country: "Japan".to_string(),
                city: "Osaka".to_string(),
                area: Some("Umeda".to_string()),
                station: "Umeda".to_string(),
                line: Some("JR Osaka Loop Line".to_string()),
                genre: "standard".to_string(),
                tags: vec!["great breakfast".to_string(), "clean".to_string()],
                department: department.to_string(),
            },
            visit(
                120,
                "Suzuki",
                5,
                4,
                "Breakfast buffet worth the early start.",
                &["night after trip"],
                Some(15_000),
                Some(18_000),
            ),
            vec![],
        ),
        (
            NewPlace {
                details: PlaceDetails::Venue {
                    venue_type: VenueType::Restaurant,
                    private_room: Some(true),
                    smoking: SmokingPolicy::No,
                    booking_ease: Some(2),
                },
                name: "Sushi Aoyagi".to_string(),
                country: "Japan".to_string(),
                city: "Tokyo".to_string(),
                area: Some("Ginza".to_string()),
                station: "Ginza".to_string(),
                line: Some("Hibiya Line".to_string()),
                genre: "sushi".to_string(),
                tags: vec!["counter seats".to_string(), "quiet".to_string()],
                department: department.to_string(),
            },
            visit(
                60,
                "Yamada",
                5,
                5,
                "Counter omakase, spotless for hosting.",
                &["hosting", "dinner"],
                Some(20_000),
                Some(30_000),
            ),
            vec![visit(
                14,
                "Suzuki",
                4,
                4,
                "Private room booked two weeks out.",
                &["client dinner"],
                Some(15_000),
                Some(25_000),
            )],
        ),
        (
            NewPlace {
                details: PlaceDetails::Venue {
                    venue_type: VenueType::Izakaya,
                    private_room: Some(false),
                    smoking: SmokingPolicy::Separated,
                    booking_ease: Some(4),
                },
                name: "Torikichi".to_string(),
                country: "Japan".to_string(),
                city: "Tokyo".to_string(),
                area: Some("Ebisu".to_string()),
                station: "Ebisu".to_string(),
                line: Some("JR Yamanote Line".to_string()),
                genre: "yakitori".to_string(),
                tags: vec!["lively".to_string(), "late hours".to_string()],
                department: department.to_string(),
            },
            visit(
                7,
                "Tanaka",
                4,
                5,
                "Good skewers, easy walk-in for six people.",
                &["team dinner"],
                Some(4_000),
                Some(6_000),
            ),
            vec![],
        ),
    ]
}
