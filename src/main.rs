//! CLI driver: builds people records, indexes them and prints radius queries

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vector_space::{distance, load_records, Adapter, Coordinates, RadiusIndex};

#[derive(Parser)]
#[command(name = "vector-space")]
#[command(about = "Index records by derived coordinates and query them by radius", long_about = None)]
struct Cli {
    /// Log filter (e.g. "debug", "vector_space=trace"). Falls back to RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format for matches
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

/// How a person is placed in the space
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Projection {
    /// One dimension: age
    Age,
    /// Two dimensions: age and length of the name
    AgeNameLength,
}

impl Projection {
    fn extractor(self) -> fn(&Person) -> Coordinates {
        match self {
            Projection::Age => |p: &Person| Coordinates::from([p.age]),
            Projection::AgeNameLength => {
                |p: &Person| Coordinates::from([p.age, p.name.len() as f64])
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in 1D and 2D sample queries
    Demo,
    /// Query people within a radius of a point
    Query {
        #[arg(short, long, value_enum, default_value = "age")]
        projection: Projection,
        /// JSON file holding an array of {"name", "age"} records
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Query point as comma-separated values (e.g., "20,3")
        #[arg(long)]
        at: Coordinates,
        /// Compared against the squared distance unless --within is set
        #[arg(short, long, allow_negative_numbers = true)]
        radius: f64,
        /// Treat the radius as a plain Euclidean distance
        #[arg(long)]
        within: bool,
    },
    /// Remove the person stored at exactly a point
    Remove {
        #[arg(short, long, value_enum, default_value = "age")]
        projection: Projection,
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(long)]
        at: Coordinates,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
    age: f64,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (age {})", self.name, self.age)
    }
}

#[derive(Serialize)]
struct Match<'a> {
    #[serde(flatten)]
    person: &'a Person,
    location: &'a Coordinates,
}

type PeopleIndex = Adapter<Person, fn(&Person) -> Coordinates>;

fn sample_people() -> Vec<Person> {
    [
        ("Jane", 10.0),
        ("Jack", 14.0),
        ("Jhon", 20.0),
        ("Ana", 30.0),
        ("Chris", 40.0),
        ("Kim", 50.0),
    ]
    .into_iter()
    .map(|(name, age)| Person {
        name: name.to_string(),
        age,
    })
    .collect()
}

fn load_people(path: Option<&Path>) -> Result<Vec<Person>> {
    let Some(path) = path else {
        return Ok(sample_people());
    };
    load_records(path)
        .with_context(|| format!("failed to load people from {}", path.display()))
}

fn build_index(projection: Projection, people: Vec<Person>) -> PeopleIndex {
    let mut index = Adapter::new(projection.extractor());
    index.extend(people);
    debug!(?projection, entries = index.len(), "index built");
    index
}

fn print_matches(
    out: &mut impl Write,
    index: &PeopleIndex,
    at: &Coordinates,
    radius: f64,
    format: OutputFormat,
) -> Result<usize> {
    let mut count = 0;
    for (location, person) in index.query_entries(at, radius) {
        match format {
            OutputFormat::Text => writeln!(out, "{} at {}", person, location)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &Match { person, location })?;
                writeln!(out)?;
            }
        }
        count += 1;
    }
    Ok(count)
}

fn remove_at<I: RadiusIndex<Person>>(index: &mut I, at: &Coordinates) -> (bool, usize) {
    let removed = index.remove(at);
    (removed, index.len())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Demo => {
            writeln!(out, "initializing")?;
            let people = sample_people();

            let one_dimensional = build_index(Projection::Age, people.clone());
            writeln!(out, "======= 1D Query ========")?;
            let at = Coordinates::from([10.0]);
            print_matches(out, &one_dimensional, &at, 5.0, cli.format)?;
            writeln!(out, "==========================")?;

            let two_dimensional = build_index(Projection::AgeNameLength, people);
            writeln!(out, "======= 2D Query ========")?;
            let at = Coordinates::from([20.0, 3.0]);
            print_matches(out, &two_dimensional, &at, 10.0, cli.format)?;
            writeln!(out, "==========================")?;
        }
        Commands::Query {
            projection,
            data,
            at,
            radius,
            within,
        } => {
            let index = build_index(projection, load_people(data.as_deref())?);
            let radius = if within {
                distance::radius_for_distance(radius)
            } else {
                radius
            };
            let count = print_matches(out, &index, &at, radius, cli.format)?;
            if count == 0 && cli.format == OutputFormat::Text {
                writeln!(out, "No people found within {} of {}", radius, at)?;
            }
        }
        Commands::Remove {
            projection,
            data,
            at,
        } => {
            let mut index = build_index(projection, load_people(data.as_deref())?);
            let (removed, remaining) = remove_at(&mut index, &at);
            if removed {
                writeln!(out, "Removed entry at {} ({} remaining)", at, remaining)?;
            } else {
                writeln!(out, "No entry at exactly {} ({} remaining)", at, remaining)?;
            }
        }
    }
    Ok(())
}

fn log_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid --log-level directive {:?}", level)),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"))),
    }
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level)?)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}
