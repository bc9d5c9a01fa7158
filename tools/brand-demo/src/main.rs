use brand_search::{brand_key, normalize, Mode};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const BUILTIN_SAMPLES: &[&str] = &[
    "Tissot T Sport Quakeren Chronograph",
    "Piaget PS 535 Chronographe",
    "Rolex Submariner GMT",
    "Patek Philippe Nautilus",
    "Omega Seamaster Professional",
    "Breitling Navitimer",
    "IWC Schaffhausen Original",
    "Porsche Design Chronograph",
    "Tag Heuer Monaco Cal.2",
    "Audemars Piguet Royal Oak",
    "A. Lange & Söhne Datograph",
    "Jaeger-LeCoultre Master Control",
    "Vacheron Constantin Patrimony",
    "Girard-Perregaux Laureato",
    "F.P. Journe Élégante",
    "Rolex Cosmograph Daytona",
    "Omega Speedmaster Moonwatch Professional",
];

/// Demo input list read from a TOML file.
#[derive(Deserialize)]
struct SampleFile {
    samples: Vec<String>,
}

#[derive(Parser)]
#[command(name = "brand-demo")]
#[command(about = "Normalize brand names into search keys")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print sample brands in both modes
    Samples {
        /// TOML file with `samples = [...]` (default: ~/.config/brand-search/samples.toml, if present)
        #[arg(long, short)]
        file: Option<String>,
    },
    /// Normalize the given names
    Normalize {
        /// Output mode
        #[arg(long, short, default_value_t = Mode::Standard)]
        mode: Mode,
        /// Brand names to normalize
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print both search keys for each name as TOML
    Key {
        /// Brand names to normalize
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn default_samples_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("brand-search");
    p.push("samples.toml");
    Some(p)
}

fn load_samples(file: Option<String>) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let path = match file {
        Some(f) => PathBuf::from(f),
        None => match default_samples_path().filter(|p| p.exists()) {
            Some(p) => p,
            None => {
                tracing::debug!("using built-in samples");
                return Ok(BUILTIN_SAMPLES.iter().map(|s| s.to_string()).collect());
            }
        },
    };

    let parsed: SampleFile = toml::from_str(&fs::read_to_string(&path)?)?;
    tracing::info!(
        "loaded {} samples from {}",
        parsed.samples.len(),
        path.display()
    );
    Ok(parsed.samples)
}

fn print_samples(file: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let samples = load_samples(file)?;

    println!("Original brand name --> Standard --> Alphanumeric");
    println!("{}", "-".repeat(70));
    for brand in &samples {
        let standard = normalize(brand.as_str(), Mode::Standard);
        let alphanumeric = normalize(brand.as_str(), Mode::Alphanumeric);
        println!("{} --> {} --> {}", brand, standard, alphanumeric);
    }
    Ok(())
}

fn print_normalized(mode: Mode, names: &[String]) {
    for name in names {
        println!("{}", normalize(name.as_str(), mode));
    }
}

fn print_keys(names: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for name in names {
        let mut table = toml::Table::new();
        table.insert(
            name.clone(),
            toml::Value::try_from(brand_key(name.as_str()))?,
        );
        print!("{}", toml::to_string(&table)?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Samples { file } => print_samples(file),
        Commands::Normalize { mode, names } => {
            print_normalized(mode, &names);
            Ok(())
        }
        Commands::Key { names } => print_keys(&names),
    }
}
