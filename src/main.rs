use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use world_pulse::config::AppConfig;
use world_pulse::core::{current_year, display_value, format_number, FilterStore, Ticker};
use world_pulse::insight::{ComparisonSession, GeminiProvider, InsightClient};
use world_pulse::Catalog;
use world_pulse_core::{project, ProjectionPoint};
use world_pulse_types::{AgeBracket, ComparisonItem, FilterState, Gender, InsightSubject, Region};

/// world-pulse - a live global statistics engine with AI-generated insights
#[derive(Parser, Debug, Clone)]
#[command(name = "world-pulse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Region code to scope displayed values (e.g. WORLD, USA, CHN)
    #[arg(short = 'r', long = "region", default_value = "WORLD")]
    region: String,

    /// Year to project (defaults to the current calendar year, i.e. live mode)
    #[arg(short = 'y', long = "year")]
    year: Option<i32>,

    /// Tick interval in milliseconds (overrides the config file)
    #[arg(short = 'i', long = "interval", value_name = "MS")]
    interval_ms: Option<u64>,

    /// Number of ticks to print before exiting (0 = run until interrupted)
    #[arg(short = 'n', long = "ticks", default_value = "10")]
    ticks: u64,

    /// List available metrics and exit
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Generate a one-shot insight for a metric id and exit
    #[arg(long = "insight", value_name = "METRIC_ID")]
    insight: Option<String>,

    /// Compare metrics by id and exit (e.g. --compare world-pop,world-gdp)
    #[arg(long = "compare", value_name = "IDS", value_delimiter = ',')]
    compare: Vec<String>,

    /// Month (1-12) for sub-year granularity in insight/comparison values
    #[arg(short = 'm', long = "month", value_name = "1-12")]
    month: Option<u32>,

    /// Age bracket for demographic-sensitive metrics (all, 0-5, 5-20, 20-60, 60+)
    #[arg(long = "age", default_value = "all", value_parser = parse_age)]
    age: AgeBracket,

    /// Gender filter for demographic-sensitive metrics (all, male, female)
    #[arg(long = "gender", default_value = "all", value_parser = parse_gender)]
    gender: Gender,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Config file to load instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn parse_age(s: &str) -> Result<AgeBracket, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(AgeBracket::All),
        "0-5" => Ok(AgeBracket::Infant),
        "5-20" => Ok(AgeBracket::Youth),
        "20-60" => Ok(AgeBracket::Adult),
        "60+" => Ok(AgeBracket::Senior),
        other => Err(format!(
            "expected one of all, 0-5, 5-20, 20-60, 60+, got: {other}"
        )),
    }
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(Gender::All),
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        other => Err(format!("expected one of all, male, female, got: {other}")),
    }
}

/// Free-text scope description sent along with comparison values.
fn describe_scope(region: &Region, year: i32, age: AgeBracket, gender: Gender) -> String {
    let mut context = format!("{}, Year {}", region.label(), year);
    if age != AgeBracket::All {
        context.push_str(&format!(", ages {}", age.label()));
    }
    if gender != Gender::All {
        let gender = format!("{gender:?}").to_lowercase();
        context.push_str(", ");
        context.push_str(&gender);
    }
    context
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override the CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    let catalog = Arc::new(Catalog::builtin());

    if cli.list {
        list_metrics(&catalog);
        return Ok(());
    }

    let region = Region::from_code(&cli.region);
    let year = cli.year.or(config.defaults.year);

    if let Some(id) = &cli.insight {
        return run_insight(&catalog, &config, id, &region, year, &cli).await;
    }
    if !cli.compare.is_empty() {
        return run_comparison(&catalog, &config, &cli.compare, &region, year, &cli).await;
    }

    run_dashboard(catalog, &config, region, year, &cli).await
}

fn list_metrics(catalog: &Catalog) {
    for data in catalog.iter() {
        println!(
            "{:<16} {:<22} {:<12} base {} {}",
            data.metric.id,
            data.metric.label,
            data.metric.category.label(),
            format_number(data.metric.base_value),
            data.metric.unit,
        );
    }
}

async fn run_dashboard(
    catalog: Arc<Catalog>,
    config: &AppConfig,
    region: Region,
    year: Option<i32>,
    cli: &Cli,
) -> anyhow::Result<()> {
    let mut filters = FilterState::default();
    filters.region = if region.is_world() {
        config.defaults.region.clone()
    } else {
        region
    };
    if let Some(year) = year {
        filters.year = year;
    }

    let interval = Duration::from_millis(cli.interval_ms.unwrap_or(config.tick.interval_ms));
    let store = FilterStore::new(filters.clone());
    let mut ticker = Ticker::spawn(Arc::clone(&catalog), &store, interval);

    info!(
        "ticking every {:?}, region {}, year {}",
        interval,
        filters.region.code(),
        filters.year
    );

    let mut printed = 0u64;
    let mut clock = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = clock.tick() => {
                let snapshot = ticker.snapshot();
                println!(
                    "-- {} / {} ({}) --",
                    filters.region.label(),
                    snapshot.year,
                    if snapshot.live { "live" } else { "frozen" }
                );
                for data in catalog.iter() {
                    if let Some(world_value) = snapshot.get(&data.metric.id) {
                        let value = display_value(&data.metric, world_value, &filters.region);
                        println!(
                            "{:<22} {:>24} {}",
                            data.metric.label,
                            format_number(value),
                            data.metric.unit
                        );
                    }
                }
                println!();

                printed += 1;
                if cli.ticks != 0 && printed >= cli.ticks {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }

    ticker.shutdown().await;
    Ok(())
}

async fn run_insight(
    catalog: &Catalog,
    config: &AppConfig,
    id: &str,
    region: &Region,
    year: Option<i32>,
    cli: &Cli,
) -> anyhow::Result<()> {
    let data = catalog
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("unknown metric id: {id}"))?;

    let year = year.unwrap_or_else(current_year);
    let mut point = ProjectionPoint::year(year)
        .with_region(region.clone())
        .with_age(cli.age)
        .with_gender(cli.gender);
    if let Some(month) = cli.month {
        point = point.with_month(month);
    }
    let value = project(&data.metric, &point);

    let provider = GeminiProvider::from_config(&config.insight)?;
    let client = InsightClient::new(Box::new(provider));

    let subject = InsightSubject {
        label: data.metric.label.clone(),
        unit: data.metric.unit.clone(),
        description: data.metric.description.clone(),
        value,
    };

    println!(
        "{}: {} {} ({}, {})",
        data.metric.label,
        format_number(value),
        data.metric.unit,
        region.label(),
        year
    );
    println!("{}", client.metric_insight(&subject).await);
    Ok(())
}

async fn run_comparison(
    catalog: &Catalog,
    config: &AppConfig,
    ids: &[String],
    region: &Region,
    year: Option<i32>,
    cli: &Cli,
) -> anyhow::Result<()> {
    let year = year.unwrap_or_else(current_year);
    let context = describe_scope(region, year, cli.age, cli.gender);

    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        let data = catalog
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("unknown metric id: {id}"))?;
        let mut point = ProjectionPoint::year(year)
            .with_region(region.clone())
            .with_age(cli.age)
            .with_gender(cli.gender);
        if let Some(month) = cli.month {
            point = point.with_month(month);
        }
        items.push(ComparisonItem {
            label: data.metric.label.clone(),
            value: project(&data.metric, &point),
            unit: data.metric.unit.clone(),
            context: context.clone(),
        });
    }

    let provider = GeminiProvider::from_config(&config.insight)?;
    let client = InsightClient::new(Box::new(provider));

    let session = ComparisonSession::new();
    let request = session.begin();
    match client.compare(&items).await {
        Some(result) if session.settle(request) => {
            println!("Analysis:\n{}\n", result.analysis);
            println!("Data Insight: {}", result.insight);
        }
        _ => println!("Unable to generate a comparison right now."),
    }
    Ok(())
}
