mod config;

use std::{borrow::Cow, env, fs, process};

use config::CliConfig;
use hearthbook_application::BalanceProcessor;
use hearthbook_infrastructure::parse_snapshot;
use hearthbook_presentation::{BalancePresenter, format_validation_error};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    let _ = dotenvy::dotenv();
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let config = CliConfig::from_sources(env::args().skip(1), |var| env::var(var).ok())?;

    let path = &config.snapshot_path;
    let source =
        fs::read_to_string(path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let snapshot = parse_snapshot(&source).map_err(|err| err.to_string())?;

    let Some(period) = config.period.or(snapshot.default_period) else {
        return Err("No period given; pass --period YYYY-MM or set \"period\" in the snapshot".into());
    };

    tracing::debug!(path = %path, %period, "Building balance report");

    let processor = BalanceProcessor::new(&snapshot.exchange_rates);
    let report = processor
        .build_report(&snapshot.household, period)
        .map_err(|err| format_validation_error(&err, &snapshot.household.members))?;

    let view = BalancePresenter::render(&report, &snapshot.household.members, &config.currencies);
    println!("{}", view.to_text());

    Ok(())
}
