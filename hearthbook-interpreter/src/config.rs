use hearthbook_domain::Period;
use hearthbook_presentation::CurrencyLabels;
use std::borrow::Cow;

pub const USAGE: &str = "Usage: hearthbook <snapshot.json> [--period YYYY-MM]";

const REFERENCE_CURRENCY_VAR: &str = "HEARTHBOOK_REFERENCE_CURRENCY";
const SECONDARY_CURRENCY_VAR: &str = "HEARTHBOOK_SECONDARY_CURRENCY";
const DEFAULT_REFERENCE_CURRENCY: &str = "PLN";
const DEFAULT_SECONDARY_CURRENCY: &str = "EUR";

/// Runtime settings collected from the command line and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub snapshot_path: String,
    pub period: Option<Period>,
    pub currencies: CurrencyLabels,
}

impl CliConfig {
    /// `args` excludes the program name. `lookup` reads one environment variable.
    pub fn from_sources<I, F>(args: I, lookup: F) -> Result<Self, Cow<'static, str>>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut snapshot_path = None;
        let mut period = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let raw_period = if arg == "--period" {
                Some(args.next().ok_or("Missing value for --period")?)
            } else {
                arg.strip_prefix("--period=").map(str::to_owned)
            };

            if let Some(raw) = raw_period {
                let parsed = raw
                    .parse::<Period>()
                    .map_err(|err| format!("Invalid --period '{raw}': {err}"))?;
                period = Some(parsed);
            } else if arg.starts_with("--") {
                return Err(format!("Unknown option '{arg}'\n{USAGE}").into());
            } else if snapshot_path.replace(arg).is_some() {
                return Err(USAGE.into());
            }
        }

        let snapshot_path = snapshot_path.ok_or(USAGE)?;
        let currencies = CurrencyLabels::new(
            currency_code(&lookup, REFERENCE_CURRENCY_VAR, DEFAULT_REFERENCE_CURRENCY),
            currency_code(&lookup, SECONDARY_CURRENCY_VAR, DEFAULT_SECONDARY_CURRENCY),
        );

        Ok(Self {
            snapshot_path,
            period,
            currencies,
        })
    }
}

fn currency_code<F>(lookup: &F, var: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}
