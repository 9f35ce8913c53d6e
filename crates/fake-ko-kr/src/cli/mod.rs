//! Command-line front end for the locale providers.
//!
//! The binary parses arguments into [`Cli`] and hands them to [`run`], which
//! writes to any [`Write`] sink. Keeping execution here lets tests drive the
//! CLI without spawning a process.

mod error;

use std::io::Write;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mockable::{Clock, DefaultClock};
use serde::Serialize;
use tracing::debug;

pub use self::error::CliError;
use crate::clock::FixedClock;
use crate::faker::KoKrFaker;
use crate::passport::PassportRecord;

/// `fake-ko-kr` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fake-ko-kr",
    about = "Generate South Korean locale test data",
    version
)]
pub struct Cli {
    /// RNG seed. A random seed is drawn and logged when omitted.
    #[arg(long, value_name = "seed")]
    pub seed: Option<u64>,
    /// Number of values to generate.
    #[arg(long, value_name = "n", default_value_t = 1)]
    pub count: usize,
    /// Date treated as today, `YYYY-MM-DD`. Defaults to the system clock.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
    /// Emit one JSON document per value instead of plain text.
    #[arg(long)]
    pub json: bool,
    /// Provider to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Providers exposed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Vehicle license plate, e.g. `12가3456`.
    LicensePlate,
    /// Driver's licence number, e.g. `11-24-012345-67`.
    DriversLicense,
    /// Birth, issue and expiry dates for a passport holder.
    PassportDates {
        /// Holder's date of birth, `YYYY-MM-DD`.
        #[arg(long, value_name = "YYYY-MM-DD")]
        birthday: NaiveDate,
    },
    /// Passport gender marker (`M`, `F` or `X`).
    PassportGender,
    /// Passport number, e.g. `M12345678`.
    PassportNumber,
    /// Full passport record.
    Passport,
    /// Resident registration number.
    Rrn {
        /// Restrict to `M` or `F`.
        #[arg(long, value_name = "M|F")]
        gender: Option<String>,
    },
    /// Foreign registration number.
    Frn {
        /// Restrict to `M` or `F`.
        #[arg(long, value_name = "M|F")]
        gender: Option<String>,
    },
    /// Registration number of either family.
    Ssn {
        /// Restrict to `M` or `F`.
        #[arg(long, value_name = "M|F")]
        gender: Option<String>,
        /// `true` for foreign numbers only, `false` for resident numbers only.
        #[arg(long, value_name = "true|false")]
        foreigner: Option<bool>,
    },
}

/// One generated value, rendered as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
enum Generated {
    Value(String),
    Dates {
        birth: String,
        issue: String,
        expiry: String,
    },
    Passport(PassportRecord),
}

impl Generated {
    fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        match self {
            Self::Value(value) => writeln!(out, "{value}"),
            Self::Dates {
                birth,
                issue,
                expiry,
            } => writeln!(out, "{birth}\n{issue}\n{expiry}"),
            Self::Passport(record) => write!(out, "{record}"),
        }
    }

    fn write_json(&self, out: &mut impl Write) -> Result<(), CliError> {
        serde_json::to_writer(&mut *out, self).map_err(|err| CliError::json(&err))?;
        writeln!(out).map_err(|err| CliError::write(&err))
    }
}

/// Builds the generation context described by the arguments.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use fake_ko_kr::cli::{Cli, context};
///
/// let cli = Cli::try_parse_from(["fake-ko-kr", "--seed", "7", "--today", "2024-02-29", "rrn"])
///     .expect("parse");
/// let faker = context(&cli);
///
/// assert_eq!(faker.today().to_string(), "2024-02-29");
/// ```
#[must_use]
pub fn context(cli: &Cli) -> KoKrFaker {
    let clock: Arc<dyn Clock> = match cli.today {
        Some(date) => Arc::new(FixedClock::new(date)),
        None => Arc::new(DefaultClock),
    };
    match cli.seed {
        Some(seed) => KoKrFaker::with_clock(seed, clock),
        None => {
            let mut faker = KoKrFaker::from_entropy();
            faker.set_clock(clock);
            faker
        }
    }
}

/// Runs the parsed command, writing `count` values to `out`.
///
/// # Errors
///
/// Returns [`CliError::Provider`] when a provider rejects its arguments,
/// [`CliError::Write`] when `out` fails and [`CliError::Json`] when encoding
/// fails.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use fake_ko_kr::cli::{Cli, run};
///
/// let cli = Cli::try_parse_from(["fake-ko-kr", "--seed", "1", "--count", "2", "license-plate"])
///     .expect("parse");
/// let mut out = Vec::new();
/// run(&cli, &mut out).expect("run");
///
/// assert_eq!(String::from_utf8(out).expect("utf-8").lines().count(), 2);
/// ```
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let mut faker = context(cli);
    debug!(command = ?cli.command, count = cli.count, json = cli.json, "generating values");

    for _ in 0..cli.count {
        let generated = generate(&mut faker, &cli.command)?;
        if cli.json {
            generated.write_json(out)?;
        } else {
            generated
                .write_text(out)
                .map_err(|err| CliError::write(&err))?;
        }
    }
    out.flush().map_err(|err| CliError::write(&err))
}

fn generate(faker: &mut KoKrFaker, command: &Command) -> Result<Generated, CliError> {
    let generated = match command {
        Command::LicensePlate => Generated::Value(faker.license_plate()),
        Command::DriversLicense => Generated::Value(faker.drivers_license()),
        Command::PassportDates { birthday } => {
            let (birth, issue, expiry) = faker.passport_dates(*birthday)?;
            Generated::Dates {
                birth,
                issue,
                expiry,
            }
        }
        Command::PassportGender => Generated::Value(faker.passport_gender(0).as_str().to_owned()),
        Command::PassportNumber => Generated::Value(faker.passport_number()),
        Command::Passport => Generated::Passport(faker.passport_full()?),
        Command::Rrn { gender } => Generated::Value(faker.rrn(gender.as_deref())?),
        Command::Frn { gender } => Generated::Value(faker.frn(gender.as_deref())?),
        Command::Ssn { gender, foreigner } => {
            Generated::Value(faker.ssn(gender.as_deref(), *foreigner)?)
        }
    };
    Ok(generated)
}
