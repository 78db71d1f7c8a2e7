mod logging;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use taqvim_calendar::{
    AstronomicalPersian, FastPersian, PersianCalendar, PersianDate, persian_year_at_nowruz,
};
use taqvim_config::{Algorithm, CalendarConfig};
use taqvim_search::{Season, season_in_gregorian_year};
use taqvim_solar::midday;
use taqvim_time::{GregorianDate, Moment, gregorian_from_fixed, standard_from_universal};
use tracing::info;

#[derive(Parser)]
#[command(name = "taqvim", version, about = "Persian (Solar Hijri) calendar CLI")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML calendar configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Persian date of a Gregorian date
    ToPersian {
        /// Gregorian date, YYYY-MM-DD
        date: GregorianDate,
        /// Use the 33-year-cycle calendar
        #[arg(long)]
        fast: bool,
    },
    /// Gregorian date of a Persian date
    FromPersian {
        /// Persian date, YYYY-MM-DD
        date: PersianDate,
        /// Use the 33-year-cycle calendar
        #[arg(long)]
        fast: bool,
    },
    /// Nowruz (Persian New Year) in a Gregorian year
    Nowruz {
        /// Gregorian year
        #[arg(allow_hyphen_values = true)]
        year: i64,
        /// Use the 33-year-cycle calendar
        #[arg(long)]
        fast: bool,
    },
    /// Whether a Persian year is leap
    Leap {
        /// Persian year
        #[arg(allow_hyphen_values = true)]
        year: i64,
        /// Use the 33-year-cycle calendar
        #[arg(long)]
        fast: bool,
    },
    /// First day after an equinox or solstice at the configured location
    Equinox {
        /// Gregorian year
        #[arg(allow_hyphen_values = true)]
        year: i64,
        #[arg(long, value_enum, default_value = "spring")]
        season: SeasonArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeasonArg {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl From<SeasonArg> for Season {
    fn from(s: SeasonArg) -> Self {
        match s {
            SeasonArg::Spring => Season::Spring,
            SeasonArg::Summer => Season::Summer,
            SeasonArg::Autumn => Season::Autumn,
            SeasonArg::Winter => Season::Winter,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => CalendarConfig::load(path)?,
        None => CalendarConfig::default(),
    };

    match cli.command {
        Commands::ToPersian { date, fast } => {
            let cal = calendar(&config, fast);
            let persian = cal.from_fixed(date.to_fixed())?;
            println!("{persian} ({})", long_form(persian));
        }

        Commands::FromPersian { date, fast } => {
            let cal = calendar(&config, fast);
            let fixed = cal.to_fixed(date)?;
            println!("{}", gregorian_from_fixed(fixed));
        }

        Commands::Nowruz { year, fast } => {
            let cal = calendar(&config, fast);
            let persian_year = persian_year_at_nowruz(year);
            let fixed = cal.nowruz(year)?;
            let kind = if cal.leap_year(persian_year)? { "leap" } else { "common" };
            println!(
                "{} (1 Farvardin {persian_year}, {kind} year)",
                gregorian_from_fixed(fixed)
            );
        }

        Commands::Leap { year, fast } => {
            let cal = calendar(&config, fast);
            if cal.leap_year(year)? {
                println!("{year}: leap (366 days)");
            } else {
                println!("{year}: common (365 days)");
            }
        }

        Commands::Equinox { year, season } => {
            let season = Season::from(season);
            let location = config.location();
            let fixed =
                season_in_gregorian_year(season, year, &location, &config.equinox_config())?;
            let noon = standard_from_universal(midday(fixed, &location), &location);
            println!(
                "{} {year}: {} (fixed date {fixed}, true noon {} UTC{:+})",
                season.name(),
                gregorian_from_fixed(fixed),
                clock_time(noon),
                location.utc_offset_hours
            );
        }
    }

    Ok(())
}

/// Calendar chosen by the `--fast` flag or, failing that, the config.
fn calendar(config: &CalendarConfig, fast: bool) -> Box<dyn PersianCalendar> {
    if fast || config.algorithm == Algorithm::Fast {
        info!("using the 33-year-cycle calendar");
        Box::new(FastPersian)
    } else {
        let location = config.location();
        info!(
            latitude = location.latitude_deg,
            longitude = location.longitude_deg,
            "using the astronomical calendar"
        );
        Box::new(AstronomicalPersian::new(location, config.equinox_config()))
    }
}

/// `HH:MM` of a moment, rounded to the minute.
fn clock_time(tee: Moment) -> String {
    let minutes = ((tee - tee.floor()) * 1440.0).round() as i64 % 1440;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// `26 Mehr 1405`
fn long_form(date: PersianDate) -> String {
    match date.persian_month() {
        Some(month) => format!("{} {} {}", date.day, month.name(), date.year),
        None => date.to_string(),
    }
}
