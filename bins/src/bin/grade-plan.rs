// SPDX-License-Identifier: MIT

//!
//! *Part of the grade planner*
//!
//! Draws the plan covering a date as a calendar PNG
//!

use chrono::{Local, NaiveDate};
use clap::Parser;
use grade_planner_config::{DEFAULT_SETTINGS_FILE, Settings};
use grade_planner_core::{DateRange, compute_periods, plan_days, tiers_from_names};
use grade_planner_renderer::render;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::error::Error;
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point for the command line tool
fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("grade_plan")
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    if let Err(error) = run(&args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
    Ok(())
}

fn run(args: &Cli) -> Result<(), Box<dyn Error>> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let date_range = DateRange::containing(date)?;
    info!(
        "Planning {} to {} ({})",
        date_range.start(),
        date_range.last_day(),
        date_range.label()
    );

    // An explicitly given settings file must exist
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default(DEFAULT_SETTINGS_FILE)?,
    };
    let tiers = match &args.tiers {
        Some(names) => tiers_from_names(names)?,
        None => settings.tiers()?,
    };

    if args.periods {
        let periods = compute_periods(&date_range, &tiers)?;
        println!("{}", serde_json::to_string_pretty(&periods)?);
        return Ok(());
    }

    let layout = settings.layout_spec()?;
    let days = plan_days(&date_range, &tiers)?;
    let loaded = settings.load_resources(&tiers)?;
    let image = render(&days, &layout, &date_range.label(), &loaded.resources())?;

    let path = match &args.output {
        Some(path) => path.clone(),
        None => settings.plan_file_path(&date_range)?,
    };
    image.save(&path)?;
    info!("Saved plan to {}", path.display());
    println!("{}", path.display());
    Ok(())
}

/// Grade planner CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Draw the calendar of which tier to hold on each day",
    after_help = "Plans run from the 13th of one month to the 12th of the next"
)]
pub struct Cli {
    /// Any day of the wanted plan, as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Path to the settings file (defaults to ./settings.toml, if present)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Comma separated tiers, lowest first (overrides the settings)
    #[arg(long, value_delimiter = ',')]
    pub tiers: Option<Vec<String>>,

    /// Print the periods as JSON instead of drawing the plan
    #[arg(long)]
    pub periods: bool,

    /// Where to save the plan (defaults to the plans directory)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log debug messages
    #[arg(long, short)]
    pub verbose: bool,
}
