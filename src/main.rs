use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use citycast_core::{parse_mode, parse_units, App, Config, RenderOverrides};
use citycast_weather::{UnitSystem, WeatherMode};
use clap::Parser;

mod present;

/// Current conditions or a five day forecast for a list of cities, from OpenWeatherMap.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Cities as "city", "city,state" or "city,state,country". Replaces the configured list.
    cities: Vec<String>,

    /// metric or imperial
    #[arg(long, value_parser = parse_units)]
    units: Option<UnitSystem>,

    /// current or forecast
    #[arg(long, value_parser = parse_mode)]
    mode: Option<WeatherMode>,

    /// Attach a precipitation map to every city
    #[arg(long)]
    map: bool,

    /// Print the display models as JSON instead of text widgets
    #[arg(long)]
    json: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    citycast_core::init()?;
    let args = Args::parse();

    let (config, _) = Config::load_validated(args.config.as_deref())?;
    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    tracing::debug!(config_dir = %app.config().config_dir.display(), "Configuration loaded");

    let overrides = RenderOverrides {
        cities: args.cities,
        units: args.units,
        mode: args.mode,
        include_map: args.map,
    };
    let reports = app.render(&overrides).await;

    if args.json {
        println!("{}", present::to_json(&reports)?);
    } else {
        print!("{}", present::render_text(&reports));
    }

    let all_failed = !reports.is_empty() && reports.iter().all(|r| !r.is_ok());
    if all_failed {
        tracing::error!("Every city failed");
        if let Some(Err(e)) = reports.first().map(|r| &r.outcome) {
            eprintln!("{}", e.user_message());
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
