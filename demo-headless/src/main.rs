use clap::Parser;
use solar_bike_core::{EnergySource, LocationTable, RangeModel, RangeOutputs, ScenarioInputs};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Width of the range comparison bars in characters
const BAR_WIDTH: usize = 40;

/// Manual slope bounds offered to the rider (%)
const SLOPE_MIN: f64 = -5.0;
const SLOPE_MAX: f64 = 15.0;

const MANUAL_LABEL: &str = "Manual settings";

/// Solar bike range calculator with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "solar-bike-demo")]
#[command(about = "Range of an e-bike with a solar panel", long_about = None)]
struct Args {
    /// Total mass of rider, bike and cargo in kg
    #[arg(short, long, default_value_t = 100.0)]
    mass: f64,

    /// Average speed in km/h
    #[arg(short, long, default_value_t = 25.0)]
    speed: f64,

    /// Battery voltage in V
    #[arg(long, default_value_t = 36.0)]
    voltage: f64,

    /// Battery capacity in Wh
    #[arg(short, long, default_value_t = 540.0)]
    capacity: f64,

    /// Motor assist in % (0-100)
    #[arg(short, long, default_value_t = 100.0)]
    assist: f64,

    /// Nominal motor power in W
    #[arg(long, default_value_t = 250.0)]
    motor_power: f64,

    /// Nominal solar panel power in Wp
    #[arg(short, long, default_value_t = 100.0)]
    panel_power: f64,

    /// Riding location from the location table (defaults to its first entry)
    #[arg(short, long)]
    location: Option<String>,

    /// Use --slope and --solar-energy instead of a location
    #[arg(long, conflicts_with = "location")]
    manual: bool,

    /// Manual terrain slope in % (-5 to 15)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    slope: f64,

    /// Manual solar energy supplied in Wh
    #[arg(long, default_value_t = 150.0)]
    solar_energy: f64,

    /// Replace the built-in location table with a TOML file
    #[arg(long)]
    locations: Option<PathBuf>,

    /// Print the location table and exit
    #[arg(long)]
    list_locations: bool,
}

fn load_locations(path: Option<&PathBuf>) -> Result<LocationTable, String> {
    let Some(path) = path else {
        return Ok(LocationTable::builtin());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let table = LocationTable::from_toml_str(&text).map_err(|e| e.to_string())?;
    info!(path = %path.display(), entries = table.len(), "Loaded location table");
    Ok(table)
}

/// Label for the report and the energy source it stands for.
fn energy_source(args: &Args, table: &LocationTable) -> Result<(String, EnergySource), String> {
    if args.manual {
        if !(SLOPE_MIN..=SLOPE_MAX).contains(&args.slope) {
            return Err(format!("Slope {} % outside {SLOPE_MIN}..{SLOPE_MAX} %", args.slope));
        }
        let source = EnergySource::ManualOverride {
            slope_percent: args.slope,
            supplied_energy_wh: args.solar_energy,
        };
        return Ok((MANUAL_LABEL.to_string(), source));
    }

    let name = match &args.location {
        Some(name) => name.as_str(),
        None => table
            .get_index(0)
            .map(|(name, _)| name)
            .ok_or("Location table is empty; pass --manual")?,
    };
    let source = table.energy_source(name).map_err(|e| e.to_string())?;
    Ok((name.to_string(), source))
}

fn render_locations(table: &LocationTable) -> String {
    let mut out = String::from("=== Locations ===\n");
    for (name, loc) in table.iter() {
        let _ = writeln!(
            out,
            "{name:<24} slope {:>4.1} %   sun {:.1} h",
            loc.slope_percent, loc.exposure_hours
        );
    }
    out
}

fn bar(value: f64, max: f64) -> String {
    let len = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    "#".repeat(len.min(BAR_WIDTH))
}

fn render_report(location: &str, from_table: bool, out: &RangeOutputs) -> String {
    let mut s = String::from("=== Solar Bike Range Calculator ===\n\n");

    if from_table {
        let _ = writeln!(s, "Location: {location}");
        let _ = writeln!(s, "Terrain slope: {} %", out.supply.slope_percent);
        let _ = writeln!(
            s,
            "Solar energy (derived): {:.0} Wh\n",
            out.supply.supplied_energy_wh
        );
    }

    let _ = writeln!(s, "Energy consumption:  {:.1} Wh/km", out.consumption_wh_per_km);
    let _ = writeln!(s, "Range (battery):     {:.1} km", out.range_battery_only_km);
    let _ = writeln!(
        s,
        "Range (+ solar):     {:.1} km  (+{:.1} km)",
        out.range_with_solar_km, out.solar_bonus_km
    );

    let max = out.range_with_solar_km.max(out.range_battery_only_km);
    let _ = writeln!(s, "\nRange comparison");
    let _ = writeln!(
        s,
        "  Battery only     |{:<BAR_WIDTH$}| {:.1} km",
        bar(out.range_battery_only_km, max),
        out.range_battery_only_km
    );
    let _ = writeln!(
        s,
        "  Battery + solar  |{:<BAR_WIDTH$}| {:.1} km",
        bar(out.range_with_solar_km, max),
        out.range_with_solar_km
    );

    let _ = writeln!(s, "\nScenario");
    let _ = writeln!(s, "  Location: {location}");
    let _ = writeln!(s, "  Solar gain: {:.0} Wh", out.supply.supplied_energy_wh);
    let _ = writeln!(s, "  Resistive forces:");
    let _ = writeln!(s, "    Air:     {:.1} N", out.air_force_n);
    let _ = writeln!(s, "    Rolling: {:.1} N", out.roll_force_n);
    let _ = writeln!(s, "    Slope:   {:.1} N", out.slope_force_n);
    if out.is_motor_capped() {
        let _ = writeln!(
            s,
            "\nMotor at its rated limit: {:.0} W of {:.0} W requested",
            out.electrical_power_actual_w, out.electrical_power_needed_w
        );
    }
    s
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let table = match load_locations(args.locations.as_ref()) {
        Ok(table) => table,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.list_locations {
        print!("{}", render_locations(&table));
        return ExitCode::SUCCESS;
    }

    let (label, energy_source) = match energy_source(&args, &table) {
        Ok(resolved) => resolved,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let inputs = ScenarioInputs {
        total_mass_kg: args.mass,
        avg_speed_kmh: args.speed,
        battery_voltage_v: args.voltage,
        battery_capacity_wh: args.capacity,
        assist_percent: args.assist,
        motor_nominal_power_w: args.motor_power,
        panel_power_wp: args.panel_power,
        energy_source,
    };
    let outputs = RangeModel::default().compute_range(&inputs);

    let from_table = !args.manual;
    print!("{}", render_report(&label, from_table, &outputs));
    ExitCode::SUCCESS
}
