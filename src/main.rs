use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use syrup_calc::batch::{self, BatchReport};
use syrup_calc::batch_config::BatchConfig;
use syrup_calc::format::{format_mass, format_optional, format_volume};
use syrup_calc::presets::{self, PRESET_LIST};
use syrup_calc::units::{MassUnit, VolumeUnit};
use syrup_calc::{describe_mixture, plan_for_target, MixtureResult, PhysicalConstants, SyrupPlan};

/// Exact sugar syrup calculator with volume contraction (20 °C, by-mass ratios)
#[derive(Parser)]
#[command(name = "syrup_calc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// Log level
    #[arg(short, long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Masses needed for a desired final volume
    Target {
        /// Preset id (light, simple, rich) or a sugar:water mass ratio
        #[arg(short, long, default_value = "simple")]
        ratio: String,
        /// Desired final volume
        #[arg(short, long)]
        volume: f64,
        /// Volume unit: ml or l
        #[arg(short, long, default_value = "ml")]
        unit: VolumeUnit,
        #[command(flatten)]
        constants: ConstantArgs,
    },
    /// Volume, density and °Brix from sugar and water masses
    Masses {
        #[arg(short, long)]
        sugar: f64,
        #[arg(short, long)]
        water: f64,
        /// Mass unit: g or kg
        #[arg(short, long, default_value = "g")]
        unit: MassUnit,
        #[command(flatten)]
        constants: ConstantArgs,
    },
    /// List the named syrup ratios
    Presets,
    /// Evaluate every job in a TOML batch file
    Batch {
        file: PathBuf,
        /// Also write the results to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ConstantArgs {
    /// Water density in g/mL
    #[arg(long, default_value_t = syrup_calc::constants::RHO_WATER_20C)]
    water_density: f64,
    /// Sucrose partial specific volume in mL/g
    #[arg(long, default_value_t = syrup_calc::constants::V_SUCROSE_PARTIAL)]
    sucrose_specific_volume: f64,
}

impl ConstantArgs {
    fn resolve(&self) -> anyhow::Result<PhysicalConstants> {
        Ok(PhysicalConstants::new(self.water_density, self.sucrose_specific_volume)?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Target { ratio, volume, unit, constants } => {
            let constants = constants.resolve()?;
            let ratio = presets::parse_ratio(&ratio)?;
            let plan = plan_for_target(ratio, unit.to_milliliters(volume), &constants)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan, &constants);
            }
        }
        Commands::Masses { sugar, water, unit, constants } => {
            let constants = constants.resolve()?;
            let result = describe_mixture(unit.to_grams(sugar), unit.to_grams(water), &constants)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_mixture(&result);
            }
        }
        Commands::Presets => {
            if cli.json {
                let list: Vec<_> = PRESET_LIST
                    .iter()
                    .map(|p| serde_json::json!({ "id": p.id, "label": p.label, "ratio": p.ratio }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                for p in &PRESET_LIST {
                    println!("{:<8} {:<18} {}", p.id, p.label, p.ratio);
                }
            }
        }
        Commands::Batch { file, csv } => {
            let config = BatchConfig::load_from_file(&file)?;
            let report = batch::run_batch(&config);
            if let Some(path) = csv {
                batch::export_csv(&report, &path)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            if report.failures() > 0 {
                anyhow::bail!("{} of {} jobs failed", report.failures(), report.rows.len());
            }
        }
    }
    Ok(())
}

fn print_plan(plan: &SyrupPlan, constants: &PhysicalConstants) {
    println!("Ratio (sugar:water by mass): {}", plan.ratio);
    println!("  Sugar:          {}", format_mass(plan.masses.sugar_mass));
    println!(
        "  Water:          {}  (~{} of water)",
        format_mass(plan.masses.water_mass),
        format_volume(plan.water_volume)
    );
    println!("  Density:        {:.4} g/mL", plan.density);
    println!("  Check volume:   {}", format_volume(plan.check_volume));
    println!("  Final °Brix:    {:.2} °Bx", plan.brix);
    println!(
        "  (w = {:.6}, rho_water = {} g/mL, v_sugar = {} mL/g)",
        plan.mass_fraction, constants.water_density, constants.sucrose_specific_volume
    );
}

fn print_mixture(result: &MixtureResult) {
    println!("  Total mass:     {}", format_mass(result.total_mass));
    println!("  Final volume:   {}", format_volume(result.final_volume));
    println!("  Density:        {} g/mL", format_optional(result.density, 4));
    println!("  Mass fraction:  {}", format_optional(result.mass_fraction, 6));
    println!("  Final °Brix:    {} °Bx", format_optional(result.brix, 2));
}

fn print_report(report: &BatchReport) {
    println!("Batch: {}", report.name);
    for row in &report.rows {
        match &row.error {
            Some(e) => println!("  {:<20} FAILED: {}", row.label, e),
            None => println!(
                "  {:<20} sugar {:>10}  water {:>10}  volume {:>10}  {:>7} °Bx",
                row.label,
                row.sugar_mass.map(format_mass).unwrap_or_default(),
                row.water_mass.map(format_mass).unwrap_or_default(),
                row.final_volume.map(format_volume).unwrap_or_default(),
                format_optional(row.brix, 2),
            ),
        }
    }
}
