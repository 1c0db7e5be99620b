use clap::{Parser, ValueEnum};
use lava_flow_core::core_types::{Fraction, Kelvin, Meters, MetersPerSecond, Radians};
use lava_flow_core::validation;
use lava_flow_core::{
    BasicLava, ConstantCrustTemperature, DiagnosticLog, DragoniYieldStrength, FlowError, FlowResult,
    FlowState, ParameterFile, RadiationHeatFluxModel, RyersonYieldStrength, SlopeProfile,
    StepEvaluator, TerrainCondition, UniformChannel, VelocityDependentCover, YieldStrengthModel,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Used when no parameter file is given: Mauna Ulu 1974 style basalt
const DEFAULT_PARAMETERS: &str = r#"{
    "radiation_parameters": {
        "stefan-boltzmann_sigma": 5.67e-8,
        "epsilon_crust": 0.95,
        "epsilon_hot": 0.95
    },
    "eruption_condition": {
        "eruption_temperature": 1387.15
    }
}"#;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum YieldLaw {
    /// Crystal-fraction power law
    Ryerson,
    /// Undercooling below eruption temperature
    Dragoni,
}

/// Evaluate lava channel submodels along a prescribed cooling profile
#[derive(Parser, Debug)]
#[command(name = "lava-flow-demo")]
#[command(about = "Radiative heat loss and yield strength along a lava channel", long_about = None)]
struct Args {
    /// JSON parameter file (radiation_parameters, eruption_condition)
    #[arg(short, long)]
    parameters: Option<PathBuf>,

    /// Channel length to sample in meters
    #[arg(short, long, default_value_t = 10_000.0)]
    length: f64,

    /// Distance between stations in meters
    #[arg(short, long, default_value_t = 500.0)]
    spacing: f64,

    /// Channel width in meters
    #[arg(short, long, default_value_t = 5.0)]
    width: f64,

    /// Flow depth in meters
    #[arg(short, long, default_value_t = 4.0)]
    depth: f64,

    /// Uniform ground slope in degrees (ignored with --slope-file)
    #[arg(long, default_value_t = 3.0)]
    slope: f64,

    /// Two-column slope table: distance (m), slope (degrees)
    #[arg(long)]
    slope_file: Option<PathBuf>,

    /// Crust surface temperature in K
    #[arg(long, default_value_t = 773.0)]
    crust_temperature: f64,

    /// Crust cover of a stagnant flow (0-1)
    #[arg(long, default_value_t = 0.9)]
    cover: f64,

    /// Exponential sensitivity of crust cover to velocity (s/m)
    #[arg(long, default_value_t = -0.16, allow_negative_numbers = true)]
    cover_alpha: f64,

    /// Mean flow velocity in m/s
    #[arg(long, default_value_t = 2.0)]
    velocity: f64,

    /// Crystal fraction at the vent
    #[arg(long, default_value_t = 0.1)]
    vent_crystals: f64,

    /// Crystal fraction at the end of the sampled channel
    #[arg(long, default_value_t = 0.5)]
    end_crystals: f64,

    /// Core cooling rate in K per km downflow
    #[arg(long, default_value_t = 8.0)]
    cooling: f64,

    /// Yield strength law
    #[arg(short = 'y', long, value_enum, default_value_t = YieldLaw::Ryerson)]
    yield_law: YieldLaw,

    /// Write the diagnostic log as JSON to this file
    #[arg(long)]
    dump_diagnostics: Option<PathBuf>,
}

fn build_terrain(args: &Args) -> FlowResult<Arc<dyn TerrainCondition>> {
    let depth = Meters::new(args.depth);
    match &args.slope_file {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| {
                FlowError::Io {
                    path: path.clone(),
                    source,
                }
            })?;
            let profile = SlopeProfile::parse(&text, depth)?;
            if *profile.length() < args.length {
                warn!(
                    profile_length = *profile.length(),
                    "slope table shorter than sampled channel; holding last slope"
                );
            }
            Ok(Arc::new(profile))
        }
        None => Ok(Arc::new(UniformChannel::new(
            depth,
            Radians::from_degrees(args.slope),
        ))),
    }
}

/// Upper bound on sampled stations, so a tiny spacing cannot stall the run
const MAX_STATIONS: usize = 1_000_000;

/// Number of spacing intervals along the sampled channel
fn station_intervals(length: f64, spacing: f64) -> FlowResult<usize> {
    validation::non_negative("length", length)?;
    validation::positive("spacing", spacing)?;
    let intervals = (length / spacing).floor();
    if intervals >= MAX_STATIONS as f64 {
        return Err(FlowError::configuration(
            "spacing",
            format!("{length} m / {spacing} m gives more than {MAX_STATIONS} stations"),
        ));
    }
    Ok(intervals as usize)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let stations = station_intervals(args.length, args.spacing)?;
    let file = match &args.parameters {
        Some(path) => ParameterFile::from_path(path)?,
        None => {
            info!("no parameter file given, using built-in basalt parameters");
            ParameterFile::from_json_str(DEFAULT_PARAMETERS)?
        }
    };
    let vent_temperature = file.yield_strength_parameters()?.eruption_temperature;

    let log = Arc::new(DiagnosticLog::new());
    let material = Arc::new(BasicLava::basalt());

    let flux = RadiationHeatFluxModel::from_parameters(
        &file,
        material.clone(),
        Arc::new(ConstantCrustTemperature::new(Kelvin::new(args.crust_temperature))),
        Arc::new(VelocityDependentCover::new(
            Fraction::new(args.cover),
            args.cover_alpha,
        )),
        log.clone(),
    )?;
    let yield_strength: Box<dyn YieldStrengthModel> = match args.yield_law {
        YieldLaw::Ryerson => Box::new(RyersonYieldStrength::from_parameters(&file, log.clone())?),
        YieldLaw::Dragoni => Box::new(DragoniYieldStrength::from_parameters(&file, log.clone())?),
    };

    let evaluator = StepEvaluator::new(
        Box::new(flux),
        yield_strength,
        build_terrain(args)?,
        material,
    );

    println!("=== Lava Channel Submodels ===\n");
    println!(
        "Vent: {:.1}, width {:.1} m, depth {:.1} m, {} stations",
        vent_temperature, args.width, args.depth, stations + 1
    );
    println!();
    println!(" Distance(m) | T_core(K) | Crystals | q_rad(kW/m) | tau_0(Pa) | tau_b(Pa) | Mobile");
    println!("-------------|-----------|----------|-------------|-----------|-----------|-------");

    let mut last_mobile = None;
    for i in 0..=stations {
        let x = i as f64 * args.spacing;
        let progress = if args.length > 0.0 { x / args.length } else { 0.0 };
        let crystals = args.vent_crystals + (args.end_crystals - args.vent_crystals) * progress;
        let state = FlowState::new(
            Meters::new(x),
            Fraction::new(crystals),
            MetersPerSecond::new(args.velocity),
            Kelvin::new(*vent_temperature - args.cooling * x / 1000.0),
        );

        let step = evaluator.evaluate(&state, Meters::new(args.width))?;
        println!(
            "{:12.0} | {:9.1} | {:8.3} | {:11.1} | {:9.1} | {:9.1} | {}",
            x,
            *state.core_temperature(),
            crystals,
            *step.flux / 1000.0,
            *step.yield_strength,
            *step.basal_shear_stress,
            if step.is_mobile() { "yes" } else { "no" }
        );
        if step.is_mobile() {
            last_mobile = Some(x);
        }
    }

    println!();
    match last_mobile {
        Some(x) => println!("Flow remains mobile up to {x:.0} m"),
        None => println!("Flow is immobile everywhere in the sampled channel"),
    }

    if let Some(path) = &args.dump_diagnostics {
        let json = serde_json::to_string_pretty(&log.snapshot())?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), samples = log.len(), "diagnostic log written");
    }

    Ok(())
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
