//! Cylindrical Vector Calculator
//!
//! Evaluates the cylindrical vector algebra, the tokamak field models and the
//! gyration time from the command line.
//!
//! Usage:
//!   cargo run --bin cylcalc -- to-cartesian 1.0 1.5708 5.0
//!   cargo run --bin cylcalc -- add 1 0 0 1 3.14159 0
//!   cargo run --bin cylcalc -- --config tokamak.json field b3 1.2 0 0.3

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use cylfield::coordinates::{
    cartesian_to_cylindrical, cylindrical_add, cylindrical_cross, cylindrical_inner,
    cylindrical_to_cartesian, Cartesian3, Cylindrical3,
};
use cylfield::fields::{ElectricField3, ElectricField5, FieldModel, MagneticField3};
use cylfield::plasma::gyration_time;
use cylfield::{constants, Config};

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Cylindrical vector calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Cylindrical vector algebra and tokamak field models",
    long_about = None
)]
struct Cli {
    /// JSON configuration file with tokamak and particle parameters
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// A cylindrical triple given on the command line
#[derive(Args, Debug)]
struct CylindricalArgs {
    /// Radial distance R
    #[arg(allow_negative_numbers = true)]
    r: f64,
    /// Azimuth φ in radians
    #[arg(allow_negative_numbers = true)]
    phi: f64,
    /// Axial height Z
    #[arg(allow_negative_numbers = true)]
    z: f64,
}

impl CylindricalArgs {
    fn to_cylindrical3(&self) -> Cylindrical3 {
        Cylindrical3::new(self.r, self.phi, self.z)
    }
}

/// Two cylindrical triples given on the command line
#[derive(Args, Debug)]
struct PairArgs {
    #[arg(allow_negative_numbers = true)]
    r1: f64,
    #[arg(allow_negative_numbers = true)]
    phi1: f64,
    #[arg(allow_negative_numbers = true)]
    z1: f64,
    #[arg(allow_negative_numbers = true)]
    r2: f64,
    #[arg(allow_negative_numbers = true)]
    phi2: f64,
    #[arg(allow_negative_numbers = true)]
    z2: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FieldKind {
    /// Magnetic field of question 3
    B3,
    /// Electric field of question 3 (zero)
    E3,
    /// Electric field of question 5
    E5,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert (R, φ, Z) to (x, y, z)
    ToCartesian(CylindricalArgs),
    /// Convert (x, y, z) to (R, φ, Z)
    ToCylindrical {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
    /// Add two cylindrical vectors
    Add(PairArgs),
    /// Inner product of two cylindrical vectors
    Inner(PairArgs),
    /// Component-wise cross product of two cylindrical triples
    Cross(PairArgs),
    /// Evaluate a field model at a position
    Field {
        #[arg(value_enum)]
        model: FieldKind,
        #[command(flatten)]
        position: CylindricalArgs,
    },
    /// Gyration period of the configured particle
    GyrationTime {
        /// Particle mass in kg (overrides the configuration)
        #[arg(short, long)]
        mass: Option<f64>,
        /// Field strength in T (defaults to the configured B0)
        #[arg(short = 'b', long)]
        field: Option<f64>,
    },
}

/// Everything a subcommand can produce
#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Output {
    Cylindrical(Cylindrical3),
    Cartesian(Cartesian3),
    Scalar(f64),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Cylindrical(c) => write!(f, "R = {}, phi = {}, Z = {}", c.r, c.phi, c.z),
            Output::Cartesian(c) => write!(f, "x = {}, y = {}, z = {}", c.x, c.y, c.z),
            Output::Scalar(v) => write!(f, "{}", v),
        }
    }
}

fn run(command: &Command, config: &Config) -> Output {
    match command {
        Command::ToCartesian(p) => {
            let (x, y, z) = cylindrical_to_cartesian(p.r, p.phi, p.z);
            Output::Cartesian(Cartesian3::new(x, y, z))
        }
        Command::ToCylindrical { x, y, z } => {
            Output::Cylindrical(Cylindrical3::from_tuple(cartesian_to_cylindrical(*x, *y, *z)))
        }
        Command::Add(p) => Output::Cylindrical(Cylindrical3::from_tuple(cylindrical_add(
            p.r1, p.phi1, p.z1, p.r2, p.phi2, p.z2,
        ))),
        Command::Inner(p) => {
            Output::Scalar(cylindrical_inner(p.r1, p.phi1, p.z1, p.r2, p.phi2, p.z2))
        }
        Command::Cross(p) => Output::Cylindrical(Cylindrical3::from_tuple(cylindrical_cross(
            p.r1, p.phi1, p.z1, p.r2, p.phi2, p.z2,
        ))),
        Command::Field { model, position } => {
            let t = &config.tokamak;
            let pos = position.to_cylindrical3();
            let value = match model {
                FieldKind::B3 => MagneticField3::from_config(t).evaluate(&pos),
                FieldKind::E3 => ElectricField3::new(t.r0, 0.0, 0.0).evaluate(&pos),
                FieldKind::E5 => ElectricField5::from_config(t).evaluate(&pos),
            };
            Output::Cylindrical(value)
        }
        Command::GyrationTime { mass, field } => {
            let mass = mass.unwrap_or(config.particle.mass);
            let b = field.unwrap_or(config.tokamak.b0);
            Output::Scalar(gyration_time(
                mass,
                b,
                config.particle.charge_number,
                constants::ELEMENTARY_CHARGE,
            ))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_ref())?;

    let output = run(&cli.command, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output);
    }

    Ok(())
}
