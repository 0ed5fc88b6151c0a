use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivityLevel, DietType, Gender, Region};

pub const DEFAULT_PDF_PATH: &str = "diet_plan.pdf";
pub const DEFAULT_LOGO_PATH: &str = "Final Logo 360.png";

/// Thali Planner: nutrition targets and a 7-day Indian meal plan.
#[derive(Parser, Debug)]
#[command(name = "thali_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Session JSON file with a saved profile and meal preferences.
    #[arg(short, long, global = true)]
    pub session: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub plan: PlanArgs,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Compute targets, choose meals and generate a weekly plan.
    #[default]
    Plan,

    /// Compute nutrition targets without prompting.
    Metrics {
        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,

        /// Height in centimetres.
        #[arg(long)]
        height: f64,

        /// Age in years.
        #[arg(long)]
        age: u32,

        /// Male or Female.
        #[arg(long)]
        gender: Gender,

        /// Sedentary, "Lightly Active", "Moderately Active", "Very Active" or "Extra Active".
        #[arg(long, default_value = "Sedentary")]
        activity: ActivityLevel,
    },

    /// List the meal options for a region.
    Catalog {
        /// North, South, East or West. Lists every region if omitted.
        #[arg(long)]
        region: Option<Region>,

        /// Vegetarian or Non-Vegetarian.
        #[arg(long, default_value = "Non-Vegetarian")]
        diet: DietType,
    },
}

/// Plan output options, accepted before or after the `plan` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Where to write the PDF.
    #[arg(long, global = true, default_value = DEFAULT_PDF_PATH)]
    pub pdf: PathBuf,

    /// Logo image placed at the top of the PDF, skipped if missing.
    #[arg(long, global = true, default_value = DEFAULT_LOGO_PATH)]
    pub logo: PathBuf,

    /// Also write the plan as CSV.
    #[arg(long, global = true)]
    pub csv: Option<PathBuf>,

    /// Do not export a PDF.
    #[arg(long, global = true)]
    pub no_pdf: bool,

    /// Seed for meal sampling, for a reproducible plan.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}
