use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use thali_planner_rs::cli::{Cli, Command, PlanArgs};
use thali_planner_rs::error::Result;
use thali_planner_rs::export::{render_pdf, write_csv, write_pdf, PlanReport};
use thali_planner_rs::interface::{
    collect_preferences, collect_profile, display_catalog, display_notices, display_plan,
    display_targets, prompt_yes_no,
};
use thali_planner_rs::metrics::compute_targets;
use thali_planner_rs::models::{ActivityLevel, DietType, Gender, Labeled, Region, UserProfile};
use thali_planner_rs::planner::generate_plan;
use thali_planner_rs::session::{load_session, save_session, Session};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(cli.session.as_deref(), &cli.plan),
        Command::Metrics {
            weight,
            height,
            age,
            gender,
            activity,
        } => cmd_metrics(weight, height, age, gender, activity),
        Command::Catalog { region, diet } => cmd_catalog(region, diet),
    }
}

/// Walk through targets, meal choices and plan generation.
fn cmd_plan(session_path: Option<&Path>, args: &PlanArgs) -> Result<()> {
    let saved = match session_path {
        Some(path) if path.exists() => {
            let session = load_session(path)?;
            println!("Loaded session from {}", path.display());
            Some(session)
        }
        _ => None,
    };
    let (profile, saved_preferences) = match saved {
        Some(session) => (session.profile, session.preferences),
        None => (collect_profile()?, None),
    };
    // Anything answered at the prompts is worth offering to save.
    let prompted = saved_preferences.is_none();

    let targets = compute_targets(&profile)?;
    info!(
        calories = targets.calories_kcal(),
        category = %targets.bmi_category,
        "targets ready"
    );
    display_targets(&profile, &targets);

    let preferences = match saved_preferences {
        Some(preferences) => preferences,
        None => {
            println!("Select your meal preferences");
            collect_preferences()?
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let plan = generate_plan(&preferences, &mut rng);
    display_plan(&plan);

    if !args.no_pdf {
        let report = PlanReport {
            profile: &profile,
            targets: &targets,
            plan: &plan,
        };
        let artifact = render_pdf(&report, Some(args.logo.as_path()))?;
        display_notices(&artifact.notices);
        write_pdf(&args.pdf, &artifact)?;
        println!("Diet plan PDF saved to {}", args.pdf.display());
    }

    if let Some(csv_path) = &args.csv {
        write_csv(csv_path, &plan)?;
        println!("Diet plan CSV saved to {}", csv_path.display());
    }

    match session_path {
        Some(path) if prompted => {
            let question = format!("Save profile and preferences to {}?", path.display());
            if prompt_yes_no(&question, true)? {
                let session = Session {
                    profile,
                    preferences: Some(preferences),
                };
                save_session(path, &session)?;
                println!("Session saved.");
            }
        }
        Some(_) => {}
        None => debug!("no session file given, answers not saved"),
    }

    Ok(())
}

/// Print targets for metrics given on the command line.
fn cmd_metrics(
    weight: f64,
    height: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
) -> Result<()> {
    let profile = UserProfile {
        name: String::new(),
        city: String::new(),
        weight_kg: weight,
        height_cm: height,
        age,
        gender,
        activity,
        blood_glucose_mg_dl: None,
    };
    let targets = compute_targets(&profile)?;
    display_targets(&profile, &targets);
    Ok(())
}

/// List meal options for one region or all of them.
fn cmd_catalog(region: Option<Region>, diet: DietType) -> Result<()> {
    match region {
        Some(region) => display_catalog(region, diet),
        None => {
            for &region in Region::ALL {
                display_catalog(region, diet);
            }
        }
    }
    Ok(())
}
