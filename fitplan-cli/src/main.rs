use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fitplan_core::{
    InputPolicy, Planner, Profile, community_support, injury_prevention_support,
    mindfulness_support,
};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

mod collect;
mod config;
mod render;
mod state;

use collect::{Prompter, collect_profile};
use config::{Config, OutputFormat};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FITPLAN_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "fitplan",
    version = VERSION,
    about = "Personalized fitness & nutrition planner"
)]
struct Cli {
    /// Defaults to an interactive `plan`
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collect a profile and print the meal plan, workout plan and health tips
    Plan(ProfileArgs),

    /// Collect a profile and print the personalized nutrition guide
    Guide(ProfileArgs),

    /// Print community, mindfulness and injury-prevention resources
    Resources {
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage ~/.fitplan/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config file if none exists
    Init,
}

#[derive(Args, Debug, Default)]
struct ProfileArgs {
    /// Read the profile from a TOML file instead of prompting
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Reject unknown answers instead of falling back to defaults
    #[arg(long)]
    strict: bool,
}

fn init_logging() {
    // `FITPLAN_LOG` wins over `RUST_LOG`; default keeps stderr quiet during prompts.
    let log_env = std::env::var("FITPLAN_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("log filter: {}", log_env);
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command.unwrap_or(Command::Plan(ProfileArgs::default())) {
        Command::Plan(args) => {
            let format = args.format.unwrap_or(cfg.output.format);
            let profile = resolve_profile(&args, &cfg)?;
            let report = Planner::new(&profile).report();
            emit(format, &report, render::report)?;
        }

        Command::Guide(args) => {
            let format = args.format.unwrap_or(cfg.output.format);
            let profile = resolve_profile(&args, &cfg)?;
            let guide = Planner::new(&profile).nutrition_guide();
            emit(format, &guide, render::nutrition_guide)?;
        }

        Command::Resources { format } => {
            let format = format.unwrap_or(cfg.output.format);
            let resources = Resources {
                community_support: community_support(),
                mindfulness: mindfulness_support(),
                injury_prevention: injury_prevention_support(),
            };
            emit(format, &resources, |r| {
                render::resources(&r.community_support, &r.mindfulness, &r.injury_prevention)
            })?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
        },
    }

    Ok(())
}

#[derive(Serialize)]
struct Resources {
    community_support: fitplan_core::CommunitySupport,
    mindfulness: fitplan_core::MindfulnessSupport,
    injury_prevention: fitplan_core::InjuryPreventionSupport,
}

fn resolve_profile(args: &ProfileArgs, cfg: &Config) -> Result<Profile> {
    let policy = if args.strict {
        InputPolicy::Strict
    } else {
        cfg.input_policy()
    };
    if let Some(path) = &args.profile {
        return state::read_profile(path, policy);
    }

    println!("Personalized Fitness & Nutrition Planner\n");
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let profile = collect_profile(&mut prompter, policy).context("collecting profile")?;
    println!();
    Ok(profile)
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl Fn(&T) -> String) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", text(value)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).context("serialize output")?;
            println!("{}", json);
        }
    }
    Ok(())
}
