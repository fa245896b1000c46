// ABOUTME: LiftLog CLI - command-line front end for the workout planner
// ABOUTME: Composition root wiring configuration, logging, storage, and the workout store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show plans and pick one
//! liftlog-cli plan list
//! liftlog-cli plan use plan-2
//!
//! # Build a plan
//! liftlog-cli plan create "Upper Body"
//! liftlog-cli exercise add "Bench Press" --sets 3 --reps 8 --weight 80
//! liftlog-cli exercise set <exercise-id> weight 82.5
//!
//! # Log a session where every set was completed
//! liftlog-cli workout quick --notes "Felt strong"
//! liftlog-cli history
//! liftlog-cli progress "Bench Press" --metric 1rm --formula brzycki
//!
//! # Tools
//! liftlog-cli plates 100 --bar 20
//! liftlog-cli tempo --eccentric 3 --concentric 1 --seconds 30
//! liftlog-cli tempo --voice 4 --max-count 8
//!
//! # Backup
//! liftlog-cli export
//! liftlog-cli import liftlog-backup-2025-03-14.json
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use liftlog::{
    config::AppConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    persistence::{
        FileStorage, PlateSettingsRepository, StatePersister, StorageBackend, WriteThroughObserver,
    },
    store::{WorkoutState, WorkoutStore},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "liftlog-cli",
    about = "LiftLog workout planner",
    long_about = "Plan workouts, log sessions, track progress, load the bar, and pace your reps."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Plan management
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Edit exercises of the active plan
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommand,
    },

    /// Exercise library
    Library {
        #[command(subcommand)]
        action: LibraryCommand,
    },

    /// Workout sessions
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Finished workouts, most recent first
    History,

    /// Progress series for one exercise
    Progress {
        /// Exercise id or name
        exercise: String,

        /// Series to show: weight, volume, or 1rm
        #[arg(long, default_value = "weight")]
        metric: String,

        /// One-rep max formula: epley, brzycki, or lombardi
        #[arg(long, default_value = "epley")]
        formula: String,
    },

    /// Plates to load per side for a target weight
    Plates {
        /// Target total weight in kg
        target: f64,

        /// Bar weight override in kg
        #[arg(long)]
        bar: Option<f64>,

        /// Remember the bar override for next time
        #[arg(long, requires = "bar")]
        save: bool,
    },

    /// Run the tempo metronome
    Tempo {
        /// Eccentric seconds (advanced mode)
        #[arg(long, conflicts_with = "voice")]
        eccentric: Option<u32>,

        /// Concentric seconds (advanced mode)
        #[arg(long, conflicts_with = "voice")]
        concentric: Option<u32>,

        /// Concentric seconds per counted rep (voice mode)
        #[arg(long)]
        voice: Option<u32>,

        /// Highest rep number spoken before wrapping (voice mode)
        #[arg(long, requires = "voice")]
        max_count: Option<u32>,

        /// How long to run
        #[arg(long, default_value = "20")]
        seconds: u64,
    },

    /// Write a backup of all plans
    Export {
        /// Output file (defaults to a dated file in the current directory)
        path: Option<PathBuf>,
    },

    /// Replace all plans from a backup
    Import {
        /// Backup file to read
        path: PathBuf,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// List plans
    List,

    /// Create a plan and make it active
    Create {
        /// Plan name
        name: String,
    },

    /// Delete a plan
    Delete {
        /// Plan id
        plan_id: String,
    },

    /// Make a plan active
    Use {
        /// Plan id
        plan_id: String,
    },

    /// Rename a plan
    Rename {
        /// Plan id
        plan_id: String,

        /// New name
        name: String,
    },

    /// Show a plan's exercises (active plan by default)
    Show {
        /// Plan id
        plan_id: Option<String>,
    },
}

/// Field of an exercise to change
#[derive(Clone, Copy, ValueEnum)]
enum ExerciseField {
    Name,
    Sets,
    Reps,
    Weight,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExerciseCommand {
    /// Append an exercise to the active plan
    Add {
        /// Exercise name
        name: String,

        /// Target sets
        #[arg(long, default_value = "3")]
        sets: u32,

        /// Target reps per set
        #[arg(long, default_value = "10")]
        reps: u32,

        /// Target weight in kg
        #[arg(long, default_value = "0")]
        weight: f64,
    },

    /// Remove an exercise from the active plan
    Remove {
        /// Exercise id
        exercise_id: String,
    },

    /// Change one field of an exercise
    Set {
        /// Exercise id
        exercise_id: String,

        /// Field to change
        #[arg(value_enum)]
        field: ExerciseField,

        /// New value
        value: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LibraryCommand {
    /// Search by name, category, or description
    Search {
        /// Search text (omit to list everything)
        query: Option<String>,
    },

    /// Add a library entry
    Add {
        /// Exercise name
        name: String,

        /// Category such as Chest or Legs
        #[arg(long)]
        category: Option<String>,

        /// Short description
        #[arg(long)]
        description: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Start the active plan, complete every set, and finish
    Quick {
        /// Notes to attach
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Everything a command may need
pub struct App {
    /// Loaded configuration
    pub config: AppConfig,
    /// Workout store with write-through persistence attached
    pub store: WorkoutStore,
    /// Plate calculator settings
    pub plate_settings: PlateSettingsRepository,
}

fn open_app(config: AppConfig) -> Result<App> {
    let backend: Arc<dyn StorageBackend> = Arc::new(FileStorage::open(&config.data_dir)?);
    let persister = StatePersister::new(Arc::clone(&backend), config.storage_key.clone());

    let (state, first_run) = match persister.load()? {
        Some(persisted) => (persisted.into_state(), false),
        None => (WorkoutState::with_sample_data(), true),
    };

    let mut store = WorkoutStore::new(state);
    if first_run {
        info!(data_dir = %config.data_dir.display(), "First run; seeding sample plans");
        persister.save(store.state())?;
    }
    store.subscribe(WriteThroughObserver::new(persister));

    Ok(App {
        plate_settings: PlateSettingsRepository::new(backend),
        config,
        store,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let mut app = open_app(config)?;

    match cli.command {
        Command::Plan { action } => match action {
            PlanCommand::List => commands::plan::list(&app),
            PlanCommand::Create { name } => commands::plan::create(&mut app, &name)?,
            PlanCommand::Delete { plan_id } => commands::plan::delete(&mut app, &plan_id)?,
            PlanCommand::Use { plan_id } => commands::plan::activate(&mut app, &plan_id)?,
            PlanCommand::Rename { plan_id, name } => {
                commands::plan::rename(&mut app, &plan_id, &name)?;
            }
            PlanCommand::Show { plan_id } => commands::plan::show(&app, plan_id.as_deref())?,
        },
        Command::Exercise { action } => match action {
            ExerciseCommand::Add {
                name,
                sets,
                reps,
                weight,
            } => commands::exercise::add(&mut app, &name, sets, reps, weight)?,
            ExerciseCommand::Remove { exercise_id } => {
                commands::exercise::remove(&mut app, &exercise_id)?;
            }
            ExerciseCommand::Set {
                exercise_id,
                field,
                value,
            } => {
                let update = commands::exercise::parse_update(field, &value)?;
                commands::exercise::set(&mut app, &exercise_id, update)?;
            }
        },
        Command::Library { action } => match action {
            LibraryCommand::Search { query } => {
                commands::library::search(&app, query.as_deref().unwrap_or_default());
            }
            LibraryCommand::Add {
                name,
                category,
                description,
            } => commands::library::add(&mut app, &name, category, description)?,
        },
        Command::Workout { action } => match action {
            WorkoutCommand::Quick { notes } => commands::workout::quick(&mut app, notes)?,
        },
        Command::History => commands::workout::history(&app),
        Command::Progress {
            exercise,
            metric,
            formula,
        } => commands::workout::progress(&app, &exercise, &metric, &formula)?,
        Command::Plates { target, bar, save } => {
            commands::tools::plates(&app, target, bar, save)?;
        }
        Command::Tempo {
            eccentric,
            concentric,
            voice,
            max_count,
            seconds,
        } => {
            let mode = commands::tools::tempo_mode(eccentric, concentric, voice, max_count);
            commands::tools::tempo(&app, mode, seconds).await;
        }
        Command::Export { path } => commands::data::export(&app, path)?,
        Command::Import { path } => commands::data::import(&mut app, &path)?,
    }

    Ok(())
}
