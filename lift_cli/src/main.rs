use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lift_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Strength training program tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full document as JSON
    Show,

    /// Increase an exercise's working weight by the default increment
    Inc {
        /// Exercise name
        name: String,
    },

    /// Decrease an exercise's working weight (clamped at zero)
    Dec {
        /// Exercise name
        name: String,
    },

    /// Set an exercise's working weight outright
    Set {
        /// Exercise name
        name: String,

        /// New weight
        weight: f64,
    },

    /// Add a new exercise
    Add {
        /// Exercise name
        name: String,

        /// Starting weight
        #[arg(long, default_value_t = 45.0)]
        weight: f64,

        /// Default sets
        #[arg(long, default_value_t = 3)]
        sets: u32,

        /// Default reps
        #[arg(long, default_value_t = 5)]
        reps: u32,

        /// Program to append the exercise to
        #[arg(long)]
        program: Option<String>,
    },

    /// Remove an exercise and all program references to it
    Remove {
        /// Exercise name
        name: String,
    },

    /// Log a completed workout session
    Log {
        /// Session date (ISO 8601, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Program the session followed
        #[arg(long)]
        program: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Session length in seconds
        #[arg(long)]
        duration_seconds: Option<i64>,

        /// Per-exercise performance records as a JSON array
        #[arg(long)]
        exercises: Option<String>,
    },

    /// Print the workout history, newest first
    History,
}

fn main() -> Result<()> {
    lift_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let tracker = Tracker::new(FileStore::new(data_dir.join("workouts.json")));

    match cli.command {
        Commands::Show => {
            let doc = tracker.load_document()?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }

        Commands::Inc { name } => {
            let weight = tracker.increment_weight(&name)?;
            println!("{}: {}", name, weight);
        }

        Commands::Dec { name } => {
            let weight = tracker.decrement_weight(&name)?;
            println!("{}: {}", name, weight);
        }

        Commands::Set { name, weight } => {
            let weight = tracker.set_weight(&name, weight)?;
            println!("{}: {}", name, weight);
        }

        Commands::Add {
            name,
            weight,
            sets,
            reps,
            program,
        } => {
            let name = tracker.add_exercise(NewExercise {
                name,
                weight,
                sets,
                reps,
                program,
            })?;
            println!("Added {}", name);
        }

        Commands::Remove { name } => {
            tracker.remove_exercise(&name)?;
            println!("Removed {}", name);
        }

        Commands::Log {
            date,
            program,
            notes,
            duration_seconds,
            exercises,
        } => {
            let exercises = match exercises {
                Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                    Error::InvalidArgument(format!("--exercises must be a JSON array: {}", e))
                })?,
                None => Vec::new(),
            };

            let entry = tracker.log_workout(WorkoutDraft {
                date,
                program,
                notes,
                duration_seconds,
                exercises,
            })?;
            println!("Logged workout on {}", entry.date);
        }

        Commands::History => {
            let entries = tracker.list_history()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
