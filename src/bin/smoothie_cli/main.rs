// ABOUTME: Smoothie Lab CLI - curate ingredients, generate recipes, and browse history
// ABOUTME: One-shot subcommands plus an interactive shell over the same controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors
//!
//! Usage:
//! ```bash
//! # Show every ingredient, or only those matching a search term
//! smoothie-cli ingredients list --search ベリー
//!
//! # Add or remove a custom ingredient
//! smoothie-cli ingredients add fruits ライチ
//! smoothie-cli ingredients remove fruits ライチ
//!
//! # Generate a recipe with three fruits and save it with four stars
//! smoothie-cli generate --fruits 3 --save --rating 4
//!
//! # Browse and rate saved recipes
//! smoothie-cli history list
//! smoothie-cli history show 0
//! smoothie-cli history rate 0 5
//!
//! # Interactive session
//! smoothie-cli shell
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smoothie_lab::{
    config::AppConfig,
    controller::AppController,
    logging::LoggingConfig,
    models::Category,
    persistence::Persistence,
    storage::FileStore,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "smoothie-cli",
    about = "Smoothie Lab recipe generator",
    long_about = "Curate smoothie ingredients, generate randomized recipes, and keep a rated history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding saved ingredients and history
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Ingredient management commands
    Ingredients {
        #[command(subcommand)]
        action: IngredientCommand,
    },

    /// Generate a random recipe
    Generate {
        /// Number of fruits (clamped to 0-5)
        #[arg(long, allow_negative_numbers = true)]
        fruits: Option<i64>,

        /// Number of vegetables (clamped to 0-5)
        #[arg(long, allow_negative_numbers = true)]
        veggies: Option<i64>,

        /// Number of liquids (clamped to 0-5)
        #[arg(long, allow_negative_numbers = true)]
        liquids: Option<i64>,

        /// Save the recipe to history
        #[arg(long)]
        save: bool,

        /// Star rating to store with the saved recipe (0-5)
        #[arg(long, requires = "save")]
        rating: Option<u8>,

        /// Skip the generation delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Saved recipe commands
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },

    /// Start an interactive session
    Shell,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum IngredientCommand {
    /// List ingredients per category
    List {
        /// Only show names containing this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a custom ingredient
    Add {
        /// fruits, veggies, or liquids
        category: Category,

        /// Ingredient name
        name: String,
    },

    /// Remove an ingredient
    Remove {
        /// fruits, veggies, or liquids
        category: Category,

        /// Ingredient name
        name: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HistoryCommand {
    /// List saved recipes, newest first
    List,

    /// Show a saved recipe
    Show {
        /// Position in the list (0 is the newest)
        index: usize,
    },

    /// Rate a saved recipe; omit the rating to clear it
    Rate {
        /// Position in the list (0 is the newest)
        index: usize,

        /// Stars (0-5)
        rating: Option<u8>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    info!(data_dir = %config.data_dir.display(), "Using data directory");

    let persistence = Persistence::new(Arc::new(FileStore::new(&config.data_dir)));
    let mut controller = AppController::new(persistence, &config);

    match cli.command {
        Command::Ingredients { action } => match action {
            IngredientCommand::List { search } => {
                commands::ingredients::list(&controller, search.as_deref());
            }
            IngredientCommand::Add { category, name } => {
                commands::ingredients::add(&mut controller, category, &name)?;
            }
            IngredientCommand::Remove { category, name } => {
                commands::ingredients::remove(&mut controller, category, &name)?;
            }
        },
        Command::Generate {
            fruits,
            veggies,
            liquids,
            save,
            rating,
            no_delay,
        } => {
            let options = commands::generate::GenerateOptions {
                fruits,
                veggies,
                liquids,
                save,
                rating,
                no_delay,
            };
            commands::generate::run(&mut controller, &options).await?;
        }
        Command::History { action } => match action {
            HistoryCommand::List => commands::history::list(&controller),
            HistoryCommand::Show { index } => commands::history::show(&mut controller, index)?,
            HistoryCommand::Rate { index, rating } => {
                commands::history::rate(&mut controller, index, rating)?;
            }
        },
        Command::Shell => commands::shell::run(&mut controller).await?,
    }

    Ok(())
}
