use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "minutas",
    about = "Meal-plan catalogs, spreadsheet import and weekly orders for childcare centers"
)]
pub struct Cli {
    /// Path to the SQLite database.
    #[arg(long, default_value = "data/minutas.db")]
    pub db: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Insert the starter food catalog (skips foods already present).
    Seed,
    /// Add a food to the catalog.
    AddFood { name: String },
    /// Add a childcare center.
    AddCenter { name: String },
    /// Write a fill-in CSV template listing every catalog food.
    ExportTemplate { output: PathBuf },
    /// Import menu rows from a CSV file and print the summary.
    Import {
        file: PathBuf,
        /// Print the summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Assign a menu (by id) to a center's week.
    Assign {
        #[arg(long)]
        center: String,
        #[arg(long)]
        menu_id: i64,
    },
    /// Remove a menu from a center's week and compact positions.
    Unassign {
        #[arg(long)]
        center: String,
        #[arg(long)]
        menu_id: i64,
    },
    /// Aggregate the center's weekly menus scaled by headcounts.
    WeeklyOrder {
        #[arg(long)]
        center: String,
        /// Children in age group 1 (1-2 years).
        #[arg(long)]
        group_1: String,
        /// Children in age group 2 (3-5 years).
        #[arg(long)]
        group_2: String,
        #[arg(long)]
        json: bool,
    },
}
