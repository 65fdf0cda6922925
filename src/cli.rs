use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::RowPolicy;

/// Menu Planner: proposes up to five distinct party menus within a budget.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the dish catalog (CSV, or JSON by extension). Overrides the config file.
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to a TOML config file (default: menu_planner.toml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// How to treat malformed catalog rows. Overrides the config file.
    #[arg(long, value_enum, global = true)]
    pub malformed_rows: Option<RowPolicy>,

    /// Enable verbose logging (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate menus; prompts for any constraint not given as a flag.
    Generate(GenerateArgs),

    /// Show the courses and diets available in the catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate(GenerateArgs::default())
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Total budget per menu.
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// Number of people to feed.
    #[arg(short, long)]
    pub people: Option<u32>,

    /// Comma-separated courses in priority order, e.g. "starter,main course,dessert".
    #[arg(long)]
    pub courses: Option<String>,

    /// Comma-separated diet preferences, e.g. "vegetarian,non vegetarian".
    #[arg(long)]
    pub diets: Option<String>,

    /// Print the menus as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
