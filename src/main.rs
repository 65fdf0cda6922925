use clap::Parser;
use tracing::{debug, error, trace};

use menu_planner_rs::catalog::{load_catalog, CatalogReport};
use menu_planner_rs::cli::{Cli, Command, GenerateArgs};
use menu_planner_rs::config::PlannerConfig;
use menu_planner_rs::error::{MenuError, Result};
use menu_planner_rs::interface::{
    display_catalog_summary, display_menus, menus_to_json, prompt_budget, prompt_labels,
    prompt_party_size,
};
use menu_planner_rs::planner::{generate_menus, split_labels, MenuRequest};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &PlannerConfig, verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!("menu_planner started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn run(cli: Cli) -> Result<()> {
    let mut config = PlannerConfig::load(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.catalog = catalog;
    }
    if let Some(policy) = cli.malformed_rows {
        config.malformed_rows = policy;
    }

    init_logging(&config, cli.verbose);

    match cli.command.unwrap_or_default() {
        Command::Generate(args) => cmd_generate(&config, args),
        Command::Catalog => cmd_catalog(&config),
    }
}

/// Load the catalog, reporting any skipped rows on stderr.
fn load(config: &PlannerConfig) -> Result<CatalogReport> {
    if !config.catalog.exists() {
        return Err(MenuError::InvalidInput(format!(
            "catalog file not found: {}",
            config.catalog.display()
        )));
    }

    let report = load_catalog(&config.catalog, config.malformed_rows)?;
    for row in &report.skipped {
        eprintln!(
            "Skipped catalog record {} ({}): {}",
            row.record, row.name, row.reason
        );
    }
    Ok(report)
}

/// Collect constraints, generate menus, and present them.
fn cmd_generate(config: &PlannerConfig, args: GenerateArgs) -> Result<()> {
    let report = load(config)?;
    let catalog = &report.catalog;

    let budget = match args.budget {
        Some(budget) => budget,
        None => prompt_budget()?,
    };
    let party_size = match args.people {
        Some(people) => people,
        None => prompt_party_size()?,
    };
    let course_types = match &args.courses {
        Some(courses) => split_labels(courses),
        None => prompt_labels(
            "Select course types (comma-separated, e.g., starter, main course, dessert)",
            &catalog.courses(),
            &config.default_courses,
        )?,
    };
    let diet_preferences = match &args.diets {
        Some(diets) => split_labels(diets),
        None => prompt_labels(
            "Enter diet preferences (comma-separated, e.g., vegetarian, non vegetarian)",
            &catalog.diets(),
            &config.default_diets,
        )?,
    };

    let request = MenuRequest::new(budget, party_size, course_types, diet_preferences);
    let menus = generate_menus(catalog.dishes(), &request)?;

    if args.json {
        println!("{}", menus_to_json(&menus)?);
    } else {
        display_menus(&menus);
    }

    Ok(())
}

/// Summarize the catalog.
fn cmd_catalog(config: &PlannerConfig) -> Result<()> {
    let report = load(config)?;
    display_catalog_summary(&report.catalog, &report.skipped);
    Ok(())
}
