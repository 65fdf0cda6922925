use crate::catalog::{Catalog, SkippedRow};
use crate::error::Result;
use crate::models::MenuSet;
use crate::planner::constants::{MENU_RULE_WIDTH, NO_IMAGE_PLACEHOLDER, NO_MENUS_MESSAGE};

/// Render menus as plain text, one block per menu.
pub fn format_menus(menus: &MenuSet) -> String {
    if menus.is_empty() {
        return format!("{}\n", NO_MENUS_MESSAGE);
    }

    let mut lines: Vec<String> = Vec::new();
    for (index, menu) in menus.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("Menu {}:", index + 1));
        for item in &menu.items {
            lines.push(format!("  Dish: {}", item.dish));
            lines.push(format!("  Course: {}", item.course));
            lines.push(format!("  Diet: {}", item.diet));
            lines.push(format!("  Price per Unit: ${}", item.price_per_unit));
            lines.push(format!("  Total Units Needed: {}", item.units_needed));
            lines.push(format!("  Total Cost: ${}", item.total_cost));
            lines.push(format!(
                "  Image Link: {}",
                item.image_link.as_deref().unwrap_or(NO_IMAGE_PLACEHOLDER)
            ));
        }
        lines.push(format!("Total Menu Cost: ${}", menu.total_cost));
        lines.push("-".repeat(MENU_RULE_WIDTH));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Print menus to stdout.
pub fn display_menus(menus: &MenuSet) {
    print!("{}", format_menus(menus));
}

/// Pretty JSON for `--json` output.
pub fn menus_to_json(menus: &MenuSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(menus)?)
}

/// Display catalog size, labels, and any rows dropped while loading.
pub fn display_catalog_summary(catalog: &Catalog, skipped: &[SkippedRow]) {
    println!();
    println!("=== Catalog ({} dishes) ===", catalog.len());
    println!();

    for course in catalog.courses() {
        println!("  {} ({} dishes)", course, catalog.count_course(&course));
    }
    println!();
    println!("Diets: {}", catalog.diets().join(", "));

    if !skipped.is_empty() {
        println!();
        println!("Skipped {} malformed rows:", skipped.len());
        for row in skipped {
            println!("  record {} ({}): {}", row.record, row.name, row.reason);
        }
    }
    println!();
}
