use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::models::normalize_label;
use crate::planner::constants::{LABEL_MATCH_THRESHOLD, MAX_LABEL_SUGGESTIONS};
use crate::planner::split_labels;

/// Prompt for the total budget per menu.
pub fn prompt_budget() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Enter your budget")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput(format!("Invalid budget: {}", input.trim())))
}

/// Prompt for the number of people.
pub fn prompt_party_size() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Enter the number of people")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput(format!("Invalid number of people: {}", input.trim())))
}

/// Known labels similar to `input`, best first.
pub fn suggest_labels<'a>(input: &str, known: &'a [String]) -> Vec<&'a str> {
    let key = normalize_label(input);
    let mut candidates: Vec<(&str, f64)> = known
        .iter()
        .map(|label| (label.as_str(), jaro_winkler(label, &key)))
        .filter(|(_, score)| *score > LABEL_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates
        .into_iter()
        .take(MAX_LABEL_SUGGESTIONS)
        .map(|(label, _)| label)
        .collect()
}

/// Map a typed label onto a known one, asking the user when only a fuzzy match exists.
///
/// Labels with no close match are kept as typed.
pub fn resolve_label(label: &str, known: &[String]) -> Result<String> {
    if known.iter().any(|k| k == label) {
        return Ok(label.to_string());
    }

    let candidates = suggest_labels(label, known);
    match candidates.as_slice() {
        [] => {
            println!("'{}' does not appear in the catalog", label);
            Ok(label.to_string())
        }
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only))
                .default(true)
                .interact()?;
            Ok(if confirm { only.to_string() } else { label.to_string() })
        }
        many => {
            let mut options: Vec<String> = many.iter().map(|s| s.to_string()).collect();
            options.push(format!("Keep '{}'", label));

            let selection = Select::new()
                .with_prompt(format!("Which did you mean by '{}'?", label))
                .items(&options)
                .default(0)
                .interact()?;

            Ok(if selection < many.len() {
                options.swap_remove(selection)
            } else {
                label.to_string()
            })
        }
    }
}

/// Prompt for a comma-separated label list, checked against labels seen in the catalog.
pub fn prompt_labels(prompt: &str, known: &[String], default: &[String]) -> Result<Vec<String>> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if !default.is_empty() {
        input = input.default(default.join(", "));
    }
    let raw = input.interact_text()?;

    let mut labels = Vec::new();
    for label in split_labels(&raw) {
        let resolved = resolve_label(&label, known)?;
        if !labels.contains(&resolved) {
            labels.push(resolved);
        }
    }
    Ok(labels)
}
