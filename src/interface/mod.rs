pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_budget, prompt_labels, prompt_party_size, resolve_label, suggest_labels,
};
pub use render::{display_catalog_summary, display_menus, format_menus, menus_to_json};
