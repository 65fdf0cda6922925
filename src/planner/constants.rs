/// Maximum number of menus proposed per request.
pub const MAX_MENUS: usize = 5;

/// Shown in place of a missing image link.
pub const NO_IMAGE_PLACEHOLDER: &str = "No image available";

/// Message for an empty menu set.
pub const NO_MENUS_MESSAGE: &str = "No menus could be generated within the given constraints.";

/// Width of the rule printed after each menu.
pub const MENU_RULE_WIDTH: usize = 40;

/// Minimum Jaro-Winkler similarity for suggesting a known course or diet label.
pub const LABEL_MATCH_THRESHOLD: f64 = 0.8;

/// Maximum number of label suggestions offered at once.
pub const MAX_LABEL_SUGGESTIONS: usize = 5;
