//! Glove paint kit prefixes
//!
//! Glove finishes are matched by name: a paint kit belongs to a glove when
//! its name starts with the glove's prefix. Most prefixes are the class name
//! without `_gloves`; the schema breaks that convention for a few gloves.

use std::collections::HashMap;

/// Glove class names whose paint kits use an unrelated prefix
pub const GLOVE_PREFIX_OVERRIDES: &[(&str, &str)] = &[
    ("studded_brokenfang_gloves", "operation10_"),
    ("studded_hydra_gloves", "bloodhound_hydra_"),
    ("leather_handwraps", "handwrap_"),
    ("studded_bloodhound_gloves", "bloodhound_"),
];

const GLOVE_SUFFIX: &str = "_gloves";

/// Prefix derived from the class name alone
pub fn default_prefix(class_name: &str) -> &str {
    class_name.strip_suffix(GLOVE_SUFFIX).unwrap_or(class_name)
}

/// Prefix table: built-in overrides plus any configured additions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlovePrefixes {
    overrides: HashMap<String, String>,
}

impl Default for GlovePrefixes {
    fn default() -> Self {
        Self {
            overrides: GLOVE_PREFIX_OVERRIDES
                .iter()
                .map(|&(class, prefix)| (class.to_string(), prefix.to_string()))
                .collect(),
        }
    }
}

impl GlovePrefixes {
    /// Add or replace overrides on top of the built-in table
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides.extend(
            overrides
                .into_iter()
                .map(|(class, prefix)| (class.into(), prefix.into())),
        );
        self
    }

    /// Effective prefix for a glove class
    pub fn prefix_for<'s>(&'s self, class_name: &'s str) -> &'s str {
        self.overrides
            .get(class_name)
            .map(String::as_str)
            .unwrap_or_else(|| default_prefix(class_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_takes_precedence() {
        let prefixes = GlovePrefixes::default();
        assert_eq!(prefixes.prefix_for("studded_brokenfang_gloves"), "operation10_");
        assert_ne!(
            prefixes.prefix_for("studded_brokenfang_gloves"),
            default_prefix("studded_brokenfang_gloves")
        );
        assert_eq!(default_prefix("studded_brokenfang_gloves"), "studded_brokenfang");
    }

    #[test]
    fn test_builtin_overrides() {
        let prefixes = GlovePrefixes::default();
        assert_eq!(prefixes.prefix_for("studded_hydra_gloves"), "bloodhound_hydra_");
        assert_eq!(prefixes.prefix_for("leather_handwraps"), "handwrap_");
        assert_eq!(prefixes.prefix_for("studded_bloodhound_gloves"), "bloodhound_");
    }

    #[test]
    fn test_default_prefix_strips_suffix() {
        let prefixes = GlovePrefixes::default();
        assert_eq!(prefixes.prefix_for("sporty_gloves"), "sporty");
        assert_eq!(prefixes.prefix_for("motorcycle_gloves"), "motorcycle");
        assert_eq!(prefixes.prefix_for("slick_gloves"), "slick");
        // No suffix: whole class name
        assert_eq!(prefixes.prefix_for("leather_wraps"), "leather_wraps");
    }

    #[test]
    fn test_configured_overrides() {
        let prefixes = GlovePrefixes::default()
            .with_overrides([("sporty_gloves", "sporty_"), ("leather_handwraps", "wraps_")]);

        assert_eq!(prefixes.prefix_for("sporty_gloves"), "sporty_");
        assert_eq!(prefixes.prefix_for("leather_handwraps"), "wraps_");
        assert_eq!(prefixes.prefix_for("studded_hydra_gloves"), "bloodhound_hydra_");
    }
}
