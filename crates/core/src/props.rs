//! Props bag and prop value types.
//!
//! Renderers receive a flat bag of named props. Values are a small closed
//! set: literal strings, numbers, boolean flags, and inline style maps.
//! Maps are ordered (`BTreeMap`) so serialized and rendered output is
//! deterministic across calls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered inline style map (CSS property name to value).
pub type StyleMap = BTreeMap<String, String>;

/// A single prop value attached to an element or component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropValue {
    /// A literal string value (from `key="value"`).
    Literal {
        /// The string content.
        value: String,
    },
    /// A numeric value (heading levels, dimensions).
    Number {
        /// The numeric content.
        value: i64,
    },
    /// A boolean flag (bare attributes like `allowfullscreen`).
    Flag {
        /// The flag state.
        value: bool,
    },
    /// An inline style map.
    Style {
        /// CSS declarations, property name to value.
        declarations: StyleMap,
    },
}

impl PropValue {
    /// Creates a literal string prop value.
    pub fn literal(value: impl Into<String>) -> Self {
        PropValue::Literal {
            value: value.into(),
        }
    }

    /// Creates a numeric prop value.
    pub fn number(value: i64) -> Self {
        PropValue::Number { value }
    }

    /// Creates a boolean flag prop value.
    pub fn flag(value: bool) -> Self {
        PropValue::Flag { value }
    }

    /// Creates a style prop value from (property, value) pairs.
    pub fn style<K, V, I>(declarations: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        PropValue::Style {
            declarations: declarations
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the literal string content, if this is a literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Literal { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            PropValue::Number { value } => Some(*value),
            _ => None,
        }
    }

    /// Returns the flag state, if this is a flag.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropValue::Flag { value } => Some(*value),
            _ => None,
        }
    }

    /// Returns the style declarations, if this is a style map.
    pub fn as_style(&self) -> Option<&StyleMap> {
        match self {
            PropValue::Style { declarations } => Some(declarations),
            _ => None,
        }
    }
}

/// A flat, ordered bag of props keyed by attribute name.
///
/// Child content rendered by the host pipeline travels in the conventional
/// `children` prop as a literal HTML fragment; the bag itself has no
/// separate children channel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Props {
    #[serde(flatten)]
    entries: BTreeMap<String, PropValue>,
}

impl Props {
    /// Creates an empty props bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a prop, returning the previous value for the name if any.
    pub fn insert(&mut self, name: impl Into<String>, value: PropValue) -> Option<PropValue> {
        self.entries.insert(name.into(), value)
    }

    /// Chainable insert, for building bags inline.
    pub fn with(mut self, name: impl Into<String>, value: PropValue) -> Self {
        self.entries.insert(name.into(), value);
        self
    }

    /// Looks up a prop by name.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    /// Returns true if a prop with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Looks up a literal string prop.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_str)
    }

    /// Looks up a numeric prop.
    pub fn number(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(PropValue::as_number)
    }

    /// Looks up a flag prop.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(PropValue::as_flag)
    }

    /// Looks up a style prop.
    pub fn style_of(&self, name: &str) -> Option<&StyleMap> {
        self.get(name).and_then(PropValue::as_style)
    }

    /// Iterates over (name, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of props in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bag holds no props.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges this bag over a bag of defaults, returning a fresh bag.
    ///
    /// The result starts from `defaults`; every entry of `self` (the
    /// caller) is then applied on top. On key collision the caller entry
    /// replaces the default, with one exception: when both sides carry a
    /// style map for the same key, the declaration maps merge
    /// declaration-by-declaration with caller declarations winning. A
    /// default `style: {height: auto}` therefore survives a caller
    /// `style: {width: 10px}`, while a caller `height` declaration still
    /// overrides the default one. Neither input is mutated.
    pub fn merged_over(&self, defaults: &Props) -> Props {
        let mut merged = defaults.entries.clone();
        for (name, value) in &self.entries {
            let combined = match (merged.get(name), value) {
                (
                    Some(PropValue::Style {
                        declarations: base,
                    }),
                    PropValue::Style {
                        declarations: caller,
                    },
                ) => {
                    let mut declarations = base.clone();
                    declarations.extend(caller.clone());
                    PropValue::Style { declarations }
                }
                _ => value.clone(),
            };
            merged.insert(name.clone(), combined);
        }
        Props { entries: merged }
    }
}

impl FromIterator<(String, PropValue)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, PropValue)>>(iter: I) -> Self {
        Props {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        let props = Props::new()
            .with("href", PropValue::literal("/start"))
            .with("level", PropValue::number(2))
            .with("open", PropValue::flag(true))
            .with("style", PropValue::style([("height", "auto")]));

        assert_eq!(props.string("href"), Some("/start"));
        assert_eq!(props.number("level"), Some(2));
        assert_eq!(props.flag("open"), Some(true));
        assert_eq!(
            props.style_of("style").and_then(|s| s.get("height")),
            Some(&"auto".to_string())
        );
        assert_eq!(props.string("level"), None);
        assert!(!props.contains("missing"));
    }

    #[test]
    fn merge_caller_wins_at_top_level() {
        let defaults = Props::new()
            .with("href", PropValue::literal("#"))
            .with("level", PropValue::number(1));
        let caller = Props::new().with("level", PropValue::number(4));

        let merged = caller.merged_over(&defaults);
        assert_eq!(merged.number("level"), Some(4));
        assert_eq!(merged.string("href"), Some("#"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_style_maps_combine_declarations() {
        let defaults = Props::new().with("style", PropValue::style([("height", "auto")]));
        let caller = Props::new().with("style", PropValue::style([("width", "10px")]));

        let merged = caller.merged_over(&defaults);
        let style = merged.style_of("style").unwrap();
        assert_eq!(style.get("height"), Some(&"auto".to_string()));
        assert_eq!(style.get("width"), Some(&"10px".to_string()));
    }

    #[test]
    fn merge_style_caller_declaration_wins() {
        let defaults = Props::new().with("style", PropValue::style([("height", "auto")]));
        let caller = Props::new().with("style", PropValue::style([("height", "4rem")]));

        let merged = caller.merged_over(&defaults);
        let style = merged.style_of("style").unwrap();
        assert_eq!(style.get("height"), Some(&"4rem".to_string()));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn merge_caller_non_style_replaces_default_style() {
        // Mismatched shapes fall back to plain replacement.
        let defaults = Props::new().with("style", PropValue::style([("height", "auto")]));
        let caller = Props::new().with("style", PropValue::literal("height: 0"));

        let merged = caller.merged_over(&defaults);
        assert_eq!(merged.string("style"), Some("height: 0"));
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let defaults = Props::new().with("a", PropValue::literal("default"));
        let caller = Props::new().with("a", PropValue::literal("caller"));

        let _ = caller.merged_over(&defaults);
        assert_eq!(defaults.string("a"), Some("default"));
        assert_eq!(caller.string("a"), Some("caller"));
    }

    #[test]
    fn serde_round_trip_camel_case_tags() {
        let props = Props::new()
            .with("src", PropValue::literal("x.png"))
            .with("style", PropValue::style([("height", "auto")]));

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["src"]["type"], "literal");
        assert_eq!(json["src"]["value"], "x.png");
        assert_eq!(json["style"]["type"], "style");
        assert_eq!(json["style"]["declarations"]["height"], "auto");

        let back: Props = serde_json::from_value(json).unwrap();
        assert_eq!(back, props);
    }
}
