//! Class-name merging
//!
//! Components combine a fixed base class list with caller overrides. When two
//! classes set the same property the later one wins, and it takes the slot of
//! the first class in that property's category so unrelated base classes keep
//! their relative order.
//!
//! Which classes set "the same property" is decided by a [`ClassTaxonomy`], a
//! table of prefix rules that can be extended or loaded from JSON.
//!
//! ```rust
//! use app_ui::cn;
//!
//! assert_eq!(cn!("bg-white border-gray-200", "bg-white"), "bg-white border-gray-200");
//! assert_eq!(cn!("p-4 bg-white", None::<&str>, "bg-red-500"), "p-4 bg-red-500");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Errors raised while building a taxonomy
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// Taxonomy JSON could not be parsed
    #[error("Invalid class taxonomy: {0}")]
    Taxonomy(#[from] serde_json::Error),

    /// A rule would match every class
    #[error("Rule for category '{0}' has an empty prefix and no values")]
    EmptyRule(String),
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;

// =============================================================================
// Arguments
// =============================================================================

/// One argument to the merger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    /// One or more whitespace-separated classes
    Token(String),
    /// A nested list of arguments, flattened in order
    Nested(Vec<ClassValue>),
    /// A falsy argument; contributes nothing
    Absent,
}

impl ClassValue {
    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassValue::Token(s) => out.extend(s.split_ascii_whitespace()),
            ClassValue::Nested(values) => {
                for value in values {
                    value.flatten_into(out);
                }
            }
            ClassValue::Absent => {}
        }
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            ClassValue::Absent
        } else {
            ClassValue::Token(s.to_string())
        }
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            ClassValue::Absent
        } else {
            ClassValue::Token(s)
        }
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::from(s.as_str())
    }
}

impl From<bool> for ClassValue {
    fn from(b: bool) -> Self {
        if b {
            ClassValue::Token("true".to_string())
        } else {
            ClassValue::Absent
        }
    }
}

macro_rules! class_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ClassValue {
                fn from(n: $t) -> Self {
                    if n == 0 {
                        ClassValue::Absent
                    } else {
                        ClassValue::Token(n.to_string())
                    }
                }
            }
        )*
    };
}

class_value_from_int!(i32, i64, u32, u64, usize);

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ClassValue::Absent)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::Nested(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue> + Clone> From<&[T]> for ClassValue {
    fn from(values: &[T]) -> Self {
        ClassValue::Nested(values.iter().cloned().map(Into::into).collect())
    }
}

// =============================================================================
// Taxonomy
// =============================================================================

/// Maps classes starting with `prefix` to `category`
///
/// When `values` is non-empty the rest of the class after the prefix must be
/// one of them, which is how `text-sm` and `text-red-500` land in different
/// categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Class prefix
    pub prefix: String,
    /// Category name
    pub category: String,
    /// Allowed suffixes (empty means any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl CategoryRule {
    /// Rule matching any class with this prefix
    pub fn new(prefix: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            category: category.into(),
            values: Vec::new(),
        }
    }

    /// Restrict the rule to the given suffixes
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    fn matches(&self, class: &str) -> bool {
        match class.strip_prefix(self.prefix.as_str()) {
            Some(rest) => self.values.is_empty() || self.values.iter().any(|v| v == rest),
            None => false,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() && self.values.is_empty() {
            return Err(StyleError::EmptyRule(self.category.clone()));
        }
        Ok(())
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const BORDER_WIDTHS: &[&str] = &["", "-0", "-2", "-4", "-8"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const RADII: &[&str] = &["", "-none", "-sm", "-md", "-lg", "-xl", "-2xl", "-3xl", "-full"];
const SHADOW_SIZES: &[&str] = &["", "-sm", "-md", "-lg", "-xl", "-2xl", "-inner", "-none"];
const FLEX_DIRECTIONS: &[&str] = &["row", "col", "row-reverse", "col-reverse"];
const DISPLAYS: &[&str] = &[
    "flex", "hidden", "block", "inline", "inline-block", "inline-flex", "grid", "contents",
];

/// (prefix, category, values)
const DEFAULT_RULES: &[(&str, &str, &[&str])] = &[
    ("bg-", "background", &[]),
    ("text-", "font-size", FONT_SIZES),
    ("text-", "text-align", TEXT_ALIGNS),
    ("text-", "text-color", &[]),
    ("font-", "font-weight", FONT_WEIGHTS),
    ("font-", "font-family", &[]),
    ("border", "border-width", BORDER_WIDTHS),
    ("border-t", "border-width-top", BORDER_WIDTHS),
    ("border-r", "border-width-right", BORDER_WIDTHS),
    ("border-b", "border-width-bottom", BORDER_WIDTHS),
    ("border-l", "border-width-left", BORDER_WIDTHS),
    ("border-x", "border-width-x", BORDER_WIDTHS),
    ("border-y", "border-width-y", BORDER_WIDTHS),
    ("border-", "border-style", BORDER_STYLES),
    ("border-", "border-color", &[]),
    ("rounded-tl", "radius-top-left", RADII),
    ("rounded-tr", "radius-top-right", RADII),
    ("rounded-br", "radius-bottom-right", RADII),
    ("rounded-bl", "radius-bottom-left", RADII),
    ("rounded-t", "radius-top", RADII),
    ("rounded-r", "radius-right", RADII),
    ("rounded-b", "radius-bottom", RADII),
    ("rounded-l", "radius-left", RADII),
    ("rounded", "radius", &[]),
    ("shadow", "shadow", SHADOW_SIZES),
    ("shadow-", "shadow-color", &[]),
    ("opacity-", "opacity", &[]),
    ("p-", "padding", &[]),
    ("px-", "padding-x", &[]),
    ("py-", "padding-y", &[]),
    ("pt-", "padding-top", &[]),
    ("pr-", "padding-right", &[]),
    ("pb-", "padding-bottom", &[]),
    ("pl-", "padding-left", &[]),
    ("m-", "margin", &[]),
    ("mx-", "margin-x", &[]),
    ("my-", "margin-y", &[]),
    ("mt-", "margin-top", &[]),
    ("mr-", "margin-right", &[]),
    ("mb-", "margin-bottom", &[]),
    ("ml-", "margin-left", &[]),
    ("w-", "width", &[]),
    ("h-", "height", &[]),
    ("min-w-", "min-width", &[]),
    ("min-h-", "min-height", &[]),
    ("max-w-", "max-width", &[]),
    ("max-h-", "max-height", &[]),
    ("flex-", "flex-direction", FLEX_DIRECTIONS),
    ("items-", "align-items", &[]),
    ("justify-", "justify-content", &[]),
    ("gap-x-", "gap-x", &[]),
    ("gap-y-", "gap-y", &[]),
    ("gap-", "gap", &[]),
    ("", "display", DISPLAYS),
];

/// Ordered prefix-to-category table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassTaxonomy {
    rules: Vec<CategoryRule>,
}

impl Default for ClassTaxonomy {
    fn default() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .map(|(prefix, category, values)| {
                CategoryRule::new(*prefix, *category).with_values(values.iter().copied())
            })
            .collect();
        Self { rules }
    }
}

impl ClassTaxonomy {
    /// Taxonomy with no rules; every class is its own category
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Parse a JSON array of rules
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Vec<CategoryRule> = serde_json::from_str(json)?;
        Self::from_rules(rules)
    }

    /// Build a taxonomy from rules, in priority order
    pub fn from_rules(rules: Vec<CategoryRule>) -> Result<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules })
    }

    /// Add a rule ahead of the existing ones
    pub fn with_rule(mut self, rule: CategoryRule) -> Result<Self> {
        rule.validate()?;
        self.rules.insert(0, rule);
        Ok(self)
    }

    /// Add several rules ahead of the existing ones, keeping their order
    pub fn with_rules(mut self, rules: Vec<CategoryRule>) -> Result<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        self.rules.splice(0..0, rules);
        Ok(self)
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category of a bare class (no variant modifiers), if any rule matches
    pub fn category_of(&self, class: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(class))
            .map(|rule| rule.category.as_str())
    }

    /// Conflict key for a class, including its variant modifiers
    fn conflict_key(&self, token: &str) -> String {
        let (variants, class) = match token.rfind(':') {
            Some(i) => (&token[..=i], &token[i + 1..]),
            None => ("", token),
        };
        let (important, class) = match class.strip_prefix('!') {
            Some(rest) => ("!", rest),
            None => ("", class),
        };
        match self.category_of(class) {
            Some(category) => format!("{}{}{}", variants, important, category),
            None => format!("={}", token),
        }
    }
}

// =============================================================================
// Merger
// =============================================================================

static DEFAULT_MERGER: Lazy<ClassMerger> = Lazy::new(ClassMerger::default);

/// Merges class lists, last class per category wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMerger {
    taxonomy: ClassTaxonomy,
}

impl ClassMerger {
    /// Create a merger with a custom taxonomy
    pub fn new(taxonomy: ClassTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// The merger backed by the default taxonomy
    pub fn global() -> &'static ClassMerger {
        &DEFAULT_MERGER
    }

    /// The taxonomy in use
    pub fn taxonomy(&self) -> &ClassTaxonomy {
        &self.taxonomy
    }

    /// Merge arguments into one space-separated class string
    pub fn merge(&self, args: &[ClassValue]) -> String {
        let mut tokens = Vec::new();
        for arg in args {
            arg.flatten_into(&mut tokens);
        }

        let mut slots: Vec<&str> = Vec::with_capacity(tokens.len());
        let mut by_key: HashMap<String, usize> = HashMap::with_capacity(tokens.len());

        for token in tokens {
            let key = self.taxonomy.conflict_key(token);
            match by_key.get(&key) {
                Some(&slot) => {
                    tracing::trace!(replaced = slots[slot], by = token, "Class overridden");
                    slots[slot] = token;
                }
                None => {
                    by_key.insert(key, slots.len());
                    slots.push(token);
                }
            }
        }

        slots.join(" ")
    }
}

/// Merge with the default taxonomy
pub fn cn(args: &[ClassValue]) -> String {
    ClassMerger::global().merge(args)
}

/// Merge any mix of strings, options, booleans and lists into a class string
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::style::cn(&[$($crate::style::ClassValue::from($arg)),+])
    };
}
