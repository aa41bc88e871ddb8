//! Ordering-policy loader
//!
//! `defaults/declsort.default.json` is embedded into every binary so a run
//! without any policy file still has a sensible order. A user policy is a
//! JSON object with one required key, `comparisons`: an ordered array of
//! entries, each naming exactly one trait (`kind`, `transfer`,
//! `persistance`, `declaration`, `pattern`, `name`) and the ordered value
//! list for it. Array position is rank; a `null` entry positions the
//! not-applicable wildcard. Entries naming no recognized trait are skipped,
//! entries naming more than one are rejected.

use declsort_order::{Comparator, ComparatorChain, TraitAxis};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_JSON: &str = include_str!("../defaults/declsort.default.json");

/// File name looked up by [`discover`]
pub const POLICY_FILE_NAME: &str = "declsort.json";

static EMBEDDED_DEFAULT: Lazy<Policy> =
    Lazy::new(|| Policy::from_json(DEFAULT_JSON).expect("embedded default policy is valid"));

/// Errors raised while loading or validating a policy
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error when reading the policy file
    IoError(String),
    /// The file is not valid JSON, or a value has the wrong shape
    JsonError(String),
    /// The required top-level `comparisons` key is absent
    MissingComparisons,
    /// One entry names more than one recognized trait
    AmbiguousEntry { index: usize },
    /// A configured pattern does not compile
    InvalidPattern { pattern: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
            ConfigError::JsonError(msg) => write!(f, "Invalid policy JSON: {}", msg),
            ConfigError::MissingComparisons => {
                write!(f, "Policy is missing the required \"comparisons\" key")
            }
            ConfigError::AmbiguousEntry { index } => write!(
                f,
                "Policy entry {} names more than one trait; each entry takes exactly one",
                index
            ),
            ConfigError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid pattern {:?}: {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct RawPolicy {
    comparisons: Vec<RawEntry>,
}

/// One policy entry. Serde aliases cover the alternative spellings the
/// policy format accepts; unknown keys are ignored outright.
#[derive(Debug, Default, Deserialize)]
struct RawEntry {
    kind: Option<Vec<Option<String>>>,
    #[serde(alias = "exportness")]
    transfer: Option<Vec<Option<String>>>,
    #[serde(alias = "persistence")]
    persistance: Option<Vec<Option<String>>>,
    declaration: Option<Vec<Option<String>>>,
    #[serde(alias = "regularExpression")]
    pattern: Option<Vec<Option<String>>>,
    name: Option<Vec<Option<String>>>,
    #[serde(rename = "ignoreIfSingleLine", default)]
    ignore_if_single_line: bool,
}

/// What one validated entry orders by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSpec {
    Ranked {
        axis: TraitAxis,
        values: Vec<Option<String>>,
    },
    Pattern(Vec<Option<String>>),
    Name,
}

/// One validated policy entry
#[derive(Debug, Clone)]
pub struct PolicyEntry {
    pub rule: RuleSpec,
    pub ignore_if_single_line: bool,
}

/// A validated ordering policy
#[derive(Debug, Clone)]
pub struct Policy {
    entries: Vec<PolicyEntry>,
}

impl Policy {
    /// Parse and validate policy JSON
    pub fn from_json(text: &str) -> Result<Policy, ConfigError> {
        let root: serde_json::Value =
            serde_json::from_str(text).map_err(|e| ConfigError::JsonError(e.to_string()))?;
        if root.get("comparisons").is_none() {
            return Err(ConfigError::MissingComparisons);
        }
        let raw: RawPolicy = serde_json::from_value(root)
            .map_err(|e| ConfigError::JsonError(e.to_string()))?;

        let mut entries = Vec::new();
        for (index, entry) in raw.comparisons.into_iter().enumerate() {
            if let Some(validated) = validate_entry(entry, index)? {
                entries.push(validated);
            }
        }
        Ok(Policy { entries })
    }

    /// Read and parse a policy file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Policy, ConfigError> {
        let text = fs::read_to_string(path)?;
        Policy::from_json(&text)
    }

    /// The compiled-in default policy
    pub fn embedded_default() -> &'static Policy {
        &EMBEDDED_DEFAULT
    }

    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    /// Build the immutable comparator chain this policy describes
    pub fn comparator_chain(&self) -> Result<ComparatorChain, ConfigError> {
        let mut comparators = Vec::new();
        for entry in &self.entries {
            let comparator = match &entry.rule {
                RuleSpec::Ranked { axis, values } => Comparator::ranked(*axis, values),
                RuleSpec::Pattern(patterns) => {
                    Comparator::pattern(patterns).map_err(|err| ConfigError::InvalidPattern {
                        pattern: patterns
                            .iter()
                            .flatten()
                            .map(String::as_str)
                            .collect::<Vec<_>>()
                            .join(", "),
                        message: err.to_string(),
                    })?
                }
                RuleSpec::Name => Comparator::name(),
            };
            comparators.push(comparator.ignore_if_single_line(entry.ignore_if_single_line));
        }
        Ok(ComparatorChain::new(comparators))
    }
}

fn validate_entry(entry: RawEntry, index: usize) -> Result<Option<PolicyEntry>, ConfigError> {
    let mut rules = Vec::new();
    if let Some(values) = entry.kind {
        rules.push(RuleSpec::Ranked {
            axis: TraitAxis::Kind,
            values,
        });
    }
    if let Some(values) = entry.transfer {
        rules.push(RuleSpec::Ranked {
            axis: TraitAxis::Transfer,
            values,
        });
    }
    if let Some(values) = entry.persistance {
        rules.push(RuleSpec::Ranked {
            axis: TraitAxis::Persistence,
            values,
        });
    }
    if let Some(values) = entry.declaration {
        rules.push(RuleSpec::Ranked {
            axis: TraitAxis::Declaration,
            values,
        });
    }
    if let Some(patterns) = entry.pattern {
        rules.push(RuleSpec::Pattern(patterns));
    }
    if entry.name.is_some() {
        rules.push(RuleSpec::Name);
    }

    match rules.len() {
        // nothing recognized: the entry is skipped, not an error
        0 => Ok(None),
        1 => Ok(Some(PolicyEntry {
            rule: rules.remove(0),
            ignore_if_single_line: entry.ignore_if_single_line,
        })),
        _ => Err(ConfigError::AmbiguousEntry { index }),
    }
}

/// Walk from `start_dir` upward looking for a `declsort.json`
pub fn discover(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = Some(start_dir);
    while let Some(current) = dir {
        let candidate = current.join(POLICY_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}
