use crate::dependency_classification::domain::{Dependency, DependencyRef};
use crate::shared::error::DepsError;
use crate::shared::Result;
use regex::{Regex, RegexBuilder};
use std::cell::Cell;

/// Maximum length of a filter pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// Compiled regex size ceiling (bytes)
const MAX_REGEX_SIZE: usize = 1 << 20;

/// DependencyFilter - Selects which classified dependencies are emitted
///
/// Two independent pass-through filters:
/// - an optional regular expression matched case-insensitively against
///   the package id
/// - `collate_all`: when false only transitive dependencies are emitted
///
/// Filtering never changes classification.
#[derive(Debug)]
pub struct DependencyFilter {
    pattern: Option<Regex>,
    collate_all: bool,
    matched: Cell<bool>,
}

impl DependencyFilter {
    /// Creates a filter, compiling `pattern` if one is given
    ///
    /// # Errors
    /// - Empty or overlong pattern
    /// - Pattern that is not a valid regular expression
    pub fn new(pattern: Option<&str>, collate_all: bool) -> Result<Self> {
        let pattern = pattern.map(compile_pattern).transpose()?;
        Ok(Self {
            pattern,
            collate_all,
            matched: Cell::new(false),
        })
    }

    /// Filter that emits every classified dependency.
    pub fn pass_all() -> Self {
        Self {
            pattern: None,
            collate_all: true,
            matched: Cell::new(false),
        }
    }

    pub fn collate_all(&self) -> bool {
        self.collate_all
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    /// Whether `dependency` should be emitted.
    ///
    /// A pattern hit counts as a match even when the dependency is then
    /// held back for being direct.
    pub fn matches(&self, dependency: &Dependency) -> bool {
        let is_match = match &self.pattern {
            Some(re) => {
                let hit = re.is_match(dependency.identifier().as_str());
                if hit {
                    self.matched.set(true);
                }
                hit
            }
            None => true,
        };

        is_match && (self.collate_all || dependency.is_transitive())
    }

    /// Keeps the dependencies [`DependencyFilter::matches`] accepts.
    pub fn apply(&self, dependencies: Vec<DependencyRef>) -> Vec<DependencyRef> {
        dependencies
            .into_iter()
            .filter(|dependency| self.matches(dependency))
            .collect()
    }

    /// Returns the pattern if it has been applied without matching anything
    ///
    /// Call after filtering every framework.
    pub fn unmatched_pattern(&self) -> Option<&str> {
        match &self.pattern {
            Some(re) if !self.matched.get() => Some(re.as_str()),
            _ => None,
        }
    }
}

/// Validates and compiles a filter pattern
fn compile_pattern(pattern: &str) -> Result<Regex> {
    if pattern.trim().is_empty() {
        return Err(DepsError::InvalidFilterPattern {
            pattern: pattern.to_string(),
            details: "Filter pattern cannot be empty".to_string(),
        }
        .into());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(DepsError::InvalidFilterPattern {
            pattern: pattern.to_string(),
            details: format!(
                "Filter pattern is too long ({} chars). Maximum: {} chars",
                pattern.len(),
                MAX_PATTERN_LENGTH
            ),
        }
        .into());
    }

    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(MAX_REGEX_SIZE)
        .build()
        .map_err(|e| {
            DepsError::InvalidFilterPattern {
                pattern: pattern.to_string(),
                details: e.to_string(),
            }
            .into()
        })
}
