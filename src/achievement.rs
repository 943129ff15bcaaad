//! Template methods through default trait methods.
//!
//! `name()` and `icon()` are written once on the trait and derived from the
//! implementing type's own identifier. Each achievement only supplies its
//! `qualifier`.

use std::any;
use std::time::SystemTime;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::{ConstructError, Result};

lazy_static! {
    static ref UPPERCASE: Regex = Regex::new("[A-Z]").unwrap();
}

// ============================================================================
// Name derivation
// ============================================================================

/// Strips the module path and any generic arguments from a
/// [`std::any::type_name`] string.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// `"FirstThousandPoints"` -> `"First Thousand Points"`.
///
/// Digits are left alone, so `"ReachTop50"` becomes `"Reach Top50"`.
pub fn display_name(identifier: &str) -> String {
    UPPERCASE
        .replace_all(identifier, " $0")
        .trim()
        .to_string()
}

pub fn icon_filename(name: &str) -> String {
    format!("{}.png", name.replace(' ', "-")).to_lowercase()
}

// ============================================================================
// The capability
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        User { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_viewed(&self) -> Result<SystemTime> {
        Err(ConstructError::not_implemented("User::last_viewed"))
    }
}

pub trait Achievement {
    /// Short type name of the implementor, e.g. `"ReachTop50"`.
    fn identifier(&self) -> &'static str {
        short_type_name(any::type_name::<Self>())
    }

    fn name(&self) -> String {
        let name = display_name(self.identifier());
        debug!(identifier = self.identifier(), %name, "derived achievement name");
        name
    }

    fn icon(&self) -> String {
        icon_filename(&self.name())
    }

    /// Whether `user` has earned this achievement.
    fn qualifier(&self, user: &User) -> Result<bool>;
}

// ============================================================================
// Achievements
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstThousandPoints;

impl Achievement for FirstThousandPoints {
    fn qualifier(&self, _user: &User) -> Result<bool> {
        Err(ConstructError::not_implemented("FirstThousandPoints::qualifier"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstBestAnswer;

impl Achievement for FirstBestAnswer {
    fn qualifier(&self, _user: &User) -> Result<bool> {
        Err(ConstructError::not_implemented("FirstBestAnswer::qualifier"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ReachTop50;

impl Achievement for ReachTop50 {
    fn qualifier(&self, _user: &User) -> Result<bool> {
        Err(ConstructError::not_implemented("ReachTop50::qualifier"))
    }
}

pub fn all() -> Vec<Box<dyn Achievement>> {
    vec![
        Box::new(FirstThousandPoints),
        Box::new(FirstBestAnswer),
        Box::new(ReachTop50),
    ]
}
