//! A small aggregate root and a factory that constructs whichever type it is
//! called on.

use serde::Serialize;
use tracing::debug;

use crate::error::{ConstructError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    name: String,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Member { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Late-bound factory
// ============================================================================

/// `T::start(..)` builds a `T`, so a type wrapping `Team` only has to say how
/// it assembles itself to get the same entry point.
pub trait Start: Sized {
    fn assemble(name: String, members: Vec<Member>) -> Self;

    fn start(name: impl Into<String>, members: impl IntoIterator<Item = Member>) -> Self {
        Self::assemble(name.into(), members.into_iter().collect())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    name: String,
    members: Vec<Member>,
}

impl Start for Team {
    fn assemble(name: String, members: Vec<Member>) -> Self {
        Team::new(name, members)
    }
}

impl Team {
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Self {
        Team {
            name: name.into(),
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn add(&mut self, member: Member) {
        debug!(team = %self.name, member = %member.name, "adding member");
        self.members.push(member);
    }

    pub fn cancel(&mut self) -> Result<()> {
        Err(ConstructError::not_implemented("Team::cancel"))
    }

    pub fn manager(&self) -> Result<&Member> {
        Err(ConstructError::not_implemented("Team::manager"))
    }

    /// Pretty JSON of the member list.
    pub fn dump(&self) -> String {
        // Serializing plain strings cannot fail.
        serde_json::to_string_pretty(&self.members).unwrap_or_default()
    }
}
