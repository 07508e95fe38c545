//! Resident profile domain models.

use serde::{Deserialize, Serialize};

/// A resident's identity and skills.
///
/// The profile editor mutates this wholesale; there is no partial-update
/// contract and the last full write wins. Skill labels are an unordered,
/// duplicate-free set kept as a vector (use [`Profile::add_skill`] to
/// preserve the no-duplicates rule). The karma balance is non-negative by
/// convention only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub address: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub karma_balance: i64,
    pub solar_watts: i64,
    pub is_elderly: bool,
    pub avatar: String,
}

impl Profile {
    /// Adds a skill label if it is not already present.
    ///
    /// Returns true if the skill was added.
    pub fn add_skill(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if skill.is_empty() || self.skills.iter().any(|s| s == &skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    /// Removes a skill label if present.
    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    /// Whether the resident has the given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}
