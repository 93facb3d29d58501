//! Skill overlap between a candidate and a team's requirements

use serde::{Deserialize, Serialize};

/// Points awarded per matched skill
pub const SKILL_MATCH_POINTS: u32 = 10;

/// Result of comparing held skills against required skills
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub score: u32,
    /// Held skills that are required, in held order
    pub matches: Vec<String>,
}

/// Exact, case-sensitive overlap score
pub fn skill_match(user_skills: &[String], required_skills: &[String]) -> SkillMatch {
    let matches: Vec<String> = user_skills
        .iter()
        .filter(|skill| required_skills.contains(skill))
        .cloned()
        .collect();

    SkillMatch {
        score: matches.len() as u32 * SKILL_MATCH_POINTS,
        matches,
    }
}
