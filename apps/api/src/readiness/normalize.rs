//! Skill-name comparison.
//!
//! Two names denote the same skill when they are equal after case folding.
//! Surrounding whitespace is ignored; nothing else is normalized, so
//! "ReactJS" and "React" stay distinct skills.

use std::collections::HashSet;

/// Comparison key for a skill name.
pub fn skill_key(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn same_skill(a: &str, b: &str) -> bool {
    skill_key(a) == skill_key(b)
}

/// A user's declared skills, keyed for membership tests.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    keys: HashSet<String>,
}

impl SkillSet {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keys: skills.into_iter().map(|s| skill_key(s.as_ref())).collect(),
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.keys.contains(&skill_key(skill))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
