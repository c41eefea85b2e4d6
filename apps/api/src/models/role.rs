use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Seniority bucket a role is defined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleLevel {
    Intern,
    Junior,
    Mid,
    Senior,
}

impl RoleLevel {
    pub const ALL: [RoleLevel; 4] = [
        RoleLevel::Intern,
        RoleLevel::Junior,
        RoleLevel::Mid,
        RoleLevel::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleLevel::Intern => "intern",
            RoleLevel::Junior => "junior",
            RoleLevel::Mid => "mid",
            RoleLevel::Senior => "senior",
        }
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown role level '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
            EmploymentType::Freelance => "freelance",
        }
    }
}

/// The skills a role asks for at one level. Captured by value into every
/// analysis so later edits to a selection never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirement {
    pub domain: String,
    pub level: RoleLevel,
    pub core_skills: Vec<String>,
    pub bonus_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRoleSelectionRow {
    pub user_id: String,
    pub domain: String,
    pub role_level: String,
    pub experience_range: String,
    pub employment_type: String,
    pub responsibilities: Vec<String>,
    pub core_skills: Vec<String>,
    pub bonus_skills: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl JobRoleSelectionRow {
    pub fn requirement(&self) -> Result<RoleRequirement, String> {
        Ok(RoleRequirement {
            domain: self.domain.clone(),
            level: self.role_level.parse()?,
            core_skills: self.core_skills.clone(),
            bonus_skills: self.bonus_skills.clone(),
        })
    }
}
