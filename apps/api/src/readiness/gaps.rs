//! Gap and comparison views over an analysis.
//!
//! `learning_order` sorts missing skills for display using the static
//! prerequisite table. It has no influence on roadmap week assignment.

use serde::Serialize;

use crate::catalog::skills::prerequisites;
use crate::readiness::normalize::SkillSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapItem {
    pub skill: String,
    pub is_core: bool,
    /// Prerequisites the user does not have yet.
    pub dependencies: Vec<String>,
    pub priority: u8, // 1 = core, 2 = other
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub skill: String,
    pub user_has: bool,
    pub industry_required: bool,
    pub is_core: bool,
}

/// Missing skills ordered: those with no outstanding prerequisites first,
/// then core before bonus. Ties keep their analysis order.
pub fn learning_order(
    missing: &[String],
    user_skills: &[String],
    core_skills: &[String],
) -> Vec<GapItem> {
    let owned = SkillSet::new(user_skills);
    let core = SkillSet::new(core_skills);

    let mut items: Vec<GapItem> = missing
        .iter()
        .map(|skill| {
            let is_core = core.contains(skill);
            GapItem {
                skill: skill.clone(),
                is_core,
                dependencies: prerequisites(skill)
                    .iter()
                    .filter(|dep| !owned.contains(dep))
                    .map(|dep| dep.to_string())
                    .collect(),
                priority: if is_core { 1 } else { 2 },
            }
        })
        .collect();

    items.sort_by_key(|item| (!item.dependencies.is_empty(), item.priority));
    items
}

/// Every required skill (core then bonus) with whether the user has it,
/// followed by the user's skills the role does not ask for.
pub fn compare_skills(
    user_skills: &[String],
    core_skills: &[String],
    bonus_skills: &[String],
) -> Vec<ComparisonRow> {
    let owned = SkillSet::new(user_skills);
    let core = SkillSet::new(core_skills);
    let required = SkillSet::new(core_skills.iter().chain(bonus_skills));

    let mut rows: Vec<ComparisonRow> = core_skills
        .iter()
        .chain(bonus_skills)
        .map(|skill| ComparisonRow {
            skill: skill.clone(),
            user_has: owned.contains(skill),
            industry_required: true,
            is_core: core.contains(skill),
        })
        .collect();

    rows.extend(
        user_skills
            .iter()
            .filter(|skill| !required.contains(skill))
            .map(|skill| ComparisonRow {
                skill: skill.clone(),
                user_has: true,
                industry_required: false,
                is_core: false,
            }),
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_learning_order_puts_unblocked_core_first() {
        let missing = skills(&["Next.js", "Kubernetes", "Git", "Tailwind CSS"]);
        let user = skills(&["JavaScript", "Docker"]);
        let core = skills(&["Next.js", "Git"]);

        let order = learning_order(&missing, &user, &core);
        let names: Vec<&str> = order.iter().map(|g| g.skill.as_str()).collect();

        // Git: core, no deps. Tailwind: bonus, no deps. Next.js: blocked on React.
        // Kubernetes: blocked on Linux.
        assert_eq!(names, vec!["Git", "Tailwind CSS", "Next.js", "Kubernetes"]);
        assert_eq!(order[2].dependencies, vec!["React"]);
        assert_eq!(order[3].dependencies, vec!["Linux"]);
    }

    #[test]
    fn test_owned_prerequisites_do_not_block() {
        let order = learning_order(&skills(&["React"]), &skills(&["javascript", "HTML", "css"]), &[]);
        assert!(order[0].dependencies.is_empty());
        assert_eq!(order[0].priority, 2);
    }

    #[test]
    fn test_comparison_lists_required_then_extra() {
        let rows = compare_skills(
            &skills(&["html", "Figma"]),
            &skills(&["HTML", "CSS"]),
            &skills(&["React Basics"]),
        );
        assert_eq!(rows.len(), 4);
        assert!(rows[0].user_has && rows[0].is_core);
        assert!(!rows[1].user_has);
        assert!(!rows[2].is_core && rows[2].industry_required);
        assert_eq!(rows[3].skill, "Figma");
        assert!(!rows[3].industry_required);
    }
}
