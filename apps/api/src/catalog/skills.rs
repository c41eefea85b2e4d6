use crate::readiness::normalize::same_skill;

/// Skill vocabulary offered during onboarding.
pub const ALL_SKILLS: &[&str] = &[
    // Frontend
    "HTML", "CSS", "JavaScript", "TypeScript", "React", "Vue.js", "Angular", "Next.js", "Svelte",
    "Tailwind CSS", "SASS/SCSS", "Bootstrap", "Responsive Design", "Accessibility", "SEO",
    "State Management", "Redux", "Zustand", "GraphQL Client", "REST API Integration",
    "Testing", "Jest", "Cypress", "Playwright", "Performance Optimization",
    // Backend
    "Node.js", "Python", "Java", "Go", "Rust", "C#", "PHP", "Ruby",
    "Express.js", "Fastify", "Django", "Flask", "FastAPI", "Spring Boot",
    "REST APIs", "GraphQL", "gRPC", "WebSockets",
    "SQL", "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch",
    "ORMs", "Prisma", "Sequelize", "SQLAlchemy",
    // DevOps
    "Git", "GitHub", "GitLab", "CI/CD", "Docker", "Kubernetes", "Terraform",
    "AWS", "GCP", "Azure", "Linux", "Bash", "Shell Scripting",
    "Monitoring", "Prometheus", "Grafana", "ELK Stack",
    "Security", "OWASP", "SSL/TLS",
    // Data Science
    "Statistics", "Machine Learning", "Deep Learning", "NLP", "Computer Vision",
    "Pandas", "NumPy", "Scikit-learn", "TensorFlow", "PyTorch",
    "Data Visualization", "Tableau", "Power BI", "Matplotlib", "Seaborn",
    "Big Data", "Spark", "Hadoop", "Kafka",
    "A/B Testing", "MLOps", "Feature Engineering",
    // Soft skills
    "Communication", "Leadership", "Problem Solving", "Teamwork", "Agile", "Scrum",
];

/// What to learn before a skill. Display ordering only.
const PREREQUISITES: &[(&str, &[&str])] = &[
    ("React", &["JavaScript", "HTML", "CSS"]),
    ("Next.js", &["React", "JavaScript"]),
    ("TypeScript", &["JavaScript"]),
    ("Redux", &["React", "JavaScript"]),
    ("GraphQL Client", &["JavaScript", "REST API Integration"]),
    ("Node.js", &["JavaScript"]),
    ("Express.js", &["Node.js", "JavaScript"]),
    ("Django", &["Python"]),
    ("Flask", &["Python"]),
    ("FastAPI", &["Python"]),
    ("Prisma", &["Node.js", "SQL"]),
    ("Docker", &["Linux", "Bash"]),
    ("Kubernetes", &["Docker", "Linux"]),
    ("Terraform", &["Cloud Basics", "Linux"]),
    ("TensorFlow", &["Python", "Machine Learning"]),
    ("PyTorch", &["Python", "Machine Learning"]),
    ("Deep Learning", &["Machine Learning", "Statistics"]),
    ("Machine Learning", &["Python", "Statistics"]),
    ("MLOps", &["Machine Learning", "Docker", "CI/CD"]),
];

pub fn prerequisites(skill: &str) -> &'static [&'static str] {
    PREREQUISITES
        .iter()
        .find(|(name, _)| same_skill(name, skill))
        .map(|(_, deps)| *deps)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerequisites_lookup() {
        assert_eq!(prerequisites("kubernetes"), &["Docker", "Linux"]);
        assert!(prerequisites("HTML").is_empty());
    }

    #[test]
    fn test_vocabulary_has_no_case_duplicates() {
        for (i, a) in ALL_SKILLS.iter().enumerate() {
            for b in &ALL_SKILLS[i + 1..] {
                assert!(!same_skill(a, b), "duplicate skill {a}");
            }
        }
    }
}
