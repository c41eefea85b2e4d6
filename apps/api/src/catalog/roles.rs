//! Static role catalogue: five job domains, four levels each.

use serde::Serialize;

use crate::models::role::{RoleLevel, RoleRequirement};

#[derive(Debug, Clone, Serialize)]
pub struct RoleConfig {
    pub title: &'static str,
    pub experience_range: &'static str,
    pub responsibilities: &'static [&'static str],
    pub core_skills: &'static [&'static str],
    pub bonus_skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelRoles {
    pub intern: RoleConfig,
    pub junior: RoleConfig,
    pub mid: RoleConfig,
    pub senior: RoleConfig,
}

impl LevelRoles {
    pub fn at(&self, level: RoleLevel) -> &RoleConfig {
        match level {
            RoleLevel::Intern => &self.intern,
            RoleLevel::Junior => &self.junior,
            RoleLevel::Mid => &self.mid,
            RoleLevel::Senior => &self.senior,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobDomain {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub roles: LevelRoles,
}

pub fn find_domain(id: &str) -> Option<&'static JobDomain> {
    JOB_DOMAINS
        .iter()
        .find(|d| d.id.eq_ignore_ascii_case(id.trim()))
}

/// Catalogue requirement for a domain and level, if the domain is known.
pub fn catalog_requirement(domain: &str, level: RoleLevel) -> Option<RoleRequirement> {
    let domain = find_domain(domain)?;
    let config = domain.roles.at(level);
    Some(RoleRequirement {
        domain: domain.id.to_string(),
        level,
        core_skills: config.core_skills.iter().map(|s| s.to_string()).collect(),
        bonus_skills: config.bonus_skills.iter().map(|s| s.to_string()).collect(),
    })
}

pub static JOB_DOMAINS: &[JobDomain] = &[
    JobDomain {
        id: "frontend",
        name: "Frontend Development",
        icon: "Layout",
        roles: LevelRoles {
            intern: RoleConfig {
                title: "Frontend Developer Intern",
                experience_range: "0-6 months",
                responsibilities: &[
                    "Assist in building UI components",
                    "Learn and apply HTML, CSS, JavaScript",
                    "Participate in code reviews",
                    "Fix minor bugs and issues",
                ],
                core_skills: &["HTML", "CSS", "JavaScript", "Git"],
                bonus_skills: &["React Basics", "Responsive Design"],
            },
            junior: RoleConfig {
                title: "Junior Frontend Developer",
                experience_range: "0-2 years",
                responsibilities: &[
                    "Build responsive web interfaces",
                    "Implement UI designs from mockups",
                    "Write clean, maintainable code",
                    "Collaborate with designers and backend developers",
                    "Debug and fix frontend issues",
                ],
                core_skills: &["HTML", "CSS", "JavaScript", "React", "Git", "Responsive Design"],
                bonus_skills: &["TypeScript", "Next.js", "Testing", "Tailwind CSS"],
            },
            mid: RoleConfig {
                title: "Mid-Level Frontend Developer",
                experience_range: "2-5 years",
                responsibilities: &[
                    "Lead frontend feature development",
                    "Mentor junior developers",
                    "Optimize application performance",
                    "Architect scalable frontend solutions",
                    "Review code and ensure quality standards",
                ],
                core_skills: &[
                    "HTML",
                    "CSS",
                    "JavaScript",
                    "TypeScript",
                    "React",
                    "Next.js",
                    "Testing",
                    "Git",
                    "State Management",
                ],
                bonus_skills: &["GraphQL", "CI/CD", "Performance Optimization", "Accessibility"],
            },
            senior: RoleConfig {
                title: "Senior Frontend Developer",
                experience_range: "5+ years",
                responsibilities: &[
                    "Define frontend architecture and standards",
                    "Lead technical decisions",
                    "Mentor and grow the frontend team",
                    "Drive innovation and best practices",
                    "Collaborate with stakeholders on product direction",
                ],
                core_skills: &[
                    "HTML",
                    "CSS",
                    "JavaScript",
                    "TypeScript",
                    "React",
                    "Next.js",
                    "Testing",
                    "Architecture",
                    "Performance",
                    "Accessibility",
                    "Leadership",
                ],
                bonus_skills: &["GraphQL", "Micro-frontends", "Design Systems", "DevOps"],
            },
        },
    },
    JobDomain {
        id: "backend",
        name: "Backend Development",
        icon: "Server",
        roles: LevelRoles {
            intern: RoleConfig {
                title: "Backend Developer Intern",
                experience_range: "0-6 months",
                responsibilities: &[
                    "Learn server-side programming",
                    "Assist with API development",
                    "Write basic database queries",
                    "Participate in code reviews",
                ],
                core_skills: &["Python", "SQL", "Git", "REST APIs"],
                bonus_skills: &["Node.js", "Docker Basics"],
            },
            junior: RoleConfig {
                title: "Junior Backend Developer",
                experience_range: "0-2 years",
                responsibilities: &[
                    "Build and maintain APIs",
                    "Write database queries and manage data",
                    "Implement business logic",
                    "Write unit tests",
                    "Debug and fix backend issues",
                ],
                core_skills: &["Python", "Node.js", "SQL", "REST APIs", "Git", "Databases"],
                bonus_skills: &["Docker", "Cloud Basics", "Testing", "Message Queues"],
            },
            mid: RoleConfig {
                title: "Mid-Level Backend Developer",
                experience_range: "2-5 years",
                responsibilities: &[
                    "Design and implement scalable APIs",
                    "Optimize database performance",
                    "Lead backend feature development",
                    "Mentor junior developers",
                    "Implement security best practices",
                ],
                core_skills: &[
                    "Python",
                    "Node.js",
                    "SQL",
                    "NoSQL",
                    "REST APIs",
                    "Docker",
                    "Cloud Services",
                    "Testing",
                    "Security",
                ],
                bonus_skills: &["Kubernetes", "Microservices", "GraphQL", "Message Queues"],
            },
            senior: RoleConfig {
                title: "Senior Backend Developer",
                experience_range: "5+ years",
                responsibilities: &[
                    "Define system architecture",
                    "Lead technical decisions",
                    "Scale systems for growth",
                    "Mentor and grow the backend team",
                    "Drive engineering excellence",
                ],
                core_skills: &[
                    "System Design",
                    "Microservices",
                    "Cloud Architecture",
                    "Security",
                    "Performance",
                    "Leadership",
                    "DevOps",
                ],
                bonus_skills: &[
                    "ML/AI Integration",
                    "Event-Driven Architecture",
                    "Platform Engineering",
                ],
            },
        },
    },
    JobDomain {
        id: "fullstack",
        name: "Full Stack Development",
        icon: "Layers",
        roles: LevelRoles {
            intern: RoleConfig {
                title: "Full Stack Developer Intern",
                experience_range: "0-6 months",
                responsibilities: &[
                    "Learn both frontend and backend technologies",
                    "Assist with full feature development",
                    "Write basic tests",
                    "Participate in code reviews",
                ],
                core_skills: &["HTML", "CSS", "JavaScript", "Python", "SQL", "Git"],
                bonus_skills: &["React Basics", "Node.js Basics"],
            },
            junior: RoleConfig {
                title: "Junior Full Stack Developer",
                experience_range: "0-2 years",
                responsibilities: &[
                    "Build end-to-end features",
                    "Develop frontend and backend code",
                    "Write and maintain tests",
                    "Deploy applications",
                    "Debug issues across the stack",
                ],
                core_skills: &[
                    "HTML",
                    "CSS",
                    "JavaScript",
                    "React",
                    "Node.js",
                    "SQL",
                    "Git",
                    "REST APIs",
                ],
                bonus_skills: &["TypeScript", "Docker", "Cloud Basics", "NoSQL"],
            },
            mid: RoleConfig {
                title: "Mid-Level Full Stack Developer",
                experience_range: "2-5 years",
                responsibilities: &[
                    "Lead full feature development",
                    "Optimize both frontend and backend",
                    "Mentor junior developers",
                    "Design scalable solutions",
                    "Implement CI/CD pipelines",
                ],
                core_skills: &[
                    "TypeScript",
                    "React",
                    "Node.js",
                    "SQL",
                    "NoSQL",
                    "Docker",
                    "Cloud Services",
                    "Testing",
                    "CI/CD",
                ],
                bonus_skills: &["Kubernetes", "GraphQL", "Microservices", "Performance"],
            },
            senior: RoleConfig {
                title: "Senior Full Stack Developer",
                experience_range: "5+ years",
                responsibilities: &[
                    "Define technical architecture",
                    "Lead engineering initiatives",
                    "Mentor and grow the team",
                    "Drive best practices",
                    "Collaborate with product and design",
                ],
                core_skills: &[
                    "System Design",
                    "Architecture",
                    "TypeScript",
                    "React",
                    "Node.js",
                    "Cloud",
                    "DevOps",
                    "Leadership",
                ],
                bonus_skills: &["ML/AI", "Platform Engineering", "Product Strategy"],
            },
        },
    },
    JobDomain {
        id: "data",
        name: "Data Science",
        icon: "BarChart",
        roles: LevelRoles {
            intern: RoleConfig {
                title: "Data Science Intern",
                experience_range: "0-6 months",
                responsibilities: &[
                    "Learn data analysis techniques",
                    "Assist with data cleaning and preparation",
                    "Create basic visualizations",
                    "Learn ML fundamentals",
                ],
                core_skills: &["Python", "SQL", "Statistics", "Data Visualization"],
                bonus_skills: &["Pandas", "NumPy", "Jupyter"],
            },
            junior: RoleConfig {
                title: "Junior Data Scientist",
                experience_range: "0-2 years",
                responsibilities: &[
                    "Analyze datasets and derive insights",
                    "Build basic ML models",
                    "Create data visualizations and reports",
                    "Clean and preprocess data",
                    "Collaborate with stakeholders",
                ],
                core_skills: &[
                    "Python",
                    "SQL",
                    "Pandas",
                    "NumPy",
                    "Scikit-learn",
                    "Statistics",
                    "Data Visualization",
                ],
                bonus_skills: &["TensorFlow", "Deep Learning", "Big Data", "A/B Testing"],
            },
            mid: RoleConfig {
                title: "Mid-Level Data Scientist",
                experience_range: "2-5 years",
                responsibilities: &[
                    "Develop and deploy ML models",
                    "Design experiments and A/B tests",
                    "Lead data-driven projects",
                    "Mentor junior data scientists",
                    "Present insights to leadership",
                ],
                core_skills: &[
                    "Python",
                    "ML Algorithms",
                    "Deep Learning",
                    "SQL",
                    "Statistics",
                    "MLOps",
                    "Communication",
                ],
                bonus_skills: &["NLP", "Computer Vision", "Cloud ML", "Leadership"],
            },
            senior: RoleConfig {
                title: "Senior Data Scientist",
                experience_range: "5+ years",
                responsibilities: &[
                    "Define data science strategy",
                    "Lead ML architecture decisions",
                    "Mentor and grow the data team",
                    "Drive innovation with AI/ML",
                    "Collaborate with executives",
                ],
                core_skills: &[
                    "ML Strategy",
                    "Deep Learning",
                    "MLOps",
                    "Leadership",
                    "Communication",
                    "Research",
                ],
                bonus_skills: &["Product Strategy", "Business Development", "Patents"],
            },
        },
    },
    JobDomain {
        id: "devops",
        name: "DevOps Engineering",
        icon: "Cloud",
        roles: LevelRoles {
            intern: RoleConfig {
                title: "DevOps Intern",
                experience_range: "0-6 months",
                responsibilities: &[
                    "Learn cloud platforms and tools",
                    "Assist with CI/CD pipelines",
                    "Learn containerization basics",
                    "Monitor system health",
                ],
                core_skills: &["Linux", "Git", "Bash", "Docker Basics"],
                bonus_skills: &["AWS Basics", "Python"],
            },
            junior: RoleConfig {
                title: "Junior DevOps Engineer",
                experience_range: "0-2 years",
                responsibilities: &[
                    "Build and maintain CI/CD pipelines",
                    "Manage cloud infrastructure",
                    "Containerize applications",
                    "Monitor and troubleshoot systems",
                    "Write automation scripts",
                ],
                core_skills: &[
                    "Linux",
                    "Docker",
                    "CI/CD",
                    "Cloud (AWS/GCP/Azure)",
                    "Git",
                    "Scripting",
                ],
                bonus_skills: &["Kubernetes", "Terraform", "Monitoring", "Security"],
            },
            mid: RoleConfig {
                title: "Mid-Level DevOps Engineer",
                experience_range: "2-5 years",
                responsibilities: &[
                    "Design infrastructure architecture",
                    "Implement Infrastructure as Code",
                    "Optimize CI/CD processes",
                    "Lead DevOps projects",
                    "Mentor junior engineers",
                ],
                core_skills: &[
                    "Kubernetes",
                    "Terraform",
                    "Cloud Architecture",
                    "CI/CD",
                    "Monitoring",
                    "Security",
                    "IaC",
                ],
                bonus_skills: &["Service Mesh", "GitOps", "Platform Engineering", "SRE"],
            },
            senior: RoleConfig {
                title: "Senior DevOps Engineer",
                experience_range: "5+ years",
                responsibilities: &[
                    "Define DevOps strategy and standards",
                    "Lead platform engineering initiatives",
                    "Scale infrastructure for growth",
                    "Mentor and grow the DevOps team",
                    "Drive reliability and efficiency",
                ],
                core_skills: &[
                    "Platform Engineering",
                    "Cloud Architecture",
                    "SRE",
                    "Leadership",
                    "Security",
                    "Cost Optimization",
                ],
                bonus_skills: &["Multi-cloud", "FinOps", "Compliance"],
            },
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_defines_core_skills_at_every_level() {
        assert_eq!(JOB_DOMAINS.len(), 5);
        for domain in JOB_DOMAINS {
            for level in RoleLevel::ALL {
                let config = domain.roles.at(level);
                assert!(!config.core_skills.is_empty(), "{} {level}", domain.id);
                assert!(!config.bonus_skills.is_empty(), "{} {level}", domain.id);
            }
        }
    }

    #[test]
    fn test_catalog_requirement_for_intern_frontend() {
        let req = catalog_requirement("Frontend", RoleLevel::Intern).unwrap();
        assert_eq!(req.domain, "frontend");
        assert_eq!(req.core_skills, vec!["HTML", "CSS", "JavaScript", "Git"]);
        assert_eq!(req.bonus_skills, vec!["React Basics", "Responsive Design"]);
    }

    #[test]
    fn test_unknown_domain() {
        assert!(find_domain("marketing").is_none());
        assert!(catalog_requirement("marketing", RoleLevel::Senior).is_none());
        assert_eq!(
            find_domain("DevOps").map(|d| d.roles.at(RoleLevel::Senior).title),
            Some("Senior DevOps Engineer")
        );
    }
}
