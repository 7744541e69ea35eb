//! Built-in demo content for the onboarding "load sample data" operation.

use uuid::Uuid;

use crate::models::portfolio::{
    ContactInfo, Education, Experience, PersonalInfo, PortfolioData, Project, Skill,
};

pub fn sample_portfolio() -> PortfolioData {
    let mut project = Project {
        id: Uuid::new_v4(),
        title: "Task Pilot".to_string(),
        description: "A kanban-style task tracker with realtime sync and offline support."
            .to_string(),
        technologies: Vec::new(),
        github_url: Some("https://github.com/alexrivera/task-pilot".to_string()),
        live_url: Some("https://taskpilot.dev".to_string()),
        image_url: None,
    };
    for tech in ["TypeScript", "React", "PostgreSQL"] {
        project.push_technology(tech);
    }

    PortfolioData {
        personal_info: PersonalInfo {
            full_name: "Alex Rivera".to_string(),
            title: "Full-Stack Developer".to_string(),
            bio: "Developer with five years of experience building web products, \
                  from prototypes to production systems serving millions of requests."
                .to_string(),
            profile_photo: None,
        },
        contact: ContactInfo {
            email: "alex@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            linkedin: Some("https://linkedin.com/in/alexrivera".to_string()),
            github: Some("https://github.com/alexrivera".to_string()),
            twitter: None,
            website: Some("https://alexrivera.dev".to_string()),
            location: Some("Austin, TX".to_string()),
        },
        skills: vec![
            Skill {
                name: "React".to_string(),
                category: Some("Frontend".to_string()),
                level: Some(90),
            },
            Skill {
                name: "Node.js".to_string(),
                category: Some("Backend".to_string()),
                level: Some(85),
            },
            Skill {
                name: "PostgreSQL".to_string(),
                category: Some("Database".to_string()),
                level: Some(75),
            },
            Skill {
                name: "Docker".to_string(),
                category: Some("DevOps".to_string()),
                level: Some(70),
            },
        ],
        education: vec![Education {
            id: Uuid::new_v4(),
            institution: "University of Texas at Austin".to_string(),
            degree: "B.S.".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2015-09".to_string(),
            end_date: "2019-05".to_string(),
            description: None,
            gpa: Some("3.7".to_string()),
        }],
        experience: vec![
            Experience {
                id: Uuid::new_v4(),
                company: "Northwind Labs".to_string(),
                position: "Senior Software Engineer".to_string(),
                start_date: "2022-03".to_string(),
                end_date: String::new(),
                current: true,
                description: "Leading the checkout platform team.".to_string(),
                achievements: vec![
                    "Cut checkout latency by 40% by moving pricing to an edge cache"
                        .to_string(),
                    "Mentored three junior engineers to mid-level".to_string(),
                ],
            },
            Experience {
                id: Uuid::new_v4(),
                company: "Brightline".to_string(),
                position: "Software Engineer".to_string(),
                start_date: "2019-07".to_string(),
                end_date: "2022-02".to_string(),
                current: false,
                description: "Built internal dashboards and the public booking API."
                    .to_string(),
                achievements: vec![],
            },
        ],
        projects: vec![project],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_complete_enough_to_render_every_section() {
        let data = sample_portfolio();
        assert!(!data.personal_info.full_name.is_empty());
        assert!(!data.personal_info.bio.is_empty());
        assert!(!data.skills.is_empty());
        assert!(!data.education.is_empty());
        assert!(!data.experience.is_empty());
        assert!(!data.projects.is_empty());
        assert!(!data.contact.email.is_empty());
    }

    #[test]
    fn test_sample_current_role_has_no_end_date() {
        let data = sample_portfolio();
        let current = data.experience.iter().find(|e| e.current).unwrap();
        assert!(current.end_date.is_empty());
    }
}
