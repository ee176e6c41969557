use super::content::{
    CertificationEntry, ContentModel, ExperienceEntry, Profile, ProjectEntry, SkillGroups,
};

const SUMMARY: &str = "Full Stack Developer with a strong focus on building clean, efficient, \
and maintainable web applications. Experienced across modern frontend frameworks and robust \
backend architectures. Comfortable translating product goals into scalable solutions, \
improving performance, and delivering reliable user experiences.";

const EXPORT_HINT: &str = "This page is optimized for export to PDF. Use the Download PDF button.";

/// The built-in portfolio content served by this binary.
pub fn default_content() -> ContentModel {
    ContentModel {
        profile: Profile {
            name: "M. Ridwan".to_string(),
            title: "Full Stack Developer".to_string(),
            location: "Jakarta".to_string(),
            email: "mridwan07072002@gmail.com".to_string(),
            phone: "089503412994".to_string(),
            profile_url: "https://github.com/MuhRidwaan".to_string(),
        },
        summary: SUMMARY.to_string(),
        skills: SkillGroups::new()
            .with(
                "Frontend",
                ["HTML", "CSS", "JavaScript", "React", "Vue", "Next.js"],
            )
            .with("Backend", ["Node.js", "Laravel"])
            .with("Databases", ["MySQL", "PostgreSQL"])
            .with("Tools / DevOps", ["Git", "Docker"])
            .with("Others", ["WordPress"]),
        experience: vec![
            experience(
                "TechNova Labs",
                "Full Stack Developer",
                "2023 – Present",
                &[
                    "Build and maintain scalable web applications across the stack.",
                    "Collaborate with designers and PMs to deliver features on time.",
                    "Implement component-based UIs and RESTful services.",
                ],
            ),
            experience(
                "CloudBridge Studio",
                "Software Engineer (Contract)",
                "2022 – 2023",
                &[
                    "Developed responsive interfaces with React and Tailwind CSS.",
                    "Created backend APIs with Node.js and Laravel.",
                    "Optimized database queries on MySQL/PostgreSQL.",
                ],
            ),
        ],
        projects: vec![
            project(
                "Project Atlas",
                "Modular admin dashboard for analytics and content operations with role-based \
                 access and audit trails.",
                &["React", "Node.js", "PostgreSQL", "Docker"],
                "Internal tooling to streamline reporting and data management.",
            ),
            project(
                "ShopSphere",
                "Headless e-commerce storefront with server-rendered product pages and secure \
                 checkout integration.",
                &["Next.js", "Laravel", "MySQL"],
                "Enable fast product discovery and reliable order processing.",
            ),
            project(
                "TaskFlow",
                "Kanban-style task manager with drag-and-drop boards and team collaboration.",
                &["Vue", "Node.js", "PostgreSQL"],
                "Improve team productivity through clear task ownership.",
            ),
            project(
                "ContentPress",
                "Customized WordPress theme and plugin suite for editorial workflows and SEO.",
                &["WordPress", "PHP", "Docker"],
                "Deliver a flexible content platform with modern authoring experience.",
            ),
        ],
        certifications: vec![
            certification("Full-Stack Web Development", "Coursera", "2023"),
            certification("Docker Essentials", "IBM Skills Network", "2022"),
        ],
        export_hint: EXPORT_HINT.to_string(),
    }
}

fn experience(company: &str, position: &str, period: &str, bullets: &[&str]) -> ExperienceEntry {
    ExperienceEntry {
        company: company.to_string(),
        position: position.to_string(),
        period: period.to_string(),
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
    }
}

fn project(name: &str, description: &str, stack: &[&str], purpose: &str) -> ProjectEntry {
    ProjectEntry {
        name: name.to_string(),
        description: description.to_string(),
        stack: stack.iter().map(|s| s.to_string()).collect(),
        purpose: purpose.to_string(),
    }
}

fn certification(name: &str, issuer: &str, year: &str) -> CertificationEntry {
    CertificationEntry {
        name: name.to_string(),
        issuer: issuer.to_string(),
        year: year.to_string(),
    }
}
