//! Content renderer — projects the content model into a [`Layout`].
//!
//! Every function here is pure. Given the same model, scene and year the output
//! is always equal, and no section is ever dropped because its data is empty.

use chrono::{Datelike, Utc};

use crate::host::{Action, SceneConfig};
use crate::layout::node::{Emphasis, Layout, ListMarker, Node, Role, Section, SectionKind, Tone};
use crate::models::{CertificationEntry, ContentModel, ExperienceEntry, ProjectEntry, SkillGroups};

/// Separator for skill and stack lists.
pub const LIST_SEPARATOR: &str = ", ";

pub const CONTACT_ANCHOR: &str = "contact";

// ────────────────────────────────────────────────────────────────────────────
// Building blocks
// ────────────────────────────────────────────────────────────────────────────

pub fn render_section_title(label: &str) -> Node {
    Node::SectionTitle {
        text: label.to_string(),
    }
}

/// A label/value row. The value is a link iff `href` is given.
pub fn render_labeled_row(label: &str, value: &str, href: Option<&str>) -> Node {
    let value = match href {
        Some(href) => Node::Link {
            text: value.to_string(),
            href: href.to_string(),
        },
        None => Node::text(value, Tone::Body),
    };
    Node::LabeledRow {
        label: label.to_string(),
        value: Box::new(value),
    }
}

pub fn render_skill_groups(skills: &SkillGroups) -> Node {
    let groups = skills
        .iter()
        .map(|group| {
            Node::container(
                Role::Group,
                vec![
                    Node::Heading {
                        level: 4,
                        text: group.category.clone(),
                    },
                    Node::text(group.skills.join(LIST_SEPARATOR), Tone::Body),
                ],
            )
        })
        .collect();
    Node::container(Role::Entries, groups)
}

pub fn render_experience_list(entries: &[ExperienceEntry]) -> Node {
    let cards = entries
        .iter()
        .map(|exp| {
            let heading = Node::Split {
                start: vec![
                    Node::Heading {
                        level: 3,
                        text: exp.position.clone(),
                    },
                    Node::text(&exp.company, Tone::Muted),
                ],
                end: vec![Node::text(&exp.period, Tone::Caption)],
            };
            let bullets = Node::List {
                marker: ListMarker::Bullet,
                items: exp
                    .bullets
                    .iter()
                    .map(|b| Node::text(b, Tone::Body))
                    .collect(),
            };
            Node::container(Role::Card, vec![heading, bullets])
        })
        .collect();
    Node::container(Role::Entries, cards)
}

pub fn render_project_grid(projects: &[ProjectEntry]) -> Node {
    let cards = projects
        .iter()
        .map(|p| {
            Node::container(
                Role::Card,
                vec![
                    Node::Heading {
                        level: 3,
                        text: p.name.clone(),
                    },
                    Node::text(&p.description, Tone::Body),
                    Node::LabeledText {
                        label: "Stack".to_string(),
                        text: p.stack.join(LIST_SEPARATOR),
                    },
                    Node::LabeledText {
                        label: "Purpose".to_string(),
                        text: p.purpose.clone(),
                    },
                ],
            )
        })
        .collect();
    Node::container(Role::Grid, cards)
}

pub fn render_certification_list(certs: &[CertificationEntry]) -> Node {
    Node::List {
        marker: ListMarker::None,
        items: certs
            .iter()
            .map(|c| Node::Split {
                start: vec![Node::text(
                    format!("{} — {}", c.name, c.issuer),
                    Tone::Body,
                )],
                end: vec![Node::text(&c.year, Tone::Caption)],
            })
            .collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page assembly
// ────────────────────────────────────────────────────────────────────────────

/// Renders the whole page. `year` feeds the footer copyright line.
pub fn render_page(model: &ContentModel, scene: &SceneConfig, year: i32) -> Layout {
    let profile = &model.profile;

    let sections = SectionKind::ALL
        .into_iter()
        .map(|kind| {
            let mut children: Vec<Node> = kind.title().map(render_section_title).into_iter().collect();
            children.extend(section_body(kind, model, scene, year));
            Section {
                kind,
                column: kind.column(),
                anchor: (kind == SectionKind::Contact).then(|| CONTACT_ANCHOR.to_string()),
                children,
            }
        })
        .collect();

    Layout {
        document_title: format!("{} — {}", profile.name, profile.title),
        sections,
    }
}

/// The year stamped into "now" renders. The only place the clock is read.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// [`render_page`] stamped with [`current_year`].
pub fn render_page_now(model: &ContentModel, scene: &SceneConfig) -> Layout {
    render_page(model, scene, current_year())
}

fn section_body(kind: SectionKind, model: &ContentModel, scene: &SceneConfig, year: i32) -> Vec<Node> {
    let profile = &model.profile;
    match kind {
        SectionKind::Hero => vec![
            Node::Heading {
                level: 1,
                text: profile.name.clone(),
            },
            Node::text(&profile.title, Tone::Lead),
            Node::container(
                Role::Details,
                std::iter::once(render_labeled_row("Location", &profile.location, None))
                    .chain(contact_rows(model))
                    .collect(),
            ),
            Node::ScreenOnly {
                child: Box::new(Node::container(
                    Role::Actions,
                    vec![
                        Node::Action {
                            action: Action::Export,
                            label: "Download PDF".to_string(),
                            emphasis: Emphasis::Primary,
                        },
                        Node::Action {
                            action: Action::navigate(CONTACT_ANCHOR),
                            label: "Contact".to_string(),
                            emphasis: Emphasis::Secondary,
                        },
                    ],
                )),
            },
            Node::Widget {
                locator: scene.locator.clone(),
                size: scene.size.clone(),
            },
        ],
        SectionKind::Summary => vec![Node::text(&model.summary, Tone::Body)],
        SectionKind::Experience => vec![render_experience_list(&model.experience)],
        SectionKind::Projects => vec![render_project_grid(&model.projects)],
        SectionKind::Skills => vec![render_skill_groups(&model.skills)],
        SectionKind::Certifications => vec![render_certification_list(&model.certifications)],
        SectionKind::Contact => vec![Node::container(Role::Rows, contact_rows(model).collect())],
        SectionKind::Footer => vec![
            Node::text(
                format!(
                    "© {year} {} • {} • {}",
                    profile.name, profile.location, profile.title
                ),
                Tone::Caption,
            ),
            Node::ScreenOnly {
                child: Box::new(Node::text(&model.export_hint, Tone::Caption)),
            },
        ],
    }
}

fn contact_rows(model: &ContentModel) -> impl Iterator<Item = Node> + '_ {
    let p = &model.profile;
    [
        render_labeled_row("Email", &p.email, Some(&p.email_href())),
        render_labeled_row("Phone", &p.phone, Some(&p.phone_href())),
        render_labeled_row("GitHub", p.profile_display(), Some(p.profile_href())),
    ]
    .into_iter()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
