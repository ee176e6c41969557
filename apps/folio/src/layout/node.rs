//! Layout tree — what the renderer produces and serializers consume.
//!
//! The tree is presentation-neutral: nodes say *what* something is (a heading,
//! a labeled row, a list) and serializers decide how it looks.
#![allow(dead_code)]

use serde::Serialize;

use crate::host::{Action, WidgetSize};

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Summary,
    Experience,
    Projects,
    Skills,
    Certifications,
    Contact,
    Footer,
}

/// Where a section sits in the page grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Header,
    Main,
    Aside,
    Footer,
}

impl SectionKind {
    /// Every section, in page order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Certifications,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    pub fn column(self) -> Column {
        match self {
            SectionKind::Hero => Column::Header,
            SectionKind::Summary | SectionKind::Experience | SectionKind::Projects => Column::Main,
            SectionKind::Skills | SectionKind::Certifications | SectionKind::Contact => {
                Column::Aside
            }
            SectionKind::Footer => Column::Footer,
        }
    }

    /// Heading shown at the top of the section, if it has one.
    pub fn title(self) -> Option<&'static str> {
        match self {
            SectionKind::Hero | SectionKind::Footer => None,
            SectionKind::Summary => Some("Professional Summary"),
            SectionKind::Experience => Some("Experience"),
            SectionKind::Projects => Some("Projects"),
            SectionKind::Skills => Some("Technical Skills"),
            SectionKind::Certifications => Some("Certifications"),
            SectionKind::Contact => Some("Contact"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub column: Column,
    /// In-page anchor id, if the section is a navigation target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    pub children: Vec<Node>,
}

impl Section {
    /// Text of the leading [`Node::SectionTitle`], if any.
    pub fn title(&self) -> Option<&str> {
        match self.children.first() {
            Some(Node::SectionTitle { text }) => Some(text),
            _ => None,
        }
    }
}

/// A rendered page: sections in page order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub document_title: String,
    pub sections: Vec<Section>,
}

impl Layout {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn column(&self, column: Column) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.column == column)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Nodes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Body,
    Lead,
    Muted,
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Labeled rows under the hero heading.
    Details,
    /// Vertical stack of labeled rows.
    Rows,
    /// Vertical stack of entry blocks.
    Entries,
    /// Two-up grid of cards.
    Grid,
    /// Bordered entry block.
    Card,
    /// Plain grouping with no chrome.
    Group,
    /// Horizontal button bar.
    Actions,
}

/// Whether list items show bullet markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    Bullet,
    /// Unmarked rows, e.g. name/year pairs.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    SectionTitle {
        text: String,
    },
    Heading {
        level: u8,
        text: String,
    },
    Text {
        text: String,
        tone: Tone,
    },
    Link {
        text: String,
        href: String,
    },
    /// `label` rendered as a fixed-width caption next to `value`.
    LabeledRow {
        label: String,
        value: Box<Node>,
    },
    /// Inline `label:` prefix followed by text, e.g. `Stack: React, Vue`.
    LabeledText {
        label: String,
        text: String,
    },
    /// Unordered list; one item per child, order preserved.
    List {
        marker: ListMarker,
        items: Vec<Node>,
    },
    /// Content pushed to both ends of a row.
    Split {
        start: Vec<Node>,
        end: Vec<Node>,
    },
    Container {
        role: Role,
        children: Vec<Node>,
    },
    Widget {
        locator: String,
        size: WidgetSize,
    },
    Action {
        action: Action,
        label: String,
        emphasis: Emphasis,
    },
    /// Shown on screen, hidden when printed.
    ScreenOnly {
        child: Box<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>, tone: Tone) -> Self {
        Node::Text {
            text: text.into(),
            tone,
        }
    }

    pub fn container(role: Role, children: Vec<Node>) -> Self {
        Node::Container { role, children }
    }

    /// Direct children, in order. Leaves return an empty slice.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container { children, .. } => children,
            Node::List { items, .. } => items,
            Node::LabeledRow { value, .. } => std::slice::from_ref(value.as_ref()),
            Node::ScreenOnly { child } => std::slice::from_ref(child.as_ref()),
            _ => &[],
        }
    }

    /// All visible text fragments in document order.
    pub fn text_fragments(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::SectionTitle { text }
            | Node::Heading { text, .. }
            | Node::Text { text, .. }
            | Node::Link { text, .. } => out.push(text),
            Node::LabeledRow { label, value } => {
                out.push(label);
                value.collect_text(out);
            }
            Node::LabeledText { label, text } => {
                out.push(label);
                out.push(text);
            }
            Node::Action { label, .. } => out.push(label),
            Node::Split { start, end } => {
                for n in start.iter().chain(end) {
                    n.collect_text(out);
                }
            }
            Node::Widget { .. } => {}
            other => {
                for n in other.children() {
                    n.collect_text(out);
                }
            }
        }
    }
}
