//! HTML serializer for a [`Layout`].
//!
//! Produces one self-contained document styled with Tailwind utility classes.
//! All text goes through maud, so content is always escaped.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::host::{BrowserBinding, BrowserHost, SceneViewer};
use crate::layout::node::{
    Column, Emphasis, Layout, ListMarker, Node, Role, Section, SectionKind, Tone,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Hides screen-only chrome when printing, with or without Tailwind loaded.
const PRINT_CSS: &str = "@media print { .print-hidden { display: none !important; } \
body { background: #fff; } }";

const CARD_SECTION: &str = "bg-white rounded-xl border border-slate-200 p-6";

pub fn render_document(layout: &Layout, viewer: &dyn SceneViewer) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (layout.document_title) }
                script src=(TAILWIND_CDN) {}
                style { (PreEscaped(PRINT_CSS)) }
                (viewer.head())
            }
            body class="min-h-screen bg-slate-50 text-slate-800" {
                @for section in layout.column(Column::Header) {
                    (header(section, viewer))
                }
                main class="mx-auto max-w-6xl px-6 py-10" {
                    div class="grid grid-cols-1 lg:grid-cols-3 gap-8" {
                        section class="lg:col-span-2 space-y-8" {
                            @for s in layout.column(Column::Main) {
                                (card_section(s, viewer))
                            }
                        }
                        aside class="space-y-8" {
                            @for s in layout.column(Column::Aside) {
                                (card_section(s, viewer))
                            }
                        }
                    }
                }
                @for section in layout.column(Column::Footer) {
                    (footer(section, viewer))
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Hero: identity on the left, scene widget on the right.
fn header(section: &Section, viewer: &dyn SceneViewer) -> Markup {
    let (widgets, identity): (Vec<&Node>, Vec<&Node>) = section
        .children
        .iter()
        .partition(|n| matches!(n, Node::Widget { .. }));

    html! {
        header class="relative bg-white border-b border-slate-200" {
            div class="mx-auto max-w-6xl px-6 py-12 lg:py-16 grid grid-cols-1 lg:grid-cols-2 gap-8 items-center" {
                div {
                    @for n in &identity { (node(n, viewer)) }
                }
                @for w in &widgets {
                    div class="h-64 sm:h-80 lg:h-96 rounded-xl overflow-hidden border border-slate-200 bg-slate-100" {
                        (node(w, viewer))
                    }
                }
            }
            div class="pointer-events-none absolute inset-x-0 bottom-0 h-20 bg-gradient-to-t from-white/70 to-transparent" {}
        }
    }
}

fn card_section(section: &Section, viewer: &dyn SceneViewer) -> Markup {
    html! {
        div id=[section.anchor.as_deref()] class=(CARD_SECTION) data-section=(section_key(section.kind)) {
            @for n in &section.children { (node(n, viewer)) }
        }
    }
}

fn footer(section: &Section, viewer: &dyn SceneViewer) -> Markup {
    html! {
        footer class="mx-auto max-w-6xl px-6 pb-12 text-xs text-slate-500" {
            div class="border-t border-slate-200 pt-6 flex flex-col sm:flex-row items-start sm:items-center justify-between gap-3" {
                @for n in &section.children { (node(n, viewer)) }
            }
        }
    }
}

fn section_key(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Hero => "hero",
        SectionKind::Summary => "summary",
        SectionKind::Experience => "experience",
        SectionKind::Projects => "projects",
        SectionKind::Skills => "skills",
        SectionKind::Certifications => "certifications",
        SectionKind::Contact => "contact",
        SectionKind::Footer => "footer",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Nodes
// ────────────────────────────────────────────────────────────────────────────

pub fn node(n: &Node, viewer: &dyn SceneViewer) -> Markup {
    match n {
        Node::SectionTitle { text } => html! {
            h2 class="text-xl font-semibold tracking-tight text-slate-800 border-b border-slate-200 pb-2" {
                (text)
            }
        },
        Node::Heading { level, text } => heading(*level, text),
        Node::Text { text, tone } => html! {
            p class=(tone_class(*tone)) { (text) }
        },
        Node::Link { text, href } => html! {
            a href=(href) target="_blank" rel="noreferrer" class="text-slate-700 hover:text-blue-600 transition-colors" {
                (text)
            }
        },
        Node::LabeledRow { label, value } => {
            let value = match value.as_ref() {
                Node::Text { text, .. } => html! { span class="text-slate-700" { (text) } },
                other => node(other, viewer),
            };
            html! {
                div class="flex gap-3 text-sm" {
                    span class="w-24 text-slate-500" { (label) }
                    span class="flex-1" { (value) }
                }
            }
        }
        Node::LabeledText { label, text } => html! {
            p class="mt-1 text-xs text-slate-500" {
                span class="font-medium" { (label) ":" }
                " " (text)
            }
        },
        Node::List { marker, items } => html! {
            ul class=(list_class(*marker)) {
                @for item in items {
                    li { (inline(item, viewer)) }
                }
            }
        },
        Node::Split { start, end } => html! {
            div class="flex items-center justify-between gap-4" {
                div { @for n in start { (node(n, viewer)) } }
                span class="text-xs text-slate-500 whitespace-nowrap" {
                    @for n in end { (inline(n, viewer)) }
                }
            }
        },
        Node::Container { role, children } => html! {
            div class=(role_class(*role)) {
                @for c in children { (node(c, viewer)) }
            }
        },
        Node::Widget { locator, size } => viewer.embed(locator, size),
        Node::Action {
            action,
            label,
            emphasis,
        } => {
            let class = emphasis_class(*emphasis);
            match action.dispatch(&BrowserHost) {
                BrowserBinding::Link(href) => html! { a href=(href) class=(class) { (label) } },
                BrowserBinding::Script(script) => html! {
                    button type="button" onclick=(script) class=(class) { (label) }
                },
            }
        }
        Node::ScreenOnly { child } => html! {
            div class="print:hidden print-hidden" { (node(child, viewer)) }
        },
    }
}

/// Text nodes inside list items and row ends render without a paragraph wrapper.
fn inline(n: &Node, viewer: &dyn SceneViewer) -> Markup {
    match n {
        Node::Text { text, .. } => html! { (text) },
        Node::Split { start, end } => html! {
            div class="flex items-center justify-between" {
                span { @for s in start { (inline(s, viewer)) } }
                span class="text-xs text-slate-500" { @for e in end { (inline(e, viewer)) } }
            }
        },
        other => node(other, viewer),
    }
}

fn heading(level: u8, text: &str) -> Markup {
    match level {
        1 => html! {
            h1 class="text-3xl sm:text-4xl font-bold tracking-tight text-slate-900" { (text) }
        },
        2 => html! { h2 class="text-xl font-semibold text-slate-800" { (text) } },
        3 => html! { h3 class="text-sm font-semibold text-slate-900" { (text) } },
        _ => html! { h4 class="text-sm font-medium text-slate-900" { (text) } },
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Body => "mt-1 text-sm leading-6 text-slate-700",
        Tone::Lead => "mt-1 text-lg text-slate-600",
        Tone::Muted => "text-sm text-slate-600",
        Tone::Caption => "text-xs text-slate-500",
    }
}

fn list_class(marker: ListMarker) -> &'static str {
    match marker {
        ListMarker::Bullet => "mt-3 list-disc pl-5 space-y-1 text-sm text-slate-700",
        ListMarker::None => "mt-3 space-y-2 text-sm text-slate-700",
    }
}

fn role_class(role: Role) -> &'static str {
    match role {
        Role::Details => "mt-6 space-y-2 text-sm",
        Role::Rows => "mt-3 space-y-2 text-sm",
        Role::Entries => "mt-4 space-y-6",
        Role::Grid => "mt-4 grid grid-cols-1 md:grid-cols-2 gap-4",
        Role::Card => "rounded-lg border border-slate-200 p-4",
        Role::Group => "space-y-1",
        Role::Actions => "mt-6 flex gap-3",
    }
}

fn emphasis_class(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Primary => {
            "inline-flex items-center rounded-md bg-slate-900 px-4 py-2 text-white text-sm font-medium hover:bg-slate-800"
        }
        Emphasis::Secondary => {
            "inline-flex items-center rounded-md bg-white px-4 py-2 text-slate-900 text-sm font-medium border border-slate-300 hover:bg-slate-50"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Action, SceneConfig, SplineViewer, WidgetSize};
    use crate::layout::renderer::{render_labeled_row, render_page};
    use crate::models::default_content;

    fn doc(year: i32) -> String {
        let layout = render_page(&default_content(), &SceneConfig::default(), year);
        render_document(&layout, &SplineViewer).into_string()
    }

    #[test]
    fn test_document_is_deterministic() {
        assert_eq!(doc(2024), doc(2024));
        assert_ne!(doc(2024), doc(2025));
    }

    #[test]
    fn test_document_structure() {
        let html = doc(2024);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>M. Ridwan — Full Stack Developer</title>"));
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r##"<a href="#contact""##));
        assert!(html.contains(r#"onclick="window.print()""#));
        assert!(html.contains("<spline-viewer"));
        assert!(html.contains("© 2024 M. Ridwan • Jakarta • Full Stack Developer"));
        assert!(html.contains("@media print"));
    }

    #[test]
    fn test_main_sections_precede_aside_sections() {
        let html = doc(2024);
        let pos = |key: &str| {
            html.find(&format!(r#"data-section="{key}""#))
                .unwrap_or_else(|| panic!("section {key} missing"))
        };
        assert!(pos("summary") < pos("experience"));
        assert!(pos("experience") < pos("projects"));
        assert!(pos("projects") < pos("skills"));
        assert!(pos("skills") < pos("certifications"));
        assert!(pos("certifications") < pos("contact"));
    }

    #[test]
    fn test_labeled_row_link_markup() {
        let linked = node(
            &render_labeled_row("Email", "a@b.c", Some("mailto:a@b.c")),
            &SplineViewer,
        )
        .into_string();
        assert!(linked.contains(r#"<a href="mailto:a@b.c" target="_blank" rel="noreferrer""#));

        let plain = node(&render_labeled_row("Location", "Jakarta", None), &SplineViewer)
            .into_string();
        assert!(!plain.contains("<a "));
        assert!(plain.contains(r#"<span class="text-slate-700">Jakarta</span>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let out = node(&Node::text("<script>&\"", Tone::Body), &SplineViewer).into_string();
        assert!(out.contains("&lt;script&gt;&amp;&quot;"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn test_bullets_become_list_items() {
        let list = Node::List {
            marker: ListMarker::Bullet,
            items: vec![Node::text("one", Tone::Body), Node::text("two", Tone::Body)],
        };
        let out = node(&list, &SplineViewer).into_string();
        assert_eq!(out.matches("<li>").count(), 2);
        assert!(out.find("<li>one</li>").unwrap() < out.find("<li>two</li>").unwrap());
    }

    #[test]
    fn test_screen_only_is_print_hidden() {
        let out = node(
            &Node::ScreenOnly {
                child: Box::new(Node::text("hint", Tone::Caption)),
            },
            &SplineViewer,
        )
        .into_string();
        assert!(out.contains("print-hidden"));
        assert!(out.contains("hint"));
    }

    fn section_html(kind: SectionKind) -> String {
        let layout = render_page(&default_content(), &SceneConfig::default(), 2024);
        let section = layout.section(kind).unwrap();
        match kind.column() {
            Column::Header => header(section, &SplineViewer).into_string(),
            _ => card_section(section, &SplineViewer).into_string(),
        }
    }

    #[test]
    fn test_export_button_uses_browser_host_print_binding() {
        let BrowserBinding::Script(script) = Action::Export.dispatch(&BrowserHost) else {
            panic!("export should bind to a script");
        };
        let hero = section_html(SectionKind::Hero);
        assert!(hero.contains(&format!(r#"<button type="button" onclick="{script}""#)));
        assert!(hero.contains(">Download PDF</button>"));
    }

    #[test]
    fn test_rendering_the_document_leaves_layout_unchanged() {
        let layout = render_page(&default_content(), &SceneConfig::default(), 2024);
        let before = layout.clone();
        let _ = render_document(&layout, &SplineViewer);
        assert_eq!(layout, before);
    }

    #[test]
    fn test_certifications_are_unmarked_rows() {
        let certs = section_html(SectionKind::Certifications);
        assert!(!certs.contains("list-disc"));
        assert!(certs.contains(r#"<ul class="mt-3 space-y-2 text-sm text-slate-700">"#));

        let experience = section_html(SectionKind::Experience);
        assert_eq!(experience.matches("list-disc").count(), 2);
    }

    #[test]
    fn test_hero_and_contact_row_spacing() {
        assert!(section_html(SectionKind::Hero).contains(r#"<div class="mt-6 space-y-2 text-sm">"#));

        let contact = section_html(SectionKind::Contact);
        assert!(contact.contains(r#"<div class="mt-3 space-y-2 text-sm">"#));
        assert!(!contact.contains("mt-6"));
    }

    #[test]
    fn test_widget_delegates_to_viewer() {
        let out = node(
            &Node::Widget {
                locator: "scene://x".to_string(),
                size: WidgetSize::default(),
            },
            &SplineViewer,
        )
        .into_string();
        assert!(out.contains(r#"url="scene://x""#));
    }
}
