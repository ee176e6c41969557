//! Host capabilities — things the page asks its environment to do.
//!
//! The renderer only ever *names* an action; the host performs it. In the served
//! HTML the browser is the host: [`BrowserHost`] turns each action into the
//! `window.print()` call or in-page anchor the page wires to its control.

pub mod scene;

use serde::Serialize;

pub use scene::{SceneConfig, SceneViewer, SplineViewer, WidgetSize};

/// A user-initiated command the page can dispatch to its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Print the current view (the browser turns this into "Save as PDF").
    Export,
    /// Scroll to an in-page anchor.
    Navigate { anchor: String },
}

/// The environment that executes actions. The page cannot observe whether
/// printing or scrolling succeeded; `Output` is whatever the host hands back
/// for wiring the action up (nothing, for a host that acts immediately).
pub trait Host {
    type Output;

    fn print(&self) -> Self::Output;
    fn navigate(&self, anchor: &str) -> Self::Output;
}

impl Action {
    pub fn navigate(anchor: impl Into<String>) -> Self {
        Action::Navigate {
            anchor: anchor.into(),
        }
    }

    /// Hands the action to the host. Takes `&self`: dispatching never touches
    /// content or layout.
    pub fn dispatch<H: Host>(&self, host: &H) -> H::Output {
        match self {
            Action::Export => host.print(),
            Action::Navigate { anchor } => host.navigate(anchor),
        }
    }
}

/// How the browser carries out an action on the served page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserBinding {
    /// Inline script run on click.
    Script(&'static str),
    /// Plain link the browser follows itself.
    Link(String),
}

/// The browser viewing the served page. Dispatching to it yields the binding
/// the HTML serializer attaches to the action's control.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    type Output = BrowserBinding;

    fn print(&self) -> BrowserBinding {
        BrowserBinding::Script("window.print()")
    }

    fn navigate(&self, anchor: &str) -> BrowserBinding {
        BrowserBinding::Link(format!("#{anchor}"))
    }
}
