// Page layout: content model → layout tree → HTML.
// The renderer is pure; only the HTML serializer knows about markup and classes.

pub mod html;
pub mod node;
pub mod renderer;

// Re-export the public API consumed by routes and the export path.
pub use html::render_document;
pub use node::Layout;
pub use renderer::render_page_now;
