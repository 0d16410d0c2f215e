//! View renderers.
//!
//! Both renderers are pure functions of a [`crate::ViewState`] and a display zone. They branch
//! on the state exactly once, so error and report content are never mixed in one output.

pub mod html;
pub mod shell;
pub mod text;

pub use shell::PageShell;

/// Output format for a rendered view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderFormat {
    #[default]
    Text,
    Html,
}

/// Render a view state in the requested format.
///
/// HTML output is a fragment; wrap it with [`PageShell`] for a full document.
pub fn render(
    state: &crate::ViewState,
    zone: swasthya_types::DisplayZone,
    format: RenderFormat,
) -> String {
    match format {
        RenderFormat::Text => text::render_view(state, zone),
        RenderFormat::Html => html::render_view(state, zone),
    }
}
