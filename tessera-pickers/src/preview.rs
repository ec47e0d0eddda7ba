//! Single-line text preview of a toolbar.
//!
//! Regions are separated by ` | ` and buttons appear in visual order.
//! Clickable labels are bracketed and selected ones starred: `[*09*]`.

use crate::toolbar::{ContainerStyle, Toolbar, ToolbarButton, ToolbarRenderer, ToolbarStyle};

/// [`ToolbarRenderer`] that collects a text preview.
#[derive(Debug, Default)]
pub struct TextRenderer {
    depth: usize,
    regions: Vec<Vec<String>>,
}

impl TextRenderer {
    /// Returns the preview collected so far.
    pub fn finish(self) -> String {
        self.regions
            .iter()
            .map(|tokens| tokens.join(" "))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl ToolbarRenderer for TextRenderer {
    fn begin_toolbar(&mut self, _style: &ToolbarStyle) {
        self.depth = 0;
        self.regions.clear();
    }

    fn begin_container(&mut self, _style: &ContainerStyle) {
        if self.depth == 0 {
            self.regions.push(Vec::new());
        }
        self.depth += 1;
    }

    fn end_container(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn button(&mut self, button: &ToolbarButton) {
        let token = match (button.is_interactive(), button.is_selected()) {
            (true, true) => format!("[*{}*]", button.label()),
            (true, false) => format!("[{}]", button.label()),
            (false, _) => button.label().trim().to_string(),
        };
        if let Some(region) = self.regions.last_mut() {
            region.push(token);
        }
    }
}

/// Renders `toolbar` with a fresh [`TextRenderer`].
pub fn preview(toolbar: &Toolbar) -> String {
    let mut renderer = TextRenderer::default();
    toolbar.render(&mut renderer);
    renderer.finish()
}
