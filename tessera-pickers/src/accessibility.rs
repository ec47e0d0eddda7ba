//! Accessibility metadata for toolbar buttons.
//!
//! Each button describes itself with an AccessKit role, a label and, for the
//! selectable fields, its selected state. Hosts hand the resulting
//! [`accesskit::Node`] to their accessibility tree builder.

use accesskit::{Action, Node, Role};

/// Semantic description of a single toolbar node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semantics {
    /// AccessKit role of the node.
    pub role: Role,
    /// Text announced by assistive technology.
    pub label: String,
    /// Selected state; `None` when selection does not apply.
    pub selected: Option<bool>,
    /// Whether the node responds to `Action::Click`.
    pub clickable: bool,
}

impl Semantics {
    /// Semantics for a clickable, selectable button.
    pub fn button(label: impl Into<String>, selected: bool) -> Self {
        Self {
            role: Role::Button,
            label: label.into(),
            selected: Some(selected),
            clickable: true,
        }
    }

    /// Semantics for static text.
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            role: Role::Label,
            label: label.into(),
            selected: None,
            clickable: false,
        }
    }

    /// Builds the AccessKit node for these semantics.
    pub fn to_node(&self) -> Node {
        let mut node = Node::new(self.role);
        if self.role == Role::Label {
            // Label text content goes in `value`, not `label`.
            node.set_value(self.label.as_str());
        } else {
            node.set_label(self.label.as_str());
        }
        if let Some(selected) = self.selected {
            node.set_selected(selected);
        }
        if self.clickable {
            node.add_action(Action::Click);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_node_is_clickable_and_selectable() {
        let node = Semantics::button("Select year", true).to_node();
        assert_eq!(node.role(), Role::Button);
        assert_eq!(node.label(), Some("Select year"));
        assert_eq!(node.is_selected(), Some(true));
        assert!(node.supports_action(Action::Click));
    }

    #[test]
    fn text_node_carries_its_value() {
        let node = Semantics::text(":").to_node();
        assert_eq!(node.role(), Role::Label);
        assert_eq!(node.value(), Some(":"));
        assert_eq!(node.is_selected(), None);
        assert!(!node.supports_action(Action::Click));
    }
}
