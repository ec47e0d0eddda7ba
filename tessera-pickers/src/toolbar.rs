//! Toolbar primitives produced by the picker headers.
//!
//! A [`Toolbar`] is a plain value: containers with style variants and
//! [`ToolbarButton`] leaves carrying their label, text variant, selected state
//! and a bound click [`Callback`]. Renderers walk it through
//! [`ToolbarRenderer`]; tests inspect it directly.

use smallvec::SmallVec;

use crate::{
    Dp,
    accessibility::Semantics,
    alignment::{CrossAxisAlignment, FlexDirection, MainAxisAlignment},
    dp::EdgeInsets,
    prop::Callback,
    theme::{HeaderTypography, TextVariant},
    view::{MeridiemMode, OpenView},
};

/// What a toolbar button stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    /// A header field that opens a picker view.
    Field(OpenView),
    /// The `:` between clock fields.
    Separator,
    /// An AM/PM toggle.
    Meridiem(MeridiemMode),
    /// The ` / ` between the AM and PM toggles.
    Divider,
}

impl ButtonRole {
    /// Returns true for roles that emit an intent when clicked.
    pub fn is_interactive(self) -> bool {
        matches!(self, ButtonRole::Field(_) | ButtonRole::Meridiem(_))
    }

    fn description(self) -> Option<&'static str> {
        let description = match self {
            ButtonRole::Field(OpenView::Year) => "Select year",
            ButtonRole::Field(OpenView::Date) => "Select date",
            ButtonRole::Field(OpenView::Hour) => "Select hour",
            ButtonRole::Field(OpenView::Minutes) => "Select minutes",
            ButtonRole::Field(OpenView::Seconds) => "Select seconds",
            ButtonRole::Meridiem(MeridiemMode::Am) => "Select AM",
            ButtonRole::Meridiem(MeridiemMode::Pm) => "Select PM",
            ButtonRole::Separator | ButtonRole::Divider => return None,
        };
        Some(description)
    }
}

/// Cursor shown while hovering a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Pointer hand for clickable labels.
    #[default]
    Pointer,
    /// Regular arrow for static text.
    Default,
}

/// Visual tweaks applied to a single button on top of its text variant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonStyle {
    /// Outer margin.
    pub margin: EdgeInsets,
    /// Hover cursor.
    pub cursor: Cursor,
    /// Font size override; `None` uses the text variant.
    pub font_size: Option<Dp>,
    /// Flow with surrounding text instead of taking its own box.
    pub inline: bool,
}

/// A clickable, labeled region of a toolbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarButton {
    label: String,
    variant: TextVariant,
    selected: bool,
    role: ButtonRole,
    style: ButtonStyle,
    on_click: Option<Callback>,
}

impl ToolbarButton {
    /// Creates a button that fires `on_click` when activated.
    pub fn new(
        role: ButtonRole,
        label: impl Into<String>,
        variant: TextVariant,
        selected: bool,
        on_click: Callback,
    ) -> Self {
        Self {
            label: label.into(),
            variant,
            selected,
            role,
            style: ButtonStyle::default(),
            on_click: Some(on_click),
        }
    }

    /// Creates a non-interactive, never selected label.
    pub fn label_only(role: ButtonRole, label: impl Into<String>, variant: TextVariant) -> Self {
        Self {
            label: label.into(),
            variant,
            selected: false,
            role,
            style: ButtonStyle {
                cursor: Cursor::Default,
                ..ButtonStyle::default()
            },
            on_click: None,
        }
    }

    /// Replaces the button style.
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Text variant of the label.
    pub fn variant(&self) -> TextVariant {
        self.variant
    }

    /// Whether the button is highlighted.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// What the button stands for.
    pub fn role(&self) -> ButtonRole {
        self.role
    }

    /// Visual tweaks.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Font size after applying the style override to the text variant.
    pub fn font_size(&self, typography: &HeaderTypography) -> Dp {
        self.style
            .font_size
            .unwrap_or_else(|| typography.style(self.variant).font_size)
    }

    /// Whether clicking the button emits an intent.
    pub fn is_interactive(&self) -> bool {
        self.on_click.is_some()
    }

    /// Activates the button, firing its callback once.
    ///
    /// Returns false when the button has nothing to fire.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(on_click) => {
                tracing::trace!(role = ?self.role, label = %self.label, "toolbar button clicked");
                on_click.call();
                true
            }
            None => false,
        }
    }

    /// Accessibility metadata for the button.
    pub fn semantics(&self) -> Semantics {
        match self.role.description() {
            Some(description) if self.is_interactive() => {
                Semantics::button(format!("{description}, {}", self.label), self.selected)
            }
            _ => Semantics::text(self.label.clone()),
        }
    }
}

/// Style of a layout container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerStyle {
    /// Flow direction.
    pub direction: FlexDirection,
    /// Main axis placement.
    pub main_axis_alignment: MainAxisAlignment,
    /// Cross axis placement of children.
    pub cross_axis_alignment: CrossAxisAlignment,
    /// Cross axis placement of the container itself inside its parent.
    pub align_self: Option<CrossAxisAlignment>,
    /// Fixed height, if any.
    pub height: Option<Dp>,
    /// Outer margin.
    pub margin: EdgeInsets,
}

/// A child of a [`Container`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarNode {
    /// A leaf button.
    Button(ToolbarButton),
    /// A nested container.
    Container(Container),
}

/// A styled group of toolbar nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    /// Layout style.
    pub style: ContainerStyle,
    /// Children in declaration order.
    pub children: Vec<ToolbarNode>,
}

impl Container {
    /// Creates an empty container.
    pub fn new(style: ContainerStyle) -> Self {
        Self {
            style,
            children: Vec::new(),
        }
    }

    /// Appends a button.
    pub fn push_button(&mut self, button: ToolbarButton) {
        self.children.push(ToolbarNode::Button(button));
    }

    /// Appends a nested container.
    pub fn push_container(&mut self, container: Container) {
        self.children.push(ToolbarNode::Container(container));
    }

    /// Children in the order they appear on screen along the main axis.
    pub fn visual_order(&self) -> Box<dyn Iterator<Item = &ToolbarNode> + '_> {
        if self.style.direction.is_reversed() {
            Box::new(self.children.iter().rev())
        } else {
            Box::new(self.children.iter())
        }
    }

    /// Depth-first walk over the buttons, in declaration order.
    pub fn buttons(&self) -> Vec<&ToolbarButton> {
        let mut buttons = Vec::new();
        self.collect_buttons(&mut buttons);
        buttons
    }

    fn collect_buttons<'a>(&'a self, out: &mut Vec<&'a ToolbarButton>) {
        for child in &self.children {
            match child {
                ToolbarNode::Button(button) => out.push(button),
                ToolbarNode::Container(container) => container.collect_buttons(out),
            }
        }
    }

    /// Nested containers, in declaration order.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.children.iter().filter_map(|child| match child {
            ToolbarNode::Container(container) => Some(container),
            ToolbarNode::Button(_) => None,
        })
    }
}

/// Style of the toolbar chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarStyle {
    /// Layout of the regions.
    pub container: ContainerStyle,
    /// Inner padding.
    pub padding: EdgeInsets,
}

/// Root of a header layout: chrome plus its top-level regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    /// Chrome style.
    pub style: ToolbarStyle,
    /// Top-level regions, in declaration order.
    pub regions: SmallVec<[Container; 2]>,
}

impl Toolbar {
    /// Depth-first walk over every button, in declaration order.
    pub fn buttons(&self) -> Vec<&ToolbarButton> {
        let mut buttons = Vec::new();
        for region in &self.regions {
            region.collect_buttons(&mut buttons);
        }
        buttons
    }

    /// Finds the first button with the given role.
    pub fn find(&self, role: ButtonRole) -> Option<&ToolbarButton> {
        self.buttons().into_iter().find(|button| button.role() == role)
    }

    /// Counts the buttons with the given role.
    pub fn count(&self, role: ButtonRole) -> usize {
        self.buttons()
            .into_iter()
            .filter(|button| button.role() == role)
            .count()
    }

    /// Views whose field is currently highlighted.
    pub fn selected_fields(&self) -> Vec<OpenView> {
        self.buttons()
            .into_iter()
            .filter(|button| button.is_selected())
            .filter_map(|button| match button.role() {
                ButtonRole::Field(view) => Some(view),
                _ => None,
            })
            .collect()
    }

    /// Activates the button with the given role.
    ///
    /// Returns false when no such interactive button is present.
    pub fn click(&self, role: ButtonRole) -> bool {
        self.find(role).is_some_and(ToolbarButton::click)
    }

    /// Walks the toolbar with a renderer.
    pub fn render<R: ToolbarRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin_toolbar(&self.style);
        for region in &self.regions {
            render_container(region, renderer);
        }
        renderer.end_toolbar();
    }
}

fn render_container<R: ToolbarRenderer + ?Sized>(container: &Container, renderer: &mut R) {
    renderer.begin_container(&container.style);
    for child in container.visual_order() {
        match child {
            ToolbarNode::Button(button) => renderer.button(button),
            ToolbarNode::Container(nested) => render_container(nested, renderer),
        }
    }
    renderer.end_container();
}

/// Visitor driven by [`Toolbar::render`].
///
/// Children are visited in visual order, so reversed containers arrive
/// mirrored.
pub trait ToolbarRenderer {
    /// Called before the first region.
    fn begin_toolbar(&mut self, _style: &ToolbarStyle) {}

    /// Called after the last region.
    fn end_toolbar(&mut self) {}

    /// Called when entering a container.
    fn begin_container(&mut self, _style: &ContainerStyle) {}

    /// Called when leaving a container.
    fn end_container(&mut self) {}

    /// Called for every button.
    fn button(&mut self, button: &ToolbarButton);
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    fn counting_button(role: ButtonRole, hits: &Arc<AtomicUsize>) -> ToolbarButton {
        let hits = Arc::clone(hits);
        ToolbarButton::new(
            role,
            "x",
            TextVariant::Display1,
            false,
            Callback::new(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[test]
    fn click_fires_once_per_activation() {
        let hits = Arc::new(AtomicUsize::new(0));
        let button = counting_button(ButtonRole::Field(OpenView::Hour), &hits);
        assert!(button.click());
        assert!(button.click());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn label_only_buttons_ignore_clicks() {
        let separator =
            ToolbarButton::label_only(ButtonRole::Separator, ":", TextVariant::Display2);
        assert!(!separator.click());
        assert!(!separator.is_selected());
        assert!(!separator.role().is_interactive());
        assert_eq!(separator.style().cursor, Cursor::Default);
        assert_eq!(separator.semantics(), Semantics::text(":"));
    }

    #[test]
    fn reversed_containers_mirror_their_children() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut container = Container::new(ContainerStyle {
            direction: FlexDirection::RowReverse,
            ..ContainerStyle::default()
        });
        container.push_button(counting_button(ButtonRole::Field(OpenView::Hour), &hits));
        container.push_button(counting_button(ButtonRole::Field(OpenView::Minutes), &hits));

        let visual: Vec<ButtonRole> = container
            .visual_order()
            .filter_map(|node| match node {
                ToolbarNode::Button(button) => Some(button.role()),
                ToolbarNode::Container(_) => None,
            })
            .collect();
        assert_eq!(
            visual,
            vec![
                ButtonRole::Field(OpenView::Minutes),
                ButtonRole::Field(OpenView::Hour)
            ]
        );

        let declared: Vec<ButtonRole> = container.buttons().iter().map(|b| b.role()).collect();
        assert_eq!(declared[0], ButtonRole::Field(OpenView::Hour));
    }

    #[test]
    fn interactive_semantics_include_the_label() {
        let hits = Arc::new(AtomicUsize::new(0));
        let button = counting_button(ButtonRole::Meridiem(MeridiemMode::Pm), &hits);
        let semantics = button.semantics();
        assert_eq!(semantics.label, "Select PM, x");
        assert_eq!(semantics.selected, Some(false));
        assert!(semantics.clickable);
    }

    #[test]
    fn font_size_prefers_the_style_override() {
        let typography = HeaderTypography::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let hour = counting_button(ButtonRole::Field(OpenView::Hour), &hits);
        assert_eq!(hour.font_size(&typography), Dp(34.0));

        let pm = counting_button(ButtonRole::Meridiem(MeridiemMode::Pm), &hits).with_style(
            ButtonStyle {
                font_size: Some(typography.meridiem.font_size),
                ..ButtonStyle::default()
            },
        );
        assert_eq!(pm.font_size(&typography), Dp(18.0));
    }
}
