//! Shared control, overlay, feedback, data-display, navigation, and layout primitives.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod date_picker;
mod feedback;
mod layout;
mod navigation;
mod overlays;

pub use controls::{
    Button, CheckboxField, IconButton, RadioField, SelectBox, SelectOption, Switch,
    TextAreaField, TextField,
};
pub use data_display::{Badge, DataTable, Heading, Panel, TableColumn, Text};
pub use date_picker::{CalendarMetrics, RangeCalendar};
pub use feedback::{Alert, Loading, Toast};
pub use layout::{AppShell, Cluster, Stack};
pub use navigation::{Pagination, SideNav, SideNavItem};
pub use overlays::{FormModal, MenuItem, MenuSurface, Modal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button color variants.
pub enum ButtonVariant {
    /// Filled brand action.
    Main,
    /// Darker secondary action.
    Sub1,
    /// Light neutral action.
    Sub2,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Main
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Sub1 => "sub1",
            Self::Sub2 => "sub2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared control sizing tokens.
pub enum ControlSize {
    /// Dense control.
    Sm,
    /// Default control.
    Md,
    /// Large control.
    Lg,
}

impl Default for ControlSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ControlSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Icon size paired with a control of this size: 16, 20, or 24 pixels.
    pub fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Sm,
            Self::Md => IconSize::Md,
            Self::Lg => IconSize::Lg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pagination button sizing.
pub enum PaginationSize {
    /// 28px buttons.
    Sm,
    /// 32px buttons.
    Md,
}

impl Default for PaginationSize {
    fn default() -> Self {
        Self::Md
    }
}

impl PaginationSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }

    pub(crate) fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Xs,
            Self::Md => IconSize::Sm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic tone shared by alerts and toasts.
pub enum FeedbackTone {
    /// Neutral information.
    Info,
    /// Completed action.
    Success,
    /// Needs attention.
    Warning,
    /// Failed action.
    Error,
}

impl Default for FeedbackTone {
    fn default() -> Self {
        Self::Info
    }
}

impl FeedbackTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Icon drawn next to a message of this tone.
    pub fn icon(self) -> IconName {
        match self {
            Self::Info => IconName::Info,
            Self::Success => IconName::CheckCircle,
            Self::Warning => IconName::Warning,
            Self::Error => IconName::ErrorCircle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side of the trigger a popup opens on.
pub enum PopupPlacement {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

impl Default for PopupPlacement {
    fn default() -> Self {
        Self::Bottom
    }
}

impl PopupPlacement {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Number of action buttons in a dialog footer.
pub enum DialogButtons {
    /// No footer.
    None,
    /// Primary action only.
    Single,
    /// Secondary followed by primary.
    Pair,
}

impl Default for DialogButtons {
    fn default() -> Self {
        Self::Pair
    }
}

impl DialogButtons {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Single => "1",
            Self::Pair => "2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Header layout for [`FormModal`].
pub enum DialogHeader {
    /// Centered title and description.
    Center,
    /// Left-aligned title and description.
    Left,
    /// No title block; the close icon may still show.
    None,
}

impl Default for DialogHeader {
    fn default() -> Self {
        Self::Center
    }
}

impl DialogHeader {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native input types supported by [`TextField`].
pub enum InputType {
    /// Plain text.
    Text,
    /// Masked password.
    Password,
    /// Email address.
    Email,
    /// Numeric entry.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
    /// Search query.
    Search,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Border state of a text input.
pub enum FieldStatus {
    /// Resting border.
    Idle,
    /// Input has focus.
    Focused,
    /// Validated input.
    Success,
    /// Invalid input.
    Error,
}

impl FieldStatus {
    /// Resolves the status shown for the given flags; error wins over success, and both win
    /// over focus.
    pub fn resolve(error: bool, success: bool, focused: bool) -> Self {
        if error {
            Self::Error
        } else if success {
            Self::Success
        } else if focused {
            Self::Focused
        } else {
            Self::Idle
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Focused => "focused",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal alignment of a table column.
pub enum ColumnAlign {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

impl Default for ColumnAlign {
    fn default() -> Self {
        Self::Left
    }
}

impl ColumnAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Monospace/code text.
    Code,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Body
    }
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Muted text.
    Secondary,
    /// Brand-colored text.
    Accent,
    /// Destructive or failing text.
    Danger,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for LayoutPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cross-axis alignment for layout containers.
pub enum LayoutAlign {
    /// Fill the cross axis.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl Default for LayoutAlign {
    fn default() -> Self {
        Self::Stretch
    }
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Main-axis distribution for layout containers and dialog footers.
pub enum LayoutJustify {
    /// Pack at the start (left).
    Start,
    /// Pack in the center.
    Center,
    /// Space between items.
    Between,
    /// Pack at the end (right).
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Returns `true` when `ev` targets a node outside the element behind `root`.
///
/// An unmounted root counts as "not outside" so a late event never closes a popup that is
/// already gone.
pub(crate) fn event_is_outside(root: NodeRef<html::Div>, ev: &web_sys::Event) -> bool {
    let Some(root) = root.get_untracked() else {
        return false;
    };
    let target = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
    !root.contains(target.as_ref())
}

#[component]
/// Window listeners that dismiss an open popup.
///
/// Render inside the popup's `Show` so the listeners exist only while it is open; they are
/// removed when the owner is disposed. A pointer-down outside `root` dismisses, and so does
/// Escape when `escape` is set.
pub(crate) fn DismissListeners(
    root: NodeRef<html::Div>,
    on_dismiss: Callback<()>,
    #[prop(optional)] escape: bool,
) -> impl IntoView {
    let pointer = window_event_listener(ev::pointerdown, move |ev| {
        if event_is_outside(root, &ev) {
            on_dismiss.call(());
        }
    });
    let keys = escape.then(|| {
        window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                on_dismiss.call(());
            }
        })
    });
    on_cleanup(move || {
        pointer.remove();
        if let Some(keys) = keys {
            keys.remove();
        }
    });
}

#[component]
/// Escape-key listener for overlays that handle pointer dismissal on their own backdrop.
pub(crate) fn EscapeListener(on_escape: Callback<()>) -> impl IntoView {
    let keys = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_escape.call(());
        }
    });
    on_cleanup(move || keys.remove());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_status_precedence() {
        assert_eq!(FieldStatus::resolve(true, true, true), FieldStatus::Error);
        assert_eq!(FieldStatus::resolve(false, true, true), FieldStatus::Success);
        assert_eq!(FieldStatus::resolve(false, false, true), FieldStatus::Focused);
        assert_eq!(FieldStatus::resolve(false, false, false), FieldStatus::Idle);
        assert_eq!(FieldStatus::resolve(true, false, false).token(), "error");
    }

    #[test]
    fn control_sizes_pick_matching_icons() {
        assert_eq!(ControlSize::Sm.icon_size().pixels(), 16);
        assert_eq!(ControlSize::Md.icon_size().pixels(), 20);
        assert_eq!(ControlSize::Lg.icon_size().pixels(), 24);
        assert_eq!(ControlSize::default(), ControlSize::Md);
    }

    #[test]
    fn feedback_tones_map_to_icons() {
        assert_eq!(FeedbackTone::Info.icon(), IconName::Info);
        assert_eq!(FeedbackTone::Success.icon(), IconName::CheckCircle);
        assert_eq!(FeedbackTone::Warning.icon(), IconName::Warning);
        assert_eq!(FeedbackTone::Error.icon(), IconName::ErrorCircle);
    }

    #[test]
    fn layout_class_merging() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("wide")),
            "ui-button wide"
        );
    }

    #[test]
    fn defaults_follow_component_contracts() {
        assert_eq!(PopupPlacement::default(), PopupPlacement::Bottom);
        assert_eq!(DialogButtons::default(), DialogButtons::Pair);
        assert_eq!(DialogHeader::default(), DialogHeader::Center);
        assert_eq!(PaginationSize::default().token(), "md");
    }
}
