//! Inline SVG icon set shared by the primitives.

use leptos::*;

use crate::primitives::merge_layout_class;

const CIRCLE: &str = "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to components and apps.
pub enum IconName {
    /// House outline.
    Home,
    /// Left-pointing chevron.
    ChevronLeft,
    /// Right-pointing chevron.
    ChevronRight,
    /// Down-pointing chevron.
    ChevronDown,
    /// Arrow pointing right.
    ArrowRight,
    /// Calendar page.
    Calendar,
    /// Close cross.
    Dismiss,
    /// Circled "i".
    Info,
    /// Circled check mark.
    CheckCircle,
    /// Triangle with exclamation mark.
    Warning,
    /// Circled exclamation mark.
    ErrorCircle,
    /// Magnifying glass.
    Search,
    /// Open eye.
    Eye,
    /// Envelope.
    Mail,
    /// Plus sign.
    Plus,
    /// Terminal prompt.
    Terminal,
}

impl IconName {
    /// Every icon, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Home,
        Self::ChevronLeft,
        Self::ChevronRight,
        Self::ChevronDown,
        Self::ArrowRight,
        Self::Calendar,
        Self::Dismiss,
        Self::Info,
        Self::CheckCircle,
        Self::Warning,
        Self::ErrorCircle,
        Self::Search,
        Self::Eye,
        Self::Mail,
        Self::Plus,
        Self::Terminal,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::ArrowRight => "arrow-right",
            Self::Calendar => "calendar",
            Self::Dismiss => "dismiss",
            Self::Info => "info",
            Self::CheckCircle => "check-circle",
            Self::Warning => "warning",
            Self::ErrorCircle => "error-circle",
            Self::Search => "search",
            Self::Eye => "eye",
            Self::Mail => "mail",
            Self::Plus => "plus",
            Self::Terminal => "terminal",
        }
    }

    // 24x24 stroke paths.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Home => &["M3 10.5 12 3l9 7.5", "M5 9.5V21h14V9.5", "M9.5 21v-6h5v6"],
            Self::ChevronLeft => &["m15 18-6-6 6-6"],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
            Self::ChevronDown => &["m6 9 6 6 6-6"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Calendar => &[
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M8 2v4",
                "M16 2v4",
                "M3 10h18",
            ],
            Self::Dismiss => &["M18 6 6 18", "m6 6 12 12"],
            Self::Info => &[CIRCLE, "M12 16v-4", "M12 8h.01"],
            Self::CheckCircle => &[CIRCLE, "m9 12 2 2 4-4"],
            Self::Warning => &[
                "M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z",
                "M12 9v4",
                "M12 17h.01",
            ],
            Self::ErrorCircle => &[CIRCLE, "M12 8v4", "M12 16h.01"],
            Self::Search => &["M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0z", "m21 21-4.3-4.3"],
            Self::Eye => &[
                "M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7S2 12 2 12z",
                "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            Self::Plus => &["M12 5v14", "M5 12h14"],
            Self::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rendered icon edge length.
pub enum IconSize {
    /// 14px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    /// Edge length in CSS pixels.
    pub fn pixels(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Decorative inline SVG icon. Hidden from assistive technology; label the owning control
/// instead.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let pixels = size.pixels();
    let paths = icon
        .paths()
        .iter()
        .map(|d| view! { <path d=*d></path> })
        .collect_view();

    view! {
        <svg
            class=merge_layout_class("ui-icon", layout_class)
            width=pixels
            height=pixels
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-slot=ui_slot
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {paths}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn every_icon_has_paths_and_a_unique_token() {
        let mut tokens = HashSet::new();
        for icon in IconName::ALL {
            assert!(!icon.paths().is_empty(), "{icon:?} has no paths");
            assert!(tokens.insert(icon.token()), "duplicate token for {icon:?}");
        }
        assert_eq!(tokens.len(), IconName::ALL.len());
    }

    #[test]
    fn sizes_in_pixels() {
        assert_eq!(
            [IconSize::Xs, IconSize::Sm, IconSize::Md, IconSize::Lg].map(IconSize::pixels),
            [14, 16, 20, 24]
        );
    }
}
