//! Centralized inline SVG icon set.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons available to the primitives.
pub enum IconName {
    /// Single chevron pointing left.
    ChevronLeft,
    /// Single chevron pointing right.
    ChevronRight,
    /// Double chevron pointing left.
    ChevronsLeft,
    /// Double chevron pointing right.
    ChevronsRight,
    /// Ascending sort indicator.
    ArrowUp,
    /// Descending sort indicator.
    ArrowDown,
    /// Unsorted indicator.
    ArrowUpDown,
    /// Search glass.
    Search,
    /// Spinning progress indicator.
    Spinner,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronsLeft => "chevrons-left",
            Self::ChevronsRight => "chevrons-right",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::ArrowUpDown => "arrow-up-down",
            Self::Search => "search",
            Self::Spinner => "spinner",
        }
    }

    fn body(self) -> &'static str {
        match self {
            Self::ChevronLeft => r#"<path d="m15 18-6-6 6-6"/>"#,
            Self::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Self::ChevronsLeft => r#"<path d="m11 17-5-5 5-5"/><path d="m18 17-5-5 5-5"/>"#,
            Self::ChevronsRight => r#"<path d="m6 17 5-5-5-5"/><path d="m13 17 5-5-5-5"/>"#,
            Self::ArrowUp => r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#,
            Self::ArrowDown => r#"<path d="M12 5v14"/><path d="m19 12-7 7-7-7"/>"#,
            Self::ArrowUpDown => {
                r#"<path d="m21 16-4 4-4-4"/><path d="M17 20V4"/><path d="m3 8 4-4 4 4"/><path d="M7 4v16"/>"#
            }
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Self::Spinner => {
                r#"<circle cx="12" cy="12" r="10" opacity="0.25"/><path d="M4 12a8 8 0 0 1 8-8" opacity="0.75"/>"#
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 16px icon.
    Sm,
    /// 20px icon.
    #[default]
    Md,
    /// 24px icon.
    Lg,
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn px(self) -> u8 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Inline SVG icon, hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = match (icon, layout_class) {
        (IconName::Spinner, Some(layout_class)) => format!("ui-icon animate-spin {layout_class}"),
        (IconName::Spinner, None) => "ui-icon animate-spin".to_string(),
        (_, Some(layout_class)) => format!("ui-icon {layout_class}"),
        (_, None) => "ui-icon".to_string(),
    };
    view! {
        <svg
            class=class
            width=size.px()
            height=size.px()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
            inner_html=icon.body()
        ></svg>
    }
}
