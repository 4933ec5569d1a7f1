//! Shared control, data-display, navigation, and data-table primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use ui_core_headless::variants::{
    badge_classes, button_classes, cn, input_classes, pagination_classes, VariantAxis,
};
use ui_core_headless::{
    BadgeVariant, ButtonSize, ButtonVariant, ControlSize, InputVariant, PageWindowEntry,
    PaginationState,
};

use crate::{use_ui_config, Icon, IconName, IconSize};

mod controls;
mod data_display;
mod data_table;
mod navigation;

pub use controls::{Button, TextField};
pub use data_display::Badge;
pub use data_table::DataTable;
pub use navigation::Pagination;

/// Joins the primitive's marker class, its resolved variant classes, and an optional
/// caller-supplied layout class.
pub(crate) fn merge_layout_class(
    base: &str,
    resolved: &str,
    layout_class: Option<&'static str>,
) -> String {
    cn([base, resolved, layout_class.unwrap_or_default()])
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_after_resolved_classes() {
        assert_eq!(
            merge_layout_class("ui-badge", "inline-flex border", Some("ml-2")),
            "ui-badge inline-flex border ml-2"
        );
        assert_eq!(merge_layout_class("ui-nav", "", None), "ui-nav");
        assert_eq!(merge_layout_class("ui-nav", "", Some("")), "ui-nav");
    }

    #[test]
    fn bool_tokens_are_lowercase() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
