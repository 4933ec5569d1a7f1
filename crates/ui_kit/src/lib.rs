//! Leptos component kit built on the `ui_core_headless` logic crate.
//!
//! The crate owns the rendered primitives (buttons, badges, fields, pagination, data tables),
//! a centralized icon API, and the stable `data-ui-*` DOM contract. Styling is resolved through
//! the headless variant recipes so every primitive emits the same class vocabulary, and
//! component defaults come from a [`UiConfig`] provided through context.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod context;
mod icon;
mod primitives;

pub use context::{load_ui_config, provide_ui_config, use_ui_config};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{Badge, Button, DataTable, Pagination, TextField};
pub use ui_core_headless::{
    BadgeVariant, ButtonSize, ButtonVariant, ColumnDef, ControlSize, InputVariant,
    PageWindowEntry, SortDirection, UiConfig,
};

/// Convenience imports for application crates consuming the component kit.
pub mod prelude {
    pub use crate::{
        load_ui_config, provide_ui_config, use_ui_config, Badge, BadgeVariant, Button,
        ButtonSize, ButtonVariant, ColumnDef, ControlSize, DataTable, Icon, IconName, IconSize,
        InputVariant, Pagination, TextField, UiConfig,
    };
}
