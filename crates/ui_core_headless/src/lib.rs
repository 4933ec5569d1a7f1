//! Headless component logic shared by the `ui_kit` primitives.
//!
//! This crate intentionally carries no DOM or reactivity dependency: page-window computation,
//! variant-to-class resolution, data-table state, and the serialized configuration that feeds
//! component defaults. Every operation is a pure function or a plain state transition so it can
//! be exercised from native tests and reused by any rendering layer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod pagination;
pub mod table;
pub mod variants;

pub use config::{ConfigError, PaginationDefaults, TableDefaults, UiConfig};
pub use pagination::{
    compute_visible_pages, page_count, PageWindowEntry, PaginationError, PaginationState,
    DEFAULT_MAX_VISIBLE,
};
pub use table::{
    ColumnDef, DataTableModel, HeaderCell, PageState, RowRef, SortDirection, SortState,
    TableError, TableState, DEFAULT_PAGE_SIZE,
};
pub use variants::{
    badge_classes, button_classes, cn, input_classes, pagination_classes, BadgeVariant,
    ButtonSize, ButtonVariant, ClassList, ControlSize, InputVariant, VariantAxis, VariantError,
};
