//! Headless data-table state: global search, single-column sorting, pagination, and row
//! selection over arbitrary row data.
//!
//! [`DataTableModel`] owns the column definitions, the source rows, and a serializable
//! [`TableState`]. Row identity is the row's index in the source data, so selections survive
//! filtering, sorting, and page changes.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pagination::{self, PageWindowEntry, PaginationState};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

type Accessor<T> = Rc<dyn Fn(&T) -> String>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by rejected [`DataTableModel`] operations.
pub enum TableError {
    /// No column uses the requested id.
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
    /// The column exists but cannot be sorted.
    #[error("column `{0}` is not sortable")]
    ColumnNotSortable(String),
    /// Page sizes must be at least 1.
    #[error("page size must be at least 1")]
    InvalidPageSize,
    /// No source row uses the requested id.
    #[error("unknown row {0}")]
    UnknownRow(usize),
}

/// Column definition for a [`DataTableModel`].
///
/// Columns with an accessor produce a cell value, participate in search, and are sortable by
/// default. Display-only columns (no accessor) render an empty cell and never sort or filter.
pub struct ColumnDef<T> {
    id: String,
    header: Option<String>,
    accessor: Option<Accessor<T>>,
    enable_sorting: bool,
    enable_global_filter: bool,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            enable_sorting: self.enable_sorting,
            enable_global_filter: self.enable_global_filter,
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("has_accessor", &self.accessor.is_some())
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_global_filter", &self.enable_global_filter)
            .finish()
    }
}

impl<T> ColumnDef<T> {
    /// Creates a data column whose cell text is produced by `accessor`.
    pub fn accessor(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> String + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: Some(header.into()),
            accessor: Some(Rc::new(accessor)),
            enable_sorting: true,
            enable_global_filter: true,
        }
    }

    /// Creates a display-only column with a placeholder header.
    pub fn display(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: None,
            accessor: None,
            enable_sorting: false,
            enable_global_filter: false,
        }
    }

    /// Sets the header label.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Enables or disables sorting. Ignored for display-only columns.
    pub fn sortable(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    /// Includes or excludes the column from global search.
    pub fn filterable(mut self, enabled: bool) -> Self {
        self.enable_global_filter = enabled;
        self
    }

    /// Column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header label, `None` for placeholder headers.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Whether the column can be sorted.
    pub fn can_sort(&self) -> bool {
        self.enable_sorting && self.accessor.is_some()
    }

    /// Whether the column takes part in global search.
    pub fn can_filter(&self) -> bool {
        self.enable_global_filter && self.accessor.is_some()
    }

    /// Cell text for `row`, `None` for display-only columns.
    pub fn value(&self, row: &T) -> Option<String> {
        self.accessor.as_ref().map(|accessor| accessor(row))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Sort direction for the active sort column.
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Value for the `aria-sort` attribute.
    pub fn aria_sort(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Sorted column id.
    pub column_id: String,
    /// Sort direction.
    pub direction: SortDirection,
}

/// Pagination position, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Current page index.
    #[serde(default)]
    pub page_index: usize,
    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Serializable interaction state of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
    /// Global search text.
    pub global_filter: String,
    /// Active sort, if any.
    pub sorting: Option<SortState>,
    /// Pagination position.
    pub pagination: PageState,
    /// Selected row ids.
    pub selected: BTreeSet<usize>,
}

/// Header cell description for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell<'a> {
    /// Column id.
    pub column_id: &'a str,
    /// Header label, `None` for placeholders.
    pub label: Option<&'a str>,
    /// Whether clicking the header toggles sorting.
    pub can_sort: bool,
    /// Current sort direction of this column.
    pub sorted: Option<SortDirection>,
}

/// A row visible on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRef<'a, T> {
    /// Row id (index in the source data).
    pub id: usize,
    /// Source row.
    pub row: &'a T,
    /// Whether the row is selected.
    pub selected: bool,
}

/// Table state machine over a set of columns and rows.
#[derive(Debug)]
pub struct DataTableModel<T> {
    columns: Vec<ColumnDef<T>>,
    rows: Vec<T>,
    state: TableState,
}

impl<T: Clone> Clone for DataTableModel<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T> DataTableModel<T> {
    /// Creates a model with default state.
    pub fn new(columns: Vec<ColumnDef<T>>, rows: Vec<T>) -> Self {
        Self {
            columns,
            rows,
            state: TableState::default(),
        }
    }

    /// Replaces the interaction state, repairing values that no longer fit the data.
    ///
    /// A zero page size falls back to [`DEFAULT_PAGE_SIZE`], a sort on a missing or unsortable
    /// column is dropped, selections of missing rows are discarded, and the page index is
    /// clamped.
    pub fn with_state(mut self, mut state: TableState) -> Self {
        if state.pagination.page_size == 0 {
            state.pagination.page_size = DEFAULT_PAGE_SIZE;
        }
        let sort_is_valid = state.sorting.as_ref().map_or(true, |sorting| {
            self.column(&sorting.column_id)
                .is_some_and(ColumnDef::can_sort)
        });
        if !sort_is_valid {
            state.sorting = None;
        }
        let row_count = self.rows.len();
        state.selected.retain(|id| *id < row_count);
        self.state = state;
        self.clamp_page_index();
        self
    }

    /// Builder form of [`DataTableModel::set_page_size`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidPageSize`] for a zero page size.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, TableError> {
        self.set_page_size(page_size)?;
        Ok(self)
    }

    /// Column definitions.
    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    /// Source rows.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Current interaction state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    fn column(&self, column_id: &str) -> Option<&ColumnDef<T>> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    /// Replaces the source rows, dropping selections of rows that no longer exist.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        let row_count = self.rows.len();
        self.state.selected.retain(|id| *id < row_count);
        self.clamp_page_index();
    }

    /// Current global search text.
    pub fn global_filter(&self) -> &str {
        &self.state.global_filter
    }

    /// Sets the global search text and returns to the first page.
    pub fn set_global_filter(&mut self, filter: impl Into<String>) {
        self.state.global_filter = filter.into();
        self.state.pagination.page_index = 0;
    }

    fn matches_filter(&self, row: &T, needle: &str) -> bool {
        needle.is_empty()
            || self
                .columns
                .iter()
                .filter(|column| column.can_filter())
                .filter_map(|column| column.value(row))
                .any(|value| value.to_lowercase().contains(needle))
    }

    /// Row ids that pass the global filter, in sorted order.
    fn ordered_ids(&self) -> Vec<usize> {
        let needle = self.state.global_filter.trim().to_lowercase();
        let mut ids: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.matches_filter(row, &needle))
            .map(|(id, _)| id)
            .collect();

        let sort_column = self.state.sorting.as_ref().and_then(|sorting| {
            self.column(&sorting.column_id)
                .filter(|column| column.can_sort())
                .map(|column| (column, sorting.direction))
        });
        if let Some((column, direction)) = sort_column {
            let mut keyed: Vec<(usize, String)> = ids
                .into_iter()
                .map(|id| (id, column.value(&self.rows[id]).unwrap_or_default()))
                .collect();
            keyed.sort_by(|(_, a), (_, b)| {
                let ordering = compare_cell_values(a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
            ids = keyed.into_iter().map(|(id, _)| id).collect();
        }

        ids
    }

    /// Number of rows passing the global filter.
    pub fn filtered_row_count(&self) -> usize {
        let needle = self.state.global_filter.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| self.matches_filter(row, &needle))
            .count()
    }

    /// Active sort, if any.
    pub fn sorting(&self) -> Option<&SortState> {
        self.state.sorting.as_ref()
    }

    /// Cycles sorting on `column_id`: none, ascending, descending, none. Sorting a different
    /// column starts at ascending.
    ///
    /// Returns the new direction for the column.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownColumn`] or [`TableError::ColumnNotSortable`].
    pub fn toggle_sorting(&mut self, column_id: &str) -> Result<Option<SortDirection>, TableError> {
        let column = self
            .column(column_id)
            .ok_or_else(|| TableError::UnknownColumn(column_id.to_string()))?;
        if !column.can_sort() {
            return Err(TableError::ColumnNotSortable(column_id.to_string()));
        }

        let next = match &self.state.sorting {
            Some(sorting) if sorting.column_id == column_id => match sorting.direction {
                SortDirection::Ascending => Some(SortDirection::Descending),
                SortDirection::Descending => None,
            },
            _ => Some(SortDirection::Ascending),
        };
        self.state.sorting = next.map(|direction| SortState {
            column_id: column_id.to_string(),
            direction,
        });
        Ok(next)
    }

    /// Removes any active sort.
    pub fn clear_sorting(&mut self) {
        self.state.sorting = None;
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.state.pagination.page_size
    }

    /// Current page index, 0-based.
    pub fn page_index(&self) -> usize {
        self.state.pagination.page_index
    }

    /// Number of pages for the filtered rows, at least 1.
    pub fn page_count(&self) -> usize {
        pagination::page_count(self.filtered_row_count(), self.page_size())
    }

    fn clamp_page_index(&mut self) {
        let last = self.page_count() - 1;
        if self.state.pagination.page_index > last {
            self.state.pagination.page_index = last;
        }
    }

    /// Moves to `page_index`, clamped to the available pages.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.state.pagination.page_index = page_index;
        self.clamp_page_index();
    }

    /// Changes the page size, keeping the first visible row on the new page.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidPageSize`] for a zero page size.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), TableError> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        let top_row = self.state.pagination.page_index * self.state.pagination.page_size;
        self.state.pagination = PageState {
            page_index: top_row / page_size,
            page_size,
        };
        self.clamp_page_index();
        Ok(())
    }

    /// Whether a previous page exists.
    pub fn can_previous_page(&self) -> bool {
        self.page_index() > 0
    }

    /// Whether a next page exists.
    pub fn can_next_page(&self) -> bool {
        self.page_index() + 1 < self.page_count()
    }

    /// Moves back one page. Returns `false` when already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous_page() {
            return false;
        }
        self.state.pagination.page_index -= 1;
        true
    }

    /// Moves forward one page. Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            return false;
        }
        self.state.pagination.page_index += 1;
        true
    }

    /// Pagination inputs for the page-window calculator (1-based pages).
    pub fn pagination_state(&self, max_visible: usize) -> PaginationState {
        PaginationState::new(self.page_index() + 1, self.page_count())
            .with_max_visible(max_visible)
    }

    /// Visible page window around the current page.
    pub fn page_window(&self, max_visible: usize) -> Vec<PageWindowEntry> {
        self.pagination_state(max_visible).visible_pages()
    }

    /// Rows on the current page after filtering and sorting.
    pub fn row_model(&self) -> Vec<RowRef<'_, T>> {
        let size = self.page_size();
        self.ordered_ids()
            .into_iter()
            .skip(self.page_index() * size)
            .take(size)
            .map(|id| RowRef {
                id,
                row: &self.rows[id],
                selected: self.state.selected.contains(&id),
            })
            .collect()
    }

    /// Header cells in column order, including placeholders.
    pub fn headers(&self) -> Vec<HeaderCell<'_>> {
        self.columns
            .iter()
            .map(|column| HeaderCell {
                column_id: &column.id,
                label: column.header(),
                can_sort: column.can_sort(),
                sorted: self
                    .state
                    .sorting
                    .as_ref()
                    .filter(|sorting| sorting.column_id == column.id)
                    .map(|sorting| sorting.direction),
            })
            .collect()
    }

    /// Toggles selection of the row with `id`. Returns the new selection flag.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownRow`] when `id` is not a source row.
    pub fn toggle_row_selected(&mut self, id: usize) -> Result<bool, TableError> {
        if id >= self.rows.len() {
            return Err(TableError::UnknownRow(id));
        }
        if self.state.selected.remove(&id) {
            Ok(false)
        } else {
            self.state.selected.insert(id);
            Ok(true)
        }
    }

    /// Whether the row with `id` is selected.
    pub fn is_row_selected(&self, id: usize) -> bool {
        self.state.selected.contains(&id)
    }

    /// Whether every row on the current page is selected.
    pub fn is_page_selected(&self) -> bool {
        let page = self.row_model();
        !page.is_empty() && page.iter().all(|row| row.selected)
    }

    /// Selects every row on the current page, or clears them when all are already selected.
    /// Returns whether the page ends up selected.
    pub fn toggle_page_selected(&mut self) -> bool {
        let select = !self.is_page_selected();
        let ids: Vec<usize> = self.row_model().iter().map(|row| row.id).collect();
        for id in ids {
            if select {
                self.state.selected.insert(id);
            } else {
                self.state.selected.remove(&id);
            }
        }
        self.is_page_selected()
    }

    /// Number of selected rows that pass the global filter.
    pub fn selected_count(&self) -> usize {
        let needle = self.state.global_filter.trim().to_lowercase();
        self.state
            .selected
            .iter()
            .filter(|id| {
                self.rows
                    .get(**id)
                    .is_some_and(|row| self.matches_filter(row, &needle))
            })
            .count()
    }

    /// Footer text, for example `0 of 3 row(s) selected.`.
    pub fn selection_summary(&self) -> String {
        format!(
            "{} of {} row(s) selected.",
            self.selected_count(),
            self.filtered_row_count()
        )
    }
}

/// Orders numeric cells before text cells. Numbers compare by value and text compares
/// case-insensitively; the raw text breaks remaining ties so the order stays total.
fn compare_cell_values(a: &str, b: &str) -> Ordering {
    let ordering = match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    ordering.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: String,
        email: String,
        age: u32,
    }

    fn user(name: &str, email: &str, age: u32) -> User {
        User {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    fn columns() -> Vec<ColumnDef<User>> {
        vec![
            ColumnDef::accessor("name", "Name", |row: &User| row.name.clone()),
            ColumnDef::accessor("email", "Email", |row: &User| row.email.clone()),
            ColumnDef::accessor("age", "Age", |row: &User| row.age.to_string()).filterable(false),
            ColumnDef::display("actions"),
        ]
    }

    fn sample() -> DataTableModel<User> {
        DataTableModel::new(
            columns(),
            vec![
                user("John Doe", "john@example.com", 41),
                user("Jane Smith", "jane@example.com", 9),
                user("Bob Johnson", "bob@example.com", 120),
            ],
        )
    }

    fn many(count: usize) -> DataTableModel<User> {
        DataTableModel::new(
            columns(),
            (0..count)
                .map(|index| {
                    user(
                        &format!("User {index}"),
                        &format!("user{index}@example.com"),
                        index as u32,
                    )
                })
                .collect(),
        )
    }

    fn names(model: &DataTableModel<User>) -> Vec<String> {
        model
            .row_model()
            .iter()
            .map(|row| row.row.name.clone())
            .collect()
    }

    #[test]
    fn renders_all_rows_with_default_state() {
        let model = sample();
        assert_eq!(names(&model), vec!["John Doe", "Jane Smith", "Bob Johnson"]);
        assert_eq!(model.page_count(), 1);
        assert!(!model.can_previous_page());
        assert!(!model.can_next_page());
        assert_eq!(model.selection_summary(), "0 of 3 row(s) selected.");
    }

    #[test]
    fn headers_include_placeholder_columns() {
        let model = sample();
        let headers = model.headers();
        assert_eq!(headers.len(), 4);
        assert_eq!(headers[0].label, Some("Name"));
        assert_eq!(headers[3].label, None);
        assert!(!headers[3].can_sort);
    }

    #[test]
    fn global_filter_is_case_insensitive_and_resets_page() {
        let mut model = many(25);
        model.set_page_index(2);
        model.set_global_filter("USER1");
        assert_eq!(model.page_index(), 0);
        assert_eq!(model.filtered_row_count(), 11);

        model.set_global_filter("jane");
        assert_eq!(model.filtered_row_count(), 0);
        assert!(model.row_model().is_empty());
        assert_eq!(model.page_count(), 1);
    }

    #[test]
    fn global_filter_matches_any_filterable_column() {
        let mut model = sample();
        model.set_global_filter("bob@");
        assert_eq!(names(&model), vec!["Bob Johnson"]);

        model.set_global_filter("41");
        assert!(model.row_model().is_empty(), "age column is not filterable");

        model.set_global_filter("   ");
        assert_eq!(model.filtered_row_count(), 3);
    }

    #[test]
    fn sorting_cycles_through_directions() {
        let mut model = sample();
        assert_eq!(
            model.toggle_sorting("name"),
            Ok(Some(SortDirection::Ascending))
        );
        assert_eq!(names(&model), vec!["Bob Johnson", "Jane Smith", "John Doe"]);

        assert_eq!(
            model.toggle_sorting("name"),
            Ok(Some(SortDirection::Descending))
        );
        assert_eq!(names(&model), vec!["John Doe", "Jane Smith", "Bob Johnson"]);

        assert_eq!(model.toggle_sorting("name"), Ok(None));
        assert_eq!(model.sorting(), None);
        assert_eq!(names(&model), vec!["John Doe", "Jane Smith", "Bob Johnson"]);
    }

    #[test]
    fn switching_sort_column_starts_ascending() {
        let mut model = sample();
        model.toggle_sorting("name").expect("sort name");
        model.toggle_sorting("name").expect("sort name desc");
        assert_eq!(
            model.toggle_sorting("age"),
            Ok(Some(SortDirection::Ascending))
        );
        assert_eq!(names(&model), vec!["Jane Smith", "John Doe", "Bob Johnson"]);
        assert_eq!(model.headers()[2].sorted, Some(SortDirection::Ascending));
        assert_eq!(model.headers()[0].sorted, None);
    }

    #[test]
    fn sorting_rejects_unknown_and_display_columns() {
        let mut model = sample();
        assert_eq!(
            model.toggle_sorting("missing"),
            Err(TableError::UnknownColumn("missing".to_string()))
        );
        assert_eq!(
            model.toggle_sorting("actions"),
            Err(TableError::ColumnNotSortable("actions".to_string()))
        );
    }

    #[test]
    fn pagination_walks_pages_and_stops_at_edges() {
        let mut model = many(20);
        assert_eq!(model.page_count(), 2);
        assert!(!model.previous_page());
        assert!(model.next_page());
        assert_eq!(model.page_index(), 1);
        assert_eq!(names(&model).first().map(String::as_str), Some("User 10"));
        assert!(!model.next_page());
        assert!(model.previous_page());
        assert!(!model.can_previous_page());
    }

    #[test]
    fn rows_fitting_one_page_disable_next() {
        let model = many(5);
        assert!(!model.can_next_page());
        assert_eq!(model.row_model().len(), 5);
    }

    #[test]
    fn set_page_index_clamps_to_last_page() {
        let mut model = many(25);
        model.set_page_index(99);
        assert_eq!(model.page_index(), 2);
        assert_eq!(model.row_model().len(), 5);
    }

    #[test]
    fn page_size_change_keeps_top_row_visible() {
        let mut model = many(50);
        model.set_page_index(3);
        model.set_page_size(25).expect("page size");
        assert_eq!(model.page_index(), 1);
        assert_eq!(names(&model).first().map(String::as_str), Some("User 25"));
        assert_eq!(model.set_page_size(0), Err(TableError::InvalidPageSize));
    }

    #[test]
    fn page_window_uses_one_based_pages() {
        let mut model = many(100);
        model.set_page_index(4);
        assert_eq!(
            model.page_window(5),
            vec![
                PageWindowEntry::Page(1),
                PageWindowEntry::Ellipsis,
                PageWindowEntry::Page(3),
                PageWindowEntry::Page(4),
                PageWindowEntry::Page(5),
                PageWindowEntry::Page(6),
                PageWindowEntry::Page(7),
                PageWindowEntry::Ellipsis,
                PageWindowEntry::Page(10),
            ]
        );
    }

    #[test]
    fn selection_survives_sorting_and_counts_filtered_rows() {
        let mut model = sample();
        assert_eq!(model.toggle_row_selected(1), Ok(true));
        model.toggle_sorting("name").expect("sort");
        assert!(model.row_model()[1].selected);
        assert_eq!(model.selection_summary(), "1 of 3 row(s) selected.");

        model.set_global_filter("bob");
        assert_eq!(model.selection_summary(), "0 of 1 row(s) selected.");
        assert_eq!(model.toggle_row_selected(7), Err(TableError::UnknownRow(7)));
    }

    #[test]
    fn toggle_page_selection_selects_then_clears() {
        let mut model = many(15);
        assert!(model.toggle_page_selected());
        assert_eq!(model.selected_count(), 10);
        assert!(model.is_page_selected());
        assert!(!model.toggle_page_selected());
        assert_eq!(model.selected_count(), 0);
    }

    #[test]
    fn set_rows_drops_missing_selections_and_clamps_page() {
        let mut model = many(30);
        model.set_page_index(2);
        model.toggle_row_selected(25).expect("select");
        model.toggle_row_selected(3).expect("select");
        model.set_rows((0..12).map(|i| user(&format!("U{i}"), "u@x", 1)).collect());
        assert_eq!(model.page_index(), 1);
        assert_eq!(model.state().selected, BTreeSet::from([3]));
    }

    #[test]
    fn restored_state_is_repaired() {
        let state: TableState = serde_json::from_str(
            r#"{
                "global_filter": "",
                "sorting": { "column_id": "actions", "direction": "descending" },
                "pagination": { "page_index": 9, "page_size": 0 },
                "selected": [0, 44]
            }"#,
        )
        .expect("parse state");
        let model = sample().with_state(state);
        assert_eq!(model.sorting(), None);
        assert_eq!(model.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(model.page_index(), 0);
        assert_eq!(model.state().selected, BTreeSet::from([0]));
    }

    #[test]
    fn numeric_cells_sort_by_value() {
        assert_eq!(compare_cell_values("9", "120"), Ordering::Less);
        assert_eq!(compare_cell_values("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_cell_values("a", "A"), Ordering::Greater);
        assert_eq!(compare_cell_values("1", "1.0"), Ordering::Less);
    }

    #[test]
    fn mixed_cells_sort_numbers_before_text() {
        let cells = ["1a", "10", "beta", "2", "Alpha", "-3", "2x"];
        let mut model = DataTableModel::new(
            vec![ColumnDef::accessor("code", "Code", |row: &&str| row.to_string())],
            cells.to_vec(),
        );
        model.toggle_sorting("code").expect("sort code");
        let sorted: Vec<&str> = model.row_model().into_iter().map(|row| *row.row).collect();
        assert_eq!(sorted, vec!["-3", "2", "10", "1a", "2x", "Alpha", "beta"]);

        model.toggle_sorting("code").expect("sort code desc");
        let sorted: Vec<&str> = model.row_model().into_iter().map(|row| *row.row).collect();
        assert_eq!(sorted, vec!["beta", "Alpha", "2x", "1a", "10", "2", "-3"]);
    }

    proptest! {
        #[test]
        fn cell_order_is_transitive(
            a in "[0-9]{1,2}[a-zA-Z]?",
            b in "[0-9]{1,2}[a-zA-Z]?",
            c in "[0-9]{1,2}[a-zA-Z]?",
        ) {
            let mut cells = [a, b, c];
            cells.sort_by(|x, y| compare_cell_values(x, y));
            prop_assert_ne!(compare_cell_values(&cells[0], &cells[1]), Ordering::Greater);
            prop_assert_ne!(compare_cell_values(&cells[1], &cells[2]), Ordering::Greater);
            prop_assert_ne!(compare_cell_values(&cells[0], &cells[2]), Ordering::Greater);
        }

        #[test]
        fn sorting_mixed_cells_never_panics(
            cells in proptest::collection::vec("[0-9]{1,2}[a-z]?", 0..500),
        ) {
            let mut model = DataTableModel::new(
                vec![ColumnDef::accessor("code", "Code", |row: &String| row.clone())],
                cells.clone(),
            );
            model.set_page_size(cells.len().max(1)).expect("page size");
            model.toggle_sorting("code").expect("sort code");
            let sorted: Vec<&String> = model.row_model().into_iter().map(|row| row.row).collect();
            prop_assert_eq!(sorted.len(), cells.len());
            for pair in sorted.windows(2) {
                prop_assert_ne!(compare_cell_values(pair[0], pair[1]), Ordering::Greater);
            }
        }
    }
}
