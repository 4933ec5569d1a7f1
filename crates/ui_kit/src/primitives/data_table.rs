use ui_core_headless::{ColumnDef, DataTableModel, SortDirection};

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderView {
    column_id: String,
    label: Option<String>,
    can_sort: bool,
    sorted: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BodyRow {
    id: usize,
    selected: bool,
    cells: Vec<String>,
}

fn header_views<T>(model: &DataTableModel<T>) -> Vec<HeaderView> {
    model
        .headers()
        .into_iter()
        .map(|header| HeaderView {
            column_id: header.column_id.to_string(),
            label: header.label.map(str::to_string),
            can_sort: header.can_sort,
            sorted: header.sorted,
        })
        .collect()
}

fn body_rows<T>(model: &DataTableModel<T>) -> Vec<BodyRow> {
    model
        .row_model()
        .into_iter()
        .map(|row| BodyRow {
            id: row.id,
            selected: row.selected,
            cells: model
                .columns()
                .iter()
                .map(|column| column.value(row.row).unwrap_or_default())
                .collect(),
        })
        .collect()
}

fn sort_icon(sorted: Option<SortDirection>) -> IconName {
    match sorted {
        Some(SortDirection::Ascending) => IconName::ArrowUp,
        Some(SortDirection::Descending) => IconName::ArrowDown,
        None => IconName::ArrowUpDown,
    }
}

fn render_header<T: 'static>(header: HeaderView, model: RwSignal<DataTableModel<T>>) -> View {
    let HeaderView {
        column_id,
        label,
        can_sort,
        sorted,
    } = header;
    let aria_sort = sorted.map(SortDirection::aria_sort);

    if !can_sort {
        return view! {
            <th scope="col" class="h-12 px-4 text-left align-middle font-medium" data-ui-slot="header-cell">
                {label}
            </th>
        }
        .into_view();
    }

    view! {
        <th
            scope="col"
            class="h-12 px-4 text-left align-middle font-medium"
            aria-sort=aria_sort
            data-ui-slot="header-cell"
        >
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Sm
                ui_slot="sort-toggle"
                trailing_icon=sort_icon(sorted)
                on_click=Callback::new(move |_| {
                    model.update(|model| {
                        if let Err(err) = model.toggle_sorting(&column_id) {
                            logging::warn!("data table sort rejected: {err}");
                        }
                    });
                })
            >
                {label}
            </Button>
        </th>
    }
    .into_view()
}

fn column_span(column_count: usize, selectable: bool) -> usize {
    (column_count + usize::from(selectable)).max(1)
}

fn toggle_row<T: 'static>(model: RwSignal<DataTableModel<T>>, id: usize) {
    model.update(|model| {
        if let Err(err) = model.toggle_row_selected(id) {
            logging::warn!("data table selection rejected: {err}");
        }
    });
}

fn render_select_all<T: 'static>(model: RwSignal<DataTableModel<T>>) -> View {
    view! {
        <th scope="col" class="h-12 w-10 px-4 align-middle" data-ui-slot="select-all">
            <input
                type="checkbox"
                aria-label="Select all"
                prop:checked=move || model.with(|model| model.is_page_selected())
                on:change=move |_| model.update(|model| {
                    model.toggle_page_selected();
                })
            />
        </th>
    }
    .into_view()
}

fn render_row<T: 'static>(
    row: BodyRow,
    model: RwSignal<DataTableModel<T>>,
    selectable: bool,
) -> View {
    let BodyRow {
        id,
        selected,
        cells,
    } = row;
    view! {
        <tr
            class="border-b transition-colors hover:bg-muted/50 data-[ui-selected=true]:bg-muted"
            data-ui-slot="row"
            data-ui-selected=bool_token(selected)
            aria-selected=selectable.then_some(bool_token(selected))
            on:click=move |_| {
                if selectable {
                    toggle_row(model, id);
                }
            }
        >
            {selectable.then(|| view! {
                <td class="w-10 p-4 align-middle" data-ui-slot="select">
                    <input
                        type="checkbox"
                        aria-label="Select row"
                        prop:checked=selected
                        on:click=move |ev| {
                            ev.stop_propagation();
                            toggle_row(model, id);
                        }
                    />
                </td>
            })}
            {cells
                .into_iter()
                .map(|cell| view! { <td class="p-4 align-middle" data-ui-slot="cell">{cell}</td> })
                .collect_view()}
        </tr>
    }
    .into_view()
}

#[component]
/// Searchable, sortable, paginated table over arbitrary row data.
///
/// Interaction state lives in a headless [`DataTableModel`]; the component only renders it and
/// forwards events. Unset options fall back to the provided [`UiConfig`](crate::UiConfig).
pub fn DataTable<T>(
    columns: Vec<ColumnDef<T>>,
    #[prop(into)] rows: MaybeSignal<Vec<T>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] searchable: Option<bool>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(optional)] pagination: Option<bool>,
    #[prop(optional)] page_size: Option<usize>,
    #[prop(optional)] selectable: bool,
    #[prop(optional, into)] empty_message: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView
where
    T: Clone + 'static,
{
    let defaults = use_ui_config().table;
    let searchable = searchable.unwrap_or(defaults.searchable);
    let search_placeholder = search_placeholder.unwrap_or(defaults.search_placeholder);
    let show_pagination = pagination.unwrap_or(defaults.pagination);
    let page_size = page_size.unwrap_or(defaults.page_size);
    let empty_message = empty_message.unwrap_or(defaults.empty_message);
    let colspan = column_span(columns.len(), selectable);

    let mut initial = DataTableModel::new(columns, rows.get_untracked());
    if let Err(err) = initial.set_page_size(page_size) {
        logging::warn!("data table page size rejected: {err}");
    }
    let model = create_rw_signal(initial);
    create_effect(move |_| {
        let next = rows.get();
        model.update(|model| model.set_rows(next));
    });

    let toolbar = searchable.then(|| {
        view! {
            <div class="flex items-center gap-2 py-4" data-ui-slot="toolbar">
                <Icon icon=IconName::Search size=IconSize::Sm layout_class="text-muted-foreground" />
                <TextField
                    layout_class="max-w-sm"
                    ui_slot="search"
                    input_type="search"
                    placeholder=search_placeholder.clone()
                    aria_label=search_placeholder
                    value=Signal::derive(move || model.with(|model| model.global_filter().to_string()))
                    on_input=Callback::new(move |ev: web_sys::Event| {
                        let value = event_target_value(&ev);
                        model.update(|model| model.set_global_filter(value));
                    })
                />
            </div>
        }
    });

    let pager = show_pagination.then(|| {
        view! {
            <div class="flex items-center gap-2" data-ui-slot="pager">
                <span class="text-sm text-muted-foreground" data-ui-slot="page-status">
                    {move || model.with(|model| format!("Page {} of {}", model.page_index() + 1, model.page_count()))}
                </span>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    disabled=Signal::derive(move || !model.with(|model| model.can_previous_page()))
                    on_click=Callback::new(move |_| model.update(|model| {
                        model.previous_page();
                    }))
                >
                    "Previous"
                </Button>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    disabled=Signal::derive(move || !model.with(|model| model.can_next_page()))
                    on_click=Callback::new(move |_| model.update(|model| {
                        model.next_page();
                    }))
                >
                    "Next"
                </Button>
            </div>
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-data-table", "w-full", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
        >
            {toolbar}
            <div class="rounded-md border" data-ui-slot="frame">
                <table class="w-full caption-bottom text-sm" aria-label=aria_label>
                    <thead data-ui-slot="header">
                        <tr class="border-b">
                            {selectable.then(|| render_select_all(model))}
                            {move || {
                                model
                                    .with(header_views)
                                    .into_iter()
                                    .map(|header| render_header(header, model))
                                    .collect_view()
                            }}
                        </tr>
                    </thead>
                    <tbody data-ui-slot="body">
                        {move || {
                            let rows = model.with(body_rows);
                            if rows.is_empty() {
                                view! {
                                    <tr data-ui-slot="empty">
                                        <td colspan=colspan class="h-24 text-center">{empty_message.clone()}</td>
                                    </tr>
                                }
                                .into_view()
                            } else {
                                rows.into_iter()
                                    .map(|row| render_row(row, model, selectable))
                                    .collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>
            <div class="flex items-center justify-between py-4" data-ui-slot="footer">
                <span class="text-sm text-muted-foreground" data-ui-slot="selection">
                    {move || model.with(|model| model.selection_summary())}
                </span>
                {pager}
            </div>
        </div>
    }
}
