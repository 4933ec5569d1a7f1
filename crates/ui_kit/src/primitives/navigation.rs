use super::*;

/// Variant for a numbered page button.
fn page_button_variant(page: usize, current_page: usize) -> ButtonVariant {
    if page == current_page {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    }
}

fn page_item(entry: PageWindowEntry, current_page: usize, on_page_change: Callback<usize>) -> View {
    match entry {
        PageWindowEntry::Ellipsis => view! {
            <li data-ui-slot="ellipsis">
                <span class="px-3 py-2 text-muted-foreground" aria-hidden="true">"..."</span>
            </li>
        }
        .into_view(),
        PageWindowEntry::Page(page) => view! {
            <li data-ui-slot="page">
                <Button
                    variant=page_button_variant(page, current_page)
                    aria_label=format!("Page {page}")
                    aria_current=(page == current_page).then_some("page")
                    on_click=Callback::new(move |_| on_page_change.call(page))
                >
                    {page}
                </Button>
            </li>
        }
        .into_view(),
    }
}

#[component]
/// Page navigation with previous/next controls, optional first/last controls, and a
/// windowed run of page buttons separated by ellipses.
///
/// `current_page` and `total_pages` are 1-indexed. Out-of-range values are clamped (and logged)
/// before rendering, so the current page is always shown and boundary controls disable
/// correctly. Unset options fall back to the provided [`UiConfig`](crate::UiConfig).
pub fn Pagination(
    #[prop(into)] current_page: MaybeSignal<usize>,
    #[prop(into)] total_pages: MaybeSignal<usize>,
    #[prop(into)] on_page_change: Callback<usize>,
    #[prop(optional)] max_visible: Option<usize>,
    #[prop(optional)] show_first_last: Option<bool>,
    #[prop(optional)] size: Option<ControlSize>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let defaults = use_ui_config().pagination;
    let max_visible = max_visible.unwrap_or(defaults.max_visible);
    let show_first_last = show_first_last.unwrap_or(defaults.show_first_last);
    let size = size.unwrap_or(defaults.size);

    let state = create_memo(move |_| {
        let state = PaginationState::new(current_page.get(), total_pages.get())
            .with_max_visible(max_visible);
        if let Err(err) = state.validate() {
            logging::warn!("pagination input clamped: {err}");
        }
        state.normalized()
    });
    let previous_disabled = Signal::derive(move || state.get().is_previous_disabled());
    let next_disabled = Signal::derive(move || state.get().is_next_disabled());
    let go_to = move |target: Option<usize>| {
        if let Some(page) = target {
            on_page_change.call(page);
        }
    };

    view! {
        <nav
            class=merge_layout_class("ui-pagination", "flex items-center justify-center gap-1", layout_class)
            aria-label="Pagination"
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-size=size.token()
        >
            <ul class=pagination_classes(size)>
                {show_first_last.then(|| view! {
                    <li data-ui-slot="first">
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Icon
                            aria_label="First page"
                            disabled=previous_disabled
                            on_click=Callback::new(move |_| on_page_change.call(1))
                        >
                            <Icon icon=IconName::ChevronsLeft size=IconSize::Sm />
                        </Button>
                    </li>
                })}
                <li data-ui-slot="previous">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        aria_label="Previous page"
                        disabled=previous_disabled
                        on_click=Callback::new(move |_| go_to(state.get_untracked().previous_page()))
                    >
                        <Icon icon=IconName::ChevronLeft size=IconSize::Sm />
                    </Button>
                </li>
                {move || {
                    let state = state.get();
                    state
                        .visible_pages()
                        .into_iter()
                        .map(|entry| page_item(entry, state.current_page, on_page_change))
                        .collect_view()
                }}
                <li data-ui-slot="next">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        aria_label="Next page"
                        disabled=next_disabled
                        on_click=Callback::new(move |_| go_to(state.get_untracked().next_page()))
                    >
                        <Icon icon=IconName::ChevronRight size=IconSize::Sm />
                    </Button>
                </li>
                {show_first_last.then(|| view! {
                    <li data-ui-slot="last">
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Icon
                            aria_label="Last page"
                            disabled=next_disabled
                            on_click=Callback::new(move |_| on_page_change.call(state.get_untracked().last_page()))
                        >
                            <Icon icon=IconName::ChevronsRight size=IconSize::Sm />
                        </Button>
                    </li>
                })}
            </ul>
        </nav>
    }
}
