use super::*;

#[component]
/// Shared button primitive with variant recipes, icon slots, and a loading state.
///
/// While `is_loading` is set the label is hidden behind a spinner and the button is disabled.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional_no_strip)] aria_current: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] is_loading: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", &button_classes(variant, size), layout_class);
    let inert = move || disabled.get() || is_loading.get();
    view! {
        <button
            type="button"
            class=class
            id=id
            aria-label=aria_label
            aria-current=aria_current
            aria-busy=move || bool_token(is_loading.get())
            title=title
            disabled=inert
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || if is_loading.get() { "loading" } else { "idle" }
            data-ui-disabled=move || bool_token(inert())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {move || is_loading.get().then(|| view! { <Icon icon=IconName::Spinner size=IconSize::Sm /> })}
            <span data-ui-slot="label" class="inline-flex items-center gap-2" hidden=move || is_loading.get()>
                {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm layout_class="shrink-0" /> })}
                {children()}
                {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm layout_class="shrink-0" /> })}
            </span>
        </button>
    }
}

#[component]
/// Shared text input primitive. Setting `error` switches to the error variant and marks the
/// field invalid.
pub fn TextField(
    #[prop(default = InputVariant::Default)] variant: InputVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <input
            class=move || merge_layout_class("ui-field", &input_classes(variant, size, error.get()), layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            aria-invalid=move || bool_token(error.get())
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-slot=ui_slot
            data-ui-variant=move || if error.get() { InputVariant::Error.token() } else { variant.token() }
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        />
    }
}
