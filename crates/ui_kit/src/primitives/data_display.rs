use super::*;

#[component]
/// Inline status badge.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", &badge_classes(variant, size), layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {children()}
        </span>
    }
}
