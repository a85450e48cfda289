use super::*;
use crate::paging::{PageWindow, DEFAULT_PAGE_SIZE, DEFAULT_VISIBLE_COUNT};

#[component]
/// Grouped pagination: previous-group, a window of page buttons, next-group.
///
/// Renders nothing while `total` is not positive. The component never changes the page on
/// its own; every control reports the requested page through `on_change` and the caller
/// feeds the new `page` back in.
pub fn Pagination(
    #[prop(into)] page: MaybeSignal<i64>,
    #[prop(into)] total: MaybeSignal<i64>,
    on_change: Callback<i64>,
    #[prop(default = DEFAULT_PAGE_SIZE)] page_size: i64,
    #[prop(default = DEFAULT_VISIBLE_COUNT)] visible_count: i64,
    #[prop(default = PaginationSize::Md)] size: PaginationSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let window = Signal::derive(move || {
        PageWindow::compute(page.get(), total.get(), page_size, visible_count)
    });
    let request = move |target: Option<i64>| {
        if let Some(target) = target {
            on_change.call(target);
        }
    };

    move || {
        window.get().map(|window| {
            let pages = window
                .pages()
                .map(|number| {
                    let current = window.is_current(number);
                    view! {
                        <button
                            type="button"
                            data-ui-slot="page"
                            aria-current=current.then_some("page")
                            data-ui-selected=bool_token(current)
                            on:click=move |_| request(window.select_target(number))
                        >
                            {number}
                        </button>
                    }
                })
                .collect_view();

            view! {
                <nav
                    class=merge_layout_class("ui-pagination", layout_class)
                    aria-label="Pagination"
                    data-ui-primitive="true"
                    data-ui-kind="pagination"
                    data-ui-size=size.token()
                >
                    <IconButton
                        icon=IconName::ChevronLeft
                        size=size.icon_size()
                        aria_label="Previous pages group"
                        ui_slot="prev-group"
                        disabled=!window.has_prev_group()
                        on_click=Callback::new(move |_| request(window.prev_group_target()))
                    />
                    {pages}
                    <IconButton
                        icon=IconName::ChevronRight
                        size=size.icon_size()
                        aria_label="Next pages group"
                        ui_slot="next-group"
                        disabled=!window.has_next_group()
                        on_click=Callback::new(move |_| request(window.next_group_target()))
                    />
                </nav>
            }
        })
    }
}

#[component]
/// Sidebar navigation column with an optional brand header.
pub fn SideNav(
    #[prop(optional, into)] brand: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-side-nav", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="side-nav"
        >
            {brand.map(|brand| view! { <div data-ui-slot="brand">{brand}</div> })}
            <div data-ui-slot="items">{children()}</div>
        </nav>
    }
}

#[component]
/// One sidebar entry; the selected entry is emphasized and marked as the current page.
pub fn SideNavItem(
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-side-nav-item", layout_class)
            aria-current=move || selected.get().then_some("page")
            data-ui-primitive="true"
            data-ui-kind="side-nav-item"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm ui_slot="icon" /> })}
            <span data-ui-slot="label">{children()}</span>
        </button>
    }
}
