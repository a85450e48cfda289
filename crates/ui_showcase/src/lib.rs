//! Component catalog app for the `system_ui` library.
//!
//! A sidebar lists the catalog categories from the build-time manifest; each category page
//! wires local demo state to the shared primitives and reports interactions to the console
//! overlay. Routing stays with the host: the app only renders the active category and
//! reports selections.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
mod pages;

use leptos::*;
use system_ui::console::DEFAULT_CONSOLE_CAPACITY;
use system_ui::prelude::*;
use system_ui::{provide_console_log, ConsolePanel};

pub use catalog::{
    demo_defaults, manifest, CategoryEntry, CategoryParseError, DemoDefaults, ShowcaseCategory,
    ShowcaseManifest,
};

fn category_icon(category: ShowcaseCategory) -> IconName {
    match category {
        ShowcaseCategory::Button => IconName::Plus,
        ShowcaseCategory::Toggle => IconName::CheckCircle,
        ShowcaseCategory::Box => IconName::ChevronDown,
        ShowcaseCategory::Area => IconName::Search,
        ShowcaseCategory::Modal => IconName::Mail,
        ShowcaseCategory::Table => IconName::Home,
        ShowcaseCategory::Calendar => IconName::Calendar,
        ShowcaseCategory::Feedback => IconName::Info,
    }
}

#[component]
/// Catalog app: sidebar navigation, the active category page, and the console overlay.
pub fn UiShowcaseApp(
    /// Category to render.
    #[prop(into)]
    active: Signal<ShowcaseCategory>,
    /// Invoked when a sidebar item is clicked.
    on_select: Callback<ShowcaseCategory>,
) -> impl IntoView {
    let console = provide_console_log(DEFAULT_CONSOLE_CAPACITY);
    let brand = manifest().brand.clone();

    let nav_items = ShowcaseCategory::ALL
        .into_iter()
        .map(|category| {
            let label = category.entry().label;
            view! {
                <SideNavItem
                    selected=Signal::derive(move || active.get() == category)
                    icon=category_icon(category)
                    on_click=Callback::new(move |_| {
                        if active.get_untracked() != category {
                            on_select.call(category);
                        }
                    })
                >
                    {label}
                </SideNavItem>
            }
        })
        .collect_view();

    let header = move || {
        let entry = active.get().entry();
        view! {
            <Stack gap=LayoutGap::Sm>
                <Heading level=1>{entry.title}</Heading>
                <Text tone=TextTone::Secondary>{entry.description}</Text>
            </Stack>
        }
    };

    let page = move || pages::render(active.get(), console);

    view! {
        <AppShell layout_class="ui-showcase">
            <SideNav brand=brand aria_label="Component categories">
                {nav_items}
            </SideNav>
            <main class="ui-showcase-main" data-ui-slot="content">
                <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
                    {header}
                    {page}
                </Stack>
            </main>
            <ConsolePanel console=console />
        </AppShell>
    }
}
