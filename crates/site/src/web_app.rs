use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::prelude::*;
use ui_showcase::{manifest, ShowcaseCategory, UiShowcaseApp};

fn page_title(category: ShowcaseCategory) -> String {
    format!("{} | {}", category.entry().label, manifest().brand)
}

fn select_category() -> Callback<ShowcaseCategory> {
    let navigate = use_navigate();
    Callback::new(move |category: ShowcaseCategory| {
        navigate(&category.href(), Default::default());
    })
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=manifest().brand.clone() />
        <Meta name="description" content="Leptos component catalog: buttons, form controls, modals, tables, pagination, and range calendars." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=ShowcaseHome />
                    <Route path="/components/:category" view=CategoryRoute />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ShowcaseHome() -> impl IntoView {
    let category = ShowcaseCategory::default();

    view! {
        <Title text=page_title(category) />
        <UiShowcaseApp active=Signal::derive(move || category) on_select=select_category() />
    }
}

#[component]
pub fn CategoryRoute() -> impl IntoView {
    let params = use_params_map();
    let parsed = create_memo(move |_| {
        params.with(|map| {
            map.get("category")
                .map(String::as_str)
                .unwrap_or_default()
                .parse::<ShowcaseCategory>()
        })
    });

    create_effect(move |_| {
        if let Err(err) = parsed.get() {
            logging::warn!("{err}; showing not-found page");
        }
    });

    let known = move || parsed.with(Result::is_ok);
    let active = Signal::derive(move || parsed.get().unwrap_or_default());
    let on_select = select_category();

    view! {
        <Show when=known fallback=|| view! { <NotFound /> }>
            <Title text=move || page_title(active.get()) />
            <UiShowcaseApp active on_select />
        </Show>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    view! {
        <Title text=format!("Not found | {}", manifest().brand) />
        <section class="site-not-found">
            <Stack gap=LayoutGap::Lg align=LayoutAlign::Center padding=LayoutPadding::Lg>
                <Heading level=1 layout_class="site-not-found-code">"404"</Heading>
                <Heading level=2>"Page not found"</Heading>
                <Text tone=TextTone::Secondary>
                    {move || format!("Nothing lives at `{}`. It may have moved or been removed.", location.pathname.get())}
                </Text>
                <Button
                    leading_icon=IconName::Home
                    on_click=Callback::new(move |_| navigate("/", Default::default()))
                >
                    "Back to home"
                </Button>
            </Stack>
        </section>
    }
}
