mod areas;
mod boxes;
mod buttons;
mod calendars;
mod feedback;
mod modals;
mod tables;
mod toggles;

use leptos::*;
use system_ui::prelude::*;

use crate::ShowcaseCategory;

/// Sizes shown side by side on most pages.
const SIZES: [(ControlSize, &str); 3] = [
    (ControlSize::Sm, "SM"),
    (ControlSize::Md, "MD"),
    (ControlSize::Lg, "LG"),
];

pub(crate) fn render(category: ShowcaseCategory, console: ConsoleLog) -> View {
    match category {
        ShowcaseCategory::Button => view! { <buttons::ButtonsPage console=console /> }.into_view(),
        ShowcaseCategory::Toggle => view! { <toggles::TogglesPage console=console /> }.into_view(),
        ShowcaseCategory::Box => view! { <boxes::BoxesPage console=console /> }.into_view(),
        ShowcaseCategory::Area => view! { <areas::AreasPage console=console /> }.into_view(),
        ShowcaseCategory::Modal => view! { <modals::ModalsPage console=console /> }.into_view(),
        ShowcaseCategory::Table => view! { <tables::TablesPage console=console /> }.into_view(),
        ShowcaseCategory::Calendar => {
            view! { <calendars::CalendarsPage console=console /> }.into_view()
        }
        ShowcaseCategory::Feedback => {
            view! { <feedback::FeedbackPage console=console /> }.into_view()
        }
    }
}
