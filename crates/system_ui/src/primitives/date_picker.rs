use chrono::{Datelike, Local, NaiveDate};

use super::*;
use crate::calendar::{DateRange, GridCell, RangePicker, WEEKDAY_LABELS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pixel metrics for one [`RangeCalendar`] size, emitted as CSS custom properties.
pub struct CalendarMetrics {
    /// Minimum trigger width.
    pub trigger_min_width: u16,
    /// Trigger height.
    pub trigger_height: u16,
    /// Popup width.
    pub popup_width: u16,
    /// Popup inner padding.
    pub popup_padding: u16,
    /// Height of one day cell.
    pub day_height: u16,
    /// Font size of the footer button labels.
    pub action_font: u16,
    /// Trigger and chevron icon size.
    pub icon: IconSize,
}

impl CalendarMetrics {
    /// Metrics for `size`.
    pub fn for_size(size: ControlSize) -> Self {
        match size {
            ControlSize::Sm => Self {
                trigger_min_width: 220,
                trigger_height: 32,
                popup_width: 240,
                popup_padding: 8,
                day_height: 28,
                action_font: 10,
                icon: IconSize::Xs,
            },
            ControlSize::Md => Self {
                trigger_min_width: 260,
                trigger_height: 40,
                popup_width: 288,
                popup_padding: 12,
                day_height: 32,
                action_font: 12,
                icon: IconSize::Sm,
            },
            ControlSize::Lg => Self {
                trigger_min_width: 300,
                trigger_height: 48,
                popup_width: 320,
                popup_padding: 16,
                day_height: 40,
                action_font: 14,
                icon: IconSize::Md,
            },
        }
    }

    /// Inline `style` value carrying the metrics as `--ui-calendar-*` properties.
    pub fn style(&self) -> String {
        format!(
            "--ui-calendar-trigger-min-width: {}px; --ui-calendar-trigger-height: {}px; \
             --ui-calendar-popup-width: {}px; --ui-calendar-popup-padding: {}px; \
             --ui-calendar-day-height: {}px; --ui-calendar-action-font: {}px;",
            self.trigger_min_width,
            self.trigger_height,
            self.popup_width,
            self.popup_padding,
            self.day_height,
            self.action_font,
        )
    }
}

#[component]
/// Date-range picker: a trigger showing the committed range and a popup month grid.
///
/// Picks edit a draft that is copied from `value` each time the popup opens. "Confirm"
/// reports the draft through `on_change`; "Cancel" reports the empty range. Escape or a
/// pointer-down outside the widget closes the popup and drops the draft. The displayed month
/// starts at the committed start date, or at `today` (the local date by default).
pub fn RangeCalendar(
    #[prop(optional, into)] value: MaybeSignal<DateRange>,
    #[prop(optional)] on_change: Option<Callback<DateRange>>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = PopupPlacement::Bottom)] placement: PopupPlacement,
    #[prop(default = true)] show_icon: bool,
    #[prop(optional)] today: Option<NaiveDate>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let picker = create_rw_signal(RangePicker::new(value.get_untracked(), today));
    let metrics = CalendarMetrics::for_size(size);
    let root = create_node_ref::<html::Div>();

    let emit = move |range: Option<DateRange>| {
        if let (Some(range), Some(on_change)) = (range, on_change.as_ref()) {
            on_change.call(range);
        }
    };
    let close = Callback::new(move |_: ()| picker.update(RangePicker::close));

    let grid = move || {
        let picker_state = picker.get();
        picker_state
            .view()
            .grid()
            .into_iter()
            .map(|cell| match cell {
                GridCell::Blank => view! { <span data-ui-slot="blank" aria-hidden="true"></span> }.into_view(),
                GridCell::Day(date) => {
                    let state = picker_state.day_state(date);
                    view! {
                        <button
                            type="button"
                            data-ui-slot="day"
                            data-ui-state=state.token()
                            aria-label=date.format("%Y-%m-%d").to_string()
                            on:click=move |_| picker.update(|picker| picker.pick(date))
                        >
                            {date.day()}
                        </button>
                    }
                        .into_view()
                }
            })
            .collect_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-range-calendar", layout_class)
            node_ref=root
            style=metrics.style()
            data-ui-primitive="true"
            data-ui-kind="range-calendar"
            data-ui-size=size.token()
            data-ui-placement=placement.token()
            data-ui-state=move || if picker.with(RangePicker::is_open) { "open" } else { "closed" }
        >
            <button
                type="button"
                data-ui-slot="trigger"
                aria-haspopup="dialog"
                aria-expanded=move || picker.with(RangePicker::is_open).to_string()
                on:click=move |_| picker.update(|picker| picker.toggle(value.get_untracked()))
            >
                {show_icon.then(|| view! { <Icon icon=IconName::Calendar size=metrics.icon ui_slot="icon" /> })}
                <span data-ui-slot="value">{move || value.get().to_string()}</span>
            </button>
            <Show when=move || picker.with(RangePicker::is_open) fallback=|| ()>
                <DismissListeners root escape=true on_dismiss=close />
                <div data-ui-slot="popup" role="dialog" aria-label="Choose a date range">
                    <div data-ui-slot="header">
                        <IconButton
                            icon=IconName::ChevronLeft
                            size=metrics.icon
                            aria_label="Previous month"
                            ui_slot="prev-month"
                            on_click=Callback::new(move |_| picker.update(|picker| picker.navigate_month(-1)))
                        />
                        <span data-ui-slot="title">{move || picker.with(|picker| picker.view().title())}</span>
                        <IconButton
                            icon=IconName::ChevronRight
                            size=metrics.icon
                            aria_label="Next month"
                            ui_slot="next-month"
                            on_click=Callback::new(move |_| picker.update(|picker| picker.navigate_month(1)))
                        />
                    </div>
                    <div data-ui-slot="weekdays">
                        {WEEKDAY_LABELS.iter().map(|label| view! { <span>{*label}</span> }).collect_view()}
                    </div>
                    <div data-ui-slot="days">{grid}</div>
                    <div data-ui-slot="actions">
                        <Button
                            variant=ButtonVariant::Sub2
                            size=ControlSize::Sm
                            on_click=Callback::new(move |_| emit(picker.try_update(RangePicker::cancel)))
                        >
                            "Cancel"
                        </Button>
                        <Button
                            variant=ButtonVariant::Main
                            size=ControlSize::Sm
                            on_click=Callback::new(move |_| emit(picker.try_update(RangePicker::confirm)))
                        >
                            "Confirm"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn metrics_grow_with_size() {
        let sm = CalendarMetrics::for_size(ControlSize::Sm);
        let md = CalendarMetrics::for_size(ControlSize::Md);
        let lg = CalendarMetrics::for_size(ControlSize::Lg);

        assert_eq!((sm.trigger_min_width, sm.popup_width, sm.day_height), (220, 240, 28));
        assert_eq!((md.trigger_min_width, md.popup_width, md.day_height), (260, 288, 32));
        assert_eq!((lg.trigger_min_width, lg.popup_width, lg.day_height), (300, 320, 40));
        assert_eq!(
            [sm.icon, md.icon, lg.icon].map(IconSize::pixels),
            [14, 16, 20]
        );
    }

    #[test]
    fn metrics_render_as_custom_properties() {
        let style = CalendarMetrics::for_size(ControlSize::Sm).style();
        assert!(style.starts_with("--ui-calendar-trigger-min-width: 220px;"));
        assert!(style.contains("--ui-calendar-popup-padding: 8px;"));
        assert!(style.ends_with("--ui-calendar-action-font: 10px;"));
    }
}
