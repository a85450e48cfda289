use system_ui::format::{format_date, DateSeparator};

use super::*;

fn describe(range: DateRange) -> String {
    match (range.start(), range.end()) {
        (Some(start), Some(end)) => {
            let start = format_date(start, DateSeparator::Dot).unwrap_or_default();
            let end = format_date(end, DateSeparator::Dot).unwrap_or_default();
            format!("{start} ~ {end}")
        }
        (Some(start), None) => {
            let start = format_date(start, DateSeparator::Dot).unwrap_or_default();
            format!("{start} ~ (open)")
        }
        _ => "No range selected".to_string(),
    }
}

#[component]
fn CalendarRow(
    console: ConsoleLog,
    size: ControlSize,
    size_label: &'static str,
    placement: PopupPlacement,
    #[prop(default = true)] show_icon: bool,
) -> impl IntoView {
    let committed = create_rw_signal(DateRange::empty());

    view! {
        <Stack gap=LayoutGap::Sm>
            <Cluster justify=LayoutJustify::Between>
                <Text role=TextRole::Label>{size_label}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || describe(committed.get())}
                </Text>
            </Cluster>
            <RangeCalendar
                value=committed
                size
                placement
                show_icon
                on_change=Callback::new(move |range: DateRange| {
                    console.log(format!("{size_label} calendar -> {range}"));
                    committed.set(range);
                })
            />
        </Stack>
    }
}

#[component]
pub(crate) fn CalendarsPage(console: ConsoleLog) -> impl IntoView {
    let rows = SIZES
        .into_iter()
        .map(|(size, size_label)| {
            view! { <CalendarRow console size size_label placement=PopupPlacement::Bottom /> }
        })
        .collect_view();

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel
                title="Range calendar"
                description="Pick a start and an end, then Confirm. Cancel clears the range; Escape or an outside click keeps the last confirmed value."
            >
                <Stack gap=LayoutGap::Lg>{rows}</Stack>
            </Panel>
            <Panel title="Placement and icon">
                <Stack gap=LayoutGap::Lg>
                    <CalendarRow
                        console
                        size=ControlSize::Md
                        size_label="Opens upward"
                        placement=PopupPlacement::Top
                    />
                    <CalendarRow
                        console
                        size=ControlSize::Md
                        size_label="Without icon"
                        placement=PopupPlacement::Bottom
                        show_icon=false
                    />
                </Stack>
            </Panel>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use system_ui::RangePicker;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).expect("valid test date")
    }

    #[test]
    fn describes_each_range_shape() {
        assert_eq!(describe(DateRange::empty()), "No range selected");
        assert_eq!(describe(DateRange::starting(day(7))), "2026.03.07 ~ (open)");
        assert_eq!(
            describe(DateRange::between(day(7), day(12))),
            "2026.03.07 ~ 2026.03.12"
        );
    }

    #[test]
    fn confirmed_range_fed_back_survives_reopening() {
        let mut picker = RangePicker::new(DateRange::empty(), day(1));
        picker.open(DateRange::empty());
        picker.pick(day(7));
        picker.pick(day(12));
        let committed = picker.confirm();
        assert_eq!(describe(committed), "2026.03.07 ~ 2026.03.12");

        picker.open(committed);
        assert_eq!(picker.draft(), committed);
        assert_eq!(committed.to_string(), "2026-03-07 ~ 2026-03-12");
    }
}
