//! Date-range calendar model: month grids, month navigation, and the draft/commit
//! range-selection state machine behind [`crate::RangeCalendar`].
//!
//! Everything here is plain data so the picker can be exercised without a reactive runtime.
//! The component keeps one [`RangePicker`] in a signal and the committed [`DateRange`] stays
//! with the caller.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::format::{format_date, DateSeparator};

/// English month names indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DATE_PLACEHOLDER: &str = "yyyy-mm-dd";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Closed, inclusive calendar-day interval. Either end may be unset.
///
/// When both ends are set `start <= end` holds; the constructors reorder their arguments
/// to keep it that way.
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// The unset range `{null, null}`.
    pub const fn empty() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A range with only its start picked.
    pub const fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// A complete range spanning both dates in either order.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: Some(a.min(b)),
            end: Some(a.max(b)),
        }
    }

    /// Builds a range from optional ends, swapping them if they arrive reversed.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Self::between(start, end),
            (start, end) => Self { start, end },
        }
    }

    /// Start day, if picked.
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// End day, if picked.
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns `true` when neither end is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns `true` when both ends are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns `true` when `date` lies inside a complete range, ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// Derives how a day cell should be drawn against this range.
    pub fn day_state(&self, date: NaiveDate) -> DayState {
        let is_start = self.start == Some(date);
        let is_end = self.end == Some(date);
        match (is_start, is_end) {
            (true, true) => DayState::Single,
            (true, false) => DayState::RangeStart,
            (false, true) => DayState::RangeEnd,
            _ if self.contains(date) => DayState::InRange,
            _ => DayState::Plain,
        }
    }

    /// Applies one date pick to a draft range.
    ///
    /// Starts over when the draft is empty or already complete, replaces the start when
    /// `date` precedes it, and otherwise completes the range.
    pub fn pick(self, date: NaiveDate) -> Self {
        match (self.start, self.end) {
            (Some(start), None) if date >= start => Self {
                start: Some(start),
                end: Some(date),
            },
            _ => Self::starting(date),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", display_day(self.start), display_day(self.end))
    }
}

fn display_day(day: Option<NaiveDate>) -> String {
    day.and_then(|day| format_date(day, DateSeparator::Dash).ok())
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual state of one day cell.
pub enum DayState {
    /// Outside the draft range.
    Plain,
    /// Strictly between the draft start and end.
    InRange,
    /// The draft start of a multi-day range.
    RangeStart,
    /// The draft end of a multi-day range.
    RangeEnd,
    /// Both start and end of a single-day range.
    Single,
}

impl DayState {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::InRange => "in-range",
            Self::RangeStart => "range-start",
            Self::RangeEnd => "range-end",
            Self::Single => "both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Year and zero-based month currently shown by the grid.
pub struct CalendarView {
    year: i32,
    month0: u32,
}

impl CalendarView {
    /// View of the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// View of `year`/`month0`; months past December roll into following years.
    pub fn new(year: i32, month0: u32) -> Self {
        Self::from_month_index(i64::from(year) * 12 + i64::from(month0))
    }

    /// View for a month count since year 0, saturating at the first and last
    /// representable months.
    fn from_month_index(index: i64) -> Self {
        let year = index.div_euclid(12);
        if year > i64::from(i32::MAX) {
            return Self { year: i32::MAX, month0: 11 };
        }
        if year < i64::from(i32::MIN) {
            return Self { year: i32::MIN, month0: 0 };
        }
        Self {
            year: year as i32,
            month0: index.rem_euclid(12) as u32,
        }
    }

    /// Displayed year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, `0..=11`.
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Moves the view by `delta` months, rolling the year at December/January.
    pub fn shifted(self, delta: i32) -> Self {
        Self::from_month_index(
            i64::from(self.year) * 12 + i64::from(self.month0) + i64::from(delta),
        )
    }

    /// Header label such as `October 2026`.
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }

    /// First day of the displayed month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    /// Number of blank cells before day 1: the weekday of the 1st with Sunday as 0.
    pub fn leading_blanks(&self) -> usize {
        self.first_day()
            .map(|first| first.weekday().num_days_from_sunday() as usize)
            .unwrap_or(0)
    }

    /// Number of days in the displayed month.
    pub fn days_in_month(&self) -> u32 {
        self.shifted(1)
            .first_day()
            .and_then(|next_first| next_first.pred_opt())
            .map(|last| last.day())
            .unwrap_or(0)
    }

    /// Cells for the month grid: leading blanks followed by days `1..=last`.
    pub fn grid(&self) -> Vec<GridCell> {
        let mut cells = vec![GridCell::Blank; self.leading_blanks()];
        cells.extend(
            (1..=self.days_in_month())
                .filter_map(|day| NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day))
                .map(GridCell::Day),
        );
        cells
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One cell of a month grid.
pub enum GridCell {
    /// Padding before the first of the month.
    Blank,
    /// A pickable calendar day.
    Day(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Popup state for a range calendar: visibility, displayed month, and the draft range.
///
/// The draft is a separate copy of the committed range. It is refreshed from the committed
/// value on open and handed back only through [`RangePicker::confirm`].
pub struct RangePicker {
    open: bool,
    view: CalendarView,
    draft: DateRange,
}

impl RangePicker {
    /// Closed picker whose view starts at the committed start, or at `today` when unset.
    pub fn new(committed: DateRange, today: NaiveDate) -> Self {
        Self {
            open: false,
            view: CalendarView::containing(committed.start().unwrap_or(today)),
            draft: committed,
        }
    }

    /// Whether the popup is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Month currently displayed.
    pub fn view(&self) -> CalendarView {
        self.view
    }

    /// Uncommitted selection.
    pub fn draft(&self) -> DateRange {
        self.draft
    }

    /// Shows the popup and resets the draft to the committed range.
    pub fn open(&mut self, committed: DateRange) {
        self.draft = committed;
        self.open = true;
    }

    /// Hides the popup without committing.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Opens when closed, closes when open.
    pub fn toggle(&mut self, committed: DateRange) {
        if self.open {
            self.close();
        } else {
            self.open(committed);
        }
    }

    /// Moves the displayed month by `delta`.
    pub fn navigate_month(&mut self, delta: i32) {
        self.view = self.view.shifted(delta);
    }

    /// Feeds one picked day into the draft.
    pub fn pick(&mut self, date: NaiveDate) {
        self.draft = self.draft.pick(date);
    }

    /// Closes the popup and returns the draft as the new committed value.
    pub fn confirm(&mut self) -> DateRange {
        self.open = false;
        self.draft
    }

    /// Clears the draft, closes the popup, and returns the empty committed value.
    pub fn cancel(&mut self) -> DateRange {
        self.draft = DateRange::empty();
        self.open = false;
        DateRange::empty()
    }

    /// Visual state of `date` against the draft.
    pub fn day_state(&self, date: NaiveDate) -> DayState {
        self.draft.day_state(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn grid_length_is_blanks_plus_days_for_every_month() {
        for year in [1999, 2000, 2023, 2024, 2026, 2100] {
            for month0 in 0..12 {
                let view = CalendarView::new(year, month0);
                let grid = view.grid();
                let first = day(year, month0 + 1, 1);
                let blanks = first.weekday().num_days_from_sunday() as usize;

                assert_eq!(view.leading_blanks(), blanks);
                assert_eq!(grid.len(), blanks + view.days_in_month() as usize);
                assert!(grid.len() <= 42);
                assert!(grid[..blanks].iter().all(|cell| *cell == GridCell::Blank));
                assert_eq!(grid[blanks], GridCell::Day(first));
            }
        }
    }

    #[test]
    fn known_month_layouts() {
        let feb_2024 = CalendarView::new(2024, 1);
        assert_eq!(feb_2024.leading_blanks(), 4);
        assert_eq!(feb_2024.days_in_month(), 29);
        assert_eq!(feb_2024.grid().len(), 33);

        let feb_2023 = CalendarView::new(2023, 1);
        assert_eq!(feb_2023.days_in_month(), 28);

        let oct_2026 = CalendarView::new(2026, 9);
        assert_eq!(oct_2026.leading_blanks(), 4);
        assert_eq!(oct_2026.grid().last(), Some(&GridCell::Day(day(2026, 10, 31))));
        assert_eq!(oct_2026.title(), "October 2026");
    }

    #[test]
    fn month_navigation_wraps_years() {
        let january = CalendarView::new(2026, 0);
        let back = january.shifted(-1);
        assert_eq!((back.year(), back.month0()), (2025, 11));

        let december = CalendarView::new(2026, 11);
        let forward = december.shifted(1);
        assert_eq!((forward.year(), forward.month0()), (2027, 0));

        assert_eq!(january.shifted(-13), CalendarView::new(2024, 11));
        assert_eq!(january.shifted(12).shifted(-12), january);
    }

    #[test]
    fn month_arithmetic_saturates_at_extreme_years() {
        let rolled = CalendarView::new(2026, u32::MAX);
        assert_eq!(
            (i64::from(rolled.year()), rolled.month0()),
            (2026 + i64::from(u32::MAX) / 12, u32::MAX % 12)
        );

        let last = CalendarView::new(i32::MAX, 11);
        assert_eq!(last.shifted(1), last);
        assert_eq!(last.shifted(i32::MAX), last);

        let first = CalendarView::new(i32::MIN, 0);
        assert_eq!(first.shifted(-1), first);
        assert_eq!(first.shifted(i32::MIN), first);
        assert_eq!(CalendarView::new(i32::MAX, u32::MAX), last);
    }

    #[test]
    fn picking_in_order_completes_the_range() {
        let d1 = day(2026, 10, 3);
        let d2 = day(2026, 10, 9);

        let draft = DateRange::empty().pick(d1);
        assert_eq!(draft, DateRange::starting(d1));

        let draft = draft.pick(d2);
        assert_eq!(draft.start(), Some(d1));
        assert_eq!(draft.end(), Some(d2));
    }

    #[test]
    fn picking_earlier_day_replaces_the_start() {
        let d1 = day(2026, 10, 9);
        let d2 = day(2026, 10, 3);

        let draft = DateRange::empty().pick(d1).pick(d2);
        assert_eq!(draft, DateRange::starting(d2));

        let d3 = day(2026, 10, 20);
        assert_eq!(draft.pick(d3), DateRange::between(d2, d3));
    }

    #[test]
    fn picking_after_a_complete_range_starts_over() {
        let complete = DateRange::between(day(2026, 1, 1), day(2026, 1, 5));
        let restarted = complete.pick(day(2025, 12, 30));
        assert_eq!(restarted, DateRange::starting(day(2025, 12, 30)));
    }

    #[test]
    fn picking_the_start_again_makes_a_single_day_range() {
        let d = day(2026, 10, 15);
        let draft = DateRange::starting(d).pick(d);
        assert!(draft.is_complete());
        assert_eq!(draft.day_state(d), DayState::Single);
    }

    #[test]
    fn constructors_keep_start_before_end() {
        let early = day(2026, 3, 1);
        let late = day(2026, 3, 31);
        assert_eq!(DateRange::between(late, early).start(), Some(early));
        assert_eq!(DateRange::new(Some(late), Some(early)).end(), Some(late));
        assert_eq!(DateRange::new(None, Some(late)).start(), None);
    }

    #[test]
    fn day_states_follow_the_draft() {
        let range = DateRange::between(day(2026, 10, 5), day(2026, 10, 8));
        assert_eq!(range.day_state(day(2026, 10, 4)), DayState::Plain);
        assert_eq!(range.day_state(day(2026, 10, 5)), DayState::RangeStart);
        assert_eq!(range.day_state(day(2026, 10, 6)), DayState::InRange);
        assert_eq!(range.day_state(day(2026, 10, 8)), DayState::RangeEnd);
        assert_eq!(range.day_state(day(2026, 10, 9)), DayState::Plain);

        let half = DateRange::starting(day(2026, 10, 5));
        assert_eq!(half.day_state(day(2026, 10, 5)), DayState::RangeStart);
        assert_eq!(half.day_state(day(2026, 10, 6)), DayState::Plain);
    }

    #[test]
    fn opening_resets_the_draft_to_the_committed_value() {
        let today = day(2026, 10, 15);
        let committed = DateRange::between(day(2026, 9, 1), day(2026, 9, 3));
        let mut picker = RangePicker::new(committed, today);
        assert_eq!(picker.view(), CalendarView::new(2026, 8));

        picker.open(committed);
        picker.pick(day(2026, 9, 20));
        assert_eq!(picker.draft(), DateRange::starting(day(2026, 9, 20)));

        picker.close();
        picker.open(committed);
        assert!(picker.is_open());
        assert_eq!(picker.draft(), committed);
    }

    #[test]
    fn confirm_commits_the_draft() {
        let mut picker = RangePicker::new(DateRange::empty(), day(2026, 10, 15));
        assert_eq!(picker.view(), CalendarView::new(2026, 9));

        picker.toggle(DateRange::empty());
        picker.pick(day(2026, 10, 2));
        picker.pick(day(2026, 10, 12));
        let committed = picker.confirm();

        assert!(!picker.is_open());
        assert_eq!(
            committed,
            DateRange::between(day(2026, 10, 2), day(2026, 10, 12))
        );
    }

    #[test]
    fn cancel_always_clears_both_values() {
        let committed = DateRange::between(day(2026, 1, 1), day(2026, 1, 2));
        let mut picker = RangePicker::new(committed, day(2026, 10, 15));
        picker.open(committed);
        picker.pick(day(2026, 1, 10));

        assert_eq!(picker.cancel(), DateRange::empty());
        assert_eq!(picker.draft(), DateRange::empty());
        assert!(!picker.is_open());
    }

    #[test]
    fn display_uses_placeholders_for_unset_ends() {
        assert_eq!(DateRange::empty().to_string(), "yyyy-mm-dd ~ yyyy-mm-dd");
        assert_eq!(
            DateRange::starting(day(2026, 4, 7)).to_string(),
            "2026-04-07 ~ yyyy-mm-dd"
        );
        assert_eq!(
            DateRange::between(day(2026, 4, 7), day(2026, 5, 1)).to_string(),
            "2026-04-07 ~ 2026-05-01"
        );
    }
}
