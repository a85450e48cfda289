//! Shared UI primitive library for the component catalog.
//!
//! The crate owns reusable Leptos primitives, the inline icon set, the calendar and
//! pagination models behind the date-range picker and the pager, display formatting helpers,
//! and the in-page console log. Components emit the stable `data-ui-*` DOM contract consumed
//! by the stylesheet; apps compose them instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod calendar;
pub mod console;
pub mod format;
mod icon;
pub mod paging;
mod primitives;

pub use calendar::{CalendarView, DateRange, DayState, GridCell, RangePicker};
pub use console::{
    provide_console_log, use_console_log, ConsoleBuffer, ConsoleLine, ConsoleLog, ConsolePanel,
};
pub use format::FormatError;
pub use icon::{Icon, IconName, IconSize};
pub use paging::PageWindow;
pub use primitives::{
    Alert, AppShell, Badge, Button, ButtonVariant, CalendarMetrics, CheckboxField, Cluster,
    ColumnAlign, ControlSize, DataTable, DialogButtons, DialogHeader, FeedbackTone, FieldStatus,
    FormModal, Heading, IconButton, InputType, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, Loading, MenuItem, MenuSurface, Modal, Pagination, PaginationSize, Panel,
    PopupPlacement, RadioField, RangeCalendar, SelectBox, SelectOption, SideNav, SideNavItem,
    Stack, Switch, TableColumn, Text, TextAreaField, TextField, TextRole, TextTone, Toast,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        use_console_log, Alert, AppShell, Badge, Button, ButtonVariant, CheckboxField, Cluster,
        ColumnAlign, ConsoleLog, ControlSize, DataTable, DateRange, DialogButtons, DialogHeader,
        FeedbackTone, FormModal, Heading, Icon, IconButton, IconName, IconSize, InputType,
        LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Loading, Modal, Pagination,
        PaginationSize, Panel, PopupPlacement, RadioField, RangeCalendar, SelectBox,
        SelectOption, SideNav, SideNavItem, Stack, Switch, TableColumn, Text, TextAreaField,
        TextField, TextRole, TextTone, Toast,
    };
}
