use std::rc::Rc;

use serde_json::Value;

use super::*;

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive exposed to assistive technology at `level`.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            role="heading"
            aria-level=level.clamp(1, 6)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Raised section with an optional title and description above its content.
pub fn Panel(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-slot=ui_slot
            data-ui-elevation="raised"
            data-ui-padding=padding.token()
        >
            {has_header
                .then(|| {
                    view! {
                        <header data-ui-slot="header">
                            {title.map(|title| view! { <Heading level=3>{title}</Heading> })}
                            {description
                                .map(|description| {
                                    view! {
                                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                                            {description}
                                        </Text>
                                    }
                                })}
                        </header>
                    }
                })}
            {children()}
        </section>
    }
}

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

type CellRenderer = Rc<dyn Fn(&Value) -> View>;

#[derive(Clone)]
/// Column definition for [`DataTable`].
pub struct TableColumn {
    key: String,
    header: String,
    width: Option<String>,
    align: ColumnAlign,
    render: Option<CellRenderer>,
}

impl TableColumn {
    /// Column reading field `key` of each row, titled `header`.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            align: ColumnAlign::Left,
            render: None,
        }
    }

    /// Fixes the column width to a CSS length such as `80px` or `20%`.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets header and cell alignment.
    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    /// Renders cells from the whole row instead of the `key` field.
    pub fn render(mut self, render: impl Fn(&Value) -> View + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    fn cell(&self, row: &Value) -> View {
        match &self.render {
            Some(render) => render(row),
            None => cell_text(row, &self.key).into_view(),
        }
    }
}

/// Plain-text content of `row[key]`: strings verbatim, missing and null fields empty, and
/// any other JSON value in its compact form.
pub fn cell_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Blank rows appended so the body shows `row_count` rows; `None` or `0` adds none.
pub fn filler_row_count(rows: usize, row_count: Option<usize>) -> usize {
    row_count
        .filter(|target| *target > 0)
        .map_or(0, |target| target.saturating_sub(rows))
}

#[component]
/// Column-driven table over JSON rows.
///
/// An empty body shows a single "No data." row, and `row_count` pads the body with blank
/// rows so paged tables keep a steady height.
pub fn DataTable(
    columns: Vec<TableColumn>,
    #[prop(into)] rows: MaybeSignal<Vec<Value>>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] striped: bool,
    #[prop(optional)] row_count: Option<usize>,
    #[prop(optional)] on_row_click: Option<Callback<Value>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let column_count = columns.len().max(1);
    let header = columns
        .iter()
        .map(|column| {
            view! {
                <th
                    scope="col"
                    data-ui-align=column.align.token()
                    style=column.width.as_ref().map(|width| format!("width: {width}"))
                >
                    {column.header.clone()}
                </th>
            }
        })
        .collect_view();
    let columns = store_value(columns);

    let body = move || {
        let rows = rows.get();
        let fillers = filler_row_count(rows.len(), row_count);
        columns.with_value(|columns| {
            let data = rows
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    let clicked = row.clone();
                    let cells = columns
                        .iter()
                        .map(|column| {
                            view! { <td data-ui-align=column.align.token()>{column.cell(row)}</td> }
                        })
                        .collect_view();
                    view! {
                        <tr
                            data-ui-slot="row"
                            data-ui-striped=bool_token(striped && index % 2 == 1)
                            data-ui-clickable=bool_token(on_row_click.is_some())
                            on:click=move |_| {
                                if let Some(on_row_click) = on_row_click.as_ref() {
                                    on_row_click.call(clicked.clone());
                                }
                            }
                        >
                            {cells}
                        </tr>
                    }
                })
                .collect_view();
            let empty = rows.is_empty().then(|| {
                view! {
                    <tr data-ui-slot="empty-row">
                        <td colspan=column_count>"No data."</td>
                    </tr>
                }
            });
            let filler = (0..fillers)
                .map(|_| {
                    view! {
                        <tr data-ui-slot="filler-row" aria-hidden="true">
                            {(0..column_count).map(|_| view! { <td>"\u{a0}"</td> }).collect_view()}
                        </tr>
                    }
                })
                .collect_view();
            view! { <>{data} {empty} {filler}</> }
        })
    };

    view! {
        <div
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            data-ui-size=size.token()
            data-ui-striped=bool_token(striped)
        >
            <table aria-label=aria_label>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn cell_text_reads_fields() {
        let row = json!({ "name": "Kim", "age": 31, "active": true, "note": null });
        assert_eq!(cell_text(&row, "name"), "Kim");
        assert_eq!(cell_text(&row, "age"), "31");
        assert_eq!(cell_text(&row, "active"), "true");
        assert_eq!(cell_text(&row, "note"), "");
        assert_eq!(cell_text(&row, "missing"), "");
    }

    #[test]
    fn filler_rows_pad_up_to_row_count() {
        assert_eq!(filler_row_count(3, Some(10)), 7);
        assert_eq!(filler_row_count(10, Some(10)), 0);
        assert_eq!(filler_row_count(12, Some(10)), 0);
        assert_eq!(filler_row_count(0, Some(5)), 5);
        assert_eq!(filler_row_count(3, Some(0)), 0);
        assert_eq!(filler_row_count(3, None), 0);
    }

    #[test]
    fn column_builder_keeps_settings() {
        let column = TableColumn::new("id", "ID")
            .width("80px")
            .align(ColumnAlign::Center);
        assert_eq!(column.key, "id");
        assert_eq!(column.width.as_deref(), Some("80px"));
        assert_eq!(column.align, ColumnAlign::Center);
        assert!(column.render.is_none());
    }
}
