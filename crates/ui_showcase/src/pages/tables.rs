use serde_json::{json, Value};
use system_ui::format::{format_currency_krw, format_latency_ms};

use super::*;
use crate::demo_defaults;

const JOBS: [&str; 4] = ["Developer", "Designer", "PM", "QA"];

fn people() -> Vec<Value> {
    vec![
        json!({ "name": "Hong Gildong", "age": 25, "job": "Developer" }),
        json!({ "name": "Kim Younghee", "age": 30, "job": "Designer" }),
        json!({ "name": "Park Chulsoo", "age": 28, "job": "PM" }),
    ]
}

fn people_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("name", "Name").align(ColumnAlign::Center),
        TableColumn::new("age", "Age").align(ColumnAlign::Center),
        TableColumn::new("job", "Job").align(ColumnAlign::Center),
    ]
}

/// Synthetic rows for `page`, numbered from one across the whole item range.
fn page_rows(page: i64, page_size: i64, total: i64) -> Vec<Value> {
    let page_size = page_size.max(1);
    let first = (page.max(1) - 1) * page_size + 1;
    let last = total.min(first + page_size - 1);
    (first..=last)
        .map(|id| {
            json!({
                "id": id,
                "member": format!("Member {id:03}"),
                "job": JOBS[(id as usize) % JOBS.len()],
                "balance": (id * 7_919) % 100_000,
                "latency": (id * 113) % 2_400,
            })
        })
        .collect()
}

fn paged_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("id", "No.").width("64px").align(ColumnAlign::Center),
        TableColumn::new("member", "Member"),
        TableColumn::new("job", "Job").align(ColumnAlign::Center),
        TableColumn::new("balance", "Balance")
            .align(ColumnAlign::Right)
            .render(|row| format_currency_krw(row["balance"].as_f64()).into_view()),
        TableColumn::new("latency", "Latency")
            .align(ColumnAlign::Right)
            .render(|row| format_latency_ms(row["latency"].as_f64(), 1).into_view()),
    ]
}

#[component]
pub(crate) fn TablesPage(console: ConsoleLog) -> impl IntoView {
    let demo = demo_defaults();
    let page = create_rw_signal(1_i64);
    let small_page = create_rw_signal(1_i64);
    let rows = Signal::derive(move || page_rows(page.get(), demo.table_page_size, demo.table_total));

    let sized_tables = SIZES
        .into_iter()
        .map(|(size, size_label)| {
            view! {
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Label>{size_label}</Text>
                    <DataTable
                        columns=people_columns()
                        rows=people()
                        size
                        aria_label=format!("{size_label} people table")
                    />
                </Stack>
            }
        })
        .collect_view();

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel title="Table">
                <Stack gap=LayoutGap::Md>
                    {sized_tables}
                    <Text role=TextRole::Label>"Striped, padded to five rows"</Text>
                    <DataTable columns=people_columns() rows=people() striped=true row_count=5 />
                    <Text role=TextRole::Label>"Empty"</Text>
                    <DataTable columns=people_columns() rows={Vec::<Value>::new()} />
                </Stack>
            </Panel>
            <Panel
                title="Pagination"
                description=format!(
                    "{} items, {} per page, {} page buttons per group.",
                    demo.table_total, demo.table_page_size, demo.pagination_visible_count,
                )
            >
                <Stack gap=LayoutGap::Md>
                    <DataTable
                        columns=paged_columns()
                        rows=rows
                        striped=true
                        row_count=demo.table_page_size.max(1) as usize
                        on_row_click=Callback::new(move |row: Value| {
                            let member = row["member"].as_str().unwrap_or_default();
                            console.log(format!("row clicked: {member}"));
                        })
                    />
                    <Cluster justify=LayoutJustify::Center wrap=false>
                        <Pagination
                            page=page
                            total=demo.table_total
                            page_size=demo.table_page_size
                            visible_count=demo.pagination_visible_count
                            on_change=Callback::new(move |next| {
                                console.log(format!("page -> {next}"));
                                page.set(next);
                            })
                        />
                    </Cluster>
                    <Cluster justify=LayoutJustify::Center wrap=false>
                        <Pagination
                            page=small_page
                            total=demo.table_total
                            page_size=demo.table_page_size
                            visible_count=3
                            size=PaginationSize::Sm
                            on_change=Callback::new(move |next| {
                                console.log(format!("small pagination page -> {next}"));
                                small_page.set(next);
                            })
                        />
                    </Cluster>
                </Stack>
            </Panel>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_rows_cover_the_requested_slice() {
        let first = page_rows(1, 10, 123);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0]["id"], 1);
        assert_eq!(first[9]["id"], 10);

        let last = page_rows(13, 10, 123);
        assert_eq!(last.len(), 3);
        assert_eq!(last[0]["id"], 121);
        assert_eq!(last[2]["member"], "Member 123");
    }

    #[test]
    fn page_rows_past_the_end_are_empty() {
        assert!(page_rows(14, 10, 123).is_empty());
        assert_eq!(page_rows(0, 10, 123)[0]["id"], 1);
    }
}
