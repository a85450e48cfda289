use super::*;

fn options() -> Vec<SelectOption> {
    ["Option 1", "Option 2", "Option 3"]
        .into_iter()
        .map(|label| SelectOption::new(label, label))
        .collect()
}

#[component]
fn CheckboxRow(console: ConsoleLog, size: ControlSize, size_label: &'static str) -> impl IntoView {
    let first = create_rw_signal(false);
    let second = create_rw_signal(true);
    let toggle = move |signal: RwSignal<bool>, name: &'static str| {
        Callback::new(move |checked: bool| {
            signal.set(checked);
            console.log(format!("{size_label} checkbox {name} -> {checked}"));
        })
    };

    view! {
        <Stack gap=LayoutGap::Sm>
            <Text role=TextRole::Label>{size_label}</Text>
            <Cluster gap=LayoutGap::Lg>
                <CheckboxField size label="Option A" checked=first on_change=toggle(first, "A") />
                <CheckboxField size label="Option B" checked=second on_change=toggle(second, "B") />
                <CheckboxField size label="Disabled" disabled=true />
                <CheckboxField size label="Disabled" checked=true disabled=true />
            </Cluster>
        </Stack>
    }
}

#[component]
fn RadioRow(console: ConsoleLog, size: ControlSize, size_label: &'static str) -> impl IntoView {
    let group = format!("radio-{}", size_label.to_ascii_lowercase());
    let selected = create_rw_signal("a".to_string());
    let on_change = Callback::new(move |value: String| {
        console.log(format!("{size_label} radio -> {value}"));
        selected.set(value);
    });

    let radios = [("a", "Option A"), ("b", "Option B")]
        .into_iter()
        .map(|(value, label)| {
            view! {
                <RadioField
                    value=value
                    label=label
                    name=group.clone()
                    size
                    checked=Signal::derive(move || selected.get() == value)
                    on_change=on_change
                />
            }
        })
        .collect_view();

    view! {
        <Stack gap=LayoutGap::Sm>
            <Text role=TextRole::Label>{size_label}</Text>
            <Cluster gap=LayoutGap::Lg>
                {radios}
                <RadioField value="c" label="Disabled" name=group.clone() size disabled=true />
            </Cluster>
        </Stack>
    }
}

#[component]
fn SelectRow(console: ConsoleLog, size: ControlSize, size_label: &'static str) -> impl IntoView {
    let value = create_rw_signal::<Option<String>>(None);

    view! {
        <Stack gap=LayoutGap::Sm>
            <Text role=TextRole::Label>{size_label}</Text>
            <SelectBox
                options=options()
                value=value
                size
                aria_label=format!("{size_label} select")
                on_change=Callback::new(move |picked: String| {
                    console.log(format!("{size_label} select -> {picked}"));
                    value.set(Some(picked));
                })
            />
        </Stack>
    }
}

#[component]
pub(crate) fn BoxesPage(console: ConsoleLog) -> impl IntoView {
    let checkboxes = SIZES
        .into_iter()
        .map(|(size, size_label)| view! { <CheckboxRow console size size_label /> })
        .collect_view();
    let radios = SIZES
        .into_iter()
        .map(|(size, size_label)| view! { <RadioRow console size size_label /> })
        .collect_view();
    let selects = SIZES
        .into_iter()
        .map(|(size, size_label)| view! { <SelectRow console size size_label /> })
        .collect_view();
    let upward = create_rw_signal(Some("Option 2".to_string()));

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel title="Checkbox">
                <Stack gap=LayoutGap::Md>{checkboxes}</Stack>
            </Panel>
            <Panel title="Radio">
                <Stack gap=LayoutGap::Md>{radios}</Stack>
            </Panel>
            <Panel title="Select">
                <Stack gap=LayoutGap::Md>
                    {selects}
                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Label>"Opens upward"</Text>
                        <SelectBox
                            options=options()
                            value=upward
                            placement=PopupPlacement::Top
                            placeholder="Pick one"
                            on_change=Callback::new(move |picked: String| {
                                console.log(format!("upward select -> {picked}"));
                                upward.set(Some(picked));
                            })
                        />
                    </Stack>
                    <SelectBox options=options() disabled=true placeholder="Disabled" />
                </Stack>
            </Panel>
        </Stack>
    }
}
