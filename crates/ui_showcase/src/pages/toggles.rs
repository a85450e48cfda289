use super::*;

#[component]
pub(crate) fn TogglesPage(console: ConsoleLog) -> impl IntoView {
    let notifications = create_rw_signal(true);

    let panels = SIZES
        .into_iter()
        .map(|(size, size_label)| {
            let log_toggle = move |state: &'static str| {
                Callback::new(move |on: bool| {
                    console.log(format!("{size_label} switch ({state} start) -> {on}"));
                })
            };
            view! {
                <Panel title=format!("{size_label} toggle")>
                    <Stack gap=LayoutGap::Sm>
                        <Cluster justify=LayoutJustify::Between>
                            <Text>"Default (off)"</Text>
                            <Switch size aria_label="Default off" on_toggle=log_toggle("off") />
                        </Cluster>
                        <Cluster justify=LayoutJustify::Between>
                            <Text>"Default (on)"</Text>
                            <Switch
                                size
                                default_checked=true
                                aria_label="Default on"
                                on_toggle=log_toggle("on")
                            />
                        </Cluster>
                        <Cluster justify=LayoutJustify::Between>
                            <Text tone=TextTone::Secondary>"Disabled"</Text>
                            <Switch size disabled=true aria_label="Disabled off" />
                        </Cluster>
                        <Cluster justify=LayoutJustify::Between>
                            <Text tone=TextTone::Secondary>"Disabled"</Text>
                            <Switch
                                size
                                default_checked=true
                                disabled=true
                                aria_label="Disabled on"
                            />
                        </Cluster>
                    </Stack>
                </Panel>
            }
        })
        .collect_view();

    view! {
        <Stack gap=LayoutGap::Lg>
            {panels}
            <Panel
                title="Controlled"
                description="The page owns this value; the switch only reports requests."
            >
                <Cluster justify=LayoutJustify::Between>
                    <Text>
                        {move || {
                            if notifications.get() { "Notifications on" } else { "Notifications off" }
                        }}
                    </Text>
                    <Switch
                        checked=notifications
                        aria_label="Notifications"
                        on_toggle=Callback::new(move |on| {
                            notifications.set(on);
                            console.log(format!("notifications -> {on}"));
                        })
                    />
                </Cluster>
            </Panel>
        </Stack>
    }
}
