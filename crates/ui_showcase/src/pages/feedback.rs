use system_ui::format::{
    format_currency_usd, format_number_krw, format_number_point_en, format_time_auto,
    format_time_full, format_time_korean,
};

use super::*;
use crate::demo_defaults;

const TONES: [(FeedbackTone, &str); 4] = [
    (FeedbackTone::Info, "Info"),
    (FeedbackTone::Success, "Success"),
    (FeedbackTone::Warning, "Warning"),
    (FeedbackTone::Error, "Error"),
];

fn tone_copy(tone: FeedbackTone) -> &'static str {
    match tone {
        FeedbackTone::Info => "A new version is available.",
        FeedbackTone::Success => "Your changes were saved.",
        FeedbackTone::Warning => "Your session expires in five minutes.",
        FeedbackTone::Error => "The request could not be completed.",
    }
}

#[component]
pub(crate) fn FeedbackPage(console: ConsoleLog) -> impl IntoView {
    let demo = demo_defaults();
    let dismissed = create_rw_signal(Vec::<&'static str>::new());
    let toast = create_rw_signal::<Option<FeedbackTone>>(None);
    let sticky_toast = create_rw_signal(false);
    let loading = create_rw_signal(false);

    let alerts = TONES
        .into_iter()
        .map(|(tone, label)| {
            view! {
                <Show when=move || !dismissed.with(|gone| gone.contains(&label)) fallback=|| ()>
                    <Alert
                        tone
                        title=label
                        description=tone_copy(tone)
                        closable=true
                        on_close=Callback::new(move |_| {
                            console.log(format!("{label} alert dismissed"));
                            dismissed.update(|gone| gone.push(label));
                        })
                    />
                </Show>
            }
        })
        .collect_view();

    let toast_buttons = TONES
        .into_iter()
        .map(|(tone, label)| {
            view! {
                <Button
                    variant=ButtonVariant::Sub1
                    size=ControlSize::Sm
                    on_click=Callback::new(move |_| {
                        console.log(format!("{label} toast shown"));
                        toast.set(Some(tone));
                    })
                >
                    {label}
                </Button>
            }
        })
        .collect_view();

    let toast_view = move || {
        toast.get().map(|tone| {
            view! {
                <Toast
                    open=true
                    tone
                    title=tone_copy(tone)
                    duration_ms=demo.toast_duration_ms
                    on_close=Callback::new(move |_| {
                        console.log("toast closed");
                        toast.set(None);
                    })
                />
            }
        })
    };

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel title="Alert">
                <Stack gap=LayoutGap::Sm>
                    {alerts}
                    <Alert tone=FeedbackTone::Info size=ControlSize::Sm title="Title only, small" />
                    <Button
                        variant=ButtonVariant::Sub2
                        size=ControlSize::Sm
                        on_click=Callback::new(move |_| dismissed.set(Vec::new()))
                    >
                        "Restore alerts"
                    </Button>
                </Stack>
            </Panel>
            <Panel
                title="Toast"
                description=format!("Dismisses itself after {} ms.", demo.toast_duration_ms)
            >
                <Cluster gap=LayoutGap::Sm>
                    {toast_buttons}
                    <Button
                        variant=ButtonVariant::Sub2
                        size=ControlSize::Sm
                        on_click=Callback::new(move |_| sticky_toast.set(true))
                    >
                        "Sticky"
                    </Button>
                </Cluster>
            </Panel>
            <Panel title="Loading">
                <Stack gap=LayoutGap::Sm>
                    <Loading message="Fetching components..." />
                    <Button
                        variant=ButtonVariant::Sub1
                        size=ControlSize::Sm
                        on_click=Callback::new(move |_| {
                            console.log("full-screen loading shown");
                            loading.set(true);
                        })
                    >
                        "Full screen"
                    </Button>
                </Stack>
            </Panel>
            <Panel title="Formatting" description="Helpers used for table cells and labels.">
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Code>{format_currency_usd(Some(12_345.5))}</Text>
                    <Text role=TextRole::Code>{format_number_krw(Some(1_234_567.0))}</Text>
                    <Text role=TextRole::Code>{format_number_point_en(Some(980.0))}</Text>
                    <Text role=TextRole::Code>{format_time_full(5_025.0)}</Text>
                    <Text role=TextRole::Code>{format_time_korean(3_822.0)}</Text>
                    <Text role=TextRole::Code>{format_time_auto(32.0)}</Text>
                </Stack>
            </Panel>

            {toast_view}
            <Toast
                open=sticky_toast
                tone=FeedbackTone::Warning
                title="This toast stays until closed."
                duration_ms=0
                on_close=Callback::new(move |_| sticky_toast.set(false))
            />
            <Show when=move || loading.get() fallback=|| ()>
                <div on:click=move |_| loading.set(false)>
                    <Loading message="Click anywhere to stop" full=true />
                </div>
            </Show>
        </Stack>
    }
}
