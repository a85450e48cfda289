use leptos::ev::MouseEvent;

use super::*;

const VARIANTS: [(ButtonVariant, &str); 3] = [
    (ButtonVariant::Main, "Main"),
    (ButtonVariant::Sub1, "Sub 1"),
    (ButtonVariant::Sub2, "Sub 2"),
];

fn demo_button(
    variant: ButtonVariant,
    size: ControlSize,
    leading: Option<IconName>,
    trailing: Option<IconName>,
    on_click: Callback<MouseEvent>,
    label: &'static str,
) -> View {
    match (leading, trailing) {
        (Some(leading), Some(trailing)) => view! {
            <Button variant size leading_icon=leading trailing_icon=trailing on_click>{label}</Button>
        }
        .into_view(),
        (Some(leading), None) => view! {
            <Button variant size leading_icon=leading on_click>{label}</Button>
        }
        .into_view(),
        (None, Some(trailing)) => view! {
            <Button variant size trailing_icon=trailing on_click>{label}</Button>
        }
        .into_view(),
        (None, None) => view! { <Button variant size on_click>{label}</Button> }.into_view(),
    }
}

#[component]
pub(crate) fn ButtonsPage(console: ConsoleLog) -> impl IntoView {
    let clicks = create_rw_signal(0_u32);
    let report = move |what: String| {
        clicks.update(|count| *count += 1);
        console.log(format!("button clicked: {what}"));
    };

    let panels = VARIANTS
        .into_iter()
        .map(|(variant, variant_label)| {
            let rows = [
                ("Plain", None, None),
                ("Leading icon", Some(IconName::Home), None),
                ("Trailing icon", None, Some(IconName::ArrowRight)),
                (
                    "Leading + trailing icon",
                    Some(IconName::Home),
                    Some(IconName::ArrowRight),
                ),
            ]
            .into_iter()
            .map(|(row_label, leading, trailing)| {
                let buttons = SIZES
                    .into_iter()
                    .map(|(size, size_label)| {
                        let what = format!("{variant_label} {row_label} {size_label}");
                        let on_click = Callback::new(move |_| report(what.clone()));
                        demo_button(variant, size, leading, trailing, on_click, size_label)
                    })
                    .collect_view();
                view! {
                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Label>{row_label}</Text>
                        <Cluster gap=LayoutGap::Sm>{buttons}</Cluster>
                    </Stack>
                }
            })
            .collect_view();

            view! {
                <Panel title=format!("{variant_label} button")>
                    <Stack gap=LayoutGap::Md>
                        <Cluster gap=LayoutGap::Sm>
                            <Button variant=variant>"Confirm"</Button>
                            <Button variant=variant selected=true>"Selected"</Button>
                            <Button variant=variant disabled=true>"Disabled"</Button>
                        </Cluster>
                        {rows}
                    </Stack>
                </Panel>
            }
        })
        .collect_view();

    view! {
        <Stack gap=LayoutGap::Lg>
            <Badge tone=TextTone::Accent>
                {move || format!("{} clicks", clicks.get())}
            </Badge>
            {panels}
            <Panel title="Full width">
                <Button full=true trailing_icon=IconName::ArrowRight>"Continue"</Button>
            </Panel>
        </Stack>
    }
}
