use std::time::Duration;

use super::*;

/// Auto-dismiss delay used when a toast does not choose one.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

/// Delay before a toast dismisses itself; `0` keeps it open until closed.
pub fn auto_dismiss_delay(duration_ms: u32) -> Option<Duration> {
    (duration_ms > 0).then(|| Duration::from_millis(u64::from(duration_ms)))
}

#[component]
/// Inline status message with a tone icon, optional copy, and an optional close button.
///
/// The icon aligns with the first line when a description is present and centers otherwise.
pub fn Alert(
    #[prop(default = FeedbackTone::Info)] tone: FeedbackTone,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] closable: bool,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let align = if description.is_some() { "top" } else { "center" };
    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-tone=tone.token()
            data-ui-size=size.token()
            data-ui-align=align
        >
            <Icon icon=tone.icon() size=size.icon_size() ui_slot="icon" />
            <div data-ui-slot="copy">
                {title.map(|title| view! { <div data-ui-slot="title">{title}</div> })}
                {description
                    .map(|description| view! { <div data-ui-slot="description">{description}</div> })}
            </div>
            {closable
                .then(|| {
                    view! {
                        <IconButton
                            icon=IconName::Dismiss
                            aria_label="Close"
                            ui_slot="close"
                            on_click=Callback::new(move |_| {
                                if let Some(on_close) = on_close.as_ref() {
                                    on_close.call(());
                                }
                            })
                        />
                    }
                })}
        </div>
    }
}

#[component]
fn DismissTimer(delay: Duration, on_elapsed: Callback<()>) -> impl IntoView {
    match set_timeout_with_handle(move || on_elapsed.call(()), delay) {
        Ok(timer) => on_cleanup(move || timer.clear()),
        Err(err) => logging::warn!("toast auto-dismiss timer was not scheduled: {err:?}"),
    }
}

#[component]
/// Top-center transient notice.
///
/// While open it schedules `on_close` after `duration_ms` (0 disables the timer). Closing
/// early or unmounting clears the pending timer.
pub fn Toast(
    #[prop(into)] open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(default = FeedbackTone::Info)] tone: FeedbackTone,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = DEFAULT_TOAST_DURATION_MS)] duration_ms: u32,
    #[prop(default = true)] closable: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let delay = auto_dismiss_delay(duration_ms);
    let align = if description.is_some() { "top" } else { "center" };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            {delay.map(|delay| view! { <DismissTimer delay on_elapsed=on_close /> })}
            <div
                class=merge_layout_class("ui-toast", layout_class)
                role="status"
                aria-live="polite"
                data-ui-primitive="true"
                data-ui-kind="toast"
                data-ui-tone=tone.token()
                data-ui-align=align
            >
                <Icon icon=tone.icon() size=IconSize::Sm ui_slot="icon" />
                <div data-ui-slot="copy">
                    {title.clone().map(|title| view! { <div data-ui-slot="title">{title}</div> })}
                    {description
                        .clone()
                        .map(|description| view! { <div data-ui-slot="description">{description}</div> })}
                </div>
                {closable
                    .then(|| {
                        view! {
                            <IconButton
                                icon=IconName::Dismiss
                                size=IconSize::Xs
                                aria_label="Close"
                                ui_slot="close"
                                on_click=Callback::new(move |_| on_close.call(()))
                            />
                        }
                    })}
            </div>
        </Show>
    }
}

#[component]
/// Spinner overlay covering its positioned parent, or the whole viewport with `full`.
pub fn Loading(
    #[prop(optional, into)] message: Option<String>,
    #[prop(optional)] full: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Loading...".to_string());
    let label = message.clone();
    view! {
        <div
            class=merge_layout_class("ui-loading", layout_class)
            role="progressbar"
            aria-busy="true"
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="loading"
            data-ui-variant=if full { "full" } else { "inline" }
        >
            <div data-ui-slot="spinner"></div>
            {(!message.is_empty()).then(|| view! { <div data-ui-slot="message">{message}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_duration_disables_auto_dismiss() {
        assert_eq!(auto_dismiss_delay(0), None);
    }

    #[test]
    fn positive_durations_become_millisecond_delays() {
        assert_eq!(auto_dismiss_delay(1), Some(Duration::from_millis(1)));
        assert_eq!(
            auto_dismiss_delay(DEFAULT_TOAST_DURATION_MS),
            Some(Duration::from_secs(3))
        );
    }
}
