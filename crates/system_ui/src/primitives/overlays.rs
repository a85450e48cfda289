use super::*;

const DEFAULT_PRIMARY_LABEL: &str = "Confirm";
const DEFAULT_SECONDARY_LABEL: &str = "Cancel";

/// Primary and secondary button captions, falling back to "Confirm" and "Cancel".
fn action_labels(primary: Option<String>, secondary: Option<String>) -> (String, String) {
    (
        primary.unwrap_or_else(|| DEFAULT_PRIMARY_LABEL.to_string()),
        secondary.unwrap_or_else(|| DEFAULT_SECONDARY_LABEL.to_string()),
    )
}

#[component]
/// Shared overlay surface for menus and popup lists.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared overlay menu item primitive.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-menu-item", layout_class)
            role=role
            aria-selected=move || selected.get().to_string()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Confirm-style dialog with a title, an optional description, and up to two actions.
///
/// Actions without a handler close the dialog. Escape closes it while open, and so does a
/// click on the backdrop unless `close_on_overlay` is off.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = DialogButtons::Pair)] buttons: DialogButtons,
    #[prop(optional, into)] primary_label: Option<String>,
    #[prop(optional, into)] secondary_label: Option<String>,
    #[prop(optional)] on_primary: Option<Callback<()>>,
    #[prop(optional)] on_secondary: Option<Callback<()>>,
    #[prop(default = true)] close_on_overlay: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let (primary_label, secondary_label) = action_labels(primary_label, secondary_label);
    let handle_primary = move |_: MouseEvent| on_primary.unwrap_or(on_close).call(());
    let handle_secondary = move |_: MouseEvent| on_secondary.unwrap_or(on_close).call(());

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <EscapeListener on_escape=on_close />
            <div
                class="ui-overlay"
                data-ui-primitive="true"
                data-ui-kind="overlay"
                on:click=move |_| {
                    if close_on_overlay {
                        on_close.call(());
                    }
                }
            >
                <div
                    class=merge_layout_class("ui-modal", layout_class)
                    role="dialog"
                    aria-modal="true"
                    aria-label=title.clone()
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-size=size.token()
                    data-ui-buttons=buttons.token()
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    <div data-ui-slot="title">{title.clone()}</div>
                    {description
                        .clone()
                        .map(|description| view! { <div data-ui-slot="description">{description}</div> })}
                    {(buttons != DialogButtons::None)
                        .then(|| {
                            let primary_label = primary_label.clone();
                            view! {
                                <div data-ui-slot="actions">
                                    {(buttons == DialogButtons::Pair)
                                        .then(|| {
                                            let secondary_label = secondary_label.clone();
                                            view! {
                                                <Button
                                                    variant=ButtonVariant::Sub1
                                                    size=ControlSize::Sm
                                                    on_click=Callback::new(handle_secondary)
                                                >
                                                    {secondary_label}
                                                </Button>
                                            }
                                        })}
                                    <Button
                                        variant=ButtonVariant::Main
                                        size=ControlSize::Sm
                                        on_click=Callback::new(handle_primary)
                                    >
                                        {primary_label}
                                    </Button>
                                </div>
                            }
                        })}
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Content dialog with a configurable header, a free-form body, and an aligned footer.
///
/// The primary action does nothing without a handler; the secondary action falls back to
/// closing. The close icon can show even when `header` is [`DialogHeader::None`].
pub fn FormModal(
    #[prop(into)] open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(default = DialogHeader::Center)] header: DialogHeader,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = DialogButtons::Pair)] buttons: DialogButtons,
    #[prop(default = LayoutJustify::End)] footer_align: LayoutJustify,
    #[prop(optional, into)] primary_label: Option<String>,
    #[prop(optional, into)] secondary_label: Option<String>,
    #[prop(optional)] on_primary: Option<Callback<()>>,
    #[prop(optional)] on_secondary: Option<Callback<()>>,
    #[prop(default = true)] close_on_overlay: bool,
    #[prop(default = true)] show_close_icon: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let (primary_label, secondary_label) = action_labels(primary_label, secondary_label);
    let show_header = header != DialogHeader::None || show_close_icon;
    let handle_primary = move |_: MouseEvent| {
        if let Some(on_primary) = on_primary {
            on_primary.call(());
        }
    };
    let handle_secondary = move |_: MouseEvent| on_secondary.unwrap_or(on_close).call(());

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <EscapeListener on_escape=on_close />
            <div
                class="ui-overlay"
                data-ui-primitive="true"
                data-ui-kind="overlay"
                on:click=move |_| {
                    if close_on_overlay {
                        on_close.call(());
                    }
                }
            >
                <div
                    class=merge_layout_class("ui-form-modal", layout_class)
                    role="dialog"
                    aria-modal="true"
                    aria-label=title.clone()
                    data-ui-primitive="true"
                    data-ui-kind="form-modal"
                    data-ui-size=size.token()
                    data-ui-header=header.token()
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    {show_header
                        .then(|| {
                            view! {
                                <header data-ui-slot="header" data-ui-align=header.token()>
                                    {(header != DialogHeader::None)
                                        .then(|| {
                                            view! {
                                                <div data-ui-slot="heading">
                                                    {title
                                                        .clone()
                                                        .map(|title| view! { <div data-ui-slot="title">{title}</div> })}
                                                    {description
                                                        .clone()
                                                        .map(|description| {
                                                            view! { <div data-ui-slot="description">{description}</div> }
                                                        })}
                                                </div>
                                            }
                                        })}
                                    {show_close_icon
                                        .then(|| {
                                            view! {
                                                <IconButton
                                                    icon=IconName::Dismiss
                                                    aria_label="Close"
                                                    ui_slot="close"
                                                    on_click=Callback::new(move |_| on_close.call(()))
                                                />
                                            }
                                        })}
                                </header>
                            }
                        })}
                    <div data-ui-slot="body">{children()}</div>
                    {(buttons != DialogButtons::None)
                        .then(|| {
                            let primary_label = primary_label.clone();
                            view! {
                                <footer data-ui-slot="footer" data-ui-justify=footer_align.token()>
                                    {(buttons == DialogButtons::Pair)
                                        .then(|| {
                                            let secondary_label = secondary_label.clone();
                                            view! {
                                                <Button
                                                    variant=ButtonVariant::Sub2
                                                    size=ControlSize::Sm
                                                    on_click=Callback::new(handle_secondary)
                                                >
                                                    {secondary_label}
                                                </Button>
                                            }
                                        })}
                                    <Button
                                        variant=ButtonVariant::Main
                                        size=ControlSize::Sm
                                        on_click=Callback::new(handle_primary)
                                    >
                                        {primary_label}
                                    </Button>
                                </footer>
                            }
                        })}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn action_labels_default_to_confirm_and_cancel() {
        assert_eq!(
            action_labels(None, None),
            ("Confirm".to_string(), "Cancel".to_string())
        );
        assert_eq!(
            action_labels(Some("Delete".into()), None),
            ("Delete".to_string(), "Cancel".to_string())
        );
        assert_eq!(
            action_labels(None, Some("Back".into())),
            ("Confirm".to_string(), "Back".to_string())
        );
    }
}
