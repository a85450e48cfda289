use super::*;

#[component]
/// Shared button primitive with color variants, size tokens, and optional icon slots.
///
/// Icons follow the button size: 16px for `Sm`, 20px for `Md`, 24px for `Lg`.
pub fn Button(
    #[prop(default = ButtonVariant::Main)] variant: ButtonVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] full: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let icon_size = size.icon_size();
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=aria_label
            title=title
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-full=bool_token(full)
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=icon_size ui_slot="leading-icon" /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=icon_size ui_slot="trailing-icon" /> })}
        </button>
    }
}

#[component]
/// Compact icon-only action such as a close cross or a month chevron.
pub fn IconButton(
    icon: IconName,
    #[prop(default = IconSize::Sm)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size />
        </button>
    }
}

#[component]
/// On/off switch with `role="switch"` semantics.
///
/// Pass `checked` to control the value from outside; leave it unset to let the switch keep
/// its own state starting from `default_checked`. Either way `on_toggle` receives the next
/// value, and a disabled switch ignores clicks.
pub fn Switch(
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_checked: bool,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let controlled = checked.is_some();
    let internal = create_rw_signal(default_checked);
    let is_on = Signal::derive(move || match checked {
        Some(checked) => checked.get(),
        None => internal.get(),
    });

    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        let next = !is_on.get_untracked();
        if !controlled {
            internal.set(next);
        }
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(next);
        }
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-switch", layout_class)
            role="switch"
            aria-label=aria_label
            aria-checked=move || is_on.get().to_string()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(is_on.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| handle_toggle()
        >
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
            </span>
        </button>
    }
}

#[component]
/// Labeled checkbox. Emits the negated value; the caller owns `checked`.
pub fn CheckboxField(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <input
                type="checkbox"
                data-ui-slot="control"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |_| {
                    if disabled.get_untracked() {
                        return;
                    }
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(!checked.get_untracked());
                    }
                }
            />
            {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
        </label>
    }
}

#[component]
/// Labeled radio button. Emits its own `value` when picked.
pub fn RadioField(
    #[prop(into)] value: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let emitted = value.clone();
    view! {
        <label
            class=merge_layout_class("ui-radio", layout_class)
            data-ui-primitive="true"
            data-ui-kind="radio"
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <input
                type="radio"
                data-ui-slot="control"
                name=name
                value=value
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |_| {
                    if disabled.get_untracked() {
                        return;
                    }
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(emitted.clone());
                    }
                }
            />
            {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
        </label>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of a [`SelectBox`].
pub struct SelectOption {
    /// Text shown to the user.
    pub label: String,
    /// Value reported through `on_change`.
    pub value: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Label of the option whose value is `selected`.
fn selected_label(options: &[SelectOption], selected: Option<&str>) -> Option<String> {
    let selected = selected?;
    options
        .iter()
        .find(|option| option.value == selected)
        .map(|option| option.label.clone())
}

#[component]
/// Custom dropdown with a button trigger and a popup option list.
///
/// The list opens above or below the trigger (`Top`/`Bottom`; other placements fall back to
/// below), closes after a selection, and closes on a pointer-down outside the box.
pub fn SelectBox(
    options: Vec<SelectOption>,
    #[prop(optional, into)] value: MaybeSignal<Option<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = PopupPlacement::Bottom)] placement: PopupPlacement,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let root = create_node_ref::<html::Div>();
    let options = store_value(options);
    let value = Signal::derive(move || value.get());
    let placeholder = placeholder.unwrap_or_else(|| "Select an option".to_string());
    let placement = match placement {
        PopupPlacement::Top => PopupPlacement::Top,
        _ => PopupPlacement::Bottom,
    };

    let trigger_label = move || {
        let selected = value.get();
        options
            .with_value(|options| selected_label(options, selected.as_deref()))
            .unwrap_or_else(|| placeholder.clone())
    };

    let select = move |picked: String| {
        open.set(false);
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(picked);
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-select", layout_class)
            node_ref=root
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-size=size.token()
            data-ui-placement=placement.token()
            data-ui-state=move || if open.get() { "open" } else { "closed" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <button
                type="button"
                data-ui-slot="trigger"
                aria-label=aria_label
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                disabled=move || disabled.get()
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        open.update(|open| *open = !*open);
                    }
                }
            >
                <span data-ui-slot="value">{trigger_label}</span>
                <Icon icon=IconName::ChevronDown size=size.icon_size() ui_slot="arrow" />
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <DismissListeners
                    root
                    escape=false
                    on_dismiss=Callback::new(move |_| open.set(false))
                />
                <MenuSurface role="listbox" ui_slot="options">
                    {options.with_value(|options| {
                        options
                            .iter()
                            .map(|option| {
                                let picked = option.value.clone();
                                let label = option.label.clone();
                                let is_selected = {
                                    let option_value = option.value.clone();
                                    move || value.get().as_deref() == Some(option_value.as_str())
                                };
                                view! {
                                    <MenuItem
                                        role="option"
                                        selected=Signal::derive(is_selected)
                                        on_click=Callback::new(move |_| select(picked.clone()))
                                    >
                                        {label}
                                    </MenuItem>
                                }
                            })
                            .collect_view()
                    })}
                </MenuSurface>
            </Show>
        </div>
    }
}

#[component]
/// Single-line text input with status border, optional clickable icons, and native types.
///
/// The border status resolves through [`FieldStatus::resolve`]: error, then success, then
/// focus.
pub fn TextField(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = InputType::Text)] input_type: InputType,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] success: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_leading_icon_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_trailing_icon_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let focused = create_rw_signal(false);
    let status =
        Signal::derive(move || FieldStatus::resolve(error.get(), success.get(), focused.get()));
    let placeholder = placeholder.unwrap_or_else(|| "Enter a value".to_string());
    let icon_size = size.icon_size();

    let field_icon = move |icon: IconName, slot: &'static str, handler: Option<Callback<MouseEvent>>| {
        view! {
            <button
                type="button"
                data-ui-slot=slot
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    if let Some(handler) = handler.as_ref() {
                        handler.call(ev);
                    }
                }
            >
                <Icon icon size=icon_size />
            </button>
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-text-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-size=size.token()
            data-ui-state=move || status.get().token()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {leading_icon.map(|icon| field_icon(icon, "leading-icon", on_leading_icon_click))}
            <input
                data-ui-slot="control"
                type=input_type.token()
                placeholder=placeholder
                aria-label=aria_label
                aria-invalid=move || bool_token(error.get())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
                on:focus=move |ev| {
                    focused.set(true);
                    if let Some(on_focus) = on_focus.as_ref() {
                        on_focus.call(ev);
                    }
                }
                on:blur=move |ev| {
                    focused.set(false);
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.call(ev);
                    }
                }
            />
            {trailing_icon.map(|icon| field_icon(icon, "trailing-icon", on_trailing_icon_click))}
        </div>
    }
}

#[component]
/// Multi-line, non-resizable text input with the same status rules as [`TextField`].
pub fn TextAreaField(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = 3)] rows: u32,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] success: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let focused = create_rw_signal(false);
    let status =
        Signal::derive(move || FieldStatus::resolve(error.get(), success.get(), focused.get()));
    let placeholder = placeholder.unwrap_or_else(|| "Enter some text".to_string());

    view! {
        <div
            class=merge_layout_class("ui-text-area", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-area"
            data-ui-size=size.token()
            data-ui-state=move || status.get().token()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <textarea
                data-ui-slot="control"
                rows=rows
                style="resize: none"
                placeholder=placeholder
                aria-label=aria_label
                aria-invalid=move || bool_token(error.get())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            ></textarea>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::new("Apple", "apple"),
            SelectOption::new("Banana", "banana"),
        ]
    }

    #[test]
    fn selected_label_finds_the_matching_option() {
        assert_eq!(selected_label(&fruit(), Some("banana")), Some("Banana".to_string()));
    }

    #[test]
    fn unknown_or_missing_selection_has_no_label() {
        assert_eq!(selected_label(&fruit(), Some("cherry")), None);
        assert_eq!(selected_label(&fruit(), None), None);
        assert_eq!(selected_label(&[], Some("apple")), None);
    }
}
