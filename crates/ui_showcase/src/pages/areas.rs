use super::*;

fn looks_like_email(value: &str) -> bool {
    value
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'))
}

#[component]
fn InputRow(console: ConsoleLog, size: ControlSize, size_label: &'static str) -> impl IntoView {
    let plain = create_rw_signal(String::new());
    let query = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let password_visible = create_rw_signal(false);

    let email_success = Signal::derive(move || looks_like_email(&email.get()));
    let email_error = Signal::derive(move || {
        let value = email.get();
        !value.is_empty() && !looks_like_email(&value)
    });

    view! {
        <Stack gap=LayoutGap::Sm>
            <Text role=TextRole::Label>{size_label}</Text>
            <TextField
                size
                value=plain
                aria_label=format!("{size_label} plain input")
                on_input=Callback::new(move |value| plain.set(value))
            />
            <TextField
                size
                value=query
                input_type=InputType::Search
                placeholder="Search components"
                leading_icon=IconName::Search
                on_input=Callback::new(move |value| query.set(value))
                on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        console.log(format!("{size_label} search submitted: {}", query.get_untracked()));
                    }
                })
            />
            <TextField
                size
                value=email
                input_type=InputType::Email
                placeholder="name@example.com"
                leading_icon=IconName::Mail
                success=email_success
                error=email_error
                on_input=Callback::new(move |value| email.set(value))
                on_blur=Callback::new(move |_| {
                    console.log(format!("{size_label} email blurred: {}", email.get_untracked()));
                })
            />
            {move || {
                let input_type = if password_visible.get() { InputType::Text } else { InputType::Password };
                view! {
                    <TextField
                        size
                        value=password
                        input_type
                        placeholder="Password"
                        trailing_icon=IconName::Eye
                        on_trailing_icon_click=Callback::new(move |_| {
                            password_visible.update(|visible| *visible = !*visible);
                            console.log(format!("{size_label} password visibility toggled"));
                        })
                        on_input=Callback::new(move |value| password.set(value))
                    />
                }
            }}
            <TextField size placeholder="Disabled" disabled=true />
        </Stack>
    }
}

#[component]
fn TextAreaRow(console: ConsoleLog, size: ControlSize, size_label: &'static str) -> impl IntoView {
    let note = create_rw_signal(String::new());
    let too_long = Signal::derive(move || note.with(|note| note.chars().count() > 120));

    view! {
        <Stack gap=LayoutGap::Sm>
            <Cluster justify=LayoutJustify::Between>
                <Text role=TextRole::Label>{size_label}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || format!("{} / 120", note.with(|note| note.chars().count()))}
                </Text>
            </Cluster>
            <TextAreaField
                size
                value=note
                error=too_long
                aria_label=format!("{size_label} note")
                on_input=Callback::new(move |value: String| {
                    if value.is_empty() {
                        console.log(format!("{size_label} text area cleared"));
                    }
                    note.set(value);
                })
            />
        </Stack>
    }
}

#[component]
pub(crate) fn AreasPage(console: ConsoleLog) -> impl IntoView {
    let inputs = SIZES
        .into_iter()
        .map(|(size, size_label)| view! { <InputRow console size size_label /> })
        .collect_view();
    let areas = SIZES
        .into_iter()
        .map(|(size, size_label)| view! { <TextAreaRow console size size_label /> })
        .collect_view();

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel title="Text input">
                <Stack gap=LayoutGap::Lg>{inputs}</Stack>
            </Panel>
            <Panel title="Text area" description="Turns red past 120 characters.">
                <Stack gap=LayoutGap::Lg>
                    {areas}
                    <TextAreaField placeholder="Disabled" rows=2 disabled=true />
                </Stack>
            </Panel>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check_needs_user_and_dotted_domain() {
        assert!(looks_like_email("kim@example.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("kim@localhost"));
        assert!(!looks_like_email("kim.example.com"));
    }
}
