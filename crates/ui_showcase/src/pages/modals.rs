use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalDemo {
    Confirm,
    Notice,
    Bare,
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormDemo {
    Centered,
    LeftHeader,
    Headless,
    SingleCentered,
}

#[component]
pub(crate) fn ModalsPage(console: ConsoleLog) -> impl IntoView {
    let open_modal = create_rw_signal::<Option<ModalDemo>>(None);
    let open_form = create_rw_signal::<Option<FormDemo>>(None);
    let name = create_rw_signal(String::new());
    let agreed = create_rw_signal(false);

    let is_modal = move |demo: ModalDemo| Signal::derive(move || open_modal.get() == Some(demo));
    let is_form = move |demo: FormDemo| Signal::derive(move || open_form.get() == Some(demo));
    let close_modal = Callback::new(move |_: ()| {
        console.log("modal closed");
        open_modal.set(None);
    });
    let close_form = Callback::new(move |_: ()| {
        console.log("form modal closed");
        open_form.set(None);
    });
    let launch_modal = move |demo: ModalDemo| {
        Callback::new(move |_| {
            console.log(format!("open modal {demo:?}"));
            open_modal.set(Some(demo));
        })
    };
    let launch_form = move |demo: FormDemo| {
        Callback::new(move |_| {
            console.log(format!("open form modal {demo:?}"));
            open_form.set(Some(demo));
        })
    };
    let submit_form = Callback::new(move |_: ()| {
        console.log(format!(
            "form submitted: name={:?} agreed={}",
            name.get_untracked(),
            agreed.get_untracked()
        ));
        open_form.set(None);
    });

    let form_body = move || {
        view! {
            <Stack gap=LayoutGap::Sm>
                <TextField
                    value=name
                    placeholder="Your name"
                    on_input=Callback::new(move |value| name.set(value))
                />
                <CheckboxField
                    label="I agree to the terms"
                    checked=agreed
                    on_change=Callback::new(move |checked| agreed.set(checked))
                />
            </Stack>
        }
    };

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel title="Modal" description="Zero, one or two actions; overlay click and Escape close.">
                <Cluster gap=LayoutGap::Sm>
                    <Button on_click=launch_modal(ModalDemo::Confirm)>"Two buttons"</Button>
                    <Button variant=ButtonVariant::Sub1 on_click=launch_modal(ModalDemo::Notice)>
                        "One button"
                    </Button>
                    <Button variant=ButtonVariant::Sub2 on_click=launch_modal(ModalDemo::Bare)>
                        "No buttons"
                    </Button>
                    <Button size=ControlSize::Sm on_click=launch_modal(ModalDemo::Small)>"SM"</Button>
                    <Button size=ControlSize::Lg on_click=launch_modal(ModalDemo::Large)>"LG"</Button>
                </Cluster>
            </Panel>
            <Panel title="Form modal" description="Dialogs hosting arbitrary content.">
                <Cluster gap=LayoutGap::Sm>
                    <Button on_click=launch_form(FormDemo::Centered)>"Centered header"</Button>
                    <Button variant=ButtonVariant::Sub1 on_click=launch_form(FormDemo::LeftHeader)>
                        "Left header"
                    </Button>
                    <Button variant=ButtonVariant::Sub2 on_click=launch_form(FormDemo::Headless)>
                        "No header"
                    </Button>
                    <Button variant=ButtonVariant::Sub2 on_click=launch_form(FormDemo::SingleCentered)>
                        "Single action"
                    </Button>
                </Cluster>
            </Panel>

            <Modal
                open=is_modal(ModalDemo::Confirm)
                on_close=close_modal
                title="Delete this item?"
                description="This cannot be undone."
                primary_label="Delete"
                on_primary=Callback::new(move |_| {
                    console.log("modal confirmed");
                    open_modal.set(None);
                })
            />
            <Modal
                open=is_modal(ModalDemo::Notice)
                on_close=close_modal
                title="Saved"
                description="Your changes were stored."
                buttons=DialogButtons::Single
                primary_label="OK"
            />
            <Modal
                open=is_modal(ModalDemo::Bare)
                on_close=close_modal
                title="Click outside or press Escape"
                buttons=DialogButtons::None
            />
            <Modal
                open=is_modal(ModalDemo::Small)
                on_close=close_modal
                size=ControlSize::Sm
                title="Small modal"
            />
            <Modal
                open=is_modal(ModalDemo::Large)
                on_close=close_modal
                size=ControlSize::Lg
                title="Large modal"
                description="Overlay clicks are ignored here."
                close_on_overlay=false
            />

            <FormModal
                open=is_form(FormDemo::Centered)
                on_close=close_form
                title="Sign up"
                description="Tell us who you are."
                on_primary=submit_form
            >
                {form_body}
            </FormModal>
            <FormModal
                open=is_form(FormDemo::LeftHeader)
                on_close=close_form
                header=DialogHeader::Left
                title="Sign up"
                footer_align=LayoutJustify::Between
                on_primary=submit_form
            >
                {form_body}
            </FormModal>
            <FormModal
                open=is_form(FormDemo::Headless)
                on_close=close_form
                header=DialogHeader::None
                show_close_icon=false
                on_primary=submit_form
            >
                {form_body}
            </FormModal>
            <FormModal
                open=is_form(FormDemo::SingleCentered)
                on_close=close_form
                buttons=DialogButtons::Single
                footer_align=LayoutJustify::Center
                title="Almost done"
                primary_label="Submit"
                on_primary=submit_form
            >
                {form_body}
            </FormModal>
        </Stack>
    }
}
