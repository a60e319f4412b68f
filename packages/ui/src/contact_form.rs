use std::time::Duration;

use dioxus::prelude::*;
use model::{ContactFormState, ContactSubmission, Field, SubmitStep};

use crate::icons::FaCheck;
use crate::Icon;

/// Contact form with inline validation and a simulated submission.
///
/// Once a submission succeeds the form is replaced by a confirmation card for
/// the rest of the component's life.
#[component]
pub fn ContactForm(#[props(default = 2000)] submit_delay_ms: u64) -> Element {
    let mut form = use_signal(ContactFormState::new);
    let mut values = use_signal(ContactSubmission::default);

    let handle_submit = move |_: ()| {
        let step = form.write().submit(values());
        match step {
            SubmitStep::Accepted(submission) => {
                spawn(async move {
                    let delay = Duration::from_millis(submit_delay_ms);
                    let result = api::submit_contact(submission, delay).await;
                    form.write().finish(result);
                });
            }
            SubmitStep::Rejected => {
                tracing::debug!("contact form has {} invalid field(s)", form.peek().errors.len());
            }
            SubmitStep::Ignored => {}
        }
    };

    rsx! {
        ContactFormPanel {
            state: form(),
            values: values(),
            on_input: move |(field, value): (Field, String)| values.write().set_field(field, value),
            on_toggle_subscribe: move |_| {
                let mut values = values.write();
                values.subscribe = !values.subscribe;
            },
            on_submit: handle_submit,
        }
    }
}

/// Stateless rendering of the form, its errors and the confirmation card.
#[component]
pub fn ContactFormPanel(
    state: ContactFormState,
    values: ContactSubmission,
    on_input: EventHandler<(Field, String)>,
    on_toggle_subscribe: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    if state.is_success() {
        return rsx! {
            div {
                class: "card",
                div {
                    class: "card-body items-center text-center",
                    div {
                        class: "text-success",
                        Icon { icon: FaCheck, width: 48, height: 48 }
                    }
                    h2 { class: "card-title text-success", "Thank you for your message!" }
                    p { "We'll get back to you soon." }
                }
            }
        };
    }

    let pending = state.is_pending();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-body",
                h2 { class: "card-title", "Contact Us" }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },

                    TextField {
                        id: "name",
                        label: "Name *",
                        placeholder: "Enter your name",
                        value: values.name.clone(),
                        error: state.error(Field::Name).map(str::to_string),
                        oninput: move |value| on_input.call((Field::Name, value)),
                    }
                    TextField {
                        id: "email",
                        label: "Email *",
                        placeholder: "Enter your email",
                        value: values.email.clone(),
                        error: state.error(Field::Email).map(str::to_string),
                        oninput: move |value| on_input.call((Field::Email, value)),
                    }
                    TextField {
                        id: "message",
                        label: "Message *",
                        placeholder: "Enter your message",
                        multiline: true,
                        value: values.message.clone(),
                        error: state.error(Field::Message).map(str::to_string),
                        oninput: move |value| on_input.call((Field::Message, value)),
                    }

                    div {
                        class: "form-control",
                        label {
                            r#for: "subscribe",
                            class: "label cursor-pointer",
                            input {
                                id: "subscribe",
                                name: "subscribe",
                                r#type: "checkbox",
                                class: "checkbox",
                                checked: values.subscribe,
                                onchange: move |_| on_toggle_subscribe.call(()),
                            }
                            span { class: "label-text", "Subscribe to newsletter" }
                        }
                    }

                    div {
                        class: "card-actions justify-end",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: pending,
                            if pending {
                                span { class: "loading loading-spinner" }
                            }
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}

/// Labelled input or textarea with an optional inline error.
#[component]
fn TextField(
    id: String,
    label: String,
    placeholder: String,
    value: String,
    #[props(!optional)] error: Option<String>,
    #[props(default)] multiline: bool,
    oninput: EventHandler<String>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div {
            class: "form-control",
            label {
                r#for: "{id}",
                class: "label",
                span { class: "label-text", "{label}" }
            }
            if multiline {
                textarea {
                    id: "{id}",
                    name: "{id}",
                    class: if invalid { "textarea textarea-error" } else { "textarea" },
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{id}",
                    r#type: "text",
                    class: if invalid { "input input-error" } else { "input" },
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
            if let Some(error) = error {
                label {
                    class: "label",
                    span { class: "label-text-alt text-error", "{error}" }
                }
            }
        }
    }
}
