use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::{self, models::ContactSubmission};
use crate::contact::{self, Field, SubmitStatus};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub submit_text: String,
    pub success_message: String,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_state(ContactSubmission::default);
    let status = use_state(SubmitStatus::default);
    let invalid = use_state(|| None::<contact::FormError>);

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            contact::set_field(&mut next, field, value);
            form.set(next);
        })
    };
    let input = |field: Field| {
        let on_field = on_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit(input.value());
        })
    };
    let on_message = {
        let on_field = on_field(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_field.emit(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let invalid = invalid.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Submitting {
                return;
            }
            let cleaned = match contact::validate(&form) {
                Ok(cleaned) => cleaned,
                Err(problem) => {
                    invalid.set(Some(problem));
                    return;
                }
            };
            invalid.set(None);
            status.set(SubmitStatus::Submitting);

            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = contact::submit(cleaned, api::submit_contact_form).await;
                if outcome == SubmitStatus::Success {
                    form.set(ContactSubmission::default());
                }
                status.set(outcome);
            });
        })
    };

    let submitting = *status == SubmitStatus::Submitting;

    html! {
        <form class="contact-form" {onsubmit}>
            if *status == SubmitStatus::Success {
                <div class="form-status success">{&props.success_message}</div>
            }
            if *status == SubmitStatus::Error {
                <div class="form-status error">
                    <strong>{"Something went wrong."}</strong>
                    <p>{"Please try again or contact us directly."}</p>
                </div>
            }
            if let Some(problem) = *invalid {
                <div class="form-status error">{problem.to_string()}</div>
            }
            <label for="contact-name">{"Name"}</label>
            <input id="contact-name" type="text" placeholder="Your Name"
                value={form.name.clone()} oninput={input(Field::Name)} />
            <label for="contact-email">{"Email"}</label>
            <input id="contact-email" type="email" placeholder="jane@floneo.co"
                value={form.email.clone()} oninput={input(Field::Email)} />
            <label for="contact-company">{"Company"}</label>
            <input id="contact-company" type="text" placeholder="Company Name"
                value={form.company.clone()} oninput={input(Field::Company)} />
            <label for="contact-message">{"Message"}</label>
            <textarea id="contact-message" rows="5" placeholder="Tell us about your project..."
                value={form.message.clone()} oninput={on_message} />
            <button type="submit" class="contact-submit" disabled={submitting}>
                { if submitting { "Sending..." } else { props.submit_text.as_str() } }
            </button>
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    width: 100%;
                    max-width: 560px;
                }
                .contact-form label {
                    font-size: 0.85rem;
                    color: #aaa;
                    margin-top: 0.75rem;
                }
                .contact-form input, .contact-form textarea {
                    padding: 0.9rem 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    font-size: 1rem;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: none;
                    border-color: #1E90FF;
                }
                .contact-submit {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    border: none;
                    border-radius: 12px;
                    background: #1E90FF;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .contact-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .form-status {
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    text-align: center;
                }
                .form-status.success {
                    background: rgba(0, 208, 132, 0.15);
                    color: #5ee0a8;
                }
                .form-status.error {
                    background: rgba(231, 76, 60, 0.15);
                    color: #ff8a80;
                }
                "#}
            </style>
        </form>
    }
}
