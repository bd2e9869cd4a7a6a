use yew::prelude::*;

use crate::api;
use crate::content;
use crate::fetch::use_fetch;

use super::contact_form::ContactForm;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let state = use_fetch((), api::contact_section);
    let fallback = content::fallback_contact_section();
    let copy = state.data.clone().unwrap_or_else(|| fallback.clone());
    let submit_text = content::text_or(&copy.form_submit_text, &fallback.form_submit_text);
    let success_message = content::text_or(&copy.form_success_message, &fallback.form_success_message);

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-copy">
                <span class="contact-eyebrow">{&copy.subtitle}</span>
                <h2>{&copy.title}</h2>
                <p>{&copy.description}</p>
                if !copy.email.is_empty() {
                    <a class="contact-email" href={format!("mailto:{}", copy.email)}>{&copy.email}</a>
                }
                if !copy.phone.is_empty() {
                    <span class="contact-detail">{&copy.phone}</span>
                }
                if !copy.address.is_empty() {
                    <span class="contact-detail">{&copy.address}</span>
                }
            </div>
            <ContactForm
                {submit_text}
                {success_message}
            />
            <style>
                {r#"
                .contact-section {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 4rem;
                    justify-content: center;
                    padding: 120px 24px;
                    background: linear-gradient(135deg, #111827, #1f2937);
                    color: #fff;
                }
                .contact-copy {
                    max-width: 420px;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .contact-eyebrow {
                    color: #7EB2FF;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    font-size: 0.85rem;
                }
                .contact-copy h2 {
                    font-size: 2.6rem;
                    margin: 0;
                }
                .contact-copy p, .contact-detail {
                    color: #bbb;
                    line-height: 1.6;
                }
                .contact-email {
                    color: #1E90FF;
                    text-decoration: none;
                }
                "#}
            </style>
        </section>
    }
}
