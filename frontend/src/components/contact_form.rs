use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::contact::error::ContactField;
use crate::contact::form::{ContactDraft, FormStatus};
use crate::contact::submit::Submitter;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub submitter: Submitter,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);
    let status = use_state(FormStatus::default);
    let is_mounted = use_is_mounted();

    let onsubmit = {
        let draft = draft.clone();
        let status = status.clone();
        let submitter = props.submitter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*status).clone();
            if !next.begin() {
                return;
            }
            let submission = match draft.validate() {
                Ok(submission) => submission,
                Err(error) => {
                    status.set(FormStatus::Failed(error));
                    return;
                }
            };
            status.set(next);

            let status = status.clone();
            let is_mounted = is_mounted.clone();
            let request = submitter.submit(submission);
            wasm_bindgen_futures::spawn_local(async move {
                let result = request.await;
                if let Err(error) = &result {
                    gloo_console::error!("Contact submission failed:", error.to_string());
                }
                if !is_mounted() {
                    log::debug!("Contact form gone before the submission settled");
                    return;
                }
                let mut settled = FormStatus::Submitting;
                settled.finish(result);
                status.set(settled);
            });
        })
    };

    if let FormStatus::Submitted(ack) = &*status {
        return html! {
            <div class="contact-success">
                <h3>{"Thanks, we've got it."}</h3>
                <p>{"Someone from our team will get back to you within one business day."}</p>
                <p class="reference">{ format!("Reference: {}", ack.reference) }</p>
            </div>
        };
    }

    let editable = status.is_editable();
    let field_error = |field: ContactField| {
        status
            .error()
            .filter(|error| error.field() == Some(field))
            .map(|error| html! { <span class="field-error">{ error.to_string() }</span> })
            .unwrap_or_default()
    };

    let update = |apply: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };
    let on_name = update(|d, v| d.name = v);
    let on_email = update(|d, v| d.email = v);
    let on_company = update(|d, v| d.company = v);
    let on_message = update(|d, v| d.message = v);

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            <label>
                {"Name"}
                <input
                    type="text"
                    required=true
                    disabled={!editable}
                    value={draft.name.clone()}
                    oninput={move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_name(input.value());
                    }}
                />
                { field_error(ContactField::Name) }
            </label>
            <label>
                {"Email"}
                <input
                    type="email"
                    required=true
                    disabled={!editable}
                    value={draft.email.clone()}
                    oninput={move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_email(input.value());
                    }}
                />
                { field_error(ContactField::Email) }
            </label>
            <label>
                {"Company "}<span class="optional">{"(optional)"}</span>
                <input
                    type="text"
                    disabled={!editable}
                    value={draft.company.clone()}
                    oninput={move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_company(input.value());
                    }}
                />
            </label>
            <label>
                {"How can we help?"}
                <textarea
                    rows="6"
                    required=true
                    disabled={!editable}
                    value={draft.message.clone()}
                    oninput={move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        on_message(input.value());
                    }}
                />
                { field_error(ContactField::Message) }
            </label>
            {
                match status.error() {
                    Some(error) if !error.is_validation() => html! {
                        <div class="error-message">{ error.to_string() }</div>
                    },
                    _ => html! {},
                }
            }
            <button type="submit" class="hero-cta" disabled={!editable}>
                { if *status == FormStatus::Submitting { "Sending..." } else { "Send message" } }
            </button>
        </form>
    }
}
