use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use gloo_console::{error, log};

use crate::config;
use crate::form::{self, CallbackRequest, PreferredTime, SubmitStatus};

#[function_component(CallbackForm)]
pub fn callback_form() -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let preferred_time = use_state(PreferredTime::default);
    let message = use_state(String::new);
    let status = use_state(SubmitStatus::default);

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let preferred_time = preferred_time.clone();
        let message = message.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }

            let request = CallbackRequest {
                name: (*name).clone(),
                phone: (*phone).clone(),
                preferred_time: *preferred_time,
                message: (*message).clone(),
            };
            if let Err(err) = request.validate() {
                status.set(SubmitStatus::Failed(err));
                return;
            }

            status.set(SubmitStatus::Submitting);
            let name = name.clone();
            let phone = phone.clone();
            let preferred_time = preferred_time.clone();
            let message = message.clone();
            let status = status.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match form::submit(config::get_form_endpoint(), &request).await {
                    Ok(()) => {
                        log!("Callback request submitted");
                        name.set(String::new());
                        phone.set(String::new());
                        preferred_time.set(PreferredTime::Unset);
                        message.set(String::new());
                        status.set(SubmitStatus::Succeeded);
                    }
                    Err(err) => {
                        error!("Form submission error:", err.to_string());
                        status.set(SubmitStatus::Failed(err));
                    }
                }
            });
        })
    };

    let submitting = status.is_submitting();

    html! {
        <form class="callback-form" onsubmit={onsubmit}>
            <style>
                {r#"
                .callback-form {
                    background: #fff;
                    padding: 2.5rem;
                    border-radius: 1rem;
                    box-shadow: 0 20px 40px rgba(10, 36, 99, 0.12);
                    max-width: 36rem;
                    margin: 3rem auto 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .callback-form h2 {
                    text-align: center;
                    color: #0A2463;
                    margin: 0;
                }
                .callback-form .subtitle {
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.9rem;
                    margin: 0;
                }
                .callback-form label {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.25rem;
                }
                .callback-form input,
                .callback-form select,
                .callback-form textarea {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    font-size: 1rem;
                    box-sizing: border-box;
                }
                .callback-form textarea {
                    resize: none;
                }
                .phone-row {
                    display: flex;
                }
                .phone-row .prefix {
                    display: inline-flex;
                    align-items: center;
                    padding: 0 0.75rem;
                    background: #f3f4f6;
                    border: 1px solid #d1d5db;
                    border-right: none;
                    border-radius: 6px 0 0 6px;
                    color: #4b5563;
                }
                .phone-row input {
                    border-radius: 0 6px 6px 0;
                }
                .hint {
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin-top: 0.25rem;
                }
                .form-status {
                    text-align: center;
                    font-size: 0.9rem;
                    font-weight: 500;
                }
                .form-status.success { color: #16a34a; }
                .form-status.failure { color: #dc2626; }
                .callback-submit {
                    background: #E6AF2E;
                    color: #0A2463;
                    font-weight: 600;
                    border: none;
                    border-radius: 6px;
                    padding: 0.7rem;
                    cursor: pointer;
                }
                .callback-submit:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }
                "#}
            </style>
            <h2>{"Request a Callback"}</h2>
            <p class="subtitle">{"Fill in your details and we'll get in touch shortly."}</p>

            <div>
                <label for="callback-name">{"Full Name*"}</label>
                <input
                    id="callback-name"
                    type="text"
                    required=true
                    placeholder="John Doe"
                    value={(*name).clone()}
                    oninput={let name = name.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
            </div>

            <div>
                <label for="callback-phone">{"Phone Number*"}</label>
                <div class="phone-row">
                    <span class="prefix">{"+91"}</span>
                    <input
                        id="callback-phone"
                        type="tel"
                        required=true
                        placeholder="9876543210"
                        value={(*phone).clone()}
                        oninput={let phone = phone.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            phone.set(input.value());
                        }}
                    />
                </div>
                <p class="hint">{"We'll only call for clarification."}</p>
            </div>

            <div>
                <label for="callback-time">{"Preferred Time"}</label>
                <select
                    id="callback-time"
                    onchange={let preferred_time = preferred_time.clone(); move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        preferred_time.set(PreferredTime::from_value(&select.value()));
                    }}
                >
                    { for PreferredTime::ALL.iter().map(|time| html! {
                        <option value={time.value()} selected={*preferred_time == *time}>
                            {time.label()}
                        </option>
                    }) }
                </select>
            </div>

            <div>
                <label for="callback-message">{"Brief Description"}</label>
                <textarea
                    id="callback-message"
                    rows="3"
                    placeholder="Tell us a bit about your requirement..."
                    value={(*message).clone()}
                    oninput={let message = message.clone(); move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        message.set(input.value());
                    }}
                />
            </div>

            {
                match &*status {
                    SubmitStatus::Succeeded => html! {
                        <div class="form-status success">
                            {"Form submitted successfully. We'll contact you soon!"}
                        </div>
                    },
                    SubmitStatus::Failed(err) => html! {
                        <div class="form-status failure">{err.to_string()}</div>
                    },
                    _ => html! {},
                }
            }

            <button type="submit" class="callback-submit" disabled={submitting}>
                if submitting {
                    <i class="fas fa-spinner fa-spin"></i>{" Submitting..."}
                } else {
                    {"Request Callback"}
                }
            </button>
        </form>
    }
}
