use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_console::error;

use crate::signup::delivery::Delivery;
use crate::signup::state::{FormAction, FormState, Phase};

#[derive(Properties, PartialEq)]
pub struct EmailSignupProps {
    /// Where accepted submissions go. Defaults to the simulated backend.
    #[prop_or_default]
    pub delivery: Delivery,
}

#[function_component(EmailSignup)]
pub fn email_signup(props: &EmailSignupProps) -> Html {
    let state = use_reducer(FormState::new);

    // Delivery fires exactly once per entry into Submitting. The request is
    // built here, synchronously, so later keystrokes cannot change what was
    // submitted.
    {
        let state = state.clone();
        let delivery = props.delivery.clone();
        let phase = state.phase;
        use_effect_with_deps(
            move |phase| {
                if *phase == Phase::Submitting {
                    let request = state.request();
                    wasm_bindgen_futures::spawn_local(async move {
                        match delivery.submit(request).await {
                            Ok(()) => state.dispatch(FormAction::DeliverySucceeded),
                            Err(e) => {
                                error!("Error submitting form:", e.to_string());
                                state.dispatch(FormAction::DeliveryFailed);
                            }
                        }
                    });
                }
                || ()
            },
            phase,
        );
    }

    let on_name_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::EditName(input.value()));
        })
    };

    let on_email_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::EditEmail(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(FormAction::Submit);
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(FormAction::Reset);
        })
    };

    let submitting = state.phase == Phase::Submitting;

    html! {
        <div class="email-signup">
            <style>
                {r#"
                    .email-signup .signup-card {
                        background: #ffffff;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.1);
                        border: 1px solid #e5e7eb;
                    }
                    .email-signup .signup-card h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #111827;
                        text-align: center;
                        margin: 0 0 1rem 0;
                    }
                    .email-signup .signup-field {
                        margin-bottom: 1rem;
                    }
                    .email-signup label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.25rem;
                    }
                    .email-signup .signup-input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                        font-size: 1rem;
                    }
                    .email-signup .signup-input:focus {
                        outline: none;
                        border-color: #2563eb;
                        box-shadow: 0 0 0 2px rgba(37, 99, 235, 0.3);
                    }
                    .email-signup .signup-input-error {
                        border-color: #fca5a5;
                    }
                    .email-signup .signup-input-error:focus {
                        border-color: #ef4444;
                        box-shadow: 0 0 0 2px rgba(239, 68, 68, 0.3);
                    }
                    .email-signup .signup-error {
                        color: #dc2626;
                        font-size: 0.875rem;
                        margin: 0.25rem 0 0 0;
                    }
                    .email-signup .signup-retry {
                        color: #dc2626;
                        font-size: 0.875rem;
                        text-align: center;
                        margin: 0 0 1rem 0;
                    }
                    .email-signup .signup-submit {
                        width: 100%;
                        background: #2563eb;
                        color: #ffffff;
                        font-weight: 600;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        transition: background-color 0.2s;
                    }
                    .email-signup .signup-submit:hover {
                        background: #1d4ed8;
                    }
                    .email-signup .signup-submit:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .email-signup .signup-fine-print {
                        font-size: 0.75rem;
                        color: #6b7280;
                        text-align: center;
                        margin: 1rem 0 0 0;
                    }
                    .email-signup .signup-success {
                        text-align: center;
                        padding: 1.5rem;
                        background: #f0fdf4;
                        border-radius: 0.5rem;
                        border: 1px solid #bbf7d0;
                    }
                    .email-signup .signup-success-check {
                        color: #16a34a;
                        font-size: 1.5rem;
                        margin-bottom: 0.5rem;
                    }
                    .email-signup .signup-success h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #166534;
                        margin: 0 0 0.5rem 0;
                    }
                    .email-signup .signup-success p {
                        color: #15803d;
                        margin: 0;
                    }
                    .email-signup .signup-again {
                        background: none;
                        border: none;
                        color: #16a34a;
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                        text-decoration: underline;
                        cursor: pointer;
                    }
                    .email-signup .signup-again:hover {
                        color: #15803d;
                    }
                "#}
            </style>
            {
                if state.phase == Phase::Submitted {
                    html! {
                        <div class="signup-success" role="status">
                            <div class="signup-success-check">{"✓"}</div>
                            <h3>{"Thank you!"}</h3>
                            <p>{"We'll be in touch soon to discuss your AI project."}</p>
                            <button class="signup-again" onclick={on_reset}>
                                {"Submit another email"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="signup-card">
                            <h3>{"Free AI Consultation"}</h3>
                            <form onsubmit={onsubmit}>
                                <div class="signup-field">
                                    <label for="signup-name">{"Name (optional)"}</label>
                                    <input
                                        type="text"
                                        id="signup-name"
                                        class="signup-input"
                                        placeholder="Your name"
                                        value={state.name.clone()}
                                        oninput={on_name_input}
                                    />
                                </div>
                                <div class="signup-field">
                                    <label for="signup-email">{"Email Address *"}</label>
                                    <input
                                        type="email"
                                        id="signup-email"
                                        class={classes!(
                                            "signup-input",
                                            if state.field_error.is_some() { "signup-input-error" } else { "" }
                                        )}
                                        placeholder="your.email@company.com"
                                        value={state.email.clone()}
                                        oninput={on_email_input}
                                        aria-invalid={state.field_error.is_some().then(|| "true")}
                                        aria-describedby={state.field_error.is_some().then(|| "signup-email-error")}
                                    />
                                    {
                                        if let Some(message) = state.field_error.as_ref() {
                                            html! { <p id="signup-email-error" class="signup-error">{message}</p> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                                {
                                    if let Some(message) = state.submit_error.as_ref() {
                                        html! { <p class="signup-retry" role="alert">{message}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <button type="submit" class="signup-submit" disabled={submitting}>
                                    { if submitting { "Submitting..." } else { "Get Free Consultation" } }
                                </button>
                                <p class="signup-fine-print">
                                    {"No spam, just valuable AI insights and consultation opportunities."}
                                </p>
                            </form>
                        </div>
                    }
                }
            }
        </div>
    }
}
