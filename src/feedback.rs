use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const NAME_MAX_LEN: usize = 64;
const MESSAGE_MAX_LEN: usize = 1000;
const SUCCESS_HOLD_MS: u32 = 2000;
const SUCCESS_FADE_MS: u32 = 600;

const MISSING_FIELDS_MSG: &str = "Please fill in all fields.";
const SEND_FAILED_MSG: &str = "Failed to send feedback. Please try again.";

#[derive(Serialize)]
struct TemplateParams {
    name: String,
    message: String,
}

#[derive(Serialize)]
struct FeedbackRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

/// EmailJS identifiers are baked in at build time; Trunk exposes
/// `TRUNK_PUBLIC_`-prefixed variables to the build, so both spellings work.
fn emailjs_ids() -> Option<(&'static str, &'static str, &'static str)> {
    let service = option_env!("KURURI_EMAILJS_SERVICE_ID")
        .or(option_env!("TRUNK_PUBLIC_EMAILJS_SERVICE_ID"))?;
    let template = option_env!("KURURI_EMAILJS_TEMPLATE_ID")
        .or(option_env!("TRUNK_PUBLIC_EMAILJS_TEMPLATE_ID"))?;
    let user = option_env!("KURURI_EMAILJS_USER_ID")
        .or(option_env!("TRUNK_PUBLIC_EMAILJS_USER_ID"))?;
    Some((service, template, user))
}

async fn send_feedback(name: &str, message: &str) -> Result<(), String> {
    let Some((service_id, template_id, user_id)) = emailjs_ids() else {
        return Err("emailjs identifiers not configured".to_string());
    };
    let request = FeedbackRequest {
        service_id: service_id.to_string(),
        template_id: template_id.to_string(),
        user_id: user_id.to_string(),
        template_params: TemplateParams {
            name: name.to_string(),
            message: message.to_string(),
        },
    };
    let response = Request::post(EMAILJS_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(&request)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("status {}", response.status()))
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedbackModalProps {
    pub on_close: Callback<()>,
}

#[function_component(FeedbackModal)]
pub fn feedback_modal(props: &FeedbackModalProps) -> Html {
    let name = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let success = use_state(|| false);
    let fade_out = use_state(|| false);

    let on_name_input = {
        let name = name.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            name.set(input.value());
            error.set(None);
        })
    };
    let on_message_input = {
        let message = message.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            message.set(area.value());
            error.set(None);
        })
    };

    // Shared by the backdrop, the corner button, and Cancel. Ignored while
    // a send is in flight.
    let close_if_idle = {
        let loading = loading.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if !*loading {
                on_close.emit(());
            }
        })
    };
    let stop_bubble = Callback::from(|event: MouseEvent| event.stop_propagation());

    let on_submit = {
        let name = name.clone();
        let message = message.clone();
        let error = error.clone();
        let loading = loading.clone();
        let success = success.clone();
        let fade_out = fade_out.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }
            let trimmed_name = name.trim().to_string();
            let trimmed_message = message.trim().to_string();
            if trimmed_name.is_empty() || trimmed_message.is_empty() {
                error.set(Some(MISSING_FIELDS_MSG.to_string()));
                return;
            }
            loading.set(true);
            error.set(None);
            let name = name.clone();
            let message = message.clone();
            let error = error.clone();
            let loading = loading.clone();
            let success = success.clone();
            let fade_out = fade_out.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                match send_feedback(&trimmed_name, &trimmed_message).await {
                    Ok(()) => {
                        loading.set(false);
                        success.set(true);
                        name.set(String::new());
                        message.set(String::new());
                        Timeout::new(SUCCESS_HOLD_MS, move || {
                            fade_out.set(true);
                            Timeout::new(SUCCESS_FADE_MS, move || {
                                on_close.emit(());
                            })
                            .forget();
                        })
                        .forget();
                    }
                    Err(err) => {
                        gloo::console::warn!("feedback: send failed", err);
                        loading.set(false);
                        error.set(Some(SEND_FAILED_MSG.to_string()));
                    }
                }
            });
        })
    };

    let backdrop_class = if *fade_out {
        "modal-backdrop fade-out"
    } else {
        "modal-backdrop"
    };
    let dialog_class = if *fade_out {
        "feedback-modal fade-out"
    } else {
        "feedback-modal"
    };

    let error_line = match error.as_ref() {
        Some(text) => html! { <p class="form-error">{ text.clone() }</p> },
        None => html! {},
    };

    let body = if *success {
        html! {
            <div class="feedback-success">
                <span class="feedback-success-icon" aria-hidden="true">{ "✓" }</span>
                <p class="feedback-success-title">{ "Thank you!" }</p>
                <p class="feedback-success-text">{ "Your message was sent successfully." }</p>
            </div>
        }
    } else {
        html! {
            <form class="feedback-form" onsubmit={on_submit}>
                <label for="feedback-name">{ "Name" }</label>
                <input
                    id="feedback-name"
                    type="text"
                    maxlength={NAME_MAX_LEN.to_string()}
                    autocomplete="name"
                    value={(*name).clone()}
                    oninput={on_name_input}
                    disabled={*loading}
                />
                <label for="feedback-message">{ "Message" }</label>
                <textarea
                    id="feedback-message"
                    maxlength={MESSAGE_MAX_LEN.to_string()}
                    value={(*message).clone()}
                    oninput={on_message_input}
                    disabled={*loading}
                />
                { error_line }
                <div class="feedback-actions">
                    <button
                        class="feedback-cancel"
                        type="button"
                        onclick={close_if_idle.clone()}
                        disabled={*loading}
                    >
                        { "Cancel" }
                    </button>
                    <button class="feedback-send" type="submit" disabled={*loading}>
                        { if *loading { "Sending..." } else { "Send" } }
                    </button>
                </div>
            </form>
        }
    };

    html! {
        <div class={backdrop_class} onclick={close_if_idle.clone()}>
            <div class={dialog_class} onclick={stop_bubble}>
                <button
                    class="modal-close"
                    type="button"
                    aria-label="Close"
                    onclick={close_if_idle}
                    disabled={*loading}
                >
                    { "\u{00d7}" }
                </button>
                <h2>{ "Any Feedback?" }</h2>
                { body }
            </div>
        </div>
    }
}
