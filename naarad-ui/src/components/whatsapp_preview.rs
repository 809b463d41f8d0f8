use leptos::prelude::*;
use naarad_app::domain::SampleMessage;

/// A sample message drawn as an incoming WhatsApp bubble.
#[component]
pub fn WhatsAppPreview(message: SampleMessage) -> impl IntoView {
    let SampleMessage {
        summary_text,
        image_url,
        action_text,
    } = message;

    let image = if image_url.starts_with("http") {
        view! { <img class="wa-bubble__image" src=image_url alt=""/> }.into_any()
    } else if image_url.is_empty() {
        ().into_any()
    } else {
        view! { <span class="wa-bubble__emoji">{image_url}</span> }.into_any()
    };

    view! {
        <div class="wa-preview">
            <div class="wa-preview__header">
                <span class="wa-preview__avatar">"N"</span>
                <span class="wa-preview__name">"Naarad AI"</span>
            </div>
            <div class="wa-bubble">
                {image}
                <p class="wa-bubble__text">{summary_text}</p>
                <span class="wa-bubble__action">{action_text}</span>
            </div>
        </div>
    }
}
