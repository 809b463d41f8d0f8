use crate::components::{ErrorDisplay, ProgressIndicator, WhatsAppPreview};
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use naarad_app::domain::{Alert, SampleMessage, UpdateFrequency, WHATSAPP_PLATFORM};
use server_fn::ServerFnError;

const DEFAULT_CUSTOM_TIME: &str = "09:00";

#[server(GetAlertFn, "/api", endpoint = "alert")]
pub async fn get_alert(id: String) -> Result<Alert, ServerFnError> {
    use naarad_errors::AppError;

    let id = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServerFnError::new(AppError::AlertNotFound.user_message()))?;
    let user = super::user_session()
        .await?
        .require()
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))?;

    user.alert(id)
        .cloned()
        .map_err(|e| ServerFnError::new(e.user_message()))
}

/// One live preview for the alert. Past the visitor's preview limit this is
/// the placeholder sample.
#[server(GenerateSampleFn, "/api", endpoint = "generate_sample")]
pub async fn generate_sample(id: String) -> Result<SampleMessage, ServerFnError> {
    use naarad_app::AppContext;
    use naarad_errors::AppError;

    let ctx = expect_context::<AppContext>();

    let id = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServerFnError::new(AppError::AlertNotFound.user_message()))?;
    let user = super::user_session()
        .await?
        .require()
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))?;

    let alert = user
        .alert(id)
        .map_err(|e| ServerFnError::new(e.user_message()))?;

    Ok(ctx.preview_sample(alert, &user).await)
}

#[component]
pub fn FrequencySettingsPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let alert_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let error = move || query.with(|q| q.get("error"));

    let alert = Resource::new(alert_id, get_alert);
    let sample = Resource::new(alert_id, generate_sample);

    view! {
        <ProgressIndicator current=3 steps=vec!["Select Interests", "Fine-Tune Feed", "Set Cadence"]/>

        <Suspense fallback=move || view! { <p class="loading__text">"Loading alert..."</p> }>
            {move || {
                alert.get().map(|result| match result {
                    Ok(alert) => view! {
                        {move || error().map(|message| view! { <ErrorDisplay message=message/> })}
                        <FrequencyForm alert=alert/>
                    }.into_any(),
                    Err(e) => view! {
                        <ErrorDisplay message=e.to_string() retry_href="/dashboard"/>
                    }.into_any(),
                })
            }}
        </Suspense>

        <section class="preview">
            <h2 class="section__title">"Sample update"</h2>
            <Suspense fallback=move || view! { <p class="loading__text">"Writing a sample update..."</p> }>
                {move || {
                    sample.get().map(|result| match result {
                        Ok(message) => view! { <WhatsAppPreview message=message/> }.into_any(),
                        Err(e) => view! { <p class="preview__notice">{e.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn FrequencyForm(alert: Alert) -> impl IntoView {
    let custom_time = alert
        .custom_frequency_time
        .clone()
        .unwrap_or_else(|| DEFAULT_CUSTOM_TIME.to_string());
    let current = alert.frequency;

    view! {
        <form action=format!("/alerts/{}/frequency", alert.id) method="post" class="frequency-form">
            <h1 class="frequency-form__title">"Set Cadence for " {alert.name.clone()}</h1>

            <fieldset class="frequency-form__options">
                <legend>"How often should updates arrive?"</legend>
                {UpdateFrequency::ALL.into_iter().map(|freq| view! {
                    <label class="frequency-form__option">
                        <input
                            type="radio"
                            name="frequency"
                            value=freq.as_str()
                            checked={freq == current}
                        />
                        {freq.as_str()}
                    </label>
                }).collect::<Vec<_>>()}
            </fieldset>

            <label class="frequency-form__label" for="custom_time">
                "Preferred delivery time (for Custom)"
            </label>
            <input id="custom_time" type="time" name="custom_time" value=custom_time/>

            <div class="frequency-form__platform">
                <input type="radio" id="whatsapp-platform" checked=true disabled=true/>
                <label for="whatsapp-platform">{WHATSAPP_PLATFORM}</label>
                <p>"Updates are delivered on WhatsApp only for now."</p>
            </div>

            <button type="submit" class="button button--primary">"Confirm & Create Alert"</button>
        </form>
    }
}
