use leptos::prelude::*;

#[component]
pub fn ErrorDisplay(
    #[prop(into)] message: String,
    /// Where the "Try again" link points, if anywhere.
    #[prop(optional, into)]
    retry_href: Option<String>,
) -> impl IntoView {
    view! {
        <div class="error">
            <p class="error__title">"Something went wrong"</p>
            <p class="error__message">{message}</p>
            {retry_href.map(|href| view! {
                <a href=href class="error__retry">"Try Again"</a>
            })}
        </div>
    }
}
