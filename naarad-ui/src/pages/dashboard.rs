use crate::components::{AlertCard, ErrorDisplay};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use naarad_app::domain::UserPreferences;
use server_fn::ServerFnError;

#[server(GetDashboardFn, "/api", endpoint = "dashboard")]
pub async fn get_dashboard() -> Result<Option<UserPreferences>, ServerFnError> {
    let session = super::user_session().await?;
    session
        .load()
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let user = Resource::new(|| (), |_| get_dashboard());
    let query = use_query_map();
    let error = move || query.with(|q| q.get("error"));

    view! {
        <Suspense fallback=move || view! { <p class="loading__text">"Loading your alerts..."</p> }>
            {move || {
                user.get().map(|result| match result {
                    Ok(Some(user)) => {
                        let delivered_to = format!("Delivered to {} at {}", user.platform, user.whatsapp_number);
                        view! {
                            <header class="dashboard__header">
                                <div>
                                    <h1 class="dashboard__title">"Your Alerts"</h1>
                                    <p class="dashboard__subtitle">{delivered_to}</p>
                                </div>
                                <form action="/auth/logout" method="post">
                                    <button type="submit" class="button button--ghost">"Logout"</button>
                                </form>
                            </header>

                            {move || error().map(|message| view! { <ErrorDisplay message=message/> })}

                            <form action="/alerts/new" method="post" class="dashboard__create">
                                <button type="submit" class="button button--primary">"+ Create New Alert"</button>
                            </form>

                            <AlertList user=user/>

                            <section class="dashboard__analytics">
                                <h2>"Your Analytics"</h2>
                                <p class="dashboard__coming-soon">"Coming Soon!"</p>
                                <p>"Track updates received and insights into your most engaged topics."</p>
                            </section>
                        }.into_any()
                    }
                    Ok(None) => view! {
                        <div class="dashboard__signed-out">
                            <p>"You are not logged in."</p>
                            <a href="/" class="button button--primary">"Go to the login page"</a>
                        </div>
                    }.into_any(),
                    Err(e) => view! {
                        <ErrorDisplay message=e.to_string() retry_href="/dashboard"/>
                    }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn AlertList(user: UserPreferences) -> impl IntoView {
    if user.alerts.is_empty() {
        return view! {
            <div class="dashboard__empty">
                <h2>"No Alerts Yet!"</h2>
                <p>"Click the button above to create your first personalized alert."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="dashboard__alerts">
            {user
                .alerts
                .into_iter()
                .map(|alert| view! { <AlertCard alert=alert/> })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
