mod handlers;

use axum::{routing::post, Extension, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use naarad_app::AppContext;
use naarad_ui::pages::{GenerateSampleFn, GetAlertFn, GetDashboardFn};
use naarad_ui::App;
use tower_http::compression::CompressionLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::from_env();

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<GetDashboardFn>();
    server_fn::axum::register_explicit::<GetAlertFn>();
    server_fn::axum::register_explicit::<GenerateSampleFn>();
    tracing::info!("Registered server functions: GetDashboardFn, GetAlertFn, GenerateSampleFn");

    let app = Router::new()
        .merge(handlers::routes())
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(Extension(app_context))
        .layer(session_layer)
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Sample previews limited to 5/min, 20/hour per user");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Naarad AI"</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>💬</text></svg>"/>
                <style>{CSS}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

const CSS: &str = r#"
:root {
    --primary: #25d366;
    --primary-dark: #128c7e;
    --primary-lightest: #dcf8c6;
    --base: #f4fbf6;
    --surface: #ffffff;
    --overlay: #e3efe7;
    --muted: #8a9a90;
    --text: #1f2d24;
    --danger: #c2410c;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 900px; margin: 0 auto; padding: 1.5rem; }
.section__title { font-size: 1.6rem; margin: 2.5rem 0 1rem; text-align: center; }
.button {
    display: inline-block; padding: 0.7rem 1.4rem; border-radius: 8px; border: none;
    font-weight: 600; cursor: pointer; text-decoration: none; font-size: 0.95rem;
}
.button--primary { background: var(--primary); color: #fff; }
.button--secondary { background: var(--overlay); color: var(--text); }
.button--ghost { background: transparent; color: var(--primary-dark); border: 1px solid var(--overlay); }
.button--danger { background: transparent; color: var(--danger); border: 1px solid var(--danger); }

.hero { display: grid; gap: 2rem; padding: 3rem 0 2rem; align-items: center; }
@media (min-width: 760px) { .hero { grid-template-columns: 1fr 1fr; } }
.hero__brand { color: var(--primary-dark); font-weight: 700; font-size: 1.4rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); font-weight: 800; margin: 0.5rem 0 1rem; }
.hero__subtitle { color: var(--muted); margin-bottom: 1rem; line-height: 1.6; }
.hero__tagline { color: var(--primary-dark); font-weight: 600; margin-bottom: 1.5rem; }

.steps__list, .features__grid { display: grid; gap: 1rem; list-style: none; }
@media (min-width: 760px) { .steps__list, .features__grid { grid-template-columns: repeat(4, 1fr); } }
.steps__item, .feature-card { background: var(--surface); border: 1px solid var(--overlay); border-radius: 12px; padding: 1.25rem; }
.steps__number { display: inline-block; width: 2rem; height: 2rem; line-height: 2rem; text-align: center; border-radius: 50%; background: var(--primary); color: #fff; font-weight: 700; margin-bottom: 0.5rem; }
.feature-card__icon { font-size: 1.8rem; }
.steps__item h3, .feature-card h3 { margin: 0.5rem 0; font-size: 1.05rem; }
.steps__item p, .feature-card p { color: var(--muted); font-size: 0.9rem; line-height: 1.5; }

.login-form { display: flex; flex-direction: column; gap: 0.6rem; max-width: 420px; margin: 0 auto; }
.login-form__input, .alert-card__name, input[type=time] {
    padding: 0.7rem 1rem; border: 2px solid var(--overlay); border-radius: 8px; font-size: 1rem; background: var(--surface);
}
.login-form__input:focus { outline: none; border-color: var(--primary); }

.wa-preview { background: #e5ddd5; border-radius: 16px; padding: 1rem; max-width: 380px; margin: 0 auto; }
.wa-preview__header { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.75rem; font-weight: 600; }
.wa-preview__avatar { width: 2rem; height: 2rem; border-radius: 50%; background: var(--primary-dark); color: #fff; text-align: center; line-height: 2rem; }
.wa-bubble { background: #fff; border-radius: 0 12px 12px 12px; padding: 0.75rem 1rem; box-shadow: 0 1px 1px rgba(0,0,0,0.1); }
.wa-bubble__emoji { font-size: 2rem; display: block; margin-bottom: 0.4rem; }
.wa-bubble__image { max-width: 100%; border-radius: 8px; margin-bottom: 0.4rem; }
.wa-bubble__text { white-space: pre-line; line-height: 1.5; }
.wa-bubble__action { display: block; margin-top: 0.75rem; padding-top: 0.5rem; border-top: 1px solid var(--overlay); color: #34b7f1; text-align: center; font-weight: 600; }

.dashboard__header { display: flex; justify-content: space-between; align-items: center; margin: 1rem 0 2rem; }
.dashboard__title { font-size: 2rem; }
.dashboard__subtitle { color: var(--muted); }
.dashboard__create { margin-bottom: 1.5rem; }
.dashboard__alerts { display: grid; gap: 1rem; }
.dashboard__empty, .dashboard__analytics, .dashboard__signed-out {
    background: var(--surface); border: 2px dashed var(--overlay); border-radius: 12px; padding: 2rem; text-align: center; margin: 1.5rem 0;
}
.dashboard__coming-soon { color: var(--muted); font-weight: 600; margin: 0.5rem 0; }

.alert-card { background: var(--surface); border: 1px solid var(--overlay); border-radius: 12px; padding: 1.25rem; }
.alert-card__header, .alert-card__actions, .alert-card__rename { display: flex; gap: 0.5rem; align-items: center; justify-content: space-between; }
.alert-card__frequency { margin: 0.75rem 0; color: var(--muted); }
.alert-card__interests { display: flex; flex-wrap: wrap; gap: 0.4rem; margin-bottom: 1rem; }
.alert-card__empty { color: var(--muted); font-style: italic; }
.alert-card__status { border: none; border-radius: 999px; padding: 0.3rem 0.9rem; font-weight: 600; cursor: pointer; }
.alert-card__status--active { background: var(--primary-lightest); color: #166534; }
.alert-card__status--paused { background: #fde68a; color: #92400e; }

.chip { padding: 0.25rem 0.65rem; border-radius: 999px; font-size: 0.75rem; font-weight: 500; border: 1px solid rgba(0,0,0,0.05); }
.chip__icon { margin-right: 0.3rem; }
.chip--orange { background: #ffedd5; color: #c2410c; }
.chip--pink { background: #fce7f3; color: #be185d; }
.chip--purple { background: #f3e8ff; color: #7e22ce; }
.chip--teal { background: #ccfbf1; color: #0f766e; }
.chip--blue { background: #dbeafe; color: #1d4ed8; }
.chip--primary { background: var(--primary-lightest); color: #166534; }

.progress { display: flex; gap: 1rem; list-style: none; justify-content: center; margin: 1rem 0 2rem; }
.progress__step { color: var(--muted); display: flex; gap: 0.4rem; align-items: center; }
.progress__number { width: 1.6rem; height: 1.6rem; border-radius: 50%; border: 2px solid var(--overlay); text-align: center; line-height: 1.3rem; }
.progress__step--done .progress__number { background: var(--primary-dark); color: #fff; border-color: var(--primary-dark); }
.progress__step--current { color: var(--text); font-weight: 600; }
.progress__step--current .progress__number { border-color: var(--primary); }

.frequency-form { background: var(--surface); border-radius: 12px; padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem; }
.frequency-form__options { border: none; display: grid; gap: 0.5rem; }
.frequency-form__option { display: flex; gap: 0.5rem; align-items: center; padding: 0.6rem; border: 1px solid var(--overlay); border-radius: 8px; }
.frequency-form__platform p { color: var(--muted); font-size: 0.85rem; }
.preview__notice { text-align: center; color: var(--muted); }

.loading__text { margin: 1rem 0; color: var(--muted); font-style: italic; text-align: center; }
.error { background: #fff1f2; border: 2px solid #fda4af; border-radius: 8px; padding: 1rem 1.25rem; margin: 1rem 0; }
.error__title { color: #be123c; font-weight: 700; margin-bottom: 0.25rem; }
.error__message { color: #881337; }
.error__retry { display: inline-block; margin-top: 0.75rem; color: #be123c; font-weight: 600; }
"#;
