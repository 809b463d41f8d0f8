use crate::components::{ErrorDisplay, WhatsAppPreview};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use naarad_app::domain::SampleMessage;

const STEPS: [(&str, &str); 4] = [
    (
        "Sign Up & Connect",
        "Quickly sign up with your email and WhatsApp number. It's secure and fast.",
    ),
    (
        "Tailor Your Interests",
        "Choose from diverse categories like sports, news, movies, and YouTube, or add your custom topics.",
    ),
    (
        "Set Your Pace",
        "Decide update frequency: real-time alerts, daily digests, or a custom schedule that suits you.",
    ),
    (
        "Enjoy Smart Updates",
        "Receive concise, relevant information directly in WhatsApp. Pure signal, no noise.",
    ),
];

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "💡",
        "Truly Personal",
        "Our AI understands your preferences deeply, curating updates that genuinely matter to you.",
    ),
    (
        "✅",
        "Effortless & Efficient",
        "Stay informed without the endless scrolling. Get key insights and news delivered concisely.",
    ),
    (
        "🏏",
        "All Interests, One Place",
        "From global news and sports leagues to niche hobbies and YouTube channels, we consolidate it all.",
    ),
    (
        "🔔",
        "Never Miss Out",
        "Timely alerts on topics you care about. Stop FOMO and stay ahead with information that counts.",
    ),
];

fn example_message() -> SampleMessage {
    SampleMessage::new(
        "🚀 Your Morning Tech Digest:\n\nGoogle teases 'Phoenix-7B', a new AI model set to redefine search. Apple's AR glasses could hit shelves next quarter! 🕶️\n\n🔥 Hot from YouTube: MKBHD dives into 'Pixel Fold 3' leaks - game-changer?",
        "💡",
        "Read Full Digest",
    )
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let query = use_query_map();
    let error = move || query.with(|q| q.get("error"));

    view! {
        <section class="hero">
            <div class="hero__copy">
                <p class="hero__brand">"Naarad AI"</p>
                <h1 class="hero__title">"Stop Drowning in Information."</h1>
                <p class="hero__subtitle">
                    <strong>"Naarad AI"</strong>
                    " delivers hyper-personalized updates for sports, news, movies, YouTube, and your unique interests, straight to your WhatsApp."
                </p>
                <p class="hero__tagline">"Never waste a second on pointless news again."</p>
                <a href="#login" class="button button--primary">"Create Your Feed Now"</a>
            </div>
            <WhatsAppPreview message=example_message()/>
        </section>

        <section class="steps">
            <h2 class="section__title">"Simple Steps to a Smarter Feed"</h2>
            <ol class="steps__list">
                {STEPS.iter().enumerate().map(|(i, (title, description))| view! {
                    <li class="steps__item">
                        <span class="steps__number">{i + 1}</span>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </li>
                }).collect::<Vec<_>>()}
            </ol>
        </section>

        <section class="features">
            <h2 class="section__title">"Why You'll Love It"</h2>
            <div class="features__grid">
                {FEATURES.iter().map(|(icon, title, description)| view! {
                    <div class="feature-card">
                        <span class="feature-card__icon">{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>

        <section class="login" id="login">
            <h2 class="section__title">"Get Started"</h2>
            {move || error().map(|message| view! { <ErrorDisplay message=message/> })}
            <form action="/auth/login" method="post" class="login-form">
                <label class="login-form__label" for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    name="email"
                    class="login-form__input"
                    placeholder="you@example.com"
                    required
                />
                <label class="login-form__label" for="whatsapp_number">"WhatsApp number"</label>
                <input
                    id="whatsapp_number"
                    type="tel"
                    name="whatsapp_number"
                    class="login-form__input"
                    placeholder="+919876543210"
                    required
                />
                <button type="submit" class="button button--primary">"Continue"</button>
            </form>
        </section>
    }
}
