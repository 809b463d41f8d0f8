use leptos::prelude::*;

/// Step bar for the alert setup flow. `current` is 1-based.
#[component]
pub fn ProgressIndicator(current: usize, steps: Vec<&'static str>) -> impl IntoView {
    view! {
        <ol class="progress">
            {steps.into_iter().enumerate().map(|(i, step)| {
                let number = i + 1;
                let class = if number < current {
                    "progress__step progress__step--done"
                } else if number == current {
                    "progress__step progress__step--current"
                } else {
                    "progress__step"
                };
                view! {
                    <li class=class>
                        <span class="progress__number">{number}</span>
                        <span class="progress__label">{step}</span>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ol>
    }
}
