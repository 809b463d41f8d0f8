use super::DisplayDetailTag;
use leptos::prelude::*;
use naarad_app::domain::{Alert, CategoryKey, TagHierarchy};

const CUSTOM_INTEREST_COLOR: &str = "accent-teal-light";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestChip {
    pub label: String,
    pub color: String,
    pub icon: Option<String>,
}

/// One chip per interest on the alert, in category order followed by custom
/// interests. Unknown tag ids show the raw id and no icon.
pub fn interest_chips(alert: &Alert, hierarchy: &TagHierarchy) -> Vec<InterestChip> {
    let mut chips = Vec::new();
    for key in CategoryKey::ALL {
        let color = hierarchy
            .color(key)
            .map(|c| format!("{}-light", c))
            .unwrap_or_else(|| "primary-lightest".to_string());
        for tag_id in &alert.preferences(key).selected_tags {
            chips.push(InterestChip {
                label: hierarchy.tag_label(tag_id).to_string(),
                color: color.clone(),
                icon: hierarchy.find_tag(tag_id).and_then(|t| t.icon.clone()),
            });
        }
    }
    chips.extend(
        alert
            .custom_interest_tags
            .iter()
            .map(|tag| InterestChip {
                label: tag.clone(),
                color: CUSTOM_INTEREST_COLOR.to_string(),
                icon: None,
            }),
    );
    chips
}

#[component]
pub fn AlertCard(alert: Alert) -> impl IntoView {
    let chips = interest_chips(&alert, TagHierarchy::builtin());
    let base = format!("/alerts/{}", alert.id);
    let (status_class, status_label, toggle_label) = if alert.is_active {
        ("alert-card__status alert-card__status--active", "Active", "Pause")
    } else {
        ("alert-card__status alert-card__status--paused", "Paused", "Resume")
    };

    view! {
        <article class="alert-card">
            <header class="alert-card__header">
                <form action=format!("{}/rename", base) method="post" class="alert-card__rename">
                    <input
                        type="text"
                        name="name"
                        class="alert-card__name"
                        value=alert.name.clone()
                        aria-label="Alert name"
                        required
                    />
                    <button type="submit" class="button button--ghost">"Save"</button>
                </form>
                <form action=format!("{}/toggle", base) method="post">
                    <button type="submit" class=status_class title=toggle_label>
                        {status_label}
                    </button>
                </form>
            </header>

            <p class="alert-card__frequency">
                "Updates: " <strong>{alert.frequency_line()}</strong>
            </p>

            <div class="alert-card__interests">
                {if chips.is_empty() {
                    view! { <p class="alert-card__empty">"No interests selected yet."</p> }.into_any()
                } else {
                    chips
                        .into_iter()
                        .map(|chip| view! {
                            <DisplayDetailTag label=chip.label color=chip.color icon=chip.icon/>
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <footer class="alert-card__actions">
                <a href=format!("{}/frequency", base) class="button button--secondary">"Edit"</a>
                <form action=format!("{}/delete", base) method="post">
                    <button type="submit" class="button button--danger">"Delete"</button>
                </form>
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_chips_follow_category_order() {
        let mut alert = Alert::new("Morning");
        alert.custom_interest_tags.push("Rust".to_string());
        alert.preferences_mut(CategoryKey::News).select_tag("news-technology");
        alert.preferences_mut(CategoryKey::Sports).select_tag("zzz-unknown");

        let chips = interest_chips(&alert, TagHierarchy::builtin());

        let summary: Vec<(&str, &str, Option<&str>)> = chips
            .iter()
            .map(|c| (c.label.as_str(), c.color.as_str(), c.icon.as_deref()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("zzz-unknown", "accent-orange-light", None),
                ("Technology", "accent-blue-light", Some("💻")),
                ("Rust", "accent-teal-light", None),
            ]
        );
    }
}
