use leptos::prelude::*;

/// Text color class for a chip drawn on the given background color.
pub fn tag_text_color(background: &str) -> &'static str {
    if background.contains("orange") {
        "chip--orange"
    } else if background.contains("pink") {
        "chip--pink"
    } else if background.contains("purple") {
        "chip--purple"
    } else if background.contains("teal") {
        "chip--teal"
    } else if background.contains("blue") {
        "chip--blue"
    } else {
        "chip--primary"
    }
}

#[component]
pub fn DisplayDetailTag(
    #[prop(into)] label: String,
    #[prop(into, default = "primary-lightest".to_string())] color: String,
    #[prop(into, default = None)] icon: Option<String>,
) -> impl IntoView {
    let class = format!("chip {}", tag_text_color(&color));
    view! {
        <span class=class>
            {icon.map(|icon| view! { <span class="chip__icon">{icon}</span> })}
            {label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_text_color() {
        assert_eq!(tag_text_color("accent-orange-light"), "chip--orange");
        assert_eq!(tag_text_color("accent-teal-light"), "chip--teal");
        assert_eq!(tag_text_color("accent-blue"), "chip--blue");
        assert_eq!(tag_text_color("primary-lightest"), "chip--primary");
    }
}
