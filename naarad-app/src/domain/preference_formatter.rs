use super::{Alert, CategoryKey, TagHierarchy, UserPreferences};
use std::fmt::Write;

/// Turns an alert into the plain-text block that grounds a generation request.
///
/// Output depends only on the alert (the user is accepted for future
/// personalisation and currently unused) and the tag hierarchy. Categories are
/// always written sports, movies/TV, news, YouTube, then custom interests;
/// empty categories are skipped entirely.
pub struct PreferenceFormatter<'a> {
    hierarchy: &'a TagHierarchy,
}

impl Default for PreferenceFormatter<'static> {
    fn default() -> Self {
        Self::new(TagHierarchy::builtin())
    }
}

impl<'a> PreferenceFormatter<'a> {
    pub fn new(hierarchy: &'a TagHierarchy) -> Self {
        Self { hierarchy }
    }

    pub fn format(&self, alert: &Alert, _user: &UserPreferences) -> String {
        let mut out = String::from("User's Alert Configuration:\n");
        let _ = writeln!(out, "- Alert Name: {}", alert.name);
        let _ = writeln!(out, "- Frequency: {}", alert.frequency_line());

        for key in CategoryKey::ALL {
            self.write_category(&mut out, alert, key);
        }

        if !alert.custom_interest_tags.is_empty() {
            let _ = writeln!(
                out,
                "- Custom Interests: {}",
                alert.custom_interest_tags.join(", ")
            );
        }

        out
    }

    fn write_category(&self, out: &mut String, alert: &Alert, key: CategoryKey) {
        let prefs = alert.preferences(key);
        let other_sport = match key {
            CategoryKey::Sports => prefs.other_sport(),
            _ => None,
        };
        let has_answers = prefs.follow_up_answers.values().any(|a| a.is_answered());

        let has_content = !prefs.selected_tags.is_empty()
            || other_sport.is_some()
            || has_answers
            || !prefs.instruction_tags.is_empty();
        if !has_content {
            return;
        }

        let _ = writeln!(out, "- {}:", key.label());

        if !prefs.selected_tags.is_empty() {
            let labels: Vec<&str> = prefs
                .selected_tags
                .iter()
                .map(|id| self.hierarchy.tag_label(id))
                .collect();
            let _ = writeln!(out, "  - Interests/Topics: {}", labels.join(", "));
        }

        if let Some(sport) = other_sport {
            let _ = writeln!(out, "  - Specified Other Sport: {sport}");
        }

        if has_answers {
            out.push_str("  - Additional Details (Fixed Q&A):\n");
            for (question_id, answer) in &prefs.follow_up_answers {
                let parts = answer.parts();
                if parts.is_empty() {
                    continue;
                }
                let question = self.hierarchy.question_text(key, question_id);
                let _ = writeln!(out, "    - Q: {question}");
                let _ = writeln!(out, "    - A: {}", parts.join("; "));
            }
        }

        if !prefs.instruction_tags.is_empty() {
            let _ = writeln!(
                out,
                "  - Specific Instructions (Tags): {}",
                prefs.instruction_tags.join(", ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FollowUpAnswer, UpdateFrequency};

    fn user() -> UserPreferences {
        UserPreferences::new("me@example.com".to_string(), "+919876543210".to_string())
    }

    fn format(alert: &Alert) -> String {
        PreferenceFormatter::default().format(alert, &user())
    }

    #[test]
    fn test_empty_alert_only_has_name_and_frequency() {
        let alert = Alert::new("Quiet");
        assert_eq!(
            format(&alert),
            "User's Alert Configuration:\n- Alert Name: Quiet\n- Frequency: Daily Digest\n"
        );
    }

    #[test]
    fn test_whitespace_only_fields_count_as_empty() {
        let mut alert = Alert::new("Quiet");
        alert.sports.other_sport_name = Some("   ".to_string());
        alert.news.follow_up_answers.insert(
            "news_depth".to_string(),
            FollowUpAnswer {
                selected_predefined_tags: vec![],
                custom_answer_via_other: Some("\t ".to_string()),
            },
        );
        assert_eq!(format(&alert).lines().count(), 3);
    }

    #[test]
    fn test_custom_frequency_suffix() {
        let mut alert = Alert::new("Evening");
        alert.frequency = UpdateFrequency::Custom;
        alert.custom_frequency_time = Some("14:30".to_string());
        assert!(format(&alert).contains("- Frequency: Custom at 14:30\n"));

        alert.frequency = UpdateFrequency::Hourly;
        let text = format(&alert);
        assert!(text.contains("- Frequency: Hourly\n"));
        assert!(!text.contains("14:30"));
    }

    #[test]
    fn test_full_alert_layout() {
        let mut alert = Alert::new("Match Day");
        alert.sports.select_tag("cricket-ipl");
        alert.sports.select_tag("zzz-unknown");
        alert.sports.other_sport_name = Some("  Kabaddi ".to_string());
        alert.sports.follow_up_answers.insert(
            "sports_update_type".to_string(),
            FollowUpAnswer {
                selected_predefined_tags: vec!["Live scores".to_string(), "Player stats".to_string()],
                custom_answer_via_other: Some(" fantasy tips ".to_string()),
            },
        );
        alert.sports.follow_up_answers.insert(
            "sports_favorite_teams".to_string(),
            FollowUpAnswer::default(),
        );
        alert.sports.instruction_tags = vec!["no spoilers".to_string()];
        alert.custom_interest_tags = vec!["Rust".to_string(), "Chess openings".to_string()];

        let expected = "User's Alert Configuration:\n\
- Alert Name: Match Day\n\
- Frequency: Daily Digest\n\
- Sports:\n  \
  - Interests/Topics: IPL Cricket, zzz-unknown\n  \
  - Specified Other Sport: Kabaddi\n  \
  - Additional Details (Fixed Q&A):\n    \
    - Q: What kind of sports updates do you want?\n    \
    - A: Live scores; Player stats; Other: fantasy tips\n  \
  - Specific Instructions (Tags): no spoilers\n\
- Custom Interests: Rust, Chess openings\n";
        assert_eq!(format(&alert), expected);
    }

    #[test]
    fn test_unknown_question_falls_back_to_id() {
        let mut alert = Alert::new("News");
        alert.news.follow_up_answers.insert(
            "mystery_question".to_string(),
            FollowUpAnswer {
                selected_predefined_tags: vec!["Yes".to_string()],
                custom_answer_via_other: None,
            },
        );
        let text = format(&alert);
        assert!(text.contains("- News:\n"));
        assert!(text.contains("    - Q: mystery_question\n    - A: Yes\n"));
    }

    #[test]
    fn test_category_order_is_fixed() {
        let mut alert = Alert::new("Everything");
        alert.custom_interest_tags = vec!["Astronomy".to_string()];
        alert.youtube.select_tag("youtube-gaming");
        alert.news.instruction_tags = vec!["only India".to_string()];
        alert.movies_tv.select_tag("movies-anime");
        alert.sports.select_tag("sports-f1");

        let text = format(&alert);
        let positions: Vec<usize> = [
            "- Sports:",
            "- Movies & TV:",
            "- News:",
            "- YouTube:",
            "- Custom Interests:",
        ]
        .iter()
        .map(|header| text.find(header).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_other_sport_is_ignored_outside_sports() {
        let mut alert = Alert::new("Films");
        alert.movies_tv.other_sport_name = Some("Curling".to_string());
        let text = format(&alert);
        assert!(!text.contains("Movies & TV"));
        assert!(!text.contains("Curling"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let mut alert = Alert::new("Repeat");
        alert.news.select_tag("news-world");
        for id in ["news_depth", "a_question", "z_question"] {
            alert.news.follow_up_answers.insert(
                id.to_string(),
                FollowUpAnswer {
                    selected_predefined_tags: vec![id.to_uppercase()],
                    custom_answer_via_other: None,
                },
            );
        }
        let copy = alert.clone();
        assert_eq!(format(&alert), format(&copy));
    }

    #[test]
    fn test_custom_hierarchy_is_used_for_labels() {
        use crate::domain::{CategoryNode, Tag};

        let hierarchy = TagHierarchy::new(vec![CategoryNode::new(CategoryKey::News, "accent-blue")
            .with_tags(vec![Tag::new("n1", "Local Politics")])]);
        let mut alert = Alert::new("Local");
        alert.news.select_tag("n1");

        let text = PreferenceFormatter::new(&hierarchy).format(&alert, &user());
        assert!(text.contains("  - Interests/Topics: Local Politics\n"));
    }
}
