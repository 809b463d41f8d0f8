use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Top-level interest domains, in the order every consumer walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKey {
    Sports,
    #[serde(rename = "moviesTV")]
    MoviesTv,
    News,
    Youtube,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::Sports,
        CategoryKey::MoviesTv,
        CategoryKey::News,
        CategoryKey::Youtube,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sports => "Sports",
            Self::MoviesTv => "Movies & TV",
            Self::News => "News",
            Self::Youtube => "YouTube",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
}

impl Tag {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory {
    pub id: String,
    pub label: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUpQuestion {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub key: CategoryKey,
    pub color: String,
    pub tags: Vec<Tag>,
    pub sub_categories: Vec<SubCategory>,
    pub follow_up_questions: Vec<FollowUpQuestion>,
}

impl CategoryNode {
    pub fn new(key: CategoryKey, color: &str) -> Self {
        Self {
            key,
            color: color.to_string(),
            tags: Vec::new(),
            sub_categories: Vec::new(),
            follow_up_questions: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_sub_category(mut self, id: &str, label: &str, tags: Vec<Tag>) -> Self {
        self.sub_categories.push(SubCategory {
            id: id.to_string(),
            label: label.to_string(),
            tags,
        });
        self
    }

    pub fn with_question(mut self, id: &str, text: &str) -> Self {
        self.follow_up_questions.push(FollowUpQuestion {
            id: id.to_string(),
            text: text.to_string(),
        });
        self
    }

    fn find_tag(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == tag_id).or_else(|| {
            self.sub_categories
                .iter()
                .find_map(|sub| sub.tags.iter().find(|t| t.id == tag_id))
        })
    }
}

/// Read-only catalogue of categories, tags and follow-up questions.
///
/// Lookups are linear scans in declaration order: for each category its flat
/// tags come first, then every sub-category's tags. When an id appears in more
/// than one place the first hit wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHierarchy {
    categories: Vec<CategoryNode>,
}

static BUILTIN: LazyLock<TagHierarchy> = LazyLock::new(TagHierarchy::builtin_catalogue);

impl TagHierarchy {
    pub fn new(categories: Vec<CategoryNode>) -> Self {
        Self { categories }
    }

    /// The catalogue shipped with the onboarding flow, built on first use.
    pub fn builtin() -> &'static TagHierarchy {
        &BUILTIN
    }

    pub fn categories(&self) -> &[CategoryNode] {
        &self.categories
    }

    pub fn category(&self, key: CategoryKey) -> Option<&CategoryNode> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn find_tag(&self, tag_id: &str) -> Option<&Tag> {
        self.categories.iter().find_map(|c| c.find_tag(tag_id))
    }

    /// Display label for a tag id; unknown ids label themselves.
    pub fn tag_label<'a>(&'a self, tag_id: &'a str) -> &'a str {
        self.find_tag(tag_id).map_or(tag_id, |t| t.label.as_str())
    }

    /// Question text for a follow-up id within one category; unknown ids
    /// resolve to the id itself.
    pub fn question_text<'a>(&'a self, key: CategoryKey, question_id: &'a str) -> &'a str {
        self.category(key)
            .and_then(|c| c.follow_up_questions.iter().find(|q| q.id == question_id))
            .map_or(question_id, |q| q.text.as_str())
    }

    pub fn color(&self, key: CategoryKey) -> Option<&str> {
        self.category(key).map(|c| c.color.as_str())
    }

    fn builtin_catalogue() -> Self {
        let sports = CategoryNode::new(CategoryKey::Sports, "accent-orange")
            .with_tags(vec![
                Tag::new("sports-f1", "Formula 1").with_icon("🏎️"),
                Tag::new("sports-tennis", "Tennis").with_icon("🎾"),
                Tag::new("sports-basketball", "Basketball").with_icon("🏀"),
                Tag::new("sports-chess", "Chess").with_icon("♟️"),
            ])
            .with_sub_category(
                "cricket",
                "Cricket",
                vec![
                    Tag::new("cricket-ipl", "IPL Cricket").with_icon("🏏"),
                    Tag::new("cricket-test", "Test Cricket"),
                    Tag::new("cricket-t20-world-cup", "T20 World Cup"),
                    Tag::new("cricket-team-india", "Team India"),
                ],
            )
            .with_sub_category(
                "football",
                "Football",
                vec![
                    Tag::new("football-premier-league", "Premier League").with_icon("⚽"),
                    Tag::new("football-la-liga", "La Liga"),
                    Tag::new("football-champions-league", "Champions League"),
                    Tag::new("football-isl", "Indian Super League"),
                ],
            )
            .with_question("sports_update_type", "What kind of sports updates do you want?")
            .with_question("sports_favorite_teams", "Any favourite teams or players we should track?");

        let movies_tv = CategoryNode::new(CategoryKey::MoviesTv, "accent-pink")
            .with_tags(vec![
                Tag::new("movies-bollywood", "Bollywood").with_icon("🎬"),
                Tag::new("movies-hollywood", "Hollywood"),
                Tag::new("movies-south-indian", "South Indian Cinema"),
                Tag::new("movies-anime", "Anime"),
            ])
            .with_sub_category(
                "streaming",
                "Streaming",
                vec![
                    Tag::new("streaming-netflix", "Netflix").with_icon("📺"),
                    Tag::new("streaming-prime-video", "Prime Video"),
                    Tag::new("streaming-hotstar", "Disney+ Hotstar"),
                ],
            )
            .with_question("movies_content_type", "What would you like to hear about?");

        let news = CategoryNode::new(CategoryKey::News, "accent-blue")
            .with_tags(vec![
                Tag::new("news-technology", "Technology").with_icon("💻"),
                Tag::new("news-business", "Business & Markets").with_icon("📈"),
                Tag::new("news-politics", "Politics"),
                Tag::new("news-science", "Science"),
                Tag::new("news-world", "World News").with_icon("🌍"),
                Tag::new("news-india", "India"),
            ])
            .with_question("news_depth", "How deep should news updates go?");

        let youtube = CategoryNode::new(CategoryKey::Youtube, "accent-purple")
            .with_tags(vec![
                Tag::new("youtube-tech-reviews", "Tech Reviews").with_icon("📱"),
                Tag::new("youtube-gaming", "Gaming").with_icon("🎮"),
                Tag::new("youtube-comedy", "Comedy"),
                Tag::new("youtube-education", "Education"),
                Tag::new("youtube-music", "Music").with_icon("🎵"),
            ])
            .with_question("youtube_creators", "Which creators do you follow?");

        Self::new(vec![sports, movies_tv, news, youtube])
    }
}
