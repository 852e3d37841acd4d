use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Badge color used when a post does not define its own.
pub const DEFAULT_BADGE_COLOR: &str = "#4559DC";

/// Read-only catalog entry from the insights feed.
///
/// The bookmark subsystem only filters these by id; it never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub image: String,
    pub badge_color: Option<String>,
    pub published: NaiveDate,
    pub read_minutes: u32,
}

impl InsightPost {
    pub fn badge_color_or_default(&self) -> &str {
        self.badge_color.as_deref().unwrap_or(DEFAULT_BADGE_COLOR)
    }

    pub fn published_label(&self) -> String {
        self.published.format("%b %-d, %Y").to_string()
    }

    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> InsightPost {
        InsightPost {
            id: "post-1".to_string(),
            title: "Test".to_string(),
            excerpt: "Excerpt".to_string(),
            category: "Markets".to_string(),
            image: "/assets/insights/test.jpg".to_string(),
            badge_color: None,
            published: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            read_minutes: 6,
        }
    }

    #[test]
    fn test_badge_color_falls_back_to_default() {
        let mut p = post();
        assert_eq!(p.badge_color_or_default(), DEFAULT_BADGE_COLOR);

        p.badge_color = Some("#16a34a".to_string());
        assert_eq!(p.badge_color_or_default(), "#16a34a");
    }

    #[test]
    fn test_labels() {
        let p = post();
        assert_eq!(p.published_label(), "Mar 12, 2025");
        assert_eq!(p.read_time_label(), "6 min read");
    }
}
