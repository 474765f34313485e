//! Read-only creator data shown on the dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The creator's primary public profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    pub display_name: String,
    pub username: String,
    #[serde(default)]
    pub bio: String,
    /// Badge text chosen by the creator; derived from the name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_initials: Option<String>,
    /// Member since
    pub joined: NaiveDate,
}

impl CreatorProfile {
    /// Text for the avatar badge: the stored initials if set, otherwise up
    /// to two initials taken from the display name
    pub fn initials(&self) -> String {
        if let Some(initials) = self
            .avatar_initials
            .as_deref()
            .map(str::trim)
            .filter(|initials| !initials.is_empty())
        {
            return initials.to_string();
        }

        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Publication state of a show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowStatus {
    Upcoming,
    Live,
    Past,
}

impl ShowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShowStatus::Upcoming => "Upcoming",
            ShowStatus::Live => "Live",
            ShowStatus::Past => "Past",
        }
    }
}

/// A show hosted by the creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub venue: String,
    pub status: ShowStatus,
    #[serde(default)]
    pub views: u64,
}

/// A tip received from a viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipRecord {
    pub id: String,
    /// Tipper's display name
    pub from: String,
    pub amount: f64,
    #[serde(default)]
    pub message: Option<String>,
    pub date: NaiveDate,
}

/// Kind of entry in the recent-activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    Tip,
    Follow,
    Comment,
    ShowPublished,
}

impl ActivityKind {
    /// Get the icon character for this activity
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Tip => "$",
            ActivityKind::Follow => "+",
            ActivityKind::Comment => "\"",
            ActivityKind::ShowPublished => "*",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub description: String,
    pub date: NaiveDate,
}

/// Aggregate figures computed upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Analytics {
    pub total_views: u64,
    pub total_tips: f64,
    pub followers: u64,
    /// Follower growth over the last month, in percent
    pub monthly_growth: f64,
}

/// Secondary public listing, separate from the primary profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub verified: bool,
}

/// Everything the dashboard displays, as supplied by the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSnapshot {
    pub profile: CreatorProfile,
    #[serde(default)]
    pub shows: Vec<Show>,
    #[serde(default)]
    pub recent_tips: Vec<TipRecord>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityItem>,
    #[serde(default)]
    pub analytics: Analytics,
    /// Absent until the creator sets one up
    #[serde(default)]
    pub business_profile: Option<BusinessProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let mut profile = CreatorProfile {
            display_name: "maya lin rivera".to_string(),
            username: "maya".to_string(),
            bio: String::new(),
            avatar_initials: None,
            joined: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        };
        assert_eq!(profile.initials(), "ML");

        profile.display_name = "Solo".to_string();
        assert_eq!(profile.initials(), "S");

        profile.display_name = "   ".to_string();
        assert_eq!(profile.initials(), "");
    }

    #[test]
    fn test_stored_initials_win_over_name() {
        let mut profile = CreatorProfile {
            display_name: "Maya Rivera".to_string(),
            username: "maya".to_string(),
            bio: String::new(),
            avatar_initials: Some(" MR+ ".to_string()),
            joined: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        };
        assert_eq!(profile.initials(), "MR+");

        profile.avatar_initials = Some("  ".to_string());
        assert_eq!(profile.initials(), "MR");
    }

    #[test]
    fn test_avatar_initials_from_json() {
        let json = r#"{
            "displayName": "Jordan Vale",
            "username": "jvale",
            "avatarInitials": "JV",
            "joined": "2022-11-05"
        }"#;

        let profile: CreatorProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.avatar_initials.as_deref(), Some("JV"));
        assert_eq!(profile.initials(), "JV");
    }

    #[test]
    fn test_minimal_snapshot_parses() {
        let json = r#"{
            "profile": {
                "displayName": "Jordan Vale",
                "username": "jvale",
                "joined": "2022-11-04"
            }
        }"#;

        let snapshot: CreatorSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.profile.username, "jvale");
        assert!(snapshot.shows.is_empty());
        assert!(snapshot.recent_tips.is_empty());
        assert!(snapshot.business_profile.is_none());
        assert_eq!(snapshot.analytics.total_tips, 0.0);
    }

    #[test]
    fn test_show_and_activity_enums_parse() {
        let show: Show = serde_json::from_str(
            r#"{ "id": "s1", "title": "Open Mic", "date": "2024-05-02", "status": "live" }"#,
        )
        .unwrap();
        assert_eq!(show.status, ShowStatus::Live);
        assert_eq!(show.views, 0);

        let item: ActivityItem = serde_json::from_str(
            r#"{ "kind": "showPublished", "description": "Published Open Mic", "date": "2024-05-01" }"#,
        )
        .unwrap();
        assert_eq!(item.kind, ActivityKind::ShowPublished);
    }
}
