//! Placeholder creator data used when no snapshot file is supplied

use chrono::NaiveDate;

use super::creator::{
    ActivityItem, ActivityKind, Analytics, BusinessProfile, CreatorProfile, CreatorSnapshot,
    Show, ShowStatus, TipRecord,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Built-in sample snapshot
pub fn sample_snapshot() -> CreatorSnapshot {
    CreatorSnapshot {
        profile: CreatorProfile {
            display_name: "Alex Morgan".to_string(),
            username: "alexmorgan".to_string(),
            bio: "Comedian and storyteller. New sets every month.".to_string(),
            avatar_initials: None,
            joined: date(2023, 2, 14),
        },
        shows: vec![
            Show {
                id: "show-1".to_string(),
                title: "Friday Night Laughs".to_string(),
                date: date(2024, 2, 9),
                venue: "The Basement Club".to_string(),
                status: ShowStatus::Upcoming,
                views: 0,
            },
            Show {
                id: "show-2".to_string(),
                title: "Stories From The Road".to_string(),
                date: date(2024, 1, 20),
                venue: "Livestream".to_string(),
                status: ShowStatus::Past,
                views: 5_230,
            },
            Show {
                id: "show-3".to_string(),
                title: "New Year Special".to_string(),
                date: date(2023, 12, 31),
                venue: "Riverside Theater".to_string(),
                status: ShowStatus::Past,
                views: 7_220,
            },
        ],
        recent_tips: vec![
            TipRecord {
                id: "tip-1".to_string(),
                from: "Sam R.".to_string(),
                amount: 25.0,
                message: Some("Loved the new bit!".to_string()),
                date: date(2024, 1, 21),
            },
            TipRecord {
                id: "tip-2".to_string(),
                from: "Priya K.".to_string(),
                amount: 10.0,
                message: None,
                date: date(2024, 1, 20),
            },
            TipRecord {
                id: "tip-3".to_string(),
                from: "Anonymous".to_string(),
                amount: 50.0,
                message: Some("Keep going".to_string()),
                date: date(2024, 1, 2),
            },
        ],
        recent_activity: vec![
            ActivityItem {
                kind: ActivityKind::Tip,
                description: "Sam R. sent you a $25.00 tip".to_string(),
                date: date(2024, 1, 21),
            },
            ActivityItem {
                kind: ActivityKind::Follow,
                description: "12 new followers this week".to_string(),
                date: date(2024, 1, 21),
            },
            ActivityItem {
                kind: ActivityKind::Comment,
                description: "New comment on Stories From The Road".to_string(),
                date: date(2024, 1, 20),
            },
            ActivityItem {
                kind: ActivityKind::ShowPublished,
                description: "Friday Night Laughs was published".to_string(),
                date: date(2024, 1, 15),
            },
        ],
        analytics: Analytics {
            total_views: 12_450,
            total_tips: 850.0,
            followers: 1_234,
            monthly_growth: 12.5,
        },
        business_profile: Some(BusinessProfile {
            name: "Morgan Comedy LLC".to_string(),
            category: "Entertainment".to_string(),
            verified: true,
        }),
    }
}
