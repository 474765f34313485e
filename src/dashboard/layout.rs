//! Dashboard layout built from a creator snapshot
//!
//! Everything the home view paints is computed here first, so the view only
//! lays out strings and reacts to clicks.

use crate::format::{format_amount, format_count, format_currency, format_date, format_number};
use crate::model::creator::{ShowStatus, TipRecord};
use crate::model::CreatorSnapshot;
use crate::navigation;

/// Icon shown when no tips have arrived
pub const TIPS_EMPTY_ICON: &str = "$";
/// Message shown when no tips have arrived
pub const TIPS_EMPTY_MESSAGE: &str = "No tips received yet";

/// What happens when a link is clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    Navigate(String),
    OpenTipSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub label: &'static str,
    pub action: LinkAction,
}

impl LinkItem {
    fn navigate(label: &'static str, path: impl Into<String>) -> Self {
        Self {
            label,
            action: LinkAction::Navigate(path.into()),
        }
    }
}

/// One figure in the summary row
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCardData {
    pub title: &'static str,
    pub value: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowRow {
    pub id: String,
    pub title: String,
    pub date: String,
    pub venue: String,
    pub status: ShowStatus,
    pub views: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub icon: &'static str,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TipRow {
    pub from: String,
    /// Always two decimals
    pub amount: String,
    pub message: Option<String>,
    pub date: String,
}

/// Contents of the tips panel
#[derive(Debug, Clone, PartialEq)]
pub enum TipsPanel {
    Empty {
        icon: &'static str,
        message: &'static str,
    },
    Rows(Vec<TipRow>),
}

impl TipsPanel {
    fn from_tips(tips: &[TipRecord], currency_symbol: &str) -> Self {
        if tips.is_empty() {
            return TipsPanel::Empty {
                icon: TIPS_EMPTY_ICON,
                message: TIPS_EMPTY_MESSAGE,
            };
        }

        TipsPanel::Rows(
            tips.iter()
                .map(|tip| TipRow {
                    from: tip.from.clone(),
                    amount: format_amount(currency_symbol, tip.amount),
                    message: tip.message.clone(),
                    date: format_date(tip.date),
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub initials: String,
    pub display_name: String,
    pub handle: String,
    pub bio: String,
    pub member_since: String,
    pub links: Vec<LinkItem>,
}

/// Business profile card; either the listing or a prompt to create one
#[derive(Debug, Clone, PartialEq)]
pub enum BusinessCard {
    Listed {
        name: String,
        category: String,
        verified: bool,
        manage: LinkItem,
    },
    Missing {
        create: LinkItem,
    },
}

/// Full dashboard contents
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub greeting: String,
    pub summary_cards: Vec<SummaryCardData>,
    pub shows: Vec<ShowRow>,
    pub add_show: LinkItem,
    pub activity: Vec<ActivityRow>,
    pub tips: TipsPanel,
    pub profile: ProfileCard,
    pub business: BusinessCard,
    pub quick_links: Vec<LinkItem>,
    pub help_links: Vec<LinkItem>,
}

impl DashboardLayout {
    pub fn build(snapshot: &CreatorSnapshot, currency_symbol: &str) -> Self {
        let profile = &snapshot.profile;
        let analytics = &snapshot.analytics;

        let summary_cards = vec![
            SummaryCardData {
                title: "Total Shows",
                value: format_count(snapshot.shows.len() as u64),
                caption: None,
            },
            SummaryCardData {
                title: "Total Views",
                value: format_count(analytics.total_views),
                caption: None,
            },
            SummaryCardData {
                title: "Total Tips",
                value: format_currency(currency_symbol, analytics.total_tips),
                caption: None,
            },
            SummaryCardData {
                title: "Followers",
                value: format_count(analytics.followers),
                caption: Some(growth_caption(analytics.monthly_growth)),
            },
        ];

        let shows = snapshot
            .shows
            .iter()
            .map(|show| ShowRow {
                id: show.id.clone(),
                title: show.title.clone(),
                date: format_date(show.date),
                venue: show.venue.clone(),
                status: show.status,
                views: format!("{} views", format_count(show.views)),
            })
            .collect();

        let activity = snapshot
            .recent_activity
            .iter()
            .map(|item| ActivityRow {
                icon: item.kind.icon(),
                description: item.description.clone(),
                date: format_date(item.date),
            })
            .collect();

        let business = match &snapshot.business_profile {
            Some(business) => BusinessCard::Listed {
                name: business.name.clone(),
                category: business.category.clone(),
                verified: business.verified,
                manage: LinkItem::navigate("Manage Business Profile", navigation::BUSINESS_MANAGE),
            },
            None => BusinessCard::Missing {
                create: LinkItem::navigate("Create Business Profile", navigation::BUSINESS_CREATE),
            },
        };

        Self {
            greeting: format!("Welcome back, {}", profile.display_name),
            summary_cards,
            shows,
            add_show: LinkItem::navigate("+ Add New Show", navigation::NEW_SHOW),
            activity,
            tips: TipsPanel::from_tips(&snapshot.recent_tips, currency_symbol),
            profile: ProfileCard {
                initials: profile.initials(),
                display_name: profile.display_name.clone(),
                handle: format!("@{}", profile.username),
                bio: profile.bio.clone(),
                member_since: format!("Member since {}", format_date(profile.joined)),
                links: vec![
                    LinkItem::navigate("Edit Profile", navigation::PROFILE_EDIT),
                    LinkItem::navigate(
                        "View Public Page",
                        navigation::public_profile_path(&profile.username),
                    ),
                ],
            },
            business,
            quick_links: vec![
                LinkItem::navigate("Create New Show", navigation::NEW_SHOW),
                LinkItem {
                    label: "Tip Settings",
                    action: LinkAction::OpenTipSettings,
                },
                LinkItem::navigate("View Analytics", navigation::ANALYTICS),
                LinkItem::navigate("Edit Profile", navigation::PROFILE_EDIT),
            ],
            help_links: vec![
                LinkItem::navigate("Creator Guide", "/help/creator-guide"),
                LinkItem::navigate("Tips & Payments FAQ", "/help/tips"),
                LinkItem::navigate("Community Guidelines", "/help/guidelines"),
                LinkItem::navigate("Contact Support", "/support"),
            ],
        }
    }
}

fn growth_caption(growth: f64) -> String {
    let sign = if growth > 0.0 { "+" } else { "" };
    format!("{}{}% this month", sign, format_number(growth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mock::sample_snapshot;
    use crate::model::creator::BusinessProfile;

    fn card<'a>(layout: &'a DashboardLayout, title: &str) -> &'a SummaryCardData {
        layout
            .summary_cards
            .iter()
            .find(|c| c.title == title)
            .unwrap()
    }

    #[test]
    fn test_total_tips_card() {
        let layout = DashboardLayout::build(&sample_snapshot(), "$");
        assert_eq!(card(&layout, "Total Tips").value, "$850");
    }

    #[test]
    fn test_summary_values_are_grouped() {
        let layout = DashboardLayout::build(&sample_snapshot(), "$");

        assert_eq!(card(&layout, "Total Views").value, "12,450");
        assert_eq!(card(&layout, "Followers").value, "1,234");
        assert_eq!(
            card(&layout, "Followers").caption.as_deref(),
            Some("+12.5% this month")
        );
    }

    #[test]
    fn test_one_row_per_show() {
        let mut snapshot = sample_snapshot();
        for count in [3, 1, 0] {
            snapshot.shows.truncate(count);
            let layout = DashboardLayout::build(&snapshot, "$");

            assert_eq!(layout.shows.len(), snapshot.shows.len());
            assert_eq!(card(&layout, "Total Shows").value, snapshot.shows.len().to_string());
        }
    }

    #[test]
    fn test_empty_tips_shows_empty_state() {
        let mut snapshot = sample_snapshot();
        snapshot.recent_tips.clear();

        let layout = DashboardLayout::build(&snapshot, "$");

        assert_eq!(
            layout.tips,
            TipsPanel::Empty {
                icon: TIPS_EMPTY_ICON,
                message: "No tips received yet",
            }
        );
    }

    #[test]
    fn test_tip_rows_use_two_decimals() {
        let mut snapshot = sample_snapshot();
        snapshot.recent_tips[1].amount = 7.5;

        let layout = DashboardLayout::build(&snapshot, "$");

        let TipsPanel::Rows(rows) = &layout.tips else {
            panic!("expected tip rows");
        };
        assert_eq!(rows.len(), snapshot.recent_tips.len());
        let amounts: Vec<_> = rows.iter().map(|r| r.amount.as_str()).collect();
        assert_eq!(amounts, vec!["$25.00", "$7.50", "$50.00"]);
    }

    #[test]
    fn test_business_card_follows_presence() {
        let mut snapshot = sample_snapshot();
        snapshot.business_profile = Some(BusinessProfile {
            name: "Studio B".to_string(),
            category: "Music".to_string(),
            verified: false,
        });
        let layout = DashboardLayout::build(&snapshot, "$");
        assert!(matches!(
            layout.business,
            BusinessCard::Listed { ref name, verified: false, .. } if name == "Studio B"
        ));

        snapshot.business_profile = None;
        let layout = DashboardLayout::build(&snapshot, "$");
        let BusinessCard::Missing { create } = layout.business else {
            panic!("expected create prompt");
        };
        assert_eq!(create.action, LinkAction::Navigate(navigation::BUSINESS_CREATE.to_string()));
    }

    #[test]
    fn test_quick_links_open_tip_settings() {
        let layout = DashboardLayout::build(&sample_snapshot(), "$");

        assert!(layout
            .quick_links
            .iter()
            .any(|link| link.action == LinkAction::OpenTipSettings));
        assert_eq!(layout.help_links.len(), 4);
    }

    #[test]
    fn test_profile_card() {
        let layout = DashboardLayout::build(&sample_snapshot(), "$");

        assert_eq!(layout.profile.initials, "AM");
        assert_eq!(layout.profile.handle, "@alexmorgan");
        assert_eq!(layout.profile.member_since, "Member since Feb 14, 2023");
        assert_eq!(
            layout.profile.links[1].action,
            LinkAction::Navigate("/creator/alexmorgan".to_string())
        );
    }
}
