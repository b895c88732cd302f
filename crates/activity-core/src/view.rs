//! Board View State
//!
//! Plain data describing what the page shows. The board rebuilds it and hands
//! a snapshot to its renderer after every change; the frontend maps it onto
//! DOM nodes one-to-one.

use crate::model::{Activity, ActivityCatalog};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_ERROR_PREFIX: &str = "Unable to load activities.";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Contents of the activities list area
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Cards(Vec<ActivityCard>),
    /// Inline error shown in place of the cards
    Error(String),
}

impl ListView {
    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// One row of a card's participant list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub text: String,
    /// The "no participants" filler row
    pub placeholder: bool,
}

/// Rendered card for one activity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub title: String,
    pub description: Option<String>,
    /// Already prefixed with `Schedule: `
    pub schedule: Option<String>,
    /// `Participants (n)`
    pub participants_title: String,
    pub participant_count: usize,
    pub rows: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let details = &activity.details;
        let participants = &details.participants;

        let rows = if participants.is_empty() {
            vec![ParticipantRow {
                text: NO_PARTICIPANTS.into(),
                placeholder: true,
            }]
        } else {
            participants
                .iter()
                .map(|email| ParticipantRow {
                    text: email.clone(),
                    placeholder: false,
                })
                .collect()
        };

        Self {
            title: activity.name.clone(),
            description: details.description.clone().filter(|d| !d.is_empty()),
            schedule: details
                .schedule
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| format!("Schedule: {s}")),
            participants_title: format!("Participants ({})", participants.len()),
            participant_count: participants.len(),
            rows,
        }
    }
}

/// Entry of the activity selector
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Build cards and selector options for a catalog, in catalog order
pub fn render_catalog(catalog: &ActivityCatalog) -> (Vec<ActivityCard>, Vec<SelectOption>) {
    catalog
        .iter()
        .map(|activity| {
            (
                ActivityCard::from_activity(activity),
                SelectOption {
                    value: activity.name.clone(),
                    label: activity.name.clone(),
                },
            )
        })
        .unzip()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// CSS class used by the page
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Identifies one shown banner, so a delayed dismissal can tell whether the
/// banner it was scheduled for is still on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BannerTicket(pub(crate) u64);

/// Transient status message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    pub ticket: BannerTicket,
    pub visible: bool,
}

/// Current values of the signup form inputs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Selected activity name; empty means the placeholder option
    pub activity: String,
    pub email: String,
}

/// Everything the board displays
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardView {
    pub list: ListView,
    pub options: Vec<SelectOption>,
    pub form: SignupForm,
    pub banner: Option<Banner>,
}

impl BoardView {
    /// Banner currently on screen, if any
    pub fn visible_banner(&self) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.visible)
    }

    pub fn card(&self, title: &str) -> Option<&ActivityCard> {
        self.list.cards().iter().find(|c| c.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> ActivityCatalog {
        [
            Activity::new("Chess Club")
                .description("Learn strategies")
                .schedule("Fridays, 3:30 PM - 5:00 PM")
                .participants(["michael@mergington.edu", "daniel@mergington.edu"]),
            Activity::new("Art Studio"),
            Activity::new("Debate Club").description("").participants(["ava@mergington.edu"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_one_card_and_option_per_activity_in_order() {
        let (cards, options) = render_catalog(&sample_catalog());
        assert_eq!(cards.len(), 3);
        assert_eq!(options.len(), 3);

        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(titles, ["Chess Club", "Art Studio", "Debate Club"]);
        assert_eq!(values, titles);
    }

    #[test]
    fn test_card_contents() {
        let (cards, _) = render_catalog(&sample_catalog());
        let chess = &cards[0];
        assert_eq!(chess.description.as_deref(), Some("Learn strategies"));
        assert_eq!(chess.schedule.as_deref(), Some("Schedule: Fridays, 3:30 PM - 5:00 PM"));
        assert_eq!(chess.participants_title, "Participants (2)");
        assert_eq!(chess.rows[1].text, "daniel@mergington.edu");
        assert!(!chess.rows[0].placeholder);

        // empty description is omitted
        assert_eq!(cards[2].description, None);
    }

    #[test]
    fn test_empty_roster_renders_placeholder_row() {
        let (cards, _) = render_catalog(&sample_catalog());
        let art = &cards[1];
        assert_eq!(art.participant_count, 0);
        assert_eq!(art.participants_title, "Participants (0)");
        assert_eq!(
            art.rows,
            vec![ParticipantRow {
                text: "No participants yet".into(),
                placeholder: true,
            }]
        );
        assert_eq!(art.description, None);
        assert_eq!(art.schedule, None);
    }

    #[test]
    fn test_mapping_roster_renders_like_list() {
        let list: ActivityCatalog = serde_json::from_str(
            r#"{"Gym Class": {"participants": ["john@x.edu", "olivia@x.edu"]}}"#,
        )
        .unwrap();
        let mapping: ActivityCatalog = serde_json::from_str(
            r#"{"Gym Class": {"participants": {"first": "john@x.edu", "second": "olivia@x.edu"}}}"#,
        )
        .unwrap();
        assert_eq!(render_catalog(&list), render_catalog(&mapping));
    }
}
