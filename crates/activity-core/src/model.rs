//! Activity Catalog Model
//!
//! Wire representation of the catalog served by `GET /activities`, plus the
//! signup request and the small JSON bodies exchanged by the signup endpoint.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, MISSING_FIELDS, Result};

/// Ordered roster of participant emails.
///
/// The server may send the roster as a JSON list or as a keyed mapping; both
/// normalize to the same sequence here, in arrival order. A missing or
/// non-collection value is an empty roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Participants(Vec<String>);

impl Participants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.iter().any(|p| p == email)
    }

    pub fn push(&mut self, email: impl Into<String>) {
        self.0.push(email.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Participants {
    fn from(emails: Vec<String>) -> Self {
        Self(emails)
    }
}

impl<'a> IntoIterator for &'a Participants {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Text of a roster entry: strings as-is, anything else as its JSON text
fn entry_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

struct ParticipantsVisitor;

impl<'de> Visitor<'de> for ParticipantsVisitor {
    type Value = Participants;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list or a mapping of participant emails")
    }

    fn visit_seq<A: SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> std::result::Result<Participants, A::Error> {
        let mut emails = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<serde_json::Value>()? {
            emails.push(entry_text(value));
        }
        Ok(Participants(emails))
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut map: A,
    ) -> std::result::Result<Participants, A::Error> {
        let mut emails = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((_, value)) = map.next_entry::<IgnoredAny, serde_json::Value>()? {
            emails.push(entry_text(value));
        }
        Ok(Participants(emails))
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Participants, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Participants, E> {
        Ok(Participants::default())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Participants, E> {
        Ok(Participants::default())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<Participants, E> {
        Ok(Participants::default())
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Participants, E> {
        Ok(Participants::default())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Participants, E> {
        Ok(Participants::default())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Participants, E> {
        Ok(Participants::default())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Participants, E> {
        Ok(Participants::default())
    }
}

impl<'de> Deserialize<'de> for Participants {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ParticipantsVisitor)
    }
}

impl Serialize for Participants {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for email in &self.0 {
            seq.serialize_element(email)?;
        }
        seq.end()
    }
}

/// Capacity as a `u32`; any other JSON value (float, negative, string) is
/// treated as unknown rather than failing the whole catalog
fn lenient_capacity<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<u32>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_u64)
        .and_then(|max| u32::try_from(max).ok()))
}

/// Everything the catalog knows about one activity besides its name
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// Capacity enforced by the server; not shown on cards
    #[serde(
        default,
        deserialize_with = "lenient_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_participants: Option<u32>,

    #[serde(default)]
    pub participants: Participants,
}

/// A signup-able activity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    /// Unique key within the catalog
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: ActivityDetails::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.details.description = Some(description.into());
        self
    }

    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.details.schedule = Some(schedule.into());
        self
    }

    pub fn max_participants(mut self, max: u32) -> Self {
        self.details.max_participants = Some(max);
        self
    }

    pub fn participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details.participants = Participants(emails.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the roster has reached `max_participants`
    pub fn is_full(&self) -> bool {
        self.details
            .max_participants
            .is_some_and(|max| self.details.participants.len() >= max as usize)
    }
}

/// Mapping of activity name to activity, in the order the server sent it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    /// Insert an activity, replacing one with the same name in place
    pub fn insert(&mut self, activity: Activity) {
        match self.get_mut(&activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }
}

impl FromIterator<Activity> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for activity in iter {
            catalog.insert(activity);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a ActivityCatalog {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of activity name to activity")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut map: A,
    ) -> std::result::Result<ActivityCatalog, A::Error> {
        let mut catalog = ActivityCatalog::new();
        while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
            catalog.insert(Activity { name, details });
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Activity name and email submitted by the signup form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

impl SignupRequest {
    /// Validate raw form input. The email is trimmed; both fields must be
    /// non-empty.
    pub fn new(activity: &str, email: &str) -> Result<Self> {
        let email = email.trim();
        if activity.is_empty() || email.is_empty() {
            return Err(BoardError::Validation(MISSING_FIELDS.into()));
        }
        Ok(Self {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}

/// Body of a successful signup
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SignupResponse {
    pub const DEFAULT_MESSAGE: &'static str = "Signed up successfully";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Parse a 2xx body; an unreadable body means "no message"
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Banner text for this response
    pub fn message_or_default(&self) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(Self::DEFAULT_MESSAGE)
            .to_string()
    }
}

/// Body of a failed request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }
}
