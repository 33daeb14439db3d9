//! Shared wire DTOs for the portal API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON casing (`camelCase`) so serde stays
//! declarative. Unknown fields are ignored on purpose: user records carry
//! server-side columns the UI must never render (password hashes), and the
//! weather payload is far larger than the handful of fields shown.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated visitor as returned by `/api/user/info`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier; doubles as the login name.
    pub email: String,
    /// Display name. Absent for externally-provisioned accounts that never
    /// supplied one.
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Name to greet the visitor with; falls back to the email address.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// A discussion forum topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Email of the creator, stamped server-side from the session.
    #[serde(default)]
    pub created_by: Option<String>,
    /// ISO 8601 local timestamp; not populated for forums created before the
    /// server started recording it.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A comment attached to a forum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    /// Email of the author, stamped server-side from the session.
    #[serde(default)]
    pub created_by: Option<String>,
    /// Author display name, joined in by the server when the account still
    /// exists.
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Current conditions as returned by the Google weather lookup.
///
/// Every field is optional: the home page renders `"N/A"` for anything the
/// provider leaves out rather than failing the whole panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    #[serde(default)]
    pub weather_condition: Option<WeatherCondition>,
    #[serde(default)]
    pub temperature: Option<Temperature>,
    #[serde(default)]
    pub feels_like_temperature: Option<Temperature>,
    #[serde(default)]
    pub relative_humidity: Option<f64>,
    #[serde(default)]
    pub wind: Option<Wind>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeatherCondition {
    /// Provider icon URI without the format suffix; append `.png` to use.
    #[serde(default)]
    pub icon_base_uri: Option<String>,
    #[serde(default)]
    pub description: Option<WeatherDescription>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct WeatherDescription {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Temperature {
    #[serde(default)]
    pub degrees: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Wind {
    #[serde(default)]
    pub direction: Option<WindDirection>,
    #[serde(default)]
    pub speed: Option<WindSpeed>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct WindDirection {
    #[serde(default)]
    pub cardinal: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct WindSpeed {
    #[serde(default)]
    pub value: Option<f64>,
}
