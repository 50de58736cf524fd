use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// ESPN sends many numbers as strings ("24", "1"); accept both
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64().map(|f| f as u32),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

// Scoreboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub leagues: Vec<ScoreboardLeague>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardLeague {
    #[serde(default)]
    pub calendar: Vec<CalendarPeriod>,
}

/// A season type (preseason, regular season, postseason) and its weeks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPeriod {
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub value: Option<u32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub entries: Vec<CalendarEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub value: Option<u32>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStatus {
    #[serde(default, rename = "type")]
    pub kind: StatusType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusType {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    #[serde(default)]
    pub home_away: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub score: Option<u32>,
    pub team: EspnTeam,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnTeam {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: String,
}

/// `{"name": "wins", "value": 10.0}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
}
