//! Protocol suggestion produced by the external generative service.
//!
//! The payload is untrusted. Defaulting happens here, at deserialization:
//! an absent, null or non-boolean flag reads as `false`, an absent or
//! malformed group reads as all-false. Nothing downstream re-checks.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

/// Delay may come as "5" or 5. Blank strings and other types are dropped.
fn lenient_delay<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_group<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + for<'a> Deserialize<'a>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedRegions {
    #[serde(rename = "totalBody", default, deserialize_with = "lenient_bool")]
    pub total_body: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub ctap: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub tap: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub ap: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub pelvis: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub thorax: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub crane: bool,
    #[serde(rename = "massifFacial", default, deserialize_with = "lenient_bool")]
    pub massif_facial: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub sinus: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub rochers: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub orbites: bool,
    #[serde(rename = "angioTSA", default, deserialize_with = "lenient_bool")]
    pub angio_tsa: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub articulations: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedPhases {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub natif: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub arteriel: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub portal: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub mixte: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub tardif: bool,
    #[serde(
        rename = "tardifDelay",
        default,
        deserialize_with = "lenient_delay",
        skip_serializing_if = "Option::is_none"
    )]
    pub tardif_delay: Option<String>,
}

/// Suggested regions and phases for a reformulated indication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSuggestion {
    #[serde(default, deserialize_with = "lenient_group")]
    pub regions: SuggestedRegions,
    #[serde(default, deserialize_with = "lenient_group")]
    pub phases: SuggestedPhases,
}

impl ExternalSuggestion {
    /// Parse a suggestion object. Only non-JSON input is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    /// Read a suggestion out of an arbitrary JSON value; non-objects are empty.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_read_as_false() {
        let s = ExternalSuggestion::from_json(r#"{"regions": {"ap": true}, "phases": {"portal": true}}"#)
            .unwrap();
        assert!(s.regions.ap);
        assert!(!s.regions.thorax);
        assert!(!s.regions.crane);
        assert!(s.phases.portal);
        assert!(!s.phases.natif);
        assert_eq!(s.phases.tardif_delay, None);
    }

    #[test]
    fn absent_groups_read_as_empty() {
        let s = ExternalSuggestion::from_json("{}").unwrap();
        assert_eq!(s, ExternalSuggestion::default());
    }

    #[test]
    fn null_and_non_boolean_flags_read_as_false() {
        let s = ExternalSuggestion::from_value(json!({
            "regions": {"thorax": null, "crane": "yes", "sinus": 1, "angioTSA": true},
            "phases": null
        }));
        assert!(!s.regions.thorax);
        assert!(!s.regions.crane);
        assert!(!s.regions.sinus);
        assert!(s.regions.angio_tsa);
        assert_eq!(s.phases, SuggestedPhases::default());
    }

    #[test]
    fn malformed_group_reads_as_empty() {
        let s = ExternalSuggestion::from_value(json!({
            "regions": ["thorax"],
            "phases": {"arteriel": true}
        }));
        assert_eq!(s.regions, SuggestedRegions::default());
        assert!(s.phases.arteriel);
    }

    #[test]
    fn non_object_suggestion_is_empty() {
        assert_eq!(ExternalSuggestion::from_value(json!("thorax")), ExternalSuggestion::default());
        assert_eq!(ExternalSuggestion::from_value(Value::Null), ExternalSuggestion::default());
    }

    #[test]
    fn tardif_delay_as_string_or_number() {
        let s = ExternalSuggestion::from_value(json!({"phases": {"tardif": true, "tardifDelay": " 5 "}}));
        assert_eq!(s.phases.tardif_delay.as_deref(), Some("5"));

        let s = ExternalSuggestion::from_value(json!({"phases": {"tardif": true, "tardifDelay": 10}}));
        assert_eq!(s.phases.tardif_delay.as_deref(), Some("10"));

        let s = ExternalSuggestion::from_value(json!({"phases": {"tardifDelay": ""}}));
        assert_eq!(s.phases.tardif_delay, None);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(ExternalSuggestion::from_json("{regions:").is_err());
    }

    #[test]
    fn serializes_in_external_vocabulary() {
        let mut s = ExternalSuggestion::default();
        s.regions.massif_facial = true;
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["regions"]["massifFacial"], json!(true));
        assert!(value["phases"].get("tardifDelay").is_none());
        assert_eq!(ExternalSuggestion::from_value(value), s);
    }
}
