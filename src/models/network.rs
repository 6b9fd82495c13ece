use serde::{Deserialize, Serialize};

/// Connection class as reported by the host's network sensor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EffectiveType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
    #[serde(rename = "unknown")]
    Unknown,
}

impl EffectiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveType::Slow2g => "slow-2g",
            EffectiveType::TwoG => "2g",
            EffectiveType::ThreeG => "3g",
            EffectiveType::FourG => "4g",
            EffectiveType::Unknown => "unknown",
        }
    }
}

impl From<&str> for EffectiveType {
    /// Unrecognized sensor strings map to `Unknown` rather than failing.
    fn from(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "slow-2g" => EffectiveType::Slow2g,
            "2g" => EffectiveType::TwoG,
            "3g" => EffectiveType::ThreeG,
            "4g" => EffectiveType::FourG,
            _ => EffectiveType::Unknown,
        }
    }
}

/// Most recent network observation; replaced wholesale on every sensor
/// change event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSample {
    pub effective_type: EffectiveType,
    pub downlink_mbps: f64,
    pub round_trip_ms: f64,
    pub data_saver: bool,
}

impl NetworkSample {
    /// Degraded-but-well-formed value set for hosts without a network sensor.
    pub fn fallback() -> Self {
        Self {
            effective_type: EffectiveType::Unknown,
            downlink_mbps: 0.0,
            round_trip_ms: 0.0,
            data_saver: false,
        }
    }
}

/// Ordinal connection-quality classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
    Unknown,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Fair => "fair",
            Tier::Poor => "poor",
            Tier::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn effective_type_parses_sensor_strings() {
        assert_eq!(EffectiveType::from("4g"), EffectiveType::FourG);
        assert_eq!(EffectiveType::from("3G"), EffectiveType::ThreeG);
        assert_eq!(EffectiveType::from("slow-2g"), EffectiveType::Slow2g);
        assert_eq!(EffectiveType::from("5g"), EffectiveType::Unknown);
        assert_eq!(EffectiveType::from(""), EffectiveType::Unknown);
    }

    #[test]
    fn fallback_sample_is_degraded_but_well_formed() {
        let sample = NetworkSample::fallback();
        assert_eq!(sample.effective_type, EffectiveType::Unknown);
        assert_eq!(sample.downlink_mbps, 0.0);
        assert_eq!(sample.round_trip_ms, 0.0);
        assert!(!sample.data_saver);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&NetworkSample {
            effective_type: EffectiveType::FourG,
            downlink_mbps: 12.0,
            round_trip_ms: 80.0,
            data_saver: false,
        })
        .unwrap();
        assert!(json.contains("\"effectiveType\":\"4g\""));
        assert!(json.contains("\"downlinkMbps\""));
    }
}
