use serde::{Deserialize, Deserializer, Serialize};

/// One row of the open-data school dataset.
///
/// Every field is optional: upstream renames or omissions decode as `None`
/// and the filters treat `None` as non-matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolRecord {
    #[serde(rename = "D_DENOMINA", default, deserialize_with = "loose_text")]
    pub denomination: Option<String>,
    #[serde(rename = "D_PROVINCIA", default, deserialize_with = "loose_text")]
    pub province: Option<String>,
    #[serde(rename = "D_MUNICIPIO", default, deserialize_with = "loose_text")]
    pub municipality: Option<String>,
    #[serde(rename = "D_DOMICILIO", default, deserialize_with = "loose_text")]
    pub address: Option<String>,
    #[serde(rename = "C_POSTAL", default, deserialize_with = "loose_text")]
    pub postal_code: Option<String>,
    #[serde(rename = "D_ESPECIFICA", default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(rename = "codigo", default, deserialize_with = "loose_text")]
    pub code: Option<String>,
    #[serde(rename = "D_TIPO", default, deserialize_with = "loose_text")]
    pub ownership: Option<String>,
    #[serde(rename = "ESO", default, deserialize_with = "loose_text")]
    pub language_program: Option<String>,
}

/// Accepts strings and numbers (postal codes and center codes come either way);
/// anything else is treated as absent.
fn loose_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl SchoolRecord {
    /// Destination string handed to the distance service.
    pub fn destination_address(&self) -> String {
        format!(
            "{},{}, {}, {}",
            text(&self.address),
            text(&self.postal_code),
            text(&self.municipality),
            text(&self.province)
        )
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

/// Driving distance and duration as reported by the distance service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Travel {
    pub distance_text: String,
    pub distance_meters: u64,
    pub duration_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A candidate school. `travel` stays `None` until the distance lookup succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct School {
    pub code: String,
    pub center_type: String,
    pub name: String,
    pub ownership: String,
    pub address: String,
    pub postal_code: String,
    pub municipality: String,
    pub province: String,
    pub language_program: String,
    travel: Option<Travel>,
}

impl School {
    pub fn from_record(record: &SchoolRecord) -> Self {
        Self {
            code: text(&record.code).to_string(),
            center_type: text(&record.denomination).to_string(),
            name: text(&record.name).to_string(),
            ownership: text(&record.ownership).to_string(),
            address: text(&record.address).to_string(),
            postal_code: text(&record.postal_code).to_string(),
            municipality: text(&record.municipality).to_string(),
            province: text(&record.province).to_string(),
            language_program: text(&record.language_program).to_string(),
            travel: None,
        }
    }

    pub fn with_travel(mut self, travel: Travel) -> Self {
        self.travel = Some(travel);
        self
    }

    pub fn travel(&self) -> Option<&Travel> {
        self.travel.as_ref()
    }

    pub fn distance_text(&self) -> Option<&str> {
        self.travel.as_ref().map(|t| t.distance_text.as_str())
    }

    pub fn distance_meters(&self) -> Option<u64> {
        self.travel.as_ref().map(|t| t.distance_meters)
    }

    pub fn duration_text(&self) -> Option<&str> {
        self.travel.as_ref().map(|t| t.duration_text.as_str())
    }
}

/// An enriched school together with its ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedSchool {
    pub school: School,
    pub duration_minutes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedReport {
    /// Records that passed the filters and were sent to the distance service.
    pub candidates: usize,
    pub schools: Vec<RankedSchool>,
    /// Destination addresses whose lookup failed.
    pub dropped: Vec<String>,
}

impl RankedReport {
    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    pub fn has_candidates(&self) -> bool {
        self.candidates > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_decodes_numeric_and_missing_fields() {
        let record: SchoolRecord = serde_json::from_value(serde_json::json!({
            "D_DENOMINA": "Instituto de Educación Secundaria",
            "C_POSTAL": 18194,
            "codigo": 18700001,
            "ESO": null,
            "D_MUNICIPIO": ["unexpected"]
        }))
        .unwrap();

        assert_eq!(
            record.denomination.as_deref(),
            Some("Instituto de Educación Secundaria")
        );
        assert_eq!(record.postal_code.as_deref(), Some("18194"));
        assert_eq!(record.code.as_deref(), Some("18700001"));
        assert_eq!(record.language_program, None);
        assert_eq!(record.municipality, None);
        assert_eq!(record.province, None);
    }

    #[test]
    fn test_destination_address_format() {
        let record = SchoolRecord {
            address: Some("Calle Real 3".to_string()),
            postal_code: Some("18100".to_string()),
            municipality: Some("Armilla".to_string()),
            province: Some("Granada".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.destination_address(),
            "Calle Real 3,18100, Armilla, Granada"
        );
    }

    #[test]
    fn test_school_travel_is_unset_until_attached() {
        let school = School::from_record(&SchoolRecord::default());
        assert!(school.travel().is_none());
        assert_eq!(school.duration_text(), None);

        let school = school.with_travel(Travel {
            distance_text: "12,3 km".to_string(),
            distance_meters: 12_300,
            duration_text: "15 min".to_string(),
        });
        assert_eq!(school.distance_text(), Some("12,3 km"));
        assert_eq!(school.distance_meters(), Some(12_300));
        assert_eq!(school.duration_text(), Some("15 min"));
    }
}
