use serde::{Deserialize, Serialize};

/// User-selected search criteria for the services directory
///
/// Every field defaults, so an empty JSON object deserializes to the
/// all-empty filter that matches every row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(rename = "serviceTypes", default)]
    pub service_types: Vec<String>,
    #[serde(rename = "medicationTypes", default)]
    pub medication_types: MedicationFilters,
    #[serde(rename = "additionalServices", default)]
    pub additional_services: AdditionalServiceFilters,
    #[serde(rename = "insuranceOptions", default)]
    pub insurance_options: Vec<String>,
    #[serde(default)]
    pub location: LocationFilter,
    #[serde(default)]
    pub radius: Option<u16>,
}

/// Selected sub-tags per medication category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationFilters {
    #[serde(default)]
    pub methadone: Vec<String>,
    #[serde(default)]
    pub suboxone: Vec<String>,
    #[serde(default)]
    pub lais: Vec<String>,
}

/// Selected sub-tags per additional-service category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalServiceFilters {
    #[serde(default)]
    pub housing: Vec<String>,
    #[serde(default)]
    pub food: Vec<String>,
    #[serde(rename = "mentalHealth", default)]
    pub mental_health: Vec<String>,
    #[serde(rename = "caseManagement", default)]
    pub case_management: Vec<String>,
}

/// Location criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFilter {
    #[serde(rename = "zipCode", default)]
    pub zip_code: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "useCurrentLocation", default)]
    pub use_current_location: bool,
}

/// Row of the services table
///
/// The table schema is owned by the directory ingestion pipeline; this
/// service only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceRecord {
    pub id: uuid::Uuid,
    pub name: String,
    #[serde(rename = "serviceType")]
    pub service_type: String,
    #[serde(rename = "methadoneType", default)]
    pub methadone_type: Option<String>,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub radius: i32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_all_empty_filter() {
        let filters: FilterOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(filters, FilterOptions::default());
        assert!(filters.radius.is_none());
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let json = r#"{
            "serviceTypes": ["Behavioral Health"],
            "medicationTypes": {"methadone": ["Induction"]},
            "additionalServices": {"mentalHealth": ["Psychiatric Services"]},
            "location": {"zipCode": "10001", "useCurrentLocation": true},
            "radius": 10
        }"#;

        let filters: FilterOptions = serde_json::from_str(json).unwrap();
        assert_eq!(filters.service_types, vec!["Behavioral Health"]);
        assert_eq!(filters.medication_types.methadone, vec!["Induction"]);
        assert_eq!(
            filters.additional_services.mental_health,
            vec!["Psychiatric Services"]
        );
        assert_eq!(filters.location.zip_code, "10001");
        assert!(filters.location.use_current_location);
        assert_eq!(filters.radius, Some(10));
    }
}
