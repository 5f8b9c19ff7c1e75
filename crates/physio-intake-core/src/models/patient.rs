//! Patient record model.

use serde::{Deserialize, Serialize};

use super::PatientInput;

/// A patient intake record, as held by whichever store produced it.
///
/// Serialized camelCase on both the backend protocol and the local file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Serial number, unique within the assigning store
    pub sno: u32,
    /// Intake date (YYYY-MM-DD)
    pub date: String,
    /// Patient name
    pub name: String,
    /// Gender
    pub gender: String,
    /// Contact phone
    pub phone: String,
    /// Home address
    pub address: String,
    /// How the patient heard about the clinic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_source: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PatientRecord {
    /// Build a record from form input under a store-assigned serial.
    pub fn from_input(sno: u32, input: &PatientInput) -> Self {
        Self {
            sno,
            date: input.date.clone(),
            name: input.name.clone(),
            gender: input.gender.clone(),
            phone: input.phone.clone(),
            address: input.address.clone(),
            referral_source: input.referral_source.clone(),
            notes: input.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> PatientInput {
        PatientInput {
            date: "2025-03-14".into(),
            name: "Asha".into(),
            gender: "F".into(),
            phone: "999".into(),
            address: "X St".into(),
            referral_source: None,
            notes: Some("knee pain".into()),
        }
    }

    #[test]
    fn test_from_input_preserves_serial() {
        let record = PatientRecord::from_input(7, &sample_input());
        assert_eq!(record.sno, 7);
        assert_eq!(record.name, "Asha");
        assert_eq!(record.notes, Some("knee pain".into()));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let mut input = sample_input();
        input.referral_source = Some("Dr. Rao".into());
        let record = PatientRecord::from_input(1, &input);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""referralSource":"Dr. Rao""#));
        assert!(!json.contains("referral_source"));
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let json = r#"{
            "sno": 3,
            "date": "2025-01-02",
            "name": "Ravi",
            "gender": "M",
            "phone": "12345",
            "address": "MG Road"
        }"#;

        let record: PatientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sno, 3);
        assert_eq!(record.referral_source, None);
        assert_eq!(record.notes, None);
    }
}
