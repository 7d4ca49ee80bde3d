use crate::patient::PatientId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub uuid::Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "Lab Report")]
    LabReport,
    Prescription,
    Diagnosis,
    #[serde(rename = "Surgical History")]
    SurgicalHistory,
    Consultation,
    #[serde(rename = "Imaging Report")]
    ImagingReport,
}

impl RecordType {
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordType::LabReport => "Lab Report",
            RecordType::Prescription => "Prescription",
            RecordType::Diagnosis => "Diagnosis",
            RecordType::SurgicalHistory => "Surgical History",
            RecordType::Consultation => "Consultation",
            RecordType::ImagingReport => "Imaging Report",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionItem {
    pub medication: String,
    pub dosage: String,
    pub duration: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub blood_pressure: String,
    pub temperature: String,
    pub heart_rate: String,
    pub weight: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub url: String,
    pub is_encrypted: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: RecordId,
    pub patient_id: PatientId,
    pub record_type: RecordType,
    pub title: String,
    pub date_of_service: NaiveDate,
    pub practitioner_name: String,
    pub facility: Facility,
    pub notes: Option<String>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub symptoms: Vec<String>,
    pub prescriptions: Vec<PrescriptionItem>,
    pub vital_signs: Option<VitalSigns>,
    pub attachments: Vec<Attachment>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MedicalRecord {
    pub fn new(
        patient_id: PatientId,
        record_type: RecordType,
        title: impl Into<String>,
        date_of_service: NaiveDate,
        practitioner_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            patient_id,
            record_type,
            title: title.into(),
            date_of_service,
            practitioner_name: practitioner_name.into(),
            facility: Facility::default(),
            notes: None,
            diagnosis: None,
            treatment: None,
            symptoms: Vec::new(),
            prescriptions: Vec::new(),
            vital_signs: None,
            attachments: Vec::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
