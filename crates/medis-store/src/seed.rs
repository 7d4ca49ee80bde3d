use crate::blob::BlobStore;
use crate::portal::PortalStore;
use chrono::NaiveDate;
use medis_types::{
    AccessAction, AccessLog, Address, EmergencyContact, Facility, Gender, InsuranceInfo,
    MedicalRecord, Patient, PrescriptionItem, RecordType, UserRole, VitalSigns,
};

/// Sample patient shaped like the chart the original dashboards render.
pub fn demo_patient() -> Patient {
    let mut patient = Patient::new(
        "PAT-2024-0001",
        "John",
        "Doe",
        NaiveDate::from_ymd_opt(1985, 3, 22).expect("valid date"),
        Gender::Male,
    );

    patient.phone_number = "+1-555-0142".into();
    patient.email = "patient@example.com".into();
    patient.address = Address {
        street: "482 Maple Avenue".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        country: "USA".into(),
        postal_code: "62704".into(),
    };
    patient.emergency_contact = EmergencyContact {
        name: "Mary Doe".into(),
        relationship: "Spouse".into(),
        phone_number: "+1-555-0143".into(),
    };
    patient.blood_type = "O+".into();
    patient.allergies = vec!["Penicillin".into(), "Peanuts".into()];
    patient.medical_history = vec!["Hypertension (2019)".into(), "Appendectomy (2008)".into()];
    patient.current_medications = vec!["Lisinopril 10mg daily".into()];
    patient.insurance_info = InsuranceInfo {
        provider: "BlueShield Health".into(),
        policy_number: "BSH-88231-A".into(),
        group_number: "GRP-4410".into(),
    };

    patient
}

/// Sample records for the demo patient, one per commonly shown type.
pub fn demo_records(patient: &Patient) -> Vec<MedicalRecord> {
    let mut lab = MedicalRecord::new(
        patient.id.clone(),
        RecordType::LabReport,
        "Comprehensive Metabolic Panel",
        NaiveDate::from_ymd_opt(2024, 2, 12).expect("valid date"),
        "Dr. Sarah Chen",
    );
    lab.facility = Facility {
        name: "St. Mary's General Hospital".into(),
        address: "120 Hospital Drive, Springfield, IL".into(),
    };
    lab.notes = Some("Fasting sample. Glucose slightly elevated; repeat in 3 months.".into());
    lab.vital_signs = Some(VitalSigns {
        blood_pressure: "128/82 mmHg".into(),
        temperature: "36.8 C".into(),
        heart_rate: "72 bpm".into(),
        weight: "84 kg".into(),
    });

    let mut consultation = MedicalRecord::new(
        patient.id.clone(),
        RecordType::Consultation,
        "Hypertension Follow-up",
        NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date"),
        "Dr. Sarah Chen",
    );
    consultation.facility = lab.facility.clone();
    consultation.diagnosis = Some("Essential hypertension, controlled".into());
    consultation.treatment = Some("Continue current regimen; low-sodium diet".into());
    consultation.symptoms = vec!["Occasional headaches".into()];
    consultation.prescriptions = vec![PrescriptionItem {
        medication: "Lisinopril".into(),
        dosage: "10mg, once daily".into(),
        duration: "90 days".into(),
    }];

    vec![lab, consultation]
}

/// Sample access trail matching the demo records.
pub fn demo_access_logs(records: &[MedicalRecord]) -> Vec<AccessLog> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    vec![
        AccessLog::new(
            "Dr. Sarah Chen",
            UserRole::Doctor,
            AccessAction::Uploaded,
            "Uploaded lab results from St. Mary's",
        )
        .for_record(first.id.clone()),
        AccessLog::new(
            "John Doe",
            UserRole::Patient,
            AccessAction::Viewed,
            "Viewed own lab results",
        )
        .for_record(first.id.clone()),
    ]
}

/// Fill an empty store with the demo chart. Keys that already hold data
/// are left untouched.
pub fn seed_demo_data<S: BlobStore>(store: &PortalStore<S>) {
    if store.load_patient_data().is_some() {
        return;
    }

    let patient = demo_patient();
    let records = demo_records(&patient);

    store.save_patient_data(&Some(patient));
    if store.load_medical_records().is_empty() {
        store.save_medical_records(&records);
        store.save_access_logs(&demo_access_logs(&records));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_fills_empty_store() {
        let store = PortalStore::in_memory();
        seed_demo_data(&store);

        let patient = store.load_patient_data().expect("patient seeded");
        assert_eq!(patient.patient_code, "PAT-2024-0001");

        let records = store.load_medical_records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.patient_id == patient.id));

        let logs = store.load_access_logs();
        assert!(!logs.is_empty());
    }

    #[test]
    fn test_seed_does_not_overwrite_existing_chart() {
        let store = PortalStore::in_memory();

        let existing = demo_patient();
        store.save_patient_data(&Some(existing.clone()));

        seed_demo_data(&store);

        assert_eq!(store.load_patient_data(), Some(existing));
        assert!(store.load_medical_records().is_empty());
    }
}
