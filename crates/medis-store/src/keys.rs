pub const CURRENT_USER_KEY: &str = "medis_current_user";

pub const PATIENT_DATA_KEY: &str = "medis_patient_data";

pub const MEDICAL_RECORDS_KEY: &str = "medis_medical_records";

pub const ACCESS_LOGS_KEY: &str = "medis_access_logs";

pub const USER_PREFERENCES_KEY: &str = "medis_user_preferences";

pub const ALL_KEYS: [&str; 5] = [
    CURRENT_USER_KEY,
    PATIENT_DATA_KEY,
    MEDICAL_RECORDS_KEY,
    ACCESS_LOGS_KEY,
    USER_PREFERENCES_KEY,
];
