use crate::blob::{BlobStore, FileBlobStore, MemoryBlobStore};
use crate::keys::{
    ACCESS_LOGS_KEY, ALL_KEYS, CURRENT_USER_KEY, MEDICAL_RECORDS_KEY, PATIENT_DATA_KEY,
    USER_PREFERENCES_KEY,
};
use medis_types::{AccessLog, MedicalRecord, MedisResult, Patient, User, UserPreferences};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// Typed facade over a [`BlobStore`]. Mirrors the forgiving contract of
/// the browser storage it stands in for: writes that fail are logged and
/// swallowed, reads fall back to the caller's default instead of
/// surfacing an error.
pub struct PortalStore<S: BlobStore> {
    inner: S,
}

impl PortalStore<FileBlobStore> {
    pub fn open(base_dir: impl AsRef<Path>) -> MedisResult<Self> {
        Ok(Self {
            inner: FileBlobStore::new(base_dir)?,
        })
    }
}

impl PortalStore<MemoryBlobStore> {
    pub fn in_memory() -> Self {
        Self {
            inner: MemoryBlobStore::new(),
        }
    }
}

impl<S: BlobStore> PortalStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize value for key {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.inner.write(key, &json) {
            warn!("Failed to save key {}: {}", key, e);
        }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.inner.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!("Failed to load key {}: {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Malformed blob for key {}: {}", key, e);
                default
            }
        }
    }

    pub fn delete(&self, key: &str) {
        if let Err(e) = self.inner.remove(key) {
            warn!("Failed to remove key {}: {}", key, e);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        matches!(self.inner.read(key), Ok(Some(_)))
    }

    pub fn clear_all(&self) {
        for key in ALL_KEYS {
            self.delete(key);
        }
    }

    pub fn save_current_user(&self, user: &Option<User>) {
        self.save(CURRENT_USER_KEY, user);
    }

    pub fn load_current_user(&self) -> Option<User> {
        self.load(CURRENT_USER_KEY, None)
    }

    pub fn clear_current_user(&self) {
        self.delete(CURRENT_USER_KEY);
    }

    pub fn save_patient_data(&self, patient: &Option<Patient>) {
        self.save(PATIENT_DATA_KEY, patient);
    }

    pub fn load_patient_data(&self) -> Option<Patient> {
        self.load(PATIENT_DATA_KEY, None)
    }

    pub fn clear_patient_data(&self) {
        self.delete(PATIENT_DATA_KEY);
    }

    pub fn save_medical_records(&self, records: &[MedicalRecord]) {
        self.save(MEDICAL_RECORDS_KEY, &records);
    }

    pub fn load_medical_records(&self) -> Vec<MedicalRecord> {
        self.load(MEDICAL_RECORDS_KEY, Vec::new())
    }

    pub fn clear_medical_records(&self) {
        self.delete(MEDICAL_RECORDS_KEY);
    }

    pub fn save_access_logs(&self, logs: &[AccessLog]) {
        self.save(ACCESS_LOGS_KEY, &logs);
    }

    pub fn load_access_logs(&self) -> Vec<AccessLog> {
        self.load(ACCESS_LOGS_KEY, Vec::new())
    }

    pub fn clear_access_logs(&self) {
        self.delete(ACCESS_LOGS_KEY);
    }

    /// Append one entry to the access trail.
    pub fn record_access(&self, entry: AccessLog) {
        let mut logs = self.load_access_logs();
        logs.push(entry);
        self.save_access_logs(&logs);
    }

    pub fn save_user_preferences(&self, preferences: &UserPreferences) {
        self.save(USER_PREFERENCES_KEY, preferences);
    }

    pub fn load_user_preferences(&self) -> UserPreferences {
        self.load(USER_PREFERENCES_KEY, UserPreferences::default())
    }

    pub fn clear_user_preferences(&self) {
        self.delete(USER_PREFERENCES_KEY);
    }

    /// Seed every absent key with its empty default so first reads see a
    /// consistent shape.
    pub fn initialize(&self) {
        if !self.contains(CURRENT_USER_KEY) {
            self.save_current_user(&None);
        }
        if !self.contains(PATIENT_DATA_KEY) {
            self.save_patient_data(&None);
        }
        if !self.contains(MEDICAL_RECORDS_KEY) {
            self.save_medical_records(&[]);
        }
        if !self.contains(ACCESS_LOGS_KEY) {
            self.save_access_logs(&[]);
        }
        if !self.contains(USER_PREFERENCES_KEY) {
            self.save_user_preferences(&UserPreferences::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::FileBlobStore;
    use medis_types::{AccessAction, Theme, UserRole};
    use std::path::PathBuf;

    fn test_store() -> PortalStore<MemoryBlobStore> {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        PortalStore::in_memory()
    }

    #[test]
    fn test_current_user_roundtrip() {
        let store = test_store();
        assert_eq!(store.load_current_user(), None);

        let user = User::new("Amina Okafor", "amina@stmarys.example", UserRole::Admin);
        store.save_current_user(&Some(user.clone()));
        assert_eq!(store.load_current_user(), Some(user));

        store.clear_current_user();
        assert_eq!(store.load_current_user(), None);
    }

    #[test]
    fn test_missing_key_returns_default() {
        let store = test_store();
        assert!(store.load_medical_records().is_empty());
        assert_eq!(store.load_user_preferences(), UserPreferences::default());
    }

    #[test]
    fn test_malformed_blob_falls_back_to_default() {
        let store = test_store();
        store.inner.write(USER_PREFERENCES_KEY, "{not json").unwrap();

        assert_eq!(store.load_user_preferences(), UserPreferences::default());

        // A fresh save repairs the key.
        let prefs = UserPreferences {
            theme: Theme::Dark,
            ..UserPreferences::default()
        };
        store.save_user_preferences(&prefs);
        assert_eq!(store.load_user_preferences(), prefs);
    }

    #[test]
    fn test_record_access_appends() {
        let store = test_store();
        store.record_access(AccessLog::new(
            "Dr. Sarah Chen",
            UserRole::Doctor,
            AccessAction::Viewed,
            "Opened lab results",
        ));
        store.record_access(AccessLog::new(
            "Amina Okafor",
            UserRole::Admin,
            AccessAction::Edited,
            "Corrected contact details",
        ));

        let logs = store.load_access_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].action, AccessAction::Viewed);
        assert_eq!(logs[1].accessor_role, UserRole::Admin);
    }

    #[test]
    fn test_initialize_seeds_absent_keys_only() {
        let store = test_store();

        let user = User::new("Amina Okafor", "amina@stmarys.example", UserRole::Admin);
        store.save_current_user(&Some(user.clone()));

        store.initialize();

        for key in ALL_KEYS {
            assert!(store.contains(key));
        }
        // Pre-existing data survives initialization.
        assert_eq!(store.load_current_user(), Some(user));
        assert!(store.load_access_logs().is_empty());
    }

    #[test]
    fn test_clear_all_removes_every_key() {
        let store = test_store();
        store.initialize();
        store.clear_all();

        for key in ALL_KEYS {
            assert!(!store.contains(key));
        }
    }

    #[test]
    fn test_file_backed_store_survives_reopen() {
        let dir: PathBuf =
            std::env::temp_dir().join(format!("medis-portal-test-{}", uuid::Uuid::new_v4()));

        let store = PortalStore::open(&dir).unwrap();
        let user = User::new("Amina Okafor", "amina@stmarys.example", UserRole::Admin);
        store.save_current_user(&Some(user.clone()));
        drop(store);

        let reopened: PortalStore<FileBlobStore> = PortalStore::open(&dir).unwrap();
        assert_eq!(reopened.load_current_user(), Some(user));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
