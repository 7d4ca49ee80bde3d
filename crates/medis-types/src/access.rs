use crate::record::RecordId;
use crate::user::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessLogId(pub uuid::Uuid);

impl AccessLogId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for AccessLogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccessLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessLogId({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessAction {
    Viewed,
    Uploaded,
    Edited,
    #[serde(rename = "Revoked Access")]
    RevokedAccess,
}

impl AccessAction {
    pub fn display_name(&self) -> &'static str {
        match self {
            AccessAction::Viewed => "Viewed",
            AccessAction::Uploaded => "Uploaded",
            AccessAction::Edited => "Edited",
            AccessAction::RevokedAccess => "Revoked Access",
        }
    }
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One entry in the who-touched-what trail shown on the dashboards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessLog {
    pub id: AccessLogId,
    pub timestamp: DateTime<Utc>,
    pub accessor_name: String,
    pub accessor_role: UserRole,
    pub action: AccessAction,
    pub record_id: Option<RecordId>,
    pub details: String,
}

impl AccessLog {
    pub fn new(
        accessor_name: impl Into<String>,
        accessor_role: UserRole,
        action: AccessAction,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: AccessLogId::new(),
            timestamp: Utc::now(),
            accessor_name: accessor_name.into(),
            accessor_role,
            action,
            record_id: None,
            details: details.into(),
        }
    }

    pub fn for_record(mut self, record_id: RecordId) -> Self {
        self.record_id = Some(record_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_action_display() {
        assert_eq!(AccessAction::RevokedAccess.to_string(), "Revoked Access");

        let json = serde_json::to_string(&AccessAction::RevokedAccess).unwrap();
        assert_eq!(json, "\"Revoked Access\"");
    }

    #[test]
    fn test_log_builder() {
        let record_id = RecordId::new();
        let log = AccessLog::new(
            "Dr. Sarah Chen",
            UserRole::Doctor,
            AccessAction::Viewed,
            "Opened lab results",
        )
        .for_record(record_id.clone());

        assert_eq!(log.record_id, Some(record_id));
        assert_eq!(log.action, AccessAction::Viewed);
    }
}
