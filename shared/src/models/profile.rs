//! Creator profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Active,
    Inactive,
}

/// Creator profile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    pub id: String,
    pub creator_name: String,
    pub social_media_user: String,
    /// Domains where the creator's content is legitimately hosted.
    /// Results on these domains are never claimed.
    #[serde(default)]
    pub whitelist: Vec<String>,
    pub status: ProfileStatus,
    #[serde(default)]
    pub dmca_info: Option<DmcaInfo>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// DMCA contact metadata used to generate claims on the creator's behalf
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DmcaInfo {
    pub full_name: String,
    pub contact_email: String,
    pub country: String,
    pub work_description: String,
    pub signature: String,
}

/// Create profile payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCreate {
    pub creator_name: String,
    pub social_media_user: String,
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default)]
    pub dmca_info: Option<DmcaInfo>,
}

/// Update profile payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub creator_name: Option<String>,
    pub social_media_user: Option<String>,
    pub whitelist: Option<Vec<String>>,
    pub status: Option<ProfileStatus>,
    pub dmca_info: Option<DmcaInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_names() {
        let json = r#"{
            "id": "profile-1",
            "creatorName": "Elena Valera",
            "socialMediaUser": "@elena_v",
            "whitelist": ["https://youtube.com/elenavalera"],
            "status": "active",
            "dmcaInfo": {
                "fullName": "Elena Valera",
                "contactEmail": "elena@example.com",
                "country": "ES",
                "workDescription": "Original video content",
                "signature": "Elena Valera"
            }
        }"#;
        let profile: CreatorProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.creator_name, "Elena Valera");
        assert_eq!(profile.status, ProfileStatus::Active);
        assert_eq!(profile.whitelist.len(), 1);
        let dmca = profile.dmca_info.unwrap();
        assert_eq!(dmca.contact_email, "elena@example.com");
    }

    #[test]
    fn test_update_serializes_unset_fields_as_null() {
        let update = ProfileUpdate {
            status: Some(ProfileStatus::Inactive),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["status"], "inactive");
        assert!(value["creatorName"].is_null());
    }
}
