use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Stored questionnaire answers, one document per traveler. The `preferences`
/// map is free-form (question text -> answer payload) so the frontend can
/// evolve its questionnaire without a schema migration.
#[derive(Debug, Deserialize, Serialize)]
pub struct TravelerPreferences {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub preferences: Document,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
