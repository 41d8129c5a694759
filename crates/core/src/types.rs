/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// User identities are issued by the hosted auth provider as UUIDs.
pub type UserId = uuid::Uuid;
