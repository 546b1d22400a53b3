/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Fixed primary key of every singleton settings table
/// (`hero_settings`, `about_settings`, `admin_credentials`).
pub const SINGLETON_ID: DbId = 1;
