use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::params;

/// The history keeps only the most recent submissions, same cap the
/// browser demo applied to its local-storage list.
pub const HISTORY_CAP: i64 = 10;

#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub lead_id: String,
    pub name: String,
    pub email: String,
    pub channel: String,
    pub created_at: DateTime<Utc>,
}

/// Records a successful submission, then prunes everything older than the
/// newest `HISTORY_CAP` rows.
pub fn record_submission(db: &Database, rec: &SubmissionRecord) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO submissions (lead_id, name, email, channel, created_at) VALUES (?, ?, ?, ?, ?)",
            params![rec.lead_id, rec.name, rec.email, rec.channel, rec.created_at],
        )
        .map_err(|e| ServerError::DbError(format!("record submission failed: {e}")))?;

        conn.execute(
            "DELETE FROM submissions WHERE id NOT IN (SELECT id FROM submissions ORDER BY created_at DESC, id DESC LIMIT ?)",
            params![HISTORY_CAP],
        )
        .map_err(|e| ServerError::DbError(format!("prune submissions failed: {e}")))?;

        Ok(())
    })
}

/// Newest first, at most `HISTORY_CAP` rows.
pub fn recent_submissions(db: &Database) -> Result<Vec<SubmissionRecord>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare("SELECT lead_id, name, email, channel, created_at FROM submissions ORDER BY created_at DESC, id DESC LIMIT ?")
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map(params![HISTORY_CAP], |row| {
                Ok(SubmissionRecord {
                    lead_id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    channel: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut records = Vec::new();
        for r in rows {
            records.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(records)
    })
}
