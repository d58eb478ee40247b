//! Table synchronization for the contacts table
//!
//! Run once when a store is opened. Creates the table when it is missing
//! and adds any text column the table lacks. Existing rows and columns are
//! never dropped or rewritten.

use rusqlite::Connection;

/// Backing table name
pub const CONTACTS_TABLE: &str = "contacts";

/// Text columns in declaration order
pub const TEXT_COLUMNS: [&str; 6] = ["name", "phone", "address", "email", "website", "notes"];

/// What a synchronization pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The table did not exist and was created
    pub created_table: bool,
    /// Columns added to an existing table
    pub added_columns: Vec<&'static str>,
}

impl SyncOutcome {
    /// True when the pass left the database untouched
    pub fn is_noop(&self) -> bool {
        !self.created_table && self.added_columns.is_empty()
    }
}

/// Bring the contacts table in line with the `Contact` shape.
///
/// AUTOINCREMENT keeps SQLite from handing out the id of a deleted row
/// again.
pub fn sync_schema(conn: &Connection) -> rusqlite::Result<SyncOutcome> {
    let existing = existing_columns(conn)?;

    if existing.is_empty() {
        let columns = TEXT_COLUMNS
            .iter()
            .map(|c| format!("{c} TEXT NOT NULL DEFAULT ''"))
            .collect::<Vec<_>>()
            .join(", ");
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {CONTACTS_TABLE} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                {columns}
            );"
        ))?;
        return Ok(SyncOutcome {
            created_table: true,
            added_columns: Vec::new(),
        });
    }

    let mut outcome = SyncOutcome::default();
    for column in TEXT_COLUMNS {
        if !existing.iter().any(|c| c.eq_ignore_ascii_case(column)) {
            conn.execute_batch(&format!(
                "ALTER TABLE {CONTACTS_TABLE} ADD COLUMN {column} TEXT NOT NULL DEFAULT '';"
            ))?;
            outcome.added_columns.push(column);
        }
    }
    Ok(outcome)
}

fn existing_columns(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({CONTACTS_TABLE})"))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}
