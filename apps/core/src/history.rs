use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection};

use crate::model::SourceGroup;

pub fn open_memory() -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn open_at(path: &Path) -> Result<Connection, rusqlite::Error> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS selection (
             seq INTEGER PRIMARY KEY AUTOINCREMENT,
             key TEXT NOT NULL,
             source_group TEXT NOT NULL,
             chosen_at INTEGER NOT NULL
         )",
        [],
    )?;
    Ok(())
}

pub fn record_selection(
    db: &Connection,
    key: &str,
    group: SourceGroup,
) -> Result<(), rusqlite::Error> {
    db.execute(
        "INSERT INTO selection (key, source_group, chosen_at) VALUES (?1, ?2, ?3)",
        params![key, group.as_str(), now_epoch_secs()],
    )?;
    Ok(())
}

pub fn recent_keys(db: &Connection, limit: usize) -> Result<Vec<String>, rusqlite::Error> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let mut stmt =
        db.prepare("SELECT key FROM selection GROUP BY key ORDER BY MAX(seq) DESC LIMIT ?1")?;
    let rows = stmt.query_map(params![limit as i64], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn use_count(db: &Connection, key: &str) -> Result<u32, rusqlite::Error> {
    db.query_row(
        "SELECT COUNT(*) FROM selection WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
}

fn now_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
