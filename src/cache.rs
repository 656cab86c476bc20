use std::path::Path;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rusqlite::{Connection, OptionalExtension};
use thiserror::Error;
use tracing::debug;

const CACHE_FILE: &str = "pages.sqlite";

/// Lifetime of a cached page in hours, counted from the moment it is stored.
pub const CACHE_TTL_HOURS: i64 = 24;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("cache directory error: {0}")]
    Io(#[from] std::io::Error),
}

/// URL-keyed page cache with a fixed TTL.
///
/// Every write is committed before `set` returns, and expired entries are
/// deleted the first time they are looked up. There is no locking: one
/// writer per cache directory.
pub struct CacheStore {
    conn: Connection,
}

impl CacheStore {
    /// Open (or create) the cache inside `dir`.
    pub fn open(dir: &Path) -> Result<Self, CacheError> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join(CACHE_FILE))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=FULL;")?;
        Self::with_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, CacheError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, CacheError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS pages (
                key       TEXT PRIMARY KEY,
                timestamp INTEGER NOT NULL,
                page      TEXT NOT NULL
            );
            ",
        )?;
        Ok(Self { conn })
    }

    /// Cached page for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let row: Option<(i64, String)> = self
            .conn
            .query_row(
                "SELECT timestamp, page FROM pages WHERE key = ?1",
                rusqlite::params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((timestamp, page)) = row else {
            return Ok(None);
        };

        if Utc::now() < expiry_from_millis(timestamp) {
            return Ok(Some(page));
        }

        debug!("Evicting stale cache entry for {}", key);
        self.conn
            .execute("DELETE FROM pages WHERE key = ?1", rusqlite::params![key])?;
        Ok(None)
    }

    /// Store `page` under `key`, valid for [`CACHE_TTL_HOURS`] from now.
    pub fn set(&self, key: &str, page: &str) -> Result<(), CacheError> {
        self.put(key, page, Utc::now() + Duration::hours(CACHE_TTL_HOURS))
    }

    fn put(&self, key: &str, page: &str, expires_at: DateTime<Utc>) -> Result<(), CacheError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO pages (key, timestamp, page) VALUES (?1, ?2, ?3)",
            rusqlite::params![key, expires_at.timestamp_millis(), page],
        )?;
        Ok(())
    }

    #[cfg(test)]
    pub fn put_expiring(&self, key: &str, page: &str, expires_at: DateTime<Utc>) -> Result<(), CacheError> {
        self.put(key, page, expires_at)
    }

    /// Drop the table so every later read and write fails.
    #[cfg(test)]
    pub fn break_storage(&self) {
        self.conn.execute_batch("DROP TABLE pages;").unwrap();
    }

    /// Keep reads working but abort every insert.
    #[cfg(test)]
    pub fn reject_writes(&self) {
        self.conn
            .execute_batch(
                "CREATE TRIGGER reject_writes BEFORE INSERT ON pages
                 BEGIN SELECT RAISE(ABORT, 'cache is read-only'); END;",
            )
            .unwrap();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.conn
            .query_row("SELECT COUNT(*) FROM pages", [], |row| row.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }
}

fn expiry_from_millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().unwrap_or(DateTime::<Utc>::MIN_UTC)
}

// ── Tests ──
