use chrono::NaiveDateTime;
use generation::Language;
use sqlx::{migrate::MigrateDatabase, query, query_as, FromRow, Pool, Sqlite, SqlitePool};
use tracing::{debug, warn};

const SEEN_WORDS_KEY_PREFIX: &str = "seenWords_";

#[derive(Debug, FromRow)]
pub struct StorageEntry {
    pub value: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenWordsSummary {
    pub count: usize,
    pub updated_at: NaiveDateTime,
}

/// Local key/value store. Values are JSON text, like browser local storage.
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn initialize(database_url: &str) -> sqlx::Result<Self> {
        if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
            Sqlite::create_database(database_url).await?;
        }
        let pool = SqlitePool::connect(database_url).await?;
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool })
    }

    /// A private database that lives as long as the returned value.
    #[cfg(test)]
    pub async fn in_memory() -> sqlx::Result<Self> {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool })
    }

    #[cfg(test)]
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Storage {
    pub async fn get_item(&self, key: &str) -> sqlx::Result<Option<StorageEntry>> {
        query_as("SELECT value, updated_at FROM local_storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn set_item(&self, key: &str, value: &str) -> sqlx::Result<()> {
        query(
            "INSERT INTO local_storage(key, value, updated_at) VALUES(?, ?, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map(|_| ())
    }

    /// Attempt to remove an item, returns true if it existed
    pub async fn remove_item(&self, key: &str) -> sqlx::Result<bool> {
        let result = query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn seen_words_key(language: Language) -> String {
    format!("{SEEN_WORDS_KEY_PREFIX}{}", language.code())
}

fn decode_seen_words(key: &str, value: &str) -> Vec<String> {
    serde_json::from_str(value).unwrap_or_else(|error| {
        warn!(key, %error, "could not parse seen words, starting over");
        Vec::new()
    })
}

impl Storage {
    /// Words already generated for `language`, oldest first.
    pub async fn seen_words(&self, language: Language) -> sqlx::Result<Vec<String>> {
        let key = seen_words_key(language);
        Ok(self
            .get_item(&key)
            .await?
            .map(|entry| decode_seen_words(&key, &entry.value))
            .unwrap_or_default())
    }

    /// Appends `words` that are not yet stored and returns the updated list.
    pub async fn add_seen_words(
        &self,
        language: Language,
        words: impl IntoIterator<Item = &str>,
    ) -> anyhow::Result<Vec<String>> {
        let mut seen = self.seen_words(language).await?;
        let before = seen.len();
        for word in words {
            if !seen.iter().any(|existing| existing == word) {
                seen.push(word.to_owned());
            }
        }
        if seen.len() > before {
            self.set_item(&seen_words_key(language), &serde_json::to_string(&seen)?)
                .await?;
        }
        debug!(
            language = language.code(),
            added = seen.len() - before,
            total = seen.len(),
            "seen words updated"
        );
        Ok(seen)
    }

    pub async fn seen_words_summary(
        &self,
        language: Language,
    ) -> sqlx::Result<Option<SeenWordsSummary>> {
        let key = seen_words_key(language);
        Ok(self.get_item(&key).await?.map(|entry| SeenWordsSummary {
            count: decode_seen_words(&key, &entry.value).len(),
            updated_at: entry.updated_at,
        }))
    }

    pub async fn clear_seen_words(&self, language: Language) -> sqlx::Result<bool> {
        self.remove_item(&seen_words_key(language)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seen_words_start_empty() {
        let storage = Storage::in_memory().await.unwrap();
        assert!(storage.seen_words(Language::De).await.unwrap().is_empty());
        assert_eq!(storage.seen_words_summary(Language::De).await.unwrap(), None);
    }

    #[tokio::test]
    async fn seen_words_grow_without_duplicates() {
        let storage = Storage::in_memory().await.unwrap();
        let first = storage
            .add_seen_words(Language::De, ["Hund", "Katze", "Hund"])
            .await
            .unwrap();
        assert_eq!(first, vec!["Hund", "Katze"]);
        let second = storage
            .add_seen_words(Language::De, ["Katze", "Maus"])
            .await
            .unwrap();
        assert_eq!(second, vec!["Hund", "Katze", "Maus"]);
        assert_eq!(storage.seen_words(Language::De).await.unwrap(), second);
    }

    #[tokio::test]
    async fn seen_words_are_kept_per_language() {
        let storage = Storage::in_memory().await.unwrap();
        storage.add_seen_words(Language::De, ["Hund"]).await.unwrap();
        storage.add_seen_words(Language::Fr, ["chien"]).await.unwrap();
        assert_eq!(storage.seen_words(Language::De).await.unwrap(), vec!["Hund"]);
        assert_eq!(storage.seen_words(Language::Fr).await.unwrap(), vec!["chien"]);
        let raw = storage.get_item("seenWords_fr").await.unwrap().unwrap();
        assert_eq!(raw.value, r#"["chien"]"#);
    }

    #[tokio::test]
    async fn corrupt_value_reads_as_empty() {
        let storage = Storage::in_memory().await.unwrap();
        storage.set_item("seenWords_it", "not json").await.unwrap();
        assert!(storage.seen_words(Language::It).await.unwrap().is_empty());
        let repaired = storage.add_seen_words(Language::It, ["cane"]).await.unwrap();
        assert_eq!(repaired, vec!["cane"]);
    }

    #[tokio::test]
    async fn clearing_removes_the_entry() {
        let storage = Storage::in_memory().await.unwrap();
        storage.add_seen_words(Language::Es, ["perro"]).await.unwrap();
        let summary = storage.seen_words_summary(Language::Es).await.unwrap().unwrap();
        assert_eq!(summary.count, 1);
        assert!(storage.clear_seen_words(Language::Es).await.unwrap());
        assert!(!storage.clear_seen_words(Language::Es).await.unwrap());
    }
}
