use super::super::http_client::{parse_json, JsonClient};
use crate::shared::config::Settings;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Where provider payloads come from.
///
/// `Live` calls the network and can dump each body to disk under a stable
/// key; `Snapshot` replays those files so a run is reproducible offline.
#[derive(Debug, Clone)]
pub enum DataSource {
    Live {
        client: JsonClient,
        dump_dir: Option<PathBuf>,
    },
    Snapshot {
        dir: PathBuf,
    },
}

impl DataSource {
    pub fn live(client: JsonClient) -> Self {
        DataSource::Live {
            client,
            dump_dir: None,
        }
    }

    pub fn recording(client: JsonClient, dump_dir: impl Into<PathBuf>) -> Self {
        DataSource::Live {
            client,
            dump_dir: Some(dump_dir.into()),
        }
    }

    pub fn snapshot(dir: impl Into<PathBuf>) -> Self {
        DataSource::Snapshot { dir: dir.into() }
    }

    /// Snapshot replay wins over recording when both are configured
    pub fn from_settings(settings: &Settings, client: JsonClient) -> Self {
        match (&settings.snapshot_dir, &settings.dump_dir) {
            (Some(dir), _) => Self::snapshot(dir.clone()),
            (None, Some(dir)) => Self::recording(client, dir.clone()),
            (None, None) => Self::live(client),
        }
    }

    /// Rename the underlying client for logs; snapshots are unaffected
    pub fn named(&self, provider_name: &str) -> Self {
        match self {
            DataSource::Live { client, dump_dir } => DataSource::Live {
                client: client.named(provider_name),
                dump_dir: dump_dir.clone(),
            },
            DataSource::Snapshot { dir } => DataSource::Snapshot { dir: dir.clone() },
        }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, DataSource::Snapshot { .. })
    }

    pub async fn get_json<T>(&self, url: &str, key: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.get_json_with(url, key, &[]).await
    }

    pub async fn get_json_with<T>(
        &self,
        url: &str,
        key: &str,
        headers: &[(&str, &str)],
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let text = self.fetch_text(url, key, "json", headers).await?;
        parse_json(key, &text)
    }

    /// Raw RSS/Atom document
    pub async fn get_feed(&self, url: &str, key: &str) -> AppResult<String> {
        self.fetch_text(
            url,
            key,
            "xml",
            &[("Accept", "application/rss+xml, application/atom+xml, text/xml")],
        )
        .await
    }

    async fn fetch_text(
        &self,
        url: &str,
        key: &str,
        extension: &str,
        headers: &[(&str, &str)],
    ) -> AppResult<String> {
        match self {
            DataSource::Live { client, dump_dir } => {
                let text = client.get_text(url, headers).await?;
                if let Some(dir) = dump_dir {
                    let path = snapshot_path(dir, key, extension);
                    // a failed dump never fails the fetch
                    match write_snapshot(&path, &text).await {
                        Ok(()) => LogContext::snapshot("wrote", &path),
                        Err(e) => LogContext::error_with_context(&e, "Snapshot dump failed"),
                    }
                }
                Ok(text)
            }
            DataSource::Snapshot { dir } => {
                let path = snapshot_path(dir, key, extension);
                LogContext::snapshot("reading", &path);
                Ok(tokio::fs::read_to_string(&path).await?)
            }
        }
    }
}

async fn write_snapshot(path: &Path, text: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, text).await?;
    Ok(())
}

/// `{dir}/{key}.{ext}` with anything outside `[A-Za-z0-9_-.]` replaced
pub fn snapshot_path(dir: &Path, key: &str, extension: &str) -> PathBuf {
    let safe: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    dir.join(format!("{}.{}", safe, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn test_snapshot_path_sanitizes_key() {
        let path = snapshot_path(Path::new("/tmp/snaps"), "nhl/schedule 2024-11-23", "json");
        assert_eq!(path, PathBuf::from("/tmp/snaps/nhl_schedule_2024-11-23.json"));
    }

    #[tokio::test]
    async fn test_snapshot_replay_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sample.json"), r#"{"value": 7}"#).unwrap();

        let source = DataSource::snapshot(dir.path());
        let sample: Sample = source
            .get_json("https://ignored.example.com", "sample")
            .await
            .unwrap();
        assert_eq!(sample.value, 7);
        assert!(source.is_snapshot());
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = DataSource::snapshot(dir.path());
        let result: AppResult<Sample> = source.get_json("https://x", "absent").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_from_settings_prefers_snapshot() {
        let client = JsonClient::new("t", "ua", std::time::Duration::from_secs(1)).unwrap();
        let settings = Settings {
            snapshot_dir: Some(PathBuf::from("snaps")),
            dump_dir: Some(PathBuf::from("dumps")),
            ..Settings::default()
        };
        assert!(DataSource::from_settings(&settings, client.clone()).is_snapshot());

        let settings = Settings {
            dump_dir: Some(PathBuf::from("dumps")),
            ..Settings::default()
        };
        assert!(matches!(
            DataSource::from_settings(&settings, client),
            DataSource::Live { dump_dir: Some(_), .. }
        ));
    }
}
