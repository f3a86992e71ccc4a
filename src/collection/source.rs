use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::builder;
use super::environment::EnvironmentFile;
use super::model::{DocSet, RawCollection};
use super::CollectionError;
use crate::icons;

/// A fully loaded document set plus where it came from, ready for display.
#[derive(Debug, Clone)]
pub struct LoadedDocs {
    pub set: DocSet,
    pub origin: String,
    /// Display name of the applied environment, when one was given.
    pub environment: Option<String>,
}

/// Where collection documentation comes from. File loading runs off the UI
/// thread; the app consumes the result in a single completion message.
#[async_trait]
pub trait DocSource: Send + Sync {
    async fn load(&self) -> Result<LoadedDocs, CollectionError>;
}

/// Builds the source for this run: a file when a path was given on the
/// command line, the embedded sample otherwise.
pub fn for_run(
    collection: Option<PathBuf>,
    environment: Option<PathBuf>,
) -> Box<dyn DocSource> {
    match collection {
        Some(path) => Box::new(FileSource {
            collection: path,
            environment,
        }),
        None => Box::new(SampleSource { environment }),
    }
}

pub struct FileSource {
    pub collection: PathBuf,
    pub environment: Option<PathBuf>,
}

#[async_trait]
impl DocSource for FileSource {
    async fn load(&self) -> Result<LoadedDocs, CollectionError> {
        log::info!("loading collection from {}", self.collection.display());
        let text = tokio::fs::read_to_string(&self.collection).await?;
        let raw = parse_collection(&text)?;
        let env = read_environment(self.environment.as_deref()).await?;

        let environment = environment_label(env.as_ref(), self.environment.as_deref());
        Ok(LoadedDocs {
            set: builder::build(raw, env.as_ref()),
            origin: display_name(&self.collection),
            environment,
        })
    }
}

/// The collection embedded in the binary, so the app always starts to
/// something browsable.
pub struct SampleSource {
    pub environment: Option<PathBuf>,
}

#[async_trait]
impl DocSource for SampleSource {
    async fn load(&self) -> Result<LoadedDocs, CollectionError> {
        log::info!("no collection path given, loading the bundled sample");
        let text = icons::sample_collection();
        let raw = parse_collection(&text)?;
        let env = read_environment(self.environment.as_deref()).await?;

        let environment = environment_label(env.as_ref(), self.environment.as_deref());
        Ok(LoadedDocs {
            set: builder::build(raw, env.as_ref()),
            origin: "bundled sample".to_owned(),
            environment,
        })
    }
}

/// Parses and gates the collection JSON. Only the 2.x collection schema
/// family is supported; v1 exports have a different shape entirely.
fn parse_collection(text: &str) -> Result<RawCollection, CollectionError> {
    let raw: RawCollection = serde_json::from_str(text)?;
    if !raw.info.schema.contains("/v2.") {
        return Err(CollectionError::UnsupportedSchema(raw.info.schema));
    }
    Ok(raw)
}

async fn read_environment(
    path: Option<&Path>,
) -> Result<Option<EnvironmentFile>, CollectionError> {
    match path {
        Some(path) => {
            log::info!("loading environment from {}", path.display());
            let text = tokio::fs::read_to_string(path).await?;
            Ok(Some(serde_json::from_str(&text)?))
        }
        None => Ok(None),
    }
}

fn environment_label(env: Option<&EnvironmentFile>, path: Option<&Path>) -> Option<String> {
    let env = env?;
    env.name
        .clone()
        .or_else(|| path.map(display_name))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_json(schema: &str) -> String {
        format!(
            r#"{{
                "info": {{ "name": "Demo", "schema": "{schema}" }},
                "item": [
                    {{ "name": "Ping", "request": {{ "method": "GET", "url": {{ "raw": "https://api.test/ping" }} }} }}
                ]
            }}"#
        )
    }

    #[test]
    fn test_parse_accepts_v2_schemas() {
        let v21 = collection_json(
            "https://schema.getpostman.com/json/collection/v2.1.0/collection.json",
        );
        let v20 = collection_json(
            "https://schema.getpostman.com/json/collection/v2.0.0/collection.json",
        );
        assert!(parse_collection(&v21).is_ok());
        assert!(parse_collection(&v20).is_ok());
    }

    #[test]
    fn test_parse_rejects_v1_schema() {
        let v1 =
            collection_json("https://schema.getpostman.com/json/collection/v1.0.0/collection.json");
        match parse_collection(&v1) {
            Err(CollectionError::UnsupportedSchema(schema)) => {
                assert!(schema.contains("v1.0.0"));
            }
            other => panic!("expected schema rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_collection("{ not json"),
            Err(CollectionError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_file_source_loads_collection() {
        let path = std::env::temp_dir().join("vellum_source_test_load.json");
        tokio::fs::write(
            &path,
            collection_json("https://schema.getpostman.com/json/collection/v2.1.0/collection.json"),
        )
        .await
        .unwrap();

        let source = FileSource {
            collection: path.clone(),
            environment: None,
        };
        let loaded = source.load().await.unwrap();
        assert_eq!(loaded.set.collection.name, "Demo");
        assert_eq!(loaded.set.apis.len(), 1);
        assert_eq!(loaded.origin, "vellum_source_test_load.json");
        assert_eq!(loaded.environment, None);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let source = FileSource {
            collection: PathBuf::from("/nonexistent/vellum_missing.json"),
            environment: None,
        };
        assert!(matches!(source.load().await, Err(CollectionError::Io(_))));
    }

    #[tokio::test]
    async fn test_sample_source_always_loads() {
        let source = SampleSource { environment: None };
        let loaded = source.load().await.unwrap();
        assert_eq!(loaded.origin, "bundled sample");
        assert!(!loaded.set.apis.is_empty());
        assert!(loaded.set.apis.iter().all(|api| !api.examples.is_empty()));
    }

    #[tokio::test]
    async fn test_environment_label_prefers_env_name() {
        let env_path = std::env::temp_dir().join("vellum_source_test_env.json");
        tokio::fs::write(
            &env_path,
            r#"{ "name": "Staging", "values": [ { "key": "base_url", "value": "https://staging.test", "enabled": true } ] }"#,
        )
        .await
        .unwrap();

        let source = SampleSource {
            environment: Some(env_path.clone()),
        };
        let loaded = source.load().await.unwrap();
        assert_eq!(loaded.environment.as_deref(), Some("Staging"));
        assert!(loaded
            .set
            .apis
            .iter()
            .filter_map(|api| api.url.as_deref())
            .all(|url| !url.contains("{{base_url}}")));

        tokio::fs::remove_file(&env_path).await.unwrap();
    }
}
