use crate::core::batch::enrich_batch_parallel;
use crate::core::{ConfigProvider, Pipeline, Record, Storage};
use crate::domain::model::{
    ArtifactMetadata, EnrichedArtifact, EnrichedCityProfile, EnrichmentReport, EnrichmentResult,
};
use crate::reference::{ReferenceData, ReferenceOverrides};
use crate::utils::error::{EtlError, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const REPORT_FILENAME: &str = "enrichment-report.json";

/// CSV / TSV 摘要的一列
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    rank: usize,
    slug: &'a str,
    name: &'a str,
    country: &'a str,
    region: &'a str,
    halal: u8,
    food: u8,
    community: u8,
    cost: u8,
    internet: u8,
    safety: u8,
    overall: u8,
    muslim_percent: f64,
    muslim_population: u64,
    mosques: u64,
    halal_restaurants: u64,
    qibla_bearing: Option<u16>,
}

pub struct EnrichmentPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    reference: Arc<ReferenceData>,
}

impl<S: Storage, C: ConfigProvider> EnrichmentPipeline<S, C> {
    pub fn new(storage: S, config: C, reference: Arc<ReferenceData>) -> Self {
        Self {
            storage,
            config,
            reference,
        }
    }

    /// 內建參考資料加上設定中的覆寫檔
    pub async fn from_config(storage: S, config: C) -> Result<Self> {
        let reference = load_reference(&storage, config.reference_overrides()).await?;
        Ok(Self::new(storage, config, Arc::new(reference)))
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    fn output_file(&self, filename: &str) -> String {
        format!("{}/{}", self.config.output_path().trim_end_matches('/'), filename)
    }

    fn wants_format(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }
}

pub async fn load_reference<S: Storage>(storage: &S, files: &[String]) -> Result<ReferenceData> {
    let mut reference = ReferenceData::builtin();
    for file in files {
        tracing::info!("📚 Applying reference overrides from {}", file);
        let bytes = storage.read_file(file).await?;
        let content = String::from_utf8_lossy(&bytes);
        reference = reference.with_overrides(ReferenceOverrides::from_json(&content)?)?;
    }
    tracing::debug!("Reference data ready with {} countries", reference.len());
    Ok(reference)
}

/// 頂層必須是陣列，或 `{ "cities": [...] }`
pub fn parse_dataset(bytes: &[u8]) -> Result<Vec<Record>> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| EtlError::InputError {
            message: format!("input is not valid JSON: {}", e),
        })?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut obj) => match obj.remove("cities") {
            Some(serde_json::Value::Array(items)) => items,
            _ => {
                return Err(EtlError::InputError {
                    message: "expected a JSON array or an object with a \"cities\" array"
                        .to_string(),
                })
            }
        },
        other => {
            return Err(EtlError::InputError {
                message: format!("expected a JSON array of cities, found {}", json_kind(&other)),
            })
        }
    };

    Ok(items.into_iter().map(Record::new).collect())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

pub fn render_summary(cities: &[EnrichedCityProfile], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    for (index, city) in cities.iter().enumerate() {
        writer.serialize(SummaryRow {
            rank: index + 1,
            slug: &city.slug,
            name: &city.name,
            country: &city.country,
            region: &city.region,
            halal: city.scores.halal,
            food: city.scores.food,
            community: city.scores.community,
            cost: city.scores.cost,
            internet: city.scores.internet,
            safety: city.scores.safety,
            overall: city.scores.overall,
            muslim_percent: city.extended.demographics.muslim_percent,
            muslim_population: city.stats.muslim_population,
            mosques: city.stats.mosques,
            halal_restaurants: city.stats.halal_restaurants,
            qibla_bearing: city.extended.practical_info.qibla_bearing,
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

fn bundle(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in files {
        zip.start_file(name.as_str(), SimpleFileOptions::default())?;
        zip.write_all(data)?;
    }
    Ok(zip.finish()?.into_inner())
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for EnrichmentPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let input = self.config.input_path();
        tracing::debug!("Reading city dataset from: {}", input);

        let bytes = self.storage.read_file(input).await?;
        let mut records = parse_dataset(&bytes)?;

        if let Some(max) = self.config.max_records() {
            if records.len() > max {
                tracing::info!("✂️ Limiting run to the first {} of {} records", max, records.len());
                records.truncate(max);
            }
        }

        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<EnrichmentResult> {
        let workers = self.config.workers().max(1);
        tracing::debug!("Enriching {} records with {} worker(s)", data.len(), workers);
        enrich_batch_parallel(data, Arc::clone(&self.reference), workers).await
    }

    async fn load(&self, result: EnrichmentResult) -> Result<String> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut written: Vec<(String, Vec<u8>)> = Vec::new();

        let report = EnrichmentReport {
            generated_at: now.clone(),
            stats: result.stats,
            errors: result.errors,
        };

        // 摘要先產生，之後 cities 移進 artifact
        if self.wants_format("csv") {
            written.push(("cities.csv".to_string(), render_summary(&result.cities, b',')?));
        }
        if self.wants_format("tsv") {
            written.push(("cities.tsv".to_string(), render_summary(&result.cities, b'\t')?));
        }

        let artifact = EnrichedArtifact {
            metadata: ArtifactMetadata {
                source: self.config.source_label().to_string(),
                enriched_at: now,
                total_cities: result.cities.len(),
            },
            cities: result.cities,
        };

        let artifact_name = self.config.artifact_filename().to_string();
        written.insert(0, (artifact_name.clone(), serde_json::to_vec_pretty(&artifact)?));
        written.insert(1, (REPORT_FILENAME.to_string(), serde_json::to_vec_pretty(&report)?));

        for (name, data) in &written {
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.storage.write_file(&self.output_file(name), data).await?;
        }

        if let Some(bundle_name) = self.config.bundle_filename() {
            let zip_data = bundle(&written)?;
            tracing::debug!("Writing ZIP bundle ({} bytes)", zip_data.len());
            self.storage
                .write_file(&self.output_file(bundle_name), &zip_data)
                .await?;
        }

        if !report.errors.is_empty() {
            tracing::warn!(
                "⚠️ {} record(s) failed, see {}",
                report.errors.len(),
                self.output_file(REPORT_FILENAME)
            );
        }

        Ok(self.output_file(&artifact_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put(&self, path: &str, data: &str) {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        overrides: Vec<String>,
        formats: Vec<String>,
        workers: usize,
        max_records: Option<usize>,
        bundle: Option<String>,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                overrides: vec![],
                formats: vec!["json".to_string()],
                workers: 1,
                max_records: None,
                bundle: None,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            "input/cities.json"
        }

        fn output_path(&self) -> &str {
            "out"
        }

        fn reference_overrides(&self) -> &[String] {
            &self.overrides
        }

        fn workers(&self) -> usize {
            self.workers
        }

        fn source_label(&self) -> &str {
            "test-directory"
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn max_records(&self) -> Option<usize> {
            self.max_records
        }

        fn bundle_filename(&self) -> Option<&str> {
            self.bundle.as_deref()
        }
    }

    const DATASET: &str = r#"[
        {"slug": "istanbul-turkey", "name": "Istanbul", "country": "Turkey", "population": 15000000,
         "latitude": 41.0082, "longitude": 28.9784, "region": "Europe"},
        {"slug": "tokyo-japan", "name": "Tokyo", "country": "Japan", "population": 14000000,
         "latitude": 35.6762, "longitude": 139.6503, "region": "Asia"},
        {"slug": "nowhere", "name": "Nowhere"},
        "not a city"
    ]"#;

    #[test]
    fn test_parse_dataset_shapes() {
        assert_eq!(parse_dataset(b"[]").unwrap().len(), 0);
        assert_eq!(parse_dataset(br#"{"cities": [{}, {}]}"#).unwrap().len(), 2);

        let malformed: [&[u8]; 3] = [b"{", b"42", br#"{"data": []}"#];
        for bad in malformed {
            let err = parse_dataset(bad).unwrap_err();
            assert!(matches!(err, EtlError::InputError { .. }), "{:?}", err);
        }
    }

    #[tokio::test]
    async fn test_extract_respects_max_records() {
        let storage = MockStorage::default();
        storage.put("input/cities.json", DATASET).await;
        let config = MockConfig {
            max_records: Some(2),
            ..MockConfig::new()
        };
        let pipeline = EnrichmentPipeline::from_config(storage, config).await.unwrap();

        let records = pipeline.extract().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label(), "Istanbul");
    }

    #[tokio::test]
    async fn test_extract_missing_input_fails() {
        let pipeline =
            EnrichmentPipeline::from_config(MockStorage::default(), MockConfig::new())
                .await
                .unwrap();
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, EtlError::IoError(_)));
    }

    #[tokio::test]
    async fn test_transform_and_load_write_artifact_and_report() {
        let storage = MockStorage::default();
        storage.put("input/cities.json", DATASET).await;
        let config = MockConfig {
            formats: vec!["json".to_string(), "csv".to_string()],
            bundle: Some("bundle.zip".to_string()),
            ..MockConfig::new()
        };
        let pipeline = EnrichmentPipeline::from_config(storage.clone(), config)
            .await
            .unwrap();

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();
        assert_eq!(result.cities.len(), 2);
        assert_eq!(result.errors.len(), 2);

        let path = pipeline.load(result).await.unwrap();
        assert_eq!(path, "out/cities.json");

        let artifact: EnrichedArtifact =
            serde_json::from_slice(&storage.get_file("out/cities.json").await.unwrap()).unwrap();
        assert_eq!(artifact.metadata.source, "test-directory");
        assert_eq!(artifact.metadata.total_cities, 2);
        assert!(chrono::DateTime::parse_from_rfc3339(&artifact.metadata.enriched_at).is_ok());
        assert_eq!(artifact.cities[0].name, "Istanbul");

        let report: EnrichmentReport = serde_json::from_slice(
            &storage.get_file("out/enrichment-report.json").await.unwrap(),
        )
        .unwrap();
        assert_eq!(report.stats.total_errors, 2);
        assert_eq!(report.errors[0].city, "Nowhere");
        assert_eq!(report.errors[1].city, "<unnamed>");

        let csv_data = String::from_utf8(storage.get_file("out/cities.csv").await.unwrap()).unwrap();
        let mut lines = csv_data.lines();
        assert!(lines.next().unwrap().starts_with("rank,slug,name,country,region,halal"));
        assert!(lines.next().unwrap().starts_with("1,istanbul,Istanbul,Turkey,Europe,"));

        let zip_bytes = storage.get_file("out/bundle.zip").await.unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(zip_bytes)).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort();
        assert_eq!(names, vec!["cities.csv", "cities.json", "enrichment-report.json"]);
    }

    #[tokio::test]
    async fn test_reference_overrides_are_loaded_through_storage() {
        let storage = MockStorage::default();
        storage
            .put(
                "refs/extra.json",
                r#"{ "countries": { "Atlantis": { "muslimPercent": 60 } } }"#,
            )
            .await;
        let config = MockConfig {
            overrides: vec!["refs/extra.json".to_string()],
            ..MockConfig::new()
        };

        let pipeline = EnrichmentPipeline::from_config(storage, config).await.unwrap();
        assert_eq!(pipeline.reference().muslim_percent("Atlantis"), 60.0);
    }
}
