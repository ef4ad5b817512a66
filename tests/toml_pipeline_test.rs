use anyhow::Result;
use halal_city_etl::core::ConfigProvider;
use halal_city_etl::utils::validation::Validate;
use halal_city_etl::{EnrichmentPipeline, EtlEngine, LocalStorage, TomlConfig};
use std::io::Read;
use tempfile::TempDir;

fn write_dataset(dir: &TempDir) -> Result<String> {
    let path = dir.path().join("directory-export.json");
    let dataset = serde_json::json!({
        "cities": [
            {"slug": "istanbul-turkey", "name": "Istanbul", "country": "Türkiye",
             "population": 15500000, "latitude": 41.0082, "longitude": 28.9784, "region": "Europe"},
            {"slug": "jakarta-indonesia", "name": "Jakarta", "country": "Indonesia",
             "population": 10500000, "latitude": -6.2088, "longitude": 106.8456, "region": "Asia"},
            {"slug": "sydney-australia", "name": "Sydney", "country": "Australia",
             "population": 5300000, "latitude": -33.8688, "longitude": 151.2093, "region": "Oceania"}
        ]
    });
    std::fs::write(&path, serde_json::to_vec(&dataset)?)?;
    Ok(path.to_string_lossy().to_string())
}

fn config_text(input: &str, output: &str) -> String {
    format!(
        r#"
[pipeline]
name = "toml-integration"
version = "1.0.0"

[source]
type = "file"
path = "{input}"
label = "toml-source"

[transform]
workers = 2
max_records = 2

[load]
output_path = "{output}"
output_formats = ["json", "tsv"]
compression = {{ enabled = true, filename = "bundle.zip" }}
filenames = {{ json = "enriched-cities.json" }}
"#
    )
}

#[tokio::test]
async fn test_toml_config_drives_full_run_with_bundle() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_dataset(&temp_dir)?;
    let output = temp_dir.path().join("out");

    let config_path = temp_dir.path().join("enrich.toml");
    std::fs::write(&config_path, config_text(&input, &output.to_string_lossy()))?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.max_records(), Some(2));

    let pipeline = EnrichmentPipeline::from_config(LocalStorage::current_dir(), config).await?;
    let summary = EtlEngine::new_with_monitoring(pipeline, true).run().await?;

    // max_records 只取前兩筆
    assert_eq!(summary.stats.total_records, 2);
    assert_eq!(summary.stats.total_enriched, 2);
    assert!(summary.output_path.ends_with("enriched-cities.json"));

    let artifact: serde_json::Value =
        serde_json::from_slice(&std::fs::read(output.join("enriched-cities.json"))?)?;
    assert_eq!(artifact["metadata"]["source"], "toml-source");
    assert_eq!(artifact["metadata"]["totalCities"], 2);

    let tsv = std::fs::read_to_string(output.join("cities.tsv"))?;
    assert!(tsv.lines().next().is_some_and(|header| header.contains('\t')));
    assert!(!output.join("cities.csv").exists());

    let mut archive = zip::ZipArchive::new(std::fs::File::open(output.join("bundle.zip"))?)?;
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "cities.tsv".to_string(),
            "enriched-cities.json".to_string(),
            "enrichment-report.json".to_string(),
        ]
    );

    let mut bundled = String::new();
    archive
        .by_name("enriched-cities.json")?
        .read_to_string(&mut bundled)?;
    assert_eq!(bundled, std::fs::read_to_string(output.join("enriched-cities.json"))?);

    Ok(())
}

#[tokio::test]
async fn test_worker_override_keeps_output_identical() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_dataset(&temp_dir)?;

    let mut outputs = Vec::new();
    for workers in [1usize, 3] {
        let output = temp_dir.path().join(format!("out-{}", workers));
        let mut config =
            TomlConfig::from_toml_str(&config_text(&input, &output.to_string_lossy()))?;
        config.transform.workers = Some(workers);
        config.transform.max_records = None;

        let pipeline = EnrichmentPipeline::from_config(LocalStorage::current_dir(), config).await?;
        EtlEngine::new(pipeline).run().await?;

        let artifact: serde_json::Value =
            serde_json::from_slice(&std::fs::read(output.join("enriched-cities.json"))?)?;
        outputs.push(artifact["cities"].clone());
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0].as_array().map(Vec::len), Some(3));

    Ok(())
}
