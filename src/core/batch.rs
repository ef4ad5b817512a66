use crate::core::assembler::enrich_record;
use crate::domain::model::{
    BatchStats, EnrichedCityProfile, EnrichmentError, EnrichmentResult, Record,
};
use crate::reference::ReferenceData;
use crate::utils::error::{EtlError, Result};
use std::cmp::Ordering;
use std::sync::Arc;

type RecordOutcome = std::result::Result<EnrichedCityProfile, EnrichmentError>;

/// halal 分數由高到低；同分依名稱、slug 排序，結果與處理順序無關
pub fn compare_profiles(a: &EnrichedCityProfile, b: &EnrichedCityProfile) -> Ordering {
    b.scores
        .halal
        .cmp(&a.scores.halal)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.slug.cmp(&b.slug))
}

fn collect(total_records: usize, outcomes: Vec<RecordOutcome>) -> EnrichmentResult {
    let mut cities = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();

    for outcome in outcomes {
        match outcome {
            Ok(profile) => cities.push(profile),
            Err(error) => {
                tracing::warn!("⚠️ Skipping {}: {}", error.city, error.error);
                errors.push(error);
            }
        }
    }

    cities.sort_by(compare_profiles);

    let mut stats = BatchStats {
        total_records,
        total_enriched: cities.len(),
        total_errors: errors.len(),
        ..BatchStats::default()
    };
    for city in &cities {
        *stats.by_region.entry(city.region.clone()).or_insert(0) += 1;
    }

    EnrichmentResult {
        cities,
        errors,
        stats,
    }
}

/// 單執行緒批次處理
pub fn enrich_batch(records: &[Record], reference: &ReferenceData) -> EnrichmentResult {
    let outcomes = records
        .iter()
        .map(|record| enrich_record(record, reference))
        .collect();
    collect(records.len(), outcomes)
}

/// 切成連續區塊交給 blocking 執行緒，依原順序合併
pub async fn enrich_batch_parallel(
    records: Vec<Record>,
    reference: Arc<ReferenceData>,
    workers: usize,
) -> Result<EnrichmentResult> {
    let total_records = records.len();
    if workers <= 1 || total_records < 2 {
        return Ok(enrich_batch(&records, &reference));
    }

    let chunk_size = total_records.div_ceil(workers);
    let mut handles = Vec::with_capacity(workers);
    let mut remaining = records;

    while !remaining.is_empty() {
        let tail = remaining.split_off(chunk_size.min(remaining.len()));
        let chunk = std::mem::replace(&mut remaining, tail);
        let reference = Arc::clone(&reference);
        handles.push(tokio::task::spawn_blocking(move || {
            chunk
                .iter()
                .map(|record| enrich_record(record, &reference))
                .collect::<Vec<_>>()
        }));
    }

    tracing::debug!("Spawned {} enrichment chunks of up to {} records", handles.len(), chunk_size);

    let mut outcomes = Vec::with_capacity(total_records);
    for handle in handles {
        let chunk = handle.await.map_err(|e| EtlError::ProcessingError {
            message: format!("enrichment worker failed: {}", e),
        })?;
        outcomes.extend(chunk);
    }

    Ok(collect(total_records, outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::new(value)
    }

    fn city(slug: &str, name: &str, country: &str, region: &str) -> Record {
        record(json!({
            "slug": slug,
            "name": name,
            "country": country,
            "population": 1_000_000,
            "latitude": 10.0,
            "longitude": 10.0,
            "region": region
        }))
    }

    fn sample() -> Vec<Record> {
        vec![
            city("oslo-norway", "Oslo", "Norway", "Europe"),
            city("kuala-lumpur-malaysia", "Kuala Lumpur", "Malaysia", "Asia"),
            record(json!({ "slug": "broken", "name": "Broken", "latitude": 1.0 })),
            city("istanbul-turkey", "Istanbul", "Turkey", "Europe"),
            city("b-town-atlantis", "B Town", "Atlantis", "Europe"),
            city("a-town-atlantis", "A Town", "Atlantis", "Europe"),
        ]
    }

    #[test]
    fn test_batch_separates_errors_and_sorts() {
        let result = enrich_batch(&sample(), &ReferenceData::builtin());

        assert_eq!(result.stats.total_records, 6);
        assert_eq!(result.stats.total_enriched, 5);
        assert_eq!(result.stats.total_errors, 1);
        assert_eq!(result.errors[0].city, "Broken");
        assert!(result.errors[0].error.contains("longitude"));

        for pair in result.cities.windows(2) {
            assert!(pair[0].scores.halal >= pair[1].scores.halal);
        }

        // 同分時依名稱
        let towns: Vec<&str> = result
            .cities
            .iter()
            .filter(|c| c.country == "Atlantis")
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(towns, vec!["A Town", "B Town"]);

        assert_eq!(result.stats.by_region.get("Europe"), Some(&4));
        assert_eq!(result.stats.by_region.get("Asia"), Some(&1));
    }

    #[test]
    fn test_empty_batch() {
        let result = enrich_batch(&[], &ReferenceData::builtin());
        assert!(result.cities.is_empty());
        assert!(result.errors.is_empty());
        assert_eq!(result.stats, BatchStats::default());
    }

    #[tokio::test]
    async fn test_parallel_matches_sequential() {
        let reference = Arc::new(ReferenceData::builtin());
        let sequential = enrich_batch(&sample(), &reference);

        for workers in [1, 2, 3, 8] {
            let parallel = enrich_batch_parallel(sample(), Arc::clone(&reference), workers)
                .await
                .unwrap();
            assert_eq!(parallel.cities, sequential.cities, "workers = {}", workers);
            assert_eq!(parallel.errors, sequential.errors);
            assert_eq!(parallel.stats, sequential.stats);
        }
    }
}
