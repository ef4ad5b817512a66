use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 抽取階段的原始 JSON 值，尚未轉成型別
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub data: serde_json::Value,
}

impl Record {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }

    /// 錯誤回報用的城市名稱
    pub fn label(&self) -> String {
        ["name", "slug"]
            .iter()
            .find_map(|key| {
                self.data
                    .get(*key)
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.trim().is_empty())
            })
            .unwrap_or("<unnamed>")
            .to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityCosts {
    pub nomad_monthly: Option<f64>,
    pub expat_monthly: Option<f64>,
}

/// 旅遊目錄的城市資料
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawCityRecord {
    #[serde(default)]
    pub slug: String,
    pub short_slug: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub country: String,
    pub population: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub costs: CityCosts,
    pub internet_speed: Option<f64>,
    pub safety_level: Option<f64>,
    pub overall_score: Option<f64>,
    pub region: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityScores {
    pub halal: u8,
    pub muslim_population_percent: u8,
    pub food: u8,
    pub community: u8,
    pub cost: u8,
    pub internet: u8,
    pub safety: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CityStats {
    pub muslim_population: u64,
    pub mosques: u64,
    pub halal_restaurants: u64,
    pub monthly_budget: f64,
    pub internet_speed: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CityFeatures {
    pub airport_prayer_room: bool,
    pub halal_hotels: bool,
    pub islamic_banks: bool,
    pub islamic_schools: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub total_population: u64,
    pub muslim_population: u64,
    pub muslim_percent: f64,
    pub country_muslim_percent: f64,
    pub population_tier: String,
    pub diverse_city_override: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscriminationInfo {
    pub hijab: u8,
    pub niqab: u8,
    pub niqab_banned: bool,
    pub islamophobia: u8,
    pub acceptance_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AirportInfo {
    pub prayer_room: bool,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelInfo {
    pub halal_friendly_available: bool,
    pub estimated_halal_hotels: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinanceInfo {
    pub islamic_banking: bool,
    pub estimated_islamic_banks: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodInfo {
    pub halal_restaurants: u64,
    pub restaurants_per_100k: f64,
    pub availability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReligiousInfrastructure {
    pub mosques: u64,
    pub major_mosques: u64,
    pub jummah_locations: u64,
    pub islamic_schools: u64,
    pub mosques_per_100k: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourismInfo {
    pub region: String,
    pub muslim_friendly_rating: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DigitalNomadInfo {
    pub internet_speed: Option<f64>,
    pub internet_score: u8,
    pub directory_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostOfLiving {
    pub nomad_monthly: Option<f64>,
    pub expat_monthly: Option<f64>,
    pub monthly_budget: f64,
    pub cost_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityOfLife {
    pub safety_level: f64,
    pub safety_score: u8,
    pub overall_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PracticalInfo {
    /// 與麥加卡巴重合時為 null
    pub qibla_bearing: Option<u16>,
    pub qibla_compass: String,
    pub fasting_hours: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedProfile {
    pub demographics: Demographics,
    pub discrimination: DiscriminationInfo,
    pub airport: AirportInfo,
    pub hotels: HotelInfo,
    pub finance: FinanceInfo,
    pub food: FoodInfo,
    pub religious_infrastructure: ReligiousInfrastructure,
    pub tourism: TourismInfo,
    pub digital_nomad: DigitalNomadInfo,
    pub cost_of_living: CostOfLiving,
    pub quality_of_life: QualityOfLife,
    pub practical_info: PracticalInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCityProfile {
    pub slug: String,
    pub name: String,
    pub country: String,
    pub region: String,
    pub primary_image: String,
    pub coordinates: Coordinates,
    pub scores: CityScores,
    pub stats: CityStats,
    pub features: CityFeatures,
    pub extended: ExtendedProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichmentError {
    pub city: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    pub total_records: usize,
    pub total_enriched: usize,
    pub total_errors: usize,
    pub by_region: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default)]
pub struct EnrichmentResult {
    pub cities: Vec<EnrichedCityProfile>,
    pub errors: Vec<EnrichmentError>,
    pub stats: BatchStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMetadata {
    pub source: String,
    pub enriched_at: String,
    pub total_cities: usize,
}

/// 前端讀取的最終輸出
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedArtifact {
    pub metadata: ArtifactMetadata,
    pub cities: Vec<EnrichedCityProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentReport {
    pub generated_at: String,
    pub stats: BatchStats,
    pub errors: Vec<EnrichmentError>,
}
