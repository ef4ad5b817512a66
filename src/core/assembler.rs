//! 單筆城市的完整處理流程：Raw → Estimated → Scored → Assembled

use crate::core::estimator::{self, MuslimPopulationEstimate};
use crate::core::extended::{build_extended, ExtendedContext};
use crate::core::geo;
use crate::core::image::select_image;
use crate::core::scoring::{calculate_scores, ScoreInputs};
use crate::core::slug::derive_slug;
use crate::domain::model::{
    CityFeatures, CityStats, Coordinates, EnrichedCityProfile, EnrichmentError, RawCityRecord,
    Record,
};
use crate::reference::{CountryProfile, ReferenceData};
use crate::utils::error::RecordError;

pub const DEFAULT_POPULATION: f64 = 500_000.0;
pub const DEFAULT_MONTHLY_BUDGET: f64 = 2_000.0;
pub const UNKNOWN_REGION: &str = "Unknown";

/// 通過檢查、補上預設值後的城市
#[derive(Debug, Clone)]
struct ValidatedCity<'a> {
    raw: &'a RawCityRecord,
    name: &'a str,
    region: &'a str,
    population: f64,
    latitude: f64,
    longitude: f64,
    monthly_budget: f64,
}

impl ValidatedCity<'_> {
    /// 多元城市比對用；slug 空白時改用 short slug
    fn match_slug(&self) -> &str {
        let slug = self.raw.slug.trim();
        if !slug.is_empty() {
            return slug;
        }
        self.raw.short_slug.as_deref().map(str::trim).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy)]
struct CityEstimates {
    country: CountryProfile,
    muslim: MuslimPopulationEstimate,
    mosques: u64,
    halal_restaurants: u64,
}

fn non_negative(field: &'static str, value: Option<f64>) -> Result<Option<f64>, RecordError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(RecordError::InvalidField {
            field,
            reason: format!("expected a non-negative number, got {}", v),
        }),
        other => Ok(other),
    }
}

fn coordinate(field: &'static str, value: Option<f64>, limit: f64) -> Result<f64, RecordError> {
    let value = value.ok_or(RecordError::MissingField(field))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(RecordError::InvalidField {
            field,
            reason: format!("{} is outside ±{}", value, limit),
        });
    }
    Ok(value)
}

fn validate(raw: &RawCityRecord) -> Result<ValidatedCity<'_>, RecordError> {
    let name = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(RecordError::MissingField("name"))?;

    let has_short_slug = raw
        .short_slug
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    if raw.slug.trim().is_empty() && !has_short_slug {
        return Err(RecordError::MissingField("slug"));
    }

    let latitude = coordinate("latitude", raw.latitude, 90.0)?;
    let longitude = coordinate("longitude", raw.longitude, 180.0)?;

    let population = match raw.population {
        None => DEFAULT_POPULATION,
        Some(p) if p.is_finite() && p > 0.0 => p,
        Some(p) => {
            return Err(RecordError::InvalidField {
                field: "population",
                reason: format!("expected a positive number, got {}", p),
            })
        }
    };

    let nomad = non_negative("costs.nomadMonthly", raw.costs.nomad_monthly)?;
    let expat = non_negative("costs.expatMonthly", raw.costs.expat_monthly)?;
    non_negative("internetSpeed", raw.internet_speed)?;
    non_negative("safetyLevel", raw.safety_level)?;

    let region = raw
        .region
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(UNKNOWN_REGION);

    Ok(ValidatedCity {
        raw,
        name,
        region,
        population,
        latitude,
        longitude,
        monthly_budget: nomad.or(expat).unwrap_or(DEFAULT_MONTHLY_BUDGET),
    })
}

fn estimate(city: &ValidatedCity<'_>, reference: &ReferenceData) -> CityEstimates {
    let country = reference.resolve(&city.raw.country);
    let muslim = estimator::estimate_muslim_population(
        city.match_slug(),
        city.population,
        country.muslim_percent,
    );
    let mosques =
        estimator::estimate_mosque_count(muslim.estimated_population, country.muslim_percent);
    let halal_restaurants = estimator::estimate_halal_restaurant_count(
        muslim.estimated_population,
        country.muslim_percent,
        city.population,
    );

    CityEstimates {
        country,
        muslim,
        mosques,
        halal_restaurants,
    }
}

pub fn enrich_city(
    raw: &RawCityRecord,
    reference: &ReferenceData,
) -> Result<EnrichedCityProfile, RecordError> {
    let city = validate(raw)?;
    let estimates = estimate(&city, reference);

    let inputs = ScoreInputs {
        population: city.population,
        muslim_percent: estimates.muslim.effective_percent,
        mosques: estimates.mosques,
        halal_restaurants: estimates.halal_restaurants,
        airport_prayer_room: estimates.country.has_airport_prayer_room,
        islamic_banking: estimates.country.has_islamic_banking,
        discrimination: estimates.country.discrimination,
        safety_level: raw.safety_level,
        monthly_budget: city.monthly_budget,
        internet_speed: raw.internet_speed,
    };
    let scores = calculate_scores(&inputs);
    let qibla_bearing = geo::calculate_qibla_bearing(city.latitude, city.longitude);

    let extended = build_extended(&ExtendedContext {
        population: city.population,
        country: &estimates.country,
        muslim: estimates.muslim,
        mosques: estimates.mosques,
        halal_restaurants: estimates.halal_restaurants,
        scores: &scores,
        region: city.region,
        latitude: city.latitude,
        qibla_bearing,
        nomad_monthly: raw.costs.nomad_monthly,
        expat_monthly: raw.costs.expat_monthly,
        monthly_budget: city.monthly_budget,
        internet_speed: raw.internet_speed,
        safety_level: raw.safety_level,
        directory_score: raw.overall_score,
    });

    let features = CityFeatures {
        airport_prayer_room: estimates.country.has_airport_prayer_room,
        halal_hotels: extended.hotels.halal_friendly_available,
        islamic_banks: estimates.country.has_islamic_banking,
        islamic_schools: extended.religious_infrastructure.islamic_schools > 0,
    };

    let slug = derive_slug(
        &raw.slug,
        &raw.country,
        reference.resolve_name(&raw.country),
        raw.short_slug.as_deref(),
    );

    tracing::trace!(
        slug = %slug,
        halal = scores.halal,
        mosques = estimates.mosques,
        "city enriched"
    );

    Ok(EnrichedCityProfile {
        slug,
        name: city.name.to_string(),
        country: raw.country.clone(),
        region: city.region.to_string(),
        primary_image: select_image(raw.image.as_deref(), raw.region.as_deref()),
        coordinates: Coordinates {
            lat: city.latitude,
            lng: city.longitude,
        },
        scores,
        stats: CityStats {
            muslim_population: estimates.muslim.estimated_population,
            mosques: estimates.mosques,
            halal_restaurants: estimates.halal_restaurants,
            monthly_budget: city.monthly_budget,
            internet_speed: raw.internet_speed,
        },
        features,
        extended,
    })
}

pub fn decode_record(record: &Record) -> Result<RawCityRecord, RecordError> {
    serde_json::from_value(record.data.clone())
        .map_err(|e| RecordError::Malformed(e.to_string()))
}

/// 解碼加處理；失敗時帶上城市名稱
pub fn enrich_record(
    record: &Record,
    reference: &ReferenceData,
) -> Result<EnrichedCityProfile, EnrichmentError> {
    decode_record(record)
        .and_then(|raw| enrich_city(&raw, reference))
        .map_err(|e| EnrichmentError {
            city: record.label(),
            error: e.to_string(),
        })
}
