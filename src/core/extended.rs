use crate::core::estimator::{self, MuslimPopulationEstimate};
use crate::core::geo;
use crate::core::scoring::{self, DEFAULT_SAFETY_LEVEL};
use crate::domain::model::{
    AirportInfo, CityScores, CostOfLiving, Demographics, DigitalNomadInfo, DiscriminationInfo,
    ExtendedProfile, FinanceInfo, FoodInfo, HotelInfo, PracticalInfo, QualityOfLife,
    ReligiousInfrastructure, TourismInfo,
};
use crate::reference::{CountryProfile, Discrimination};

/// 產生 extended 區塊需要的估計值
#[derive(Debug, Clone)]
pub struct ExtendedContext<'a> {
    pub population: f64,
    pub country: &'a CountryProfile,
    pub muslim: MuslimPopulationEstimate,
    pub mosques: u64,
    pub halal_restaurants: u64,
    pub scores: &'a CityScores,
    pub region: &'a str,
    pub latitude: f64,
    pub qibla_bearing: Option<f64>,
    pub nomad_monthly: Option<f64>,
    pub expat_monthly: Option<f64>,
    pub monthly_budget: f64,
    pub internet_speed: Option<f64>,
    pub safety_level: Option<f64>,
    pub directory_score: Option<f64>,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn acceptance_level(d: &Discrimination) -> &'static str {
    let average = (f64::from(d.hijab) + f64::from(d.islamophobia)) / 2.0;
    if average <= 2.0 {
        "very high"
    } else if average <= 4.0 {
        "high"
    } else if average <= 6.0 {
        "moderate"
    } else {
        "low"
    }
}

pub fn food_availability(restaurants_per_100k: f64) -> &'static str {
    if restaurants_per_100k >= 50.0 {
        "abundant"
    } else if restaurants_per_100k >= 10.0 {
        "widely available"
    } else if restaurants_per_100k >= 2.0 {
        "available"
    } else {
        "limited"
    }
}

pub fn muslim_friendly_rating(halal_score: u8) -> &'static str {
    match halal_score {
        80..=u8::MAX => "excellent",
        60..=79 => "good",
        40..=59 => "fair",
        _ => "limited",
    }
}

pub fn cost_level(monthly_budget: f64) -> &'static str {
    if monthly_budget < 1000.0 {
        "low"
    } else if monthly_budget < 2000.0 {
        "moderate"
    } else if monthly_budget < 3500.0 {
        "high"
    } else {
        "very high"
    }
}

pub fn build_extended(ctx: &ExtendedContext<'_>) -> ExtendedProfile {
    let discrimination = ctx.country.discrimination;
    let restaurants_per_100k = scoring::per_100k(ctx.halal_restaurants, ctx.population);
    let major_mosques = estimator::estimate_major_mosques(ctx.mosques);
    let islamic_schools = estimator::estimate_islamic_schools(ctx.mosques);

    let airport_note = if ctx.country.has_airport_prayer_room {
        "Prayer rooms available at major airports"
    } else {
        "No dedicated prayer rooms reported; use multi-faith rooms or quiet areas"
    };

    ExtendedProfile {
        demographics: Demographics {
            total_population: ctx.population.round() as u64,
            muslim_population: ctx.muslim.estimated_population,
            muslim_percent: round2(ctx.muslim.effective_percent),
            country_muslim_percent: ctx.country.muslim_percent,
            population_tier: estimator::population_tier(ctx.population).to_string(),
            diverse_city_override: ctx.muslim.diverse_city_override,
        },
        discrimination: DiscriminationInfo {
            hijab: discrimination.hijab,
            niqab: discrimination.niqab,
            niqab_banned: discrimination.niqab_banned,
            islamophobia: discrimination.islamophobia,
            acceptance_level: acceptance_level(&discrimination).to_string(),
        },
        airport: AirportInfo {
            prayer_room: ctx.country.has_airport_prayer_room,
            note: airport_note.to_string(),
        },
        hotels: {
            let estimated =
                estimator::estimate_halal_hotels(ctx.halal_restaurants, ctx.country.muslim_percent);
            HotelInfo {
                halal_friendly_available: estimated > 0,
                estimated_halal_hotels: estimated,
            }
        },
        finance: FinanceInfo {
            islamic_banking: ctx.country.has_islamic_banking,
            estimated_islamic_banks: estimator::estimate_islamic_banks(
                ctx.country.has_islamic_banking,
                ctx.population,
            ),
        },
        food: FoodInfo {
            halal_restaurants: ctx.halal_restaurants,
            restaurants_per_100k: round2(restaurants_per_100k),
            availability: food_availability(restaurants_per_100k).to_string(),
        },
        religious_infrastructure: ReligiousInfrastructure {
            mosques: ctx.mosques,
            major_mosques,
            jummah_locations: ctx.mosques,
            islamic_schools,
            mosques_per_100k: round2(scoring::per_100k(ctx.mosques, ctx.population)),
        },
        tourism: TourismInfo {
            region: ctx.region.to_string(),
            muslim_friendly_rating: muslim_friendly_rating(ctx.scores.halal).to_string(),
        },
        digital_nomad: DigitalNomadInfo {
            internet_speed: ctx.internet_speed,
            internet_score: ctx.scores.internet,
            directory_score: ctx.directory_score,
        },
        cost_of_living: CostOfLiving {
            nomad_monthly: ctx.nomad_monthly,
            expat_monthly: ctx.expat_monthly,
            monthly_budget: ctx.monthly_budget,
            cost_level: cost_level(ctx.monthly_budget).to_string(),
        },
        quality_of_life: QualityOfLife {
            safety_level: ctx.safety_level.unwrap_or(DEFAULT_SAFETY_LEVEL),
            safety_score: ctx.scores.safety,
            overall_score: ctx.scores.overall,
        },
        practical_info: PracticalInfo {
            qibla_bearing: ctx.qibla_bearing.map(geo::qibla_display),
            qibla_compass: ctx
                .qibla_bearing
                .map(geo::compass_point)
                .unwrap_or("N/A")
                .to_string(),
            fasting_hours: geo::estimate_fasting_hours(ctx.latitude).to_string(),
        },
    }
}
