//! Halal 綜合分數與其他子分數。每個分數都是 0–100 的整數。

use crate::domain::model::CityScores;
use crate::reference::Discrimination;

pub const DEFAULT_SAFETY_LEVEL: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub population: f64,
    /// 城市層級的有效比例（已套用級距或多元城市表）
    pub muslim_percent: f64,
    pub mosques: u64,
    pub halal_restaurants: u64,
    pub airport_prayer_room: bool,
    pub islamic_banking: bool,
    pub discrimination: Discrimination,
    pub safety_level: Option<f64>,
    pub monthly_budget: f64,
    pub internet_speed: Option<f64>,
}

impl ScoreInputs {
    fn safety_level(&self) -> f64 {
        self.safety_level.unwrap_or(DEFAULT_SAFETY_LEVEL)
    }
}

pub fn per_100k(count: u64, population: f64) -> f64 {
    if population <= 0.0 {
        return 0.0;
    }
    count as f64 / population * 100_000.0
}

fn bounded(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as u8
}

pub fn calculate_halal_score(inputs: &ScoreInputs) -> u8 {
    let population_term = (inputs.muslim_percent * 0.25).min(25.0);
    let mosque_term = (per_100k(inputs.mosques, inputs.population) * 2.0).min(20.0);
    let food_term = (per_100k(inputs.halal_restaurants, inputs.population) * 0.3).min(15.0);

    let mut infrastructure = 0.0;
    if inputs.airport_prayer_room {
        infrastructure += 5.0;
    }
    if inputs.islamic_banking {
        infrastructure += 5.0;
    }

    // 不單獨設上下限，指標 > 10 時可為負
    let d = &inputs.discrimination;
    let acceptance_term = (10.0 - (f64::from(d.hijab) + f64::from(d.islamophobia)) / 2.0) * 2.0;

    let safety_term = inputs.safety_level() * 2.0;

    bounded(
        population_term
            + mosque_term
            + food_term
            + infrastructure
            + acceptance_term
            + safety_term,
    )
}

pub fn food_score(inputs: &ScoreInputs) -> u8 {
    let density = (per_100k(inputs.halal_restaurants, inputs.population) * 2.5).min(70.0);
    bounded(density + (inputs.muslim_percent * 0.3).min(30.0))
}

pub fn community_score(inputs: &ScoreInputs) -> u8 {
    let share = (inputs.muslim_percent * 0.6).min(60.0);
    let mosques = (per_100k(inputs.mosques, inputs.population) * 4.0).min(40.0);
    bounded(share + mosques)
}

/// 月預算越低分數越高；500 以下為滿分
pub fn cost_score(monthly_budget: f64) -> u8 {
    bounded(100.0 - (monthly_budget - 500.0) / 45.0)
}

pub fn internet_score(internet_speed: Option<f64>) -> u8 {
    match internet_speed {
        Some(speed) => bounded(speed * 1.25),
        None => 50,
    }
}

pub fn safety_score(safety_level: Option<f64>) -> u8 {
    bounded(safety_level.unwrap_or(DEFAULT_SAFETY_LEVEL) * 10.0)
}

pub fn calculate_scores(inputs: &ScoreInputs) -> CityScores {
    let halal = calculate_halal_score(inputs);
    let food = food_score(inputs);
    let community = community_score(inputs);
    let cost = cost_score(inputs.monthly_budget);
    let internet = internet_score(inputs.internet_speed);
    let safety = safety_score(inputs.safety_level);

    let overall = f64::from(halal) * 0.40
        + f64::from(food) * 0.15
        + f64::from(community) * 0.15
        + f64::from(safety) * 0.10
        + f64::from(cost) * 0.10
        + f64::from(internet) * 0.10;

    CityScores {
        halal,
        muslim_population_percent: bounded(inputs.muslim_percent),
        food,
        community,
        cost,
        internet,
        safety,
        overall: bounded(overall),
    }
}
