//! 城市層級的人口與設施估計。全部是純函數，輸入只有單一城市與其國家資料。

/// 已知多元城市：slug 子字串 → 穆斯林比例。
///
/// 依表格順序比對，第一個命中者覆蓋人口級距換算後的比例。
/// 順序有意義：slug 同時包含兩個子字串時只會採用排在前面的那一個。
pub const DIVERSE_CITIES: &[(&str, f64)] = &[
    ("new-york", 7.0),
    ("london", 15.0),
    ("dearborn", 40.0),
    ("paris", 10.0),
    ("marseille", 25.0),
    ("brussels", 24.0),
    ("amsterdam", 14.0),
    ("rotterdam", 14.0),
    ("birmingham-united-kingdom", 30.0),
    ("bradford", 30.0),
    ("berlin", 9.0),
    ("vienna", 12.0),
    ("stockholm", 10.0),
    ("toronto", 10.0),
    ("chicago", 4.0),
    ("houston", 4.0),
    ("sydney", 6.0),
    ("melbourne", 4.0),
    ("moscow", 15.0),
    ("hyderabad", 40.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuslimPopulationEstimate {
    pub estimated_population: u64,
    pub effective_percent: f64,
    pub diverse_city_override: bool,
}

/// 依人口級距放大國家比例
fn scale_by_population(country_percent: f64, population: f64) -> f64 {
    if population > 5_000_000.0 {
        (country_percent * 1.3).min(100.0)
    } else if population > 1_000_000.0 {
        (country_percent * 1.15).min(100.0)
    } else {
        country_percent
    }
}

pub fn diverse_city_percent(slug: &str) -> Option<f64> {
    DIVERSE_CITIES
        .iter()
        .find(|(pattern, _)| slug.contains(pattern))
        .map(|(_, percent)| *percent)
}

pub fn estimate_muslim_population(
    slug: &str,
    population: f64,
    country_percent: f64,
) -> MuslimPopulationEstimate {
    let scaled = scale_by_population(country_percent, population);
    let (effective_percent, diverse_city_override) = match diverse_city_percent(slug) {
        Some(percent) => (percent, true),
        None => (scaled, false),
    };

    MuslimPopulationEstimate {
        estimated_population: (effective_percent / 100.0 * population).round().max(0.0) as u64,
        effective_percent,
        diverse_city_override,
    }
}

/// 每座清真寺服務的穆斯林人數
fn mosque_divisor(country_percent: f64) -> f64 {
    if country_percent >= 90.0 {
        800.0
    } else if country_percent >= 50.0 {
        1200.0
    } else if country_percent >= 10.0 {
        2000.0
    } else {
        3000.0
    }
}

pub fn estimate_mosque_count(muslim_population: u64, country_percent: f64) -> u64 {
    let count = (muslim_population as f64 / mosque_divisor(country_percent)).round() as u64;
    count.max(1)
}

pub fn estimate_halal_restaurant_count(
    muslim_population: u64,
    country_percent: f64,
    total_population: f64,
) -> u64 {
    if country_percent >= 90.0 {
        (total_population / 500.0).round().max(0.0) as u64
    } else if country_percent >= 50.0 {
        (total_population / 800.0).round().max(0.0) as u64
    } else {
        ((muslim_population as f64 / 400.0).round() as u64).max(5)
    }
}

pub fn population_tier(population: f64) -> &'static str {
    if population > 5_000_000.0 {
        "megacity"
    } else if population > 1_000_000.0 {
        "large"
    } else if population > 250_000.0 {
        "medium"
    } else {
        "small"
    }
}

/// 大型清真寺，不會超過總數
pub fn estimate_major_mosques(mosques: u64) -> u64 {
    ((mosques as f64 / 25.0).round() as u64).clamp(1, mosques.max(1))
}

pub fn estimate_islamic_schools(mosques: u64) -> u64 {
    (mosques as f64 / 15.0).round() as u64
}

pub fn estimate_halal_hotels(halal_restaurants: u64, country_percent: f64) -> u64 {
    if country_percent >= 50.0 {
        (halal_restaurants as f64 / 10.0).round() as u64
    } else {
        (halal_restaurants as f64 / 100.0).round() as u64
    }
}

pub fn estimate_islamic_banks(has_islamic_banking: bool, population: f64) -> u64 {
    if !has_islamic_banking {
        return 0;
    }
    ((population / 250_000.0).round() as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_tiers_scale_percent() {
        let small = estimate_muslim_population("small-town", 500_000.0, 10.0);
        assert_eq!(small.effective_percent, 10.0);
        assert_eq!(small.estimated_population, 50_000);

        let large = estimate_muslim_population("large-town", 2_000_000.0, 10.0);
        assert!((large.effective_percent - 11.5).abs() < 1e-9);

        let mega = estimate_muslim_population("mega-town", 6_000_000.0, 10.0);
        assert!((mega.effective_percent - 13.0).abs() < 1e-9);
        assert!(!mega.diverse_city_override);
    }

    #[test]
    fn test_scaled_percent_is_capped() {
        let estimate = estimate_muslim_population("riyadh-saudi-arabia", 7_000_000.0, 93.0);
        assert_eq!(estimate.effective_percent, 100.0);
        assert_eq!(estimate.estimated_population, 7_000_000);
    }

    #[test]
    fn test_diverse_city_override_wins_over_tier() {
        let estimate =
            estimate_muslim_population("new-york-city-ny-united-states", 8_000_000.0, 1.1);
        assert_eq!(estimate.effective_percent, 7.0);
        assert!(estimate.diverse_city_override);
        assert_eq!(estimate.estimated_population, 560_000);
    }

    #[test]
    fn test_first_match_in_table_order_wins() {
        // "new-york" 排在 "london" 前面
        assert_eq!(diverse_city_percent("new-york-london-hybrid"), Some(7.0));
        // 子字串比對：new-london 也會命中 london
        assert_eq!(diverse_city_percent("new-london-ct-united-states"), Some(15.0));
        assert_eq!(diverse_city_percent("lisbon-portugal"), None);
    }

    #[test]
    fn test_mosque_divisor_tiers() {
        assert_eq!(estimate_mosque_count(80_000, 95.0), 100);
        assert_eq!(estimate_mosque_count(120_000, 60.0), 100);
        assert_eq!(estimate_mosque_count(200_000, 15.0), 100);
        assert_eq!(estimate_mosque_count(300_000, 2.0), 100);
    }

    #[test]
    fn test_mosque_count_is_at_least_one() {
        assert_eq!(estimate_mosque_count(0, 0.0), 1);
        assert_eq!(estimate_mosque_count(100, 95.0), 1);
    }

    #[test]
    fn test_halal_restaurant_tiers() {
        assert_eq!(estimate_halal_restaurant_count(0, 95.0, 1_000_000.0), 2000);
        assert_eq!(estimate_halal_restaurant_count(0, 60.0, 800_000.0), 1000);
        assert_eq!(estimate_halal_restaurant_count(560_000, 1.1, 8_000_000.0), 1400);
        assert_eq!(estimate_halal_restaurant_count(100, 1.0, 10_000.0), 5);
    }

    #[test]
    fn test_major_mosques_never_exceed_total() {
        for mosques in [1, 2, 24, 25, 100, 8750] {
            let major = estimate_major_mosques(mosques);
            assert!(major >= 1 && major <= mosques, "{} -> {}", mosques, major);
        }
    }

    #[test]
    fn test_islamic_banks_require_banking() {
        assert_eq!(estimate_islamic_banks(false, 5_000_000.0), 0);
        assert_eq!(estimate_islamic_banks(true, 100_000.0), 1);
        assert_eq!(estimate_islamic_banks(true, 5_000_000.0), 20);
    }
}
