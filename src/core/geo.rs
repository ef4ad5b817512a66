//! Qibla 方位與齋戒時數估計

pub const KAABA_LATITUDE: f64 = 21.4225;
pub const KAABA_LONGITUDE: f64 = 39.8262;

const KAABA_EPSILON_DEGREES: f64 = 1e-6;

/// 城市往卡巴的大圓初始方位角，範圍 [0, 360)。
///
/// 城市座標與卡巴重合時方位無定義，回傳 `None`。
pub fn calculate_qibla_bearing(latitude: f64, longitude: f64) -> Option<f64> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    if (latitude - KAABA_LATITUDE).abs() < KAABA_EPSILON_DEGREES
        && (longitude - KAABA_LONGITUDE).abs() < KAABA_EPSILON_DEGREES
    {
        return None;
    }

    let phi_city = latitude.to_radians();
    let phi_kaaba = KAABA_LATITUDE.to_radians();
    let delta_lambda = (KAABA_LONGITUDE - longitude).to_radians();

    let y = delta_lambda.sin();
    let x = phi_city.cos() * phi_kaaba.tan() - phi_city.sin() * delta_lambda.cos();

    let mut bearing = y.atan2(x).to_degrees();
    if bearing < 0.0 {
        bearing += 360.0;
    }
    // 極小負值加 360 後可能剛好等於 360
    if bearing >= 360.0 {
        bearing -= 360.0;
    }
    Some(bearing)
}

/// 顯示用整數角度，0..=359
pub fn qibla_display(bearing: f64) -> u16 {
    (bearing.round() as u16) % 360
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

pub fn compass_point(bearing: f64) -> &'static str {
    let index = ((bearing.rem_euclid(360.0) / 22.5).round() as usize) % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// 依緯度絕對值分級，不做內插
pub fn estimate_fasting_hours(latitude: f64) -> &'static str {
    let lat = latitude.abs();
    if lat > 60.0 {
        "Follow nearest moderate city or Mecca timings"
    } else if lat > 50.0 {
        "18–20h summer / 8–10h winter"
    } else if lat > 40.0 {
        "16–18h summer / 10–12h winter"
    } else if lat > 30.0 {
        "15–16h summer / 11–12h winter"
    } else if lat > 20.0 {
        "14–15h summer / 12–13h winter"
    } else {
        "13–14h year-round"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_york_qibla() {
        let bearing = calculate_qibla_bearing(40.7128, -74.0060).unwrap();
        assert_eq!(qibla_display(bearing), 58);
        assert_eq!(compass_point(bearing), "ENE");
    }

    #[test]
    fn test_known_directions() {
        // 雅加達朝西北
        let jakarta = calculate_qibla_bearing(-6.2088, 106.8456).unwrap();
        assert!((290.0..300.0).contains(&jakarta), "{}", jakarta);

        // 倫敦朝東南
        let london = calculate_qibla_bearing(51.5074, -0.1278).unwrap();
        assert!((118.0..120.0).contains(&london), "{}", london);

        // 同經度、在南方 → 正北
        let south = calculate_qibla_bearing(0.0, KAABA_LONGITUDE).unwrap();
        assert!(south.abs() < 1e-9);
    }

    #[test]
    fn test_bearing_always_in_range() {
        let mut lat = -89.0;
        while lat <= 89.0 {
            let mut lng = -180.0;
            while lng <= 180.0 {
                if let Some(b) = calculate_qibla_bearing(lat, lng) {
                    assert!((0.0..360.0).contains(&b), "({}, {}) -> {}", lat, lng, b);
                    assert!(qibla_display(b) < 360);
                }
                lng += 7.5;
            }
            lat += 3.7;
        }
    }

    #[test]
    fn test_kaaba_returns_sentinel() {
        assert_eq!(calculate_qibla_bearing(KAABA_LATITUDE, KAABA_LONGITUDE), None);
        assert_eq!(calculate_qibla_bearing(f64::NAN, 10.0), None);
        // 麥加市區但不在卡巴上仍有方位
        assert!(calculate_qibla_bearing(21.45, 39.80).is_some());
    }

    #[test]
    fn test_fasting_buckets() {
        assert_eq!(estimate_fasting_hours(64.1), "Follow nearest moderate city or Mecca timings");
        assert_eq!(estimate_fasting_hours(-55.0), "18–20h summer / 8–10h winter");
        assert_eq!(estimate_fasting_hours(40.7), "16–18h summer / 10–12h winter");
        assert_eq!(estimate_fasting_hours(40.0), "15–16h summer / 11–12h winter");
        assert_eq!(estimate_fasting_hours(25.3), "14–15h summer / 12–13h winter");
        assert_eq!(estimate_fasting_hours(-6.2), "13–14h year-round");
    }

    #[test]
    fn test_compass_wraps_to_north() {
        assert_eq!(compass_point(359.0), "N");
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(180.0), "S");
    }
}
