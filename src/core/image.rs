use url::Url;

const CDN_MARKER: &str = "/cdn-cgi/image/";

pub const DEFAULT_IMAGE: &str = "/images/regions/world.jpg";

/// 依序以不分大小寫的子字串比對區域名稱
pub const REGION_IMAGES: &[(&str, &str)] = &[
    ("asia", "/images/regions/asia.jpg"),
    ("europe", "/images/regions/europe.jpg"),
    ("middle east", "/images/regions/middle-east.jpg"),
    ("africa", "/images/regions/africa.jpg"),
    ("latin america", "/images/regions/latin-america.jpg"),
    ("north america", "/images/regions/north-america.jpg"),
    ("oceania", "/images/regions/oceania.jpg"),
];

/// 去掉 CDN 縮圖包裝，回傳原始圖片網址。
///
/// 兩種形式：`https://host/cdn-cgi/image/<opts>/path/img.jpg` 與
/// `https://cdn/cdn-cgi/image/<opts>/https://origin/img.jpg`。
pub fn unwrap_cdn_url(image: &str) -> Option<String> {
    let url = Url::parse(image).ok()?;
    let path = url.path();
    let start = path.find(CDN_MARKER)? + CDN_MARKER.len();
    let (_options, remainder) = path[start..].split_once('/')?;

    if remainder.starts_with("http://") || remainder.starts_with("https://") {
        return Url::parse(remainder).ok().map(String::from);
    }
    if remainder.is_empty() {
        return None;
    }

    let mut unwrapped = url.clone();
    unwrapped.set_path(&format!("/{}", remainder));
    unwrapped.set_query(None);
    Some(unwrapped.into())
}

pub fn region_fallback(region: &str) -> &'static str {
    let region = region.to_lowercase();
    REGION_IMAGES
        .iter()
        .find(|(key, _)| region.contains(key))
        .map(|(_, image)| *image)
        .unwrap_or(DEFAULT_IMAGE)
}

pub fn select_image(image: Option<&str>, region: Option<&str>) -> String {
    if let Some(image) = image.map(str::trim).filter(|s| !s.is_empty()) {
        if let Some(unwrapped) = unwrap_cdn_url(image) {
            return unwrapped;
        }
        if let Ok(url) = Url::parse(image) {
            if matches!(url.scheme(), "http" | "https") {
                return image.to_string();
            }
        }
    }
    region_fallback(region.unwrap_or_default()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwraps_same_host_cdn_path() {
        let wrapped =
            "https://nomads.example.com/cdn-cgi/image/width=600,quality=80/assets/img/places/doha.jpg";
        assert_eq!(
            unwrap_cdn_url(wrapped).as_deref(),
            Some("https://nomads.example.com/assets/img/places/doha.jpg")
        );
    }

    #[test]
    fn test_unwraps_embedded_origin_url() {
        let wrapped = "https://cdn.example.com/cdn-cgi/image/fit=cover/https://origin.example.org/a/b.png";
        assert_eq!(
            unwrap_cdn_url(wrapped).as_deref(),
            Some("https://origin.example.org/a/b.png")
        );
    }

    #[test]
    fn test_plain_url_is_kept() {
        let plain = "https://images.example.com/istanbul.jpg";
        assert_eq!(unwrap_cdn_url(plain), None);
        assert_eq!(select_image(Some(plain), Some("Europe")), plain);
    }

    #[test]
    fn test_region_fallbacks() {
        assert_eq!(select_image(None, Some("Southeast Asia")), "/images/regions/asia.jpg");
        assert_eq!(
            select_image(Some("not a url"), Some("Middle East & North Africa")),
            "/images/regions/middle-east.jpg"
        );
        assert_eq!(select_image(Some(""), Some("LATIN AMERICA")), "/images/regions/latin-america.jpg");
        // 依表格順序，asia 在 middle east 之前
        assert_eq!(
            select_image(None, Some("Middle East and Central Asia")),
            "/images/regions/asia.jpg"
        );
        assert_eq!(select_image(None, Some("Antarctica")), DEFAULT_IMAGE);
        assert_eq!(select_image(None, None), DEFAULT_IMAGE);
    }
}
