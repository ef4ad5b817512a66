//! 由旅遊目錄的長 slug 產生網站用的短 slug

const US_STATES: [&str; 51] = [
    "al", "ak", "az", "ar", "ca", "co", "ct", "de", "fl", "ga", "hi", "id", "il", "in", "ia", "ks",
    "ky", "la", "me", "md", "ma", "mi", "mn", "ms", "mo", "mt", "ne", "nv", "nh", "nj", "nm", "ny",
    "nc", "nd", "oh", "ok", "or", "pa", "ri", "sc", "sd", "tn", "tx", "ut", "vt", "va", "wa", "wv",
    "wi", "wy", "dc",
];

const MAX_TOKENS: usize = 3;

fn country_words(countries: &[&str]) -> Vec<String> {
    countries
        .iter()
        .flat_map(|c| c.split(|ch: char| ch.is_whitespace() || ch == '-'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// 去掉國名字詞、美國州縮寫與結尾的 `city`，保留前三段。
///
/// 州縮寫不看國家，任何兩字母州代碼都會被移除；全部刪光時退回 short slug 或原 slug。
pub fn derive_slug(
    slug: &str,
    country: &str,
    canonical_country: Option<&str>,
    short_slug: Option<&str>,
) -> String {
    let mut countries = vec![country];
    if let Some(canonical) = canonical_country {
        countries.push(canonical);
    }
    let words = country_words(&countries);

    let mut kept: Vec<String> = slug
        .split('-')
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|token| !words.contains(token))
        .filter(|token| !(token.len() == 2 && US_STATES.contains(&token.as_str())))
        .collect();

    if kept.len() > 2 && kept.last().map(String::as_str) == Some("city") {
        kept.pop();
    }
    kept.truncate(MAX_TOKENS);

    if !kept.is_empty() {
        return kept.join("-");
    }

    short_slug
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(slug)
        .to_string()
}
