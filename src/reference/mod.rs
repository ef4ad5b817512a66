//! 國家參考資料：穆斯林比例、機場祈禱室、伊斯蘭金融、歧視指標。
//!
//! 資料在批次開始前建立一次，之後唯讀，以 `Arc<ReferenceData>` 傳入管道。
//! 查詢一律不會失敗：找不到的國家回傳預設值。

pub mod tables;

use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_MUSLIM_PERCENT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discrimination {
    pub hijab: u8,
    pub niqab: u8,
    pub niqab_banned: bool,
    pub islamophobia: u8,
}

impl Default for Discrimination {
    fn default() -> Self {
        Self {
            hijab: 4,
            niqab: 5,
            niqab_banned: false,
            islamophobia: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryProfile {
    pub muslim_percent: f64,
    pub has_airport_prayer_room: bool,
    pub has_islamic_banking: bool,
    pub discrimination: Discrimination,
}

impl Default for CountryProfile {
    fn default() -> Self {
        Self {
            muslim_percent: DEFAULT_MUSLIM_PERCENT,
            has_airport_prayer_room: false,
            has_islamic_banking: false,
            discrimination: Discrimination::default(),
        }
    }
}

/// JSON 覆寫檔格式
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReferenceOverrides {
    #[serde(default)]
    pub countries: BTreeMap<String, CountryOverride>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CountryOverride {
    pub muslim_percent: Option<f64>,
    pub airport_prayer_room: Option<bool>,
    pub islamic_banking: Option<bool>,
    pub discrimination: Option<Discrimination>,
}

impl ReferenceOverrides {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| EtlError::ConfigValidationError {
            field: "reference_overrides".to_string(),
            message: format!("Invalid override file: {}", e),
        })
    }
}

impl Validate for ReferenceOverrides {
    fn validate(&self) -> Result<()> {
        for (name, entry) in &self.countries {
            if let Some(percent) = entry.muslim_percent {
                validate_range(&format!("countries.{}.muslimPercent", name), percent, 0.0, 100.0)?;
            }
            if let Some(d) = entry.discrimination {
                for (field, value) in [
                    ("hijab", d.hijab),
                    ("niqab", d.niqab),
                    ("islamophobia", d.islamophobia),
                ] {
                    validate_range(
                        &format!("countries.{}.discrimination.{}", name, field),
                        value,
                        1,
                        10,
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    countries: HashMap<String, CountryProfile>,
    aliases: HashMap<String, String>,
    // 小寫鍵 → 標準國名，最後一層比對用
    folded: HashMap<String, String>,
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ReferenceData {
    /// 由內建表格建立
    pub fn builtin() -> Self {
        let mut countries: HashMap<String, CountryProfile> = HashMap::new();

        for (name, percent) in tables::MUSLIM_PERCENT {
            countries.entry(name.to_string()).or_default().muslim_percent = *percent;
        }
        for name in tables::AIRPORT_PRAYER_ROOM {
            countries
                .entry(name.to_string())
                .or_default()
                .has_airport_prayer_room = true;
        }
        for name in tables::ISLAMIC_BANKING {
            countries.entry(name.to_string()).or_default().has_islamic_banking = true;
        }
        for (name, hijab, niqab, niqab_banned, islamophobia) in tables::DISCRIMINATION {
            countries.entry(name.to_string()).or_default().discrimination = Discrimination {
                hijab: *hijab,
                niqab: *niqab,
                niqab_banned: *niqab_banned,
                islamophobia: *islamophobia,
            };
        }

        let aliases = tables::COUNTRY_ALIASES
            .iter()
            .map(|(alias, name)| (alias.to_string(), name.to_string()))
            .collect();

        let mut data = Self {
            countries,
            aliases,
            folded: HashMap::new(),
        };
        data.rebuild_folded();
        data
    }

    fn rebuild_folded(&mut self) {
        self.folded.clear();
        for name in self.countries.keys() {
            self.folded.insert(fold(name), name.clone());
        }
        for (alias, name) in &self.aliases {
            self.folded.entry(fold(alias)).or_insert_with(|| name.clone());
        }
    }

    /// 套用覆寫檔；驗證失敗時整批中止
    pub fn with_overrides(mut self, overrides: ReferenceOverrides) -> Result<Self> {
        overrides.validate()?;

        for (name, entry) in overrides.countries {
            // 別名或大小寫不同的鍵合併到既有國家
            let key = self
                .resolve_name(&name)
                .map(str::to_string)
                .unwrap_or(name);
            let profile = self.countries.entry(key).or_default();
            if let Some(percent) = entry.muslim_percent {
                profile.muslim_percent = percent;
            }
            if let Some(prayer_room) = entry.airport_prayer_room {
                profile.has_airport_prayer_room = prayer_room;
            }
            if let Some(banking) = entry.islamic_banking {
                profile.has_islamic_banking = banking;
            }
            if let Some(discrimination) = entry.discrimination {
                profile.discrimination = discrimination;
            }
        }

        for (alias, target) in overrides.aliases {
            if !self.countries.contains_key(&target) {
                return Err(EtlError::InvalidConfigValueError {
                    field: format!("aliases.{}", alias),
                    value: target,
                    reason: "Alias target is not a known country".to_string(),
                });
            }
            self.aliases.insert(alias, target);
        }

        self.rebuild_folded();
        Ok(self)
    }

    /// 精確比對 → 別名 → 不分大小寫
    pub fn resolve_name(&self, country: &str) -> Option<&str> {
        if let Some((name, _)) = self.countries.get_key_value(country) {
            return Some(name.as_str());
        }
        if let Some(name) = self.aliases.get(country) {
            return Some(name.as_str());
        }
        self.folded.get(&fold(country)).map(String::as_str)
    }

    fn lookup(&self, country: &str) -> Option<&CountryProfile> {
        self.resolve_name(country)
            .and_then(|name| self.countries.get(name))
    }

    pub fn resolve(&self, country: &str) -> CountryProfile {
        self.lookup(country).copied().unwrap_or_default()
    }

    pub fn muslim_percent(&self, country: &str) -> f64 {
        self.lookup(country)
            .map(|p| p.muslim_percent)
            .unwrap_or(DEFAULT_MUSLIM_PERCENT)
    }

    pub fn has_airport_prayer_room(&self, country: &str) -> bool {
        self.lookup(country)
            .map(|p| p.has_airport_prayer_room)
            .unwrap_or(false)
    }

    pub fn has_islamic_banking(&self, country: &str) -> bool {
        self.lookup(country)
            .map(|p| p.has_islamic_banking)
            .unwrap_or(false)
    }

    pub fn discrimination(&self, country: &str) -> Discrimination {
        self.lookup(country)
            .map(|p| p.discrimination)
            .unwrap_or_default()
    }

    pub fn countries(&self) -> impl Iterator<Item = (&str, &CountryProfile)> {
        self.countries.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
