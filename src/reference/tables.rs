//! 內建國家參考資料。數值為估計值，僅供評分使用。

/// (國家, 穆斯林人口百分比)
pub const MUSLIM_PERCENT: &[(&str, f64)] = &[
    // Middle East & North Africa
    ("Saudi Arabia", 93.0),
    ("United Arab Emirates", 76.0),
    ("Qatar", 77.5),
    ("Kuwait", 74.6),
    ("Bahrain", 73.7),
    ("Oman", 85.9),
    ("Yemen", 99.1),
    ("Jordan", 97.2),
    ("Lebanon", 61.3),
    ("Syria", 87.0),
    ("Iraq", 95.7),
    ("Iran", 99.4),
    ("Israel", 18.1),
    ("Palestine", 97.5),
    ("Egypt", 90.0),
    ("Libya", 96.6),
    ("Tunisia", 99.0),
    ("Algeria", 99.0),
    ("Morocco", 99.0),
    ("Turkey", 98.0),
    // Sub-Saharan Africa
    ("Sudan", 91.0),
    ("Somalia", 99.8),
    ("Djibouti", 94.0),
    ("Senegal", 96.1),
    ("Mali", 93.9),
    ("Niger", 99.3),
    ("Nigeria", 53.5),
    ("Ethiopia", 34.0),
    ("Kenya", 11.2),
    ("Tanzania", 35.0),
    ("Uganda", 13.7),
    ("Ghana", 19.9),
    ("South Africa", 1.9),
    ("Rwanda", 2.0),
    ("Mauritius", 17.3),
    // Central & South Asia
    ("Pakistan", 96.5),
    ("Bangladesh", 91.0),
    ("Afghanistan", 99.7),
    ("India", 14.2),
    ("Sri Lanka", 9.7),
    ("Nepal", 4.4),
    ("Maldives", 100.0),
    ("Kazakhstan", 70.2),
    ("Uzbekistan", 96.3),
    ("Kyrgyzstan", 90.0),
    ("Tajikistan", 97.5),
    ("Turkmenistan", 93.0),
    ("Azerbaijan", 96.9),
    ("Georgia", 10.7),
    ("Armenia", 0.1),
    // East & Southeast Asia
    ("Indonesia", 87.2),
    ("Malaysia", 63.5),
    ("Brunei", 80.9),
    ("Singapore", 15.6),
    ("Thailand", 5.4),
    ("Philippines", 6.0),
    ("Vietnam", 0.1),
    ("Cambodia", 2.0),
    ("Myanmar", 4.3),
    ("Laos", 0.1),
    ("China", 1.8),
    ("Hong Kong", 4.1),
    ("Taiwan", 0.3),
    ("Japan", 0.2),
    ("South Korea", 0.4),
    ("Mongolia", 3.2),
    // Europe
    ("United Kingdom", 6.5),
    ("Ireland", 1.3),
    ("France", 8.8),
    ("Germany", 6.1),
    ("Netherlands", 5.1),
    ("Belgium", 7.6),
    ("Luxembourg", 3.2),
    ("Switzerland", 5.5),
    ("Austria", 8.0),
    ("Italy", 4.8),
    ("Spain", 2.6),
    ("Portugal", 0.4),
    ("Greece", 5.7),
    ("Sweden", 8.1),
    ("Norway", 5.7),
    ("Denmark", 5.4),
    ("Finland", 2.7),
    ("Iceland", 0.3),
    ("Poland", 0.1),
    ("Czech Republic", 0.2),
    ("Slovakia", 0.1),
    ("Hungary", 0.4),
    ("Romania", 0.3),
    ("Bulgaria", 11.1),
    ("Serbia", 4.2),
    ("Croatia", 1.5),
    ("Slovenia", 2.4),
    ("Bosnia and Herzegovina", 50.7),
    ("Albania", 58.8),
    ("Kosovo", 95.6),
    ("North Macedonia", 33.3),
    ("Montenegro", 19.1),
    ("Cyprus", 25.4),
    ("Malta", 2.6),
    ("Estonia", 0.1),
    ("Latvia", 0.1),
    ("Lithuania", 0.1),
    ("Ukraine", 0.9),
    ("Russia", 10.0),
    // Americas
    ("United States", 1.1),
    ("Canada", 4.9),
    ("Mexico", 0.1),
    ("Brazil", 0.1),
    ("Argentina", 1.0),
    ("Chile", 0.1),
    ("Colombia", 0.1),
    ("Peru", 0.1),
    ("Ecuador", 0.1),
    ("Uruguay", 0.1),
    ("Costa Rica", 0.1),
    ("Panama", 0.7),
    ("Trinidad and Tobago", 5.0),
    ("Guyana", 6.8),
    ("Suriname", 13.9),
    // Oceania
    ("Australia", 3.2),
    ("New Zealand", 1.3),
    ("Fiji", 6.3),
];

/// 別名 → 標準國名
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("US", "United States"),
    ("United States of America", "United States"),
    ("UK", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("England", "United Kingdom"),
    ("Scotland", "United Kingdom"),
    ("Wales", "United Kingdom"),
    ("Northern Ireland", "United Kingdom"),
    ("UAE", "United Arab Emirates"),
    ("Türkiye", "Turkey"),
    ("Turkiye", "Turkey"),
    ("Czechia", "Czech Republic"),
    ("Korea", "South Korea"),
    ("Republic of Korea", "South Korea"),
    ("Russian Federation", "Russia"),
    ("Viet Nam", "Vietnam"),
    ("Holland", "Netherlands"),
    ("The Netherlands", "Netherlands"),
    ("Macedonia", "North Macedonia"),
    ("Bosnia", "Bosnia and Herzegovina"),
    ("KSA", "Saudi Arabia"),
    ("Burma", "Myanmar"),
    ("Brunei Darussalam", "Brunei"),
    ("Palestinian Territories", "Palestine"),
];

/// 機場設有祈禱室的國家
pub const AIRPORT_PRAYER_ROOM: &[&str] = &[
    "Saudi Arabia",
    "United Arab Emirates",
    "Qatar",
    "Kuwait",
    "Bahrain",
    "Oman",
    "Jordan",
    "Egypt",
    "Morocco",
    "Tunisia",
    "Algeria",
    "Turkey",
    "Iran",
    "Pakistan",
    "Bangladesh",
    "Indonesia",
    "Malaysia",
    "Brunei",
    "Singapore",
    "Maldives",
    "Kazakhstan",
    "Uzbekistan",
    "Azerbaijan",
    "Thailand",
    "Japan",
    "South Korea",
    "Hong Kong",
    "Taiwan",
    "United Kingdom",
    "Germany",
    "Netherlands",
    "France",
    "Switzerland",
    "Australia",
    "Canada",
];

/// 提供伊斯蘭金融服務的國家
pub const ISLAMIC_BANKING: &[&str] = &[
    "Saudi Arabia",
    "United Arab Emirates",
    "Qatar",
    "Kuwait",
    "Bahrain",
    "Oman",
    "Jordan",
    "Lebanon",
    "Iraq",
    "Iran",
    "Egypt",
    "Sudan",
    "Morocco",
    "Tunisia",
    "Algeria",
    "Libya",
    "Turkey",
    "Pakistan",
    "Bangladesh",
    "Afghanistan",
    "Indonesia",
    "Malaysia",
    "Brunei",
    "Singapore",
    "Maldives",
    "Kazakhstan",
    "Azerbaijan",
    "Nigeria",
    "Kenya",
    "Senegal",
    "Bosnia and Herzegovina",
    "Kosovo",
    "United Kingdom",
    "Luxembourg",
];

/// (國家, hijab, niqab, niqab 禁令, islamophobia) — 1 最友善，10 最嚴重
pub const DISCRIMINATION: &[(&str, u8, u8, bool, u8)] = &[
    ("Saudi Arabia", 1, 1, false, 1),
    ("United Arab Emirates", 1, 1, false, 1),
    ("Qatar", 1, 1, false, 1),
    ("Kuwait", 1, 1, false, 1),
    ("Bahrain", 1, 2, false, 1),
    ("Oman", 1, 1, false, 1),
    ("Jordan", 1, 2, false, 1),
    ("Egypt", 2, 3, false, 2),
    ("Morocco", 2, 3, false, 1),
    ("Tunisia", 2, 4, false, 2),
    ("Turkey", 2, 3, false, 2),
    ("Pakistan", 1, 1, false, 1),
    ("Bangladesh", 1, 2, false, 1),
    ("Indonesia", 1, 2, false, 1),
    ("Malaysia", 1, 2, false, 1),
    ("Brunei", 1, 1, false, 1),
    ("Maldives", 1, 2, false, 1),
    ("Singapore", 2, 4, false, 2),
    ("Kazakhstan", 3, 5, false, 2),
    ("Uzbekistan", 4, 6, false, 2),
    ("Tajikistan", 6, 8, false, 3),
    ("Azerbaijan", 3, 5, false, 2),
    ("Albania", 2, 4, false, 2),
    ("Bosnia and Herzegovina", 2, 4, false, 2),
    ("Kosovo", 2, 4, false, 2),
    ("India", 5, 6, false, 7),
    ("Sri Lanka", 4, 7, true, 5),
    ("China", 8, 9, false, 8),
    ("Myanmar", 6, 7, false, 8),
    ("Thailand", 3, 5, false, 3),
    ("Japan", 3, 5, false, 3),
    ("South Korea", 4, 6, false, 4),
    ("United Kingdom", 3, 5, false, 5),
    ("Ireland", 3, 5, false, 3),
    ("France", 7, 9, true, 6),
    ("Belgium", 6, 9, true, 6),
    ("Netherlands", 4, 8, true, 5),
    ("Germany", 4, 6, false, 5),
    ("Austria", 5, 9, true, 6),
    ("Switzerland", 4, 8, true, 5),
    ("Denmark", 4, 9, true, 6),
    ("Norway", 3, 6, false, 4),
    ("Sweden", 3, 5, false, 4),
    ("Italy", 4, 6, false, 5),
    ("Spain", 3, 5, false, 4),
    ("Hungary", 5, 7, false, 7),
    ("Poland", 5, 6, false, 6),
    ("Bulgaria", 4, 8, true, 5),
    ("Russia", 4, 6, false, 5),
    ("United States", 3, 5, false, 5),
    ("Canada", 3, 5, false, 4),
    ("Australia", 3, 5, false, 4),
    ("New Zealand", 2, 4, false, 3),
];
