//! Supported locales.
//!
//! Generation only works for a closed set of locales. Each one carries its
//! numeric LCID, the name used to key its resource bundle, its legacy ANSI
//! codepage and the order in which it writes date components.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order of the day, month and year components in short dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    /// 12/31/2024
    MonthDayYear,
    /// 31.12.2024
    DayMonthYear,
    /// 2024/12/31
    YearMonthDay,
}

/// A supported locale.
///
/// Raw LCIDs outside this set are rejected by [`LocaleId::from_lcid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LocaleId {
    English,
    Japanese,
    German,
    Russian,
    Hindi,
    Arabic,
    French,
    Spanish,
    Italian,
    ChineseTraditional,
    ChineseSimplified,
    ChineseHongKong,
    Korean,
    Turkish,
    Brazilian,
    Dutch,
    Danish,
    Swedish,
    Czech,
    Finnish,
    Hebrew,
    Hungarian,
    Polish,
    Portuguese,
    Greek,
    NorwegianNynorsk,
    NorwegianBokmal,
    Thai,
}

impl LocaleId {
    /// Every supported locale.
    pub const ALL: [LocaleId; 28] = [
        LocaleId::English,
        LocaleId::Japanese,
        LocaleId::German,
        LocaleId::Russian,
        LocaleId::Hindi,
        LocaleId::Arabic,
        LocaleId::French,
        LocaleId::Spanish,
        LocaleId::Italian,
        LocaleId::ChineseTraditional,
        LocaleId::ChineseSimplified,
        LocaleId::ChineseHongKong,
        LocaleId::Korean,
        LocaleId::Turkish,
        LocaleId::Brazilian,
        LocaleId::Dutch,
        LocaleId::Danish,
        LocaleId::Swedish,
        LocaleId::Czech,
        LocaleId::Finnish,
        LocaleId::Hebrew,
        LocaleId::Hungarian,
        LocaleId::Polish,
        LocaleId::Portuguese,
        LocaleId::Greek,
        LocaleId::NorwegianNynorsk,
        LocaleId::NorwegianBokmal,
        LocaleId::Thai,
    ];

    /// Numeric Windows locale identifier.
    pub const fn lcid(self) -> u32 {
        match self {
            LocaleId::English => 0x409,
            LocaleId::Japanese => 0x411,
            LocaleId::German => 0x407,
            LocaleId::Russian => 0x419,
            LocaleId::Hindi => 0x439,
            LocaleId::Arabic => 0x401,
            LocaleId::French => 0x40C,
            LocaleId::Spanish => 0xC0A,
            LocaleId::Italian => 0x410,
            LocaleId::ChineseTraditional => 0x404,
            LocaleId::ChineseSimplified => 0x804,
            LocaleId::ChineseHongKong => 0xC04,
            LocaleId::Korean => 0x412,
            LocaleId::Turkish => 0x41F,
            LocaleId::Brazilian => 0x416,
            LocaleId::Dutch => 0x413,
            LocaleId::Danish => 0x406,
            LocaleId::Swedish => 0x41D,
            LocaleId::Czech => 0x405,
            LocaleId::Finnish => 0x40B,
            LocaleId::Hebrew => 0x40D,
            LocaleId::Hungarian => 0x40E,
            LocaleId::Polish => 0x415,
            LocaleId::Portuguese => 0x816,
            LocaleId::Greek => 0x408,
            LocaleId::NorwegianNynorsk => 0x814,
            LocaleId::NorwegianBokmal => 0x414,
            LocaleId::Thai => 0x41E,
        }
    }

    /// Locale name, also the prefix of its resource key.
    pub const fn name(self) -> &'static str {
        match self {
            LocaleId::English => "English",
            LocaleId::Japanese => "Japanese",
            LocaleId::German => "German",
            LocaleId::Russian => "Russian",
            LocaleId::Hindi => "Hindi",
            LocaleId::Arabic => "Arabic",
            LocaleId::French => "French",
            LocaleId::Spanish => "Spanish",
            LocaleId::Italian => "Italian",
            LocaleId::ChineseTraditional => "ChineseTraditional",
            LocaleId::ChineseSimplified => "ChineseSimplified",
            LocaleId::ChineseHongKong => "ChineseHongKong",
            LocaleId::Korean => "Korean",
            LocaleId::Turkish => "Turkish",
            LocaleId::Brazilian => "Brazilian",
            LocaleId::Dutch => "Dutch",
            LocaleId::Danish => "Danish",
            LocaleId::Swedish => "Swedish",
            LocaleId::Czech => "Czech",
            LocaleId::Finnish => "Finnish",
            LocaleId::Hebrew => "Hebrew",
            LocaleId::Hungarian => "Hungarian",
            LocaleId::Polish => "Polish",
            LocaleId::Portuguese => "Portuguese",
            LocaleId::Greek => "Greek",
            LocaleId::NorwegianNynorsk => "NorwegianNynorsk",
            LocaleId::NorwegianBokmal => "NorwegianBokmal",
            LocaleId::Thai => "Thai",
        }
    }

    /// POSIX `language_TERRITORY` tag.
    pub const fn posix_tag(self) -> &'static str {
        match self {
            LocaleId::English => "en_US",
            LocaleId::Japanese => "ja_JP",
            LocaleId::German => "de_DE",
            LocaleId::Russian => "ru_RU",
            LocaleId::Hindi => "hi_IN",
            LocaleId::Arabic => "ar_SA",
            LocaleId::French => "fr_FR",
            LocaleId::Spanish => "es_ES",
            LocaleId::Italian => "it_IT",
            LocaleId::ChineseTraditional => "zh_TW",
            LocaleId::ChineseSimplified => "zh_CN",
            LocaleId::ChineseHongKong => "zh_HK",
            LocaleId::Korean => "ko_KR",
            LocaleId::Turkish => "tr_TR",
            LocaleId::Brazilian => "pt_BR",
            LocaleId::Dutch => "nl_NL",
            LocaleId::Danish => "da_DK",
            LocaleId::Swedish => "sv_SE",
            LocaleId::Czech => "cs_CZ",
            LocaleId::Finnish => "fi_FI",
            LocaleId::Hebrew => "he_IL",
            LocaleId::Hungarian => "hu_HU",
            LocaleId::Polish => "pl_PL",
            LocaleId::Portuguese => "pt_PT",
            LocaleId::Greek => "el_GR",
            LocaleId::NorwegianNynorsk => "nn_NO",
            LocaleId::NorwegianBokmal => "nb_NO",
            LocaleId::Thai => "th_TH",
        }
    }

    /// Default legacy ANSI codepage. Unicode-only locales have none.
    pub const fn ansi_codepage(self) -> Option<u16> {
        match self {
            LocaleId::Japanese => Some(932),
            LocaleId::ChineseSimplified => Some(936),
            LocaleId::Korean => Some(949),
            LocaleId::ChineseTraditional | LocaleId::ChineseHongKong => Some(950),
            LocaleId::Thai => Some(874),
            LocaleId::Czech | LocaleId::Hungarian | LocaleId::Polish => Some(1250),
            LocaleId::Russian => Some(1251),
            LocaleId::Greek => Some(1253),
            LocaleId::Turkish => Some(1254),
            LocaleId::Hebrew => Some(1255),
            LocaleId::Arabic => Some(1256),
            LocaleId::Hindi => None,
            _ => Some(1252),
        }
    }

    /// Order of date components in this locale's short date pattern.
    pub const fn date_order(self) -> DateOrder {
        match self {
            LocaleId::English => DateOrder::MonthDayYear,
            LocaleId::Japanese
            | LocaleId::ChineseTraditional
            | LocaleId::ChineseSimplified
            | LocaleId::Korean
            | LocaleId::Hungarian => DateOrder::YearMonthDay,
            _ => DateOrder::DayMonthYear,
        }
    }

    /// Key of this locale's bundle, e.g. `Japanese_Text`.
    pub fn resource_key(self) -> String {
        format!("{}_Text", self.name())
    }

    /// Validate a raw LCID against the supported set.
    pub fn from_lcid(lcid: u32) -> Result<Self, DataError> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.lcid() == lcid)
            .ok_or(DataError::UnsupportedLocale(lcid))
    }

    /// Resolve a POSIX locale string such as `ja_JP.UTF-8` or `de`.
    ///
    /// An exact `language_TERRITORY` match wins; otherwise the language alone
    /// selects its most common variant.
    pub fn from_posix_locale(value: &str) -> Option<Self> {
        let base = value
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_");
        if base.is_empty() {
            return None;
        }

        if let Some(exact) = Self::ALL
            .into_iter()
            .find(|locale| locale.posix_tag().eq_ignore_ascii_case(&base))
        {
            return Some(exact);
        }

        let language = base.split('_').next().unwrap_or_default().to_ascii_lowercase();
        match language.as_str() {
            "zh" => Some(LocaleId::ChineseSimplified),
            "pt" => Some(LocaleId::Portuguese),
            "no" => Some(LocaleId::NorwegianBokmal),
            "iw" => Some(LocaleId::Hebrew),
            _ => Self::ALL.into_iter().find(|locale| {
                locale
                    .posix_tag()
                    .split('_')
                    .next()
                    .is_some_and(|lang| lang == language)
            }),
        }
    }

    /// Locale of the current process as reported by the OS.
    ///
    /// Falls back to English when the OS locale is not a supported one.
    pub fn system_default() -> Self {
        Self::from_system_tag(sys_locale::get_locale().as_deref())
    }

    fn from_system_tag(tag: Option<&str>) -> Self {
        tag.and_then(Self::from_posix_locale)
            .unwrap_or(LocaleId::English)
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name(), self.lcid())
    }
}

impl FromStr for LocaleId {
    type Err = DataError;

    /// Accepts a locale name (`Japanese`), an LCID (`0x411`, `1041`) or a
    /// POSIX tag (`ja_JP`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            let lcid = u32::from_str_radix(hex, 16)
                .map_err(|_| DataError::UnknownLocaleName(s.to_string()))?;
            return Self::from_lcid(lcid);
        }
        if let Ok(lcid) = trimmed.parse::<u32>() {
            return Self::from_lcid(lcid);
        }

        Self::ALL
            .into_iter()
            .find(|locale| locale.name().eq_ignore_ascii_case(trimmed))
            .or_else(|| Self::from_posix_locale(trimmed))
            .ok_or_else(|| DataError::UnknownLocaleName(s.to_string()))
    }
}

impl TryFrom<String> for LocaleId {
    type Error = DataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LocaleId> for String {
    fn from(locale: LocaleId) -> Self {
        locale.name().to_string()
    }
}

impl TryFrom<u32> for LocaleId {
    type Error = DataError;

    fn try_from(lcid: u32) -> Result<Self, Self::Error> {
        Self::from_lcid(lcid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lcids_are_unique() {
        let lcids: HashSet<u32> = LocaleId::ALL.iter().map(|l| l.lcid()).collect();
        assert_eq!(lcids.len(), LocaleId::ALL.len());
    }

    #[test]
    fn test_from_lcid_round_trip() {
        for locale in LocaleId::ALL {
            assert_eq!(LocaleId::from_lcid(locale.lcid()).unwrap(), locale);
        }
    }

    #[test]
    fn test_unsupported_lcid() {
        let result = LocaleId::from_lcid(0x9999);
        assert!(matches!(result, Err(DataError::UnsupportedLocale(0x9999))));
    }

    #[test]
    fn test_resource_key() {
        assert_eq!(LocaleId::Japanese.resource_key(), "Japanese_Text");
        assert_eq!(LocaleId::Finnish.resource_key(), "Finnish_Text");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("Japanese".parse::<LocaleId>().unwrap(), LocaleId::Japanese);
        assert_eq!("korean".parse::<LocaleId>().unwrap(), LocaleId::Korean);
        assert_eq!("0x404".parse::<LocaleId>().unwrap(), LocaleId::ChineseTraditional);
        assert_eq!("1033".parse::<LocaleId>().unwrap(), LocaleId::English);
        assert_eq!("de_DE".parse::<LocaleId>().unwrap(), LocaleId::German);
        assert!("Klingon".parse::<LocaleId>().is_err());
        assert!(matches!(
            "0x9999".parse::<LocaleId>(),
            Err(DataError::UnsupportedLocale(0x9999))
        ));
    }

    #[test]
    fn test_system_tag_detection() {
        assert_eq!(LocaleId::from_system_tag(Some("en-US")), LocaleId::English);
        assert_eq!(LocaleId::from_system_tag(Some("ja-JP")), LocaleId::Japanese);
        assert_eq!(LocaleId::from_system_tag(Some("C")), LocaleId::English);
        assert_eq!(LocaleId::from_system_tag(None), LocaleId::English);
        assert_eq!(
            LocaleId::system_default(),
            LocaleId::from_system_tag(sys_locale::get_locale().as_deref())
        );
    }

    #[test]
    fn test_from_posix_locale() {
        assert_eq!(LocaleId::from_posix_locale("ja_JP.UTF-8"), Some(LocaleId::Japanese));
        assert_eq!(LocaleId::from_posix_locale("pt-BR"), Some(LocaleId::Brazilian));
        assert_eq!(LocaleId::from_posix_locale("pt"), Some(LocaleId::Portuguese));
        assert_eq!(LocaleId::from_posix_locale("zh"), Some(LocaleId::ChineseSimplified));
        assert_eq!(LocaleId::from_posix_locale("fr_CA"), Some(LocaleId::French));
        assert_eq!(LocaleId::from_posix_locale("de_DE@euro"), Some(LocaleId::German));
        assert_eq!(LocaleId::from_posix_locale("C"), None);
        assert_eq!(LocaleId::from_posix_locale(""), None);
    }

    #[test]
    fn test_codepages() {
        assert_eq!(LocaleId::Japanese.ansi_codepage(), Some(932));
        assert_eq!(LocaleId::English.ansi_codepage(), Some(1252));
        assert_eq!(LocaleId::Hindi.ansi_codepage(), None);
    }

    #[test]
    fn test_serde_uses_names() {
        let yaml = serde_yaml::to_string(&LocaleId::Korean).unwrap();
        assert_eq!(yaml.trim(), "Korean");
        let parsed: LocaleId = serde_yaml::from_str("'0x411'").unwrap();
        assert_eq!(parsed, LocaleId::Japanese);
    }
}
