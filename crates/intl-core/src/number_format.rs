//! Per-locale numeric formatting descriptors.

use crate::locale::LocaleId;
use serde::{Deserialize, Serialize};

const NBSP: &str = "\u{00A0}";

/// Separators, grouping and currency conventions for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub currency_decimal_digits: u32,
    pub currency_decimal_separator: String,
    pub currency_group_separator: String,
    pub currency_group_sizes: Vec<u32>,
    pub currency_symbol: String,
    pub number_decimal_digits: u32,
    pub number_decimal_separator: String,
    pub number_group_separator: String,
    pub number_group_sizes: Vec<u32>,
}

impl NumberFormat {
    fn uniform(
        currency_digits: u32,
        decimal: &str,
        group: &str,
        sizes: &[u32],
        symbol: &str,
    ) -> Self {
        Self {
            currency_decimal_digits: currency_digits,
            currency_decimal_separator: decimal.to_string(),
            currency_group_separator: group.to_string(),
            currency_group_sizes: sizes.to_vec(),
            currency_symbol: symbol.to_string(),
            number_decimal_digits: 2,
            number_decimal_separator: decimal.to_string(),
            number_group_separator: group.to_string(),
            number_group_sizes: sizes.to_vec(),
        }
    }

    /// Formatting conventions of `locale`.
    pub fn for_locale(locale: LocaleId) -> Self {
        match locale {
            LocaleId::English => Self::uniform(2, ".", ",", &[3], "$"),
            LocaleId::Japanese => Self::uniform(0, ".", ",", &[3], "¥"),
            LocaleId::Korean => Self::uniform(0, ".", ",", &[3], "₩"),
            LocaleId::ChineseTraditional => Self::uniform(2, ".", ",", &[3], "NT$"),
            LocaleId::ChineseSimplified => Self::uniform(2, ".", ",", &[3], "¥"),
            LocaleId::ChineseHongKong => Self::uniform(2, ".", ",", &[3], "HK$"),
            LocaleId::Hindi => Self::uniform(2, ".", ",", &[3, 2], "₹"),
            LocaleId::Arabic => Self::uniform(2, ".", ",", &[3], "ر.س.\u{200F}"),
            LocaleId::Hebrew => Self::uniform(2, ".", ",", &[3], "₪"),
            LocaleId::Thai => Self::uniform(2, ".", ",", &[3], "฿"),
            LocaleId::German
            | LocaleId::Spanish
            | LocaleId::Italian
            | LocaleId::Dutch
            | LocaleId::Greek => Self::uniform(2, ",", ".", &[3], "€"),
            LocaleId::Turkish => Self::uniform(2, ",", ".", &[3], "₺"),
            LocaleId::Brazilian => Self::uniform(2, ",", ".", &[3], "R$"),
            LocaleId::Danish => Self::uniform(2, ",", ".", &[3], "kr."),
            LocaleId::French | LocaleId::Finnish | LocaleId::Portuguese => {
                Self::uniform(2, ",", NBSP, &[3], "€")
            }
            LocaleId::Russian => Self::uniform(2, ",", NBSP, &[3], "₽"),
            LocaleId::Swedish | LocaleId::NorwegianNynorsk | LocaleId::NorwegianBokmal => {
                Self::uniform(2, ",", NBSP, &[3], "kr")
            }
            LocaleId::Czech => Self::uniform(2, ",", NBSP, &[3], "Kč"),
            LocaleId::Hungarian => Self::uniform(2, ",", NBSP, &[3], "Ft"),
            LocaleId::Polish => Self::uniform(2, ",", NBSP, &[3], "zł"),
        }
    }
}
