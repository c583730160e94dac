//! Byte encodings of generated strings.

use crate::GeneratorError;
use encoding_rs::Encoding;
use intl_core::LocaleId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output encoding for byte-producing generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeType {
    /// UTF-16 little endian
    Unicode,
    Utf8,
    /// Rejected: UTF-7 is not produced
    Utf7,
    /// Legacy ANSI codepage of the locale
    #[default]
    Current,
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodeType::Unicode => "unicode",
            CodeType::Utf8 => "utf8",
            CodeType::Utf7 => "utf7",
            CodeType::Current => "current",
        };
        f.write_str(name)
    }
}

impl FromStr for CodeType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "unicode" | "utf16" | "utf16le" => Ok(CodeType::Unicode),
            "utf8" => Ok(CodeType::Utf8),
            "utf7" => Ok(CodeType::Utf7),
            "current" | "ansi" => Ok(CodeType::Current),
            _ => Err(GeneratorError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// `encoding_rs` encoding for a Windows codepage number.
pub fn codepage_encoding(codepage: u16) -> Option<&'static Encoding> {
    let encoding = match codepage {
        874 => encoding_rs::WINDOWS_874,
        932 => encoding_rs::SHIFT_JIS,
        936 => encoding_rs::GBK,
        949 => encoding_rs::EUC_KR,
        950 => encoding_rs::BIG5,
        1250 => encoding_rs::WINDOWS_1250,
        1251 => encoding_rs::WINDOWS_1251,
        1252 => encoding_rs::WINDOWS_1252,
        1253 => encoding_rs::WINDOWS_1253,
        1254 => encoding_rs::WINDOWS_1254,
        1255 => encoding_rs::WINDOWS_1255,
        1256 => encoding_rs::WINDOWS_1256,
        _ => return None,
    };
    Some(encoding)
}

/// Legacy codepage encoding of `locale`; `None` for Unicode-only locales.
pub fn legacy_encoding(locale: LocaleId) -> Option<&'static Encoding> {
    locale.ansi_codepage().and_then(codepage_encoding)
}

/// Encode `text` as `code_type`, using `locale` for [`CodeType::Current`].
///
/// Characters missing from a legacy codepage are written as HTML numeric
/// character references.
pub fn encode(text: &str, code_type: CodeType, locale: LocaleId) -> Result<Vec<u8>, GeneratorError> {
    match code_type {
        CodeType::Unicode => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        CodeType::Utf8 => Ok(text.as_bytes().to_vec()),
        CodeType::Utf7 => Err(GeneratorError::UnsupportedEncoding(
            "UTF-7 is insecure and not produced".to_string(),
        )),
        CodeType::Current => {
            let encoding = legacy_encoding(locale).ok_or_else(|| {
                GeneratorError::UnsupportedEncoding(format!("{locale} has no ANSI codepage"))
            })?;
            let (bytes, _, _) = encoding.encode(text);
            Ok(bytes.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16le() {
        assert_eq!(
            encode("Aé", CodeType::Unicode, LocaleId::English).unwrap(),
            vec![0x41, 0x00, 0xE9, 0x00]
        );
    }

    #[test]
    fn test_utf8() {
        assert_eq!(
            encode("é", CodeType::Utf8, LocaleId::English).unwrap(),
            vec![0xC3, 0xA9]
        );
    }

    #[test]
    fn test_utf7_rejected() {
        assert!(matches!(
            encode("a", CodeType::Utf7, LocaleId::English),
            Err(GeneratorError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_current_codepage() {
        assert_eq!(
            encode("é€", CodeType::Current, LocaleId::German).unwrap(),
            vec![0xE9, 0x80]
        );
        assert_eq!(
            encode("ソ", CodeType::Current, LocaleId::Japanese).unwrap(),
            vec![0x83, 0x5C]
        );
        assert!(encode("a", CodeType::Current, LocaleId::Hindi).is_err());
    }

    #[test]
    fn test_parse_code_type() {
        assert_eq!("UTF-8".parse::<CodeType>().unwrap(), CodeType::Utf8);
        assert_eq!("utf16le".parse::<CodeType>().unwrap(), CodeType::Unicode);
        assert_eq!("ansi".parse::<CodeType>().unwrap(), CodeType::Current);
        assert!("ebcdic".parse::<CodeType>().is_err());
    }
}
