//! Text encodings tried when loading documents.

use std::fmt;
use std::str::FromStr;

/// Candidate order used by [`crate::input::load`].
pub const DEFAULT_ENCODINGS: [Encoding; 4] = [
    Encoding::Utf8,
    Encoding::Latin1,
    Encoding::Windows1252,
    Encoding::Ascii,
];

/// A text encoding the loader can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value
    Latin1,
    /// Latin-1 with printable characters in 0x80-0x9F; five bytes are undefined
    Windows1252,
    /// 7-bit only
    Ascii,
}

/// Windows-1252 code points for bytes 0x80..=0x9F, 0 where undefined.
const WINDOWS_1252_HIGH: [u32; 32] = [
    0x20AC, 0, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6, 0x2030, 0x0160, 0x2039,
    0x0152, 0, 0x017D, 0, 0, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, 0x02DC,
    0x2122, 0x0161, 0x203A, 0x0153, 0, 0x017E, 0x0178,
];

impl Encoding {
    /// Canonical lowercase name, as accepted in the config file.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
            Encoding::Windows1252 => "windows-1252",
            Encoding::Ascii => "ascii",
        }
    }

    /// Decode `bytes` strictly. Returns `None` on the first invalid byte.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
            Encoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Encoding::Windows1252 => bytes.iter().map(|&b| decode_windows_1252(b)).collect(),
            Encoding::Ascii => bytes
                .iter()
                .map(|&b| b.is_ascii().then_some(char::from(b)))
                .collect(),
        }
    }
}

fn decode_windows_1252(byte: u8) -> Option<char> {
    match byte {
        0x80..=0x9F => match WINDOWS_1252_HIGH[usize::from(byte - 0x80)] {
            0 => None,
            code => char::from_u32(code),
        },
        _ => Some(char::from(byte)),
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(Encoding::Latin1),
            "windows-1252" | "cp1252" => Ok(Encoding::Windows1252),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            other => Err(format!("unknown encoding: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_strict() {
        assert_eq!(Encoding::Utf8.decode("año".as_bytes()), Some("año".to_string()));
        assert_eq!(Encoding::Utf8.decode(&[0x61, 0xF1, 0x6F]), None);
    }

    #[test]
    fn test_latin1_never_fails() {
        assert_eq!(Encoding::Latin1.decode(&[0x61, 0xF1, 0x6F]), Some("año".to_string()));
        assert_eq!(Encoding::Latin1.decode(&[0x80]), Some("\u{80}".to_string()));
    }

    #[test]
    fn test_windows_1252_high_range() {
        assert_eq!(
            Encoding::Windows1252.decode(&[0x80, 0x93, 0x94]),
            Some("€\u{201C}\u{201D}".to_string())
        );
        assert_eq!(Encoding::Windows1252.decode(&[0x81]), None);
        assert_eq!(Encoding::Windows1252.decode(&[0xE9]), Some("é".to_string()));
    }

    #[test]
    fn test_ascii_rejects_high_bytes() {
        assert_eq!(Encoding::Ascii.decode(b"plain"), Some("plain".to_string()));
        assert_eq!(Encoding::Ascii.decode(&[0xE9]), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("UTF-8".parse::<Encoding>(), Ok(Encoding::Utf8));
        assert_eq!("latin_1".parse::<Encoding>(), Ok(Encoding::Latin1));
        assert_eq!("cp1252".parse::<Encoding>(), Ok(Encoding::Windows1252));
        assert_eq!("ascii".parse::<Encoding>(), Ok(Encoding::Ascii));
        assert!("ebcdic".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for encoding in DEFAULT_ENCODINGS {
            assert_eq!(encoding.name().parse::<Encoding>(), Ok(encoding));
        }
    }
}
