//! # Locale and Country Data
//!
//! Locale, text direction, and the per-country content catalog data used by
//! preferences. Direction is a pure function of the locale; the preferences
//! flow uses the country table to offer a default language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Direction
// ============================================================================

/// Horizontal text direction for a locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Locale
// ============================================================================

/// A supported application locale (BCP 47 primary subtag).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    De,
    Es,
    It,
    Nl,
    Sv,
    Da,
    No,
    Fi,
    Ga,
    Ar,
    He,
    Fa,
    Ur,
    Hi,
    Ja,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Es => "es",
            Self::It => "it",
            Self::Nl => "nl",
            Self::Sv => "sv",
            Self::Da => "da",
            Self::No => "no",
            Self::Fi => "fi",
            Self::Ga => "ga",
            Self::Ar => "ar",
            Self::He => "he",
            Self::Fa => "fa",
            Self::Ur => "ur",
            Self::Hi => "hi",
            Self::Ja => "ja",
        }
    }

    /// Text direction of this locale.
    pub fn direction(&self) -> Direction {
        match self {
            Self::Ar | Self::He | Self::Fa | Self::Ur => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "de" => Ok(Self::De),
            "es" => Ok(Self::Es),
            "it" => Ok(Self::It),
            "nl" => Ok(Self::Nl),
            "sv" => Ok(Self::Sv),
            "da" => Ok(Self::Da),
            "no" => Ok(Self::No),
            "fi" => Ok(Self::Fi),
            "ga" => Ok(Self::Ga),
            "ar" => Ok(Self::Ar),
            "he" => Ok(Self::He),
            "fa" => Ok(Self::Fa),
            "ur" => Ok(Self::Ur),
            "hi" => Ok(Self::Hi),
            "ja" => Ok(Self::Ja),
            other => Err(UnknownCode(other.to_string())),
        }
    }
}

// ============================================================================
// Country
// ============================================================================

/// A country with a content catalog (ISO 3166-1 alpha-2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    AE,
    US,
    DE,
    GB,
    CA,
    FR,
    BE,
    AT,
    AU,
    SE,
    IE,
    FI,
    NL,
    IL,
    NO,
    DK,
    CH,
    IT,
    ES,
    JP,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AE => "AE",
            Self::US => "US",
            Self::DE => "DE",
            Self::GB => "GB",
            Self::CA => "CA",
            Self::FR => "FR",
            Self::BE => "BE",
            Self::AT => "AT",
            Self::AU => "AU",
            Self::SE => "SE",
            Self::IE => "IE",
            Self::FI => "FI",
            Self::NL => "NL",
            Self::IL => "IL",
            Self::NO => "NO",
            Self::DK => "DK",
            Self::CH => "CH",
            Self::IT => "IT",
            Self::ES => "ES",
            Self::JP => "JP",
        }
    }

    /// The default content language for this country.
    pub fn default_language(&self) -> Locale {
        match self {
            Self::AE => Locale::Ar,
            Self::US | Self::GB | Self::CA | Self::AU | Self::IE => Locale::En,
            Self::DE | Self::AT | Self::CH => Locale::De,
            Self::FR | Self::BE => Locale::Fr,
            Self::SE => Locale::Sv,
            Self::FI => Locale::Fi,
            Self::NL => Locale::Nl,
            Self::IL => Locale::He,
            Self::NO => Locale::No,
            Self::DK => Locale::Da,
            Self::IT => Locale::It,
            Self::ES => Locale::Es,
            Self::JP => Locale::Ja,
        }
    }

    /// Languages with catalog coverage in this country, default first.
    pub fn languages(&self) -> &'static [Locale] {
        match self {
            Self::AE => &[Locale::Ar, Locale::Fa, Locale::Ur, Locale::Hi],
            Self::US | Self::GB | Self::AU => &[Locale::En],
            Self::DE | Self::AT => &[Locale::De],
            Self::CA => &[Locale::En, Locale::Fr],
            Self::FR => &[Locale::Fr],
            Self::BE => &[Locale::Fr, Locale::Nl, Locale::De],
            Self::SE => &[Locale::Sv],
            Self::IE => &[Locale::En, Locale::Ga],
            Self::FI => &[Locale::Fi, Locale::Sv],
            Self::NL => &[Locale::Nl],
            Self::IL => &[Locale::He, Locale::Ar],
            Self::NO => &[Locale::No],
            Self::DK => &[Locale::Da],
            Self::CH => &[Locale::De, Locale::Fr, Locale::It],
            Self::IT => &[Locale::It],
            Self::ES => &[Locale::Es],
            Self::JP => &[Locale::Ja],
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AE" => Ok(Self::AE),
            "US" => Ok(Self::US),
            "DE" => Ok(Self::DE),
            "GB" => Ok(Self::GB),
            "CA" => Ok(Self::CA),
            "FR" => Ok(Self::FR),
            "BE" => Ok(Self::BE),
            "AT" => Ok(Self::AT),
            "AU" => Ok(Self::AU),
            "SE" => Ok(Self::SE),
            "IE" => Ok(Self::IE),
            "FI" => Ok(Self::FI),
            "NL" => Ok(Self::NL),
            "IL" => Ok(Self::IL),
            "NO" => Ok(Self::NO),
            "DK" => Ok(Self::DK),
            "CH" => Ok(Self::CH),
            "IT" => Ok(Self::IT),
            "ES" => Ok(Self::ES),
            "JP" => Ok(Self::JP),
            other => Err(UnknownCode(other.to_string())),
        }
    }
}

/// Error for an unrecognized locale or country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale or country code: {0}")]
pub struct UnknownCode(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_pure_function_of_locale() {
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
        assert_eq!(Locale::He.direction(), Direction::Rtl);
        assert_eq!(Locale::Fa.direction(), Direction::Rtl);
        assert_eq!(Locale::Ur.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Locale::Ja.direction(), Direction::Ltr);
    }

    #[test]
    fn test_locale_round_trip() {
        for locale in [Locale::En, Locale::Ar, Locale::Ja] {
            assert_eq!(locale.as_str().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn test_country_default_language_is_supported() {
        for country in [
            Country::AE,
            Country::CA,
            Country::BE,
            Country::IL,
            Country::CH,
        ] {
            assert!(country.languages().contains(&country.default_language()));
        }
    }

    #[test]
    fn test_country_parse_is_case_insensitive() {
        assert_eq!("ca".parse::<Country>(), Ok(Country::CA));
        assert_eq!("CA".parse::<Country>(), Ok(Country::CA));
    }

    #[test]
    fn test_unknown_code() {
        assert!("xx".parse::<Locale>().is_err());
        assert!("ZZ".parse::<Country>().is_err());
    }

    #[test]
    fn test_serde_lowercase_locale() {
        let json = serde_json::to_string(&Locale::Fr).unwrap();
        assert_eq!(json, "\"fr\"");
    }
}
