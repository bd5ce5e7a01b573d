//! # Bilingual Labels
//!
//! Flat key → string tables for English and Nepali. Unit tags double as
//! label keys (`AreaUnit::key()`), so the engine never handles display text.
//! Lookups that miss fall back to the key itself.
//!
//! ## Example
//!
//! ```rust
//! use land_core::i18n::{translate, Language};
//!
//! assert_eq!(translate(Language::English, "ropani"), "Ropani");
//! assert_eq!(translate(Language::Nepali, "ropani"), "रोपनी");
//! assert_eq!(translate(Language::Nepali, "noSuchKey"), "noSuchKey");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::LandError;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "np")]
    Nepali,
}

impl Language {
    /// Short code stored in settings ("en" / "np")
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Nepali => "np",
        }
    }

    /// The other language
    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Nepali,
            Language::Nepali => Language::English,
        }
    }

    /// Look up a label in this language
    pub fn t<'a>(self, key: &'a str) -> &'a str {
        translate(self, key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "np" | "ne" | "nepali" | "नेपाली" => Ok(Language::Nepali),
            other => Err(LandError::invalid_input("language", other, "Expected 'en' or 'np'")),
        }
    }
}

/// Translate `key`, falling back to the key when no label exists.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    let table = match language {
        Language::English => &*ENGLISH,
        Language::Nepali => &*NEPALI,
    };
    table.get(key).copied().unwrap_or(key)
}

static ENGLISH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("appName", "Nepali Land Calculator"),
        ("calculator", "Calculator"),
        ("converter", "Converter"),
        ("calculatorTitle", "Land Calculator"),
        ("calculatorDescription", "Calculate land area from length and breadth measurements"),
        ("converterTitle", "Land Converter"),
        ("converterDescription", "Convert between different Nepali land measurement units"),
        ("length", "Length"),
        ("breadth", "Breadth"),
        ("area", "Area"),
        ("unit", "Unit"),
        ("value", "Value"),
        ("from", "From"),
        ("to", "To"),
        ("result", "Result"),
        ("calculate", "Calculate"),
        ("convert", "Convert"),
        ("ropani", "Ropani"),
        ("aana", "Aana"),
        ("paisa", "Paisa"),
        ("daam", "Daam"),
        ("bigha", "Bigha"),
        ("katha", "Katha"),
        ("dhur", "Dhur"),
        ("squareMeter", "Square Meter"),
        ("squareFeet", "Square Feet"),
        ("feet", "Feet"),
        ("meter", "Meter"),
        ("enterValue", "Enter value"),
        ("errorInvalidInput", "Please enter valid numbers"),
        ("errorRequired", "This field is required"),
        ("errorUnknownUnit", "Unknown unit"),
        ("errorStorage", "Could not read or write saved data"),
        ("history", "History"),
        ("dimensions", "Dimensions"),
        ("outputUnit", "Output Unit"),
        ("savedCalculations", "Saved Calculations"),
        ("savedConversions", "Saved Conversions"),
        ("clearHistory", "Clear History"),
        ("historyCleared", "History cleared"),
        ("noCalculations", "No calculations yet"),
        ("noConversions", "No conversions yet"),
        ("accuracyNote", "Results are approximate"),
        ("equivalentTo", "Equivalent to"),
        ("ropaniSystem", "Ropani System"),
        ("bighaSystem", "Bigha System"),
        ("conversionDetails", "Conversion Details"),
        ("convertedTo", "Converted to"),
        ("calculation", "Calculation"),
        ("conversion", "Conversion"),
        ("language", "Language"),
        ("languageChanged", "Language set to English"),
        ("quit", "Quit"),
    ])
});

static NEPALI: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("appName", "नेपाली जग्गा क्याल्कुलेटर"),
        ("calculator", "क्याल्कुलेटर"),
        ("converter", "कन्भर्टर"),
        ("calculatorTitle", "जग्गा क्याल्कुलेटर"),
        ("calculatorDescription", "लम्बाई र चौडाई नापबाट जग्गाको क्षेत्रफल गणना गर्नुहोस्"),
        ("converterTitle", "जग्गा कन्भर्टर"),
        ("converterDescription", "विभिन्न नेपाली जग्गा नाप एकाइहरू बीच रूपान्तरण गर्नुहोस्"),
        ("length", "लम्बाई"),
        ("breadth", "चौडाई"),
        ("area", "क्षेत्रफल"),
        ("unit", "एकाइ"),
        ("value", "मान"),
        ("from", "बाट"),
        ("to", "मा"),
        ("result", "परिणाम"),
        ("calculate", "गणना गर्नुहोस्"),
        ("convert", "रूपान्तरण"),
        ("ropani", "रोपनी"),
        ("aana", "आना"),
        ("paisa", "पैसा"),
        ("daam", "दाम"),
        ("bigha", "बिघा"),
        ("katha", "कट्ठा"),
        ("dhur", "धुर"),
        ("squareMeter", "वर्ग मिटर"),
        ("squareFeet", "वर्ग फिट"),
        ("feet", "फिट"),
        ("meter", "मिटर"),
        ("enterValue", "मान प्रविष्ट गर्नुहोस्"),
        ("errorInvalidInput", "कृपया मान्य संख्याहरू प्रविष्ट गर्नुहोस्"),
        ("errorRequired", "यो फिल्ड आवश्यक छ"),
        ("errorUnknownUnit", "अज्ञात एकाइ"),
        ("errorStorage", "सुरक्षित डाटा पढ्न वा लेख्न सकिएन"),
        ("history", "इतिहास"),
        ("dimensions", "आयामहरू"),
        ("outputUnit", "आउटपुट एकाइ"),
        ("savedCalculations", "सुरक्षित गणनाहरू"),
        ("savedConversions", "सुरक्षित रूपान्तरणहरू"),
        ("clearHistory", "इतिहास खाली गर्नुहोस्"),
        ("historyCleared", "इतिहास खाली गरियो"),
        ("noCalculations", "अहिलेसम्म कुनै गणनाहरू छैनन्"),
        ("noConversions", "अहिलेसम्म कुनै रूपान्तरणहरू छैनन्"),
        ("accuracyNote", "परिणामहरू अनुमानित छन्"),
        ("equivalentTo", "बराबर"),
        ("ropaniSystem", "रोपनी प्रणाली"),
        ("bighaSystem", "बिघा प्रणाली"),
        ("conversionDetails", "रूपान्तरण विवरण"),
        ("convertedTo", "मा रूपान्तरित"),
        ("calculation", "गणना"),
        ("conversion", "रूपान्तरण"),
        ("language", "भाषा"),
        ("languageChanged", "भाषा नेपालीमा परिवर्तन गरियो"),
        ("quit", "बाहिर निस्कनुहोस्"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AreaUnit, LinearUnit, UnitSystem};

    #[test]
    fn test_unit_labels() {
        assert_eq!(translate(Language::English, AreaUnit::SquareFeet.key()), "Square Feet");
        assert_eq!(translate(Language::Nepali, AreaUnit::Katha.key()), "कट्ठा");
        assert_eq!(translate(Language::Nepali, LinearUnit::Meter.key()), "मिटर");
        assert_eq!(translate(Language::English, UnitSystem::Bigha.key()), "Bigha System");
    }

    #[test]
    fn test_every_unit_has_a_label() {
        for language in [Language::English, Language::Nepali] {
            for unit in AreaUnit::ALL {
                assert_ne!(translate(language, unit.key()), unit.key());
            }
        }
    }

    #[test]
    fn test_tables_cover_same_keys() {
        for key in ENGLISH.keys() {
            assert!(NEPALI.contains_key(key), "missing Nepali label for {}", key);
        }
        for key in NEPALI.keys() {
            assert!(ENGLISH.contains_key(key), "missing English label for {}", key);
        }
    }

    #[test]
    fn test_fallback_to_key() {
        assert_eq!(translate(Language::English, "heroTitle"), "heroTitle");
        assert_eq!(Language::Nepali.t("nothing"), "nothing");
    }

    #[test]
    fn test_menu_labels() {
        for key in ["calculatorTitle", "converterTitle", "history", "language", "quit"] {
            assert_ne!(Language::English.t(key), key);
            assert_ne!(Language::Nepali.t(key), key);
        }
        assert_eq!(Language::English.t("quit"), "Quit");
    }

    #[test]
    fn test_language_toggle_and_parse() {
        assert_eq!(Language::English.toggle(), Language::Nepali);
        assert_eq!(Language::Nepali.toggle(), Language::English);
        assert_eq!("NP".parse::<Language>().unwrap(), Language::Nepali);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serialization() {
        assert_eq!(serde_json::to_string(&Language::Nepali).unwrap(), "\"np\"");
        let roundtrip: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(roundtrip, Language::English);
    }
}
