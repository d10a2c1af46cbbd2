//! Country record types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One element of the match array returned by the REST service. Optional
/// fields stay optional here; `source::validate_record` decides which ones a
/// usable record requires.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountry {
    pub name: RawCountryName,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub flags: Vec<String>,
    pub languages: Option<BTreeMap<String, String>>,
    pub currencies: Option<BTreeMap<String, RawCurrency>>,
    pub borders: Option<Vec<String>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCurrency {
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// Validated country profile. Read-only once built, dropped after rendering.
/// `languages` and `currencies` are guaranteed non-empty.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub common_name: String,
    pub region: String,
    pub area_km2: f64,
    pub flag_image_url: String,
    pub languages: BTreeMap<String, String>,
    pub currencies: BTreeMap<String, RawCurrency>,
    pub border_codes: Vec<String>,
}

impl CountryRecord {
    /// First language in key order. None only for hand-built records that
    /// skipped validation.
    pub fn first_language(&self) -> Option<&str> {
        self.languages.values().next().map(String::as_str)
    }

    pub fn first_currency_name(&self) -> Option<&str> {
        self.currencies.values().next().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::RawCountry;

    const ITALY_JSON: &str = r#"{
        "name": { "common": "Italy", "official": "Italian Republic" },
        "region": "Europe",
        "area": 301336.0,
        "flags": ["https://flagcdn.com/it.svg", "https://flagcdn.com/w320/it.png"],
        "languages": { "ita": "Italian" },
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
        "borders": ["AUT", "CHE", "FRA", "SMR", "SVN", "VAT"]
    }"#;

    #[test]
    fn test_parse_raw_country() {
        let raw: RawCountry = serde_json::from_str(ITALY_JSON).unwrap();

        assert_eq!(raw.name.common, "Italy");
        assert_eq!(raw.region, "Europe");
        assert_eq!(raw.area, 301336.0);
        assert_eq!(raw.flags[0], "https://flagcdn.com/it.svg");
        assert_eq!(
            raw.languages.as_ref().unwrap().get("ita").map(String::as_str),
            Some("Italian")
        );
        assert_eq!(raw.currencies.as_ref().unwrap()["EUR"].name, "Euro");
        assert_eq!(raw.borders.as_ref().unwrap().len(), 6);
    }

    #[test]
    fn test_parse_raw_country_sparse() {
        // Fields the service may omit stay optional at the wire level
        let raw: RawCountry =
            serde_json::from_str(r#"{ "name": { "common": "Atlantis" } }"#).unwrap();

        assert_eq!(raw.name.common, "Atlantis");
        assert_eq!(raw.region, "");
        assert_eq!(raw.area, 0.0);
        assert!(raw.flags.is_empty());
        assert!(raw.languages.is_none());
        assert!(raw.currencies.is_none());
        assert!(raw.borders.is_none());
    }
}
