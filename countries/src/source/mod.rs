pub mod rest_countries;

use crate::model::{CountryRecord, RawCountry};
use error_stack::Report;
use thiserror::Error;

/// A backend that can resolve a country by free-text name or by the alpha
/// codes found in another record's border list.
pub trait CountrySource: Send + Sync + 'static {
    fn fetch_by_name(&self, name: &str) -> Result<CountryRecord, Report<CountrySourceError>>;
    fn fetch_by_code(&self, code: &str) -> Result<CountryRecord, Report<CountrySourceError>>;
}

#[derive(Debug, Error, Clone)]
pub enum CountrySourceError {
    #[error("could not reach the country service")]
    Transport,
    #[error("country service responded with status {0}")]
    Status(u16),
    #[error("malformed country data: {0}")]
    MalformedResponse(&'static str),
}

/// Promote a wire object to a usable record. `languages` and `currencies`
/// are read downstream, so their absence is a malformed response; a missing
/// border list is a country without land borders.
pub fn validate_record(raw: RawCountry) -> Result<CountryRecord, Report<CountrySourceError>> {
    let languages = raw
        .languages
        .filter(|m| !m.is_empty())
        .ok_or_else(|| Report::new(CountrySourceError::MalformedResponse("missing languages")))?;
    let currencies = raw
        .currencies
        .filter(|m| !m.is_empty())
        .ok_or_else(|| Report::new(CountrySourceError::MalformedResponse("missing currencies")))?;

    Ok(CountryRecord {
        common_name: raw.name.common,
        region: raw.region,
        area_km2: raw.area,
        flag_image_url: raw.flags.into_iter().next().unwrap_or_default(),
        languages,
        currencies,
        border_codes: raw.borders.unwrap_or_default(),
    })
}
