use crate::model::{CountryRecord, RawCountry};
use crate::source::{validate_record, CountrySource, CountrySourceError};
use error_stack::{Report, ResultExt};
use log::debug;
use std::time::SystemTime;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3";

/// REST service client. One GET, one status check, one JSON parse per fetch;
/// only the first element of the match array is used.
pub struct RestCountriesSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RestCountriesSource {
    pub fn new() -> RestCountriesSource {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> RestCountriesSource {
        RestCountriesSource {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn first_match(&self, url: String) -> Result<CountryRecord, Report<CountrySourceError>> {
        let t1 = SystemTime::now();
        let response = self
            .client
            .get(&url)
            .send()
            .change_context(CountrySourceError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Report::new(CountrySourceError::Status(status.as_u16())));
        }

        let body = response
            .text()
            .change_context(CountrySourceError::Transport)?;
        let matches: Vec<RawCountry> = serde_json::from_str(&body).change_context(
            CountrySourceError::MalformedResponse("not a country match list"),
        )?;
        let raw = matches.into_iter().next().ok_or_else(|| {
            Report::new(CountrySourceError::MalformedResponse("empty match list"))
        })?;

        debug!(
            "fetch, url = {}, time = {:?}",
            url,
            SystemTime::now().duration_since(t1)
        );
        validate_record(raw)
    }
}

impl CountrySource for RestCountriesSource {
    fn fetch_by_name(&self, name: &str) -> Result<CountryRecord, Report<CountrySourceError>> {
        self.first_match(format!("{}/name/{}", self.base_url, name))
    }

    fn fetch_by_code(&self, code: &str) -> Result<CountryRecord, Report<CountrySourceError>> {
        self.first_match(format!("{}/alpha/{}", self.base_url, code))
    }
}
