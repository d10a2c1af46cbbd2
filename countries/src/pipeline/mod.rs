//! Lookup pipeline: primary country first, then up to two of its border
//! countries, strictly in that order.

use crate::render::{CardSink, CardStyle};
use crate::source::{CountrySource, CountrySourceError};
use error_stack::Report;
use log::{debug, error};

pub struct LookupPipeline<'a> {
    source: &'a dyn CountrySource,
    sink: &'a dyn CardSink,
}

impl<'a> LookupPipeline<'a> {
    pub fn new(source: &'a dyn CountrySource, sink: &'a dyn CardSink) -> LookupPipeline<'a> {
        LookupPipeline { source, sink }
    }

    /// One lookup invocation. Every effect goes through the sink; a failed
    /// step ends the invocation with a single error render, cards rendered
    /// by earlier steps stay in place.
    pub fn run(&self, request: &str) {
        debug!("lookup, request = {}", request);
        if let Err(report) = self.run_steps(request) {
            error!("lookup failed, request = {}, error = {:?}", request, report);
            self.sink.render_error(&format!(
                "Something went wrong ({})",
                report.current_context()
            ));
        }
    }

    fn run_steps(&self, request: &str) -> Result<(), Report<CountrySourceError>> {
        let primary = self.source.fetch_by_name(request)?;
        self.sink.render_country(&primary, CardStyle::Primary);

        // Only the first two border codes are ever consulted; countries with
        // fewer land borders simply render fewer neighbor cards.
        for code in primary.border_codes.iter().take(2) {
            let neighbor = self.source.fetch_by_code(code)?;
            self.sink.render_country(&neighbor, CardStyle::Neighbor);
        }
        Ok(())
    }
}
