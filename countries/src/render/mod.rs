pub mod html;

use crate::model::CountryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Primary,
    Neighbor,
}

/// Display area a pipeline writes into. Cards only ever accumulate; the
/// trigger surface decides when to call `clear_all`, never the pipeline.
pub trait CardSink: Send + Sync + 'static {
    /// Append one card. Must not disturb cards already appended.
    fn render_country(&self, record: &CountryRecord, style: CardStyle);
    /// Append a visible error indicator.
    fn render_error(&self, message: &str);
    /// Drop every card and error rendered so far.
    fn clear_all(&self);
}

/// Area in millions of km², one decimal, as shown on a card.
pub fn format_area_mkm2(area_km2: f64) -> String {
    format!("{:.1}", area_km2 / 1_000_000.0)
}
