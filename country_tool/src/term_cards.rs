use countries::model::CountryRecord;
use countries::render::{format_area_mkm2, CardSink, CardStyle};

/// Prints cards as text blocks. Neighbor cards are indented under the
/// primary one.
pub struct TermCards;

impl TermCards {
    fn indent(style: CardStyle) -> &'static str {
        match style {
            CardStyle::Primary => "",
            CardStyle::Neighbor => "    ",
        }
    }
}

impl CardSink for TermCards {
    fn render_country(&self, record: &CountryRecord, style: CardStyle) {
        let pad = Self::indent(style);
        println!("{}{} ({})", pad, record.common_name, record.region);
        println!("{}  area:     {} million km²", pad, format_area_mkm2(record.area_km2));
        println!("{}  language: {}", pad, record.first_language().unwrap_or("unknown"));
        println!("{}  currency: {}", pad, record.first_currency_name().unwrap_or("unknown"));
        println!("{}  flag:     {}", pad, record.flag_image_url);
        println!();
    }

    fn render_error(&self, message: &str) {
        println!("{}", message);
        println!();
    }

    fn clear_all(&self) {
        // ANSI erase display + cursor home
        print!("\x1b[2J\x1b[1;1H");
    }
}
