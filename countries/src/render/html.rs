use crate::model::CountryRecord;
use crate::render::{format_area_mkm2, CardSink, CardStyle};
use std::sync::Mutex;

/// Sink that accumulates card markup for one page. Each page build gets its
/// own instance, so a fresh sink is the cleared state.
pub struct HtmlCards {
    cards: Mutex<Vec<String>>,
}

impl HtmlCards {
    pub fn new() -> HtmlCards {
        HtmlCards {
            cards: Mutex::new(Vec::new()),
        }
    }

    /// Markup of the display area only.
    pub fn body(&self) -> String {
        self.cards.lock().expect("Expect lock").join("\n")
    }

    /// Full document around the display area, linking the served stylesheet.
    pub fn page(&self, title: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n\
             <title>{title}</title>\n\
             <link rel=\"stylesheet\" href=\"/cards.css\" />\n\
             </head>\n<body>\n<main class=\"countries\">\n{}\n</main>\n</body>\n</html>\n",
            self.body()
        )
    }
}

impl CardSink for HtmlCards {
    fn render_country(&self, record: &CountryRecord, style: CardStyle) {
        let class = match style {
            CardStyle::Primary => "country",
            CardStyle::Neighbor => "country neighbour",
        };
        let card = format!(
            "<article class=\"{class}\">\n\
             <img class=\"country__img\" src=\"{flag}\" />\n\
             <div class=\"country__data\">\n\
             <h3 class=\"country__name\">{name}</h3>\n\
             <h4 class=\"country__region\">{region}</h4>\n\
             <p class=\"country__row\">{area} million km²</p>\n\
             <p class=\"country__row\">{language}</p>\n\
             <p class=\"country__row\">{currency}</p>\n\
             </div>\n\
             </article>",
            flag = record.flag_image_url,
            name = record.common_name,
            region = record.region,
            area = format_area_mkm2(record.area_km2),
            language = record.first_language().unwrap_or("unknown"),
            currency = record.first_currency_name().unwrap_or("unknown"),
        );
        self.cards.lock().expect("Expect lock").push(card);
    }

    fn render_error(&self, message: &str) {
        self.cards
            .lock()
            .expect("Expect lock")
            .push(format!("<p class=\"country__error\">{message}</p>"));
    }

    fn clear_all(&self) {
        self.cards.lock().expect("Expect lock").clear();
    }
}

#[cfg(test)]
mod test {
    use super::HtmlCards;
    use crate::model::{CountryRecord, RawCurrency};
    use crate::render::{CardSink, CardStyle};

    fn record() -> CountryRecord {
        CountryRecord {
            common_name: "Italy".to_owned(),
            region: "Europe".to_owned(),
            area_km2: 301_336.0,
            flag_image_url: "https://flagcdn.com/it.svg".to_owned(),
            languages: [("ita".to_owned(), "Italian".to_owned())].into_iter().collect(),
            currencies: [(
                "EUR".to_owned(),
                RawCurrency {
                    name: "Euro".to_owned(),
                    symbol: "€".to_owned(),
                },
            )]
            .into_iter()
            .collect(),
            border_codes: vec![],
        }
    }

    #[test]
    fn test_card_markup() {
        let sink = HtmlCards::new();
        sink.render_country(&record(), CardStyle::Primary);

        let body = sink.body();
        assert!(body.contains("class=\"country\""));
        assert!(body.contains("Italy"));
        assert!(body.contains("Europe"));
        assert!(body.contains("0.3 million km²"));
        assert!(body.contains("Italian"));
        assert!(body.contains("Euro"));
        assert!(body.contains("https://flagcdn.com/it.svg"));
        assert!(!body.contains("neighbour"));
    }

    #[test]
    fn test_neighbor_card_class() {
        let sink = HtmlCards::new();
        sink.render_country(&record(), CardStyle::Neighbor);

        assert!(sink.body().contains("class=\"country neighbour\""));
    }

    #[test]
    fn test_cards_accumulate_and_clear() {
        let sink = HtmlCards::new();
        sink.render_country(&record(), CardStyle::Primary);
        sink.render_error("Something went wrong (boom)");

        let body = sink.body();
        assert!(body.contains("country__name"), "Expect card kept");
        assert!(body.contains("Something went wrong (boom)"));

        sink.clear_all();
        assert_eq!(sink.body(), "");
    }

    #[test]
    fn test_page_wraps_body() {
        let sink = HtmlCards::new();
        sink.render_country(&record(), CardStyle::Primary);

        let page = sink.page("Italy");
        assert!(page.contains("<title>Italy</title>"));
        assert!(page.contains("cards.css"));
        assert!(page.contains("class=\"countries\""));
        assert!(page.contains("country__name"));
    }
}
