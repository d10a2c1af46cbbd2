mod config;
mod term_cards;

use clap::Parser;
use countries::pipeline::LookupPipeline;
use countries::render::CardSink;
use countries::source::rest_countries::{RestCountriesSource, DEFAULT_BASE_URL};
use log::info;
use std::fs::File;
use std::io::{self, BufRead, Write};

use crate::config::LookupToolConfig;
use crate::term_cards::TermCards;

const DEFAULT_COUNTRY: &str = "United States";

#[derive(Parser)]
#[command(about = "Country card lookup tool")]
struct CountryToolCommand {
    /// Path to lookup config json file.
    /// Example of json:
    /// { "base_url": "https://restcountries.com/v3", "default_country": "United States" }
    #[arg(long)]
    config: Option<String>,
}

fn main() {
    env_logger::init();

    let cmd = CountryToolCommand::parse();

    let config: LookupToolConfig = match cmd.config {
        Some(path) => serde_json::from_reader(
            File::open(path).expect("Could not open config file"),
        )
        .expect("JSON was not well-formatted"),
        None => LookupToolConfig::default(),
    };
    info!("config: {:?}", config);

    let source = RestCountriesSource::with_base_url(
        config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
    );
    let sink = TermCards;
    let pipeline = LookupPipeline::new(&source, &sink);

    let default_country = config
        .default_country
        .unwrap_or_else(|| DEFAULT_COUNTRY.to_owned());
    pipeline.run(&default_country);

    // Each submitted name starts the display over: clear, then look up
    let stdin = io::stdin();
    loop {
        print!("country> ");
        io::stdout().flush().expect("Expect flush");

        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .expect("Failed to read stdin")
            == 0
        {
            break;
        }
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        sink.clear_all();
        pipeline.run(name);
    }
}
