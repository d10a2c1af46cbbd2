use countries::pipeline::LookupPipeline;
use countries::render::html::HtmlCards;
use countries::source::CountrySource;
use countries::source::rest_countries::RestCountriesSource;
use error_stack::{FutureExt, Report, ResultExt};
use poem::endpoint::StaticFileEndpoint;
use poem::error::ResponseError;
use poem::http::StatusCode;
use poem::{
    EndpointExt, Result, Route, Server, get, handler,
    listener::TcpListener,
    middleware::AddData,
    web::{Data, Html, Path},
};
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::spawn_blocking;

#[derive(Error, Debug, Clone)]
enum CardServerError {
    #[error("Internal")]
    Internal,
}

trait DetachReport<T, E> {
    fn detach_report(self) -> Result<T, ReportResponseError<E>>;
}

impl<T, E> DetachReport<T, E> for Result<T, Report<E>> {
    fn detach_report(self) -> Result<T, ReportResponseError<E>> {
        self.map_err(|report| ReportResponseError(report))
    }
}

#[derive(Debug)]
struct ReportResponseError<E>(Report<E>);

impl Display for ReportResponseError<CardServerError> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.0))
    }
}

impl std::error::Error for ReportResponseError<CardServerError> {}

impl ResponseError for ReportResponseError<CardServerError> {
    fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Clone)]
struct AppState {
    source: Arc<dyn CountrySource>,
}

#[handler]
async fn get_country(
    Path(name): Path<String>,
    state: Data<&Arc<AppState>>,
) -> Result<Html<String>> {
    println!("looking up {}", name);
    let source = state.source.clone();
    let page = spawn_blocking(move || {
        // one sink per request, so every page starts from a cleared display
        let sink = HtmlCards::new();
        LookupPipeline::new(source.as_ref(), &sink).run(&name);
        sink.page(&name)
    })
    .change_context(CardServerError::Internal)
    .await
    .detach_report()?;
    Ok(Html(page))
}

#[tokio::main]
async fn main() -> Result<(), Report<CardServerError>> {
    println!("RUN CARDS SERVER");
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "poem=debug");
        }
    }
    tracing_subscriber::fmt::init();

    let state = Arc::new(AppState {
        source: Arc::new(RestCountriesSource::new()),
    });

    let app = Route::new()
        .at("/country/:name", get(get_country))
        .at("/cards.css", StaticFileEndpoint::new("cards.css"))
        .with(AddData::new(state));

    Server::new(TcpListener::bind("0.0.0.0:3000"))
        .name("cards-server")
        .run(app)
        .await
        .change_context(CardServerError::Internal)
}
