//! Entry point for the folio web site.

use folio_web::App;

fn main() {
    // Initialize logging
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }

    tracing::info!("Starting folio");

    dioxus::launch(App);
}
