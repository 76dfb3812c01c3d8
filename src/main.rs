mod api;
mod application;
mod domain;
mod logging;
mod ui;
mod utils;

use std::io;

use api::FetcherConfig;
use application::FetchPipeline;
use ui::ConsoleView;

#[tokio::main]
async fn main() {
    logging::init_logging();

    let mut view = ConsoleView::new(io::stdout());
    if let Err(e) = run(&mut view).await {
        tracing::error!(error = %e, "Console output failed");
    }
}

async fn run(view: &mut ConsoleView<io::Stdout>) -> io::Result<()> {
    view.banner()?;
    let urls = view.prompt_urls(&mut io::stdin().lock())?;

    match FetchPipeline::new(FetcherConfig::default()) {
        Ok(pipeline) => {
            let mut report_result = Ok(());
            pipeline
                .run(&urls, |url, outcome| {
                    if report_result.is_ok() {
                        report_result = view.report(url, outcome);
                    }
                })
                .await;
            report_result?;
        }
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            println!("✗ {}", e);
        }
    }

    view.closing()
}
