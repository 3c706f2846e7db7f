#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use club_site::{CsvSubmissionSink, EventCalendar, Settings, http_api};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    let sink = CsvSubmissionSink::new(&settings.submissions_path);
    log::info!(
        "recording join submissions to {}",
        settings.submissions_path.display()
    );
    http_api::serve(settings.http_addr, EventCalendar::club_default(), sink).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
