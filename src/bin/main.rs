//! Prints current top headlines, or search results when a query argument
//! is given. Settings come from a `newswire` config file or `NEWSWIRE_*`
//! environment variables (`api_endpoint`, `api_key`).

use newswire::api::Api;
use newswire::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("newswire").required(false))
        .add_source(config::Environment::with_prefix("NEWSWIRE"))
        .build()?;

    let api = Api::new(Config::new(
        settings.get_string("api_endpoint")?,
        settings.get_string("api_key")?,
    ))?;

    let query: Vec<String> = std::env::args().skip(1).collect();
    let response = match query.first() {
        Some(q) => api.search(q, api.no_params()).await?,
        None => api.top_headlines(api.no_params()).await?,
    };

    if response.is_empty() {
        println!("No articles found");
        return Ok(());
    }
    for article in &response.articles {
        println!("{}", article.title);
        println!("  {}", article.url);
        if !article.description.is_empty() {
            println!("  {}", article.description);
        }
    }
    Ok(())
}
