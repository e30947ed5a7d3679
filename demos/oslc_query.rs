//! Query requirements of one project area
//!
//! Connects to an RM application, selects a project area by title and lists the first page
//! of requirements with their identifiers and titles.
//!
//! Run with: OSLC_SERVER_URI=https://host/rm OSLC_USERNAME=... OSLC_PASSWORD=... \
//!           OSLC_PROJECT_AREA="JKE Banking (Requirements Management)" cargo run --example oslc_query

use oslc_client::protocol::namespaces::{prefix_declarations, OSLC_RM, OSLC_RM10, RDFS};
use oslc_client::{ClientConfig, OslcServer, QueryOptions};
use std::env;

fn var(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    env::var(name).map_err(|_| format!("{} is not set", name).into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("OSLC Query Example");
    println!("==================\n");

    let config = ClientConfig::with_credentials(var("OSLC_USERNAME")?, var("OSLC_PASSWORD")?);
    let mut server = OslcServer::new(var("OSLC_SERVER_URI")?, config)?;

    server.connect(&OSLC_RM10.term("rmServiceProviders")).await?;
    for provider in server.get_service_providers_list()? {
        println!("  {} -> {}", provider.service_provider_name, provider.services_url);
    }

    server.use_service_provider(&var("OSLC_PROJECT_AREA")?).await?;
    let from = server.query_base(&OSLC_RM.term("Requirement"))?;

    let options = QueryOptions::new(from, RDFS.term("member"))
        .with_prefix(prefix_declarations(&["dcterms"]))
        .with_select("dcterms:identifier,dcterms:title")
        .paginate(10)
        .with_total_count();
    let results = server.query(&options).await?;

    println!("\nTotal: {}", results.total_count.unwrap_or_default());
    for resource in &results.resources {
        let id = resource
            .get_identifier()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        println!("  [{}] {}", id, resource.get_title().unwrap_or_default());
    }
    if let Some(next) = results.next_page.filter(|n| !n.is_empty()) {
        println!("\nNext page: {}", next);
    }
    Ok(())
}
