//! Resolve a project area and read one of its requirements
//!
//! Run with: OSLC_SERVER_URI=https://host/rm OSLC_USERNAME=... OSLC_PASSWORD=... \
//!           OSLC_PROJECT_AREA="..." cargo run --example project_area -- <requirement id>

use oslc_client::protocol::namespaces::{OSLC_RM, OSLC_RM10};
use oslc_client::{ClientConfig, OslcServer, Representation};
use std::env;

fn var(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    env::var(name).map_err(|_| format!("{} is not set", name).into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let artifact_id = env::args().nth(1).ok_or("usage: project_area <requirement id>")?;
    let config = ClientConfig::with_credentials(var("OSLC_USERNAME")?, var("OSLC_PASSWORD")?);
    let mut server = OslcServer::new(var("OSLC_SERVER_URI")?, config)?;

    server.connect(&OSLC_RM10.term("rmServiceProviders")).await?;
    server.use_service_provider(&var("OSLC_PROJECT_AREA")?).await?;

    match server.get_jazz_project_area_id()? {
        Some(id) => println!("Project area ID: {}", id),
        None => println!("Service provider is not a Jazz project area"),
    }

    match server.read_by_id(&OSLC_RM.term("Requirement"), &artifact_id, None).await {
        Ok(Representation::Resource(resource)) => {
            println!("URI:   {}", resource.uri());
            println!("Title: {}", resource.get_title().unwrap_or_default());
            println!("ETag:  {}", resource.etag().unwrap_or("-"));
            for link in resource.get_link_types() {
                println!("  link: {}", link);
            }
        }
        Ok(Representation::Compact(compact)) => {
            println!("Preview of {}", compact.resource().uri());
        }
        Err(err) => eprintln!("{} ({})", err, err.error_type()),
    }
    Ok(())
}
