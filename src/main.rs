use anyhow::{Context, Result};
use lightbnb_db::{DatabaseConfig, PgExecutor, Repository, SearchOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DatabaseConfig::load()?;
    let executor = PgExecutor::connect(&config)
        .await
        .context("Failed to connect to database")?;
    let repository = Repository::new(executor);

    let options = SearchOptions {
        city: std::env::args().nth(1),
        ..Default::default()
    };
    info!("Searching properties with {:?}", options);

    let listings = repository
        .get_all_properties(&options, None)
        .await
        .context("Property search failed")?;

    info!("Found {} properties", listings.len());

    for (i, listing) in listings.iter().enumerate() {
        let property = &listing.property;
        println!(
            "{}. {} ({}, ${:.2}/night)",
            i + 1,
            property.title,
            property.city,
            property.cost_per_night as f64 / 100.0
        );
        println!(
            "   {} bedrooms, {} bathrooms, {} parking",
            property.number_of_bedrooms, property.number_of_bathrooms, property.parking_spaces
        );
        match listing.average_rating {
            Some(rating) => println!("   Rating: {:.2}", rating),
            None => println!("   Rating: no reviews"),
        }
        println!();
    }

    let json = serde_json::to_string_pretty(&listings)?;
    tokio::fs::write("properties.json", json).await?;
    info!("Saved listings to properties.json");

    Ok(())
}
