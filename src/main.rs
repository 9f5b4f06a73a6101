use anyhow::Context;
use clap::Parser;
use rental_marketplace::dashboard::Dashboard;
use rental_marketplace::session::{FileStore, MockAuthBackend};
use rental_marketplace::source;
use rental_marketplace::{Catalog, Config, FilterSpec, Session, SortKey};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search the rental listings
#[derive(Parser, Debug)]
#[command(name = "rental-marketplace")]
#[command(version, about, long_about = None)]
struct Args {
    /// City, state or zip code to search for
    location: Option<String>,

    /// Result ordering: newest, oldest, price-low or price-high
    #[arg(long, default_value_t = SortKey::default())]
    sort: SortKey,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("🏠 Rental Marketplace");

    let source = source::from_config(&config);
    let catalog = Catalog::load(source.as_ref())
        .await
        .context("Failed to load listings")?;

    let mut filters = FilterSpec::default();
    if let Some(location) = args.location {
        filters.location = location;
    }
    let sort = args.sort;

    let results = catalog.search(&filters, sort);
    info!("✅ {} properties found ({})", results.len(), sort.label());

    for (i, property) in results.iter().enumerate() {
        println!("{}. {} (${}/mo)", i + 1, property.title, property.rent);
        println!(
            "   {} · {} bd, {} ba, {} sq ft",
            property.property_type, property.bedrooms, property.bathrooms, property.area
        );
        println!(
            "   {}, {} {} {}",
            property.location.address,
            property.location.city,
            property.location.state,
            property.location.zip_code
        );
        let amenities: Vec<&str> = property.amenities.iter().map(String::as_str).collect();
        println!("   Amenities: {}", amenities.join(", "));
        println!("   ID: {}", property.id);
        println!();
    }

    let mut session = Session::new(
        MockAuthBackend::new(config.auth_delay),
        FileStore::new(&config.data_dir),
    );
    match session.restore().await? {
        Some(user) => {
            let dashboard = Dashboard::for_user(user, &catalog);
            info!("Signed in as {} ({})", user.name, dashboard.title());
        }
        None => info!("Not signed in"),
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_and_sort_are_parsed() {
        let args = Args::try_parse_from(["rental-marketplace", "brooklyn", "--sort", "price-low"]).unwrap();
        assert_eq!(args.location.as_deref(), Some("brooklyn"));
        assert_eq!(args.sort, SortKey::PriceLow);
    }

    #[test]
    fn defaults_to_everything_newest_first() {
        let args = Args::try_parse_from(["rental-marketplace"]).unwrap();
        assert_eq!(args.location, None);
        assert_eq!(args.sort, SortKey::Newest);
    }

    #[test]
    fn help_and_stray_arguments_are_not_searches() {
        let help = Args::try_parse_from(["rental-marketplace", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        assert!(Args::try_parse_from(["rental-marketplace", "brooklyn", "extra"]).is_err());
        assert!(Args::try_parse_from(["rental-marketplace", "--sort", "cheapest"]).is_err());
    }
}
