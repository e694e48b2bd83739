mod access;
mod api;
mod booking;
mod catalog;
mod filter;
mod format;
mod models;

use api::types::LoginRequest;
use api::{ApiClient, VillaApi};
use booking::{BookingDraft, MonthCursor};
use catalog::Catalog;
use chrono::Utc;
use filter::{
    active_filter_count, apply_filters, derive_facet_domains, partition_by_status, FilterSpec,
};
use models::{Property, PropertyStatus};
use tracing::{info, warn, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏝️  Villa Scout - Smart Villa Discovery");
    info!("========================================");
    info!("");

    let catalog = Catalog::load()?;
    let domains = derive_facet_domains(catalog.properties());
    info!(
        "Catalog: {} villas across {} locations (price ceiling {})",
        catalog.len(),
        domains.locations.len(),
        format::yen(domains.max_price)
    );

    // Full listing, partitioned the way the discovery view shows it
    let spec = FilterSpec::cleared(&domains);
    let partition = partition_by_status(&apply_filters(catalog.properties(), &spec));

    println!("\nYour villas ({}):", partition.reserved_or_owned.len());
    for property in &partition.reserved_or_owned {
        print_villa(property);
    }
    println!("\nAvailable villas ({}):", partition.available.len());
    for property in &partition.available {
        print_villa(property);
    }

    // A narrowed search, as the filter panel would produce it
    let mut spec = FilterSpec::cleared(&domains);
    spec.toggle_status(PropertyStatus::Available);
    spec.set_price_max(150_000);
    spec.min_bedrooms = 2;
    let filtered = apply_filters(catalog.properties(), &spec);
    println!(
        "\nAvailable under {}, 2+ bedrooms ({} active filters):",
        format::yen(150_000),
        active_filter_count(&spec, &domains)
    );
    for property in &filtered {
        print_villa(property);
    }

    // Sample booking quote against the first match
    if let Some(property) = filtered.first() {
        let cursor = MonthCursor::new(2025, 11)?;
        let grid = cursor.grid();
        let mut draft = BookingDraft::new(property.capacity);
        for cell in grid.iter().filter(|c| c.is_some()).take(3) {
            draft.toggle_date(*cell);
        }
        draft.adjust_guests(2);

        let quote = draft.quote(property.price_per_night);
        println!(
            "\nSample stay at {} ({} {}):",
            property.name,
            cursor.year(),
            cursor.month()
        );
        println!(
            "  {} × {}泊 = {}",
            format::yen(property.price_per_night),
            quote.nights,
            format::yen(quote.subtotal)
        );
        println!("  サービス料 (12%) = {}", format::yen(quote.service_fee));
        println!("  合計 = {}", format::yen(quote.total));

        if let Some(handoff) = draft.checkout_handoff(property.price_per_night) {
            println!(
                "  Check-in {} / Check-out {} / {}名",
                format::date_ja(handoff.start_date),
                format::date_ja(handoff.end_date),
                handoff.guests
            );
        }
    }

    // Live API section, only when a backend is configured
    if std::env::var("VILLA_API_URL").is_ok() {
        show_access_view(&catalog).await;
    } else {
        info!("");
        info!("VILLA_API_URL not set; skipping reservation and key fetch");
    }

    Ok(())
}

fn print_villa(property: &Property) {
    println!(
        "  [{:?}] {} — {} ({}/night, {} guests, {} bd / {} ba)",
        property.status,
        property.name,
        property.location,
        format::yen(property.price_per_night),
        property.capacity,
        property.bedrooms,
        property.bathrooms
    );
}

/// Fetch reservations and keys and print the digital-key view
async fn show_access_view(catalog: &Catalog) {
    let api = match ApiClient::from_env() {
        Ok(api) => api,
        Err(e) => {
            warn!("Could not create API client: {e:#}");
            return;
        }
    };
    info!("");
    info!("Connecting to villa platform at {}", api.base_url());

    if let (Ok(email), Ok(password)) = (
        std::env::var("VILLA_API_EMAIL"),
        std::env::var("VILLA_API_PASSWORD"),
    ) {
        if let Err(e) = api.login(&LoginRequest { email, password }).await {
            warn!("Login failed: {e:#}");
        }
    }

    if !api.is_authenticated().await {
        warn!("Not authenticated; reservation and key data requires login");
        return;
    }

    let bundle = access::fetch_access_bundle(&api).await;
    info!(
        "Fetched {} reservations and {} keys",
        bundle.reservations.len(),
        bundle.keys.len()
    );

    let now = Utc::now();
    let active = access::active_keys(&bundle.keys, now);
    if active.is_empty() {
        println!("\n現在アクティブな鍵はありません");
    } else {
        println!("\nActive digital keys:");
        for key in active {
            let room = access::reservation_for_key(&bundle.reservations, key)
                .and_then(|r| catalog.find(&r.property_id()))
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown villa".to_string());
            println!("  🔑 {} — {} (device {})", key.key_code, room, key.device_id);
            if let Some(reservation) = access::reservation_for_key(&bundle.reservations, key) {
                println!(
                    "     {} 〜 {} ({}泊, {})",
                    format::date_ja(reservation.start_date),
                    format::date_ja(reservation.end_date),
                    access::nights_between(reservation.start_date, reservation.end_date),
                    format::yen(reservation.total_price)
                );
            }
        }
    }

    if let Err(e) = api.logout().await {
        warn!("Logout failed: {e:#}");
    }
}
