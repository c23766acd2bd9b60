//! End-to-end walkthrough of the portal domain core
//!
//! Seeds the demo dataset, drives the catalog list view the way the UI
//! would (search, filter, sort, paginate, select), runs a request through
//! the review flow, and prints the dashboard KPIs.
//!
//! Run with: `cargo run --example walkthrough`

use portal::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = PortalStore::seeded();
    let config = PortalConfig::default();

    // === Catalog list view ===
    let mut catalog =
        ListQueryEngine::with_config(store.products()?, &config.view("catalog"))?;

    let view = catalog.view();
    println!(
        "Catalog: page {}/{} — showing {} of {} products",
        view.pagination.page,
        view.pagination.total_pages,
        view.page_items.len(),
        view.total_matched()
    );

    catalog.set_search_text("hyd");
    println!("\nSearch \"hyd\":");
    for product in &catalog.view().matched {
        println!("  {}  {}  ${:.2}", product.sku, product.name, product.unit_price);
    }

    catalog.set_search_text("");
    catalog.set_filter("category", FilterChoice::value("Electronics"))?;
    catalog.set_sort("unit_price")?;
    catalog.set_sort("unit_price")?; // flip to descending
    println!("\nElectronics by price (descending):");
    for product in &catalog.view().matched {
        println!("  {}  ${:.2}", product.name, product.unit_price);
    }

    catalog.toggle_select_all_visible();
    println!(
        "\nSelected {} products on the current page",
        catalog.view().selected_count
    );

    // === Request review flow ===
    let requests = store.requests()?;
    let in_review = requests
        .iter()
        .find(|r| r.status == RequestStatus::InReview)
        .expect("seeded data has a request in review");
    println!(
        "\nReviewing {} from {} (${:.2})",
        in_review.reference,
        in_review.company,
        in_review.total()
    );
    let approved = store.approve_request(
        in_review.id,
        Some("Confirmed availability for all items.".to_string()),
        "David Park",
    )?;
    println!("  → {}", approved.status);

    // === New ticket ===
    let ticket = store.create_ticket(
        &TicketForm {
            subject: "Replacement seals for hydraulic hose order".to_string(),
            category: "shipping".to_string(),
            priority: "medium".to_string(),
            description: "Two seals were missing from the last shipment.".to_string(),
        },
        "James Rivera",
    )?;
    println!("\nOpened {} ({})", ticket.reference, ticket.category);

    // === Dashboard ===
    let metrics = DashboardMetrics::for_admin(&store)?;
    println!(
        "\nAdmin dashboard: {} pending requests, {} open tickets, {} active users, {} stock alerts, {} unread notifications",
        metrics.pending_requests,
        metrics.open_tickets,
        metrics.active_users,
        metrics.stock_alerts,
        metrics.unread_notifications
    );

    println!("\nRecent activity:");
    for entry in store.recent_activity(5)? {
        println!("  [{}] {} — {}", entry.actor, entry.action, entry.detail);
    }

    Ok(())
}
