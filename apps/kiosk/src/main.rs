//! # Vitrine Kiosk
//!
//! A terminal walkthrough of the storefront core. Not a UI - just the
//! thinnest possible presentation layer, exercising the same session calls a
//! real frontend would make and printing the derived state after each one.
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize Logging ── tracing-subscriber with env filter
//!    (default INFO, override with RUST_LOG=vitrine=debug)
//! 2. Load Catalog ──────── bundled JSON product list, validated on parse
//! 3. Start Session ─────── default filters, empty cart
//! 4. Scripted Browse ───── category/search/sort transitions + cart edits
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p vitrine-kiosk --bin kiosk
//! RUST_LOG=vitrine=debug cargo run -p vitrine-kiosk --bin kiosk
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use vitrine_core::{Catalog, CategoryFilter, ProductId, Session, SortKey};

/// The supplier's static product list, bundled with the shell.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

fn main() -> Result<(), vitrine_core::CatalogError> {
    init_tracing();

    let catalog = Catalog::from_json(CATALOG_JSON)?;
    info!(products = catalog.len(), "catalog loaded");

    let mut session = Session::new(catalog);

    println!("Categories: {}", session.categories().join(" | "));

    print_grid(&session, "Full catalog");

    session.set_category(CategoryFilter::from_label("Electronics"));
    session.set_search("phone");
    print_grid(&session, "Electronics, search \"phone\"");

    session.clear_filters();
    session.set_sort(SortKey::PriceAsc);
    print_grid(&session, "Everything, price low to high");

    // Two laptops, one t-shirt, then put one laptop back.
    session.add_to_cart(ProductId(1));
    session.add_to_cart(ProductId(1));
    session.add_to_cart(ProductId(2));
    session.change_qty(ProductId(1), -1);
    print_cart(&session);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,vitrine=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Prints the product grid as the current filters derive it.
fn print_grid(session: &Session, heading: &str) {
    println!("\n== {heading} ==");

    let shown = session.displayed_products();
    if shown.is_empty() {
        println!("  (no products found)");
        return;
    }

    for product in &shown {
        // pre-format Money so the column width applies to the rendered string
        let price = product.price.to_string();
        println!(
            "  #{:<3} {:<14} {:<12} {:>10}",
            product.id.0, product.name, product.category, price
        );
    }
}

/// Prints the cart panel: one line per entry plus the grand total.
fn print_cart(session: &Session) {
    println!("\n== Cart ==");

    if session.cart().is_empty() {
        println!("  Your cart is empty.");
        return;
    }

    for entry in session.line_items() {
        println!(
            "  {:<14} {} x {} = {}",
            entry.product.name,
            entry.product.price,
            entry.qty,
            entry.line_total()
        );
    }

    println!("  Total: {}", session.total());
}
