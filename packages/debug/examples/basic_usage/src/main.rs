//! Basic usage example for `nsdebug`
//!
//! Run with different filters to see which scopes print:
//!
//! ```sh
//! DEBUG=shop cargo run -p nsdebug_basic_usage_example
//! DEBUG='shop:*:pool' cargo run -p nsdebug_basic_usage_example
//! RUST_LOG=nsdebug=debug DEBUG='*' cargo run -p nsdebug_basic_usage_example
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use nsdebug::{DebuggerConfig, create_debugger, debug};

fn main() {
    pretty_env_logger::init();

    let filter = nsdebug::nsdebug_env::standard::var_opt("DEBUG");
    println!("DEBUG = {filter:?}\n");

    let shop = create_debugger("shop");
    let db = shop.child("db");
    let pool = db.child("shop:db:pool");
    let http = shop.child("http");

    for debugger in [&shop, &db, &pool, &http] {
        println!("{:<14} enabled={}", debugger.full_name(), debugger.enabled());
    }
    println!();

    debug!(shop, "starting");
    debug!(db, "connecting to", "localhost:5432");
    debug!(pool, "pool size", 8);
    debug!(http, "listening on port", 8080);

    println!("\nForcing http on:");
    http.enable();
    debug!(http, "listening on port", 8080);

    println!("\nUsing '.' as separator:");
    let app = nsdebug::Debugger::new("app", DebuggerConfig::default().with_separator("."));
    let cache = app.child("cache");
    println!("{:<14} enabled={}", cache.full_name(), cache.enabled());

    let log_cache = cache.as_fn();
    log_cache(&[&"hits", &12]);

    log::info!("done");
}
