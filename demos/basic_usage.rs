// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the dotted-key configuration store.
//!
//! This example demonstrates loading a YAML document into an instance-mode
//! store, reading values through dotted keys with typed getters, applying
//! runtime overrides, and rendering the tree back out as text.
//!
//! Run with: `cargo run --example basic_usage`

use dotcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let document = "\
app_name: demo
verbose: false
database:
  host: localhost
  port: 5432
  timeout_secs: 30
limits:
  max_connections: 100
  rate: 2.5
";

    println!("=== Loading a YAML document ===");
    let mut config = YamlConfiguration::new();
    config.load(document)?;
    println!("Loaded {} top-level keys", config.values().len());

    println!("\n=== Reading values through dotted keys ===");
    println!("app_name            = {}", config.get_string("app_name", "unnamed"));
    println!("database.host       = {}", config.get_string("database.host", "127.0.0.1"));
    println!("database.port       = {}", config.get_i64("database.port", 0));
    println!("limits.rate         = {}", config.get_f64("limits.rate", 1.0));

    println!("\n=== Missing keys quietly take the default ===");
    println!("database.pool_size  = {}", config.get_i64("database.pool_size", 8));
    println!("cache.enabled       = {}", config.get_bool("cache.enabled", true));

    println!("\n=== Inspecting before reading ===");
    if config.has("limits.max_connections") {
        println!("limits.max_connections is configured");
    }
    match config.try_get_i64("verbose") {
        Ok(value) => println!("verbose as integer: {value:?}"),
        Err(err) => println!("verbose is not an integer: {err}"),
    }

    println!("\n=== Runtime overrides are flat ===");
    config.set("verbose", true);
    println!("verbose             = {}", config.get_bool("verbose", false));
    config.remove("app_name");
    println!("app_name            = {}", config.get_string("app_name", "unnamed"));

    println!("\n=== Rendering the tree back out ===");
    let rendered = config.save()?;
    println!("{rendered}");

    Ok(())
}
