// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared-store example.
//!
//! This example demonstrates the process-wide configuration store: one
//! thread loads a YAML document while worker threads read typed values
//! through the same global handle, and the final tree is converted to
//! JSON on the way out.
//!
//! Run with: `cargo run --example shared_store`

use dotcfg::prelude::*;
use std::thread;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Loading into the process-wide store ===");
    SharedStore::global().load_yaml(
        "\
service: resizer
workers: 4
queue:
  depth: 128
  warn_level: 96
",
    )?;
    println!(
        "Service '{}' configured",
        SharedStore::global().get_string("service", "unknown")
    );

    println!("\n=== Reading from worker threads ===");
    let workers = SharedStore::global().get_i64("workers", 1);
    let handles: Vec<_> = (0..workers)
        .map(|id| {
            thread::spawn(move || {
                let depth = SharedStore::global().get_i64("queue.depth", 32);
                println!("worker {id}: queue depth is {depth}");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    println!("\n=== Runtime overrides are visible everywhere ===");
    SharedStore::global().set("drain_mode", true);
    let seen = thread::spawn(|| SharedStore::global().get_bool("drain_mode", false))
        .join()
        .expect("reader panicked");
    println!("drain_mode seen from another thread: {seen}");

    println!("\n=== Converting the tree to JSON ===");
    let json = SharedStore::global().save_json()?;
    println!("{json}");

    Ok(())
}
