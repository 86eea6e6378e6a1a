//! Run every built-in strategy against the benchmark domain.
//!
//! Demonstrates: build config → Domain → pick strategies by name → run →
//! reset → repeat. Interactive strategies are fed from a guide thread that
//! pushes the domain's hint, so they finish too.
//!
//! ```text
//! cargo run -p paramsearch --example quickstart [SIZE] [TARGETS]
//! RUST_LOG=paramsearch_crawler=info cargo run -p paramsearch --example quickstart
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use paramsearch::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let defaults = DomainConfig::default();
    let size = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.size);
    let targets = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.target_count);

    // Zero delay keeps the random and grid strategies tractable here.
    let config = DomainConfig::new("Benchmark", size, targets).with_probe_delay(Duration::ZERO);
    let domain = Arc::new(Domain::from_config(config).unwrap());

    println!("=== Paramsearch Quickstart ===\n");
    println!("{} targets in a {size}^3 cube\n", domain.target_count());

    let registry = CrawlerRegistry::with_defaults();
    for name in registry.names() {
        if name == "RandomCrawler" && size > 64 {
            println!("  {name:<24} skipped (cube too large for random probing)");
            continue;
        }

        domain.reset();
        let mut crawler = registry.create(name, &domain).unwrap();

        let done = Arc::new(AtomicBool::new(false));
        let guide = crawler.point_queue().map(|queue| {
            let domain = Arc::clone(&domain);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Acquire) {
                    if let Some(hint) = domain.hint().filter(|_| queue.is_empty()) {
                        // The crawler dropped its inbox; nobody is left to steer.
                        if queue.push(hint).is_err() {
                            break;
                        }
                    }
                    thread::sleep(Duration::from_millis(1));
                }
            })
        });

        let start = Instant::now();
        let report = crawler.run();
        let elapsed = start.elapsed();

        done.store(true, Ordering::Release);
        if let Some(guide) = guide {
            guide.join().unwrap();
        }

        println!(
            "  {:<24} found {}/{} in {:>9} probes, {:>8.2?}",
            crawler.name(),
            report.found.len(),
            domain.target_count(),
            report.probes,
            elapsed,
        );
    }

    println!("\n{domain}");
}
