//! Profile keyword scanning throughput
//!
//! Usage with simple timing:
//! `cargo run --release --example profile_scan`
//!
//! For a profiler, build with `cargo build --release --example profile_scan`
//! and point it at `target/release/examples/profile_scan`.

use kwmatch::{Trie, TrieConfig};
use std::time::Instant;

fn main() {
    println!("=== Keyword Scan Profiling ===\n");

    // Test configurations matching realistic workloads
    let configs = [
        ("Small", 100, 1_000, 3),
        ("Medium", 500, 5_000, 10),
        ("Large", 1_000, 10_000, 3),
        ("XLarge", 5_000, 10_000, 50),
    ];

    for (name, keyword_count, text_size, hit_every) in configs {
        println!("--- {} Workload ---", name);
        println!(
            "Keywords: {}, Text: {} bytes, One hit every {} words",
            keyword_count, text_size, hit_every
        );

        let keywords: Vec<String> = (0..keyword_count)
            .map(|i| format!("pattern_{}", i))
            .collect();

        let build_start = Instant::now();
        let trie = match Trie::build(&keywords, TrieConfig::default()) {
            Ok(trie) => trie,
            Err(e) => {
                eprintln!("Failed to build trie: {}", e);
                return;
            }
        };
        println!(
            "  Build time: {:?} ({} states)",
            build_start.elapsed(),
            trie.automaton().state_count()
        );

        let text = generate_text(text_size, hit_every, keyword_count);

        // Warm-up run
        let _ = trie.parse_text(&text);

        let iterations = 1000;
        let start = Instant::now();
        let mut total_matches = 0;
        for _ in 0..iterations {
            let emits = trie.parse_text(&text);
            total_matches += emits.len();
            std::hint::black_box(emits);
        }
        let elapsed = start.elapsed();

        let per_scan = elapsed / iterations;
        let throughput = text.len() as f64 / per_scan.as_secs_f64() / (1024.0 * 1024.0);
        println!("  Scan time: {:?} per scan", per_scan);
        println!("  Throughput: {:.1} MB/s", throughput);
        println!(
            "  Matches per scan: {}\n",
            total_matches / iterations as usize
        );
    }
}

fn generate_text(size: usize, hit_every: usize, keyword_count: usize) -> String {
    let mut text = String::with_capacity(size + 32);
    let mut i = 0;
    while text.len() < size {
        if i % hit_every == 0 {
            text.push_str(&format!("pattern_{} ", (i * 17) % keyword_count));
        } else {
            text.push_str("lorem ");
        }
        i += 1;
    }
    text
}
