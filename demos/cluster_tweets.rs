//! Cluster a pipe-delimited tweet corpus from disk.
//!
//! Usage: `cluster_tweets <corpus-file> <k>`
//!
//! Set `RUST_LOG=debug` to see the engine's per-iteration trace.

use std::process::ExitCode;

use flock::cluster::KMedoids;
use flock::normalize;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <corpus-file> <k>", args[0]);
        return ExitCode::FAILURE;
    }

    let raw = match std::fs::read_to_string(&args[1]) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("cannot read {}: {e}", args[1]);
            return ExitCode::FAILURE;
        }
    };

    let k: usize = match args[2].parse() {
        Ok(k) => k,
        Err(_) => {
            eprintln!("k must be a positive integer, got {:?}", args[2]);
            return ExitCode::FAILURE;
        }
    };

    let docs = normalize::load_corpus(&raw);
    println!("total clusters: {k} ({} documents)", docs.len());

    let fit = match KMedoids::new(k).fit(&docs) {
        Ok(fit) => fit,
        Err(e) => {
            eprintln!("clustering failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("--------------------------------------------");
    for stats in &fit.history {
        println!("iteration {}: sizes {:?}", stats.iteration, stats.cluster_sizes);
    }
    println!("--------------------------------------------");
    if !fit.converged {
        println!("hit the iteration cap without converging");
    }
    for (idx, members) in fit.clusters.iter().enumerate() {
        println!("cluster {idx}: {} tweets", members.len());
    }
    println!("--------------------------------------------");
    println!("SSE: {}", fit.sse);

    ExitCode::SUCCESS
}
