use std::hint::black_box;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use classic_algorithms::{SearchAlgorithm, SortAlgorithm};
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;

#[derive(Clone, Copy, Debug)]
enum Bench {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
}

/// Runs one sorting or searching algorithm over generated input.
#[derive(Parser, Debug)]
#[command(name = "perf_harness", version)]
struct Config {
    /// Algorithm to run (see --list)
    #[arg(long, value_parser = parse_bench, required_unless_present = "list")]
    bench: Option<Bench>,

    /// Input length (bench-specific default)
    #[arg(long)]
    len: Option<usize>,

    /// Iterations (bench-specific default)
    #[arg(long)]
    iters: Option<usize>,

    /// RNG seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Run a quick correctness check before benchmarking
    #[arg(long)]
    verify: bool,

    /// Print throughput summary after the run
    #[arg(long)]
    report: bool,

    /// Show available benches
    #[arg(long)]
    list: bool,
}

/// A fully resolved run: defaults applied.
#[derive(Clone, Copy)]
struct Run {
    bench: Bench,
    len: usize,
    iters: usize,
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    if config.list {
        list_benches();
        return;
    }

    let Some(bench) = config.bench else {
        tracing::error!("missing --bench");
        process::exit(2);
    };
    let run = Run {
        bench,
        len: config.len.unwrap_or_else(|| bench.default_len()),
        iters: config.iters.unwrap_or_else(|| bench.default_iters()),
        seed: config.seed,
    };

    if config.verify {
        if let Err(err) = verify_bench(bench) {
            tracing::error!(bench = %bench.name(), %err, "verification failed");
            process::exit(1);
        }
        tracing::info!(bench = %bench.name(), "verification passed");
    }

    tracing::info!(bench = %bench.name(), len = run.len, iters = run.iters, "starting run");
    let start = Instant::now();
    match bench {
        Bench::Sort(algo) => bench_sort(run, algo),
        Bench::Search(algo) => bench_search(run, algo),
    }
    let elapsed = start.elapsed();

    if config.report {
        print_report(&run, elapsed);
    }
}

fn parse_bench(name: &str) -> Result<Bench, String> {
    if let Ok(algo) = name.parse::<SortAlgorithm>() {
        return Ok(Bench::Sort(algo));
    }
    name.parse::<SearchAlgorithm>()
        .map(Bench::Search)
        .map_err(|err| err.to_string())
}

fn list_benches() {
    for algo in SortAlgorithm::ALL {
        println!("{algo}");
    }
    for algo in SearchAlgorithm::ALL {
        println!("{algo}");
    }
}

impl Bench {
    fn default_len(self) -> usize {
        match self {
            Bench::Sort(
                SortAlgorithm::Selection | SortAlgorithm::Bubble | SortAlgorithm::Insertion,
            ) => 10_000,
            Bench::Sort(SortAlgorithm::Shell) => 100_000,
            Bench::Sort(SortAlgorithm::Merge | SortAlgorithm::Quick | SortAlgorithm::Heap) => {
                1_000_000
            }
            Bench::Search(SearchAlgorithm::Linear) => 10_000,
            Bench::Search(_) => 1_000_000,
        }
    }

    fn default_iters(self) -> usize {
        match self {
            Bench::Sort(_) => 3,
            Bench::Search(SearchAlgorithm::Linear) => 1,
            Bench::Search(_) => 5,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Bench::Sort(algo) => algo.name(),
            Bench::Search(algo) => algo.name(),
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Bench::Sort(_) => "elem",
            Bench::Search(_) => "query",
        }
    }
}

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

fn make_i32_input(len: usize, seed: u64) -> Vec<i32> {
    let mut state = seed;
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(next_u64(&mut state) as u32 as i32);
    }
    values
}

fn make_sorted_values(len: usize) -> Vec<i32> {
    let mut values = Vec::with_capacity(len);
    for i in 0..len {
        values.push((i as i32).wrapping_mul(2));
    }
    values
}

fn make_search_queries(values: &[i32], seed: u64) -> Vec<i32> {
    let mut state = seed;
    let mut queries = Vec::with_capacity(values.len());
    for _ in 0..values.len() {
        let idx = (next_u64(&mut state) as usize) % values.len();
        queries.push(values[idx]);
    }
    queries
}

fn bench_sort(run: Run, algo: SortAlgorithm) {
    let input = make_i32_input(run.len, run.seed);
    let mut values = input.clone();
    for _ in 0..run.iters {
        values.copy_from_slice(&input);
        algo.sort(black_box(values.as_mut_slice()));
    }
    black_box(&values);
}

fn bench_search(run: Run, algo: SearchAlgorithm) {
    if run.len == 0 {
        return;
    }

    let values = make_sorted_values(run.len);
    let queries = make_search_queries(&values, run.seed);
    let mut acc = 0usize;
    for _ in 0..run.iters {
        let haystack = black_box(values.as_slice());
        for &q in &queries {
            if let Some(idx) = algo.search(haystack, black_box(q)) {
                acc ^= idx;
            }
        }
    }
    black_box(acc);
}

fn verify_bench(bench: Bench) -> Result<(), String> {
    match bench {
        Bench::Sort(algo) => {
            let mut values = [9, 1, 4, 1, 5, -3, 0, 9];
            algo.sort(&mut values);
            let expected = [-3, 0, 1, 1, 4, 5, 9, 9];
            if values != expected {
                return Err(format!("expected {expected:?}, got {values:?}"));
            }
        }
        Bench::Search(algo) => {
            let values = [1, 2, 3, 5, 8, 13, 21];
            for (idx, &value) in values.iter().enumerate() {
                let found = algo.search(&values, value);
                if found != Some(idx) {
                    return Err(format!("{value}: expected Some({idx}), got {found:?}"));
                }
            }
            if let Some(idx) = algo.search(&values, 4) {
                return Err(format!("4: expected None, got Some({idx})"));
            }
        }
    }
    Ok(())
}

fn print_report(run: &Run, elapsed: Duration) {
    let work_items = (run.len as u128) * (run.iters as u128);
    let bytes = work_items * 4;
    let unit = run.bench.unit();

    let elapsed_s = elapsed.as_secs_f64();
    let items_per_s = work_items as f64 / elapsed_s;
    let bytes_per_s = bytes as f64 / elapsed_s;
    let ns_per_item = (elapsed_s * 1.0e9) / work_items as f64;

    let lines = [
        format!(
            "bench={} len={} iters={}",
            run.bench.name(),
            run.len,
            run.iters
        ),
        format!(
            "elapsed_s={:.6} ns_per_item={:.3} throughput={}",
            elapsed_s,
            ns_per_item,
            format_rate(items_per_s, unit)
        ),
        format!("work_items={work_items} unit={unit}"),
        format!(
            "bytes={} byte_throughput={}",
            bytes,
            format_rate(bytes_per_s, "B")
        ),
    ];

    println!("{}", lines.join("\n"));
}

fn format_rate(rate: f64, unit: &str) -> String {
    let (value, prefix) = if rate >= 1.0e12 {
        (rate / 1.0e12, "T")
    } else if rate >= 1.0e9 {
        (rate / 1.0e9, "G")
    } else if rate >= 1.0e6 {
        (rate / 1.0e6, "M")
    } else if rate >= 1.0e3 {
        (rate / 1.0e3, "K")
    } else {
        (rate, "")
    };
    format!("{value:.3} {prefix}{unit}/s")
}
