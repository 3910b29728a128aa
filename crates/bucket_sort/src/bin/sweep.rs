use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use bucket_sort::generator::{DataCase, generate_case};
use bucket_sort::{InnerSort, SortConfig, sort_floats};
use log::{error, info};

const DEFAULT_SIZE: usize = 1_000_000;
const DEFAULT_LOG_PATH: &str = "sweep-results.log";
const BUCKET_COUNT: usize = 10;
const THREAD_SWEEP: [usize; 4] = [1, 2, 4, 8];
const SEED: u64 = 0x5EED_2026;

fn misordered_pairs(data: &[f32]) -> usize {
    data.windows(2).filter(|pair| pair[1] < pair[0]).count()
}

fn run_one(size: usize, thread_count: usize, inner: InnerSort, log: &mut impl Write) -> bool {
    let mut data = generate_case(DataCase::UniformUnit, size, SEED);
    let before = misordered_pairs(&data);

    let config = SortConfig {
        bucket_count: BUCKET_COUNT,
        thread_count,
        inner,
    };

    let start = Instant::now();
    if let Err(err) = sort_floats(&mut data, &config) {
        error!("sort failed for {config:?}: {err}");
        return false;
    }
    let elapsed = start.elapsed();

    let after = misordered_pairs(&data);
    info!(
        "{} threads={thread_count} size={size}: {before} -> {after} misordered pairs in {:.6}s",
        inner.label(),
        elapsed.as_secs_f64()
    );
    if after != 0 {
        error!("result is not sorted: {after} misordered pairs remain");
        return false;
    }

    writeln!(
        log,
        "strategy={} threads={thread_count} size={size} misordered_before={before} \
         misordered_after={after} seconds={:.6}",
        inner.label(),
        elapsed.as_secs_f64()
    )
    .is_ok()
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let size = match args.next() {
        Some(raw) => match raw.parse() {
            Ok(size) => size,
            Err(_) => {
                error!("invalid size argument {raw:?}");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_SIZE,
    };
    let log_path = args.next().unwrap_or_else(|| DEFAULT_LOG_PATH.to_string());

    let mut log = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(err) => {
            error!("cannot open result log {log_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    for &threads in &THREAD_SWEEP {
        let strategies = [
            InnerSort::TaskRecursive,
            InnerSort::Partitioned { threads },
        ];
        for inner in strategies {
            if !run_one(size, threads, inner, &mut log) {
                return ExitCode::FAILURE;
            }
        }
    }

    info!("sweep complete, results appended to {log_path}");
    ExitCode::SUCCESS
}
