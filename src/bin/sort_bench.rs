use chrono::prelude::*;
use rand::thread_rng;
use sort_lpp::generate::{
    nearly_sorted_dataset, prefix_dataset, random_dataset, reverse_sorted_dataset,
};
use sort_lpp::sort_bench::{parse_cli, prepare_results_csv};
use sort_lpp::sorts::measure_all;
use sort_lpp::BENCH_SIZES;
use std::io::Write;

fn main() {
    let (timecsv, compcsv, runs, verbose) = parse_cli();
    let started: DateTime<Local> = Local::now();
    println!(
        "started benchmarks at {}",
        started.to_rfc3339_opts(SecondsFormat::Secs, false)
    );
    if verbose {
        println!("timecsv {:?}", timecsv);
        println!("compcsv {:?}", compcsv);
        println!("runs {}", runs);
    }
    let mut rng = thread_rng();
    let mut time_log = prepare_results_csv(&timecsv);
    let mut comp_log = prepare_results_csv(&compcsv);
    for &size in BENCH_SIZES.iter() {
        println!("> current dataset size: {}", size);
        let datasets: Vec<(&str, Vec<String>)> = vec![
            ("Random", random_dataset(&mut rng, size)),
            ("Reverse", reverse_sorted_dataset(&mut rng, size)),
            ("NearlySorted", nearly_sorted_dataset(&mut rng, size)),
            ("Prefix", prefix_dataset(&mut rng, size)),
        ];
        for (label, data) in datasets.iter() {
            let mut time_sums = [0u64; 6];
            let mut comp_sums = [0u64; 6];
            for _ in 0..runs {
                let measures = measure_all(data, &mut rng);
                for (k, m) in measures.iter().enumerate() {
                    time_sums[k] += m.micros;
                    comp_sums[k] += m.comparisons;
                }
            }
            if verbose {
                println!("{} dataset done, averaged over {} runs", label, runs);
            }
            let mut time_line = format!("{},{}", size, label);
            let mut comp_line = format!("{},{}", size, label);
            for k in 0..6 {
                time_line.push_str(&format!(",{}", time_sums[k] / runs as u64));
                comp_line.push_str(&format!(",{}", comp_sums[k] / runs as u64));
            }
            time_line.push('\n');
            comp_line.push('\n');
            time_log.write_all(time_line.as_bytes()).unwrap();
            comp_log.write_all(comp_line.as_bytes()).unwrap();
        }
    }
    let finished: DateTime<Local> = Local::now();
    println!(
        "finished benchmarks at {}, elapsed {} s",
        finished.to_rfc3339_opts(SecondsFormat::Secs, false),
        (finished - started).num_seconds()
    );
}
