use super::VERSION;
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

/// Takes the CLI arguments that control the benchmark runs.
/// It is safe to unwrap clap cli_args.get_one when a default is given
/// because the default will be used when no argument is passed.
pub fn parse_cli() -> (PathBuf, PathBuf, usize, bool) {
    let arg_timecsv = Arg::new("time_csvfile")
        .help("name for the output csv file with execution times in microseconds")
        .short('t')
        .long("timecsv")
        .num_args(1)
        .value_parser(value_parser!(PathBuf))
        .default_value("microseconds_results.csv");
    let arg_compcsv = Arg::new("comparisons_csvfile")
        .help("name for the output csv file with comparison counts")
        .short('c')
        .long("compcsv")
        .num_args(1)
        .value_parser(value_parser!(PathBuf))
        .default_value("comparisons_results.csv");
    let arg_runs = Arg::new("runs")
        .help("number of repeated runs averaged for each measurement")
        .short('r')
        .long("runs")
        .num_args(1)
        .value_parser(value_parser!(usize))
        .default_value("3");
    let arg_verbose = Arg::new("verbose")
        .help("print verbose information")
        .short('v')
        .long("verbose")
        .num_args(0..)
        .required(false);
    let cli_args = Command::new("Sort_bench")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to benchmark the string sorting algorithms")
        .arg(arg_timecsv)
        .arg(arg_compcsv)
        .arg(arg_runs)
        .arg(arg_verbose)
        .get_matches();
    let timecsv: PathBuf = cli_args
        .get_one::<PathBuf>("time_csvfile")
        .unwrap()
        .to_owned();
    let compcsv: PathBuf = cli_args
        .get_one::<PathBuf>("comparisons_csvfile")
        .unwrap()
        .to_owned();
    let runs: usize = *cli_args.get_one::<usize>("runs").unwrap();
    let verbose: bool = cli_args.contains_id("verbose");
    return (timecsv, compcsv, runs, verbose);
}

/// Create the results file and write the csv header,
/// replacing the results of any previous run.
pub fn prepare_results_csv(file: &PathBuf) -> std::fs::File {
    if std::path::Path::new(file).exists() {
        println!(
            "csvfile {} already exists, it will be replaced",
            file.display()
        );
    }
    match std::fs::write(file, format!("{}\n", crate::CSV_HEADER)) {
        Ok(_) => println!("initiated csvfile {}", file.display()),
        Err(e) => panic!("could not initiate csvfile {}, error: {}", file.display(), e),
    }
    let file = std::fs::OpenOptions::new().append(true).open(file).unwrap();
    return file;
}
