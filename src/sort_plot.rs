use super::VERSION;
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the benchmark results.
pub fn parse_cli() -> (PathBuf, PathBuf, PathBuf) {
    let arg_timecsv = Arg::new("time_csvfile")
        .help("name of the csv file with execution times in microseconds")
        .short('t')
        .long("timecsv")
        .num_args(1)
        .value_parser(value_parser!(PathBuf))
        .default_value("microseconds_results.csv");
    let arg_compcsv = Arg::new("comparisons_csvfile")
        .help("name of the csv file with comparison counts")
        .short('c')
        .long("compcsv")
        .num_args(1)
        .value_parser(value_parser!(PathBuf))
        .default_value("comparisons_results.csv");
    let arg_outdir = Arg::new("output_directory")
        .help("directory for the output png files")
        .short('o')
        .long("outdir")
        .num_args(1)
        .value_parser(value_parser!(PathBuf))
        .default_value("performance_plots");
    let cli_args = Command::new("Sort_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the benchmark results")
        .arg(arg_timecsv)
        .arg(arg_compcsv)
        .arg(arg_outdir)
        .get_matches();
    let timecsv: PathBuf = cli_args
        .get_one::<PathBuf>("time_csvfile")
        .unwrap()
        .to_owned();
    let compcsv: PathBuf = cli_args
        .get_one::<PathBuf>("comparisons_csvfile")
        .unwrap()
        .to_owned();
    let outdir: PathBuf = cli_args
        .get_one::<PathBuf>("output_directory")
        .unwrap()
        .to_owned();
    return (timecsv, compcsv, outdir);
}
