use sort_lpp::plot_per_dataset;
use sort_lpp::sort_plot::parse_cli;

fn main() {
    let (timecsv, compcsv, outdir) = parse_cli();
    std::fs::create_dir_all(&outdir).unwrap();
    if timecsv.exists() {
        println!("> processing time measurements from {}", timecsv.display());
        plot_per_dataset(&timecsv, &outdir.join("time"), "Execution Time (μs)").unwrap();
    }
    if compcsv.exists() {
        println!("> processing comparison counts from {}", compcsv.display());
        plot_per_dataset(&compcsv, &outdir.join("comparisons"), "Comparison Count").unwrap();
    }
    println!("all plots saved to {}", outdir.display());
}
