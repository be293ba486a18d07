use crate::utils::*;
use plotters::prelude::*;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
pub mod generate;
pub mod sort_bench;
pub mod sort_plot;
pub mod sorts;
pub mod utils;

// constants
pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
pub const CSV_HEADER: &str =
    "Size,Type,StandardMerge,StandardQuick,CustomMerge,CustomQuick,Radix,RadixQuick";
pub const SERIES_LABELS: [&str; 6] = [
    "StandardMerge",
    "StandardQuick",
    "CustomMerge",
    "CustomQuick",
    "Radix",
    "RadixQuick",
];
pub const BENCH_SIZES: [usize; 14] = [
    100, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1500, 2000, 2500, 3000,
];
pub const SERIES_COLORS: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

/// The main struct for the benchmark measurement table.
#[derive(Debug, Clone)]
pub struct BenchTable {
    pub size: Vec<u64>,
    pub dataset: Vec<String>,
    pub series: Vec<[f64; 6]>,
}

impl BenchTable {
    /// Initiate a new BenchTable instance
    /// using the given capacity for the column vectors.
    pub fn new(capacity: usize) -> BenchTable {
        let size: Vec<u64> = Vec::with_capacity(capacity);
        let dataset: Vec<String> = Vec::with_capacity(capacity);
        let series: Vec<[f64; 6]> = Vec::with_capacity(capacity);
        let table: BenchTable = BenchTable {
            size,
            dataset,
            series,
        };
        table
    }

    /// Initiate a BenchTable from csv,
    /// setting measurements to NAN in case of value parsing errors,
    /// but panic for header, size, and short-row errors.
    pub fn from_csv<P>(fin: P) -> BenchTable
    where
        P: AsRef<Path>,
    {
        let file = File::open(fin).unwrap();
        let buf = BufReader::new(file);
        let mut lines = buf.lines();
        let header = lines.next().expect("csv file is empty").unwrap();
        assert_eq!(header.trim_end(), CSV_HEADER, "unexpected csv header");
        let mut table = BenchTable::new(1000 as usize);
        for l in lines {
            let l_unwrap = match l {
                Ok(l_ok) => l_ok,
                Err(l_err) => {
                    println!("Err, could not read/unwrap line {}", l_err);
                    continue;
                }
            };
            let mut l_split = l_unwrap.split(',');
            let size: u64 = l_split.next().unwrap().parse().unwrap();
            let dataset = l_split.next().unwrap().to_string();
            let mut row = [f64::NAN; 6];
            for v in row.iter_mut() {
                let l_value = l_split.next().unwrap();
                match l_value.parse::<f64>() {
                    Ok(parsed) => *v = parsed,
                    Err(e) => {
                        println!(
                            "could not parse measurement {}, at size {}. Error: {}",
                            l_value, size, e
                        );
                    }
                }
            }
            table.size.push(size);
            table.dataset.push(dataset);
            table.series.push(row);
        }
        table
    }

    /// Distinct dataset types in order of first appearance.
    pub fn unique_datasets(&self) -> Vec<String> {
        let mut uniques: Vec<String> = Vec::new();
        for d in self.dataset.iter() {
            if !uniques.iter().any(|u| u == d) {
                uniques.push(d.clone());
            }
        }
        uniques
    }

    /// Rows measured on the given dataset type.
    pub fn subset(&self, dataset: &str) -> BenchTable {
        let mut sub = BenchTable::new(self.size.len());
        for ((s, d), row) in self
            .size
            .iter()
            .zip(self.dataset.iter())
            .zip(self.series.iter())
        {
            if d == dataset {
                sub.size.push(*s);
                sub.dataset.push(d.clone());
                sub.series.push(*row);
            }
        }
        sub
    }

    /// Write the table to a csv file at the given path.
    pub fn to_csv<P>(&self, fout: P)
    where
        P: AsRef<Path>,
    {
        let file = File::create(fout).unwrap();
        let mut buf = BufWriter::new(file);
        buf.write_all(CSV_HEADER.as_bytes()).unwrap();
        buf.write_all(b"\n").unwrap();
        for ((s, d), row) in self
            .size
            .iter()
            .zip(self.dataset.iter())
            .zip(self.series.iter())
        {
            let mut line = format!("{},{}", s, d);
            for v in row.iter() {
                line.push_str(&format!(",{}", v));
            }
            line.push('\n');
            buf.write_all(line.as_bytes()).unwrap();
        }
    }

    /// Plot all six measurement series against input size to png.
    pub fn plot_series<P>(&self, fout: P, ylabel: &str, title: &str) -> Result<(), Box<dyn Error>>
    where
        P: AsRef<Path>,
    {
        if self.size.is_empty() {
            return Err(Box::new(LenErr {
                min_len: Some(1),
                got_len: 0,
                max_len: None,
            }));
        }
        let (xmin, xmax) = min_and_max(self.size.iter());
        let (xmin, xmax) = (xmin as f64, xmax as f64);
        let (ymin, ymax) = min_and_max(
            self.series
                .iter()
                .flat_map(|row| row.iter())
                .filter(|v| !v.is_nan()),
        );
        let yspan = (ymax - ymin) / 10f64;
        let ymin = ymin - yspan;
        let ymax = ymax + yspan;
        let root = BitMapBackend::new(&fout, (1200, 800)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 36))
            .margin(30)
            .x_label_area_size(60)
            .y_label_area_size(110)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(100, 100, 100).mix(0.5).stroke_width(2))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 20))
            .x_desc("Input Size")
            .y_desc(ylabel)
            .x_labels(14)
            .y_labels(20)
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .y_label_formatter(&|y: &f64| format!("{:.0}", y))
            .draw()?;
        for (j, label) in SERIES_LABELS.iter().enumerate() {
            let color = SERIES_COLORS[j];
            let points: Vec<(f64, f64)> = self
                .size
                .iter()
                .zip(self.series.iter())
                .filter(|(_, row)| !row[j].is_nan())
                .map(|(s, row)| (*s as f64, row[j]))
                .collect();
            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))?
                .label(*label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 18))
            .draw()?;
        root.present()?;
        Ok(())
    }
}

impl std::fmt::Display for BenchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n", CSV_HEADER)?;
        for ((s, d), row) in self
            .size
            .iter()
            .zip(self.dataset.iter())
            .zip(self.series.iter())
        {
            write!(f, "{},{}", s, d)?;
            for v in row.iter() {
                write!(f, ",{}", v)?;
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

/// Load a results csv and render one chart per dataset type into outdir.
/// Files are named from the lowercased metric label and dataset type,
/// the chart title carries the dataset type.
pub fn plot_per_dataset(csvin: &Path, outdir: &Path, ylabel: &str) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(outdir)?;
    let table = BenchTable::from_csv(csvin);
    for dataset in table.unique_datasets() {
        let fout = outdir.join(plot_filename(ylabel, &dataset));
        let title = format!("Performance ({} Dataset)", dataset);
        println!("> plotting {} dataset to {}", dataset, fout.display());
        table.subset(&dataset).plot_series(&fout, ylabel, &title)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::*;
    use crate::sorts::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    // run tests with:
    // cargo test -- --nocapture
    // to allow println! to stdout

    fn tricky_strings() -> Vec<String> {
        [
            "pear", "apple", "apples", "", "apple", "zebra", "ap", "apPle", "banana!", "ban",
            "bandana", "@start", "123", "12", "1230", "aaaa", "aaa", "aaab",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn small_table() -> BenchTable {
        let mut table = BenchTable::new(4);
        let rows: [(u64, &str, [f64; 6]); 4] = [
            (100, "Random", [10., 11., 12., 13., 14., 15.]),
            (200, "Random", [20., 22., 24., 26., 28., 30.]),
            (100, "Prefix", [9., 8., 7., 6., 5., 4.]),
            (200, "Prefix", [19., 18., 17., 16., 15., 14.]),
        ];
        for (s, d, row) in rows.iter() {
            table.size.push(*s);
            table.dataset.push(d.to_string());
            table.series.push(*row);
        }
        table
    }

    #[test]
    fn plot_filename_from_labels() {
        assert_eq!(
            plot_filename("Execution Time (μs)", "Random"),
            "execution time_random.png"
        );
        assert_eq!(
            plot_filename("Comparison Count", "NearlySorted"),
            "comparison count_nearlysorted.png"
        );
    }

    #[test]
    fn min_and_max_of_sizes() {
        let v = vec![300u64, 100, 2500, 1000];
        assert_eq!(min_and_max(v.iter()), (100, 2500));
    }

    #[test]
    fn sorts_agree_with_std_sort() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut base = tricky_strings();
        base.extend(random_dataset(&mut rng, 200));
        let mut expected = base.clone();
        expected.sort();
        let mut cmp_count = 0u64;

        let mut arr = base.clone();
        standard_merge_sort(&mut arr, &mut cmp_count);
        assert_eq!(arr, expected);

        let mut arr = base.clone();
        standard_quick_sort(&mut arr, &mut cmp_count);
        assert_eq!(arr, expected);

        let mut arr = base.clone();
        custom_merge_sort(&mut arr, &mut cmp_count);
        assert_eq!(arr, expected);

        let mut arr = base.clone();
        custom_quick_sort(&mut arr, &mut cmp_count, &mut rng);
        assert_eq!(arr, expected);

        let mut arr = base.clone();
        msd_radix_sort(&mut arr, &mut cmp_count);
        assert_eq!(arr, expected);

        let mut arr = base.clone();
        radix_quick_sort(&mut arr, &mut cmp_count, &mut rng);
        assert_eq!(arr, expected);

        assert!(cmp_count > 0);
    }

    #[test]
    fn sorts_handle_trivial_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut cmp_count = 0u64;
        let mut empty: Vec<String> = Vec::new();
        let mut single = vec![String::from("only")];
        standard_merge_sort(&mut empty, &mut cmp_count);
        standard_quick_sort(&mut empty, &mut cmp_count);
        custom_merge_sort(&mut empty, &mut cmp_count);
        custom_quick_sort(&mut empty, &mut cmp_count, &mut rng);
        msd_radix_sort(&mut empty, &mut cmp_count);
        radix_quick_sort(&mut empty, &mut cmp_count, &mut rng);
        standard_merge_sort(&mut single, &mut cmp_count);
        custom_quick_sort(&mut single, &mut cmp_count, &mut rng);
        msd_radix_sort(&mut single, &mut cmp_count);
        assert!(empty.is_empty());
        assert_eq!(single, vec![String::from("only")]);
        assert_eq!(cmp_count, 0);
    }

    #[test]
    fn measure_counts_comparisons() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = random_dataset(&mut rng, 64);
        let measures = measure_all(&data, &mut rng);
        for m in measures.iter() {
            assert!(m.comparisons > 0);
        }
    }

    #[test]
    fn random_dataset_respects_alphabet_and_lengths() {
        let mut rng = StdRng::seed_from_u64(11);
        let set = random_dataset(&mut rng, 50);
        assert_eq!(set.len(), 50);
        for s in set.iter() {
            assert!(s.len() >= MIN_STR_LEN && s.len() <= MAX_STR_LEN);
            assert!(s.bytes().all(|b| VALID_CHARS.contains(&b)));
        }
    }

    #[test]
    fn reverse_dataset_is_descending() {
        let mut rng = StdRng::seed_from_u64(13);
        let set = reverse_sorted_dataset(&mut rng, 40);
        set.windows(2).for_each(|w| assert!(w[0] >= w[1]));
    }

    #[test]
    fn nearly_sorted_dataset_is_mostly_ordered() {
        let mut rng = StdRng::seed_from_u64(17);
        let size = 60;
        let set = nearly_sorted_dataset(&mut rng, size);
        assert_eq!(set.len(), size);
        let descents = set.windows(2).filter(|w| w[0] > w[1]).count();
        // each of the size/20 swaps can disturb at most four adjacent pairs
        assert!(descents <= 4 * (size / 20));
    }

    #[test]
    fn prefix_dataset_covers_all_slots() {
        let mut rng = StdRng::seed_from_u64(19);
        let set = prefix_dataset(&mut rng, 80);
        assert_eq!(set.len(), 80);
        for s in set.iter() {
            assert!(s.len() >= 10);
        }
    }

    #[test]
    fn csv_round_trip() {
        std::fs::create_dir_all("./test").unwrap();
        let table = small_table();
        table.to_csv("./test/round_trip.csv");
        let back = BenchTable::from_csv("./test/round_trip.csv");
        assert_eq!(back.size, table.size);
        assert_eq!(back.dataset, table.dataset);
        assert_eq!(back.series, table.series);
    }

    #[test]
    fn unique_datasets_keep_first_appearance_order() {
        let table = small_table();
        assert_eq!(
            table.unique_datasets(),
            vec![String::from("Random"), String::from("Prefix")]
        );
    }

    #[test]
    fn subset_filters_rows() {
        let table = small_table();
        let sub = table.subset("Prefix");
        assert_eq!(sub.size, vec![100, 200]);
        assert!(sub.dataset.iter().all(|d| d == "Prefix"));
        assert_eq!(sub.series.len(), 2);
    }

    #[test]
    fn from_csv_loads_bad_measurements_as_nan() {
        std::fs::create_dir_all("./test").unwrap();
        let content = format!("{}\n100,Random,1,2,oops,4,5,6\n", CSV_HEADER);
        std::fs::write("./test/bad_value.csv", content).unwrap();
        let table = BenchTable::from_csv("./test/bad_value.csv");
        assert_eq!(table.size, vec![100]);
        assert!(table.series[0][2].is_nan());
        assert_eq!(table.series[0][5], 6.);
    }

    #[test]
    fn one_chart_per_dataset_type() {
        std::fs::create_dir_all("./test").unwrap();
        let mut table = BenchTable::new(6);
        for (i, dataset) in ["Random", "Reverse", "Prefix"].iter().enumerate() {
            for (k, size) in [100u64, 200].iter().enumerate() {
                table.size.push(*size);
                table.dataset.push(dataset.to_string());
                let base = (i * 100 + k * 10) as f64;
                table
                    .series
                    .push([base, base + 1., base + 2., base + 3., base + 4., base + 5.]);
            }
        }
        table.to_csv("./test/fanout.csv");
        let outdir = Path::new("./test/fanout_plots");
        let _ = std::fs::remove_dir_all(outdir);
        plot_per_dataset(Path::new("./test/fanout.csv"), outdir, "Execution Time (μs)").unwrap();
        let mut names: Vec<String> = std::fs::read_dir(outdir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                String::from("execution time_prefix.png"),
                String::from("execution time_random.png"),
                String::from("execution time_reverse.png"),
            ]
        );
    }

    #[test]
    fn plot_refuses_an_empty_table() {
        let table = BenchTable::new(0);
        let res = table.plot_series(
            "./test/empty.png",
            "Comparison Count",
            "Performance (None Dataset)",
        );
        assert!(res.is_err());
    }

    #[test]
    fn bench_and_plot_pipeline() {
        let mut rng = StdRng::seed_from_u64(23);
        std::fs::create_dir_all("./test").unwrap();
        let mut table = BenchTable::new(8);
        for &size in [30usize, 60].iter() {
            let datasets: Vec<(&str, Vec<String>)> = vec![
                ("Random", random_dataset(&mut rng, size)),
                ("Reverse", reverse_sorted_dataset(&mut rng, size)),
                ("NearlySorted", nearly_sorted_dataset(&mut rng, size)),
                ("Prefix", prefix_dataset(&mut rng, size)),
            ];
            for (label, data) in datasets.iter() {
                let measures = measure_all(data, &mut rng);
                table.size.push(size as u64);
                table.dataset.push(label.to_string());
                table.series.push(measures.map(|m| m.comparisons as f64));
            }
        }
        println!("{}", table);
        table.to_csv("./test/pipeline.csv");
        plot_per_dataset(
            Path::new("./test/pipeline.csv"),
            Path::new("./test/pipeline_plots"),
            "Comparison Count",
        )
        .unwrap();
        let count = std::fs::read_dir("./test/pipeline_plots").unwrap().count();
        assert_eq!(count, 4);
    }
}
