use std::{error::Error, fmt};

/// Derive the chart file name from the metric label and the dataset type:
/// the label segment before any parenthesis, trimmed and lowercased,
/// then the lowercased dataset type.
pub fn plot_filename(ylabel: &str, dataset: &str) -> String {
    let metric = ylabel.split('(').next().unwrap().trim().to_lowercase();
    format!("{}_{}.png", metric, dataset.to_lowercase())
}

pub fn min_and_max<'a, I, T>(mut s: I) -> (T, T)
where
    I: Iterator<Item = &'a T>,
    T: 'a + std::cmp::PartialOrd + Clone,
{
    let (mut min, mut max) = match s.next() {
        Some(v) => (v, v),
        None => panic!("could not iterate over slice"),
    };
    for es in s {
        if es > max {
            max = es
        } else if es < min {
            min = es
        }
    }
    return (min.clone(), max.clone());
}

// An Error type for handling length requirements,
// here mainly that a chart needs at least one table row.
#[derive(Debug)]
pub struct LenErr {
    pub min_len: Option<usize>,
    pub got_len: usize,
    pub max_len: Option<usize>,
}
impl Error for LenErr {}
impl fmt::Display for LenErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid length, got {}, required is >= {:?} and <= {:?}",
            self.got_len, self.min_len, self.max_len
        )
    }
}
