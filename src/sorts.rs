use rand::Rng;
use std::cmp::Ordering;
use std::time::Instant;

pub const RADIX_ALPHABET: usize = 256;
pub const RADIX_QUICK_CUTOFF: usize = 74;

/// Elapsed microseconds and comparison count for one sorting run.
#[derive(Debug, Clone, Copy)]
pub struct Measure {
    pub micros: u64,
    pub comparisons: u64,
}

fn merge(arr: &mut [String], l: usize, m: usize, r: usize, cmp_count: &mut u64) {
    let left: Vec<String> = arr[l..=m].to_vec();
    let right: Vec<String> = arr[m + 1..=r].to_vec();
    let mut i = 0;
    let mut j = 0;
    let mut k = l;
    while i < left.len() && j < right.len() {
        *cmp_count += 1;
        if left[i] <= right[j] {
            arr[k] = left[i].clone();
            i += 1;
        } else {
            arr[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        arr[k] = left[i].clone();
        i += 1;
        k += 1;
    }
    while j < right.len() {
        arr[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}

fn merge_sort_range(arr: &mut [String], l: usize, r: usize, cmp_count: &mut u64) {
    if l >= r {
        return;
    }
    let m = l + (r - l) / 2;
    merge_sort_range(arr, l, m, cmp_count);
    merge_sort_range(arr, m + 1, r, cmp_count);
    merge(arr, l, m, r, cmp_count);
}

/// Top-down merge sort, counting the whole-string comparisons of the merges.
pub fn standard_merge_sort(arr: &mut [String], cmp_count: &mut u64) {
    if arr.len() < 2 {
        return;
    }
    merge_sort_range(arr, 0, arr.len() - 1, cmp_count);
}

fn partition(arr: &mut [String], low: usize, high: usize, cmp_count: &mut u64) -> usize {
    let pivot = arr[high].clone();
    let mut i = low;
    for j in low..high {
        *cmp_count += 1;
        if arr[j] <= pivot {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}

fn quick_sort_range(arr: &mut [String], low: usize, high: usize, cmp_count: &mut u64) {
    if low >= high {
        return;
    }
    let pi = partition(arr, low, high, cmp_count);
    if pi > 0 {
        quick_sort_range(arr, low, pi - 1, cmp_count);
    }
    quick_sort_range(arr, pi + 1, high, cmp_count);
}

/// Quicksort with a Lomuto partition on the last element,
/// counting the whole-string comparisons.
pub fn standard_quick_sort(arr: &mut [String], cmp_count: &mut u64) {
    if arr.len() < 2 {
        return;
    }
    quick_sort_range(arr, 0, arr.len() - 1, cmp_count);
}

#[derive(Debug, Clone)]
struct LcpString {
    s: String,
    lcp: usize,
}

/// Compare two strings starting from a known shared depth.
/// Return the ordering and the index reached by the comparison,
/// counting one comparison per inspected character plus one
/// for the exhaustion check.
fn compare_from(a: &str, b: &str, depth: usize, cmp_count: &mut u64) -> (Ordering, usize) {
    let ab = a.as_bytes();
    let bb = b.as_bytes();
    let mut i = depth;
    while i < ab.len() && i < bb.len() {
        *cmp_count += 1;
        if ab[i] != bb[i] {
            let ord = if ab[i] < bb[i] {
                Ordering::Less
            } else {
                Ordering::Greater
            };
            return (ord, i);
        }
        i += 1;
    }
    *cmp_count += 1;
    if i == ab.len() && i == bb.len() {
        (Ordering::Equal, i)
    } else if i == ab.len() {
        (Ordering::Less, i)
    } else {
        (Ordering::Greater, i)
    }
}

fn merge_lcp(arr: &mut [LcpString], left: usize, mid: usize, right: usize, cmp_count: &mut u64) {
    let mut left_part: Vec<LcpString> = arr[left..=mid].to_vec();
    let mut right_part: Vec<LcpString> = arr[mid + 1..=right].to_vec();
    let mut i = 0;
    let mut j = 0;
    let mut k = left;
    while i < left_part.len() && j < right_part.len() {
        if left_part[i].lcp > right_part[j].lcp {
            arr[k] = left_part[i].clone();
            i += 1;
        } else if left_part[i].lcp < right_part[j].lcp {
            arr[k] = right_part[j].clone();
            j += 1;
        } else {
            // equal lcp against the common ancestor, compare from that depth
            // and remember what the loser learned about the winner
            let (ord, new_lcp) =
                compare_from(&left_part[i].s, &right_part[j].s, left_part[i].lcp, cmp_count);
            if ord == Ordering::Less {
                arr[k] = left_part[i].clone();
                i += 1;
                right_part[j].lcp = new_lcp;
            } else {
                arr[k] = right_part[j].clone();
                j += 1;
                left_part[i].lcp = new_lcp;
            }
        }
        k += 1;
    }
    while i < left_part.len() {
        arr[k] = left_part[i].clone();
        i += 1;
        k += 1;
    }
    while j < right_part.len() {
        arr[k] = right_part[j].clone();
        j += 1;
        k += 1;
    }
}

fn merge_sort_lcp(arr: &mut [LcpString], left: usize, right: usize, cmp_count: &mut u64) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_sort_lcp(arr, left, mid, cmp_count);
    merge_sort_lcp(arr, mid + 1, right, cmp_count);
    merge_lcp(arr, left, mid, right, cmp_count);
}

/// Merge sort over entries that cache the longest common prefix
/// learned by their last comparison, counting character comparisons.
pub fn custom_merge_sort(arr: &mut [String], cmp_count: &mut u64) {
    if arr.len() < 2 {
        return;
    }
    let mut entries: Vec<LcpString> = arr
        .iter()
        .map(|s| LcpString { s: s.clone(), lcp: 0 })
        .collect();
    let last = entries.len() - 1;
    merge_sort_lcp(&mut entries, 0, last, cmp_count);
    for (slot, entry) in arr.iter_mut().zip(entries.into_iter()) {
        *slot = entry.s;
    }
}

/// Move the strings exhausted at this depth to the front of the range,
/// returning the index of the first longer string.
fn group_exhausted(arr: &mut [String], left: usize, right: usize, depth: usize) -> usize {
    let mut pivot_pos = left;
    for i in left..=right {
        if arr[i].len() == depth {
            arr.swap(pivot_pos, i);
            pivot_pos += 1;
        }
    }
    pivot_pos
}

fn ternary_quick_range(
    arr: &mut [String],
    left: usize,
    right: usize,
    depth: usize,
    cmp_count: &mut u64,
    rng: &mut impl Rng,
) {
    if left >= right {
        return;
    }
    let pivot_pos = group_exhausted(arr, left, right, depth);
    if pivot_pos > right {
        return;
    }
    let swap_with = rng.gen_range(pivot_pos..=right);
    arr.swap(pivot_pos, swap_with);
    let pivot = arr[pivot_pos].as_bytes()[depth];
    let mut lt = pivot_pos;
    let mut gt = right;
    let mut i = pivot_pos + 1;
    while i <= gt {
        *cmp_count += 1;
        let c = arr[i].as_bytes()[depth];
        if c < pivot {
            arr.swap(lt, i);
            lt += 1;
            i += 1;
        } else if c > pivot {
            arr.swap(i, gt);
            gt -= 1;
        } else {
            i += 1;
        }
    }
    if lt > 0 {
        ternary_quick_range(arr, left, lt - 1, depth, cmp_count, rng);
    }
    ternary_quick_range(arr, lt, gt, depth + 1, cmp_count, rng);
    ternary_quick_range(arr, gt + 1, right, depth, cmp_count, rng);
}

/// Ternary string quicksort on the character at the current depth,
/// with a uniformly random pivot, counting character comparisons.
pub fn custom_quick_sort(arr: &mut [String], cmp_count: &mut u64, rng: &mut impl Rng) {
    if arr.len() < 2 {
        return;
    }
    ternary_quick_range(arr, 0, arr.len() - 1, 0, cmp_count, rng);
}

/// 256-way counting pass: distribute arr[first_long..=right] by the byte
/// at depth and return the per-byte segment offsets (prefix sums).
fn radix_distribute(
    arr: &mut [String],
    first_long: usize,
    right: usize,
    depth: usize,
    cmp_count: &mut u64,
) -> Vec<usize> {
    let mut count = vec![0usize; RADIX_ALPHABET + 1];
    for i in first_long..=right {
        *cmp_count += 1;
        count[arr[i].as_bytes()[depth] as usize + 1] += 1;
    }
    for c in 1..=RADIX_ALPHABET {
        count[c] += count[c - 1];
    }
    let mut pos = count[..RADIX_ALPHABET].to_vec();
    let mut temp = vec![String::new(); right - first_long + 1];
    for i in first_long..=right {
        *cmp_count += 1;
        let c = arr[i].as_bytes()[depth] as usize;
        temp[pos[c]] = std::mem::take(&mut arr[i]);
        pos[c] += 1;
    }
    for (i, s) in temp.into_iter().enumerate() {
        arr[first_long + i] = s;
    }
    count
}

fn msd_radix_range(arr: &mut [String], left: usize, right: usize, depth: usize, cmp_count: &mut u64) {
    if left >= right {
        return;
    }
    let first_long = group_exhausted(arr, left, right, depth);
    if first_long > right {
        return;
    }
    let count = radix_distribute(arr, first_long, right, depth, cmp_count);
    for c in 0..RADIX_ALPHABET {
        if count[c + 1] > count[c] {
            msd_radix_range(
                arr,
                first_long + count[c],
                first_long + count[c + 1] - 1,
                depth + 1,
                cmp_count,
            );
        }
    }
}

/// MSD radix sort with 256-way counting passes,
/// counting the per-element inspections and placements of each pass.
pub fn msd_radix_sort(arr: &mut [String], cmp_count: &mut u64) {
    if arr.len() < 2 {
        return;
    }
    msd_radix_range(arr, 0, arr.len() - 1, 0, cmp_count);
}

fn radix_quick_range(
    arr: &mut [String],
    left: usize,
    right: usize,
    depth: usize,
    cmp_count: &mut u64,
    rng: &mut impl Rng,
) {
    if left >= right {
        return;
    }
    if right - left + 1 < RADIX_QUICK_CUTOFF {
        ternary_quick_range(arr, left, right, depth, cmp_count, rng);
        return;
    }
    let first_long = group_exhausted(arr, left, right, depth);
    if first_long > right {
        return;
    }
    let count = radix_distribute(arr, first_long, right, depth, cmp_count);
    for c in 0..RADIX_ALPHABET {
        if count[c + 1] > count[c] {
            radix_quick_range(
                arr,
                first_long + count[c],
                first_long + count[c + 1] - 1,
                depth + 1,
                cmp_count,
                rng,
            );
        }
    }
}

/// MSD radix sort that hands segments shorter than the cutoff
/// to the ternary string quicksort at the current depth.
pub fn radix_quick_sort(arr: &mut [String], cmp_count: &mut u64, rng: &mut impl Rng) {
    if arr.len() < 2 {
        return;
    }
    radix_quick_range(arr, 0, arr.len() - 1, 0, cmp_count, rng);
}

/// Run the given sort over a clone of the data under a monotonic clock.
pub fn measure<F>(data: &[String], sort: F) -> Measure
where
    F: FnOnce(&mut [String], &mut u64),
{
    let mut arr = data.to_vec();
    let mut comparisons: u64 = 0;
    let start = Instant::now();
    sort(&mut arr, &mut comparisons);
    let micros = start.elapsed().as_micros() as u64;
    Measure {
        micros,
        comparisons,
    }
}

/// All six variants over the same input, in results-column order.
pub fn measure_all(data: &[String], rng: &mut impl Rng) -> [Measure; 6] {
    [
        measure(data, |a, c| standard_merge_sort(a, c)),
        measure(data, |a, c| standard_quick_sort(a, c)),
        measure(data, |a, c| custom_merge_sort(a, c)),
        measure(data, |a, c| custom_quick_sort(a, c, rng)),
        measure(data, |a, c| msd_radix_sort(a, c)),
        measure(data, |a, c| radix_quick_sort(a, c, rng)),
    ]
}
