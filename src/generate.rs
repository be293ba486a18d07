use rand::prelude::*;

/// Character pool for the generated strings, ASCII only.
pub const VALID_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#%:;^&*()-";

pub const MIN_STR_LEN: usize = 10;
pub const MAX_STR_LEN: usize = 200;

/// One random string with length uniform in [min_len, max_len].
pub fn random_string(rng: &mut impl Rng, min_len: usize, max_len: usize) -> String {
    let len = rng.gen_range(min_len..=max_len);
    let mut s = String::with_capacity(len);
    for _ in 0..len {
        s.push(VALID_CHARS[rng.gen_range(0..VALID_CHARS.len())] as char);
    }
    s
}

pub fn random_dataset(rng: &mut impl Rng, size: usize) -> Vec<String> {
    (0..size)
        .map(|_| random_string(rng, MIN_STR_LEN, MAX_STR_LEN))
        .collect()
}

pub fn reverse_sorted_dataset(rng: &mut impl Rng, size: usize) -> Vec<String> {
    let mut set = random_dataset(rng, size);
    set.sort();
    set.reverse();
    set
}

/// Sorted dataset disturbed by size/20 random pair swaps.
pub fn nearly_sorted_dataset(rng: &mut impl Rng, size: usize) -> Vec<String> {
    let mut set = random_dataset(rng, size);
    set.sort();
    if set.len() < 2 {
        return set;
    }
    for _ in 0..size / 20 {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        set.swap(a, b);
    }
    set
}

/// Ten groups of strings sharing a random common prefix (length 5 to 15)
/// followed by a random suffix (length 5 to 185), shuffled together.
pub fn prefix_dataset(rng: &mut impl Rng, size: usize) -> Vec<String> {
    let mut set = vec![String::new(); size];
    for i in 0..10 {
        let prefix = random_string(rng, 5, 15);
        for slot in set.iter_mut().take((i + 1) * size / 10).skip(i * size / 10) {
            *slot = format!("{}{}", prefix, random_string(rng, 5, 185));
        }
    }
    set.shuffle(rng);
    set
}
