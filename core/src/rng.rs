pub fn splitmix64(mut value: u64) -> u64 {
    value = value.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = value;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

pub fn rand_unit(seed: u64, salt: u64) -> f64 {
    let mixed = splitmix64(seed ^ salt);
    let top = mixed >> 11;
    top as f64 / ((1u64 << 53) as f64)
}

pub fn rand_range(seed: u64, salt: u64, min: f64, max: f64) -> f64 {
    min + (max - min) * rand_unit(seed, salt)
}

/// Uniform index in `[0, len)`. `rand_unit` is strictly below 1.0, so the
/// cast never reaches `len`.
pub fn rand_index(seed: u64, salt: u64, len: usize) -> usize {
    (rand_unit(seed, salt) * len as f64) as usize
}

/// Fisher-Yates, salted per step so one seed drives the whole permutation.
pub fn shuffle<T>(items: &mut [T], seed: u64) {
    for i in (1..items.len()).rev() {
        let salt = 0xC0DE_u64 + i as u64;
        let j = (rand_unit(seed, salt) * (i as f64 + 1.0)) as usize;
        items.swap(i, j);
    }
}
