use getrandom::getrandom;
use oorandom::Rand64;

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

/// Reads a fresh seed from the operating system.
pub fn os_random_seed() -> Result<u128, getrandom::Error> {
    let mut buf = [0; 16];
    getrandom(&mut buf)?;
    Ok(u128::from_le_bytes(buf))
}

/// Returns a uniformly distributed float in [0, 1).
pub fn chance(rng: &mut Rand64) -> f64 {
    rng.rand_float()
}

/// Returns a uniformly distributed node id in [0, upper).
/// `upper` has to be positive.
pub fn node(rng: &mut Rand64, upper: usize) -> usize {
    rng.rand_range(0..upper as u64) as usize
}
