use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Generator for a chaos game. Without a seed one is drawn from process
/// entropy and logged so the run can be reproduced.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> Pcg64 {
    let seed = seed.unwrap_or_else(|| {
        let drawn = rand::random::<u64>();
        log::debug!("chaos game seeded from entropy: {}", drawn);
        drawn
    });

    Pcg64::seed_from_u64(seed)
}
