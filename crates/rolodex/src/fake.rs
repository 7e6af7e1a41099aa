//! Synthetic users for demos and tests.
//!
//! Generation is driven by a seeded [`StdRng`], so the same seed always
//! yields the same directory.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::user::User;

const FIRST_NAMES: &[&str] = &[
    "Anna", "Bence", "Csilla", "Dániel", "Eszter", "Ferenc", "Gábor", "Hannah", "Ilona", "János",
    "Katalin", "László", "Márta", "Nóra", "Olivér", "Péter", "Réka", "Sándor", "Tamás", "Zsófia",
    "Amelia", "Benjamin", "Chloe", "David", "Emma", "Felix", "Grace", "Henry", "Isla", "Jack",
    "Lucas", "Mia", "Noah", "Olivia", "Quinn", "Ruby", "Samuel", "Theo", "Violet", "William",
];

const CITIES: &[&str] = &[
    "Budapest", "Debrecen", "Szeged", "Miskolc", "Pécs", "Győr", "Vienna", "Prague", "Bratislava",
    "Kraków", "Warsaw", "Berlin", "Hamburg", "Munich", "Zürich", "Geneva", "Lyon", "Paris",
    "Lisbon", "Porto", "Madrid", "Seville", "Dublin", "Cork", "Edinburgh", "Oslo", "Bergen",
    "Helsinki", "Tallinn", "Riga",
];

// '#' is replaced by a random digit.
const PHONE_FORMATS: &[&str] = &[
    "###-###-####",
    "(###) ###-####",
    "+1 ### ### ####",
    "###.###.####",
    "+36 # ### ####",
];

/// Heights are drawn in hundredths within `[4.00, 7.00)`.
const HEIGHT_RANGE_CENTS: std::ops::Range<u32> = 400..700;

/// Generates `count` users with ids `0..count`.
pub fn fake_users(count: usize, seed: u64) -> Vec<User> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count as u64).map(|id| fake_user(&mut rng, id)).collect()
}

/// Generates one user with the given id.
pub fn fake_user<R: Rng>(rng: &mut R, id: u64) -> User {
    User {
        id,
        first_name: pick(rng, FIRST_NAMES).to_string(),
        city: pick(rng, CITIES).to_string(),
        phone_number: fake_phone(rng),
        height: fake_height(rng),
        married: rng.random_bool(0.5),
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

fn fake_phone<R: Rng>(rng: &mut R) -> String {
    pick(rng, PHONE_FORMATS)
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.random_range(0..10u8)),
            other => other,
        })
        .collect()
}

fn fake_height<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(HEIGHT_RANGE_CENTS) as f32 / 100.0
}
