use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::{DateTime, Datelike};

/// RFC 3339 timestamp stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year shown in the footer; falls back to 2025 if the stamp is unreadable.
pub fn build_year() -> i32 {
    year_of(BUILD_TIME).unwrap_or(2025)
}

fn year_of(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|t| t.year())
}

/// Seed for decorative randomness.
///
/// The server binary and the wasm bundle are compiled separately and may get
/// different `BUILD_TIME` stamps, so the seed only depends on the package
/// identity, which both share.
pub fn particle_seed() -> u64 {
    seed_of(concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION")))
}

fn seed_of(stamp: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    stamp.hash(&mut hasher);
    hasher.finish()
}
