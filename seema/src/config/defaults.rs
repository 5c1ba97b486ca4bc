//! Default value functions for serde deserialization.

use crate::frontier::Algorithm;

pub fn algorithm() -> Algorithm {
    Algorithm::Wfd
}

pub fn max_frontiers() -> usize {
    50
}

pub fn min_size() -> f32 {
    2.0
}

pub fn max_size() -> f32 {
    30.0
}

pub fn min_distance() -> f32 {
    1.6
}

pub fn max_distance() -> f32 {
    50.0
}

pub fn enabled() -> bool {
    true
}

pub fn max_iterations() -> usize {
    100_000
}
