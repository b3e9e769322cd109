//! Default value functions for serde deserialization.

pub fn size() -> usize {
    9
}

pub fn start() -> [i32; 2] {
    [0, 0]
}

pub fn max_steps() -> usize {
    10_000
}

pub fn seed() -> u64 {
    0
}
