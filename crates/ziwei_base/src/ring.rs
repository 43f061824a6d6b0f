//! Twelve-slot palace ring arithmetic.
//!
//! Palaces are numbered from the Yin (寅) branch: ring index 0 = 寅,
//! 1 = 卯, ... 10 = 子, 11 = 丑. Every offset in the chart pipeline is
//! reduced with Euclidean remainder, so negative intermediates wrap back
//! into range and no input can overflow.

use crate::branch::EarthlyBranch;

/// Number of palaces on the ring.
pub const RING_SIZE: u8 = 12;

/// Normalize `i` into `[0, modulus)`.
///
/// `modulus` is clamped to at least 1.
pub fn fix_index(i: i64, modulus: u8) -> u8 {
    i.rem_euclid(i64::from(modulus.max(1))) as u8
}

/// Normalize `i` into `[0, 12)`.
pub fn fix12(i: i64) -> u8 {
    fix_index(i, RING_SIZE)
}

/// Ring index `offset` steps from `index`. Negative offsets walk backward.
pub fn jump(index: u8, offset: i64) -> u8 {
    fix12(i64::from(index % RING_SIZE) + offset.rem_euclid(12))
}

/// Palace directly across the ring.
pub fn opposite(index: u8) -> u8 {
    jump(index, 6)
}

/// Ring index of an earthly branch (寅 = 0).
pub fn branch_index(branch: EarthlyBranch) -> u8 {
    fix12(i64::from(branch.index()) - 2)
}

/// Earthly branch sitting at a ring index.
pub fn branch_at(index: u8) -> EarthlyBranch {
    EarthlyBranch::from_cyclic(i64::from(index % RING_SIZE) + 2)
}

/// Walk 12 positions from `start`, forward or backward.
pub fn walk(start: u8, forward: bool) -> [u8; 12] {
    let mut out = [0u8; 12];
    for (i, slot) in out.iter_mut().enumerate() {
        let step = i as i64;
        *slot = if forward {
            jump(start, step)
        } else {
            jump(start, -step)
        };
    }
    out
}
