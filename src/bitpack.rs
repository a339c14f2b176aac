// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Packing and unpacking bytes to and from arrays of `0`/`1` bits, in the two bit orderings the
//! AX.25 framer and deframer need.

/// Packs 8 bits into a byte with `bits[0]` as the MSB.
///
/// `[0, 0, 0, 0, 1, 1, 1, 1] -> 0b0000_1111`
pub fn pack_lr(bits: &[u8; 8]) -> u8 {
    let mut result = 0u8;
    for (i, &bit) in bits.iter().enumerate() {
        result |= (bit & 1) << (7 - i);
    }
    result
}

/// Inverts [`pack_lr`].
pub fn unpack_lr(byte: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> (7 - i)) & 1;
    }
    bits
}

/// Packs 8 bits into a byte with `bits[0]` as the LSB.
///
/// `[0, 0, 0, 0, 1, 1, 1, 1] -> 0b1111_0000`
pub fn pack_rl(bits: &[u8; 8]) -> u8 {
    let mut result = 0u8;
    for (i, &bit) in bits.iter().enumerate() {
        result |= (bit & 1) << i;
    }
    result
}

/// Inverts [`pack_rl`].
pub fn unpack_rl(byte: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> i) & 1;
    }
    bits
}
