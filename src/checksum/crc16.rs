// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CRC-16/AX.25: the reflected CRC-CCITT variant used for the AX.25 frame check sequence.

/// The residue of `crc_ax25` over `data || fcs(data)` for a frame that passed the check.
pub const CRC_AX25_MAGIC: u16 = 0xf0b8;

/// Computes the raw CRC-16/AX.25 register over `data`.
///
/// Bit-reflected, polynomial `0x8408`, initialized to `0xffff`. No final XOR is applied here —
/// callers transmitting a frame XOR the result with `0xffff` themselves to form the FCS, and
/// callers validating a received frame compare the raw register against [`CRC_AX25_MAGIC`].
pub fn crc_ax25(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xffff;

    for &byte in data {
        for j in 0..8 {
            let bit = (byte >> j) & 1;
            // `0x8408 & -((crc & 1) ^ bit)`: the XOR selects whether the polynomial is folded in.
            let mask = if (crc & 1) as u8 ^ bit == 1 {
                0x8408
            } else {
                0
            };
            crc = (crc >> 1) ^ mask;
        }
    }

    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_frame_has_magic_residue() {
        let payload: [u8; 16] = [
            0xff, 0xff, 0x1f, 0xf0, 0xff, 0xbf, 0xef, 0x00, 0xff, 0xff, 0xff, 0xff, 0x00, 0x01,
            0x23, 0x88,
        ];

        let crc = crc_ax25(&payload) ^ 0xffff;
        let fcs = [(crc & 0xff) as u8, (crc >> 8) as u8];

        let mut framed = payload.to_vec();
        framed.extend_from_slice(&fcs);

        assert_eq!(crc_ax25(&framed), CRC_AX25_MAGIC);
    }

    #[test]
    fn empty_input_leaves_the_register_at_its_initial_value() {
        assert_eq!(crc_ax25(&[]), 0xffff);
    }
}
