// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bit-stuffing AX.25 frame assembly.

use crate::bitpack::unpack_rl;
use crate::checksum::crc_ax25;
use crate::container::Block;

const AX25_FLAG: u8 = 0x7e;
const MAX_AX25_BYTES: usize = 412;

/// Assembles bit-stuffed AX.25 frames (flags, FCS, padding) from packed payload bytes.
pub struct Ax25Framer {
    padding: usize,
    ones: u32,
    frame: Block<u8>,
}

impl Ax25Framer {
    pub fn new(padding: usize) -> Self {
        Self {
            padding,
            ones: 0,
            frame: Block::new(8 * MAX_AX25_BYTES),
        }
    }

    fn insert_pad(&mut self) {
        for _ in 0..self.padding {
            self.frame.push(0);
        }
    }

    fn insert_flag(&mut self) {
        for i in 0..8 {
            self.frame.push((AX25_FLAG >> i) & 1);
        }
    }

    fn push_stuffed(&mut self, bit: u8) {
        self.frame.push(bit);
        self.ones = if bit & 1 == 1 { self.ones + 1 } else { 0 };

        if self.ones == 5 {
            self.frame.push(0);
            self.ones = 0;
        }
    }

    /// Frames `data` (payload bytes, FCS computed here) into a bit-stuffed bitstream.
    /// Call [`Ax25Framer::read`] afterward to retrieve it.
    pub fn process(&mut self, data: &[u8]) {
        self.frame.clear();
        self.ones = 0;

        let crc = crc_ax25(data) ^ 0xffff;
        let crc_bytes = [(crc & 0x00ff) as u8, ((crc & 0xff00) >> 8) as u8];

        self.insert_pad();
        self.insert_flag();

        for &byte in data.iter().chain(crc_bytes.iter()) {
            for bit in unpack_rl(byte) {
                self.push_stuffed(bit);
            }
        }

        self.insert_flag();
        self.insert_pad();
    }

    /// The most recently framed bitstream.
    pub fn read(&self) -> &[u8] {
        self.frame.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitpack::pack_rl;

    #[test]
    fn frame_starts_and_ends_with_the_flag_after_padding() {
        let mut framer = Ax25Framer::new(2);
        framer.process(&[0xaa]);

        let bits = framer.read();
        assert_eq!(&bits[0..2], &[0, 0]);

        let flag: [u8; 8] = bits[2..10].try_into().unwrap();
        assert_eq!(pack_rl(&flag), AX25_FLAG);

        let tail_flag: [u8; 8] = bits[bits.len() - 2 - 8..bits.len() - 2].try_into().unwrap();
        assert_eq!(pack_rl(&tail_flag), AX25_FLAG);
        assert_eq!(&bits[bits.len() - 2..], &[0, 0]);
    }

    #[test]
    fn stuffs_a_zero_after_five_consecutive_ones() {
        let mut framer = Ax25Framer::new(0);
        // 0xFF 0xFF as payload guarantees a long run of set bits in the body.
        framer.process(&[0xff, 0xff]);
        let bits = framer.read();

        // skip the opening flag (8 bits); the body should show a stuffed 0 after 5 ones.
        let body = &bits[8..];
        let mut ones = 0;
        let mut saw_stuffed_zero = false;
        for &b in &body[..40] {
            if b == 1 {
                ones += 1;
                if ones == 5 {
                    saw_stuffed_zero = false;
                }
            } else {
                if ones == 5 {
                    saw_stuffed_zero = true;
                }
                ones = 0;
            }
        }
        assert!(saw_stuffed_zero);
    }
}
