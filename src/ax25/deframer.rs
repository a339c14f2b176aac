// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flag detection, bit-unstuffing and CRC validation of a received AX.25 bitstream.

use log::warn;

use crate::bitpack::pack_rl;
use crate::checksum::{crc_ax25, CRC_AX25_MAGIC};
use crate::container::{Block, Ring};

const AX25_FLAG: u8 = 0x7e;
const MAX_AX25_BYTES: usize = 412;
const MIN_AX25_BYTES: usize = 17;

#[derive(Copy, Clone, PartialEq, Eq)]
enum State {
    Detect,
    Decode,
}

/// Detects AX.25 flags in a received bitstream, accumulates a frame, unstuffs it, and validates
/// its CRC, invoking a callback once per complete frame.
pub struct Ax25Deframer {
    state: State,
    count: usize,
    window: Ring<u8>,
    data: Block<u8>,
}

impl Ax25Deframer {
    pub fn new() -> Self {
        Self {
            state: State::Detect,
            count: 0,
            window: Ring::new(8),
            data: Block::new(8 * MAX_AX25_BYTES),
        }
    }

    fn unstuff(&self) -> Vec<u8> {
        let size = self.data.nitems();
        assert!(
            size > 7,
            "unstuff: frame shorter than the trailing flag tail"
        );

        let bits = self.data.as_slice();
        let mut packed = Vec::with_capacity(size / 8);
        let mut buffer = Vec::with_capacity(8);
        let mut ones = 0u32;

        for &bit in &bits[..size - 7] {
            if ones < 5 {
                buffer.push(bit);
            }

            ones = if bit & 1 == 1 { ones + 1 } else { 0 };

            if buffer.len() == 8 {
                let byte: [u8; 8] = buffer[..8].try_into().unwrap();
                packed.push(pack_rl(&byte));
                buffer.clear();
            }
        }

        packed
    }

    /// Feeds one received bit through flag detection / frame accumulation, invoking `on_frame`
    /// once for each complete frame as `on_frame(valid, payload_including_fcs)`.
    pub fn process_bit(&mut self, bit: u8, mut on_frame: impl FnMut(bool, &[u8])) {
        self.window.push(bit);
        let window = self.window.read(8);
        let byte_window: [u8; 8] = window[..8].try_into().unwrap();
        let byte = pack_rl(&byte_window);

        match self.state {
            State::Detect => {
                if byte == AX25_FLAG {
                    self.state = State::Decode;
                    self.count = 0;
                    self.window.clear();
                }
            }
            State::Decode => {
                if self.count > 8 * MAX_AX25_BYTES {
                    warn!(
                        "ax25 deframer: frame exceeded {} bytes, dropping",
                        MAX_AX25_BYTES
                    );
                    self.state = State::Detect;
                    self.data.clear();
                } else if byte == AX25_FLAG {
                    self.state = State::Detect;

                    if self.count > MIN_AX25_BYTES {
                        let frame = self.unstuff();
                        let valid = crc_ax25(&frame) == CRC_AX25_MAGIC;
                        on_frame(valid, &frame);
                    }

                    self.data.clear();
                } else {
                    self.data.push(bit);
                    self.count += 1;
                }
            }
        }
    }

    /// Feeds a batch of bits through [`Ax25Deframer::process_bit`].
    pub fn process(&mut self, bits: &[u8], mut on_frame: impl FnMut(bool, &[u8])) {
        for &bit in bits {
            self.process_bit(bit, &mut on_frame);
        }
    }
}

impl Default for Ax25Deframer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ax25::Ax25Framer;

    #[test]
    fn round_trips_a_framed_payload() {
        let payload = b"CQ CQ DE W1AW TEST\x00\x01\x02".to_vec();

        let mut framer = Ax25Framer::new(8);
        framer.process(&payload);
        let bits = framer.read().to_vec();

        let mut deframer = Ax25Deframer::new();
        let mut received: Vec<(bool, Vec<u8>)> = Vec::new();
        deframer.process(&bits, |valid, frame| received.push((valid, frame.to_vec())));

        assert_eq!(received.len(), 1);
        let (valid, frame) = &received[0];
        assert!(*valid);
        assert_eq!(&frame[..frame.len() - 2], &payload[..]);
    }

    #[test]
    fn short_frames_are_dropped_without_invoking_the_callback() {
        // flag, two stray data bits, flag: `count` never climbs past MIN_AX25_BYTES before the
        // closing flag is recognized, so the frame is discarded silently.
        let flag = crate::bitpack::unpack_rl(AX25_FLAG);
        let mut bits = Vec::new();
        bits.extend_from_slice(&flag);
        bits.extend_from_slice(&[0, 0]);
        bits.extend_from_slice(&flag);

        let mut deframer = Ax25Deframer::new();
        let mut calls = 0;
        deframer.process(&bits, |_, _| calls += 1);

        assert_eq!(calls, 0);
    }
}
