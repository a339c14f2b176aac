// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A baseband FSK line code (real-valued sibling of [`super::BfskModulator`]): no carrier, a
//! constant level per symbol and an integrate-and-dump demodulator.

use super::timing::TimingRecovery;
use crate::container::{Block, Ring};

/// A baseband FSK modulator. NRZI differential coding identical to [`super::bfsk::BfskModulator`];
/// each symbol is a constant level held for `samp_sym` samples.
pub struct Fsk96Modulator {
    samp_sym: usize,
    past: bool,
}

impl Fsk96Modulator {
    pub fn new(samp_sym: usize) -> Self {
        Self {
            samp_sym,
            past: false,
        }
    }

    /// Modulates a single NRZI-coded bit into `samp_sym` constant-level samples.
    pub fn execute(&mut self, bit: u8) -> Vec<f32> {
        if bit == 0 {
            self.past = !self.past;
        }
        let level = (2 * self.past as i32 - 1) as f32 / self.samp_sym as f32;
        vec![level; self.samp_sym]
    }

    pub fn process(&mut self, bits: &[u8]) -> Vec<f32> {
        bits.iter().flat_map(|&b| self.execute(b)).collect()
    }
}

/// A baseband FSK demodulator: integrate-and-dump in place of a matched filter, same timing
/// recovery as [`super::BfskDemodulator`].
pub struct Fsk96Demodulator {
    samp_sym: usize,
    window: Ring<f32>,
    timing: TimingRecovery,
    data: Block<u8>,
}

impl Fsk96Demodulator {
    pub fn new(samp_sym: usize) -> Self {
        Self {
            samp_sym,
            window: Ring::new(samp_sym),
            timing: TimingRecovery::new(samp_sym),
            data: Block::new(1024),
        }
    }

    pub fn process(&mut self, samples: &[f32]) {
        self.data.clear();

        for &sample in samples {
            self.window.push(sample);
            let window = self.window.read(self.samp_sym);

            let symbol = window.iter().sum::<f32>() > 0.0;
            if let Some(bit) = self.timing.step(symbol) {
                self.data.push(bit);
            }
        }
    }

    pub fn read(&self) -> &[u8] {
        self.data.as_slice()
    }
}
