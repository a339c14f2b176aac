// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Continuous-phase binary FSK modem (AFSK-1200-class), NRZI-coded, non-coherently demodulated.

use std::f32::consts::PI;

use super::timing::TimingRecovery;
use crate::container::{Block, Ring};
use crate::math::Complex32;

/// Configuration shared by [`BfskModulator`] and [`BfskDemodulator`].
#[derive(Copy, Clone, Debug)]
pub struct BfskParams {
    /// Samples generated per symbol.
    pub samp_sym: usize,
    /// Baud rate (symbols per second).
    pub baud: u32,
    /// Mark ("1") tone frequency, in Hz.
    pub mark_freq: f32,
    /// Space ("0") tone frequency, in Hz.
    pub space_freq: f32,
}

impl BfskParams {
    fn samp_rate(&self) -> f32 {
        self.samp_sym as f32 * self.baud as f32
    }
}

fn wrap_phase(mut phase: f32) -> f32 {
    while phase > 2.0 * PI {
        phase -= 2.0 * PI;
    }
    phase
}

/// A continuous-phase BFSK modulator with NRZI differential coding.
pub struct BfskModulator {
    samp_sym: usize,
    past: bool,
    phase: f32,
    mark_omega: f32,
    space_omega: f32,
}

impl BfskModulator {
    pub fn new(params: BfskParams) -> Self {
        let samp_rate = params.samp_rate();
        Self {
            samp_sym: params.samp_sym,
            past: false,
            phase: 0.0,
            mark_omega: 2.0 * PI * params.mark_freq / samp_rate,
            space_omega: 2.0 * PI * params.space_freq / samp_rate,
        }
    }

    /// Modulates a single NRZI-coded bit into `self.samp_sym` complex baseband samples.
    pub fn execute(&mut self, bit: u8) -> Vec<Complex32> {
        if bit == 0 {
            self.past = !self.past;
        }
        let omega = if self.past {
            self.mark_omega
        } else {
            self.space_omega
        };

        (0..self.samp_sym)
            .map(|_| {
                self.phase = wrap_phase(self.phase + omega);
                Complex32::cis(self.phase)
            })
            .collect()
    }

    /// Modulates a batch of bits, concatenating each bit's symbol samples.
    pub fn process(&mut self, bits: &[u8]) -> Vec<Complex32> {
        bits.iter().flat_map(|&b| self.execute(b)).collect()
    }
}

/// A non-coherent BFSK demodulator with matched-filter symbol detection and NRZI timing
/// recovery.
pub struct BfskDemodulator {
    samp_sym: usize,
    mark_filt: Vec<Complex32>,
    space_filt: Vec<Complex32>,
    window: Ring<Complex32>,
    timing: TimingRecovery,
    data: Block<u8>,
}

impl BfskDemodulator {
    pub fn new(params: BfskParams) -> Self {
        let samp_sym = params.samp_sym;
        let samp_rate = params.samp_rate();
        let mark_omega = 2.0 * PI * params.mark_freq / samp_rate;
        let space_omega = 2.0 * PI * params.space_freq / samp_rate;

        let mut mphase = 0.0;
        let mut sphase = 0.0;
        let mut mark_filt = Vec::with_capacity(samp_sym);
        let mut space_filt = Vec::with_capacity(samp_sym);
        for _ in 0..samp_sym {
            mphase = wrap_phase(mphase + mark_omega);
            sphase = wrap_phase(sphase + space_omega);
            mark_filt.push(Complex32::cis(-mphase));
            space_filt.push(Complex32::cis(-sphase));
        }

        Self {
            samp_sym,
            mark_filt,
            space_filt,
            window: Ring::new(samp_sym),
            timing: TimingRecovery::new(samp_sym),
            data: Block::new(1024),
        }
    }

    fn symbol_decision(&self, window: &[Complex32]) -> bool {
        let mark: Complex32 = window
            .iter()
            .zip(self.mark_filt.iter())
            .fold(Complex32::default(), |acc, (&w, &f)| acc + w * f);
        let space: Complex32 = window
            .iter()
            .zip(self.space_filt.iter())
            .fold(Complex32::default(), |acc, (&w, &f)| acc + w * f);

        mark.abs() > space.abs()
    }

    /// Feeds a batch of baseband samples through the demodulator. Clears the output block first;
    /// call [`BfskDemodulator::read`] afterward to retrieve decoded bits.
    pub fn process(&mut self, samples: &[Complex32]) {
        self.data.clear();

        for &sample in samples {
            self.window.push(sample);
            let window = self.window.read(self.samp_sym);

            let symbol = self.symbol_decision(&window);
            if let Some(bit) = self.timing.step(symbol) {
                self.data.push(bit);
            }
        }
    }

    /// The bits decoded by the most recent [`BfskDemodulator::process`] call.
    pub fn read(&self) -> &[u8] {
        self.data.as_slice()
    }
}
