// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Symbol-timing recovery shared by the BFSK and FSK96 demodulators.
//!
//! Both demodulators reduce each windowed sample to a single polarity bit and then run the
//! identical NRZI timing-recovery state machine over that bit stream; this is the part they
//! share.

pub(super) struct TimingRecovery {
    samp_sym: usize,
    diff: u32,
    timer: usize,
    past: bool,
}

impl TimingRecovery {
    pub(super) fn new(samp_sym: usize) -> Self {
        Self {
            samp_sym,
            diff: 0,
            timer: 0,
            past: false,
        }
    }

    /// Feeds one symbol-polarity decision; returns the decoded bit, if a decision boundary was
    /// reached on this sample.
    pub(super) fn step(&mut self, symbol: bool) -> Option<u8> {
        self.timer += 1;

        if symbol != self.past {
            self.diff = 1;
            self.past = symbol;
            self.timer = self.samp_sym / 2 + self.samp_sym + 1;
        }

        if self.timer >= 2 * self.samp_sym {
            let bit = (self.diff == 0) as u8;
            self.timer = self.samp_sym;
            self.diff = 0;
            return Some(bit);
        }

        None
    }
}
