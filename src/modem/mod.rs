// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Continuous-phase BFSK and baseband FSK96 modems for amateur-radio-class data links.

mod bfsk;
mod fsk96;
mod timing;

pub use bfsk::{BfskDemodulator, BfskModulator, BfskParams};
pub use fsk96::{Fsk96Demodulator, Fsk96Modulator};
