// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pseudorandom bit sequences: a maximal-length LFSR and the scramblers built on it.

mod lfsr;
mod scrambler;

pub use lfsr::Lfsr;
pub use scrambler::{AddScrambler, MultDescrambler, MultScrambler};
