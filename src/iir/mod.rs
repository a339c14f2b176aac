// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IIR filter design and execution as a cascade of second-order sections.

mod biquad;
mod cascade;

pub use biquad::Biquad;
pub use cascade::IirCascade;
