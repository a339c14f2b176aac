// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DSP and link-layer building blocks for AX.25/AFSK-class amateur radio data links.
//!
//! The crate is organized leaves-first: [`container`], [`bitpack`] and [`checksum`] are used by
//! everything above them; [`math`] underlies [`iir`]; [`iir`] and [`container`] underlie
//! [`modem`]; [`container`], [`bitpack`] and [`checksum`] underlie [`ax25`].

pub mod ax25;
pub mod bitpack;
pub mod checksum;
pub mod container;
pub mod iir;
pub mod math;
pub mod modem;
pub mod sequence;
