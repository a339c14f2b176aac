// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! AX.25 frame assembly and disassembly: flags, bit-stuffing, and FCS validation.

mod deframer;
mod framer;

pub use deframer::Ax25Deframer;
pub use framer::Ax25Framer;
