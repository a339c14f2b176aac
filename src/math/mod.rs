// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Complex arithmetic and polynomial root finding underlying the IIR cascade designer.

mod complex;
mod madsen;
mod sort;

pub use complex::Complex32;
pub use madsen::solve_madsen;
pub use sort::{pair_zeros_to_poles, sort_poles, CascadeOrder};
