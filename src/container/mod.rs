// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `container` module provides the small set of generic data structures the rest of the
//! crate is built on: a fixed-capacity overwriting ring, a growable append-only block, a linked
//! queue, and a fixed-coefficient dot product.

mod block;
mod dotprod;
mod queue;
mod ring;

pub use block::Block;
pub use dotprod::{Conjugate, Dotprod};
pub use queue::Queue;
pub use ring::Ring;
