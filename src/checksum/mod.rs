// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error-detecting codes used by the link layer.

mod crc16;

pub use crc16::{crc_ax25, CRC_AX25_MAGIC};
