/* This file is part of balloon-hash.
 *
 * balloon-hash is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * balloon-hash is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with balloon-hash.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Balloon memory-hard password hashing (Boneh, Corrigan-Gibbs, Schechter
//! 2016): a three-phase (expand, mix, extract) construction over a chosen
//! cryptographic digest, a parallel M-core variant that combines several
//! independent instances, and a constant-time verification primitive.
//!
//! ```
//! use balloon_hash::{balloon_hash, verify};
//!
//! let digest = balloon_hash(b"correct horse battery staple", b"some-salt").unwrap();
//! assert!(verify(&digest, b"correct horse battery staple", b"some-salt", 16, 20, 4).unwrap());
//! ```
//!
//! This crate implements only the hashing kernel: callers are responsible for
//! generating salts and for any on-disk encoding of parameters alongside the
//! digest.

#![deny(clippy::all)]
#![deny(clippy::pedantic)]

// TODO: Clean up some or all of these exceptions
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod algorithm;
mod balloon;
mod balloon_m;
mod block;
mod ct;
mod error;
mod expand;
mod mix;
mod params;

pub use algorithm::{Algorithm, HashArg, HashPrimitive};
pub use balloon::{
    balloon, balloon_hash, verify, BalloonHasher, DEFAULT_DELTA, FRIENDLY_DELTA, FRIENDLY_PARALLEL_COST,
    FRIENDLY_SPACE_COST, FRIENDLY_TIME_COST,
};
pub use balloon_m::{balloon_m, balloon_m_hash, verify_m};
pub use block::{xor, Block};
pub use error::BalloonError;
