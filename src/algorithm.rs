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

use digest::Digest;

/// The fixed set of underlying digests the hash primitive can be built over.
///
/// `Sha256` is what the "friendly" wrappers (`balloon_hash`, `balloon_m_hash`)
/// and the published test vectors use. The rest are available for callers
/// who construct a [`crate::BalloonHasher`] directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2s256,
    Blake2b512,
}

impl Algorithm {
    /// `H_LEN`: the number of bytes a [`Block`](crate::block::Block) produced
    /// by this algorithm holds.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 | Algorithm::Sha512_224 | Algorithm::Sha3_224 => 28,
            Algorithm::Sha256 | Algorithm::Sha512_256 | Algorithm::Sha3_256 | Algorithm::Blake2s256 => 32,
            Algorithm::Sha384 | Algorithm::Sha3_384 => 48,
            Algorithm::Sha512 | Algorithm::Sha3_512 | Algorithm::Blake2b512 => 64,
        }
    }

    fn digest(self, input: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Md5 => md5::Md5::digest(input).to_vec(),
            Algorithm::Sha1 => sha1::Sha1::digest(input).to_vec(),
            Algorithm::Sha224 => sha2::Sha224::digest(input).to_vec(),
            Algorithm::Sha256 => sha2::Sha256::digest(input).to_vec(),
            Algorithm::Sha384 => sha2::Sha384::digest(input).to_vec(),
            Algorithm::Sha512 => sha2::Sha512::digest(input).to_vec(),
            Algorithm::Sha512_224 => sha2::Sha512_224::digest(input).to_vec(),
            Algorithm::Sha512_256 => sha2::Sha512_256::digest(input).to_vec(),
            Algorithm::Sha3_224 => sha3::Sha3_224::digest(input).to_vec(),
            Algorithm::Sha3_256 => sha3::Sha3_256::digest(input).to_vec(),
            Algorithm::Sha3_384 => sha3::Sha3_384::digest(input).to_vec(),
            Algorithm::Sha3_512 => sha3::Sha3_512::digest(input).to_vec(),
            Algorithm::Blake2s256 => blake2::Blake2s256::digest(input).to_vec(),
            Algorithm::Blake2b512 => blake2::Blake2b512::digest(input).to_vec(),
        }
    }
}

/// One argument to [`HashPrimitive::h`]: either a 64-bit non-negative integer
/// (encoded little-endian, 8 bytes) or a raw byte string, used as-is.
#[derive(Clone, Copy, Debug)]
pub enum HashArg<'a> {
    Int(u64),
    Bytes(&'a [u8]),
}

impl From<u64> for HashArg<'_> {
    fn from(n: u64) -> Self {
        HashArg::Int(n)
    }
}

impl<'a> From<&'a [u8]> for HashArg<'a> {
    fn from(b: &'a [u8]) -> Self {
        HashArg::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HashArg<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        HashArg::Bytes(b.as_slice())
    }
}

/// Builds the hash inputs for one [`HashPrimitive::h`] call without having
/// to wrap every argument in [`HashArg::from`] by hand.
macro_rules! h_args {
    ($($x:expr),* $(,)?) => {
        &[$($crate::algorithm::HashArg::from($x)),*][..]
    };
}

pub(crate) use h_args;

/// Uniform interface to a chosen cryptographic digest: variable-arity
/// concatenation-then-digest, with no separator, length prefix, or
/// domain-separation tag (§4.1). The concatenation order is exactly the
/// argument order.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashPrimitive {
    algorithm: Algorithm,
}

impl HashPrimitive {
    #[must_use]
    pub const fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    #[must_use]
    pub const fn algorithm(self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn output_len(self) -> usize {
        self.algorithm.output_len()
    }

    /// `H(args...) -> Block`: concatenate the encoded arguments in order and
    /// digest the result.
    pub fn h(self, args: &[HashArg<'_>]) -> Vec<u8> {
        let mut buf = Vec::new();
        for arg in args {
            match *arg {
                HashArg::Int(n) => buf.extend_from_slice(&n.to_le_bytes()),
                HashArg::Bytes(b) => buf.extend_from_slice(b),
            }
        }
        self.algorithm.digest(&buf)
    }
}
