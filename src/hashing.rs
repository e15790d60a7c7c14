//! Candidate hashing.
//!
//! Each candidate is digested over its UTF-8 bytes with the selected
//! algorithm and rendered as lowercase hex.

use std::time::{Duration, Instant};

use clap::ValueEnum;
use digest::Digest;

/// Supported hash algorithms
///
/// `ValueEnum` restricts CLI input to these three values, and dispatch is an
/// exhaustive match, so an unsupported algorithm cannot be represented.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
        }
    }

    /// Digest length in hex characters
    pub fn hex_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
            Algorithm::Sha256 => 64,
        }
    }
}

/// Digest arbitrary bytes with any algorithm implementing `Digest`
fn digest_hex<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// Compute the lowercase hex digest of a candidate string
pub fn hash_candidate(word: &str, algorithm: Algorithm) -> String {
    match algorithm {
        Algorithm::Md5 => digest_hex::<md5::Md5>(word.as_bytes()),
        Algorithm::Sha1 => digest_hex::<sha1::Sha1>(word.as_bytes()),
        Algorithm::Sha256 => digest_hex::<sha2::Sha256>(word.as_bytes()),
    }
}

/// Hash every candidate in order, measuring batch wall-clock time.
///
/// The returned digests are index-aligned with `words`; the elapsed time is
/// reported to the user but never drives a control decision.
pub fn hash_wordlist(words: &[String], algorithm: Algorithm) -> (Vec<String>, Duration) {
    let start = Instant::now();
    let digests = words
        .iter()
        .map(|word| hash_candidate(word, algorithm))
        .collect();
    (digests, start.elapsed())
}
