//! Protocol primitives for checking credentials against breach corpora.
//!
//! The password side of the protocol is a k-anonymity range query: the SHA1
//! digest of the secret is rendered as 40 uppercase hex characters and split
//! into a 5-character prefix and a 35-character suffix. Only the prefix is
//! ever disclosed to the remote service; the service answers with every
//! `SUFFIX:COUNT` pair sharing that prefix, and the match is resolved locally.
//!
//! Both the hash algorithm and the split point are dictated by the remote
//! service's contract and must not be changed.
//!
//! This crate is purely computational. Network clients live in
//! `pwncheck-client`.

pub mod digest;
pub mod range;
pub mod validate;

pub use digest::{DIGEST_HEX_LEN, HEX_CHARS, KAnonymitySplit, PREFIX_LEN, SUFFIX_LEN};
pub use range::{RangeError, occurrences};
pub use validate::{PolicyError, SecretPolicy, is_valid_email};
