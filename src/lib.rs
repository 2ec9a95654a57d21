//! SHA-256 (FIPS 180-4) message digest with a one-shot and an incremental API.
//!
//! ```
//! use sha256_rs::sha256::{self, Sha256};
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"ab");
//! hasher.update(b"c");
//! assert_eq!(hasher.finalize(), sha256::digest(b"abc"));
//! ```

pub mod error;
pub mod sha256;

pub use error::Error;
pub use sha256::Sha256;
