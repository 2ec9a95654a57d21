mod compress;

pub use compress::{compress, H, K};

use crate::error::Error;

pub const BLOCK_SIZE: usize = 64;
pub const DIGEST_SIZE: usize = 32;

/// Bytes reserved at the end of the last block for the message bit length.
const LENGTH_SIZE: usize = 8;

const PADDING: [u8; BLOCK_SIZE] = [0; BLOCK_SIZE];

/// Raw SHA-256 output.
pub type Digest = [u8; DIGEST_SIZE];

/// Incremental SHA-256 engine.
///
/// Feed data with [`Sha256::update`] in chunks of any size, then call
/// [`Sha256::finalize`] once. The digest only depends on the concatenation
/// of the chunks, never on how the input was split.
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    /// total message bytes absorbed
    count: u64,
    buffer: [u8; BLOCK_SIZE],
    /// live bytes in `buffer`
    fill: usize,
    finalized: bool,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    pub fn new() -> Self {
        Self {
            state: H,
            count: 0,
            buffer: [0; BLOCK_SIZE],
            fill: 0,
            finalized: false,
        }
    }

    /// Number of message bytes absorbed so far.
    pub fn len(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Start over with a fresh engine, whether or not it was finalized.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// update the hash state
    ///
    /// # Panics
    /// If the engine has already been finalized.
    pub fn update(&mut self, input: &[u8]) {
        if let Err(e) = self.try_update(input) {
            panic!("sha256 update: {}", e);
        }
    }

    pub fn try_update(&mut self, input: &[u8]) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::Finalized);
        }
        self.count = self.count.wrapping_add(input.len() as u64);
        self.absorb(input);
        Ok(())
    }

    /// Pad the message, process the last block(s) and return the digest.
    ///
    /// # Panics
    /// If called more than once without [`Sha256::reset`].
    pub fn finalize(&mut self) -> Digest {
        match self.try_finalize() {
            Ok(digest) => digest,
            Err(e) => panic!("sha256 finalize: {}", e),
        }
    }

    pub fn try_finalize(&mut self) -> Result<Digest, Error> {
        if self.finalized {
            return Err(Error::Finalized);
        }
        let total_bits = self.count.wrapping_mul(8);

        self.absorb(&[0x80]);
        let n_padding_bytes = (2 * BLOCK_SIZE - LENGTH_SIZE - self.fill) % BLOCK_SIZE;
        self.absorb(&PADDING[..n_padding_bytes]);
        self.absorb(&total_bits.to_be_bytes());
        debug_assert_eq!(self.fill, 0);

        self.finalized = true;

        let mut digest = [0u8; DIGEST_SIZE];
        for (out, word) in digest.chunks_exact_mut(4).zip(self.state) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        Ok(digest)
    }

    /// Copy bytes into the block buffer, compressing every time it fills up.
    /// Message bytes and padding both go through here.
    fn absorb(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            let take = (BLOCK_SIZE - self.fill).min(input.len());
            self.buffer[self.fill..self.fill + take].copy_from_slice(&input[..take]);
            self.fill += take;
            input = &input[take..];

            if self.fill == BLOCK_SIZE {
                self.state = compress(self.state, &self.buffer);
                self.fill = 0;
            }
        }
    }
}

/// Hash a complete message in one call.
pub fn digest(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize()
}

impl ::digest::HashMarker for Sha256 {}

impl ::digest::OutputSizeUser for Sha256 {
    type OutputSize = ::digest::consts::U32;
}

impl ::digest::Update for Sha256 {
    fn update(&mut self, data: &[u8]) {
        Sha256::update(self, data);
    }
}

impl ::digest::FixedOutput for Sha256 {
    fn finalize_into(mut self, out: &mut ::digest::Output<Self>) {
        out.copy_from_slice(&Sha256::finalize(&mut self));
    }
}

impl ::digest::Reset for Sha256 {
    fn reset(&mut self) {
        Sha256::reset(self);
    }
}

impl ::digest::FixedOutputReset for Sha256 {
    fn finalize_into_reset(&mut self, out: &mut ::digest::Output<Self>) {
        out.copy_from_slice(&Sha256::finalize(self));
        Sha256::reset(self);
    }
}
