//! Room code generation hook.
//!
//! The store doesn't decide what codes look like; it asks a
//! [`CodeGenerator`] for candidates and keeps asking until one isn't
//! already live. Production uses [`RandomCodeGenerator`]; tests plug in
//! a generator that returns known codes.

use chessroom_protocol::RoomCode;
use rand::Rng;

/// Characters a generated code is drawn from: uppercase letters and digits.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Produces candidate room codes.
///
/// `Send + Sync + 'static` because the store is shared across request
/// tasks for the life of the server.
///
/// Any `Fn(usize) -> RoomCode` closure works as a generator.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Returns a candidate code of `length` characters. It may collide
    /// with a live room; the store retries.
    fn generate(&self, length: usize) -> RoomCode;
}

impl<F> CodeGenerator for F
where
    F: Fn(usize) -> RoomCode + Send + Sync + 'static,
{
    fn generate(&self, length: usize) -> RoomCode {
        self(length)
    }
}

/// Draws each character uniformly from [`CODE_ALPHABET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> RoomCode {
        let mut rng = rand::rng();
        let code: String = (0..length)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        RoomCode::from(code)
    }
}
