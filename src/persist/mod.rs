//! Persistence: the fixed `.2048game` save layout and bincode checkpoints.
//!
//! Both work on byte buffers only. Reading and writing files is left to the
//! caller.

mod checkpoint;
mod codec;

pub use checkpoint::Checkpoint;
pub use codec::{decode, encode, SaveState, MAX_COUNTER, SAVE_EXTENSION, SAVE_LEN};
