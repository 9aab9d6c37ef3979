//! Phone-number mnemonics: expand digit runs through the telephone keypad,
//! filter against a dictionary, and rank the full-length spellings.

pub mod converter;
pub mod dict;
pub mod engine;
pub mod keypad;
pub mod trace;

pub use converter::{ConvertError, ConvertOptions, Spelling};
pub use engine::{EngineConfig, SpellPhone};
