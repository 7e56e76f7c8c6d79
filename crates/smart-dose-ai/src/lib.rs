//! Symptom-driven medication hints for the prescriber.
//!
//! This crate maps free-text symptoms to candidate medications, either from
//! a fixed keyword table or through a text-completion model whose JSON
//! answer is parsed back into hints. It does not depend on the core crate;
//! hints carry only a name, strength and reasoning, and the core engine
//! assigns dosage form and dose when the doctor adds one to a draft.

pub mod extraction;
pub mod prompts;
pub mod symptoms;

pub use extraction::*;
pub use prompts::*;
pub use symptoms::*;
