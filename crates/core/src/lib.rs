//! Domain logic for assembling video-generation prompts.
//!
//! Pure and synchronous: the parameter vocabulary, manual prompt assembly,
//! the AI instruction block, project/scene rules and favorites. Network
//! access lives in `reelprompt-llm`.

pub mod assembler;
pub mod error;
pub mod favorites;
pub mod generation;
pub mod instruction;
pub mod parameters;
pub mod platforms;
pub mod scene;
pub mod types;
