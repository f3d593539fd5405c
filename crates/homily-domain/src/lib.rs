//! Homily Domain Layer
//!
//! This crate contains the vocabulary shared by every other Homily crate.
//! It has ZERO external dependencies and defines the request a caller makes
//! for a sermon plus the trait seam behind which text generation lives.
//!
//! ## Key Concepts
//!
//! - **SermonRequest**: What the caller asks for (theme, passage, style, duration, notes)
//! - **SermonStyle**: Homiletic style of the requested sermon
//! - **LlmProvider**: Boundary to the generative text provider
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod request;
pub mod style;
pub mod traits;

// Re-exports for convenience
pub use request::{RequestError, SermonRequest};
pub use style::SermonStyle;
