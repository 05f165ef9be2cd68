//! Command argument resolution: token classes and the positional resolver.

pub mod classifier;
pub mod resolver;

pub use classifier::{classify, TokenClass};
pub use resolver::{resolve, resolve_with_default, TokenStream, DEFAULT_SEASON};
