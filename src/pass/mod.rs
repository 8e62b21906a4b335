//! Alphabet mapping and quota sampling.

pub mod charset;
pub mod entropy;
mod generate;
pub(crate) mod request;

pub use charset::{Alphabet, ByteClass};
pub use generate::{Sampler, generate};
pub use request::SampleRequest;
