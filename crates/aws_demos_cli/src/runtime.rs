//! Runtime module boundary over the shared command contract.

pub use aws_demos_core::contract;
pub use aws_demos_core::outcome;
pub use aws_demos_core::requests;
