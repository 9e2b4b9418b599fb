#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod hash;

mod parser;


pub use error::{Error, Result};
pub use hash::DateHash;
pub use parser::parse;
