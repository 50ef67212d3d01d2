#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::fastlibm;
pub use maths::fastlibm::{
    StrideError, from_words, modf, modf_assign, modf_into, to_words, try_modf_assign,
};
