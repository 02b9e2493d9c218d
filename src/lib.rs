#![allow(clippy::module_inception)]

pub mod constants;
pub mod runtime;
pub mod types;

#[cfg(test)]
mod unit_tests;
