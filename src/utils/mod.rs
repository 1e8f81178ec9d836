//! Utils Module - Constants

pub mod constants;
