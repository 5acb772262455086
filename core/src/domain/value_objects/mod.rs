//! Value objects for the verification domain

pub mod result_code;

pub use result_code::VerifyResultCode;
