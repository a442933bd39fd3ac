//! Integrated circuits: bundling a connected sub-circuit into a box whose
//! boundary ports stand in for the sub-circuit's inputs and outputs.

pub mod data;
pub mod validate;

pub use data::ICData;
pub use validate::{
    check_group, is_blacklisted, is_whitelisted_input, InvalidIcReason, IC_BLACKLIST,
    INPUT_WHITELIST,
};
