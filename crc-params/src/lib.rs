//! CRC parameter set schema
//!
//! A cyclic redundancy check is fully described by a handful of parameters: the width
//! of the register, the generator polynomial, the initial register value, whether input
//! bytes and the output are bit-reflected, and a final XOR mask. This is the model used
//! by the CRC RevEng catalogue, which additionally records the checksum of the message
//! `"123456789"` for every variant as its *check* value.
//!
//! This crate contains the validated types describing such parameter sets, and their
//! serialized forms. The algorithms using them live in `crc-engine`.
//!
#![warn(missing_docs)]

mod model;
mod parameters;
pub mod reveng;
pub(crate) mod serialize;

pub use model::{CrcModel, Field, ParameterError, MAX_WIDTH};
pub use parameters::CrcParameters;
pub use reveng::RevengParseError;
