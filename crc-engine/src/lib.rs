//! # Generic bit-serial CRC engine
//!
//! This crate computes cyclic redundancy checks for any variant that can be described by a
//! [`CrcParameters`] set: register widths from 1 to 64 bits, arbitrary polynomials, initial
//! values and output masks, with or without bit reflection.
//!
//! The computation simulates the shift register of a hardware CRC unit bit by bit. This is
//! slow compared to table driven implementations, but it works the same way for every
//! variant, and every single step can be observed.
//!
//! # Examples
//!
//! ## Computing a checksum
//!
//! ```
//! use crc_engine::{compute_crc, Catalog};
//!
//! let crc = Catalog::builtin().find("CRC-16/MODBUS")?;
//! assert_eq!(compute_crc(crc, b"123456789"), 0x4B37);
//! # Ok::<(), crc_engine::CatalogError>(())
//! ```
//!
//! ## Using a custom variant
//!
//! ```
//! use crc_engine::{compute_crc, CrcModel};
//!
//! let model = CrcModel::new(12, 0x80F, 0x000, false, false, 0x000)?;
//! assert_eq!(compute_crc(&model, b"123456789"), 0xF5B);
//! # Ok::<(), crc_engine::ParameterError>(())
//! ```
//!
//! ## Tracing the register
//!
//! ```
//! use crc_engine::{compute_crc_observed, BitStep, Catalog};
//!
//! let crc = Catalog::builtin().find("CRC-8")?;
//! let mut registers = Vec::new();
//!
//! compute_crc_observed(crc, b"1", &mut |step: &BitStep| registers.push(step.register));
//!
//! assert_eq!(registers.len(), 8);
//! assert_eq!(registers.last(), Some(&0x97));
//! # Ok::<(), crc_engine::CatalogError>(())
//! ```
#![warn(missing_docs)]

pub mod catalog;
mod digest;
mod engine;
mod observer;
pub mod reflect;
mod register;
pub mod setup_stream;

pub use crc_params::{CrcModel, CrcParameters, Field, ParameterError, RevengParseError, MAX_WIDTH};

pub use catalog::{Catalog, CatalogError, BUILTIN_PARAMETERS};
pub use digest::Digest;
pub use engine::{compute_crc, compute_crc_observed, CHECK_MESSAGE};
pub use observer::{BitObserver, BitStep};
pub use register::Register;
pub use setup_stream::SetupStreamError;
