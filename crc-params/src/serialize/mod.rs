mod hex_option;
mod hex_u_int;

pub(crate) use hex_option::{deserialize as parse_option, serialize as hex_option};
pub(crate) use hex_u_int::{deserialize as parse_u_int, serialize as hex_u_int};
