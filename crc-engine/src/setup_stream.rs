//! The nibble stream used to configure a nibble-wide hardware CRC unit.
//!
//! Such a unit receives its configuration four bits at a time during its setup phase:
//!
//! | Nibble(s)        | Contents                                                        |
//! |------------------|-----------------------------------------------------------------|
//! | 0                | bits 3..0 of `width - 1`                                        |
//! | 1                | bits 5..4 of `width - 1` in bits 3..2, `refout` in bit 1, `refin` in bit 0 |
//! | `2..2+n`         | the polynomial                                                  |
//! | `2+n..2+2n`      | the initial value                                               |
//! | `2+2n..2+3n`     | the output XOR mask                                             |
//!
//! where `n` is the number of nibbles needed to hold `width` bits. Multi-nibble values are
//! sent least significant nibble first. Message bytes are streamed in the same order,
//! low nibble first, see [`message_nibbles`].

use crc_params::{CrcModel, ParameterError};

/// The number of header nibbles preceding the register values.
const HEADER_NIBBLES: usize = 2;

/// An error that occurred while decoding a setup stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, docsplay::Display)]
pub enum SetupStreamError {
    /// The setup stream has the wrong length: expected {expected} nibbles, found {found}.
    Length {
        /// The length required by the width in the header.
        expected: usize,
        /// The length of the stream.
        found: usize,
    },
    /// The value {value:#x} at position {position} is not a nibble.
    NotANibble {
        /// The position of the value in the stream.
        position: usize,
        /// The offending value.
        value: u8,
    },
    /// The decoded parameters are invalid: {0}
    Parameters(#[from] ParameterError),
}

/// Encodes the model as a stream of nibbles, one nibble per byte.
pub fn encode(model: &CrcModel) -> Vec<u8> {
    let width_minus_one = model.width() - 1;
    let nibbles = value_nibbles(model.width());

    let mut stream = Vec::with_capacity(HEADER_NIBBLES + 3 * nibbles);
    stream.push(width_minus_one & 0xf);
    stream.push(
        ((width_minus_one >> 4) & 0x3) << 2
            | u8::from(model.reflect_out()) << 1
            | u8::from(model.reflect_in()),
    );

    for value in [model.poly(), model.init(), model.xorout()] {
        stream.extend((0..nibbles).map(|i| ((value >> (4 * i)) & 0xf) as u8));
    }

    stream
}

/// Decodes a stream produced by [`encode`].
pub fn decode(stream: &[u8]) -> Result<CrcModel, SetupStreamError> {
    if let Some((position, &value)) = stream.iter().enumerate().find(|&(_, &value)| value > 0xf) {
        return Err(SetupStreamError::NotANibble { position, value });
    }

    let [config_lo, config_hi, values @ ..] = stream else {
        return Err(SetupStreamError::Length {
            expected: HEADER_NIBBLES,
            found: stream.len(),
        });
    };

    let width = (config_lo | ((config_hi >> 2) & 0x3) << 4) + 1;
    let nibbles = value_nibbles(width);

    if values.len() != 3 * nibbles {
        return Err(SetupStreamError::Length {
            expected: HEADER_NIBBLES + 3 * nibbles,
            found: stream.len(),
        });
    }

    let mut values = values.chunks_exact(nibbles).map(|chunk| {
        chunk
            .iter()
            .rev()
            .fold(0u64, |value, &nibble| value << 4 | u64::from(nibble))
    });
    // `chunks_exact` yields exactly three values, as checked above.
    let (poly, init, xorout) = (
        values.next().unwrap_or_default(),
        values.next().unwrap_or_default(),
        values.next().unwrap_or_default(),
    );

    Ok(CrcModel::new(
        width,
        poly,
        init,
        config_hi & 0x1 != 0,
        config_hi & 0x2 != 0,
        xorout,
    )?)
}

/// Splits message bytes into nibbles, low nibble first.
pub fn message_nibbles(message: &[u8]) -> Vec<u8> {
    message
        .iter()
        .flat_map(|&byte| [byte & 0xf, byte >> 4])
        .collect()
}

fn value_nibbles(width: u8) -> usize {
    usize::from(width.div_ceil(4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crc_params::Field;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(
        CrcModel::new(8, 0x07, 0x00, false, false, 0x00).unwrap(),
        &[0x7, 0x0, 0x7, 0x0, 0x0, 0x0, 0x0, 0x0];
        "crc-8"
    )]
    #[test_case(
        CrcModel::new(5, 0x05, 0x1f, true, true, 0x1f).unwrap(),
        &[0x4, 0x3, 0x5, 0x0, 0xf, 0x1, 0xf, 0x1];
        "crc-5 usb"
    )]
    #[test_case(
        CrcModel::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF).unwrap(),
        &[
            0xf, 0x7,
            0x7, 0xb, 0xd, 0x1, 0x1, 0xc, 0x4, 0x0,
            0xf, 0xf, 0xf, 0xf, 0xf, 0xf, 0xf, 0xf,
            0xf, 0xf, 0xf, 0xf, 0xf, 0xf, 0xf, 0xf,
        ];
        "crc-32"
    )]
    #[test_case(
        CrcModel::new(64, 0x1b, 0, false, true, 0).unwrap(),
        &[
            0xf, 0xe,
            0xb, 0x1, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
            0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
            0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
        ];
        "crc-64 refout only"
    )]
    fn encodes(model: CrcModel, stream: &[u8]) {
        assert_eq!(encode(&model), stream);
        assert_eq!(decode(stream), Ok(model));
    }

    #[test]
    fn truncated_header() {
        assert_eq!(
            decode(&[0x7]),
            Err(SetupStreamError::Length {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn truncated_values() {
        assert_eq!(
            decode(&[0x7, 0x0, 0x7, 0x0, 0x0]),
            Err(SetupStreamError::Length {
                expected: 8,
                found: 5
            })
        );
    }

    #[test]
    fn rejects_bytes() {
        assert_eq!(
            decode(&[0x7, 0x0, 0x17, 0x0, 0x0, 0x0, 0x0, 0x0]),
            Err(SetupStreamError::NotANibble {
                position: 2,
                value: 0x17
            })
        );
    }

    #[test]
    fn rejects_values_wider_than_the_register() {
        // A 5 bit register is sent as two nibbles per value, which can hold up to 8 bits.
        assert_eq!(
            decode(&[0x4, 0x3, 0x5, 0x2, 0xf, 0x1, 0xf, 0x1]),
            Err(SetupStreamError::Parameters(ParameterError::ValueTooWide {
                field: Field::Poly,
                value: 0x25,
                width: 5
            }))
        );
    }

    #[test]
    fn message_is_sent_low_nibble_first() {
        assert_eq!(message_nibbles(b"12"), [0x1, 0x3, 0x2, 0x3]);
        assert!(message_nibbles(b"").is_empty());
    }
}
