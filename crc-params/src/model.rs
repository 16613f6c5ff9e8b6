/// The widest register a CRC model may describe.
pub const MAX_WIDTH: u8 = 64;

/// Names the numeric fields of a parameter set, for error reporting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, docsplay::Display)]
pub enum Field {
    /// poly
    Poly,
    /// init
    Init,
    /// xorout
    Xorout,
    /// check
    Check,
    /// residue
    Residue,
}

/// An error that occurred while validating a CRC parameter set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, docsplay::Display)]
pub enum ParameterError {
    /// The width {0} is outside of the supported range 1..=64.
    InvalidWidth(u8),
    /// The {field} value {value:#x} does not fit into {width} bits.
    ValueTooWide {
        /// The offending field.
        field: Field,
        /// The value that was supplied.
        value: u64,
        /// The width of the register the value has to fit into.
        width: u8,
    },
    /// A CRC parameter set requires a non-empty name.
    EmptyName,
}

/// The algorithm-relevant parameters of a CRC variant.
///
/// A `CrcModel` can only be obtained through one of its constructors, which
/// reject any width outside of `1..=64` and any value wider than the register.
/// This means every accessor returns values that are consistent with each other,
/// and the engine never has to truncate anything.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CrcModel {
    width: u8,
    poly: u64,
    init: u64,
    reflect_in: bool,
    reflect_out: bool,
    xorout: u64,
}

impl CrcModel {
    /// Creates a new model, validating all of its invariants.
    pub fn new(
        width: u8,
        poly: u64,
        init: u64,
        reflect_in: bool,
        reflect_out: bool,
        xorout: u64,
    ) -> Result<Self, ParameterError> {
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(ParameterError::InvalidWidth(width));
        }

        ensure_fits(Field::Poly, poly, width)?;
        ensure_fits(Field::Init, init, width)?;
        ensure_fits(Field::Xorout, xorout, width)?;

        Ok(Self {
            width,
            poly,
            init,
            reflect_in,
            reflect_out,
            xorout,
        })
    }

    /// Creates a new model in a const context.
    ///
    /// This performs the same checks as [`CrcModel::new`], but panics instead of returning an
    /// error, which turns an invalid built-in table entry into a compile error.
    pub const fn new_const(
        width: u8,
        poly: u64,
        init: u64,
        reflect_in: bool,
        reflect_out: bool,
        xorout: u64,
    ) -> Self {
        assert!(width >= 1 && width <= MAX_WIDTH, "CRC width out of range");

        let mask = mask_for(width);
        assert!(poly & !mask == 0, "poly does not fit into the CRC width");
        assert!(init & !mask == 0, "init does not fit into the CRC width");
        assert!(xorout & !mask == 0, "xorout does not fit into the CRC width");

        Self {
            width,
            poly,
            init,
            reflect_in,
            reflect_out,
            xorout,
        }
    }

    /// The width of the register in bits.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// The generator polynomial, without its implicit leading term.
    pub const fn poly(&self) -> u64 {
        self.poly
    }

    /// The value the register is loaded with before the first message bit.
    pub const fn init(&self) -> u64 {
        self.init
    }

    /// Whether the bits of each input byte are processed least-significant bit first.
    pub const fn reflect_in(&self) -> bool {
        self.reflect_in
    }

    /// Whether the final register is bit-reversed before the output XOR.
    pub const fn reflect_out(&self) -> bool {
        self.reflect_out
    }

    /// The mask XORed into the final result.
    pub const fn xorout(&self) -> u64 {
        self.xorout
    }

    /// All bits of the register set.
    pub const fn mask(&self) -> u64 {
        mask_for(self.width)
    }

    /// Only the most significant bit of the register set.
    pub const fn top_bit(&self) -> u64 {
        1 << (self.width - 1)
    }

    /// Returns `true` if `value` has no bits set above the register width.
    pub const fn fits(&self, value: u64) -> bool {
        value & !self.mask() == 0
    }

    pub(crate) fn ensure_fits(&self, field: Field, value: u64) -> Result<(), ParameterError> {
        ensure_fits(field, value, self.width)
    }
}

impl AsRef<CrcModel> for CrcModel {
    fn as_ref(&self) -> &CrcModel {
        self
    }
}

/// `width` must be within `1..=64`.
const fn mask_for(width: u8) -> u64 {
    u64::MAX >> (MAX_WIDTH - width)
}

fn ensure_fits(field: Field, value: u64, width: u8) -> Result<(), ParameterError> {
    if value & !mask_for(width) == 0 {
        Ok(())
    } else {
        Err(ParameterError::ValueTooWide {
            field,
            value,
            width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(1, 0x1, 0x1; "single bit")]
    #[test_case(5, 0x1f, 0x10; "usb token width")]
    #[test_case(8, 0xff, 0x80; "byte")]
    #[test_case(31, 0x7fff_ffff, 0x4000_0000; "one short of a word")]
    #[test_case(64, u64::MAX, 0x8000_0000_0000_0000; "full register")]
    fn derived_masks(width: u8, mask: u64, top_bit: u64) {
        let model = CrcModel::new(width, 0, 0, false, false, 0).unwrap();

        assert_eq!(model.mask(), mask);
        assert_eq!(model.top_bit(), top_bit);
    }

    #[test_case(0; "zero")]
    #[test_case(65; "wider than the register")]
    #[test_case(u8::MAX; "far too wide")]
    fn width_out_of_range(width: u8) {
        assert_eq!(
            CrcModel::new(width, 0, 0, false, false, 0),
            Err(ParameterError::InvalidWidth(width))
        );
    }

    #[test]
    fn values_must_fit_the_width() {
        assert_eq!(
            CrcModel::new(16, 0x1_1021, 0, false, false, 0),
            Err(ParameterError::ValueTooWide {
                field: Field::Poly,
                value: 0x1_1021,
                width: 16
            })
        );
        assert_eq!(
            CrcModel::new(5, 0x05, 0x20, true, true, 0x1f),
            Err(ParameterError::ValueTooWide {
                field: Field::Init,
                value: 0x20,
                width: 5
            })
        );
        assert_eq!(
            CrcModel::new(8, 0x07, 0x00, false, false, 0x100),
            Err(ParameterError::ValueTooWide {
                field: Field::Xorout,
                value: 0x100,
                width: 8
            })
        );
    }

    #[test]
    fn const_and_checked_constructors_agree() {
        const CRC_32: CrcModel =
            CrcModel::new_const(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

        assert_eq!(
            CrcModel::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF),
            Ok(CRC_32)
        );
    }

    #[test]
    fn error_messages() {
        let error = CrcModel::new(8, 0x107, 0, false, false, 0).unwrap_err();
        assert_eq!(error.to_string(), "The poly value 0x107 does not fit into 8 bits.");

        let error = CrcModel::new(0, 0, 0, false, false, 0).unwrap_err();
        assert_eq!(
            error.to_string(),
            "The width 0 is outside of the supported range 1..=64."
        );
    }
}
