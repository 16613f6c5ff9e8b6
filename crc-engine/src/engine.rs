use crc_params::CrcModel;

use crate::observer::{BitObserver, BitStep, Silent};
use crate::reflect::reflect_byte;
use crate::register::Register;

/// The message whose checksum is recorded as the check value of a parameter set.
pub const CHECK_MESSAGE: &[u8] = b"123456789";

/// Computes the checksum of `message`.
///
/// `parameters` is either a full [`CrcParameters`](crc_params::CrcParameters) set, or just
/// the [`CrcModel`] of one. The result has no bits set above the width of the model.
///
/// ```
/// use crc_engine::{compute_crc, Catalog, CHECK_MESSAGE};
///
/// let crc32 = Catalog::builtin().get("CRC-32").unwrap();
/// assert_eq!(compute_crc(crc32, CHECK_MESSAGE), 0xCBF4_3926);
/// ```
pub fn compute_crc<P>(parameters: &P, message: &[u8]) -> u64
where
    P: AsRef<CrcModel> + ?Sized,
{
    compute_crc_observed(parameters, message, &mut Silent)
}

/// Computes the checksum of `message`, reporting every processed bit to `observer`.
///
/// The observer is called exactly `8 * message.len()` times.
pub fn compute_crc_observed<P, O>(parameters: &P, message: &[u8], observer: &mut O) -> u64
where
    P: AsRef<CrcModel> + ?Sized,
    O: BitObserver + ?Sized,
{
    let register = Register::new(parameters.as_ref());

    message
        .iter()
        .zip(0u64..)
        .fold(register, |register, (&byte, byte_index)| {
            clock_byte_observed(register, byte_index, byte, observer)
        })
        .finish()
}

/// Shifts one message byte into the register, bit by bit.
///
/// XORing the whole byte into the top of the register and then shifting eight times is
/// the same division as feeding the bits one at a time, with the input bit XORed into the
/// feedback. The latter also works for registers narrower than a byte.
pub(crate) fn clock_byte_observed<O>(
    mut register: Register,
    byte_index: u64,
    byte: u8,
    observer: &mut O,
) -> Register
where
    O: BitObserver + ?Sized,
{
    let byte = if register.model().reflect_in() {
        reflect_byte(byte)
    } else {
        byte
    };

    for bit_index in 0..8u8 {
        let input_bit = byte & (0x80 >> bit_index) != 0;
        let feedback = register.clock(input_bit);

        observer.on_bit(&BitStep {
            byte_index,
            bit_index,
            input_bit,
            feedback,
            register: register.value(),
        });
    }

    register
}
