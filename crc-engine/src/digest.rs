use std::io;

use crc_params::CrcModel;

use crate::engine::clock_byte_observed;
use crate::observer::BitObserver;
use crate::reflect::reflect_byte;
use crate::register::Register;

/// An incremental CRC computation.
///
/// Data can be fed in arbitrary pieces. Splitting a message over several calls to
/// [`Digest::update`] results in the same checksum as [`compute_crc`](crate::compute_crc)
/// over the whole message.
///
/// ```
/// use crc_engine::{Catalog, Digest};
///
/// let crc16 = Catalog::builtin().get("CRC-16/XMODEM").unwrap();
///
/// let mut digest = Digest::new(crc16);
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0x31C3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    register: Register,
    bytes_processed: u64,
}

impl Digest {
    /// Creates a digest with the register loaded with the initial value of the model.
    pub fn new<P>(parameters: &P) -> Self
    where
        P: AsRef<CrcModel> + ?Sized,
    {
        Self {
            register: Register::new(parameters.as_ref()),
            bytes_processed: 0,
        }
    }

    /// The model used by this digest.
    pub fn model(&self) -> &CrcModel {
        self.register.model()
    }

    /// Feeds more data into the computation.
    pub fn update(&mut self, data: &[u8]) {
        let reflect_in = self.model().reflect_in();

        for &byte in data {
            let byte = if reflect_in { reflect_byte(byte) } else { byte };
            self.register.clock_byte(byte);
        }

        self.bytes_processed += data.len() as u64;
    }

    /// Feeds more data into the computation, reporting every bit to `observer`.
    ///
    /// Byte indices reported to the observer continue from previous updates.
    pub fn update_observed<O>(&mut self, data: &[u8], observer: &mut O)
    where
        O: BitObserver + ?Sized,
    {
        for &byte in data {
            self.register =
                clock_byte_observed(self.register, self.bytes_processed, byte, observer);
            self.bytes_processed += 1;
        }
    }

    /// Restarts the computation, as if no data had been fed yet.
    pub fn reset(&mut self) {
        self.register = Register::new(self.register.model());
        self.bytes_processed = 0;
    }

    /// The checksum of all data fed so far.
    ///
    /// This does not consume the digest, so more data can be added afterwards.
    pub fn finalize(&self) -> u64 {
        self.register.finish()
    }

    /// The number of bytes fed since the digest was created or reset.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }
}

/// Allows streaming any reader into a digest with [`std::io::copy`].
impl io::Write for Digest {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_crc, BitStep, CHECK_MESSAGE};
    use pretty_assertions::assert_eq;

    fn crc_32() -> CrcModel {
        CrcModel::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF).unwrap()
    }

    #[test]
    fn empty_digest_is_the_empty_message() {
        let model = crc_32();

        assert_eq!(Digest::new(&model).finalize(), compute_crc(&model, b""));
    }

    #[test]
    fn byte_by_byte() {
        let model = crc_32();
        let mut digest = Digest::new(&model);

        for byte in CHECK_MESSAGE {
            digest.update(std::slice::from_ref(byte));
        }

        assert_eq!(digest.bytes_processed(), 9);
        assert_eq!(digest.finalize(), 0xCBF4_3926);
    }

    #[test]
    fn finalize_can_be_sampled() {
        let model = crc_32();
        let mut digest = Digest::new(&model);

        digest.update(b"1234");
        assert_eq!(digest.finalize(), compute_crc(&model, b"1234"));

        digest.update(b"56789");
        assert_eq!(digest.finalize(), 0xCBF4_3926);
    }

    #[test]
    fn reset_restarts_the_computation() {
        let model = crc_32();
        let mut digest = Digest::new(&model);

        digest.update(b"some unrelated data");
        digest.reset();
        assert_eq!(digest.bytes_processed(), 0);

        digest.update(CHECK_MESSAGE);
        assert_eq!(digest.finalize(), 0xCBF4_3926);
    }

    #[test]
    fn observed_updates_continue_byte_indices() {
        let model = crc_32();
        let mut digest = Digest::new(&model);
        let mut steps = Vec::new();

        digest.update_observed(b"1234", &mut |step: &BitStep| steps.push(*step));
        digest.update_observed(b"56789", &mut |step: &BitStep| steps.push(*step));

        assert_eq!(steps.len(), 72);
        assert_eq!(steps[71].byte_index, 8);
        assert_eq!(digest.finalize(), 0xCBF4_3926);
    }

    #[test]
    fn io_copy_streams_a_reader() {
        let model = crc_32();
        let mut digest = Digest::new(&model);

        let copied = io::copy(&mut &CHECK_MESSAGE[..], &mut digest).unwrap();

        assert_eq!(copied, 9);
        assert_eq!(digest.finalize(), 0xCBF4_3926);
    }
}
