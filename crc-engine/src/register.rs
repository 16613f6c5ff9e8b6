use crc_params::CrcModel;

use crate::reflect::reflect;

/// The shift register of a CRC computation.
///
/// This simulates a `width`-bit linear feedback shift register whose taps are given by the
/// polynomial of the model. Every call to [`Register::clock`] performs one step of the
/// polynomial division modulo 2.
///
/// The register is a plain value which is owned by a single computation,
/// and is threaded through the computation by value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Register {
    model: CrcModel,
    value: u64,
}

impl Register {
    /// Creates a register loaded with the initial value of the model.
    pub fn new(model: &CrcModel) -> Self {
        Self {
            model: *model,
            value: model.init(),
        }
    }

    /// The model this register was created for.
    pub fn model(&self) -> &CrcModel {
        &self.model
    }

    /// The current contents of the register.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Loads a new value into the register. Bits above the register width are discarded.
    pub fn load(&mut self, value: u64) {
        self.value = value & self.model.mask();
    }

    /// Shifts one message bit into the register.
    ///
    /// The feedback is the bit shifted out at the top of the register XOR the input bit.
    /// If it is set, the polynomial is applied to the shifted register. Returns the feedback.
    pub fn clock(&mut self, bit: bool) -> bool {
        let feedback = (self.value & self.model.top_bit() != 0) ^ bit;

        self.value = (self.value << 1) & self.model.mask();
        if feedback {
            self.value ^= self.model.poly();
        }

        feedback
    }

    /// Clocks all 8 bits of a byte into the register, most significant bit first.
    pub fn clock_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.clock(byte & (1 << bit) != 0);
        }
    }

    /// The checksum for the bits clocked in so far: the register after output reflection
    /// and the final XOR.
    pub fn finish(&self) -> u64 {
        let value = if self.model.reflect_out() {
            reflect(self.value, self.model.width())
        } else {
            self.value
        };

        (value ^ self.model.xorout()) & self.model.mask()
    }
}
