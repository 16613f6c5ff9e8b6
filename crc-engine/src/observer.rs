/// A single step of the register, reported to a [`BitObserver`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BitStep {
    /// The position of the byte within the processed data.
    pub byte_index: u64,
    /// The position of the bit within the byte, in processing order (`0..8`).
    pub bit_index: u8,
    /// The message bit that was shifted into the register.
    pub input_bit: bool,
    /// Whether the polynomial was applied in this step.
    pub feedback: bool,
    /// The register contents after the step.
    pub register: u64,
}

/// Receives every step of a CRC computation.
///
/// This is implemented for all closures taking a [`BitStep`], so a trace can be
/// collected with e.g. `|step: &BitStep| steps.push(*step)`.
pub trait BitObserver {
    /// Called once per processed message bit.
    fn on_bit(&mut self, step: &BitStep);
}

impl<F> BitObserver for F
where
    F: FnMut(&BitStep),
{
    fn on_bit(&mut self, step: &BitStep) {
        self(step)
    }
}

/// Observer used when nobody is listening.
pub(crate) struct Silent;

impl BitObserver for Silent {
    #[inline(always)]
    fn on_bit(&mut self, _step: &BitStep) {}
}
