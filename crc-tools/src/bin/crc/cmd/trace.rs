use crc_engine::{compute_crc_observed, BitStep, CrcParameters};

use super::Context;

#[derive(clap::Parser)]
pub struct Cmd {
    /// The name of the CRC variant to trace.
    name: String,
    /// The message to process.
    message: String,
}

impl Cmd {
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let parameters = context.variant(&self.name)?;

        print_trace(
            std::io::stdout().lock(),
            parameters,
            self.message.as_bytes(),
        )
    }
}

/// Prints the register after every message bit, followed by the checksum.
pub fn print_trace(
    mut output: impl std::io::Write,
    parameters: &CrcParameters,
    message: &[u8],
) -> anyhow::Result<()> {
    let width = usize::from(parameters.model().width());
    let mut steps = Vec::with_capacity(message.len() * 8);

    let crc = compute_crc_observed(parameters, message, &mut |step: &BitStep| {
        steps.push(*step)
    });

    for step in &steps {
        writeln!(output, "{}", format_step(step, width))?;
    }
    writeln!(output, "{}: {:08X}", parameters.name(), crc)?;

    Ok(())
}

/// Formats a step as `byte.bit: in=<bit> crc=<register in binary>`.
fn format_step(step: &BitStep, width: usize) -> String {
    format!(
        "{}.{}: in={} crc={:#0digits$b}",
        step.byte_index,
        step.bit_index,
        u8::from(step.input_bit),
        step.register,
        digits = width + 2
    )
}
