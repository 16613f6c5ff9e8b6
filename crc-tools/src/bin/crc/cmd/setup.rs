use crc_engine::setup_stream;
use crc_engine::CrcParameters;

use super::Context;

#[derive(clap::Parser)]
pub struct Cmd {
    /// The name of the CRC variant to configure.
    name: String,
    /// A message to encode as well, in the order it is streamed to the CRC unit.
    message: Option<String>,
}

impl Cmd {
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let parameters = context.variant(&self.name)?;

        print_setup(
            std::io::stdout().lock(),
            parameters,
            self.message.as_deref().map(str::as_bytes),
        )
    }
}

/// Prints the nibbles configuring a nibble-wide CRC unit as hex digits, and optionally the
/// nibbles of a message on a second line.
pub fn print_setup(
    mut output: impl std::io::Write,
    parameters: &CrcParameters,
    message: Option<&[u8]>,
) -> anyhow::Result<()> {
    writeln!(
        output,
        "{}",
        hex_digits(&setup_stream::encode(parameters.model()))
    )?;

    if let Some(message) = message {
        writeln!(
            output,
            "{}",
            hex_digits(&setup_stream::message_nibbles(message))
        )?;
    }

    Ok(())
}

fn hex_digits(nibbles: &[u8]) -> String {
    nibbles.iter().map(|nibble| format!("{nibble:X}")).collect()
}
