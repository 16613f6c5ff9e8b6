use crc_engine::CrcParameters;

use super::Context;

#[derive(clap::Parser)]
pub struct Cmd {
    /// The name of the CRC variant to display.
    name: String,
}

impl Cmd {
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let parameters = context.variant(&self.name)?;

        print_parameters(std::io::stdout().lock(), parameters, context.json)
    }
}

/// Prints a single parameter set as YAML, in the format accepted by catalog files.
pub fn print_parameters(
    mut output: impl std::io::Write,
    parameters: &CrcParameters,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut output, parameters)?;
        writeln!(output)?;
    } else {
        serde_yaml::to_writer(&mut output, parameters)?;
    }

    Ok(())
}
