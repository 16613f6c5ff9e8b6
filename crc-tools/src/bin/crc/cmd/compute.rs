use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context as _;
use crc_engine::self_test::{self, SelfTestResult};
use crc_engine::CHECK_MESSAGE;
use serde::Serialize;

use super::Context;

#[derive(clap::Parser)]
pub struct Cmd {
    /// The message to compute the checksums of [default: 123456789]
    ///
    /// Checksums of the default message are compared against the check value of the CRC variant.
    #[clap(conflicts_with = "file")]
    message: Option<String>,
    /// Read the message from a file instead.
    #[clap(long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// The CRC variants to compute, by name or unique name prefix. Can be given several times.
    #[clap(long = "algorithm", short = 'a', value_name = "NAME")]
    algorithms: Vec<String>,
}

impl Cmd {
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let report = self.report(context)?;

        print_report(std::io::stdout().lock(), &report, context.json)
    }

    fn report(self, context: &Context) -> anyhow::Result<Report> {
        let variants = context.variants(&self.algorithms)?;

        if let Some(path) = self.file {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let results = self_test::run_reader(variants, BufReader::new(file))
                .with_context(|| format!("Failed to read {}", path.display()))?;

            return Ok(Report {
                message: None,
                file: Some(path),
                results,
            });
        }

        let message = self
            .message
            .unwrap_or_else(|| String::from_utf8_lossy(CHECK_MESSAGE).into_owned());
        let results = self_test::run(variants, message.as_bytes());

        Ok(Report {
            message: Some(message),
            file: None,
            results,
        })
    }
}

/// The checksums of one message, as printed by `compute` and `check`.
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub results: Vec<SelfTestResult>,
}

pub fn print_report(
    mut output: impl std::io::Write,
    report: &Report,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut output, report)?;
        writeln!(output)?;
        return Ok(());
    }

    if let Some(message) = &report.message {
        writeln!(output, "Message: {message}")?;
    }
    if let Some(file) = &report.file {
        writeln!(output, "File: {}", file.display())?;
    }
    for result in &report.results {
        writeln!(output, "{}", format_result(result))?;
    }

    Ok(())
}

/// Formats a result as `NAME: CHECKSUM`, followed by the verdict if there is one.
pub fn format_result(result: &SelfTestResult) -> String {
    match result.verdict {
        Some(verdict) => format!("{}: {:08X} [{verdict}]", result.name, result.value),
        None => format!("{}: {:08X}", result.name, result.value),
    }
}
