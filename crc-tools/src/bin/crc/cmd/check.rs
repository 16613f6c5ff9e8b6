use crc_engine::{self_test, CHECK_MESSAGE};

use super::compute::{print_report, Report};
use super::Context;

#[derive(clap::Parser)]
pub struct Cmd {
    /// The CRC variants to verify, by name or unique name prefix. Can be given several times.
    #[clap(long = "algorithm", short = 'a', value_name = "NAME")]
    algorithms: Vec<String>,
}

impl Cmd {
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        let report = self.report(context)?;

        print_report(std::io::stdout().lock(), &report, context.json)?;

        ensure_passed(&report)
    }

    fn report(&self, context: &Context) -> anyhow::Result<Report> {
        let variants = context.variants(&self.algorithms)?;

        Ok(Report {
            message: Some(String::from_utf8_lossy(CHECK_MESSAGE).into_owned()),
            file: None,
            results: self_test::run(variants, CHECK_MESSAGE),
        })
    }
}

/// Fails if any of the variants did not reproduce its check value.
fn ensure_passed(report: &Report) -> anyhow::Result<()> {
    let failures: Vec<&str> = report
        .results
        .iter()
        .filter(|result| !result.passed())
        .map(|result| result.name.as_str())
        .collect();

    anyhow::ensure!(
        failures.is_empty(),
        "{} of {} CRC variants failed the self-test: {}",
        failures.len(),
        report.results.len(),
        failures.join(", ")
    );

    tracing::info!("All {} CRC variants passed the self-test", report.results.len());

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;
    use crc_engine::{CrcModel, CrcParameters};
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_passes() {
        let context = Context::builtin(vec![]);
        let report = Cmd::parse_from(["check"]).report(&context).unwrap();

        assert_eq!(report.results.len(), context.catalog.len());
        ensure_passed(&report).unwrap();
    }

    #[test]
    fn failures_are_errors() {
        let mut context = Context::builtin(vec![]);
        let model = CrcModel::new(8, 0x07, 0x00, false, false, 0x00).unwrap();
        context
            .catalog
            .insert(CrcParameters::new("CRC-8", model, 0x00).unwrap());

        let report = Cmd::parse_from(["check", "-a", "CRC-8", "-a", "CRC-32"])
            .report(&context)
            .unwrap();
        let error = ensure_passed(&report).unwrap_err();

        assert_eq!(
            error.to_string(),
            "1 of 2 CRC variants failed the self-test: CRC-8"
        );
    }
}
