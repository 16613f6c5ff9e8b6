use crc_engine::Catalog;

use super::Context;

#[derive(clap::Parser)]
pub struct Cmd {}

impl Cmd {
    pub fn run(self, context: &Context) -> anyhow::Result<()> {
        print_catalog(std::io::stdout().lock(), &context.catalog, context.json)
    }
}

/// Prints all variants of the catalog, one per line, in RevEng catalogue notation.
pub fn print_catalog(
    mut output: impl std::io::Write,
    catalog: &Catalog,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let variants: Vec<_> = catalog.iter().collect();
        serde_json::to_writer_pretty(&mut output, &variants)?;
        writeln!(output)?;
        return Ok(());
    }

    for parameters in catalog {
        writeln!(output, "{:<18} {}", parameters.name(), parameters)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_line_per_variant() {
        let catalog = Catalog::builtin();
        let mut output = Vec::new();

        print_catalog(&mut output, catalog, false).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output.lines().count(), catalog.len());
        assert_eq!(
            output.lines().next(),
            Some(r#"CRC-32             width=32 poly=0x04c11db7 init=0xffffffff refin=true refout=true xorout=0xffffffff check=0xcbf43926 name="CRC-32""#)
        );
    }

    #[test]
    fn json_lists_parameter_sets() {
        let mut output = Vec::new();

        print_catalog(&mut output, Catalog::builtin(), true).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(json[0]["name"], "CRC-32");
        assert_eq!(json[0]["poly"], "0x4c11db7");
        assert_eq!(json.as_array().map(Vec::len), Some(Catalog::builtin().len()));
    }
}
