pub mod check;
pub mod compute;
pub mod info;
pub mod list;
pub mod setup;
pub mod trace;

use anyhow::Context as _;
use crc_engine::{Catalog, CrcParameters};
use std::path::PathBuf;

/// Everything the commands share: the catalog, and the output settings.
pub struct Context {
    pub catalog: Catalog,
    /// Variants used when a command is not given any.
    pub select: Vec<String>,
    pub json: bool,
}

impl Context {
    /// Builds the catalog from the built-in variants and the given catalog files, in order.
    pub fn new<'a>(
        catalog_files: impl IntoIterator<Item = &'a PathBuf>,
        select: Vec<String>,
        json: bool,
    ) -> anyhow::Result<Self> {
        let mut catalog = Catalog::with_builtin();

        for path in catalog_files {
            catalog
                .load_file(path)
                .with_context(|| format!("Failed to load the catalog {}", path.display()))?;
        }

        Ok(Self {
            catalog,
            select,
            json,
        })
    }

    /// Resolves the variants named on the command line, or the configured default selection.
    ///
    /// Without any names, all variants of the catalog are selected.
    pub fn variants(&self, names: &[String]) -> anyhow::Result<Vec<&CrcParameters>> {
        let names = if names.is_empty() {
            self.select.as_slice()
        } else {
            names
        };

        if names.is_empty() {
            return Ok(self.catalog.iter().collect());
        }

        names
            .iter()
            .map(|name| self.catalog.find(name).map_err(anyhow::Error::from))
            .collect()
    }

    /// Looks up a single variant.
    pub fn variant(&self, name: &str) -> anyhow::Result<&CrcParameters> {
        Ok(self.catalog.find(name)?)
    }
}

#[cfg(test)]
impl Context {
    /// A context with only the built-in variants.
    pub fn builtin(select: Vec<String>) -> Self {
        Self {
            catalog: Catalog::with_builtin(),
            select,
            json: false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Context;
    use pretty_assertions::assert_eq;

    fn names(context: &Context, names: &[String]) -> Vec<String> {
        context
            .variants(names)
            .unwrap()
            .into_iter()
            .map(|parameters| parameters.name().to_owned())
            .collect()
    }

    #[test]
    fn all_variants_by_default() {
        let context = Context::builtin(vec![]);

        assert_eq!(names(&context, &[]).len(), context.catalog.len());
    }

    #[test]
    fn command_line_overrides_configured_selection() {
        let context = Context::builtin(vec!["CRC-32".to_owned()]);

        assert_eq!(names(&context, &[]), ["CRC-32"]);
        assert_eq!(names(&context, &["crc-8".to_owned()]), ["CRC-8"]);
    }

    #[test]
    fn unknown_names_are_errors() {
        let context = Context::builtin(vec![]);

        let error = context.variants(&["CRC-99".to_owned()]).unwrap_err();
        assert_eq!(error.to_string(), "No CRC variant named `CRC-99` was found.");
    }

    #[test]
    fn missing_catalog_files_name_the_file() {
        let path = std::path::PathBuf::from("does-not-exist.yaml");

        let error = Context::new([&path], vec![], false).err().unwrap();
        assert_eq!(
            error.to_string(),
            "Failed to load the catalog does-not-exist.yaml"
        );
    }
}
