//! Named collections of CRC parameter sets.

mod builtin;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use crc_params::{CrcParameters, RevengParseError};

pub use builtin::BUILTIN_PARAMETERS;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::with_builtin);

/// An error that occurred while looking up or loading CRC variants.
#[derive(Debug, thiserror::Error, docsplay::Display)]
pub enum CatalogError {
    /// No CRC variant named `{0}` was found.
    NotFound(String),
    /// The name `{name}` matches several CRC variants: {candidates:?}
    Ambiguous {
        /// The name which was looked up.
        name: String,
        /// The names of all variants starting with `name`.
        candidates: Vec<String>,
    },
    /// The CRC variant `{0}` is defined more than once.
    DuplicateName(String),
    /// Line {line} is not a valid catalogue entry: {source}
    Reveng {
        /// The line number, starting at 1.
        line: usize,
        /// The parse error.
        source: RevengParseError,
    },
    /// Failed to parse the YAML catalog: {0}
    Yaml(#[from] serde_yaml::Error),
    /// Failed to read the catalog: {0}
    Io(#[from] std::io::Error),
}

/// A collection of CRC variants, indexed by name.
///
/// Names are compared ignoring ASCII case, and the catalog keeps the order in which the
/// variants were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CrcParameters>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog containing all [built-in variants](BUILTIN_PARAMETERS).
    pub fn with_builtin() -> Self {
        tracing::debug!(
            "Creating catalog with {} built-in variants",
            BUILTIN_PARAMETERS.len()
        );

        Self {
            entries: BUILTIN_PARAMETERS.to_vec(),
        }
    }

    /// The shared catalog of built-in variants.
    ///
    /// It is created on first use and can not be modified. Use [`Catalog::with_builtin`] to
    /// get a catalog which can be extended.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// The number of variants in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog contains no variants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the variants, in the order they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, CrcParameters> {
        self.entries.iter()
    }

    /// Looks up the variant with exactly the given name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&CrcParameters> {
        self.position(name).map(|index| &self.entries[index])
    }

    /// Looks up a variant by its full name, or by a prefix of its name if that prefix is unique.
    pub fn find(&self, name: &str) -> Result<&CrcParameters, CatalogError> {
        if let Some(parameters) = self.get(name) {
            return Ok(parameters);
        }

        let prefix = name.to_ascii_lowercase();
        let candidates: Vec<&CrcParameters> = self
            .entries
            .iter()
            .filter(|parameters| parameters.name().to_ascii_lowercase().starts_with(&prefix))
            .collect();

        match candidates.as_slice() {
            [] => Err(CatalogError::NotFound(name.to_owned())),
            [parameters] => {
                tracing::warn!(
                    "Found CRC variant {} which matches given partial name {}. Consider specifying its full name.",
                    parameters.name(),
                    name,
                );
                Ok(*parameters)
            }
            _ => Err(CatalogError::Ambiguous {
                name: name.to_owned(),
                candidates: candidates
                    .iter()
                    .map(|parameters| parameters.name().to_owned())
                    .collect(),
            }),
        }
    }

    /// Adds a variant to the catalog.
    ///
    /// A variant with the same name is replaced, and returned.
    pub fn insert(&mut self, parameters: CrcParameters) -> Option<CrcParameters> {
        match self.position(parameters.name()) {
            Some(index) => {
                tracing::warn!("Replacing CRC variant {}", self.entries[index].name());
                Some(std::mem::replace(&mut self.entries[index], parameters))
            }
            None => {
                self.entries.push(parameters);
                None
            }
        }
    }

    /// Adds all variants of a YAML document, which contains a sequence of parameter sets.
    ///
    /// Returns the number of variants read.
    pub fn extend_from_yaml<R: Read>(&mut self, reader: R) -> Result<usize, CatalogError> {
        let parameters: Vec<CrcParameters> = serde_yaml::from_reader(reader)?;

        self.extend_from_source(parameters)
    }

    /// Adds all variants of a text in RevEng catalogue notation.
    ///
    /// Every line containing `width=` is parsed as one entry, all other lines are ignored.
    /// Returns the number of variants read.
    pub fn extend_from_reveng(&mut self, text: &str) -> Result<usize, CatalogError> {
        let parameters = text
            .lines()
            .zip(1..)
            .filter(|(entry, _)| entry.contains("width="))
            .map(|(entry, line)| {
                entry
                    .parse::<CrcParameters>()
                    .map_err(|source| CatalogError::Reveng { line, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.extend_from_source(parameters)
    }

    /// Adds all variants from a file.
    ///
    /// Files with a `.yaml` or `.yml` extension are read as YAML, all others as RevEng
    /// catalogue text.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, CatalogError> {
        let is_yaml = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| matches!(extension, "yaml" | "yml"));

        let count = if is_yaml {
            self.extend_from_yaml(BufReader::new(File::open(path)?))?
        } else {
            self.extend_from_reveng(&std::fs::read_to_string(path)?)?
        };

        tracing::debug!("Loaded {} CRC variants from {}", count, path.display());

        Ok(count)
    }

    /// Inserts the variants read from one source, which must not repeat a name.
    fn extend_from_source(
        &mut self,
        parameters: Vec<CrcParameters>,
    ) -> Result<usize, CatalogError> {
        for (index, entry) in parameters.iter().enumerate() {
            if parameters[..index]
                .iter()
                .any(|earlier| earlier.name().eq_ignore_ascii_case(entry.name()))
            {
                return Err(CatalogError::DuplicateName(entry.name().to_owned()));
            }
        }

        let count = parameters.len();
        for entry in parameters {
            self.insert(entry);
        }

        Ok(count)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|parameters| parameters.name().eq_ignore_ascii_case(name))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CrcParameters;
    type IntoIter = std::slice::Iter<'a, CrcParameters>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<CrcParameters> for Catalog {
    fn extend<T: IntoIterator<Item = CrcParameters>>(&mut self, iter: T) {
        for parameters in iter {
            self.insert(parameters);
        }
    }
}
