use anyhow::bail;
use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::logging::LevelFilter;

/// A struct which holds all configs.
#[derive(Debug, Clone)]
pub struct Configs {
    figment: Figment,
}

/// The main struct holding all the possible config options.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    pub catalog: Catalog,
    pub output: Output,
}

/// The general config struct holding all the possible general options.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    pub log_level: Option<LevelFilter>,
}

/// The catalog config struct, selecting where CRC variants come from.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Catalog files loaded on top of the built-in variants.
    pub files: Vec<PathBuf>,
    /// Variants used when none are given on the command line.
    pub select: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Output {
    pub json: bool,
}

impl Configs {
    /// Loads the default configuration, and the `.crc` files in `conf_dirs`.
    ///
    /// Directories later in the list take precedence.
    pub fn new(conf_dirs: impl IntoIterator<Item = PathBuf>) -> Configs {
        // Start off by merging in the default configuration file.
        let mut figment = Figment::new().merge(Toml::string(include_str!("default.toml")).nested());

        for conf_dir in conf_dirs {
            figment = figment
                .merge(Toml::file(conf_dir.join(".crc.toml")).nested())
                .merge(Json::file(conf_dir.join(".crc.json")).nested())
                .merge(Yaml::file(conf_dir.join(".crc.yaml")).nested())
                .merge(Yaml::file(conf_dir.join(".crc.yml")).nested());
        }

        Configs { figment }
    }

    pub fn merge(&mut self, conf_file: PathBuf) -> anyhow::Result<()> {
        let original = self.figment.clone();
        self.figment = match conf_file.extension().and_then(|e| e.to_str()) {
            Some("toml") => original.merge(Toml::file(conf_file).nested()),
            Some("json") => original.merge(Json::file(conf_file).nested()),
            Some("yml" | "yaml") => original.merge(Yaml::file(conf_file).nested()),
            _ => {
                bail!(
                    "File format not recognized from extension (supported: .toml, .json, .yaml / .yml)"
                )
            }
        };
        Ok(())
    }

    pub fn prof_names(&self) -> Vec<String> {
        self.figment
            .profiles()
            .map(|p| String::from(p.as_str().as_str()))
            .collect()
    }

    /// Extract the requested config, but only if the profile has been explicitly defined in the
    /// configuration files (selecting an arbitrary undefined profile with Figment will coerce
    /// it into existence, inheriting from the default config).
    ///
    /// `CRC_` prefixed environment variables override all files, in every profile. Nested keys
    /// are separated by `__`, e.g. `CRC_OUTPUT__JSON=true`.
    pub fn select_defined(self, name: &str) -> anyhow::Result<Config> {
        let defined_profiles = self.prof_names();
        let requested_profile_defined = defined_profiles
            .iter()
            .any(|p| p.eq_ignore_ascii_case(name));

        let figment = self
            .figment
            .merge(Env::prefixed("CRC_").split("__").global());

        match figment.select(name).extract::<Config>() {
            Err(figerr) => {
                // Join all the figment errors into a multiline string.
                bail!(
                    "Failed to parse supplied configuration:\n{}",
                    figerr
                        .into_iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<String>>()
                        .join("\n")
                );
            }
            Ok(config) => {
                // Syntax errors in the files have already been caught by the other match arm.
                if !requested_profile_defined {
                    bail!(
                        "the requested configuration profile \"{}\" hasn't been defined (defined profiles: {})",
                        name,
                        defined_profiles.join(", ")
                    );
                }
                Ok(config)
            }
        }
    }

    #[cfg(test)]
    pub fn new_with_test_data(conf_dir: PathBuf, data: &str) -> Configs {
        let mut cfs = Configs::new([conf_dir]);
        cfs.figment = cfs.figment.merge(Toml::string(data).nested());
        cfs
    }
}
