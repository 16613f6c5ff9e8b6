//! Parser for the notation used by the [CRC RevEng catalogue].
//!
//! Every entry of the catalogue is a single line of whitespace separated `key=value` pairs:
//!
//! ```text
//! width=16 poly=0x1021 init=0x0000 refin=false refout=false xorout=0x0000 check=0x31c3 residue=0x0000 name="CRC-16/XMODEM"
//! ```
//!
//! ```
//! use crc_params::CrcParameters;
//!
//! let xmodem: CrcParameters = r#"width=16 poly=0x1021 init=0x0000 refin=false refout=false xorout=0x0000 check=0x31c3 residue=0x0000 name="CRC-16/XMODEM""#
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(xmodem.name(), "CRC-16/XMODEM");
//! assert_eq!(xmodem.check(), 0x31c3);
//! ```
//!
//! [CRC RevEng catalogue]: https://reveng.sourceforge.io/crc-catalogue/

use std::str::FromStr;

use crate::{CrcModel, CrcParameters, ParameterError};

/// An error that occurred while parsing an entry in RevEng catalogue notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, docsplay::Display)]
pub enum RevengParseError {
    /// Expected a `key=value` pair, found `{0}`.
    MalformedField(String),
    /// The quoted name is missing its closing quote.
    UnterminatedName,
    /// Unknown field `{0}`.
    UnknownField(String),
    /// The field `{0}` is given more than once.
    DuplicateField(&'static str),
    /// The required field `{0}` is missing.
    MissingField(&'static str),
    /// The value `{value}` of the field `{field}` is not a valid {expected}.
    InvalidValue {
        /// The field the value belongs to.
        field: &'static str,
        /// The value as written in the entry.
        value: String,
        /// What the field expects.
        expected: &'static str,
    },
    /// Invalid parameter set: {0}
    Parameters(#[from] ParameterError),
}

impl FromStr for CrcParameters {
    type Err = RevengParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = Fields::default();

        for (key, value) in pairs(line)? {
            let (field, slot) = fields
                .slot(key)
                .ok_or_else(|| RevengParseError::UnknownField(key.to_owned()))?;

            if slot.replace(value).is_some() {
                return Err(RevengParseError::DuplicateField(field));
            }
        }

        fields.into_parameters()
    }
}

/// The raw values of a catalogue entry, before they are validated.
#[derive(Default)]
struct Fields<'a> {
    width: Option<&'a str>,
    poly: Option<&'a str>,
    init: Option<&'a str>,
    refin: Option<&'a str>,
    refout: Option<&'a str>,
    xorout: Option<&'a str>,
    check: Option<&'a str>,
    residue: Option<&'a str>,
    name: Option<&'a str>,
}

impl<'a> Fields<'a> {
    fn slot(&mut self, key: &str) -> Option<(&'static str, &mut Option<&'a str>)> {
        let slot = match key {
            "width" => ("width", &mut self.width),
            "poly" => ("poly", &mut self.poly),
            "init" => ("init", &mut self.init),
            "refin" => ("refin", &mut self.refin),
            "refout" => ("refout", &mut self.refout),
            "xorout" => ("xorout", &mut self.xorout),
            "check" => ("check", &mut self.check),
            "residue" => ("residue", &mut self.residue),
            "name" => ("name", &mut self.name),
            _ => return None,
        };

        Some(slot)
    }

    fn into_parameters(self) -> Result<CrcParameters, RevengParseError> {
        let width = parse_int::parse::<u8>(required("width", self.width)?).map_err(|_| {
            RevengParseError::InvalidValue {
                field: "width",
                value: self.width.unwrap_or_default().to_owned(),
                expected: "width",
            }
        })?;

        let model = CrcModel::new(
            width,
            number("poly", required("poly", self.poly)?)?,
            number("init", required("init", self.init)?)?,
            boolean("refin", required("refin", self.refin)?)?,
            boolean("refout", required("refout", self.refout)?)?,
            number("xorout", required("xorout", self.xorout)?)?,
        )?;

        let parameters = CrcParameters::new(
            required("name", self.name)?.to_owned(),
            model,
            number("check", required("check", self.check)?)?,
        )?;

        match self.residue {
            Some(residue) => Ok(parameters.with_residue(number("residue", residue)?)?),
            None => Ok(parameters),
        }
    }
}

/// Splits an entry into its `key=value` pairs. Values may be double-quoted, in which case
/// they extend up to the closing quote.
fn pairs(line: &str) -> Result<Vec<(&str, &str)>, RevengParseError> {
    let mut pairs = Vec::new();
    let mut rest = line.trim();

    while !rest.is_empty() {
        let Some((key, after)) = rest.split_once('=') else {
            return Err(RevengParseError::MalformedField(rest.to_owned()));
        };
        if key.is_empty() || key.contains(char::is_whitespace) {
            return Err(RevengParseError::MalformedField(
                key.split_whitespace().next().unwrap_or(key).to_owned(),
            ));
        }

        let (value, remainder) = match after.strip_prefix('"') {
            Some(quoted) => {
                let end = quoted
                    .find('"')
                    .ok_or(RevengParseError::UnterminatedName)?;
                (&quoted[..end], &quoted[end + 1..])
            }
            None => after
                .split_once(char::is_whitespace)
                .unwrap_or((after, "")),
        };

        pairs.push((key, value));
        rest = remainder.trim_start();
    }

    Ok(pairs)
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, RevengParseError> {
    value.ok_or(RevengParseError::MissingField(field))
}

fn number(field: &'static str, value: &str) -> Result<u64, RevengParseError> {
    parse_int::parse::<u64>(value).map_err(|_| RevengParseError::InvalidValue {
        field,
        value: value.to_owned(),
        expected: "number",
    })
}

fn boolean(field: &'static str, value: &str) -> Result<bool, RevengParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(RevengParseError::InvalidValue {
            field,
            value: value.to_owned(),
            expected: "boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const CRC_32: &str = r#"width=32 poly=0x04c11db7 init=0xffffffff refin=true refout=true xorout=0xffffffff check=0xcbf43926 residue=0xdebb20e3 name="CRC-32/ISO-HDLC""#;

    #[test]
    fn parses_catalogue_entry() {
        let parameters: CrcParameters = CRC_32.parse().unwrap();
        let model = parameters.model();

        assert_eq!(parameters.name(), "CRC-32/ISO-HDLC");
        assert_eq!(model.width(), 32);
        assert_eq!(model.poly(), 0x04c1_1db7);
        assert_eq!(model.init(), 0xffff_ffff);
        assert!(model.reflect_in());
        assert!(model.reflect_out());
        assert_eq!(model.xorout(), 0xffff_ffff);
        assert_eq!(parameters.check(), 0xcbf4_3926);
        assert_eq!(parameters.residue(), Some(0xdebb_20e3));
    }

    #[test]
    fn display_parses_back() {
        let parameters: CrcParameters = CRC_32.parse().unwrap();

        assert_eq!(parameters.to_string(), CRC_32);
        assert_eq!(parameters.to_string().parse::<CrcParameters>(), Ok(parameters));
    }

    #[test]
    fn field_order_and_spacing_are_free() {
        let parameters: CrcParameters =
            "  name=\"CRC-8\"   check=0xf4 xorout=0x00 refout=false refin=false init=0x00 poly=0x07 width=8 "
                .parse()
                .unwrap();

        assert_eq!(parameters.name(), "CRC-8");
        assert_eq!(parameters.residue(), None);
        assert_eq!(parameters.check(), 0xf4);
    }

    #[test]
    fn quoted_names_may_contain_spaces() {
        let parameters: CrcParameters =
            r#"width=3 poly=0x3 init=0x7 refin=true refout=true xorout=0x0 check=0x6 name="CRC-3 ROHC""#
                .parse()
                .unwrap();

        assert_eq!(parameters.name(), "CRC-3 ROHC");
    }

    #[test_case("width=8 poly=0x07", RevengParseError::MissingField("init"); "missing init")]
    #[test_case(r#"width=8 poly=0x07 init=0 refin=false refout=false xorout=0 check=0xf4"#, RevengParseError::MissingField("name"); "missing name")]
    #[test_case("width=8 width=8", RevengParseError::DuplicateField("width"); "duplicate width")]
    #[test_case("width=8 crc=1", RevengParseError::UnknownField("crc".to_owned()); "unknown field")]
    #[test_case("width=8 poly", RevengParseError::MalformedField("poly".to_owned()); "missing equals sign")]
    #[test_case(r#"width=8 name="CRC-8"#, RevengParseError::UnterminatedName; "unterminated name")]
    #[test_case("width=eight", RevengParseError::InvalidValue { field: "width", value: "eight".to_owned(), expected: "width" }; "invalid width")]
    #[test_case(r#"width=8 poly=0x07 init=0 refin=yes refout=false xorout=0 check=0xf4 name="CRC-8""#, RevengParseError::InvalidValue { field: "refin", value: "yes".to_owned(), expected: "boolean" }; "invalid boolean")]
    #[test_case(r#"width=8 poly=0xg7 init=0 refin=false refout=false xorout=0 check=0xf4 name="CRC-8""#, RevengParseError::InvalidValue { field: "poly", value: "0xg7".to_owned(), expected: "number" }; "invalid number")]
    fn malformed_entries(line: &str, error: RevengParseError) {
        assert_eq!(line.parse::<CrcParameters>(), Err(error));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let error = r#"width=8 poly=0x107 init=0 refin=false refout=false xorout=0 check=0xf4 name="CRC-8""#
            .parse::<CrcParameters>()
            .unwrap_err();

        assert_eq!(
            error,
            RevengParseError::Parameters(ParameterError::ValueTooWide {
                field: Field::Poly,
                value: 0x107,
                width: 8,
            })
        );
        assert_eq!(
            error.to_string(),
            "Invalid parameter set: The poly value 0x107 does not fit into 8 bits."
        );
    }
}
