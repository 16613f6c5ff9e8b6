use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{CrcModel, Field, ParameterError};
use crate::serialize::{hex_option, hex_u_int, parse_option, parse_u_int};

/// A named CRC variant: the [`CrcModel`] together with the check value
/// of the variant, as found in CRC catalogues.
///
/// The check value is the expected checksum of the ASCII message `"123456789"`.
/// It is not used by the algorithm itself, only to verify an implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCrcParameters", into = "RawCrcParameters")]
pub struct CrcParameters {
    name: Cow<'static, str>,
    model: CrcModel,
    check: u64,
    residue: Option<u64>,
}

impl CrcParameters {
    /// Creates a new parameter set, validating that the name is not empty and that
    /// the check value fits into the width of the model.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        model: CrcModel,
        check: u64,
    ) -> Result<Self, ParameterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ParameterError::EmptyName);
        }
        model.ensure_fits(Field::Check, check)?;

        Ok(Self {
            name,
            model,
            check,
            residue: None,
        })
    }

    /// Creates a new parameter set in a const context, panicking on an invalid name or check value.
    pub const fn new_const(name: &'static str, model: CrcModel, check: u64) -> Self {
        assert!(!name.is_empty(), "CRC parameter sets must have a name");
        assert!(model.fits(check), "check does not fit into the CRC width");

        Self {
            name: Cow::Borrowed(name),
            model,
            check,
            residue: None,
        }
    }

    /// Attaches the residue of the variant, the register contents after processing an
    /// error-free codeword.
    pub fn with_residue(mut self, residue: u64) -> Result<Self, ParameterError> {
        self.model.ensure_fits(Field::Residue, residue)?;
        self.residue = Some(residue);
        Ok(self)
    }

    /// The name of the variant, e.g. `CRC-16/XMODEM`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The algorithm parameters.
    pub const fn model(&self) -> &CrcModel {
        &self.model
    }

    /// The expected checksum of `"123456789"`.
    pub const fn check(&self) -> u64 {
        self.check
    }

    /// The residue of the variant, if it is known.
    pub const fn residue(&self) -> Option<u64> {
        self.residue
    }
}

impl AsRef<CrcModel> for CrcParameters {
    fn as_ref(&self) -> &CrcModel {
        &self.model
    }
}

/// Renders the parameter set in the notation of the CRC RevEng catalogue.
///
/// The output can be parsed again with [`str::parse`].
impl fmt::Display for CrcParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = &self.model;
        // Two characters for the `0x` prefix, followed by one digit per started nibble.
        let digits = usize::from(model.width().div_ceil(4)) + 2;

        write!(
            f,
            "width={} poly={:#0digits$x} init={:#0digits$x} refin={} refout={} xorout={:#0digits$x} check={:#0digits$x}",
            model.width(),
            model.poly(),
            model.init(),
            model.reflect_in(),
            model.reflect_out(),
            model.xorout(),
            self.check,
        )?;
        if let Some(residue) = self.residue {
            write!(f, " residue={residue:#0digits$x}")?;
        }
        write!(f, " name=\"{}\"", self.name)
    }
}

/// The serialized form of [`CrcParameters`], which is validated on conversion.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCrcParameters {
    name: String,
    width: u8,
    #[serde(serialize_with = "hex_u_int", deserialize_with = "parse_u_int")]
    poly: u64,
    #[serde(serialize_with = "hex_u_int", deserialize_with = "parse_u_int")]
    init: u64,
    refin: bool,
    refout: bool,
    #[serde(serialize_with = "hex_u_int", deserialize_with = "parse_u_int")]
    xorout: u64,
    #[serde(serialize_with = "hex_u_int", deserialize_with = "parse_u_int")]
    check: u64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "hex_option",
        deserialize_with = "parse_option"
    )]
    residue: Option<u64>,
}

impl TryFrom<RawCrcParameters> for CrcParameters {
    type Error = ParameterError;

    fn try_from(raw: RawCrcParameters) -> Result<Self, Self::Error> {
        let model = CrcModel::new(
            raw.width, raw.poly, raw.init, raw.refin, raw.refout, raw.xorout,
        )?;
        let parameters = CrcParameters::new(raw.name, model, raw.check)?;

        match raw.residue {
            Some(residue) => parameters.with_residue(residue),
            None => Ok(parameters),
        }
    }
}

impl From<CrcParameters> for RawCrcParameters {
    fn from(parameters: CrcParameters) -> Self {
        let model = parameters.model;
        Self {
            name: parameters.name.into_owned(),
            width: model.width(),
            poly: model.poly(),
            init: model.init(),
            refin: model.reflect_in(),
            refout: model.reflect_out(),
            xorout: model.xorout(),
            check: parameters.check,
            residue: parameters.residue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CRC_5_USB: CrcParameters = CrcParameters::new_const(
        "CRC-5/USB",
        CrcModel::new_const(5, 0x05, 0x1f, true, true, 0x1f),
        0x19,
    );

    #[test]
    fn empty_name_is_rejected() {
        let model = *CRC_5_USB.model();
        assert_eq!(
            CrcParameters::new("", model, 0x19),
            Err(ParameterError::EmptyName)
        );
        assert_eq!(
            CrcParameters::new("   ", model, 0x19),
            Err(ParameterError::EmptyName)
        );
    }

    #[test]
    fn check_must_fit_the_width() {
        let model = *CRC_5_USB.model();
        assert_eq!(
            CrcParameters::new("CRC-5/USB", model, 0x39),
            Err(ParameterError::ValueTooWide {
                field: Field::Check,
                value: 0x39,
                width: 5
            })
        );
    }

    #[test]
    fn residue_must_fit_the_width() {
        assert!(CRC_5_USB.clone().with_residue(0x0c).is_ok());
        assert_eq!(
            CRC_5_USB.clone().with_residue(0x20),
            Err(ParameterError::ValueTooWide {
                field: Field::Residue,
                value: 0x20,
                width: 5
            })
        );
    }

    #[test]
    fn reveng_notation() {
        let parameters = CRC_5_USB.clone().with_residue(0x0c).unwrap();

        assert_eq!(
            parameters.to_string(),
            "width=5 poly=0x05 init=0x1f refin=true refout=true xorout=0x1f check=0x19 residue=0x0c name=\"CRC-5/USB\""
        );
    }

    #[test]
    fn yaml_uses_hex_strings() {
        let yaml = serde_yaml::to_string(&CRC_5_USB).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(value["name"].as_str(), Some("CRC-5/USB"));
        assert_eq!(value["width"].as_u64(), Some(5));
        assert_eq!(value["poly"].as_str(), Some("0x5"));
        assert_eq!(value["xorout"].as_str(), Some("0x1f"));
        assert_eq!(value["refin"].as_bool(), Some(true));
        assert!(value.get("residue").is_none());

        assert_eq!(
            serde_yaml::from_str::<CrcParameters>(&yaml).unwrap(),
            CRC_5_USB
        );
    }

    #[test]
    fn yaml_accepts_plain_integers() {
        let yaml = "
name: CRC-16/XMODEM
width: 16
poly: 0x1021
init: 0
refin: false
refout: false
xorout: 0
check: 12739
residue: '0b0'
";
        let parameters = serde_yaml::from_str::<CrcParameters>(yaml).unwrap();

        assert_eq!(parameters.name(), "CRC-16/XMODEM");
        assert_eq!(parameters.model().poly(), 0x1021);
        assert_eq!(parameters.check(), 0x31C3);
        assert_eq!(parameters.residue(), Some(0));
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{"name":"CRC-8","width":8,"poly":"0x107","init":0,"refin":false,"refout":false,"xorout":0,"check":"0xf4"}"#;
        let error = serde_json::from_str::<CrcParameters>(json).unwrap_err();

        assert!(error
            .to_string()
            .contains("The poly value 0x107 does not fit into 8 bits."));
    }

    #[test]
    fn deserialization_rejects_unknown_fields() {
        let json = r#"{"name":"CRC-8","width":8,"poly":7,"init":0,"refin":false,"refout":false,"xorout":0,"check":244,"crc":1}"#;

        assert!(serde_json::from_str::<CrcParameters>(json).is_err());
    }

    #[test]
    fn json_uses_hex_strings() {
        let value = serde_json::to_value(&CRC_5_USB).unwrap();

        assert_eq!(value["poly"], "0x5");
        assert_eq!(value["width"], 5);
        assert!(value.get("residue").is_none());
    }
}
