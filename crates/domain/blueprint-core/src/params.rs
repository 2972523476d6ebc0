//! Building parameters edited on the parameters page.
//!
//! Updates are deliberately lenient: a numeric field that does not parse is
//! stored as [`NumberInput::NotANumber`] rather than rejected, so the form
//! never loses the user's place. [`BuildingParameters::validate`] is the
//! single point where the record is checked before a conversion starts.

use blueprint_config as config;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric form value, or the sentinel left behind by unparseable input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput<T> {
    Value(T),
    NotANumber,
}

impl<T: Copy> NumberInput<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            NumberInput::Value(v) => Some(*v),
            NumberInput::NotANumber => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, NumberInput::NotANumber)
    }
}

impl NumberInput<f64> {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => NumberInput::Value(v),
            _ => NumberInput::NotANumber,
        }
    }
}

impl NumberInput<i64> {
    /// Reads the leading integer of `raw`, so "2.5" is 2 and "3 floors" is 3.
    /// Text with no leading digits, or a value outside `i64`, is `NotANumber`.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        let end = s
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
            .map_or(s.len(), |(i, _)| i);
        match s[..end].parse::<i64>() {
            Ok(v) => NumberInput::Value(v),
            Err(_) => NumberInput::NotANumber,
        }
    }
}

impl<T: fmt::Display> fmt::Display for NumberInput<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberInput::Value(v) => write!(f, "{v}"),
            NumberInput::NotANumber => f.write_str("NaN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    #[default]
    Residential,
    Commercial,
    Industrial,
    Institutional,
}

impl BuildingType {
    pub const ALL: [BuildingType; 4] = [
        BuildingType::Residential,
        BuildingType::Commercial,
        BuildingType::Industrial,
        BuildingType::Institutional,
    ];

    pub fn token(self) -> &'static str {
        match self {
            BuildingType::Residential => "residential",
            BuildingType::Commercial => "commercial",
            BuildingType::Industrial => "industrial",
            BuildingType::Institutional => "institutional",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BuildingType::Residential => "Residential",
            BuildingType::Commercial => "Commercial",
            BuildingType::Industrial => "Industrial",
            BuildingType::Institutional => "Institutional",
        }
    }
}

impl FromStr for BuildingType {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildingType::ALL
            .into_iter()
            .find(|t| t.token() == s)
            .ok_or_else(|| ParamError::UnknownBuildingType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamField {
    Length,
    Width,
    Height,
    Floors,
    Staircases,
    EntryPoints,
    BuildingType,
    AdditionalNotes,
}

impl ParamField {
    pub const ALL: [ParamField; 8] = [
        ParamField::Length,
        ParamField::Width,
        ParamField::Height,
        ParamField::Floors,
        ParamField::Staircases,
        ParamField::EntryPoints,
        ParamField::BuildingType,
        ParamField::AdditionalNotes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamField::Length => "Length (meters)",
            ParamField::Width => "Width (meters)",
            ParamField::Height => "Height (meters)",
            ParamField::Floors => "Number of Floors",
            ParamField::Staircases => "Staircases",
            ParamField::EntryPoints => "Entry Points",
            ParamField::BuildingType => "Building Type",
            ParamField::AdditionalNotes => "Additional Notes",
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamField::Length => "length",
            ParamField::Width => "width",
            ParamField::Height => "height",
            ParamField::Floors => "floors",
            ParamField::Staircases => "staircases",
            ParamField::EntryPoints => "entry points",
            ParamField::BuildingType => "building type",
            ParamField::AdditionalNotes => "additional notes",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamViolation {
    #[error("{0} is not a number")]
    NotANumber(ParamField),
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: ParamField, value: f64 },
    #[error("{field} must be at least {min} (got {value})")]
    BelowMinimum {
        field: ParamField,
        min: i64,
        value: i64,
    },
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: ParamField,
        min: i64,
        max: i64,
        value: i64,
    },
}

impl ParamViolation {
    pub fn field(&self) -> ParamField {
        match self {
            ParamViolation::NotANumber(field) => *field,
            ParamViolation::NonPositive { field, .. }
            | ParamViolation::BelowMinimum { field, .. }
            | ParamViolation::OutOfRange { field, .. } => *field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("unknown building type '{0}'")]
    UnknownBuildingType(String),
    #[error("{} invalid building parameter(s): {}", .0.len(), join_violations(.0))]
    Invalid(Vec<ParamViolation>),
}

fn join_violations(v: &[ParamViolation]) -> String {
    v.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingParameters {
    pub length: NumberInput<f64>,
    pub width: NumberInput<f64>,
    pub height: NumberInput<f64>,
    pub floors: NumberInput<i64>,
    pub staircases: NumberInput<i64>,
    pub entry_points: NumberInput<i64>,
    pub building_type: BuildingType,
    #[serde(default)]
    pub additional_notes: String,
}

impl Default for BuildingParameters {
    fn default() -> Self {
        Self {
            length: NumberInput::Value(config::DEFAULT_LENGTH_M),
            width: NumberInput::Value(config::DEFAULT_WIDTH_M),
            height: NumberInput::Value(config::DEFAULT_HEIGHT_M),
            floors: NumberInput::Value(config::DEFAULT_FLOORS),
            staircases: NumberInput::Value(config::DEFAULT_STAIRCASES),
            entry_points: NumberInput::Value(config::DEFAULT_ENTRY_POINTS),
            building_type: BuildingType::Residential,
            additional_notes: String::new(),
        }
    }
}

impl BuildingParameters {
    /// Returns a copy with `field` replaced by the value parsed from `raw`.
    ///
    /// Numeric fields never fail; unparseable input becomes `NotANumber`.
    /// Only an unknown building type token is rejected.
    pub fn with_field(&self, field: ParamField, raw: &str) -> Result<Self, ParamError> {
        let next = match field {
            ParamField::Length => self.clone().with_length(NumberInput::<f64>::parse(raw)),
            ParamField::Width => self.clone().with_width(NumberInput::<f64>::parse(raw)),
            ParamField::Height => self.clone().with_height(NumberInput::<f64>::parse(raw)),
            ParamField::Floors => self.clone().with_floors(NumberInput::<i64>::parse(raw)),
            ParamField::Staircases => self.clone().with_staircases(NumberInput::<i64>::parse(raw)),
            ParamField::EntryPoints => {
                self.clone().with_entry_points(NumberInput::<i64>::parse(raw))
            }
            ParamField::BuildingType => self.clone().with_building_type(raw.parse()?),
            ParamField::AdditionalNotes => self.clone().with_additional_notes(raw),
        };
        Ok(next)
    }

    pub fn with_length(mut self, v: NumberInput<f64>) -> Self {
        self.length = v;
        self
    }

    pub fn with_width(mut self, v: NumberInput<f64>) -> Self {
        self.width = v;
        self
    }

    pub fn with_height(mut self, v: NumberInput<f64>) -> Self {
        self.height = v;
        self
    }

    pub fn with_floors(mut self, v: NumberInput<i64>) -> Self {
        self.floors = v;
        self
    }

    pub fn with_staircases(mut self, v: NumberInput<i64>) -> Self {
        self.staircases = v;
        self
    }

    pub fn with_entry_points(mut self, v: NumberInput<i64>) -> Self {
        self.entry_points = v;
        self
    }

    pub fn with_building_type(mut self, v: BuildingType) -> Self {
        self.building_type = v;
        self
    }

    pub fn with_additional_notes(mut self, v: impl Into<String>) -> Self {
        self.additional_notes = v.into();
        self
    }

    /// Text form of a field, as the form would display it.
    pub fn raw_value(&self, field: ParamField) -> String {
        match field {
            ParamField::Length => self.length.to_string(),
            ParamField::Width => self.width.to_string(),
            ParamField::Height => self.height.to_string(),
            ParamField::Floors => self.floors.to_string(),
            ParamField::Staircases => self.staircases.to_string(),
            ParamField::EntryPoints => self.entry_points.to_string(),
            ParamField::BuildingType => self.building_type.token().to_string(),
            ParamField::AdditionalNotes => self.additional_notes.clone(),
        }
    }

    pub fn violations(&self) -> Vec<ParamViolation> {
        let mut out = Vec::new();

        for (field, v) in [
            (ParamField::Length, self.length),
            (ParamField::Width, self.width),
            (ParamField::Height, self.height),
        ] {
            match v {
                NumberInput::NotANumber => out.push(ParamViolation::NotANumber(field)),
                NumberInput::Value(value) if value <= 0.0 => {
                    out.push(ParamViolation::NonPositive { field, value })
                }
                NumberInput::Value(_) => {}
            }
        }

        match self.floors {
            NumberInput::NotANumber => out.push(ParamViolation::NotANumber(ParamField::Floors)),
            NumberInput::Value(value) if value < config::MIN_FLOORS => {
                out.push(ParamViolation::BelowMinimum {
                    field: ParamField::Floors,
                    min: config::MIN_FLOORS,
                    value,
                })
            }
            NumberInput::Value(_) => {}
        }

        for (field, v) in [
            (ParamField::Staircases, self.staircases),
            (ParamField::EntryPoints, self.entry_points),
        ] {
            match v {
                NumberInput::NotANumber => out.push(ParamViolation::NotANumber(field)),
                NumberInput::Value(value)
                    if !(config::MIN_COUNT..=config::MAX_COUNT).contains(&value) =>
                {
                    out.push(ParamViolation::OutOfRange {
                        field,
                        min: config::MIN_COUNT,
                        max: config::MAX_COUNT,
                        value,
                    })
                }
                NumberInput::Value(_) => {}
            }
        }

        out
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ParamError::Invalid(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_initial_values() {
        let p = BuildingParameters::default();
        assert_eq!(p.length, NumberInput::Value(20.0));
        assert_eq!(p.width, NumberInput::Value(15.0));
        assert_eq!(p.height, NumberInput::Value(10.0));
        assert_eq!(p.floors, NumberInput::Value(2));
        assert_eq!(p.staircases, NumberInput::Value(2));
        assert_eq!(p.entry_points, NumberInput::Value(2));
        assert_eq!(p.building_type, BuildingType::Residential);
        assert!(p.additional_notes.is_empty());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn non_numeric_input_becomes_sentinel_in_that_field_only() {
        let base = BuildingParameters::default();
        let next = base.with_field(ParamField::Width, "wide").unwrap();

        assert!(next.width.is_nan());
        assert_eq!(next, base.clone().with_width(NumberInput::NotANumber));
        // Original record is untouched.
        assert_eq!(base.width, NumberInput::Value(15.0));
    }

    #[test]
    fn integer_fields_keep_the_leading_integer() {
        let p = BuildingParameters::default()
            .with_field(ParamField::Floors, "2.5")
            .unwrap();
        assert_eq!(p.floors, NumberInput::Value(2));

        assert_eq!(NumberInput::<i64>::parse(" -1.9"), NumberInput::Value(-1));
        assert_eq!(NumberInput::<i64>::parse("3 floors"), NumberInput::Value(3));
        assert!(NumberInput::<i64>::parse("two").is_nan());
        assert!(NumberInput::<i64>::parse("-").is_nan());
        assert!(NumberInput::<i64>::parse(".5").is_nan());
    }

    #[test]
    fn numeric_input_is_trimmed() {
        let p = BuildingParameters::default()
            .with_field(ParamField::Length, "  32.5 ")
            .unwrap();
        assert_eq!(p.length, NumberInput::Value(32.5));
    }

    #[test]
    fn infinite_dimension_is_not_a_number() {
        assert!(NumberInput::<f64>::parse("inf").is_nan());
        assert!(NumberInput::<f64>::parse("NaN").is_nan());
    }

    #[test]
    fn unknown_building_type_is_rejected() {
        let err = BuildingParameters::default()
            .with_field(ParamField::BuildingType, "castle")
            .unwrap_err();
        assert_eq!(err, ParamError::UnknownBuildingType("castle".into()));
    }

    #[test]
    fn notes_pass_through_verbatim() {
        let p = BuildingParameters::default()
            .with_field(ParamField::AdditionalNotes, "  roof garden ")
            .unwrap();
        assert_eq!(p.additional_notes, "  roof garden ");
    }

    #[test]
    fn validation_collects_every_violation() {
        let p = BuildingParameters::default()
            .with_length(NumberInput::NotANumber)
            .with_height(NumberInput::Value(0.0))
            .with_floors(NumberInput::Value(0))
            .with_staircases(NumberInput::Value(5))
            .with_entry_points(NumberInput::Value(-1));

        let ParamError::Invalid(v) = p.validate().unwrap_err() else {
            panic!("expected Invalid");
        };
        let fields: Vec<_> = v.iter().map(ParamViolation::field).collect();
        assert_eq!(
            fields,
            vec![
                ParamField::Length,
                ParamField::Height,
                ParamField::Floors,
                ParamField::Staircases,
                ParamField::EntryPoints,
            ]
        );
    }

    #[test]
    fn raw_value_renders_sentinel_as_nan() {
        let p = BuildingParameters::default().with_floors(NumberInput::NotANumber);
        assert_eq!(p.raw_value(ParamField::Floors), "NaN");
        assert_eq!(p.raw_value(ParamField::Length), "20");
        assert_eq!(p.raw_value(ParamField::BuildingType), "residential");
    }
}
