pub mod commands;

use blueprint_core::{BuildingParameters, BuildingType, ParamError, ParamField};
use clap::{Args, ValueEnum};

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum CliBuildingType {
    Residential,
    Commercial,
    Industrial,
    Institutional,
}

impl From<CliBuildingType> for BuildingType {
    fn from(t: CliBuildingType) -> Self {
        match t {
            CliBuildingType::Residential => BuildingType::Residential,
            CliBuildingType::Commercial => BuildingType::Commercial,
            CliBuildingType::Industrial => BuildingType::Industrial,
            CliBuildingType::Institutional => BuildingType::Institutional,
        }
    }
}

/// Building parameter overrides. Numbers are taken as raw text so that bad
/// input ends up as NaN and is reported by validation, like the form does.
#[derive(Args, Clone, Debug, Default)]
pub struct ParamArgs {
    #[arg(long, help = "Length in metres")]
    pub length: Option<String>,
    #[arg(long, help = "Width in metres")]
    pub width: Option<String>,
    #[arg(long, help = "Height in metres")]
    pub height: Option<String>,
    #[arg(long)]
    pub floors: Option<String>,
    #[arg(long)]
    pub staircases: Option<String>,
    #[arg(long)]
    pub entry_points: Option<String>,
    #[arg(long, value_enum)]
    pub building_type: Option<CliBuildingType>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl ParamArgs {
    fn overrides(&self) -> Vec<(ParamField, String)> {
        let mut out: Vec<(ParamField, String)> = [
            (ParamField::Length, &self.length),
            (ParamField::Width, &self.width),
            (ParamField::Height, &self.height),
            (ParamField::Floors, &self.floors),
            (ParamField::Staircases, &self.staircases),
            (ParamField::EntryPoints, &self.entry_points),
            (ParamField::AdditionalNotes, &self.notes),
        ]
        .into_iter()
        .filter_map(|(field, raw)| raw.clone().map(|raw| (field, raw)))
        .collect();

        if let Some(t) = self.building_type {
            out.push((
                ParamField::BuildingType,
                BuildingType::from(t).token().to_string(),
            ));
        }
        out
    }

    /// Applies the given flags on top of `base`, one field at a time.
    pub fn apply(&self, base: BuildingParameters) -> Result<BuildingParameters, ParamError> {
        self.overrides()
            .into_iter()
            .try_fold(base, |params, (field, raw)| params.with_field(field, &raw))
    }
}
