use serde::Serialize;

use super::common::{Params, SlugOrId};

#[derive(Clone, Debug, Serialize)]
pub struct CityParams {
    pub slug_or_id: SlugOrId,
}

impl Params for CityParams {}

impl CityParams {
    pub fn new(slug_or_id: impl Into<SlugOrId>) -> Self {
        Self {
            slug_or_id: slug_or_id.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct CitiesParams {
    /// Embed each city's spots.
    #[serde(rename = "includeSpots", skip_serializing_if = "Option::is_none")]
    pub include_spots: Option<bool>,
    /// Embed each city's delivery districts.
    #[serde(rename = "includeDistricts", skip_serializing_if = "Option::is_none")]
    pub include_districts: Option<bool>,
}

impl Params for CitiesParams {}

impl CitiesParams {
    pub fn with_spots(mut self, include: bool) -> Self {
        self.include_spots = Some(include);
        self
    }

    pub fn with_districts(mut self, include: bool) -> Self {
        self.include_districts = Some(include);
        self
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SpotParams {
    pub slug_or_id: SlugOrId,
}

impl Params for SpotParams {}

impl SpotParams {
    pub fn new(slug_or_id: impl Into<SlugOrId>) -> Self {
        Self {
            slug_or_id: slug_or_id.into(),
        }
    }
}
