use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use placepicker_boundary::{Coordinate, PlaceResult, ViewportBounds};

/// Recorded widget events of a single session.
#[derive(Deserialize, Debug, Default)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Script {
    pub fn try_load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Unable to read script {}", path.display()))?;
        let script = serde_json::from_str(&json)
            .with_context(|| format!("Invalid script {}", path.display()))?;
        Ok(script)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Event {
    MapLoad {
        #[serde(default)]
        bounds: Option<ViewportBounds>,
    },
    MapUnmount,
    BoundsChanged {
        #[serde(default)]
        bounds: Option<ViewportBounds>,
    },
    AutocompleteLoad,
    PlaceChanged {
        place: PlaceResult,
    },
    SearchBoxLoad,
    PlacesChanged {
        #[serde(default)]
        places: Option<Vec<PlaceResult>>,
    },
    #[serde(rename_all = "camelCase")]
    MapClick {
        #[serde(default)]
        pos: Option<Coordinate>,
        #[serde(default)]
        place_id: Option<String>,
    },
    MarkerDragEnd {
        #[serde(default)]
        pos: Option<Coordinate>,
    },
}
