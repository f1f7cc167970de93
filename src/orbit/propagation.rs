use chrono::NaiveDateTime;
use sgp4::{Constants, Elements};

use super::error::OrbitError;
use super::time_grid::TimeGrid;
use crate::catalog::{Catalog, SatelliteRecord};

/// Cartesian positions (TEME frame, km), one triple per grid instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl PositionSeries {
    fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, position: [f64; 3]) {
        self.x.push(position[0]);
        self.y.push(position[1]);
        self.z.push(position[2]);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn first(&self) -> Option<[f64; 3]> {
        Some([*self.x.first()?, *self.y.first()?, *self.z.first()?])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteTrack {
    pub norad_id: u32,
    pub name: String,
    pub positions: PositionSeries,
}

/// Positions of every catalog satellite over one time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSnapshot {
    pub grid: TimeGrid,
    pub tracks: Vec<SatelliteTrack>,
}

/// Propagate every satellite in `catalog` over `grid`.
///
/// A record that does not parse aborts the whole computation. Instants where
/// SGP4 itself gives up (decayed orbit, diverging eccentricity) are kept as
/// NaN so every series stays as long as the grid.
pub fn compute_positions(catalog: &Catalog, grid: TimeGrid) -> Result<OrbitSnapshot, OrbitError> {
    let instants = grid.propagation_instants()?;

    let tracks = catalog
        .records()
        .iter()
        .map(|record| propagate_record(record, &instants))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OrbitSnapshot { grid, tracks })
}

fn propagate_record(
    record: &SatelliteRecord,
    instants: &[NaiveDateTime],
) -> Result<SatelliteTrack, OrbitError> {
    let elements = Elements::from_tle(
        Some(record.name.clone()),
        record.line1.as_bytes(),
        record.line2.as_bytes(),
    )
    .map_err(|e| OrbitError::InvalidTle {
        norad_id: record.norad_id,
        message: e.to_string(),
    })?;

    let constants = Constants::from_elements(&elements).map_err(|e| OrbitError::Elements {
        norad_id: record.norad_id,
        message: e.to_string(),
    })?;

    let mut positions = PositionSeries::with_capacity(instants.len());
    let mut failed = 0usize;

    for instant in instants {
        let minutes = elements
            .datetime_to_minutes_since_epoch(instant)
            .map_err(|e| OrbitError::TimeConversion(e.to_string()))?;

        match constants.propagate(minutes) {
            Ok(prediction) => positions.push(prediction.position),
            Err(_) => {
                failed += 1;
                positions.push([f64::NAN; 3]);
            }
        }
    }

    if failed > 0 {
        log::warn!(
            "{} (NORAD {}): propagation failed at {} of {} instants",
            record.name,
            record.norad_id,
            failed,
            instants.len()
        );
    }

    Ok(SatelliteTrack {
        norad_id: record.norad_id,
        name: record.name.clone(),
        positions,
    })
}
