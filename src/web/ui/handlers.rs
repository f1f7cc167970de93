use axum::extract::State;
use chrono::Utc;

use crate::orbit::OrbitSnapshot;
use crate::scene::build_scene;
use crate::web::error::WebError;
use crate::web::state::AppState;

use super::templates::OrbitsTemplate;

const CHART_ID: &str = "orbits";

pub async fn orbits(State(state): State<AppState>) -> Result<OrbitsTemplate, WebError> {
    let snapshot = state.positions.get_or_compute(&state.catalog, Utc::now())?;
    Ok(orbits_page(&snapshot, &state.source))
}

pub fn orbits_page(snapshot: &OrbitSnapshot, source: &str) -> OrbitsTemplate {
    let instants = snapshot.grid.instants();
    let label = |i: Option<&chrono::DateTime<Utc>>| {
        i.map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_default()
    };

    OrbitsTemplate {
        source: source.to_string(),
        satellite_count: snapshot.tracks.len(),
        window_start: label(instants.first()),
        window_end: label(instants.last()),
        chart: build_scene(snapshot).to_inline_html(Some(CHART_ID)),
    }
}
