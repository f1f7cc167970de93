use plotly::{
    common::{ColorScale, ColorScalePalette, Line, Marker, Mode},
    layout::{AspectMode, LayoutScene},
    Layout, Plot, Scatter3D, Surface,
};

use super::earth::EarthMesh;
use super::palette::color_for;
use crate::orbit::OrbitSnapshot;

/// Earth surface plus a path and a marker per satellite.
///
/// The marker sits on the first sample, i.e. where the satellite was at the
/// start of the window, not its latest position.
pub fn build_scene(snapshot: &OrbitSnapshot) -> Plot {
    let mut plot = Plot::new();

    let earth = EarthMesh::default();
    plot.add_trace(
        Surface::new(earth.z)
            .x(earth.x)
            .y(earth.y)
            .color_scale(ColorScale::Palette(ColorScalePalette::Earth))
            .opacity(0.7)
            .show_scale(false)
            .name("Earth"),
    );

    let epochs: Vec<String> = snapshot
        .grid
        .instants()
        .iter()
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .collect();

    for (index, track) in snapshot.tracks.iter().enumerate() {
        let color = color_for(index);
        let series = &track.positions;

        plot.add_trace(
            Scatter3D::new(series.x.clone(), series.y.clone(), series.z.clone())
                .mode(Mode::Lines)
                .line(Line::new().color(color).width(1.0))
                .name(format!("Path {}", track.norad_id))
                .hover_text_array(epochs.clone())
                .show_legend(false),
        );

        if let Some([x, y, z]) = series.first() {
            plot.add_trace(
                Scatter3D::new(vec![x], vec![y], vec![z])
                    .mode(Mode::Markers)
                    .marker(Marker::new().size(5).color(color))
                    .name(format!("NORAD {}", track.norad_id)),
            );
        }
    }

    plot.set_layout(Layout::new().scene(LayoutScene::new().aspect_mode(AspectMode::Data)));
    plot
}
