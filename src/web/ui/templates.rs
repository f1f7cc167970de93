use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "orbits.html")]
pub struct OrbitsTemplate {
    pub source: String,
    pub satellite_count: usize,
    pub window_start: String,
    pub window_end: String,
    /// Pre-rendered plotly `<div>` and `<script>`
    pub chart: String,
}
