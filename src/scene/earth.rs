use std::f64::consts::PI;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

const LONGITUDE_SAMPLES: usize = 50;
const LATITUDE_SAMPLES: usize = 25;

/// Sphere sampled on a longitude x colatitude grid, rows by longitude.
#[derive(Debug, Clone)]
pub struct EarthMesh {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

impl EarthMesh {
    pub fn new(radius_km: f64) -> Self {
        let u = linspace(0.0, 2.0 * PI, LONGITUDE_SAMPLES);
        let v = linspace(0.0, PI, LATITUDE_SAMPLES);

        let grid = |f: &dyn Fn(f64, f64) -> f64| -> Vec<Vec<f64>> {
            u.iter()
                .map(|&u| v.iter().map(|&v| radius_km * f(u, v)).collect())
                .collect()
        };

        Self {
            x: grid(&|u, v| u.cos() * v.sin()),
            y: grid(&|u, v| u.sin() * v.sin()),
            z: grid(&|_, v| v.cos()),
        }
    }
}

impl Default for EarthMesh {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }
}

/// `n` evenly spaced values, both ends included
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_is_fifty_by_twenty_five() {
        let mesh = EarthMesh::default();
        assert_eq!(mesh.x.len(), 50);
        assert!(mesh.x.iter().all(|row| row.len() == 25));
        assert_eq!(mesh.z.len(), 50);
    }

    #[test]
    fn every_vertex_lies_on_the_sphere() {
        let mesh = EarthMesh::default();
        for i in 0..50 {
            for j in 0..25 {
                let r = (mesh.x[i][j].powi(2) + mesh.y[i][j].powi(2) + mesh.z[i][j].powi(2))
                    .sqrt();
                assert!((r - EARTH_RADIUS_KM).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn poles_are_at_first_and_last_column() {
        let mesh = EarthMesh::default();
        assert!((mesh.z[0][0] - EARTH_RADIUS_KM).abs() < 1e-9);
        assert!((mesh.z[0][24] + EARTH_RADIUS_KM).abs() < 1e-9);
    }

    #[test]
    fn linspace_includes_both_ends() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
