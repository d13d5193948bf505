use std::f64::consts::PI;

use eframe::egui::Color32;

use super::{Label, Marker, MarkerShape, Polyline, Sprites, linspace, mean, percentile, sample_indices};
use crate::color::{PLASMA, hex, with_alpha};

const MAX_POINTS: usize = 600;
/// Nodes above this percentile of energy get field lines.
const LINE_PERCENTILE: f64 = 70.0;
const LINE_NEIGHBOURS: usize = 3;
const LINE_MAX_DISTANCE: f64 = 6.0;

/// Grid of nodes distorted by their energy (normalized value).
#[derive(Debug, Clone)]
pub struct EnergyScene {
    pub frame: usize,
    base: Vec<[f64; 2]>,
    energies: Vec<f64>,
    /// Node index pairs joined by a field line.
    pub links: Vec<(usize, usize)>,
    color: Color32,
    extremes: Vec<Label>,
}

impl EnergyScene {
    pub fn new(raw: &[f64], norm: &[f64], color: Color32) -> Self {
        let n = norm.len().min(MAX_POINTS);
        let indices = sample_indices(norm.len(), n);
        let grid = (n as f64).sqrt() as usize;
        let xs = linspace(-8.0, 8.0, grid);
        let ys = linspace(-6.0, 6.0, grid);

        let energies: Vec<f64> = indices
            .iter()
            .take(grid * grid)
            .map(|&i| norm[i])
            .collect();
        let base: Vec<[f64; 2]> = energies
            .iter()
            .enumerate()
            .map(|(i, &e)| {
                let (row, col) = (i / grid, i % grid);
                let distortion = e * 2.0;
                let angle = e * 4.0 * PI;
                [
                    xs[col] + distortion * angle.cos(),
                    ys[row] + distortion * angle.sin(),
                ]
            })
            .collect();

        let links = field_links(&base, &energies);

        let mut extremes = Vec::new();
        if let (Some(max_i), Some(min_i)) = (argmax(&energies), argmin(&energies)) {
            extremes.push(Label {
                pos: [base[max_i][0], base[max_i][1] + 1.0],
                text: format!("Max: {:.1}", raw[indices[max_i]]),
                color: hex("#FFFF00"),
                size: 10.0,
            });
            extremes.push(Label {
                pos: [base[min_i][0], base[min_i][1] - 1.0],
                text: format!("Min: {:.1}", raw[indices[min_i]]),
                color: hex("#00FFFF"),
                size: 10.0,
            });
        }

        EnergyScene {
            frame: 0,
            base,
            energies,
            links,
            color,
            extremes,
        }
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// Node positions oscillating with their energy.
    fn positions(&self, tf: f64) -> Vec<[f64; 2]> {
        self.base
            .iter()
            .zip(&self.energies)
            .map(|(&[x, y], &e)| {
                let wave1 = (tf + e * 8.0).sin() * 0.3;
                let wave2 = (tf * 0.7 + e * 5.0).cos() * 0.2;
                [x + wave1 * e, y + wave2 * e]
            })
            .collect()
    }

    pub fn sprites(&self) -> Sprites {
        let tf = self.frame as f64 * 0.1;

        let line_alpha = (0.3 + 0.4 * (tf * 1.5).sin()).clamp(0.0, 1.0) as f32;
        let lines = self
            .links
            .iter()
            .map(|&(a, b)| Polyline {
                points: vec![self.base[a], self.base[b]],
                color: with_alpha(self.color, line_alpha),
                width: 2.0,
                dashed: true,
            })
            .collect();

        let mut markers: Vec<Marker> = self
            .positions(tf)
            .into_iter()
            .zip(&self.energies)
            .map(|(pos, &e)| {
                let pulse = 1.0 + 0.4 * (tf * 2.0 + e * 10.0).sin();
                let fill = PLASMA.sample((e + tf * 0.1) % 1.0);
                Marker::circle(pos, (e * 120.0 + 40.0) * pulse, with_alpha(fill, 0.8))
                    .with_edge(self.color, 2.0)
            })
            .collect();

        let core_pulse = 1.0 + 0.6 * (tf * 3.0).sin();
        markers.push(Marker {
            pos: [0.0, 0.0],
            size: (mean(&self.energies) * 200.0 + 100.0) * core_pulse,
            fill: with_alpha(Color32::WHITE, 0.9),
            edge: Some((self.color, 3.0)),
            shape: MarkerShape::Star,
        });

        Sprites {
            lines,
            markers,
            labels: self.extremes.clone(),
            ..Sprites::default()
        }
    }
}

/// Join each high-energy node to at most the next three high-energy nodes
/// that lie within `LINE_MAX_DISTANCE`.
fn field_links(pos: &[[f64; 2]], energies: &[f64]) -> Vec<(usize, usize)> {
    if energies.is_empty() {
        return Vec::new();
    }
    let threshold = percentile(energies, LINE_PERCENTILE);
    let high: Vec<usize> = (0..energies.len())
        .filter(|&i| energies[i] > threshold)
        .collect();

    let mut links = Vec::new();
    for (k, &a) in high.iter().enumerate() {
        for &b in high.iter().skip(k + 1).take(LINE_NEIGHBOURS) {
            let [x1, y1] = pos[a];
            let [x2, y2] = pos[b];
            if (x2 - x1).hypot(y2 - y1) < LINE_MAX_DISTANCE {
                links.push((a, b));
            }
        }
    }
    links
}

fn argmax(values: &[f64]) -> Option<usize> {
    (0..values.len()).max_by(|&a, &b| values[a].total_cmp(&values[b]).then(b.cmp(&a)))
}

fn argmin(values: &[f64]) -> Option<usize> {
    (0..values.len()).min_by(|&a, &b| values[a].total_cmp(&values[b]))
}
