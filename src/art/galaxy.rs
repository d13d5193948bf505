use std::f64::consts::PI;

use eframe::egui::Color32;
use rand::rngs::StdRng;
use rand_distr::Normal;

use super::{Disc, Label, Marker, Sprites, linspace, mean, rotate, sample_indices, scatter};
use crate::color::{VIRIDIS, with_alpha};

const MAX_POINTS: usize = 1000;
const ROTATION_SPEED: f64 = 0.015;

/// Single spiral whose radius follows the indicator value.
#[derive(Debug, Clone)]
pub struct GalaxyScene {
    pub frame: usize,
    /// Unrotated positions.
    points: Vec<[f64; 2]>,
    base_sizes: Vec<f64>,
    fills: Vec<Color32>,
    edge: Color32,
    hole_radius: f64,
    /// Raw-value annotations around the spiral, fixed in place.
    labels: Vec<Label>,
}

impl GalaxyScene {
    pub fn new(
        raw: &[f64],
        norm: &[f64],
        edge: Color32,
        noise: &Normal<f64>,
        rng: &mut StdRng,
    ) -> Self {
        let n = norm.len().min(MAX_POINTS);
        let indices = sample_indices(norm.len(), n);
        let selected: Vec<f64> = indices.iter().map(|&i| norm[i]).collect();
        let t = linspace(0.0, 6.0 * PI, n);

        let radii: Vec<f64> = selected.iter().map(|v| 2.0 + 4.0 * v).collect();
        let points = t
            .iter()
            .zip(&radii)
            .map(|(&t, &r)| scatter([r * t.cos(), r * t.sin()], noise, rng))
            .collect();

        let step = (n / 8).max(1);
        let labels = (0..n)
            .step_by(step)
            .map(|i| Label {
                pos: [(radii[i] + 1.0) * t[i].cos(), (radii[i] + 1.0) * t[i].sin()],
                text: format!("{:.1}", raw[indices[i]]),
                color: with_alpha(Color32::WHITE, 0.7),
                size: 8.0,
            })
            .collect();

        GalaxyScene {
            frame: 0,
            points,
            base_sizes: selected.iter().map(|v| v * 80.0 + 20.0).collect(),
            fills: selected
                .iter()
                .map(|&v| with_alpha(VIRIDIS.sample(v), 0.8))
                .collect(),
            edge,
            hole_radius: 0.5 + mean(&selected) * 0.8,
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn sprites(&self) -> Sprites {
        let f = self.frame as f64;
        let angle = f * ROTATION_SPEED;
        let pulse = 1.0 + 0.3 * (f * 0.1).sin();

        let markers = self
            .points
            .iter()
            .zip(&self.base_sizes)
            .zip(&self.fills)
            .map(|((&p, &size), &fill)| {
                Marker::circle(rotate(p, angle), size * pulse, fill).with_edge(self.edge, 1.0)
            })
            .collect();

        Sprites {
            discs: vec![Disc {
                center: [0.0, 0.0],
                radius: self.hole_radius,
                color: with_alpha(Color32::BLACK, 0.9),
            }],
            markers,
            labels: self.labels.clone(),
            ..Sprites::default()
        }
    }
}
