use std::f64::consts::PI;

use eframe::egui::Color32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use super::{Disc, Marker, MarkerShape, Sprites, linspace, rotate, scatter};
use crate::color::{arm_color, with_alpha};
use crate::data::normalize::NormalizedDataset;

const ROTATION_PER_FRAME: f64 = 0.02;
const STAR_COUNT: usize = 200;
const STAR_SEED: u64 = 42;

/// One spiral arm per indicator, rotating over a fixed star field.
#[derive(Debug, Clone)]
pub struct SpiralScene {
    pub frame: usize,
    points: Vec<[f64; 2]>,
    sizes: Vec<f64>,
    colors: Vec<Color32>,
    stars: Vec<Marker>,
    legend: Vec<(String, Color32)>,
}

impl SpiralScene {
    pub fn new(
        normalized: &NormalizedDataset,
        noise: &Normal<f64>,
        rng: &mut StdRng,
    ) -> Option<Self> {
        let arms = normalized.len();
        let n_samples = normalized.iter().next().map_or(0, |(_, v)| v.len());
        let per_arm = n_samples / arms.max(1);
        if arms == 0 || per_arm == 0 {
            return None;
        }

        let mut points = Vec::with_capacity(arms * per_arm);
        let mut sizes = Vec::with_capacity(arms * per_arm);
        let mut colors = Vec::with_capacity(arms * per_arm);
        let mut legend = Vec::with_capacity(arms);

        for (arm, (name, norm)) in normalized.iter().enumerate() {
            let offset = arm as f64 * 2.0 * PI / arms as f64;
            let color = arm_color(arm);
            for t in linspace(0.0, 4.0 * PI, per_arm) {
                let r = 0.5 + 2.0 * t / (4.0 * PI);
                points.push(scatter(
                    [r * (t + offset).cos(), r * (t + offset).sin()],
                    noise,
                    rng,
                ));
            }
            // Sizes come from the first `per_arm` samples of this indicator.
            sizes.extend(norm.iter().take(per_arm).map(|v| v * 60.0 + 10.0));
            colors.extend(std::iter::repeat(with_alpha(color, 0.7)).take(per_arm));
            legend.push((name.to_string(), color));
        }

        Some(SpiralScene {
            frame: 0,
            points,
            sizes,
            colors,
            stars: star_field(),
            legend,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn sprites(&self) -> Sprites {
        let f = self.frame as f64;
        let angle = f * ROTATION_PER_FRAME;
        let breathing = 1.0 + 0.1 * (f * 0.1).sin();

        let mut markers = self.stars.clone();
        markers.extend(
            self.points
                .iter()
                .zip(&self.sizes)
                .zip(&self.colors)
                .map(|((&p, &s), &c)| {
                    Marker::circle(rotate(p, angle), s * breathing, c)
                        .with_edge(Color32::WHITE, 0.5)
                }),
        );

        Sprites {
            discs: vec![
                Disc {
                    center: [0.0, 0.0],
                    radius: 0.5,
                    color: with_alpha(Color32::WHITE, 0.1),
                },
                Disc {
                    center: [0.0, 0.0],
                    radius: 0.3,
                    color: with_alpha(Color32::BLACK, 0.9),
                },
            ],
            markers,
            legend: self.legend.clone(),
            ..Sprites::default()
        }
    }
}

/// Background stars, always the same field.
fn star_field() -> Vec<Marker> {
    let mut rng = StdRng::seed_from_u64(STAR_SEED);
    let fill = with_alpha(Color32::WHITE, 0.3);
    (0..STAR_COUNT)
        .map(|_| {
            let x = rng.random_range(-8.0..8.0);
            let y = rng.random_range(-6.0..6.0);
            let size = rng.random_range(1.0..5.0);
            Marker {
                pos: [x, y],
                size,
                fill,
                edge: None,
                shape: MarkerShape::Star,
            }
        })
        .collect()
}
