use std::f64::consts::PI;

use eframe::egui::Color32;

use super::{Marker, Sprites, linspace, sample_indices};
use crate::color::{generate_palette, with_alpha};
use crate::data::normalize::NormalizedDataset;

const MAX_POINTS_PER_INDICATOR: usize = 1000;

#[derive(Debug, Clone)]
struct Stream {
    name: String,
    values: Vec<f64>,
    color: Color32,
}

/// Every indicator as a ring of particles circling at a value-driven speed.
#[derive(Debug, Clone)]
pub struct FlowScene {
    pub frame: usize,
    streams: Vec<Stream>,
}

impl FlowScene {
    pub fn new(normalized: &NormalizedDataset) -> Option<Self> {
        if normalized.is_empty() {
            return None;
        }
        let palette = generate_palette(normalized.len());
        let streams = normalized
            .iter()
            .zip(palette)
            .map(|((name, norm), color)| {
                let idx = sample_indices(norm.len(), norm.len().min(MAX_POINTS_PER_INDICATOR));
                Stream {
                    name: name.to_string(),
                    values: idx.into_iter().map(|i| norm[i]).collect(),
                    color,
                }
            })
            .collect();
        Some(FlowScene { frame: 0, streams })
    }

    /// Positions of stream `i` at the current frame.
    pub fn positions(&self, i: usize) -> Vec<[f64; 2]> {
        let Some(stream) = self.streams.get(i) else {
            return Vec::new();
        };
        let f = self.frame as f64;
        let drift_x = (f * 0.01 + i as f64).sin() * 2.0;
        let drift_y = (f * 0.01 + i as f64).cos() * 1.2;
        let offsets = linspace(0.0, 2.0 * PI, stream.values.len());
        stream
            .values
            .iter()
            .zip(offsets)
            .map(|(&v, offset)| {
                let speed = v * 0.08 + 0.02;
                let radius = v * 2.0 + 1.0;
                let angle = f * speed + offset;
                [angle.cos() * radius + drift_x, angle.sin() * radius + drift_y]
            })
            .collect()
    }

    pub fn sprites(&self) -> Sprites {
        let mut sprites = Sprites::default();
        for (i, stream) in self.streams.iter().enumerate() {
            let fill = with_alpha(stream.color, 0.7);
            sprites.markers.extend(
                self.positions(i)
                    .into_iter()
                    .zip(&stream.values)
                    .map(|(pos, &v)| Marker::circle(pos, v * 80.0 + 20.0, fill)),
            );
            sprites.legend.push((stream.name.clone(), stream.color));
        }
        sprites
    }
}
