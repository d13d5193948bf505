use std::f64::consts::PI;

use eframe::egui::Color32;

use super::{Marker, Polyline, Sprites, linspace, sample_indices};
use crate::color::with_alpha;

const SECONDARY_WAVES: usize = 4;
const HIGHLIGHTS: usize = 20;

/// The indicator drawn as a wave across the canvas, with echo waves.
#[derive(Debug, Clone)]
pub struct WaveScene {
    pub frame: usize,
    xs: Vec<f64>,
    base: Vec<f64>,
    color: Color32,
}

impl WaveScene {
    pub fn new(norm: &[f64], color: Color32) -> Self {
        WaveScene {
            frame: 0,
            xs: linspace(-10.0, 10.0, norm.len()),
            base: norm.iter().map(|v| (v - 0.5) * 6.0).collect(),
            color,
        }
    }

    /// Main wave ordinates at the current frame.
    pub fn main_wave(&self) -> Vec<f64> {
        let f = self.frame as f64;
        let phase = f * 0.15;
        let modulation = 1.0 + 0.5 * (f * 0.05).sin();
        self.xs
            .iter()
            .zip(&self.base)
            .map(|(&x, &b)| b * modulation + 3.0 * (x * 0.4 + phase).sin())
            .collect()
    }

    fn secondary_wave(&self, i: usize) -> Vec<f64> {
        let phase = self.frame as f64 * 0.15 + i as f64 * PI / 4.0;
        let frequency = 0.4 + i as f64 * 0.1;
        let amplitude = 2.0 - i as f64 * 0.3;
        let weight = 1.0 - i as f64 * 0.2;
        self.xs
            .iter()
            .zip(&self.base)
            .map(|(&x, &b)| b * weight + amplitude * (x * frequency + phase).sin())
            .collect()
    }

    pub fn sprites(&self) -> Sprites {
        let zip = |ys: Vec<f64>| -> Vec<[f64; 2]> {
            self.xs.iter().zip(ys).map(|(&x, y)| [x, y]).collect()
        };

        let mut lines: Vec<Polyline> = (0..SECONDARY_WAVES)
            .map(|i| Polyline {
                points: zip(self.secondary_wave(i)),
                color: with_alpha(self.color, 0.7 - i as f32 * 0.15),
                width: 3.0 - i as f32 * 0.5,
                dashed: false,
            })
            .collect();
        lines.push(Polyline {
            points: zip(self.main_wave()),
            color: with_alpha(self.color, 0.9),
            width: 4.0,
            dashed: false,
        });

        let markers = sample_indices(self.xs.len(), HIGHLIGHTS)
            .into_iter()
            .map(|i| {
                Marker::circle([self.xs[i], self.base[i]], 80.0, Color32::WHITE)
                    .with_edge(self.color, 2.0)
            })
            .collect();

        Sprites {
            lines,
            markers,
            ..Sprites::default()
        }
    }
}
