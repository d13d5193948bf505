use eframe::egui::Color32;
use rand::Rng;
use rand::rngs::StdRng;

use super::{Label, Marker, Sprites, WORLD_X, WORLD_Y, sample_indices};
use crate::color::{hex, with_alpha};

const MAX_POINTS: usize = 800;
const ATTRACTION: f64 = 0.02;
const DAMPING: f64 = 0.99;

/// Value band of a particle: low values drift left, high values right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Mid,
    High,
}

impl Band {
    pub fn of(v: f64) -> Self {
        if v < 0.33 {
            Band::Low
        } else if v < 0.67 {
            Band::Mid
        } else {
            Band::High
        }
    }

    /// Horizontal attractor of the band.
    pub fn target_x(self) -> f64 {
        match self {
            Band::Low => -5.0,
            Band::Mid => 0.0,
            Band::High => 5.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleScene {
    pub frame: usize,
    values: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    vx: Vec<f64>,
    vy: Vec<f64>,
    color: Color32,
}

impl ParticleScene {
    pub fn new(norm: &[f64], color: Color32, rng: &mut StdRng) -> Self {
        let indices = sample_indices(norm.len(), norm.len().min(MAX_POINTS));
        let values: Vec<f64> = indices.iter().map(|&i| norm[i]).collect();

        let (mut x, mut y) = (Vec::with_capacity(values.len()), Vec::with_capacity(values.len()));
        for &v in &values {
            let (xr, yr) = match Band::of(v) {
                Band::Low => (-8.0..-2.0, -6.0..6.0),
                Band::Mid => (-2.0..2.0, -4.0..4.0),
                Band::High => (2.0..8.0, -6.0..6.0),
            };
            x.push(rng.random_range(xr));
            y.push(rng.random_range(yr));
        }
        let vx = values.iter().map(|v| (v - 0.5) * 0.3).collect();
        let vy = values
            .iter()
            .map(|_| rng.random_range(-0.15..0.15))
            .collect();

        ParticleScene {
            frame: 0,
            values,
            x,
            y,
            vx,
            vy,
            color,
        }
    }

    /// Attract towards the band centre, damp vertical drift, move, wrap.
    pub fn step(&mut self) {
        self.frame += 1;
        for i in 0..self.values.len() {
            let target = Band::of(self.values[i]).target_x();
            self.vx[i] += (target - self.x[i]) * ATTRACTION;
            self.vy[i] *= DAMPING;
            self.x[i] = wrap(self.x[i] + self.vx[i], WORLD_X);
            self.y[i] = wrap(self.y[i] + self.vy[i], WORLD_Y);
        }
    }

    pub fn sprites(&self) -> Sprites {
        let fill = with_alpha(self.color, 0.7);
        let markers = (0..self.values.len())
            .map(|i| {
                let speed = self.vx[i].hypot(self.vy[i]);
                let size = (self.values[i] * 80.0 + 30.0) * (1.0 + speed * 2.0);
                Marker::circle([self.x[i], self.y[i]], size, fill).with_edge(Color32::WHITE, 1.0)
            })
            .collect();

        let band_label = |x: f64, text: &str, color: &str| Label {
            pos: [x, -7.0],
            text: text.to_string(),
            color: hex(color),
            size: 12.0,
        };

        Sprites {
            markers,
            labels: vec![
                band_label(-6.0, "Low Values", "#ADD8E6"),
                band_label(0.0, "Medium Values", "#FFFF00"),
                band_label(6.0, "High Values", "#FFA500"),
            ],
            ..Sprites::default()
        }
    }
}

/// Past one edge of `(lo, hi)`, jump to the other.
fn wrap(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if v < lo {
        hi
    } else if v > hi {
        lo
    } else {
        v
    }
}
