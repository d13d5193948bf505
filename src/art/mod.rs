/// Animated "art" scenes driven by normalized indicators.
///
/// Each scene owns its own state and advances one frame per [`Scene::step`].
/// [`Scene::sprites`] turns the current state into drawable primitives in a
/// fixed world box of `[-10, 10] × [-8, 8]`; the UI only paints them.
use eframe::egui::Color32;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::data::model::IndicatorDataset;
use crate::data::normalize::NormalizedDataset;

pub mod energy;
pub mod flow;
pub mod galaxy;
pub mod particle;
pub mod spiral;
pub mod wave;

pub const WORLD_X: (f64, f64) = (-10.0, 10.0);
pub const WORLD_Y: (f64, f64) = (-8.0, 8.0);
/// Standard deviation of the scatter around the spiral curves.
pub const SPIRAL_JITTER: f64 = 0.3;

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtMode {
    #[default]
    Galaxy,
    Particle,
    Wave,
    EnergyField,
    Flow,
    SpiralArms,
}

impl ArtMode {
    pub const ALL: [ArtMode; 6] = [
        ArtMode::Galaxy,
        ArtMode::Particle,
        ArtMode::Wave,
        ArtMode::EnergyField,
        ArtMode::Flow,
        ArtMode::SpiralArms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ArtMode::Galaxy => "🌌 Galaxy",
            ArtMode::Particle => "✨ Particle",
            ArtMode::Wave => "🌊 Wave",
            ArtMode::EnergyField => "⚡ Energy Field",
            ArtMode::Flow => "Particle Flow",
            ArtMode::SpiralArms => "Spiral Arms",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ArtMode::Galaxy => "Galaxy Mode",
            ArtMode::Particle => "Enhanced Particle Mode",
            ArtMode::Wave => "Wave Mode",
            ArtMode::EnergyField => "Energy Field Mode",
            ArtMode::Flow => "Particle Flow",
            ArtMode::SpiralArms => "Water Quality Galaxy",
        }
    }

    /// Whether the scene shows one selected indicator rather than all of them.
    pub fn uses_indicator(self) -> bool {
        !matches!(self, ArtMode::Flow | ArtMode::SpiralArms)
    }
}

// ---------------------------------------------------------------------------
// Drawable primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Star,
}

/// A scatter point. `size` is an area in square points, as in a scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: [f64; 2],
    pub size: f64,
    pub fill: Color32,
    pub edge: Option<(Color32, f32)>,
    pub shape: MarkerShape,
}

impl Marker {
    pub fn circle(pos: [f64; 2], size: f64, fill: Color32) -> Self {
        Marker {
            pos,
            size,
            fill,
            edge: None,
            shape: MarkerShape::Circle,
        }
    }

    pub fn with_edge(mut self, color: Color32, width: f32) -> Self {
        self.edge = Some((color, width));
        self
    }

    /// Screen radius in points.
    pub fn radius(&self) -> f32 {
        (self.size.max(0.0).sqrt() / 2.0) as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub width: f32,
    pub dashed: bool,
}

/// A filled disc with a radius in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    pub center: [f64; 2],
    pub radius: f64,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: [f64; 2],
    pub text: String,
    pub color: Color32,
    pub size: f32,
}

/// Everything needed to paint one frame, back to front.
#[derive(Debug, Clone, Default)]
pub struct Sprites {
    pub discs: Vec<Disc>,
    pub lines: Vec<Polyline>,
    pub markers: Vec<Marker>,
    pub labels: Vec<Label>,
    pub legend: Vec<(String, Color32)>,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// What a scene is built from.
pub struct SceneInput<'a> {
    pub dataset: &'a IndicatorDataset,
    pub normalized: &'a NormalizedDataset,
    /// Selected indicator for single-indicator modes.
    pub indicator: &'a str,
}

impl SceneInput<'_> {
    /// Raw and normalized values of the selected indicator.
    fn selected(&self) -> Option<(&[f64], &[f64])> {
        let raw = self.dataset.indicator(self.indicator)?;
        let norm = self.normalized.get(self.indicator)?;
        Some((&raw.values, norm))
    }
}

#[derive(Debug, Clone)]
pub enum Scene {
    Galaxy(galaxy::GalaxyScene),
    Particle(particle::ParticleScene),
    Wave(wave::WaveScene),
    EnergyField(energy::EnergyScene),
    Flow(flow::FlowScene),
    SpiralArms(spiral::SpiralScene),
}

impl Scene {
    /// Build a scene at frame 0. Randomness is drawn from `seed` only, so the
    /// same input and seed give the same scene.
    ///
    /// Returns `None` when the selected indicator is unknown or has no rows.
    pub fn new(mode: ArtMode, input: &SceneInput<'_>, seed: u64) -> Option<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = jitter(SPIRAL_JITTER)?;
        let scene = match mode {
            ArtMode::Flow => Scene::Flow(flow::FlowScene::new(input.normalized)?),
            ArtMode::SpiralArms => {
                Scene::SpiralArms(spiral::SpiralScene::new(input.normalized, &noise, &mut rng)?)
            }
            _ => {
                let (raw, norm) = input.selected()?;
                if norm.is_empty() {
                    return None;
                }
                let color = crate::color::indicator_color(input.indicator);
                match mode {
                    ArtMode::Galaxy => {
                        Scene::Galaxy(galaxy::GalaxyScene::new(raw, norm, color, &noise, &mut rng))
                    }
                    ArtMode::Particle => {
                        Scene::Particle(particle::ParticleScene::new(norm, color, &mut rng))
                    }
                    ArtMode::Wave => Scene::Wave(wave::WaveScene::new(norm, color)),
                    _ => Scene::EnergyField(energy::EnergyScene::new(raw, norm, color)),
                }
            }
        };
        Some(scene)
    }

    pub fn mode(&self) -> ArtMode {
        match self {
            Scene::Galaxy(_) => ArtMode::Galaxy,
            Scene::Particle(_) => ArtMode::Particle,
            Scene::Wave(_) => ArtMode::Wave,
            Scene::EnergyField(_) => ArtMode::EnergyField,
            Scene::Flow(_) => ArtMode::Flow,
            Scene::SpiralArms(_) => ArtMode::SpiralArms,
        }
    }

    pub fn frame(&self) -> usize {
        match self {
            Scene::Galaxy(s) => s.frame,
            Scene::Particle(s) => s.frame,
            Scene::Wave(s) => s.frame,
            Scene::EnergyField(s) => s.frame,
            Scene::Flow(s) => s.frame,
            Scene::SpiralArms(s) => s.frame,
        }
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        match self {
            Scene::Galaxy(s) => s.frame += 1,
            Scene::Particle(s) => s.step(),
            Scene::Wave(s) => s.frame += 1,
            Scene::EnergyField(s) => s.frame += 1,
            Scene::Flow(s) => s.frame += 1,
            Scene::SpiralArms(s) => s.frame += 1,
        }
    }

    pub fn sprites(&self) -> Sprites {
        match self {
            Scene::Galaxy(s) => s.sprites(),
            Scene::Particle(s) => s.sprites(),
            Scene::Wave(s) => s.sprites(),
            Scene::EnergyField(s) => s.sprites(),
            Scene::Flow(s) => s.sprites(),
            Scene::SpiralArms(s) => s.sprites(),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// `k` indices spread evenly over `0..n`, truncated like an integer linspace.
pub fn sample_indices(n: usize, k: usize) -> Vec<usize> {
    match (n, k) {
        (0, _) | (_, 0) => Vec::new(),
        (_, 1) => vec![0],
        _ => (0..k).map(|i| i * (n - 1) / (k - 1)).collect(),
    }
}

/// `k` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, k: usize) -> Vec<f64> {
    match k {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (k - 1) as f64;
            (0..k).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Zero-mean normal noise. `None` (and a warning) for a negative or
/// non-finite standard deviation.
pub fn jitter(std_dev: f64) -> Option<Normal<f64>> {
    Normal::new(0.0, std_dev)
        .inspect_err(|e| log::warn!("Invalid jitter {std_dev}: {e}"))
        .ok()
}

/// A point offset by independent noise on both axes.
pub fn scatter([x, y]: [f64; 2], noise: &Normal<f64>, rng: &mut StdRng) -> [f64; 2] {
    [x + noise.sample(rng), y + noise.sample(rng)]
}

/// Rotate a point about the origin.
pub fn rotate([x, y]: [f64; 2], angle: f64) -> [f64; 2] {
    let (sin, cos) = angle.sin_cos();
    [x * cos - y * sin, x * sin + y * cos]
}

/// Linear-interpolated percentile, `q` in `[0, 100]`.
pub fn percentile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let pos = (q / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
