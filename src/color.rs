use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours, violet through red like a
/// rainbow colour map.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    let step = if n > 1 { 1.0 / (n - 1) as f32 } else { 0.0 };
    (0..n)
        .map(|i| {
            let hue = 270.0 * (1.0 - i as f32 * step);
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Parse `#RRGGBB`, falling back to gray.
pub fn hex(code: &str) -> Color32 {
    code.parse::<Srgb<u8>>()
        .map(|c| Color32::from_rgb(c.red, c.green, c.blue))
        .unwrap_or(Color32::GRAY)
}

// ---------------------------------------------------------------------------
// Indicator colours
// ---------------------------------------------------------------------------

const INDICATOR_COLORS: &[(&str, &str)] = &[
    ("ph", "#FF6B6B"),
    ("Hardness", "#4ECDC4"),
    ("Solids", "#45B7D1"),
    ("Chloramines", "#96CEB4"),
    ("Sulfate", "#FFD93D"),
    ("Conductivity", "#A8E6CF"),
    ("Organic_carbon", "#FF8B94"),
    ("Trihalomethanes", "#B4A7D6"),
    ("Turbidity", "#D4A574"),
];

/// Arm colours of the spiral-arms scene, cycled by indicator position.
const ARM_COLORS: &[&str] = &[
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE",
];

/// Fixed colour of a known water-quality indicator, `#888888` otherwise.
pub fn indicator_color(name: &str) -> Color32 {
    INDICATOR_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map_or_else(|| hex("#888888"), |(_, c)| hex(c))
}

pub fn arm_color(index: usize) -> Color32 {
    hex(ARM_COLORS[index % ARM_COLORS.len()])
}

// ---------------------------------------------------------------------------
// Continuous colour maps
// ---------------------------------------------------------------------------

/// Piecewise-linear colour map over `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    stops: &'static [[u8; 3]],
}

pub const VIRIDIS: Gradient = Gradient {
    stops: &[
        [68, 1, 84],
        [59, 82, 139],
        [33, 145, 140],
        [94, 201, 98],
        [253, 231, 37],
    ],
};

pub const PLASMA: Gradient = Gradient {
    stops: &[
        [13, 8, 135],
        [126, 3, 168],
        [204, 71, 120],
        [248, 149, 64],
        [240, 249, 33],
    ],
};

pub const COOLWARM: Gradient = Gradient {
    stops: &[
        [59, 76, 192],
        [141, 176, 254],
        [221, 221, 221],
        [244, 154, 123],
        [180, 4, 38],
    ],
};

impl Gradient {
    /// Colour at `t`, clamped to `[0, 1]`. `NaN` maps to the first stop.
    pub fn sample(&self, t: f64) -> Color32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last.saturating_sub(1));
        let frac = (pos - i as f64) as f32;
        let a = self.stops[i];
        let b = self.stops[(i + 1).min(last)];
        let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * frac).round() as u8;
        Color32::from_rgb(lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2]))
    }
}

/// `color` with its alpha replaced by `alpha` in `[0, 1]`.
pub fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}
