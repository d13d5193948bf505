use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, pos2, vec2};
use rusty_tide::art::{MarkerShape, Sprites, WORLD_X, WORLD_Y};
use rusty_tide::color::hex;
use rusty_tide::data::stats::Summary;
use rusty_tide::state::AppState;

const BACKGROUND: &str = "#0a0a1a";
const TITLE_HEIGHT: f32 = 56.0;

// ---------------------------------------------------------------------------
// Art canvas (central panel)
// ---------------------------------------------------------------------------

/// Paint the current scene on a dark canvas.
pub fn art_view(ui: &mut Ui, state: &AppState) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let full = response.rect;
    painter.rect_filled(full, 0.0, hex(BACKGROUND));

    let Some(scene) = &state.scene else {
        painter.text(
            full.center(),
            Align2::CENTER_CENTER,
            "Open a water-quality file  (File → Open water-quality data…)",
            FontId::proportional(20.0),
            Color32::WHITE,
        );
        return;
    };

    painter.text(
        pos2(full.center().x, full.top() + 8.0),
        Align2::CENTER_TOP,
        title(state),
        FontId::proportional(18.0),
        Color32::WHITE,
    );

    let canvas = Rect::from_min_max(pos2(full.left(), full.top() + TITLE_HEIGHT), full.max);
    let view = WorldView::fit(canvas);
    paint_sprites(&painter, &view, &scene.sprites());
}

/// Mode title plus range, mean and sample count of the current indicator.
fn title(state: &AppState) -> String {
    let mode = state.art_mode;
    if !mode.uses_indicator() {
        return mode.title().to_string();
    }
    let name = state.current_indicator.as_deref().unwrap_or_default();
    let summary = state
        .dataset
        .as_ref()
        .and_then(|ds| ds.indicator(name))
        .and_then(|ind| Summary::of(&ind.values));
    match summary {
        Some(s) => format!(
            "{name} - {}\nRange: {:.1} - {:.1} | Mean: {:.2} | Samples: {}",
            mode.title(),
            s.min,
            s.max,
            s.mean,
            s.count
        ),
        None => format!("{name} - {}", mode.title()),
    }
}

/// Uniform scale from the world box to a screen rectangle, centred.
struct WorldView {
    center: Pos2,
    scale: f32,
}

impl WorldView {
    fn fit(rect: Rect) -> Self {
        let world_w = (WORLD_X.1 - WORLD_X.0) as f32;
        let world_h = (WORLD_Y.1 - WORLD_Y.0) as f32;
        let scale = (rect.width() / world_w).min(rect.height() / world_h);
        WorldView {
            center: rect.center(),
            scale,
        }
    }

    fn to_screen(&self, [x, y]: [f64; 2]) -> Pos2 {
        // World y points up.
        self.center + vec2(x as f32 * self.scale, -(y as f32) * self.scale)
    }
}

fn paint_sprites(painter: &egui::Painter, view: &WorldView, sprites: &Sprites) {
    for disc in &sprites.discs {
        painter.circle_filled(
            view.to_screen(disc.center),
            disc.radius as f32 * view.scale,
            disc.color,
        );
    }

    for line in &sprites.lines {
        let points: Vec<Pos2> = line.points.iter().map(|&p| view.to_screen(p)).collect();
        let stroke = Stroke::new(line.width, line.color);
        if line.dashed {
            painter.extend(Shape::dashed_line(&points, stroke, 6.0, 4.0));
        } else {
            painter.add(Shape::line(points, stroke));
        }
    }

    for marker in &sprites.markers {
        let center = view.to_screen(marker.pos);
        let radius = marker.radius();
        let edge = marker
            .edge
            .map_or(Stroke::NONE, |(color, width)| Stroke::new(width, color));
        match marker.shape {
            MarkerShape::Circle => {
                painter.circle(center, radius, marker.fill, edge);
            }
            MarkerShape::Star => {
                // Two overlapping triangles.
                for flip in [1.0_f32, -1.0] {
                    let tri = (0..3)
                        .map(|k| {
                            let a = std::f32::consts::FRAC_PI_2
                                + k as f32 * std::f32::consts::TAU / 3.0;
                            center + vec2(a.cos() * radius, -flip * a.sin() * radius)
                        })
                        .collect();
                    painter.add(Shape::convex_polygon(tri, marker.fill, edge));
                }
            }
        }
    }

    for label in &sprites.labels {
        painter.text(
            view.to_screen(label.pos),
            Align2::CENTER_CENTER,
            &label.text,
            FontId::proportional(label.size),
            label.color,
        );
    }

    // Legend in the top-left corner of the world box.
    let origin = view.to_screen([WORLD_X.0, WORLD_Y.1]) + vec2(12.0, 12.0);
    for (i, (name, color)) in sprites.legend.iter().enumerate() {
        let row = origin + vec2(0.0, i as f32 * 20.0);
        painter.circle(row, 6.0, *color, Stroke::new(0.5, Color32::WHITE));
        painter.text(
            row + vec2(14.0, 0.0),
            Align2::LEFT_CENTER,
            name,
            FontId::proportional(13.0),
            Color32::WHITE,
        );
    }
}
