//! Art scenes: reproducibility, bounds and the helpers they share

use eframe::egui::Color32;
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rusty_tide::art::particle::{Band, ParticleScene};
use rusty_tide::art::wave::WaveScene;
use rusty_tide::art::{
    ArtMode, SPIRAL_JITTER, Scene, SceneInput, WORLD_X, WORLD_Y, jitter, linspace, percentile,
    sample_indices, scatter,
};
use rusty_tide::data::loader::parse_csv;
use rusty_tide::data::model::IndicatorDataset;
use rusty_tide::data::normalize::NormalizedDataset;

/// Three indicators over `rows` samples plus a label column.
fn dataset(rows: usize) -> (IndicatorDataset, NormalizedDataset) {
    let mut text = String::from("ph,Hardness,Turbidity,Potability\n");
    for i in 0..rows {
        let t = i as f64;
        text.push_str(&format!(
            "{},{},{},{}\n",
            7.0 + (t * 0.37).sin() * 2.0,
            150.0 + (t * 13.0) % 97.0,
            3.0 + (t * 0.11).cos(),
            i % 2
        ));
    }
    let table = parse_csv(&text).unwrap();
    let ds = IndicatorDataset::from_table(&table, "Potability").unwrap();
    let norm = NormalizedDataset::new(&ds);
    (ds, norm)
}

fn scene(
    mode: ArtMode,
    ds: &IndicatorDataset,
    norm: &NormalizedDataset,
    seed: u64,
) -> Option<Scene> {
    let input = SceneInput {
        dataset: ds,
        normalized: norm,
        indicator: "ph",
    };
    Scene::new(mode, &input, seed)
}

#[test]
fn test_every_mode_builds_at_frame_zero() {
    let (ds, norm) = dataset(120);
    for mode in ArtMode::ALL {
        let s = scene(mode, &ds, &norm, 42).unwrap();
        assert_eq!(s.mode(), mode);
        assert_eq!(s.frame(), 0);
        assert!(!s.sprites().markers.is_empty(), "{mode:?} drew nothing");
    }
}

#[test]
fn test_same_seed_same_scene() {
    let (ds, norm) = dataset(200);
    for mode in [ArtMode::Galaxy, ArtMode::Particle, ArtMode::SpiralArms] {
        let mut a = scene(mode, &ds, &norm, 7).unwrap();
        let mut b = scene(mode, &ds, &norm, 7).unwrap();
        for _ in 0..5 {
            a.step();
            b.step();
        }
        assert_eq!(a.sprites().markers, b.sprites().markers);
    }
}

#[test]
fn test_different_seed_different_galaxy() {
    let (ds, norm) = dataset(200);
    let a = scene(ArtMode::Galaxy, &ds, &norm, 1).unwrap();
    let b = scene(ArtMode::Galaxy, &ds, &norm, 2).unwrap();
    assert_ne!(a.sprites().markers, b.sprites().markers);
}

#[test]
fn test_step_advances_frame() {
    let (ds, norm) = dataset(50);
    let mut s = scene(ArtMode::Wave, &ds, &norm, 42).unwrap();
    s.step();
    s.step();
    assert_eq!(s.frame(), 2);
}

#[test]
fn test_unknown_indicator_has_no_scene() {
    let (ds, norm) = dataset(50);
    let input = SceneInput {
        dataset: &ds,
        normalized: &norm,
        indicator: "Sulfate",
    };
    assert!(Scene::new(ArtMode::Galaxy, &input, 42).is_none());
    // Multi-indicator modes ignore the selection.
    assert!(Scene::new(ArtMode::Flow, &input, 42).is_some());
}

#[test]
fn test_empty_normalized_dataset_has_no_scene() {
    let (ds, _) = dataset(10);
    let empty = NormalizedDataset::default();
    let input = SceneInput {
        dataset: &ds,
        normalized: &empty,
        indicator: "ph",
    };
    assert!(Scene::new(ArtMode::Flow, &input, 42).is_none());
    assert!(Scene::new(ArtMode::SpiralArms, &input, 42).is_none());
}

#[test]
fn test_galaxy_is_capped_at_one_thousand_points() {
    let (ds, norm) = dataset(1500);
    let Some(Scene::Galaxy(galaxy)) = scene(ArtMode::Galaxy, &ds, &norm, 42) else {
        panic!("expected a galaxy scene");
    };
    assert_eq!(galaxy.len(), 1000);
}

#[test]
fn test_galaxy_pulse_does_not_compound() {
    let (ds, norm) = dataset(100);
    let mut s = scene(ArtMode::Galaxy, &ds, &norm, 42).unwrap();
    // Pulse is 1.0 at frame 0.
    let base = s.sprites().markers[0].size;
    for frame in 1..=100 {
        s.step();
        let expected = base * (1.0 + 0.3 * (frame as f64 * 0.1).sin());
        assert!((s.sprites().markers[0].size - expected).abs() < 1e-9);
    }
}

#[test]
fn test_particles_stay_inside_world_box() {
    let norm: Vec<f64> = (0..300).map(|i| f64::from(i) / 300.0).collect();
    let mut rng = StdRng::seed_from_u64(42);
    let mut scene = ParticleScene::new(&norm, Color32::RED, &mut rng);
    for _ in 0..500 {
        scene.step();
    }
    for (&x, &y) in scene.x.iter().zip(&scene.y) {
        assert!(x >= WORLD_X.0 && x <= WORLD_X.1, "x = {x}");
        assert!(y >= WORLD_Y.0 && y <= WORLD_Y.1, "y = {y}");
    }
    assert_eq!(scene.frame, 500);
}

#[test]
fn test_particle_bands() {
    assert_eq!(Band::of(0.1), Band::Low);
    assert_eq!(Band::of(0.33), Band::Mid);
    assert_eq!(Band::of(0.66), Band::Mid);
    assert_eq!(Band::of(0.67), Band::High);
    assert_eq!(Band::Low.target_x(), -5.0);
    assert_eq!(Band::High.target_x(), 5.0);
}

#[test]
fn test_wave_has_one_ordinate_per_sample() {
    let norm = [0.0, 0.25, 0.5, 0.75, 1.0];
    let wave = WaveScene::new(&norm, Color32::BLUE);
    let ys = wave.main_wave();
    assert_eq!(ys.len(), norm.len());
    // At frame 0: (v - 0.5) * 6 plus 3 * sin(0.4 x), x from -10 to 10.
    let expected = (0.0 - 0.5) * 6.0 + 3.0 * (-4.0_f64).sin();
    assert!((ys[0] - expected).abs() < 1e-12);
}

#[test]
fn test_energy_links_are_short() {
    let (ds, norm) = dataset(400);
    let s = scene(ArtMode::EnergyField, &ds, &norm, 42).unwrap();
    let sprites = s.sprites();
    let dashed: Vec<_> = sprites.lines.iter().filter(|l| l.dashed).collect();
    assert!(!dashed.is_empty());
    for line in dashed {
        let [a, b] = [line.points[0], line.points[1]];
        let d = (a[0] - b[0]).hypot(a[1] - b[1]);
        assert!(d < 6.0, "link of length {d}");
    }
    assert!(sprites.labels.iter().any(|l| l.text.starts_with("Max: ")));
    assert!(sprites.labels.iter().any(|l| l.text.starts_with("Min: ")));
}

#[test]
fn test_flow_and_spiral_legends_list_every_indicator() {
    let (ds, norm) = dataset(90);
    for mode in [ArtMode::Flow, ArtMode::SpiralArms] {
        let legend: Vec<String> = scene(mode, &ds, &norm, 42)
            .unwrap()
            .sprites()
            .legend
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(legend, vec!["ph", "Hardness", "Turbidity"]);
    }
}

#[test]
fn test_sample_indices() {
    assert_eq!(sample_indices(10, 5), vec![0, 2, 4, 6, 9]);
    assert_eq!(sample_indices(3, 3), vec![0, 1, 2]);
    assert_eq!(sample_indices(5, 1), vec![0]);
    assert!(sample_indices(0, 4).is_empty());
}

#[test]
fn test_linspace() {
    assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
}

#[test]
fn test_percentile() {
    let values = [4.0, 1.0, 3.0, 2.0, 5.0];
    assert_eq!(percentile(&values, 0.0), 1.0);
    assert_eq!(percentile(&values, 50.0), 3.0);
    assert_eq!(percentile(&values, 100.0), 5.0);
    assert!((percentile(&values, 70.0) - 3.8).abs() < 1e-12);
    assert!(percentile(&[], 50.0).is_nan());
}

#[test]
fn test_jitter_rejects_invalid_spread() {
    assert!(jitter(-0.3).is_none());
    assert!(jitter(f64::NAN).is_none());
    assert!(jitter(SPIRAL_JITTER).is_some());
}

#[test]
fn test_scatter_spread_matches_jitter() {
    let noise = jitter(SPIRAL_JITTER).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let offsets: Vec<f64> = (0..5000)
        .flat_map(|_| scatter([1.0, -2.0], &noise, &mut rng))
        .zip([1.0, -2.0].into_iter().cycle())
        .map(|(v, centre)| v - centre)
        .collect();
    let n = offsets.len() as f64;
    let mean = offsets.iter().sum::<f64>() / n;
    let std = (offsets.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
    assert!(mean.abs() < 0.02, "mean = {mean}");
    assert!((std - SPIRAL_JITTER).abs() < 0.02, "std = {std}");
}
