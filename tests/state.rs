//! Application state: loading, art controls and the tide animation

use pretty_assertions::assert_eq;
use rusty_tide::art::ArtMode;
use rusty_tide::data::loader::parse_csv;
use rusty_tide::data::tide::TideRecord;
use rusty_tide::state::{AppState, ART_FRAME_INTERVAL, TIDE_FRAME_INTERVAL, View};

fn loaded_state() -> AppState {
    let table = parse_csv(
        "ph,Hardness,Sulfate,Potability\n\
         7.1,204.9,,0\n\
         3.7,129.4,333.1,0\n\
         8.1,224.2,310.1,1\n\
         6.5,181.1,356.9,1\n\
         9.2,188.3,326.7,0\n",
    )
    .unwrap();
    let mut state = AppState::default();
    state.set_data_table(table).unwrap();
    state
}

fn tide(height: f64) -> TideRecord {
    TideRecord {
        date: "01-01".to_string(),
        time: Some("00:00".to_string()),
        height,
    }
}

#[test]
fn test_loading_selects_first_indicator() {
    let state = loaded_state();
    assert_eq!(state.current_indicator.as_deref(), Some("ph"));
    let ds = state.dataset.as_ref().unwrap();
    assert_eq!(ds.len(), 4);
    assert_eq!(ds.dropped_rows, 1);
    assert_eq!(state.normalized.len(), 3);
    assert!(state.correlation.is_some());
    assert!(state.scene.is_some());
}

#[test]
fn test_charts_keep_rows_the_art_drops() {
    let state = loaded_state();

    // Histogram columns drop missing cells one column at a time.
    let lens: Vec<(&str, usize)> = state
        .columns
        .iter()
        .map(|c| (c.name.as_str(), c.values.len()))
        .collect();
    assert_eq!(lens, vec![("ph", 5), ("Hardness", 5), ("Sulfate", 4)]);

    // Label counts cover all five rows, not the four complete ones.
    let counts = state.label_counts().unwrap();
    assert_eq!(counts.get(&0), Some(&3));
    assert_eq!(counts.get(&1), Some(&2));

    // ph/Hardness correlation includes the row with the missing sulfate.
    let ph = [7.1, 3.7, 8.1, 6.5, 9.2];
    let hardness = [204.9, 129.4, 224.2, 181.1, 188.3];
    let expected = rusty_tide::data::stats::pearson(&ph, &hardness);
    let matrix = state.correlation.as_ref().unwrap();
    assert!((matrix.get(0, 1).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_label_counts_without_label_column() {
    let mut state = AppState {
        label_column: "Quality".to_string(),
        ..AppState::default()
    };
    state
        .set_data_table(parse_csv("ph,Hardness\n7.0,200\n").unwrap())
        .unwrap();
    assert!(state.label_counts().is_none());
}

#[test]
fn test_table_without_indicators_is_rejected() {
    let table = parse_csv("name,Potability\nwell,1\n").unwrap();
    let mut state = AppState::default();
    assert!(state.set_data_table(table).is_err());
    assert!(state.dataset.is_none());
}

#[test]
fn test_change_indicator_restarts_scene() {
    let mut state = loaded_state();
    for _ in 0..5 {
        state.tick();
    }
    assert_eq!(state.scene.as_ref().unwrap().frame(), 5);

    state.change_indicator("Hardness");
    assert_eq!(state.current_indicator.as_deref(), Some("Hardness"));
    assert_eq!(state.scene.as_ref().unwrap().frame(), 0);
}

#[test]
fn test_unknown_indicator_is_ignored() {
    let mut state = loaded_state();
    state.tick();
    state.change_indicator("Chloramines");
    assert_eq!(state.current_indicator.as_deref(), Some("ph"));
    assert_eq!(state.scene.as_ref().unwrap().frame(), 1);
}

#[test]
fn test_change_mode_restarts_scene() {
    let mut state = loaded_state();
    state.tick();
    state.change_mode(ArtMode::EnergyField);
    let scene = state.scene.as_ref().unwrap();
    assert_eq!(scene.mode(), ArtMode::EnergyField);
    assert_eq!(scene.frame(), 0);
}

#[test]
fn test_line_table_falls_back_to_first_columns() {
    let mut state = AppState::default();
    state.line_x = Some("日期".to_string());
    state.line_y = Some("数值".to_string());
    state.set_line_table(parse_csv("day,level,flag\n1,2.5,a\n").unwrap());
    assert_eq!(state.line_x.as_deref(), Some("day"));
    assert_eq!(state.line_y.as_deref(), Some("level"));

    // Selected columns survive a table that has them.
    state.set_line_columns(None, Some("flag".to_string()));
    state.set_line_table(parse_csv("flag,day\nb,2\n").unwrap());
    assert_eq!(state.line_x.as_deref(), Some("day"));
    assert_eq!(state.line_y.as_deref(), Some("flag"));
}

#[test]
fn test_tide_bars_reveal_one_per_tick_and_stop() {
    let mut state = AppState {
        view: View::Tides,
        ..AppState::default()
    };
    state.set_tides(vec![tide(1.5), tide(0.4), tide(2.1)]);
    assert!(state.tide_times.is_some());
    assert_eq!(state.tide_bar_heights(), vec![1.5, 0.0, 0.0]);
    assert!(state.animating());

    state.tick();
    assert_eq!(state.tide_bar_heights(), vec![1.5, 0.4, 0.0]);
    state.tick();
    state.tick();
    state.tick();
    assert_eq!(state.tide_bar_heights(), vec![1.5, 0.4, 2.1]);
    assert!(!state.animating());

    state.restart();
    assert_eq!(state.tide_frame, 0);
    assert!(state.animating());
}

#[test]
fn test_tides_without_times_use_index_axis() {
    let mut state = AppState::default();
    let mut undated = tide(1.0);
    undated.time = None;
    state.set_tides(vec![tide(0.5), undated]);
    assert!(state.tide_times.is_none());
    assert_eq!(state.tides.len(), 2);
}

#[test]
fn test_animation_follows_view_and_pause() {
    let mut state = loaded_state();
    assert_eq!(state.view, View::Art);
    assert!(state.animating());
    assert_eq!(state.frame_interval(), ART_FRAME_INTERVAL);

    state.playing = false;
    assert!(!state.animating());

    state.playing = true;
    state.view = View::Correlation;
    assert!(!state.animating());

    state.view = View::Tides;
    assert_eq!(state.frame_interval(), TIDE_FRAME_INTERVAL);
}
