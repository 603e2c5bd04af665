pub mod common;

use prowave::config::{LightConfig, SIDE_LEDS_LEFT, SIDE_LEDS_RIGHT};
use prowave::host::RgbMatrix;
use prowave::indicator::IndicatorHook;
use prowave::layout::{FN_LAYER, SIDE_LAYER, WHITE_LAYER};
use prowave::wave::{Axis, WaveConfig, hsv_to_rgb, wave_hue};
use prowave::HookResult;
use smart_leds::RGB8;

use crate::common::{LED_COUNT, TestBoard, UNTOUCHED};

const CAPS_LED: u8 = 3;

fn is_side_led(i: u8) -> bool {
    SIDE_LEDS_LEFT.contains(&i) || SIDE_LEDS_RIGHT.contains(&i)
}

fn expected_wave(board: &TestBoard, axis: Axis, i: u8) -> RGB8 {
    let hue = wave_hue(&WaveConfig::default(), axis, board.point(i), board.time);
    hsv_to_rgb(hue, board.saturation, board.brightness)
}

#[test]
fn test_white_layer() {
    let mut board = TestBoard::new().with_layer(WHITE_LAYER);
    let result = IndicatorHook::default().render(&mut board);

    assert_eq!(result, HookResult::Handled);
    assert!(!result.runs_default());
    for color in board.colors.iter() {
        assert_eq!(*color, RGB8::new(200, 200, 200));
    }
}

#[test]
fn test_white_layer_paints_over_caps_lock() {
    let mut board = TestBoard::new().with_layer(WHITE_LAYER).with_caps_lock();
    assert_eq!(IndicatorHook::default().render(&mut board), HookResult::Handled);
    assert_eq!(board.colors[CAPS_LED as usize], RGB8::new(200, 200, 200));
}

#[test]
fn test_side_layer() {
    let mut board = TestBoard::new().with_layer(SIDE_LAYER);
    board.time = 1234;
    assert_eq!(IndicatorHook::default().render(&mut board), HookResult::Handled);

    for i in 0..LED_COUNT {
        if is_side_led(i) {
            assert_eq!(board.colors[i as usize], expected_wave(&board, Axis::Vertical, i));
        } else {
            assert_eq!(board.colors[i as usize], RGB8::new(0, 0, 0), "led {} should be off", i);
        }
    }
}

#[test]
fn test_side_layer_hue_band() {
    let mut board = TestBoard::new().with_layer(SIDE_LAYER);
    for time in (0..60_000).step_by(997) {
        board.time = time;
        IndicatorHook::default().render(&mut board);
        for i in SIDE_LEDS_LEFT.iter().chain(SIDE_LEDS_RIGHT.iter()) {
            let painted = board.colors[*i as usize];
            assert!(
                (140..=260).any(|hue| hsv_to_rgb(hue, board.saturation, board.brightness) == painted),
                "led {} painted {:?} outside the hue band at {}ms",
                i,
                painted,
                time
            );
        }
    }
}

#[test]
fn test_side_layer_with_caps_lock() {
    let mut board = TestBoard::new().with_layer(SIDE_LAYER).with_caps_lock();
    assert_eq!(IndicatorHook::default().render(&mut board), HookResult::Handled);

    assert_eq!(board.colors[CAPS_LED as usize], RGB8::new(200, 0, 0));
    assert_eq!(board.colors[0], RGB8::new(0, 0, 0));
    assert_eq!(board.colors[68], expected_wave(&board, Axis::Vertical, 68));
}

#[test]
fn test_wave_layer() {
    let mut board = TestBoard::new();
    board.time = 4321;
    assert_eq!(IndicatorHook::default().render(&mut board), HookResult::Handled);

    for i in 0..LED_COUNT {
        assert_eq!(board.colors[i as usize], expected_wave(&board, Axis::Horizontal, i));
    }
}

#[test]
fn test_wave_layer_with_caps_lock() {
    let mut board = TestBoard::new().with_caps_lock();
    board.brightness = 90;
    assert_eq!(IndicatorHook::default().render(&mut board), HookResult::Handled);

    assert_eq!(board.colors[CAPS_LED as usize], RGB8::new(90, 0, 0));
    for i in (0..LED_COUNT).filter(|i| *i != CAPS_LED) {
        assert_eq!(board.colors[i as usize], expected_wave(&board, Axis::Horizontal, i));
    }
}

#[test]
fn test_wave_moves_smoothly() {
    let config = WaveConfig::default();
    let board = TestBoard::new();
    // From boot and after about 23 days of uptime
    for start in [0u32, 2_000_000_000] {
        for i in [0u8, 14, 50, 98] {
            let point = board.point(i);
            let mut last = wave_hue(&config, Axis::Horizontal, point, start);
            for time in start + 1..start + 10_000 {
                let hue = wave_hue(&config, Axis::Horizontal, point, time);
                assert!(hue.abs_diff(last) <= 1, "hue jumped from {} to {} at {}ms", last, hue, time);
                last = hue;
            }
        }
    }

    // A quarter period later the colors have changed
    for start in [0u32, 2_000_000_000] {
        let mut board = TestBoard::new();
        board.time = start;
        IndicatorHook::default().render(&mut board);
        let before = board.colors;
        board.time = start + 2000;
        IndicatorHook::default().render(&mut board);
        assert_ne!(before, board.colors);

        // Frames 1ms apart differ by at most one degree of hue on every LED
        let mut board = TestBoard::new();
        board.time = start + 1;
        IndicatorHook::default().render(&mut board);
        for i in 0..LED_COUNT {
            let hue = wave_hue(&config, Axis::Horizontal, board.point(i), start);
            let next = board.colors[i as usize];
            assert!(
                [hue - 1, hue, hue + 1]
                    .iter()
                    .any(|h| hsv_to_rgb(*h, board.saturation, board.brightness) == next),
                "led {} jumped at {}ms",
                i,
                start
            );
        }
    }
}

#[test]
fn test_function_layer_defers_to_default() {
    let mut board = TestBoard::new().with_caps_lock();
    // Hold FN
    board.key(5, 10, true);

    let result = IndicatorHook::default().render(&mut board);
    assert_eq!(result, HookResult::DeferToDefault);
    assert!(result.runs_default());
    assert_eq!(board.writes, 0);
    assert!(board.colors.iter().all(|c| *c == UNTOUCHED));

    // Release FN, back to the wave
    board.key(5, 10, false);
    assert_eq!(IndicatorHook::default().render(&mut board), HookResult::Handled);
    assert_eq!(board.colors[CAPS_LED as usize], RGB8::new(200, 0, 0));
}

#[test]
fn test_caps_lock_over_default() {
    let hook = IndicatorHook::new(LightConfig {
        caps_lock_over_default: true,
        ..Default::default()
    });
    let mut board = TestBoard::new().with_layer(FN_LAYER);

    assert_eq!(hook.render(&mut board), HookResult::DeferToDefault);
    assert_eq!(board.writes, 0);

    board.indicator.set_caps_lock(true);
    assert_eq!(hook.render(&mut board), HookResult::DeferToDefault);
    assert_eq!(board.writes, 1);
    assert_eq!(board.colors[CAPS_LED as usize], RGB8::new(200, 0, 0));
}

#[test]
fn test_highest_layer_wins() {
    // Side layer above the white layer
    let mut board = TestBoard::new().with_layer(WHITE_LAYER).with_layer(SIDE_LAYER);
    IndicatorHook::default().render(&mut board);
    assert_eq!(board.colors[0], RGB8::new(0, 0, 0));

    // FN above the base layer, nothing is painted
    let mut board = TestBoard::new().with_layer(FN_LAYER);
    board.reset_colors();
    assert_eq!(IndicatorHook::default().render(&mut board), HookResult::DeferToDefault);
    assert_eq!(board.writes, 0);
}

#[test]
fn test_caps_lock_led_out_of_range() {
    let hook = IndicatorHook::new(LightConfig {
        caps_lock_led: 200,
        ..Default::default()
    });
    let mut board = TestBoard::new().with_caps_lock();
    assert_eq!(hook.render(&mut board), HookResult::Handled);
    assert_eq!(board.writes, LED_COUNT as usize);
}
