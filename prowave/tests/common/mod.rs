use log::debug;
use prowave::host::{Clock, HostIndicators, KeyTapper, LayerControl, LedPoint, RgbMatrix};
use prowave::keymap::KeyMap;
use prowave::layout::{COL, KEYMAP, NUM_LAYER, ROW};
use prowave::types::action::Action;
use prowave::types::led_indicator::LedIndicator;
use smart_leds::RGB8;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Number of LEDs of the GMMK Pro ISO
pub const LED_COUNT: u8 = 99;

/// Color written by the built-in effect before the hooks run
pub const UNTOUCHED: RGB8 = RGB8 { r: 1, g: 2, b: 3 };

/// Board double recording everything the hooks do
pub struct TestBoard {
    pub keymap: KeyMap<'static, ROW, COL, NUM_LAYER>,
    pub points: [LedPoint; LED_COUNT as usize],
    pub colors: [RGB8; LED_COUNT as usize],
    pub writes: usize,
    pub brightness: u8,
    pub saturation: u8,
    pub indicator: LedIndicator,
    pub time: u32,
    pub tapped: Vec<Action>,
}

impl TestBoard {
    pub fn new() -> Self {
        let mut points = [LedPoint::default(); LED_COUNT as usize];
        for (i, p) in points.iter_mut().enumerate() {
            // Spread the LEDs over the 224x64 area, 15 per row
            let (row, col) = (i / 15, i % 15);
            *p = LedPoint::new((col * 16) as u8, (row * 10) as u8);
        }
        Self {
            keymap: KeyMap::new(&KEYMAP),
            points,
            colors: [UNTOUCHED; LED_COUNT as usize],
            writes: 0,
            brightness: 200,
            saturation: 255,
            indicator: LedIndicator::new(),
            time: 0,
            tapped: Vec::new(),
        }
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        self.keymap.activate_layer(layer);
        self
    }

    pub fn with_caps_lock(mut self) -> Self {
        self.indicator.set_caps_lock(true);
        self
    }

    /// Press or release the switch at the position
    pub fn key(&mut self, row: usize, col: usize, pressed: bool) -> Option<Action> {
        let action = self.keymap.process_key_event(row, col, pressed);
        debug!("key ({}, {}) pressed: {} => {:?}", row, col, pressed, action);
        action
    }

    pub fn reset_colors(&mut self) {
        self.colors = [UNTOUCHED; LED_COUNT as usize];
        self.writes = 0;
    }
}

impl LayerControl for TestBoard {
    fn highest_layer(&self) -> u8 {
        self.keymap.highest_layer()
    }

    fn is_layer_on(&self, layer: u8) -> bool {
        self.keymap.is_layer_on(layer)
    }

    fn layer_on(&mut self, layer: u8) {
        self.keymap.layer_on(layer)
    }

    fn layer_off(&mut self, layer: u8) {
        self.keymap.layer_off(layer)
    }
}

impl HostIndicators for TestBoard {
    fn led_indicator(&self) -> LedIndicator {
        self.indicator
    }
}

impl Clock for TestBoard {
    fn elapsed_ms(&self) -> u32 {
        self.time
    }
}

impl RgbMatrix for TestBoard {
    fn led_count(&self) -> u8 {
        LED_COUNT
    }

    fn point(&self, index: u8) -> LedPoint {
        self.points[index as usize]
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn saturation(&self) -> u8 {
        self.saturation
    }

    fn set_color(&mut self, index: u8, color: RGB8) {
        self.colors[index as usize] = color;
        self.writes += 1;
    }
}

impl KeyTapper for TestBoard {
    fn tap(&mut self, action: Action) {
        self.tapped.push(action);
    }
}
