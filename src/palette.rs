use egui::Color32;

/// Canvas background, a near-white off-white.
pub const BACKGROUND: Color32 = Color32::from_rgb(0xfd, 0xfd, 0xfd);

/// The fixed preset palette offered by the color picker.
pub const PRESETS: [(&str, Color32); 16] = [
    ("Orange", Color32::from_rgb(0xff, 0x88, 0x00)),
    ("Yellow", Color32::from_rgb(0xff, 0xee, 0x33)),
    ("Green", Color32::from_rgb(0x00, 0x88, 0x00)),
    ("Blue", Color32::from_rgb(0x00, 0x00, 0xcc)),
    ("Red", Color32::from_rgb(0xff, 0x00, 0x00)),
    ("Purple", Color32::from_rgb(0x88, 0x33, 0x99)),
    ("Black", Color32::from_rgb(0x00, 0x00, 0x00)),
    ("White", Color32::from_rgb(0xff, 0xff, 0xff)),
    ("Gray", Color32::from_rgb(0xaa, 0xaa, 0xaa)),
    ("Lime green", Color32::from_rgb(0x22, 0xff, 0x00)),
    ("Light purple", Color32::from_rgb(0xcc, 0x99, 0xff)),
    ("Red orange", Color32::from_rgb(0xff, 0x55, 0x00)),
    ("Teal", Color32::from_rgb(0x66, 0xff, 0xff)),
    ("Pink", Color32::from_rgb(0xff, 0x00, 0xff)),
    ("Light brown", Color32::from_rgb(0x99, 0x66, 0x33)),
    ("Brown", Color32::from_rgb(0x66, 0x33, 0x00)),
];

/// Steps per hue transition in the default rainbow sequence.
const DEFAULT_SEGMENT_STEPS: u32 = 100;

/// A precomputed closed hue loop with a read-and-advance cursor.
///
/// Each call to [`next`](Self::next) hands out one color and steps the cursor,
/// wrapping after the last entry, so consecutive rainbow strokes pick up where
/// the previous gesture left off.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    colors: Vec<Color32>,
    cursor: usize,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::with_segment_steps(DEFAULT_SEGMENT_STEPS)
    }

    /// Build the six-segment hue loop with `steps` entries per segment.
    ///
    /// The ramp formulas (including the repetition between the first and
    /// fourth segments) reproduce the sequence this palette has always had;
    /// changing them changes every rainbow drawing.
    pub fn with_segment_steps(steps: u32) -> Self {
        let mut colors = Vec::with_capacity(6 * steps as usize);
        for r in 0..steps {
            colors.push(Color32::from_rgb((r * 255 / steps) as u8, 255, 0));
        }
        for g in (1..=steps).rev() {
            colors.push(Color32::from_rgb(255, (g * 255 / steps) as u8, 0));
        }
        for b in 0..steps {
            colors.push(Color32::from_rgb(255, 0, (b * 255 / steps) as u8));
        }
        for r in (1..=steps).rev() {
            colors.push(Color32::from_rgb((r * 255 / steps) as u8, 255, 0));
        }
        for g in 0..steps {
            colors.push(Color32::from_rgb(255, (g * 255 / steps) as u8, 0));
        }
        for b in (1..=steps).rev() {
            colors.push(Color32::from_rgb(255, 0, (b * 255 / steps) as u8));
        }
        Self { colors, cursor: 0 }
    }

    /// Return the color under the cursor, then advance (wrapping).
    pub fn next(&mut self) -> Color32 {
        let color = self.colors[self.cursor];
        self.cursor = (self.cursor + 1) % self.colors.len();
        color
    }

    /// Rewind the cursor to the start of the loop.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
