//! Falling-glyph backdrop for the hero section.
//!
//! Columns hold a fall position in rows (multiples of the font size). A column
//! only becomes eligible for a restart once it has dropped past the bottom
//! edge, and then restarts with a 1.5% chance per frame so that columns drift
//! apart instead of resetting together.

use crate::random::Entropy;

pub const GLYPHS: &str = "01ABCDEFGHJKLMNOPQRSTUVWXYZ#$%&*+-/<>(){}[]";
pub const MIN_FONT_SIZE: f64 = 12.0;
pub const MAX_FONT_SIZE: f64 = 20.0;
pub const WIDTH_PER_FONT_PX: f64 = 120.0;
pub const COLUMN_SPACING: f64 = 0.8;
pub const FALL_STEP: f64 = 0.6;
/// A column past the bottom restarts when its roll exceeds this (1.5%).
pub const RESET_ROLL_ABOVE: f64 = 0.985;
pub const START_SPREAD_ROWS: f64 = 50.0;
pub const TRAIL_FADE: &str = "rgba(0, 0, 0, 0.08)";
pub const GLYPH_COLOR: &str = "#004526";
pub const GLYPH_SHADOW: &str = "rgba(0, 69, 38, 0.6)";
pub const GLYPH_SHADOW_BLUR: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainLayout {
    pub font_size: f64,
    pub column_spacing: f64,
    pub columns: usize,
}

impl RainLayout {
    pub fn for_width(width: f64) -> Self {
        let font_size = (width / WIDTH_PER_FONT_PX)
            .floor()
            .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        let column_spacing = font_size * COLUMN_SPACING;
        let columns = (width.max(0.0) / column_spacing).ceil() as usize;

        Self {
            font_size,
            column_spacing,
            columns,
        }
    }

    pub fn font(&self) -> String {
        format!("{}px Orbitron, monospace", self.font_size)
    }
}

/// Canvas size in CSS pixels and in backing-store pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub device_pixel_ratio: f64,
}

impl CanvasGeometry {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let device_pixel_ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.max(1.0)
        } else {
            1.0
        };

        Self {
            css_width,
            css_height,
            pixel_width: (css_width * device_pixel_ratio).floor().max(0.0) as u32,
            pixel_height: (css_height * device_pixel_ratio).floor().max(0.0) as u32,
            device_pixel_ratio,
        }
    }
}

/// Drawing target for the rain. The browser implementation wraps a 2D canvas
/// context; nothing else writes to it.
pub trait RainSurface {
    /// Applies a new size, DPR transform and font.
    fn configure(&mut self, geometry: &CanvasGeometry, font: &str);

    fn fade(&mut self, color: &str, width: f64, height: f64);

    fn set_glyph_style(&mut self, color: &str, shadow_color: &str, shadow_blur: f64);

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64);
}

pub struct CodeRain {
    glyphs: Vec<char>,
    layout: RainLayout,
    geometry: CanvasGeometry,
    columns: Vec<f64>,
}

impl Default for CodeRain {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeRain {
    pub fn new() -> Self {
        Self {
            glyphs: GLYPHS.chars().collect(),
            layout: RainLayout::for_width(0.0),
            geometry: CanvasGeometry::new(0.0, 0.0, 1.0),
            columns: Vec::new(),
        }
    }

    pub fn layout(&self) -> RainLayout {
        self.layout
    }

    pub fn geometry(&self) -> CanvasGeometry {
        self.geometry
    }

    pub fn columns(&self) -> &[f64] {
        &self.columns
    }

    pub fn resize(
        &mut self,
        surface: &mut impl RainSurface,
        rng: &mut impl Entropy,
        css_width: f64,
        css_height: f64,
        device_pixel_ratio: f64,
    ) {
        self.geometry = CanvasGeometry::new(css_width, css_height, device_pixel_ratio);
        self.layout = RainLayout::for_width(css_width);
        self.columns = (0..self.layout.columns).map(|_| start_row(rng)).collect();
        surface.configure(&self.geometry, &self.layout.font());
    }

    pub fn frame(&mut self, surface: &mut impl RainSurface, rng: &mut impl Entropy) {
        surface.fade(
            TRAIL_FADE,
            f64::from(self.geometry.pixel_width),
            f64::from(self.geometry.pixel_height),
        );
        surface.set_glyph_style(GLYPH_COLOR, GLYPH_SHADOW, GLYPH_SHADOW_BLUR);

        let height = self.geometry.css_height;
        for (index, row) in self.columns.iter_mut().enumerate() {
            let x = index as f64 * self.layout.column_spacing;
            let y = *row * self.layout.font_size;
            surface.draw_glyph(pick_glyph(&self.glyphs, rng), x, y);

            if y > height && rng.next_unit() > RESET_ROLL_ABOVE {
                *row = start_row(rng);
            } else {
                *row += FALL_STEP;
            }
        }
    }
}

fn start_row(rng: &mut impl Entropy) -> f64 {
    (rng.next_unit() * -START_SPREAD_ROWS).floor()
}

fn pick_glyph(glyphs: &[char], rng: &mut impl Entropy) -> char {
    let index = (rng.next_unit() * glyphs.len() as f64).floor() as usize;
    glyphs[index.min(glyphs.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;

    #[derive(Default)]
    struct RecordingSurface {
        configured: Vec<(CanvasGeometry, String)>,
        fades: Vec<(String, f64, f64)>,
        glyphs: Vec<(char, f64, f64)>,
    }

    impl RainSurface for RecordingSurface {
        fn configure(&mut self, geometry: &CanvasGeometry, font: &str) {
            self.configured.push((*geometry, font.to_string()));
        }

        fn fade(&mut self, color: &str, width: f64, height: f64) {
            self.fades.push((color.to_string(), width, height));
        }

        fn set_glyph_style(&mut self, _color: &str, _shadow_color: &str, _shadow_blur: f64) {}

        fn draw_glyph(&mut self, glyph: char, x: f64, y: f64) {
            self.glyphs.push((glyph, x, y));
        }
    }

    #[test]
    fn layout_for_1200_wide_container() {
        let layout = RainLayout::for_width(1_200.0);

        assert_eq!(layout.font_size, 12.0);
        assert_eq!(layout.columns, 125);
        assert_eq!(layout.font(), "12px Orbitron, monospace");
    }

    #[test]
    fn font_size_clamps_to_upper_bound() {
        assert_eq!(RainLayout::for_width(1_800.0).font_size, 15.0);
        assert_eq!(RainLayout::for_width(4_000.0).font_size, 20.0);
        assert_eq!(RainLayout::for_width(4_000.0).columns, 250);
    }

    #[test]
    fn geometry_scales_backing_store_by_dpr() {
        let geometry = CanvasGeometry::new(1_000.5, 600.0, 2.0);
        assert_eq!(geometry.pixel_width, 2_001);
        assert_eq!(geometry.pixel_height, 1_200);

        let low = CanvasGeometry::new(800.0, 600.0, 0.5);
        assert_eq!(low.device_pixel_ratio, 1.0);
        assert_eq!(low.pixel_width, 800);
    }

    #[test]
    fn resize_seeds_columns_above_the_top_edge() {
        let mut rain = CodeRain::new();
        let mut surface = RecordingSurface::default();
        let mut rng = Scripted::new(&[0.0, 0.5, 0.99]);

        rain.resize(&mut surface, &mut rng, 1_200.0, 400.0, 1.0);

        assert_eq!(rain.columns().len(), 125);
        assert_eq!(&rain.columns()[..3], [0.0, -25.0, -50.0]);
        assert!(rain.columns().iter().all(|row| (-50.0..=0.0).contains(row)));
        assert_eq!(surface.configured.len(), 1);
        assert_eq!(surface.configured[0].1, "12px Orbitron, monospace");
    }

    #[test]
    fn frame_fades_draws_every_column_and_advances() {
        let mut rain = CodeRain::new();
        let mut surface = RecordingSurface::default();
        let mut rng = Scripted::new(&[0.5]);
        rain.resize(&mut surface, &mut rng, 240.0, 400.0, 2.0);
        let before = rain.columns().to_vec();

        rain.frame(&mut surface, &mut rng);

        assert_eq!(surface.fades, [(TRAIL_FADE.to_string(), 480.0, 800.0)]);
        assert_eq!(surface.glyphs.len(), before.len());
        assert_eq!(surface.glyphs[1].1, rain.layout().column_spacing);
        assert_eq!(surface.glyphs[1].2, -25.0 * 12.0);
        for (after, before) in rain.columns().iter().zip(&before) {
            assert_eq!(*after, before + FALL_STEP);
        }
    }

    #[test]
    fn column_past_bottom_resets_only_on_rare_draw() {
        let mut rain = CodeRain::new();
        let mut surface = RecordingSurface::default();
        rain.resize(&mut surface, &mut Scripted::new(&[0.0]), 12.0, 100.0, 1.0);
        rain.columns = vec![10.0];

        // glyph pick, then the reset roll fails: keep falling
        rain.frame(&mut surface, &mut Scripted::new(&[0.1, 0.985]));
        assert_eq!(rain.columns(), [10.6]);

        // glyph pick, reset roll passes, new start row
        rain.frame(&mut surface, &mut Scripted::new(&[0.1, 0.99, 0.2]));
        assert_eq!(rain.columns(), [-10.0]);
    }

    #[test]
    fn column_above_bottom_never_rolls_for_reset() {
        let mut rain = CodeRain::new();
        let mut surface = RecordingSurface::default();
        rain.resize(&mut surface, &mut Scripted::new(&[0.0]), 12.0, 1_000.0, 1.0);
        rain.columns = vec![5.0];

        let mut rng = Scripted::new(&[0.999]);
        rain.frame(&mut surface, &mut rng);

        assert_eq!(rng.drawn(), 1, "only the glyph pick draws");
        assert_eq!(rain.columns(), [5.6]);
        assert_eq!(surface.glyphs.last().map(|g| g.0), Some(']'));
    }
}
