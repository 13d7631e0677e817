//! PNG bar chart of element counts.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, FontTransform, register_font};

use crate::error::{ElemTallyError, Result};
use crate::report::{ElementCount, Summary};

/// Family name fonts are registered under.
const FONT_FAMILY: &str = "sans-serif";

/// Fonts tried when none is configured.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// matplotlib's `tab20` qualitative palette; bars cycle through it.
pub const TAB20: [RGBColor; 20] = [
    RGBColor(31, 119, 180),
    RGBColor(174, 199, 232),
    RGBColor(255, 127, 14),
    RGBColor(255, 187, 120),
    RGBColor(44, 160, 44),
    RGBColor(152, 223, 138),
    RGBColor(214, 39, 40),
    RGBColor(255, 152, 150),
    RGBColor(148, 103, 189),
    RGBColor(197, 176, 213),
    RGBColor(140, 86, 75),
    RGBColor(196, 156, 148),
    RGBColor(227, 119, 194),
    RGBColor(247, 182, 210),
    RGBColor(127, 127, 127),
    RGBColor(199, 199, 199),
    RGBColor(188, 189, 34),
    RGBColor(219, 219, 141),
    RGBColor(23, 190, 207),
    RGBColor(158, 218, 229),
];

/// Draws a bar chart of already-filtered counts.
pub trait ChartRenderer {
    /// Renders one bar per entry to `path`.
    ///
    /// # Errors
    /// Returns a `Chart` error if the chart cannot be drawn or saved.
    fn render_bar_chart(&self, data: &[ElementCount], path: &Path, dpi: u32) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    Rendered,
    /// No symbol reached a count of one; nothing was written.
    Skipped,
}

/// Charts the symbols of `summary` that occurred at least once.
///
/// # Errors
/// Propagates the renderer's error.
pub fn render_chart<R>(renderer: &R, summary: &Summary, path: &Path, dpi: u32) -> Result<ChartOutcome>
where
    R: ChartRenderer + ?Sized,
{
    let data = summary.occurring();
    if data.is_empty() {
        log::info!("no element reached a count of 1; skipping {}", path.display());
        return Ok(ChartOutcome::Skipped);
    }

    renderer.render_bar_chart(data, path, dpi)?;
    log::info!("wrote chart with {} bars to {}", data.len(), path.display());
    Ok(ChartOutcome::Rendered)
}

/// Figure layout independent of resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    /// Figure width in inches.
    pub width: f64,
    /// Figure height in inches.
    pub height: f64,
    /// TrueType/OpenType font file; system fonts are searched when unset.
    pub font: Option<PathBuf>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Metal Element Counts (Count >= 1)".to_string(),
            width: 12.0,
            height: 6.0,
            font: None,
        }
    }
}

/// Pixel dimensions of a `width` x `height` inch figure at `dpi`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pixel_size(width: f64, height: f64, dpi: u32) -> (u32, u32) {
    let dpi = f64::from(dpi);
    (
        (width * dpi).round().max(1.0) as u32,
        (height * dpi).round().max(1.0) as u32,
    )
}

/// Converts typographic points to pixels at `dpi`.
#[must_use]
pub fn points_to_pixels(points: f64, dpi: u32) -> f64 {
    points * f64::from(dpi) / 72.0
}

/// [`ChartRenderer`] backed by plotters' bitmap backend.
#[derive(Debug, Clone, Default)]
pub struct PlottersRenderer {
    style: ChartStyle,
}

impl PlottersRenderer {
    #[must_use]
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render_bar_chart(&self, data: &[ElementCount], path: &Path, dpi: u32) -> Result<()> {
        if data.is_empty() {
            return Err(ElemTallyError::Chart("no data to chart".to_string()));
        }
        ensure_font(self.style.font.as_deref())?;

        draw_bars(data, path, dpi, &self.style).map_err(|e| {
            ElemTallyError::Chart(format!("failed to render {}: {e}", path.display()))
        })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn draw_bars(
    data: &[ElementCount],
    path: &Path,
    dpi: u32,
    style: &ChartStyle,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let size = pixel_size(style.width, style.height, dpi);
    let px = |points: f64| points_to_pixels(points, dpi);
    let px_i = |points: f64| px(points).round() as i32;

    let max = data.iter().map(|entry| entry.count).max().unwrap_or(1);
    // Headroom for the value labels above the tallest bar.
    let y_top = max + max / 10 + 1;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&style.title, (FONT_FAMILY, px(14.0)))
        .margin(px_i(8.0))
        .x_label_area_size(px_i(36.0))
        .y_label_area_size(px_i(36.0))
        .build_cartesian_2d((0..data.len()).into_segmented(), 0usize..y_top)?;

    let symbol_at = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(i) => data.get(*i).map(|e| e.symbol.clone()).unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Element")
        .y_desc("Count")
        .axis_desc_style((FONT_FAMILY, px(11.0)))
        .x_labels(data.len())
        .x_label_formatter(&symbol_at)
        .x_label_style(
            (FONT_FAMILY, px(10.0))
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_style((FONT_FAMILY, px(10.0)))
        .y_label_formatter(&|count| count.to_string())
        .draw()?;

    // Bars take 80% of their slot.
    let slot = f64::from(size.0) * 0.85 / data.len() as f64;
    let gap = (slot * 0.1).round() as u32;

    chart.draw_series(data.iter().enumerate().map(|(i, entry)| {
        let color = TAB20[i % TAB20.len()];
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0),
                (SegmentValue::Exact(i + 1), entry.count),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, gap, gap);
        bar
    }))?;

    let value_style = TextStyle::from((FONT_FAMILY, px(10.0)).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let lift = px_i(2.0);
    chart.draw_series(data.iter().enumerate().map(|(i, entry)| {
        EmptyElement::at((SegmentValue::CenterOf(i), entry.count))
            + Text::new(entry.count.to_string(), (0, -lift), value_style.clone())
    }))?;

    root.present()?;
    Ok(())
}

/// Registers a font under [`FONT_FAMILY`] once per process.
///
/// Only success is cached, so a later call with a different font can still succeed.
fn ensure_font(configured: Option<&Path>) -> Result<()> {
    static REGISTERED: OnceLock<PathBuf> = OnceLock::new();

    if let Some(path) = REGISTERED.get() {
        log::debug!("font already registered from {}", path.display());
        return Ok(());
    }

    let candidates: Vec<PathBuf> = configured.map_or_else(
        || SYSTEM_FONTS.iter().map(PathBuf::from).collect(),
        |path| vec![path.to_path_buf()],
    );
    let path = register_first_font(&candidates)?;
    let _ = REGISTERED.set(path);
    Ok(())
}

/// Registers the first candidate that is a readable, parseable font.
fn register_first_font(candidates: &[PathBuf]) -> Result<PathBuf> {
    for path in candidates {
        let Ok(bytes) = fs::read(path) else {
            continue;
        };
        // plotters keeps registered font data for the life of the process.
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if register_font(FONT_FAMILY, FontStyle::Normal, bytes).is_ok() {
            log::debug!("registered chart font {}", path.display());
            return Ok(path.clone());
        }
        log::warn!("{} is not a usable font", path.display());
    }

    let tried = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(ElemTallyError::Chart(format!("no usable font found (tried {tried})")))
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
