//! Drawing a [`HeatmapLayout`] onto any `embedded-graphics` target

pub mod canvas;
pub mod colormap;
pub mod text;
mod text_styles;

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use log::debug;

pub use canvas::Canvas;
use text_styles::{STYLE_BLACK_10, STYLE_BLACK_12, STYLE_GRAY_10};

use crate::{calendar_utils::all_weekdays_short_en, layout::HeatmapLayout};

/// Space for the two title lines
const TITLE_HEIGHT: u32 = 44;
/// Space for the weekday names
const LABEL_WIDTH: u32 = 36;
/// Space for the month names
const FOOTER_HEIGHT: u32 = 24;
const MARGIN: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
    /// Side of one day cell in pixels
    pub cell_size: u32,
    pub background: Rgb888,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            cell_size: 16,
            background: Rgb888::WHITE,
        }
    }
}

/// Pixel placement of the grid for one layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    cell: u32,
    origin: Point,
    size: Size,
}

impl Geometry {
    pub fn new(layout: &HeatmapLayout, options: &DrawOptions) -> Self {
        let cell = options.cell_size.max(1);
        let grid_width = layout.week_count * cell;
        let width = (MARGIN + LABEL_WIDTH + grid_width + MARGIN)
            .max(MARGIN + title_width(&layout.title()) + MARGIN);
        let size = Size::new(
            width,
            MARGIN + TITLE_HEIGHT + 7 * cell + FOOTER_HEIGHT + MARGIN,
        );
        Self {
            cell,
            origin: Point::new((MARGIN + LABEL_WIDTH) as i32, (MARGIN + TITLE_HEIGHT) as i32),
            size,
        }
    }

    /// Full image size
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Top left corner of the cell in column `week`, row `weekday`
    pub fn cell_origin(&self, week: u32, weekday: u8) -> Point {
        self.origin + Point::new((week * self.cell) as i32, (u32::from(weekday) * self.cell) as i32)
    }

    /// Top center of the title block
    pub fn title_anchor(&self) -> Point {
        Point::new((self.size.width / 2) as i32, MARGIN as i32)
    }

    pub fn cell_center(&self, week: u32, weekday: u8) -> Point {
        self.cell_origin(week, weekday) + Point::new((self.cell / 2) as i32, (self.cell / 2) as i32)
    }
}

/// Draw the cells, axis labels and title of `layout`
pub fn draw_heatmap<D>(
    layout: &HeatmapLayout,
    display: &mut D,
    options: &DrawOptions,
) -> Result<Geometry, D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let geometry = Geometry::new(layout, options);
    display.clear(options.background)?;

    let cell_size = Size::new(geometry.cell, geometry.cell);
    for cell in &layout.cells {
        let style = PrimitiveStyleBuilder::new()
            .fill_color(colormap::cell_color(cell.intensity))
            .stroke_color(Rgb888::BLACK)
            .stroke_width(if geometry.cell > 2 { 1 } else { 0 })
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        Rectangle::new(geometry.cell_origin(cell.week, cell.weekday), cell_size)
            .into_styled(style)
            .draw(display)?;
    }

    let half = (geometry.cell / 2) as i32;
    let right_aligned = TextStyleBuilder::new()
        .alignment(Alignment::Right)
        .baseline(Baseline::Middle)
        .build();
    for (row, name) in all_weekdays_short_en().into_iter().enumerate() {
        let anchor = geometry.cell_origin(0, row as u8) + Point::new(-4, half);
        Text::with_text_style(name, anchor, STYLE_BLACK_10, right_aligned).draw(display)?;
    }

    let centered_top = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    for label in &layout.month_labels {
        let anchor = geometry.cell_origin(label.week, 6) + Point::new(half, geometry.cell as i32 + 6);
        Text::with_text_style(label.name, anchor, STYLE_GRAY_10, centered_top).draw(display)?;
    }

    let title = layout.title();
    Text::with_text_style(&title, geometry.title_anchor(), STYLE_BLACK_12, centered_top)
        .draw(display)?;

    debug!(
        "Drew {} cells over {} weeks",
        layout.cells.len(),
        layout.week_count
    );
    Ok(geometry)
}

/// Pixel width of the widest title line
fn title_width(title: &str) -> u32 {
    let font = STYLE_BLACK_12.font;
    title
        .lines()
        .map(|line| line.chars().count() as u32)
        .max()
        .map_or(0, |chars| {
            chars * font.character_size.width + chars.saturating_sub(1) * font.character_spacing
        })
}

/// Render `layout` into a fresh [`Canvas`] sized to fit it
pub fn render_canvas(layout: &HeatmapLayout, options: &DrawOptions) -> Canvas {
    let mut canvas = Canvas::new(Geometry::new(layout, options).size());
    match draw_heatmap(layout, &mut canvas, options) {
        Ok(_) => canvas,
        Err(never) => match never {},
    }
}
