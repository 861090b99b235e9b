use std::f64::consts::{FRAC_PI_2, TAU};

use crate::format::percent_tick;
use crate::render::TextMeasure;
use crate::spec::{ChartKind, ChartSpec, LegendPosition, DEFAULT_FONT_FAMILY};

pub const PADDING: f64 = 10.0;
pub const CUTOUT: f64 = 0.5;
pub const HOVER_OFFSET: f64 = 4.0;
pub const LEGEND_BOX_WIDTH: f64 = 40.0;
pub const LEGEND_BOX_HEIGHT: f64 = 12.0;
pub const LEGEND_ROW_HEIGHT: f64 = 22.0;
pub const CATEGORY_PERCENT: f64 = 0.8;
pub const BAR_PERCENT: f64 = 0.9;
const MAX_TICKS: usize = 11;

pub fn tick_font() -> String {
    format!("12px {DEFAULT_FONT_FAMILY}")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

/// One doughnut slice; angles in radians, canvas convention.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub inner_r: f64,
    pub outer_r: f64,
    pub start: f64,
    pub end: f64,
}

impl ArcSegment {
    fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.cx, y - self.cy);
        let dist = dx.hypot(dy);
        if dist < self.inner_r || dist > self.outer_r {
            return false;
        }
        // Offsets from 12 o'clock so slices never straddle the atan2 seam.
        let angle = (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU);
        angle >= self.start + FRAC_PI_2 && angle < self.end + FRAC_PI_2
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub index: usize,
    pub swatch: Rect,
    pub label: String,
    pub text_x: f64,
    pub text_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeom {
    pub index: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartLayout {
    Doughnut {
        width: f64,
        height: f64,
        segments: Vec<ArcSegment>,
        legend: Vec<LegendItem>,
    },
    Bar {
        width: f64,
        height: f64,
        title: Option<(f64, f64)>,
        plot: Rect,
        zero_x: f64,
        bars: Vec<BarGeom>,
        ticks: Vec<AxisTick>,
        tick_y: f64,
        categories: Vec<CategoryLabel>,
        axis_title: Option<(f64, f64)>,
    },
}

impl ChartLayout {
    pub fn size(&self) -> (f64, f64) {
        match self {
            ChartLayout::Doughnut { width, height, .. } | ChartLayout::Bar { width, height, .. } => {
                (*width, *height)
            }
        }
    }
}

/// Positions everything for `spec` in a `width` x `height` CSS-pixel box.
pub fn layout_chart(
    spec: &ChartSpec,
    width: f64,
    height: f64,
    measure: &mut dyn TextMeasure,
) -> ChartLayout {
    let width = width.max(1.0);
    let height = height.max(1.0);
    match spec.kind {
        ChartKind::Doughnut => layout_doughnut(spec, width, height, measure),
        ChartKind::HorizontalBar => layout_bar(spec, width, height, measure),
    }
}

fn layout_legend(
    spec: &ChartSpec,
    width: f64,
    bottom: f64,
    measure: &mut dyn TextMeasure,
) -> (Vec<LegendItem>, f64) {
    if spec.legend == LegendPosition::Hidden || spec.labels.is_empty() {
        return (Vec::new(), 0.0);
    }
    let font = spec.legend_font();
    let max_row = (width - 2.0 * PADDING).max(1.0);

    // Greedy row packing; each item is swatch + gap + text + trailing gap.
    let mut rows: Vec<Vec<(usize, f64)>> = vec![Vec::new()];
    let mut row_w = 0.0;
    for (index, label) in spec.labels.iter().enumerate() {
        let item_w = LEGEND_BOX_WIDTH + PADDING + measure.measure_text(label, &font) + PADDING;
        if row_w + item_w > max_row && row_w > 0.0 {
            rows.push(Vec::new());
            row_w = 0.0;
        }
        if let Some(row) = rows.last_mut() {
            row.push((index, item_w));
        }
        row_w += item_w;
    }

    let legend_h = rows.len() as f64 * LEGEND_ROW_HEIGHT + PADDING;
    let top = bottom - legend_h + PADDING;
    let mut items = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        let total: f64 = row.iter().map(|(_, w)| w).sum();
        let mut x = (width - total) / 2.0;
        let y_mid = top + r as f64 * LEGEND_ROW_HEIGHT + LEGEND_ROW_HEIGHT / 2.0;
        for (index, item_w) in row {
            items.push(LegendItem {
                index: *index,
                swatch: Rect {
                    x,
                    y: y_mid - LEGEND_BOX_HEIGHT / 2.0,
                    w: LEGEND_BOX_WIDTH,
                    h: LEGEND_BOX_HEIGHT,
                },
                label: spec.label(*index).to_string(),
                text_x: x + LEGEND_BOX_WIDTH + PADDING,
                text_y: y_mid,
            });
            x += item_w;
        }
    }
    (items, legend_h)
}

fn layout_doughnut(
    spec: &ChartSpec,
    width: f64,
    height: f64,
    measure: &mut dyn TextMeasure,
) -> ChartLayout {
    let (legend, legend_h) = layout_legend(spec, width, height - PADDING, measure);
    let area_w = (width - 2.0 * PADDING).max(0.0);
    let area_h = (height - 2.0 * PADDING - legend_h).max(0.0);
    let cx = PADDING + area_w / 2.0;
    let cy = PADDING + area_h / 2.0;
    // Leave room for the hovered slice to grow.
    let outer_r = (area_w.min(area_h) / 2.0 - spec.border_width / 2.0 - HOVER_OFFSET).max(0.0);
    let inner_r = outer_r * CUTOUT;

    let total = spec.total();
    let mut segments = Vec::with_capacity(spec.len());
    if total > 0.0 {
        let mut start = -FRAC_PI_2;
        for (index, value) in spec.values.iter().enumerate() {
            let sweep = TAU * value.abs() / total;
            segments.push(ArcSegment {
                index,
                cx,
                cy,
                inner_r,
                outer_r,
                start,
                end: start + sweep,
            });
            start += sweep;
        }
    }

    ChartLayout::Doughnut {
        width,
        height,
        segments,
        legend,
    }
}

fn layout_bar(
    spec: &ChartSpec,
    width: f64,
    height: f64,
    measure: &mut dyn TextMeasure,
) -> ChartLayout {
    let font = tick_font();
    let mut top = PADDING;
    let title = spec.title.as_ref().map(|t| {
        let block = t.size_px + 2.0 * PADDING;
        let pos = (width / 2.0, top + block / 2.0);
        top += block;
        pos
    });

    let label_w = spec
        .labels
        .iter()
        .map(|l| measure.measure_text(l, &font))
        .fold(0.0, f64::max);
    let left = PADDING + label_w + PADDING;
    let tick_block = 12.0 + 8.0;
    let axis_block = if spec.x_axis_title.is_some() { 12.0 + 8.0 } else { 0.0 };
    let bottom = height - PADDING - tick_block - axis_block;

    let plot = Rect {
        x: left,
        y: top,
        w: (width - PADDING - left).max(0.0),
        h: (bottom - top).max(0.0),
    };

    let lo = spec.values.iter().copied().fold(0.0, f64::min);
    let hi = spec.values.iter().copied().fold(0.0, f64::max);
    let tick_values = nice_ticks(lo, hi, MAX_TICKS);
    let scale_min = tick_values.first().copied().unwrap_or(lo);
    let scale_max = tick_values.last().copied().unwrap_or(hi);
    let span = if scale_max > scale_min { scale_max - scale_min } else { 1.0 };
    let x_of = |v: f64| plot.x + (v - scale_min) / span * plot.w;

    let tick_y = plot.y + plot.h + 8.0 + 6.0;
    let ticks = tick_values
        .iter()
        .map(|&value| AxisTick {
            value,
            x: x_of(value),
            label: percent_tick(value),
        })
        .collect();

    let n = spec.len().max(1) as f64;
    let band = plot.h / n;
    let thickness = band * CATEGORY_PERCENT * BAR_PERCENT;
    let zero_x = x_of(0.0);
    let mut bars = Vec::with_capacity(spec.len());
    let mut categories = Vec::with_capacity(spec.len());
    for (index, value) in spec.values.iter().enumerate() {
        let cy = plot.y + band * (index as f64 + 0.5);
        let end_x = x_of(*value);
        bars.push(BarGeom {
            index,
            rect: Rect {
                x: zero_x.min(end_x),
                y: cy - thickness / 2.0,
                w: (end_x - zero_x).abs(),
                h: thickness,
            },
        });
        categories.push(CategoryLabel {
            label: spec.label(index).to_string(),
            x: plot.x - PADDING,
            y: cy,
        });
    }

    let axis_title = spec
        .x_axis_title
        .as_ref()
        .map(|_| (plot.x + plot.w / 2.0, tick_y + 20.0));

    ChartLayout::Bar {
        width,
        height,
        title,
        plot,
        zero_x,
        bars,
        ticks,
        tick_y,
        categories,
        axis_title,
    }
}

/// Index of the data point under `(x, y)`, if any.
pub fn hit_test(layout: &ChartLayout, x: f64, y: f64) -> Option<usize> {
    match layout {
        ChartLayout::Doughnut { segments, .. } => segments
            .iter()
            .find(|s| s.contains(x, y))
            .map(|s| s.index),
        ChartLayout::Bar { bars, .. } => bars
            .iter()
            .find(|b| b.rect.contains(x, y))
            .map(|b| b.index),
    }
}

fn nice_num(raw: f64) -> f64 {
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let f = raw / base;
    let nf = if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };
    nf * base
}

/// Evenly spaced tick values covering `[min, max]` with a 1/2/5 x 10^k step.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let (min, max) = if max > min { (min, max) } else { (min - 1.0, min + 1.0) };
    let step = nice_num((max - min) / (max_ticks.max(2) - 1) as f64);
    let lo = (min / step).floor();
    let hi = (max / step).ceil();
    let count = (hi - lo).round() as i64;
    (0..=count).map(|i| (lo + i as f64) * step).collect()
}
