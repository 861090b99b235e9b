use crate::layout::{tick_font, ArcSegment, ChartLayout, Rect, HOVER_OFFSET};
use crate::spec::ChartSpec;

const TEXT_COLOR: &str = "#666";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const ZERO_LINE_COLOR: &str = "rgba(0, 0, 0, 0.25)";
const TOOLTIP_BG: &str = "rgba(0, 0, 0, 0.8)";
const TOOLTIP_TEXT: &str = "#fff";
const TOOLTIP_PAD: f64 = 6.0;
const TOOLTIP_LINE: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Text is always drawn with a middle baseline.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub font: &'a str,
    pub color: &'a str,
    pub align: TextAlign,
}

pub trait TextMeasure {
    fn measure_text(&mut self, text: &str, font: &str) -> f64;
}

/// Drawing primitives the chart renderer needs. Coordinates are CSS pixels.
pub trait RendererBackend: TextMeasure {
    fn begin_frame(&mut self, width: f64, height: f64);
    fn fill_arc(&mut self, seg: &ArcSegment, outer_r: f64, fill: &str, stroke: &str, line_width: f64);
    fn fill_rect(&mut self, rect: &Rect, fill: &str, stroke: Option<&str>, line_width: f64);
    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle<'_>);
}

/// Pointer position over a data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

pub fn render_chart(
    backend: &mut dyn RendererBackend,
    spec: &ChartSpec,
    layout: &ChartLayout,
    hover: Option<Hover>,
) {
    let (width, height) = layout.size();
    backend.begin_frame(width, height);
    match layout {
        ChartLayout::Doughnut {
            segments, legend, ..
        } => {
            for seg in segments {
                let colors = spec.colors_at(seg.index);
                let hovered = hover.map(|h| h.index) == Some(seg.index);
                let outer = if hovered { seg.outer_r + HOVER_OFFSET } else { seg.outer_r };
                backend.fill_arc(
                    seg,
                    outer,
                    &colors.fill.to_css(),
                    &colors.border.to_css(),
                    spec.border_width,
                );
            }
            let font = spec.legend_font();
            for item in legend {
                let colors = spec.colors_at(item.index);
                backend.fill_rect(
                    &item.swatch,
                    &colors.fill.to_css(),
                    Some(&colors.border.to_css()),
                    spec.border_width,
                );
                backend.draw_text(
                    &item.label,
                    item.text_x,
                    item.text_y,
                    TextStyle {
                        font: &font,
                        color: TEXT_COLOR,
                        align: TextAlign::Left,
                    },
                );
            }
        }
        ChartLayout::Bar {
            title,
            plot,
            zero_x,
            bars,
            ticks,
            tick_y,
            categories,
            axis_title,
            ..
        } => {
            if let (Some((x, y)), Some(t), Some(font)) = (title, &spec.title, spec.title_font()) {
                backend.draw_text(
                    &t.text,
                    *x,
                    *y,
                    TextStyle {
                        font: &font,
                        color: TEXT_COLOR,
                        align: TextAlign::Center,
                    },
                );
            }

            let font = tick_font();
            let small = TextStyle {
                font: &font,
                color: TEXT_COLOR,
                align: TextAlign::Center,
            };
            for tick in ticks {
                backend.draw_line((tick.x, plot.y), (tick.x, plot.y + plot.h), GRID_COLOR, 1.0);
                backend.draw_text(&tick.label, tick.x, *tick_y, small);
            }
            backend.draw_line((*zero_x, plot.y), (*zero_x, plot.y + plot.h), ZERO_LINE_COLOR, 1.0);

            for cat in categories {
                backend.draw_text(
                    &cat.label,
                    cat.x,
                    cat.y,
                    TextStyle {
                        align: TextAlign::Right,
                        ..small
                    },
                );
            }

            for bar in bars {
                let colors = spec.colors_at(bar.index);
                backend.fill_rect(
                    &bar.rect,
                    &colors.fill.to_css(),
                    Some(&colors.border.to_css()),
                    spec.border_width,
                );
            }

            if let (Some((x, y)), Some(text)) = (axis_title, &spec.x_axis_title) {
                backend.draw_text(text, *x, *y, small);
            }
        }
    }

    if let Some(h) = hover {
        draw_tooltip(backend, spec, width, height, h);
    }
}

fn draw_tooltip(
    backend: &mut dyn RendererBackend,
    spec: &ChartSpec,
    width: f64,
    height: f64,
    hover: Hover,
) {
    let Some(lines) = spec.tooltip_lines(hover.index) else {
        return;
    };
    let lines: Vec<String> = lines.into_iter().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return;
    }
    let font = tick_font();
    let text_w = lines
        .iter()
        .map(|l| backend.measure_text(l, &font))
        .fold(0.0, f64::max);
    let box_w = text_w + 2.0 * TOOLTIP_PAD;
    let box_h = lines.len() as f64 * TOOLTIP_LINE + 2.0 * TOOLTIP_PAD;

    // Keep the box inside the canvas, flipping to the other side of the pointer.
    let mut x = hover.x + 10.0;
    if x + box_w > width {
        x = (hover.x - 10.0 - box_w).max(0.0);
    }
    let mut y = hover.y + 10.0;
    if y + box_h > height {
        y = (hover.y - 10.0 - box_h).max(0.0);
    }

    backend.fill_rect(
        &Rect {
            x,
            y,
            w: box_w,
            h: box_h,
        },
        TOOLTIP_BG,
        None,
        0.0,
    );
    for (i, line) in lines.iter().enumerate() {
        backend.draw_text(
            line,
            x + TOOLTIP_PAD,
            y + TOOLTIP_PAD + TOOLTIP_LINE * (i as f64 + 0.5),
            TextStyle {
                font: &font,
                color: TOOLTIP_TEXT,
                align: TextAlign::Left,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{hit_test, layout_chart};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Begin(f64, f64),
        Arc { index: usize, outer: f64, fill: String },
        Rect { fill: String },
        Line,
        Text(String),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Recorder {
        fn arcs(&self) -> Vec<(usize, f64, String)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Arc { index, outer, fill } => Some((*index, *outer, fill.clone())),
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn rect_fills(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Rect { fill } => Some(fill.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl TextMeasure for Recorder {
        fn measure_text(&mut self, text: &str, _font: &str) -> f64 {
            text.chars().count() as f64 * 6.0
        }
    }

    impl RendererBackend for Recorder {
        fn begin_frame(&mut self, width: f64, height: f64) {
            self.ops.clear();
            self.ops.push(Op::Begin(width, height));
        }

        fn fill_arc(&mut self, seg: &ArcSegment, outer_r: f64, fill: &str, _stroke: &str, _lw: f64) {
            self.ops.push(Op::Arc {
                index: seg.index,
                outer: outer_r,
                fill: fill.to_string(),
            });
        }

        fn fill_rect(&mut self, _rect: &Rect, fill: &str, _stroke: Option<&str>, _lw: f64) {
            self.ops.push(Op::Rect {
                fill: fill.to_string(),
            });
        }

        fn draw_line(&mut self, _from: (f64, f64), _to: (f64, f64), _color: &str, _width: f64) {
            self.ops.push(Op::Line);
        }

        fn draw_text(&mut self, text: &str, _x: f64, _y: f64, _style: TextStyle<'_>) {
            self.ops.push(Op::Text(text.to_string()));
        }
    }

    fn draw(spec: &ChartSpec, hover: Option<Hover>) -> Recorder {
        let mut rec = Recorder::default();
        let layout = layout_chart(spec, 420.0, 320.0, &mut rec);
        render_chart(&mut rec, spec, &layout, hover);
        rec
    }

    #[test]
    fn doughnut_draws_three_labeled_segments() {
        let spec = ChartSpec::production_distribution();
        let rec = draw(&spec, None);
        assert_eq!(rec.ops.first(), Some(&Op::Begin(420.0, 320.0)));
        let arcs = rec.arcs();
        assert_eq!(arcs.len(), 3);
        assert_eq!(arcs[0].2, "rgba(74, 124, 89, 0.8)");
        assert_eq!(arcs[1].2, "rgba(127, 179, 107, 0.8)");
        assert_eq!(arcs[2].2, "rgba(191, 217, 148, 0.8)");
        let texts = rec.texts();
        for label in &spec.labels {
            assert!(texts.contains(&label.as_str()), "missing legend label {label}");
        }
    }

    #[test]
    fn bars_are_coloured_by_sign() {
        let spec = ChartSpec::ai_benefits();
        let rec = draw(&spec, None);
        assert_eq!(
            rec.rect_fills(),
            vec!["rgba(74, 124, 89, 0.8)", "rgba(127, 179, 107, 0.8)"]
        );
        let texts = rec.texts();
        assert!(texts.contains(&"Benefícios Potenciais com IA"));
        assert!(texts.contains(&"Variação (%)"));
        assert!(texts.contains(&"-30%"));
        assert!(texts.contains(&"50%"));
        assert!(texts.contains(&"Uso de Água"));
    }

    #[test]
    fn hover_grows_slice_and_shows_tooltip() {
        let spec = ChartSpec::production_distribution();
        let mut rec = Recorder::default();
        let layout = layout_chart(&spec, 420.0, 320.0, &mut rec);
        let ChartLayout::Doughnut { segments, .. } = &layout else {
            unreachable!()
        };
        let seg = segments[1].clone();
        let r = (seg.inner_r + seg.outer_r) / 2.0;
        let (x, y) = (seg.cx, seg.cy + r);
        let index = hit_test(&layout, x, y).expect("bottom of the ring is a slice");
        render_chart(&mut rec, &spec, &layout, Some(Hover { index, x, y }));

        let arcs = rec.arcs();
        assert!((arcs[index].1 - (seg.outer_r + HOVER_OFFSET)).abs() < 1e-9);
        assert!(rec.texts().contains(&"Doação para Entidades: 33.3%"));
        assert!(rec.rect_fills().contains(&TOOLTIP_BG));
    }

    #[test]
    fn bar_tooltip_has_category_title() {
        let spec = ChartSpec::ai_benefits();
        let rec = draw(&spec, Some(Hover { index: 0, x: 400.0, y: 300.0 }));
        let texts = rec.texts();
        assert!(texts.contains(&" -30%"));
        assert_eq!(texts.iter().filter(|t| **t == "Uso de Água").count(), 2);
    }
}
