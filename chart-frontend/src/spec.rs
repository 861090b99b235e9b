use crate::format::{js_number, label_percent, raw_percent};

pub const FONT_FAMILY: &str = "'Poppins', sans-serif";
pub const DEFAULT_FONT_FAMILY: &str = "'Helvetica Neue', Helvetica, Arial, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, js_number(self.a))
    }
}

pub const FOREST: Rgba = Rgba::new(74, 124, 89, 0.8);
pub const LEAF: Rgba = Rgba::new(127, 179, 107, 0.8);
pub const SPROUT: Rgba = Rgba::new(191, 217, 148, 0.8);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentColors {
    pub fill: Rgba,
    pub border: Rgba,
}

impl SegmentColors {
    /// Translucent fill with the same colour, fully opaque, as border.
    pub const fn from_fill(fill: Rgba) -> Self {
        Self {
            fill,
            border: fill.with_alpha(1.0),
        }
    }
}

/// How each data point picks its colours.
#[derive(Debug, Clone, PartialEq)]
pub enum FillRule {
    /// One entry per data point, cycling if there are fewer colours than points.
    PerSegment(Vec<SegmentColors>),
    BySign {
        negative: SegmentColors,
        non_negative: SegmentColors,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    /// Bars along the x axis, categories stacked on y.
    HorizontalBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Bottom,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipFormat {
    LabelPercent,
    RawPercent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTitle {
    pub text: String,
    pub size_px: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset_label: String,
    pub values: Vec<f64>,
    pub colors: FillRule,
    pub border_width: f64,
    pub legend: LegendPosition,
    pub legend_font_family: String,
    pub title: Option<ChartTitle>,
    pub x_axis_title: Option<String>,
    pub tooltip: TooltipFormat,
}

impl ChartSpec {
    /// Doughnut splitting the garden production three ways.
    pub fn production_distribution() -> Self {
        Self {
            kind: ChartKind::Doughnut,
            labels: vec![
                "Geração de Renda".into(),
                "Doação para Entidades".into(),
                "Consumo Próprio".into(),
            ],
            dataset_label: "Distribuição da Produção".into(),
            values: vec![33.3, 33.3, 33.3],
            colors: FillRule::PerSegment(vec![
                SegmentColors::from_fill(FOREST),
                SegmentColors::from_fill(LEAF),
                SegmentColors::from_fill(SPROUT),
            ]),
            border_width: 1.0,
            legend: LegendPosition::Bottom,
            legend_font_family: FONT_FAMILY.into(),
            title: None,
            x_axis_title: None,
            tooltip: TooltipFormat::LabelPercent,
        }
    }

    /// Horizontal bars with the expected percentage change once irrigation
    /// is driven by predictions.
    pub fn ai_benefits() -> Self {
        Self {
            kind: ChartKind::HorizontalBar,
            labels: vec!["Uso de Água".into(), "Produtividade".into()],
            dataset_label: "Mudança Percentual".into(),
            values: vec![-30.0, 50.0],
            colors: FillRule::BySign {
                negative: SegmentColors::from_fill(FOREST),
                non_negative: SegmentColors::from_fill(LEAF),
            },
            border_width: 1.0,
            legend: LegendPosition::Hidden,
            legend_font_family: FONT_FAMILY.into(),
            title: Some(ChartTitle {
                text: "Benefícios Potenciais com IA".into(),
                size_px: 16.0,
            }),
            x_axis_title: Some("Variação (%)".into()),
            tooltip: TooltipFormat::RawPercent,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().map(|v| v.abs()).sum()
    }

    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn colors_at(&self, index: usize) -> SegmentColors {
        match &self.colors {
            FillRule::PerSegment(list) if !list.is_empty() => list[index % list.len()],
            FillRule::PerSegment(_) => SegmentColors::from_fill(Rgba::new(0, 0, 0, 0.1)),
            FillRule::BySign {
                negative,
                non_negative,
            } => {
                let v = self.values.get(index).copied().unwrap_or(0.0);
                if v < 0.0 {
                    *negative
                } else {
                    *non_negative
                }
            }
        }
    }

    /// Lines shown in the hover tooltip for one data point. Bars get the
    /// category as a title line; doughnut segments carry it in the body.
    pub fn tooltip_lines(&self, index: usize) -> Option<Vec<String>> {
        let value = *self.values.get(index)?;
        let body = match self.tooltip {
            TooltipFormat::LabelPercent => label_percent(self.label(index), value),
            TooltipFormat::RawPercent => raw_percent(value),
        };
        Some(match self.kind {
            ChartKind::Doughnut => vec![body],
            ChartKind::HorizontalBar => vec![self.label(index).to_string(), body],
        })
    }

    pub fn legend_font(&self) -> String {
        format!("12px {}", self.legend_font_family)
    }

    pub fn title_font(&self) -> Option<String> {
        self.title
            .as_ref()
            .map(|t| format!("bold {}px {}", js_number(t.size_px), self.legend_font_family))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_chart_has_three_equal_shares() {
        let spec = ChartSpec::production_distribution();
        assert_eq!(spec.len(), 3);
        assert_eq!(spec.labels.len(), 3);
        assert!((spec.total() - 100.0).abs() < 0.2);
        assert!(spec.values.iter().all(|v| *v == 33.3));
        assert_eq!(
            spec.colors_at(2).fill.to_css(),
            "rgba(191, 217, 148, 0.8)"
        );
        assert_eq!(spec.colors_at(2).border.to_css(), "rgba(191, 217, 148, 1)");
    }

    #[test]
    fn benefits_chart_colours_by_sign() {
        let spec = ChartSpec::ai_benefits();
        assert_eq!(spec.values, vec![-30.0, 50.0]);
        let neg = spec.colors_at(0);
        let pos = spec.colors_at(1);
        assert_ne!(neg.fill, pos.fill);
        assert_eq!(neg.fill.to_css(), "rgba(74, 124, 89, 0.8)");
        assert_eq!(pos.fill.to_css(), "rgba(127, 179, 107, 0.8)");
        assert_eq!(neg.border.to_css(), "rgba(74, 124, 89, 1)");
    }

    #[test]
    fn zero_counts_as_non_negative() {
        let mut spec = ChartSpec::ai_benefits();
        spec.values = vec![0.0, -0.5];
        assert_eq!(spec.colors_at(0).fill, LEAF);
        assert_eq!(spec.colors_at(1).fill, FOREST);
    }

    #[test]
    fn tooltips_are_percentages() {
        let doughnut = ChartSpec::production_distribution();
        assert_eq!(
            doughnut.tooltip_lines(0),
            Some(vec!["Geração de Renda: 33.3%".to_string()])
        );
        let bars = ChartSpec::ai_benefits();
        assert_eq!(
            bars.tooltip_lines(0),
            Some(vec!["Uso de Água".to_string(), " -30%".to_string()])
        );
        assert_eq!(bars.tooltip_lines(5), None);
    }

    #[test]
    fn fonts_use_poppins() {
        let bars = ChartSpec::ai_benefits();
        assert_eq!(bars.title_font().unwrap(), "bold 16px 'Poppins', sans-serif");
        assert_eq!(ChartSpec::production_distribution().title_font(), None);
    }
}
