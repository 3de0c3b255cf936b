use carboncore::charts::{Bar, LineChart, Slice, StackedAreaChart, StackedBarChart};
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
    Color, Point, Rectangle, Renderer, Size, Theme,
};
use std::f32::consts::PI;

const MARGIN: f32 = 12.0;

pub fn background() -> Color {
    Color::from_rgb(0.05, 0.05, 0.05)
}

fn grid_color() -> Color {
    Color::from_rgb(0.25, 0.25, 0.3)
}

/// Device palette shared by the multi-series charts.
pub fn palette(index: usize) -> Color {
    const COLORS: [(u8, u8, u8); 4] = [
        (0xff, 0x99, 0x99),
        (0x66, 0xb3, 0xff),
        (0x99, 0xff, 0x99),
        (0xff, 0xcc, 0x99),
    ];
    let (r, g, b) = COLORS[index % COLORS.len()];
    Color::from_rgb8(r, g, b)
}

pub fn sky_blue() -> Color {
    Color::from_rgb8(135, 206, 235)
}

pub fn current_blue() -> Color {
    Color::from_rgb8(0x1f, 0x5f, 0xd1)
}

pub fn reduction_orange() -> Color {
    Color::from_rgb8(0xff, 0xa5, 0x00)
}

pub fn emission_green() -> Color {
    Color::from_rgb8(0x2e, 0xa0, 0x43)
}

struct PlotArea {
    width: f32,
    height: f32,
    min: f64,
    max: f64,
}

impl PlotArea {
    fn new(bounds: Rectangle, min: f64, max: f64) -> Self {
        let max = if max > min { max } else { min + 1.0 };
        Self {
            width: (bounds.width - 2.0 * MARGIN).max(1.0),
            height: (bounds.height - 2.0 * MARGIN).max(1.0),
            min,
            max,
        }
    }

    fn y(&self, value: f64) -> f32 {
        let normalized = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0) as f32;
        MARGIN + self.height - normalized * self.height
    }

    fn x(&self, index: usize, count: usize) -> f32 {
        if count <= 1 {
            return MARGIN + self.width / 2.0;
        }
        MARGIN + index as f32 * self.width / (count as f32 - 1.0)
    }

    fn slot(&self, index: usize, count: usize) -> (f32, f32) {
        let slot = self.width / count.max(1) as f32;
        (MARGIN + index as f32 * slot, slot)
    }

    fn baseline(&self) -> f32 {
        self.y(self.min)
    }
}

fn frame_with_axes(renderer: &Renderer, bounds: Rectangle) -> Frame {
    let mut frame = Frame::new(renderer, bounds.size());
    frame.fill_rectangle(Point::ORIGIN, bounds.size(), background());
    let axes = Path::new(|builder| {
        builder.move_to(Point::new(MARGIN, MARGIN));
        builder.line_to(Point::new(MARGIN, bounds.height - MARGIN));
        builder.line_to(Point::new(bounds.width - MARGIN, bounds.height - MARGIN));
    });
    frame.stroke(
        &axes,
        Stroke::default().with_color(grid_color()).with_width(1.0),
    );
    frame
}

fn upper_bound<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    values.cloned().fold(0.0, f64::max)
}

#[derive(Clone)]
pub struct LinePlot {
    pub chart: LineChart,
}

impl<Message> canvas::Program<Message> for LinePlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = frame_with_axes(renderer, bounds);
        let (min, max) = self.chart.y_range.unwrap_or_else(|| {
            (
                0.0,
                upper_bound(self.chart.series.iter().flat_map(|s| s.values.iter())),
            )
        });
        let area = PlotArea::new(bounds, min, max);

        for (series_index, series) in self.chart.series.iter().enumerate() {
            let count = series.values.len();
            let color = palette(series_index);
            let path = Path::new(|builder| {
                for (i, value) in series.values.iter().enumerate() {
                    let point = Point::new(area.x(i, count), area.y(*value));
                    if i == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
            });
            frame.stroke(&path, Stroke::default().with_width(2.5).with_color(color));

            for (i, value) in series.values.iter().enumerate() {
                let marker =
                    Path::new(|builder| builder.circle(Point::new(area.x(i, count), area.y(*value)), 3.0));
                frame.fill(&marker, color);
            }
        }

        vec![frame.into_geometry()]
    }
}

#[derive(Clone)]
pub struct BarPlot {
    pub bars: Vec<Bar>,
    pub color: Color,
}

impl<Message> canvas::Program<Message> for BarPlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = frame_with_axes(renderer, bounds);
        let area = PlotArea::new(
            bounds,
            0.0,
            upper_bound(self.bars.iter().map(|bar| &bar.value)),
        );

        for (i, bar) in self.bars.iter().enumerate() {
            let (left, slot) = area.slot(i, self.bars.len());
            let top = area.y(bar.value);
            frame.fill_rectangle(
                Point::new(left + slot * 0.2, top),
                Size::new(slot * 0.6, area.baseline() - top),
                self.color,
            );
        }

        vec![frame.into_geometry()]
    }
}

#[derive(Clone)]
pub struct StackedBarPlot {
    pub chart: StackedBarChart,
}

impl StackedBarPlot {
    fn layer_color(index: usize) -> Color {
        match index {
            0 => current_blue(),
            1 => reduction_orange(),
            other => palette(other),
        }
    }
}

impl<Message> canvas::Program<Message> for StackedBarPlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = frame_with_axes(renderer, bounds);
        let count = self.chart.categories.len();
        let totals: Vec<f64> = (0..count)
            .map(|i| {
                self.chart
                    .layers
                    .iter()
                    .filter_map(|layer| layer.values.get(i))
                    .sum()
            })
            .collect();
        let area = PlotArea::new(bounds, 0.0, upper_bound(totals.iter()));

        for i in 0..count {
            let (left, slot) = area.slot(i, count);
            let mut stacked = 0.0;
            for (layer_index, layer) in self.chart.layers.iter().enumerate() {
                let value = layer.values.get(i).copied().unwrap_or_default();
                let bottom = area.y(stacked);
                stacked += value;
                let top = area.y(stacked);
                frame.fill_rectangle(
                    Point::new(left + slot * 0.25, top),
                    Size::new(slot * 0.5, bottom - top),
                    Self::layer_color(layer_index),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

#[derive(Clone)]
pub struct PiePlot {
    pub slices: Vec<Slice>,
}

impl<Message> canvas::Program<Message> for PiePlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), background());

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - MARGIN;
        let mut start = 0.0_f32;

        for (i, slice) in self.slices.iter().enumerate() {
            let sweep = (slice.share as f32 / 100.0) * 2.0 * PI;
            if sweep <= 0.0 {
                continue;
            }
            let steps = ((sweep / (2.0 * PI)) * 120.0).ceil().max(2.0) as usize;
            let wedge = Path::new(|builder| {
                builder.move_to(center);
                for step in 0..=steps {
                    let angle = start + sweep * step as f32 / steps as f32;
                    builder.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y - radius * angle.sin(),
                    ));
                }
                builder.close();
            });
            frame.fill(&wedge, palette(i));
            frame.stroke(&wedge, Stroke::default().with_color(background()).with_width(1.5));
            start += sweep;
        }

        vec![frame.into_geometry()]
    }
}

#[derive(Clone)]
pub struct AreaPlot {
    pub chart: StackedAreaChart,
}

impl<Message> canvas::Program<Message> for AreaPlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = frame_with_axes(renderer, bounds);
        let edges = self.chart.cumulative();
        let count = self.chart.categories.len();
        let max = edges
            .last()
            .map(|top| upper_bound(top.iter()))
            .unwrap_or_default();
        let area = PlotArea::new(bounds, 0.0, max);
        let floor = vec![0.0; count];

        for (layer_index, upper) in edges.iter().enumerate() {
            let lower = if layer_index == 0 {
                &floor
            } else {
                &edges[layer_index - 1]
            };
            if count == 0 {
                continue;
            }
            let band = Path::new(|builder| {
                builder.move_to(Point::new(area.x(0, count), area.y(upper[0])));
                for i in 1..count {
                    builder.line_to(Point::new(area.x(i, count), area.y(upper[i])));
                }
                for i in (0..count).rev() {
                    builder.line_to(Point::new(area.x(i, count), area.y(lower[i])));
                }
                builder.close();
            });
            frame.fill(&band, palette(layer_index));
        }

        vec![frame.into_geometry()]
    }
}
