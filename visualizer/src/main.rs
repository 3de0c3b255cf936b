use carboncore::charts::{build::live_power_usage, Chart, ChartBook, ChartId, LineChart, MonitoringDashboard};
use carboncore::datasets::DatasetCatalog;
use carboncore::math::StatsHelper;
use carboncore::tracking::{PowerSeries, PowerSource, UniformPowerSource};
use carboncore::EmissionFactor;
use iced::{
    time,
    widget::{button, canvas::Canvas, column, row, text, Column, Container, Row},
    Alignment, Element, Length, Subscription, Task, Theme,
};
use log::warn;
use plots::{AreaPlot, BarPlot, LinePlot, PiePlot, StackedBarPlot};
use settings::DashboardSettings;
use std::time::Duration;

mod plots;
mod settings;

const LIVE_WINDOW: usize = 60;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Device Carbon Dashboard".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Chart(ChartId),
    Live,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    Select(View),
    Reload,
}

struct Visualizer {
    charts: Vec<(ChartId, Result<Chart, String>)>,
    selected: View,
    source: UniformPowerSource,
    readings: Vec<f64>,
    next_index: u64,
    status: String,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let mut visualizer = Visualizer {
            charts: Vec::new(),
            selected: View::Chart(ChartId::PowerOverTime),
            source: UniformPowerSource::new(),
            readings: Vec::new(),
            next_index: 0,
            status: String::new(),
        };
        visualizer.load_charts();
        (visualizer, Task::none())
    }

    fn load_charts(&mut self) {
        let settings = match DashboardSettings::from_env() {
            Ok(settings) => settings,
            Err(err) => {
                self.status = format!("Settings error: {err}");
                return;
            }
        };
        let factor = match EmissionFactor::new(settings.chart_emission_factor) {
            Ok(factor) => factor,
            Err(err) => {
                self.status = format!("Chart factor error: {err}");
                return;
            }
        };
        let dir = settings.data_dir;
        let book = ChartBook::new(DatasetCatalog::new(&dir), factor);
        self.charts = book
            .build_all()
            .into_iter()
            .map(|(id, result)| {
                (
                    id,
                    result.map_err(|err| {
                        warn!("Skipping chart '{}': {}", id.name(), err);
                        err.to_string()
                    }),
                )
            })
            .collect();
        let ready = self.charts.iter().filter(|(_, chart)| chart.is_ok()).count();
        self.status = format!("{} of {} charts loaded from {}", ready, self.charts.len(), dir.display());
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                match state.source.read(state.next_index) {
                    Ok(kilowatts) => {
                        state.next_index += 1;
                        state.readings.push(kilowatts);
                        if state.readings.len() > LIVE_WINDOW {
                            state.readings.remove(0);
                        }
                    }
                    Err(err) => state.status = format!("Meter error: {err}"),
                }
                Task::none()
            }
            Message::Select(view) => {
                state.selected = view;
                Task::none()
            }
            Message::Reload => {
                state.load_charts();
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let tabs = ChartId::ALL
            .iter()
            .fold(Row::new().spacing(6), |tabs, id| {
                tabs.push(
                    button(text(id.name()).size(14))
                        .on_press(Message::Select(View::Chart(*id)))
                        .padding(8),
                )
            })
            .push(
                button(text("Live power").size(14))
                    .on_press(Message::Select(View::Live))
                    .padding(8),
            )
            .push(button(text("Reload data").size(14)).on_press(Message::Reload).padding(8));

        let panel = match state.selected {
            View::Live => state.live_panel(),
            View::Chart(id) => match state.charts.iter().find(|(chart_id, _)| *chart_id == id) {
                Some((_, Ok(chart))) => chart_panel(chart),
                Some((_, Err(err))) => column![
                    text(id.name()).size(24),
                    text(format!("Chart unavailable: {err}")).size(14),
                ]
                .spacing(10)
                .into(),
                None => text("Charts not loaded").size(14).into(),
            },
        };

        let layout = column![
            text("Device Carbon Dashboard").size(26),
            tabs,
            panel,
            text(&state.status).size(12),
        ]
        .spacing(14)
        .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn live_panel(&self) -> Element<'_, Message> {
        let series = PowerSeries::from_kilowatts(self.readings.iter().copied());
        let latest = self.readings.last().copied().unwrap_or_default();
        let stats = format!(
            "Latest {:.3} kW | mean {:.3} kW | peak {:.3} kW | {} samples",
            latest,
            StatsHelper::mean(&self.readings),
            StatsHelper::peak(&self.readings).unwrap_or_default(),
            self.next_index
        );
        column![
            line_panel(live_power_usage(&series), 320.0),
            text(stats).size(14),
        ]
        .spacing(8)
        .into()
    }
}

fn legend<'a>(labels: impl Iterator<Item = (String, iced::Color)>) -> Element<'a, Message> {
    labels
        .fold(Row::new().spacing(14), |legend, (label, color)| {
            legend.push(text(label).size(13).color(color))
        })
        .into()
}

fn axis_caption<'a>(x_label: &str, y_label: &str, categories: &[String]) -> Element<'a, Message> {
    let span = match (categories.first(), categories.last()) {
        (Some(first), Some(last)) if categories.len() > 1 => format!("{first} .. {last}"),
        (Some(only), _) => only.clone(),
        _ => "no data".into(),
    };
    text(format!("x: {x_label} ({span})   y: {y_label}")).size(12).into()
}

fn line_panel<'a>(chart: LineChart, height: f32) -> Element<'a, Message> {
    let title = chart.axes.title.clone();
    let caption = axis_caption(&chart.axes.x_label, &chart.axes.y_label, &chart.categories);
    let labels = legend(
        chart
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| (s.label.clone(), plots::palette(i)))
            .collect::<Vec<_>>()
            .into_iter(),
    );
    column![
        text(title).size(20),
        Canvas::new(LinePlot { chart })
            .width(Length::Fill)
            .height(Length::Fixed(height)),
        labels,
        caption,
    ]
    .spacing(6)
    .into()
}

fn dashboard_panel<'a>(dashboard: &MonitoringDashboard) -> Element<'a, Message> {
    let bars = &dashboard.emissions_bar;
    let top = row![
        line_panel(dashboard.gauge.clone(), 220.0),
        line_panel(dashboard.power_line.clone(), 220.0),
    ]
    .spacing(16);
    let bottom = row![
        column![
            text(bars.axes.title.clone()).size(20),
            Canvas::new(BarPlot {
                bars: bars.bars.clone(),
                color: plots::emission_green(),
            })
            .width(Length::Fill)
            .height(Length::Fixed(220.0)),
            text(format!("x: {}   y: {}", bars.axes.x_label, bars.axes.y_label)).size(12),
        ]
        .spacing(6)
        .width(Length::Fill),
        Container::new(text(dashboard.summary_text()).size(22))
            .width(Length::Fill)
            .height(Length::Fixed(220.0))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(220.0)),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    column![text("Real-Time Emissions Monitoring").size(24), top, bottom]
        .spacing(12)
        .into()
}

fn chart_panel<'a>(chart: &Chart) -> Element<'a, Message> {
    match chart {
        Chart::Line(line) => line_panel(line.clone(), 360.0),
        Chart::Bar(bars) => column![
            text(bars.axes.title.clone()).size(20),
            Canvas::new(BarPlot {
                bars: bars.bars.clone(),
                color: plots::sky_blue(),
            })
            .width(Length::Fill)
            .height(Length::Fixed(360.0)),
            text(
                bars.bars
                    .iter()
                    .map(|bar| format!("{}: {:.2}", bar.label, bar.value))
                    .collect::<Vec<_>>()
                    .join("   ")
            )
            .size(13),
            text(format!("x: {}   y: {}", bars.axes.x_label, bars.axes.y_label)).size(12),
        ]
        .spacing(6)
        .into(),
        Chart::Pie(pie) => column![
            text(pie.title.clone()).size(20),
            Canvas::new(PiePlot {
                slices: pie.slices.clone(),
            })
            .width(Length::Fixed(380.0))
            .height(Length::Fixed(380.0)),
            legend(
                pie.slices
                    .iter()
                    .enumerate()
                    .map(|(i, slice)| (format!("{} {:.1}%", slice.label, slice.share), plots::palette(i)))
                    .collect::<Vec<_>>()
                    .into_iter(),
            ),
        ]
        .spacing(6)
        .into(),
        Chart::StackedBar(stacked) => column![
            text(stacked.axes.title.clone()).size(20),
            Canvas::new(StackedBarPlot {
                chart: stacked.clone(),
            })
            .width(Length::Fill)
            .height(Length::Fixed(360.0)),
            legend(
                vec![
                    ("Current Emissions".to_string(), plots::current_blue()),
                    ("Post-Reduction Emissions".to_string(), plots::reduction_orange()),
                ]
                .into_iter(),
            ),
            text(stacked.categories.join("   ")).size(13),
            text(format!("x: {}   y: {}", stacked.axes.x_label, stacked.axes.y_label)).size(12),
        ]
        .spacing(6)
        .into(),
        Chart::Dashboard(dashboard) => dashboard_panel(dashboard),
        Chart::StackedArea(area) => {
            let caption = axis_caption(&area.axes.x_label, &area.axes.y_label, &area.categories);
            let labels = legend(
                area.layers
                    .iter()
                    .enumerate()
                    .map(|(i, layer)| (layer.label.clone(), plots::palette(i)))
                    .collect::<Vec<_>>()
                    .into_iter(),
            );
            Column::new()
                .spacing(6)
                .push(text(area.axes.title.clone()).size(20))
                .push(
                    Canvas::new(AreaPlot {
                        chart: area.clone(),
                    })
                    .width(Length::Fill)
                    .height(Length::Fixed(360.0)),
                )
                .push(labels)
                .push(caption)
                .into()
        }
    }
}
