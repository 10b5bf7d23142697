use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AreaStyle, AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, SplitLine, TextStyle,
        Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use chrono::{DateTime, Local, Locale, TimeZone, Utc};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::power::ChartDataPoint;
use crate::utils::debounce::create_debounced_resize_listener;

const CHART_ID: &str = "power-chart";
const SERIES_NAME: &str = "Wattage (MW)";

/// X-axis labels and y values, in input order.
pub type SeriesData = (Vec<String>, Vec<f64>);

#[derive(Properties, PartialEq)]
pub struct PowerChartProps {
    pub points: Rc<Vec<ChartDataPoint>>,
    pub title: AttrValue,
}

#[function_component(PowerChart)]
pub fn power_chart(props: &PowerChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.points.clone(), |points| {
        series_data(points, &Local, browser_locale())
    });

    {
        let container_ref = container_ref.clone();
        let title = props.title.clone();

        use_effect_with(
            (series_data, container_ref, title),
            |(series_data, container_ref, title)| {
                let listener = container_ref
                    .cast::<HtmlElement>()
                    .zip(web_sys::window())
                    .map(|(container, window)| {
                        render_chart(&container, series_data, title);

                        let series_data = series_data.clone();
                        let title = title.clone();
                        create_debounced_resize_listener(
                            &window,
                            move || render_chart(&container, &series_data, &title),
                            Config::RESIZE_DEBOUNCE_MS,
                        )
                    });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

/// Maps a BCP 47 tag such as `de-DE` or `de` onto a chrono locale, falling
/// back to POSIX for missing or unknown tags.
pub fn locale_from_tag(tag: Option<&str>) -> Locale {
    let Some(tag) = tag.map(str::trim).filter(|t| !t.is_empty()) else {
        return Locale::POSIX;
    };

    let tag = tag.replace('-', "_");
    let (language, region) = match tag.split_once('_') {
        Some((language, region)) => (language.to_lowercase(), region.to_uppercase()),
        None => (tag.to_lowercase(), tag.to_uppercase()),
    };

    Locale::try_from(format!("{language}_{region}").as_str())
        .or_else(|_| Locale::try_from(language.as_str()))
        .unwrap_or(Locale::POSIX)
}

/// Locale of the browser, from `navigator.language`.
fn browser_locale() -> Locale {
    let tag = web_sys::window().and_then(|w| w.navigator().language());
    locale_from_tag(tag.as_deref())
}

/// Calendar date of `timestamp` in `tz`, formatted for `locale`, without
/// time of day.
pub fn date_label<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz, locale: Locale) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(tz)
        .format_localized(Config::DATE_LABEL_FORMAT, locale)
        .to_string()
}

/// Splits points into axis labels and values. Order is kept as given.
pub fn series_data<Tz: TimeZone>(points: &[ChartDataPoint], tz: &Tz, locale: Locale) -> SeriesData
where
    Tz::Offset: std::fmt::Display,
{
    let labels = points
        .iter()
        .map(|p| date_label(&p.timestamp, tz, locale))
        .collect();
    let values = points.iter().map(|p| p.wattage).collect();
    (labels, values)
}

fn render_chart(container: &HtmlElement, series_data: &SeriesData, title: &str) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data, title);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        tracing::error!("Render error: {e:?}");
    }
}

/// Single teal line over a zero-based value axis.
pub fn build_chart(series_data: &SeriesData, title: &str) -> CharmingChart {
    let (x_data, y_data) = series_data;

    CharmingChart::new()
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .legend(Legend::new().top("top"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Date")
                .data(x_data.clone())
                .axis_label(AxisLabel::new().color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(SERIES_NAME)
                .min(0.0)
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .name(SERIES_NAME)
                .data(y_data.clone())
                .item_style(ItemStyle::new().color(Config::CHART_LINE_COLOR))
                .line_style(LineStyle::new().color(Config::CHART_LINE_COLOR))
                .area_style(AreaStyle::new().color(Config::CHART_FILL_COLOR)),
        )
}
