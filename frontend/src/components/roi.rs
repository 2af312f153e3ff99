use yew::prelude::*;

use crate::content::Roi;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricIcon {
    Clock,
    Dollar,
    TrendingUp,
}

impl MetricIcon {
    /// Picks a glyph from keywords in the metric label. Cosmetic only.
    pub fn for_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if ["hour", "time", "minute"].iter().any(|k| label.contains(k)) {
            MetricIcon::Clock
        } else if ["$", "dollar", "annual"].iter().any(|k| label.contains(k)) {
            MetricIcon::Dollar
        } else {
            MetricIcon::TrendingUp
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MetricIcon::Clock => "🕒",
            MetricIcon::Dollar => "💲",
            MetricIcon::TrendingUp => "📈",
        }
    }

    fn class(self) -> &'static str {
        match self {
            MetricIcon::Clock => "roi-icon clock",
            MetricIcon::Dollar => "roi-icon dollar",
            MetricIcon::TrendingUp => "roi-icon trend",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RoiPanelProps {
    pub roi: Roi,
}

#[function_component(RoiPanel)]
pub fn roi_panel(props: &RoiPanelProps) -> Html {
    let roi = &props.roi;
    let title = roi.title.clone().unwrap_or_else(|| "ROI".to_string());

    html! {
        <section class="roi-panel">
            <h3>{title}</h3>
            if !roi.metrics().is_empty() {
                <div class="roi-metrics">
                    { for roi.metrics().iter().map(|metric| {
                        let icon = MetricIcon::for_label(&metric.label);
                        html! {
                            <div class="roi-metric">
                                <div class={icon.class()}>{icon.glyph()}</div>
                                <div>
                                    <div class="roi-value">{metric.value.clone()}</div>
                                    <div class="roi-label">{metric.label.clone()}</div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
            if let Some(description) = &roi.description {
                <p class="roi-description">{description.clone()}</p>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_labels_get_the_clock() {
        assert_eq!(MetricIcon::for_label("hours/year saved"), MetricIcon::Clock);
        assert_eq!(MetricIcon::for_label("of Innovation Time Gained"), MetricIcon::Clock);
        assert_eq!(MetricIcon::for_label("minutes saved per day"), MetricIcon::Clock);
    }

    #[test]
    fn money_labels_get_the_dollar() {
        assert_eq!(MetricIcon::for_label("annual impact (labor costs only)"), MetricIcon::Dollar);
        assert_eq!(MetricIcon::for_label("$ saved"), MetricIcon::Dollar);
        assert_eq!(MetricIcon::for_label("Dollars recovered"), MetricIcon::Dollar);
    }

    #[test]
    fn anything_else_trends_up() {
        assert_eq!(MetricIcon::for_label("Before"), MetricIcon::TrendingUp);
        assert_eq!(MetricIcon::for_label(""), MetricIcon::TrendingUp);
    }

    #[test]
    fn time_keywords_win_over_money_keywords() {
        assert_eq!(MetricIcon::for_label("annual hours"), MetricIcon::Clock);
    }
}
