//! Statistics panel shown beside the map
//!
//! Last hits in the highlight color of the most recent last-hit source,
//! total gold, then the gold share of each income source.

use iced::widget::{column, container, row, text, Space};
use iced::{Element, Length};

use pathview_core::RenderFrame;
use pathview_widgets::PathTheme;

use super::message::Message;

const PANEL_WIDTH: f32 = 240.0;

/// Render the statistics panel for the current frame
pub fn view<'a>(frame: &'a RenderFrame, theme: &PathTheme) -> Element<'a, Message> {
    let Some(stats) = frame.stats.as_ref() else {
        return container(text("No samples").size(14))
            .width(Length::Fixed(PANEL_WIDTH))
            .padding(10)
            .into();
    };

    let last_hits = text(format!("LH: {}", stats.last_hits))
        .size(22)
        .color(theme.highlight_color(stats.highlight));

    let total = text(format!("Total gold: {}", stats.gold.total)).size(16);

    let mut rows = column![last_hits, total].spacing(6);
    for (label, pct) in stats.gold_rows() {
        rows = rows.push(
            row![
                text(label).size(14),
                Space::new().width(Length::Fill),
                text(pct).size(14),
            ]
            .width(Length::Fill),
        );
    }

    container(rows)
        .width(Length::Fixed(PANEL_WIDTH))
        .padding(10)
        .into()
}
