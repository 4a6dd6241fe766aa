//! Panel tabs of the Home view

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs as RataTabs};
use ratatui::Frame;

use crate::core::PanelRouter;
use crate::domain::Destination;

/// Draw the tabs the role may open; the active one is highlighted.
pub fn draw_panel_tabs(f: &mut Frame, area: Rect, panels: &PanelRouter) {
    let permitted = panels.permitted();
    let titles: Vec<Line> = permitted
        .iter()
        .map(|panel| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", panel.icon()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(panel.title()),
            ])
        })
        .collect();

    let selected = permitted
        .iter()
        .position(|panel| *panel == panels.current())
        .unwrap_or(0);

    let tabs = RataTabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("PANELS"),
        )
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");

    f.render_widget(tabs, area);
}
