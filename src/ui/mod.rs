use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod tabs;
pub mod views;

use crate::app::{App, InputMode, StatusLevel};
use crate::core::Screen;
use crate::domain::{Destination, Role, ViewId};

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();

    // Nothing but the login surface is reachable without a session
    let (role, view) = match app.screen() {
        Screen::Login => {
            draw_login(f, size, app);
            return;
        }
        Screen::View { role, view, .. } => (role, view),
    };

    let areas = layout::areas(size);

    draw_header(f, areas.header, app, role);
    draw_sidebar(f, areas.sidebar_nav, areas.sidebar_status, app, view);
    draw_main(f, areas.main, app, role, view);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn brand_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "MedSupply AI",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Intelligent Logistics", Style::default().fg(Color::DarkGray)),
    ])
}

fn draw_login(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let popup_area = layout::centered_rect(50, 60, chunks[0]);
    f.render_widget(Clear, popup_area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(popup_area);

    let brand = Paragraph::new(brand_line())
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(brand, inner[0]);

    let items: Vec<ListItem> = Role::ALL
        .iter()
        .map(|role| {
            ListItem::new(Line::from(vec![
                Span::raw(role.title()),
                Span::styled(
                    format!("  ({})", role.as_str()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Sign in as")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("-> ");

    let mut state = ListState::default();
    state.select(Some(app.login_selection % Role::ALL.len()));
    f.render_stateful_widget(list, inner[1], &mut state);

    let footer = match app.status_text() {
        Some((text, level)) => Line::from(Span::styled(text, status_style(level))),
        None => Line::from(Span::styled(
            "↑/↓ choose role  Enter sign in  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        chunks[1],
    );
}

fn draw_header(f: &mut Frame, area: Rect, app: &App, role: Role) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Paragraph::new(brand_line())
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let since = app
        .shell
        .session()
        .since()
        .map(|at| at.format("%H:%M").to_string())
        .unwrap_or_else(|| "--".to_string());
    let right_line = Line::from(vec![
        Span::styled("Role ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", role.title())),
        Span::styled("Since ", Style::default().fg(Color::DarkGray)),
        Span::raw(since),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, nav_area: Rect, status_area: Rect, app: &App, current: ViewId) {
    // Only permitted views get a button; the shell still guards every request
    let permitted = app.shell.permitted_views();
    let items: Vec<ListItem> = permitted
        .iter()
        .map(|view| {
            let is_active = *view == current;
            let spans = vec![
                Span::styled(
                    format!("{} ", view.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(view.title()),
            ];
            let style = if is_active {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Platform")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_symbol("-> ");

    let mut state = ListState::default();
    state.select(permitted.iter().position(|view| *view == current));
    f.render_stateful_widget(list, nav_area, &mut state);

    let status = Paragraph::new(Text::from(vec![
        Line::from(Span::styled("AI Agent Active", Style::default().fg(Color::LightGreen))),
        Line::from(Span::styled("L  Sign out", Style::default().fg(Color::DarkGray))),
    ]))
    .block(Block::default().borders(Borders::ALL).title("System Status"))
    .wrap(Wrap { trim: true });
    f.render_widget(status, status_area);
}

fn draw_main(f: &mut Frame, area: Rect, app: &App, role: Role, view: ViewId) {
    if view != ViewId::Home {
        views::draw_view(f, area, view, role);
        return;
    }
    if let Some(panels) = app.shell.home() {
        let (tab_area, body_area) = layout::home_areas(area);
        tabs::draw_panel_tabs(f, tab_area, panels);
        views::draw_panel(f, body_area, panels.current(), role);
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.view_breadcrumb())),
    ];
    if let Some(last) = app.command.last.as_ref() {
        spans.push(Span::styled("Last ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!(":{last}")));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("goto", "Open a view: home, dashboard, warehouse, supplier, community"),
        ("panel", "Open a Home tab: dashboard, warehouse, supplier, community"),
        ("login", "Sign in as admin, warehouse, supplier or community"),
        ("logout", "Sign out"),
        ("whoami", "Show the signed-in role"),
        ("help", "Toggle help"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) || input.starts_with(cmd) {
            return Some(desc);
        }
    }
    None
}

fn status_style(level: StatusLevel) -> Style {
    let color = match level {
        StatusLevel::Info => Color::LightGreen,
        StatusLevel::Warn => Color::LightYellow,
        StatusLevel::Error => Color::LightRed,
    };
    Style::default().fg(color)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input).unwrap_or("goto | panel | logout");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, status_style(level)),
                ])
            } else {
                Line::from(Span::styled(
                    "1-5 view  j/k next/prev  Tab panel  : command  L sign out  ? help  q quit",
                    Style::default().fg(Color::DarkGray),
                ))
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = layout::centered_rect(64, 60, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-5        Open view by position"),
        Line::from("  j / k      Next / previous permitted view"),
        Line::from("  Tab        Next Home panel (Shift-Tab back)"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :goto <view>    home dashboard warehouse supplier community"),
        Line::from("  :panel <panel>  dashboard warehouse supplier community"),
        Line::from("  :login <role>   admin warehouse supplier community"),
        Line::from("  :logout  :whoami  :quit"),
        Line::from(""),
        Line::from("Views outside your role open your default view instead."),
        Line::from(""),
        Line::from("  L          Sign out"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Help")
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup_area);
}
