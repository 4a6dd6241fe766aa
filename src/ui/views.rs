//! Bodies of the individual views and panels

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::domain::{PanelId, Role, ViewId};

/// Content shared between a sidebar view and the Home tab of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    ControlTower,
    Inventory,
    SupplierPortal,
    CommunityReports,
}

impl Surface {
    fn title(&self) -> &'static str {
        match self {
            Surface::ControlTower => "AI CONTROL TOWER",
            Surface::Inventory => "INVENTORY",
            Surface::SupplierPortal => "SUPPLIER PORTAL",
            Surface::CommunityReports => "COMMUNITY REPORTS",
        }
    }

    fn lines(&self, role: Role) -> Vec<Line<'static>> {
        let mut lines = match self {
            Surface::ControlTower => vec![
                section("Network overview"),
                bullet("Stock-out risk by facility"),
                bullet("Demand forecast for the next 14 days"),
                bullet("Open alerts raised by the AI agent"),
            ],
            Surface::Inventory => vec![
                section("Warehouse stock"),
                bullet("Items below reorder level"),
                bullet("Expiring batches"),
                bullet("Inbound and outbound transfers"),
            ],
            Surface::SupplierPortal => vec![
                section("Purchase orders"),
                bullet("Orders awaiting confirmation"),
                bullet("Deliveries in transit"),
                bullet("Fulfilment performance"),
            ],
            Surface::CommunityReports => vec![
                section("Field reports"),
                bullet("Submit a shortage report"),
                bullet("Recent reports from your area"),
                bullet("Health facility contacts"),
            ],
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Viewing as ", Style::default().fg(Color::DarkGray)),
            Span::styled(role.title(), Style::default().fg(Color::White)),
        ]));
        lines
    }
}

fn view_surface(view: ViewId) -> Option<Surface> {
    match view {
        ViewId::Home => None,
        ViewId::Dashboard => Some(Surface::ControlTower),
        ViewId::Warehouse => Some(Surface::Inventory),
        ViewId::Supplier => Some(Surface::SupplierPortal),
        ViewId::Community => Some(Surface::CommunityReports),
    }
}

fn panel_surface(panel: PanelId) -> Surface {
    match panel {
        PanelId::Dashboard => Surface::ControlTower,
        PanelId::Warehouse => Surface::Inventory,
        PanelId::Supplier => Surface::SupplierPortal,
        PanelId::Community => Surface::CommunityReports,
    }
}

/// Draw a non-Home view. Home is composed by the caller from tabs and a panel.
pub fn draw_view(f: &mut Frame, area: Rect, view: ViewId, role: Role) {
    if let Some(surface) = view_surface(view) {
        draw_surface(f, area, surface, role);
    }
}

pub fn draw_panel(f: &mut Frame, area: Rect, panel: PanelId, role: Role) {
    draw_surface(f, area, panel_surface(panel), role);
}

fn draw_surface(f: &mut Frame, area: Rect, surface: Surface, role: Role) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(surface.title());
    let paragraph = Paragraph::new(surface.lines(role))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn bullet(text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(Color::DarkGray)),
        Span::raw(text),
    ])
}
