//! Drive the terminal app state and render it without a real terminal

use medsupply::app::{App, InputMode, StatusLevel};
use medsupply::core::Screen;
use medsupply::domain::{PanelId, Role, ViewId};
use medsupply::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn run(app: &mut App, input: &str) {
    app.enter_command();
    assert_eq!(app.input_mode, InputMode::Command);
    app.command.input = input.to_string();
    app.apply_command();
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(120, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_login_surface_before_sign_in() {
    let app = App::new();
    let screen = render(&app);
    assert!(screen.contains("Sign in as"));
    assert!(screen.contains("Administrator"));
    assert!(screen.contains("Community Health Worker"));
    assert!(!screen.contains("Platform"));
}

#[test]
fn test_login_picker_signs_in_selected_role() {
    let mut app = App::new();
    app.move_login_selection(true);
    app.move_login_selection(true);
    assert_eq!(app.login_selected(), ViewId::Supplier);
    assert_eq!(app.shell.role(), Some(Role::Supplier));
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Info));
}

#[test]
fn test_sidebar_lists_only_permitted_views() {
    let mut app = App::new();
    app.login(Role::Community);
    let screen = render(&app);
    assert!(screen.contains("Platform"));
    assert!(screen.contains("Home"));
    assert!(screen.contains("Community Reports"));
    assert!(!screen.contains("AI Control Tower"));
    assert!(!screen.contains("Inventory"));
    assert!(!screen.contains("Supplier Portal"));
}

#[test]
fn test_admin_sidebar_lists_everything() {
    let mut app = App::new();
    app.login(Role::Admin);
    let screen = render(&app);
    for label in [
        "Home",
        "AI Control Tower",
        "Inventory",
        "Supplier Portal",
        "Community Reports",
    ] {
        assert!(screen.contains(label), "missing {label}");
    }
}

#[test]
fn test_home_renders_permitted_tabs() {
    let mut app = App::new();
    app.login(Role::Warehouse);
    run(&mut app, "goto home");
    run(&mut app, "panel warehouse");
    assert_eq!(app.shell.current_panel(), Some(PanelId::Warehouse));

    let screen = render(&app);
    assert!(screen.contains("PANELS"));
    assert!(screen.contains("Dashboard"));
    assert!(screen.contains("Community"));
    assert!(screen.contains("INVENTORY"));
}

#[test]
fn test_supplier_home_has_single_tab() {
    let mut app = App::new();
    app.login(Role::Supplier);
    run(&mut app, "goto home");
    run(&mut app, "panel dashboard");
    assert_eq!(app.shell.current_panel(), Some(PanelId::Supplier));

    let screen = render(&app);
    assert!(screen.contains("SUPPLIER PORTAL"));
    assert!(!screen.contains("Dashboard"));
    assert!(!screen.contains("AI CONTROL TOWER"));
}

#[test]
fn test_unknown_view_command_lands_on_default() {
    let mut app = App::new();
    app.login(Role::Supplier);
    run(&mut app, "goto home");
    run(&mut app, "goto dashboard");
    assert_eq!(app.shell.current_view(), ViewId::Supplier);
    run(&mut app, "goto home");
    run(&mut app, "goto orders");
    assert_eq!(app.shell.current_view(), ViewId::Supplier);
}

#[test]
fn test_logout_then_render_is_login_surface() {
    let mut app = App::new();
    app.login(Role::Admin);
    run(&mut app, "goto warehouse");
    app.logout();
    assert_eq!(app.screen(), Screen::Login);
    let screen = render(&app);
    assert!(screen.contains("Sign in as"));
    assert!(screen.contains("Signed out"));
}

#[test]
fn test_command_login_switches_role() {
    let mut app = App::new();
    run(&mut app, "login admin");
    assert_eq!(app.shell.current_view(), ViewId::Dashboard);
    run(&mut app, "login community");
    assert_eq!(app.shell.role(), Some(Role::Community));
    assert_eq!(app.shell.current_view(), ViewId::Community);

    run(&mut app, "login Admin");
    assert_eq!(app.shell.role(), Some(Role::Community));
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Error));
}

#[test]
fn test_view_cycle_skips_unpermitted() {
    let mut app = App::new();
    app.login(Role::Community);
    assert_eq!(app.cycle_view(true), ViewId::Home);
    assert_eq!(app.cycle_view(true), ViewId::Community);
}

#[test]
fn test_help_popup_renders() {
    let mut app = App::new();
    app.login(Role::Admin);
    app.toggle_help();
    let screen = render(&app);
    assert!(screen.contains("Help"));
    assert!(screen.contains(":goto <view>"));
}
