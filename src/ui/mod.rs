//! UI module for rendering the TUI

mod admin;
mod components;
mod fill;
mod home;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = layout::content_area(frame.area());

    match app.state.current_view {
        View::Home => home::draw(frame, area, app),
        View::Fill => fill::draw(frame, area, app),
        View::FillSubmitted => fill::draw_submitted(frame, area),
        View::Admin => admin::draw(frame, area, app),
    }

    layout::draw_status_bar(frame, app);
}
