use ratatui::layout::{Constraint, Layout, Rect};

/// The four fixed regions of the screen, top to bottom.
pub struct Regions {
    pub menu: Rect,
    pub body: Rect,
    pub banner: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let [menu, body, banner, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(area);
    Regions {
        menu,
        body,
        banner,
        footer,
    }
}

/// A rect of the given size centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
