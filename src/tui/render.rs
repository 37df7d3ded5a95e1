use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use super::app::NavApp;
use super::prompt::RenameTarget;
use super::theme::Theme;

const HINTS: &str = "←/→ category  Tab/S-Tab item  1-9 area  F2 rename item  F3 rename category  q quit";

/// Screen regions for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub categories: Rect,
    pub items: Rect,
    pub areas: Vec<Rect>,
    pub footer: Rect,
}

/// Split the terminal into header, two tab bars, side by side display
/// areas and a footer line
pub fn screen_layout(area: Rect, area_count: usize) -> ScreenLayout {
    let [header, categories, items, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let count = area_count.max(1) as u32;
    let areas = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(body)
        .to_vec();

    ScreenLayout {
        header,
        categories,
        items,
        areas: areas.into_iter().take(area_count).collect(),
        footer,
    }
}

/// Pad a tab title to the fixed width, or leave it at natural width
fn tab_title(label: &str, width: Option<u16>) -> String {
    match width {
        Some(width) => format!("{:^width$}", label, width = width as usize),
        None => format!(" {} ", label),
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, labels: &[&str], selected: Option<usize>, width: Option<u16>, theme: &Theme) {
    let titles: Vec<String> = labels.iter().map(|label| tab_title(label, width)).collect();
    let tabs = Tabs::new(titles)
        .select(selected.unwrap_or(0))
        .style(theme.tab_style())
        .highlight_style(theme.tab_highlight_style())
        .divider("|")
        .padding("", "");
    frame.render_widget(tabs, area);
}

fn render_header(frame: &mut Frame, area: Rect, app: &NavApp) {
    let theme = app.theme();
    let controller = app.controller();

    let mut spans = Vec::new();
    for (id, display) in controller.areas().iter().enumerate() {
        if id > 0 {
            spans.push(Span::raw("   "));
        }
        if id == controller.active() {
            spans.push(Span::styled(
                format!("{}: [ACTIVE]", display.name()),
                theme.active_border_style(),
            ));
        } else {
            spans.push(Span::styled(display.name().to_string(), theme.hint_style()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &NavApp) {
    let theme = app.theme();

    let line = if let Some(prompt) = app.prompt() {
        let what = match prompt.target() {
            RenameTarget::Category(_) => "Rename category: ",
            RenameTarget::Item { .. } => "Rename item: ",
        };
        let chars: Vec<char> = prompt.value().chars().collect();
        let cursor = prompt.cursor_pos();
        let before: String = chars[..cursor].iter().collect();
        let at: String = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
        let after: String = chars.iter().skip(cursor + 1).collect();

        Line::from(vec![
            Span::styled(what, theme.hint_style().add_modifier(Modifier::BOLD)),
            Span::raw(before),
            Span::styled(at, theme.cursor_style()),
            Span::raw(after),
        ])
    } else if let Some(status) = app.status() {
        Line::from(Span::styled(status.to_string(), theme.warning_style()))
    } else {
        Line::from(Span::styled(HINTS, theme.hint_style()))
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the whole navigation screen
pub fn draw(frame: &mut Frame, app: &NavApp) {
    let theme = app.theme();
    let controller = app.controller();
    let tree = controller.tree();
    let layout = screen_layout(frame.area(), controller.area_count());

    render_header(frame, layout.header, app);

    let width = tree.tab_width();
    render_tab_bar(frame, layout.categories, &tree.category_labels(), tree.current_category(), width, theme);
    if let Some(category) = tree.current_category() {
        render_tab_bar(frame, layout.items, &tree.item_labels(category), tree.current_item(), width, theme);
    }

    for (id, (display, rect)) in controller.areas().iter().zip(layout.areas.iter()).enumerate() {
        let border_style = if id == controller.active() {
            theme.active_border_style()
        } else {
            theme.inactive_border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", display.name()));
        let inner = block.inner(*rect);
        frame.render_widget(block, *rect);
        display.surface().render(frame, inner, theme);
    }

    render_footer(frame, layout.footer, app);
}
