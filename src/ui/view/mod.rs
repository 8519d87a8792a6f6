//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod rows;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, EditMode, Focus, ScreenLayout};
use components::render_input_widget;
use rows::{rows, segments};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let help_height = if app.ui.show_help { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // 标题
            Constraint::Length(3),           // 输入框
            Constraint::Min(5),              // 列表
            Constraint::Length(help_height), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_input(frame, app, chunks[1]);
    let list_offset = render_list(frame, app, chunks[2]);

    app.layout = ScreenLayout {
        input: chunks[1],
        list: Block::default().borders(Borders::ALL).inner(chunks[2]),
        list_offset,
    };
    if app.ui.show_help {
        render_help(frame, app, chunks[3]);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.ui.title.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.state.mode {
        EditMode::Creating => "新事项",
        EditMode::Editing(_) => "编辑事项",
    };
    render_input_widget(
        frame,
        area,
        title,
        &app.state.draft,
        &app.ui.placeholder,
        app.focus == Focus::Input,
        Color::Yellow,
    );
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) -> usize {
    let list_focused = app.focus == Focus::List;
    let items: Vec<ListItem> = rows(&app.state)
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = list_focused && i == app.selected_index;
            let spans: Vec<Span> = segments(row, selected)
                .into_iter()
                .map(|(span, _)| span)
                .collect();
            ListItem::new(Line::from(spans))
        })
        .collect();

    let border_style = if list_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("待办 ({})", app.state.items.len()))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if list_focused && !app.state.items.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
    state.offset()
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match (app.focus, app.state.mode) {
        (Focus::Input, EditMode::Creating) => "[Enter] 添加  [Tab/Esc] 切换到列表  [Ctrl-C] 退出",
        (Focus::Input, EditMode::Editing(_)) => "[Enter] 保存  [Tab/Esc] 保存并返回列表",
        (Focus::List, _) => {
            "[j/k] 导航  [Enter/e] 编辑  [Space/x] 完成  [d] 删除  [i] 输入  [q] 退出"
        }
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::ui::actions::Intent;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_items_and_title() {
        let mut app = App::new(UiConfig::default());
        app.apply(Intent::Create("buy milk".to_string()));

        let text = screen(&mut app);
        assert!(text.contains("Todo App"));
        assert!(text.contains("buy milk"));
        assert!(text.contains("Enter a new todo"));
    }

    #[test]
    fn test_render_long_draft_keeps_tail_visible() {
        let mut app = App::new(UiConfig::default());
        app.apply(Intent::Input('a'));
        for _ in 0..99 {
            app.apply(Intent::Input('b'));
        }
        app.apply(Intent::Input('Z'));

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        // 输入框内容行 y = 4
        let buffer = terminal.backend().buffer();
        let line: String = buffer.content[4 * 80..5 * 80]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(line.contains('Z'));
        assert!(!line.contains('a'));
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            ratatui::layout::Position::new(78, 4)
        );
    }

    #[test]
    fn test_render_editing_row_uses_draft() {
        let mut app = App::new(UiConfig::default());
        app.apply(Intent::Create("walk".to_string()));
        let id = app.state.items.items()[0].id;
        app.apply(Intent::Edit(id));
        app.apply(Intent::Input('s'));

        let text = screen(&mut app);
        assert!(text.contains("walks"));
    }
}
