//! 通用 UI 组件
//!
//! 输入框等通用组件

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// 水平滚动量：内容超出时保持末尾与光标可见
pub fn scroll_offset(value: &str, inner_width: u16) -> u16 {
    let width = u16::try_from(Span::raw(value).width()).unwrap_or(u16::MAX);
    // 留一列给光标
    width.saturating_sub(inner_width.saturating_sub(1))
}

/// [组件] 带有标题、占位符和光标的单行输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    active_color: Color,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let inner_width = area.width.saturating_sub(2);
    let offset = scroll_offset(value, inner_width);

    let input = if value.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value).style(Style::default().fg(Color::White))
    };
    let input = input.scroll((0, offset)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if is_focused {
        let width = u16::try_from(Span::raw(value).width()).unwrap_or(u16::MAX);
        let column = width.saturating_sub(offset).min(inner_width.saturating_sub(1));
        frame.set_cursor_position(Position::new(area.x + 1 + column, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset("", 10), 0);
        assert_eq!(scroll_offset("abcdefghi", 10), 0);
        assert_eq!(scroll_offset("abcdefghij", 10), 1);
        assert_eq!(scroll_offset(&"x".repeat(101), 78), 24);
    }
}
