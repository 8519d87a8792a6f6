//! 列表行视图模型
//!
//! 由状态快照纯推导，不持有任何可变状态

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::ui::state::TodoState;

/// 单行视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    /// 正在原地编辑，显示草稿内容
    Editing { id: u64, text: String },
    Item {
        id: u64,
        text: String,
        completed: bool,
    },
}

impl RowView {
    /// 行文本样式：已完成的事项加删除线
    pub fn text_style(&self) -> Style {
        match self {
            RowView::Editing { .. } => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED),
            RowView::Item {
                completed: true, ..
            } => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            RowView::Item { .. } => Style::default().fg(Color::White),
        }
    }
}

/// 行内可点击区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    Text,
    Toggle,
    Delete,
}

/// 单行的片段序列；渲染与鼠标命中测试共用同一份划分
pub fn segments(row: &RowView, selected: bool) -> Vec<(Span<'static>, Option<RowHit>)> {
    let marker = if selected { "▶ " } else { "  " };
    match row {
        RowView::Editing { text, .. } => vec![
            (Span::raw(marker), None),
            (Span::styled(format!("✎ {}", text), row.text_style()), None),
        ],
        RowView::Item { text, .. } => vec![
            (Span::raw(marker), Some(RowHit::Text)),
            (Span::styled(text.clone(), row.text_style()), Some(RowHit::Text)),
            (Span::raw("  "), None),
            (
                Span::styled("[✓]", Style::default().fg(Color::Blue)),
                Some(RowHit::Toggle),
            ),
            (Span::raw(" "), None),
            (
                Span::styled("[✗]", Style::default().fg(Color::Magenta)),
                Some(RowHit::Delete),
            ),
        ],
    }
}

/// 行内第 `column` 列落在哪个片段上
pub fn hit_at(row: &RowView, column: u16) -> Option<RowHit> {
    let mut start = 0usize;
    for (span, hit) in segments(row, false) {
        let end = start + span.width();
        if usize::from(column) < end {
            return hit;
        }
        start = end;
    }
    None
}

/// 将状态映射为行列表
pub fn rows(state: &TodoState) -> Vec<RowView> {
    let editing = state.editing_id();
    state
        .items
        .iter()
        .map(|item| {
            if editing == Some(item.id) {
                RowView::Editing {
                    id: item.id,
                    text: state.draft.clone(),
                }
            } else {
                RowView::Item {
                    id: item.id,
                    text: item.text.clone(),
                    completed: item.completed,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::actions::Intent;

    #[test]
    fn test_rows_follow_items() {
        let state = TodoState::new()
            .reduce(Intent::Create("A".to_string()))
            .reduce(Intent::Create("B".to_string()));
        let a = state.items.items()[0].id;
        let state = state.reduce(Intent::Toggle(a));

        let rows = rows(&state);
        assert_eq!(rows.len(), 2);
        assert!(matches!(&rows[0], RowView::Item { completed: true, text, .. } if text == "A"));
        assert!(rows[0].text_style().add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(!rows[1].text_style().add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_hit_at_columns() {
        let row = RowView::Item {
            id: 1,
            text: "milk".to_string(),
            completed: false,
        };

        // "  milk  [✓] [✗]"
        assert_eq!(hit_at(&row, 0), Some(RowHit::Text));
        assert_eq!(hit_at(&row, 5), Some(RowHit::Text));
        assert_eq!(hit_at(&row, 6), None);
        assert_eq!(hit_at(&row, 8), Some(RowHit::Toggle));
        assert_eq!(hit_at(&row, 10), Some(RowHit::Toggle));
        assert_eq!(hit_at(&row, 11), None);
        assert_eq!(hit_at(&row, 12), Some(RowHit::Delete));
        assert_eq!(hit_at(&row, 14), Some(RowHit::Delete));
        assert_eq!(hit_at(&row, 15), None);
    }

    #[test]
    fn test_editing_row_has_no_targets() {
        let row = RowView::Editing {
            id: 1,
            text: "milk".to_string(),
        };
        assert_eq!(hit_at(&row, 0), None);
        assert_eq!(hit_at(&row, 4), None);
    }

    #[test]
    fn test_editing_row_shows_draft() {
        let state = TodoState::new().reduce(Intent::Create("A".to_string()));
        let id = state.items.items()[0].id;
        let state = state.reduce(Intent::Edit(id)).reduce(Intent::Input('b'));

        assert_eq!(
            rows(&state),
            vec![RowView::Editing {
                id,
                text: "Ab".to_string()
            }]
        );
    }
}
