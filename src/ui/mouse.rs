//! 鼠标点击命中测试
//!
//! 依据上一帧记录的 `ScreenLayout` 把终端坐标映射到输入框或列表行片段

use ratatui::layout::Position;

use super::actions::Intent;
use super::state::{App, Focus};
use super::view::rows::{RowHit, RowView, hit_at, rows};

/// 点击目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    EditingRow,
    Text(usize),
    Toggle(usize),
    Delete(usize),
    Outside,
}

/// 计算点击落点
pub fn hit_test(app: &App, column: u16, row: u16) -> ClickTarget {
    let pos = Position::new(column, row);
    let layout = app.layout;

    if layout.input.contains(pos) {
        return ClickTarget::Input;
    }
    if !layout.list.contains(pos) {
        return ClickTarget::Outside;
    }

    let index = layout.list_offset + usize::from(row - layout.list.y);
    let rows = rows(&app.state);
    let Some(view) = rows.get(index) else {
        return ClickTarget::Outside;
    };
    if let RowView::Editing { .. } = view {
        return ClickTarget::EditingRow;
    }

    match hit_at(view, column - layout.list.x) {
        Some(RowHit::Text) => ClickTarget::Text(index),
        Some(RowHit::Toggle) => ClickTarget::Toggle(index),
        Some(RowHit::Delete) => ClickTarget::Delete(index),
        None => ClickTarget::Outside,
    }
}

impl App {
    /// 处理左键点击。点在编辑行以外时，编辑框先失焦提交
    pub fn click(&mut self, column: u16, row: u16) {
        let target = hit_test(self, column, row);
        let id_at = |app: &App, index: usize| app.state.items.items().get(index).map(|item| item.id);

        match target {
            ClickTarget::Input | ClickTarget::EditingRow => self.focus = Focus::Input,
            ClickTarget::Text(index) => {
                if let Some(id) = id_at(self, index) {
                    self.apply(Intent::Edit(id));
                    self.selected_index = index;
                    self.focus = Focus::Input;
                }
            }
            ClickTarget::Toggle(index) | ClickTarget::Delete(index) => {
                let Some(id) = id_at(self, index) else {
                    return;
                };
                self.apply(Intent::Blur);
                self.focus = Focus::List;
                self.selected_index = index;
                if matches!(target, ClickTarget::Toggle(_)) {
                    self.apply(Intent::Toggle(id));
                } else {
                    self.apply(Intent::Delete(id));
                }
            }
            ClickTarget::Outside => {
                self.apply(Intent::Blur);
                self.focus = Focus::List;
            }
        }
    }
}
