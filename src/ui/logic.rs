//! 业务逻辑处理 (Update/Dispatch)
//!
//! `TodoState::reduce` 是唯一的状态转换入口：(State, Intent) -> State。
//! `App::dispatch` 处理焦点与导航，并把意图交给 reduce

use tracing::{debug, info, trace};

use super::actions::{Action, Intent};
use super::state::{App, EditMode, Focus, TodoState};

impl TodoState {
    /// 根据意图生成新的状态快照
    pub fn reduce(mut self, intent: Intent) -> Self {
        debug!(?intent, mode = ?self.mode, "reduce");

        match intent {
            Intent::Create(text) => {
                self.create(&text);
            }
            Intent::Edit(id) => self.start_edit(id),
            Intent::CommitEdit(id, text) => self.commit_edit(id, &text),
            Intent::Toggle(id) => {
                if self.items.toggle_completed(id) {
                    info!(id, "toggled item");
                } else {
                    trace!(id, "toggle ignored, no such item");
                }
            }
            Intent::Delete(id) => {
                if self.items.delete(id) {
                    info!(id, "deleted item");
                    if self.mode == EditMode::Editing(id) {
                        self.mode = EditMode::Creating;
                        self.draft.clear();
                    }
                } else {
                    trace!(id, "delete ignored, no such item");
                }
            }

            Intent::Input(c) => self.draft.push(c),
            Intent::DeleteChar => {
                self.draft.pop();
            }

            Intent::Submit => match self.mode {
                EditMode::Creating => {
                    let draft = std::mem::take(&mut self.draft);
                    if !self.create(&draft) {
                        self.draft = draft;
                    }
                }
                EditMode::Editing(id) => {
                    let draft = self.draft.clone();
                    self.commit_edit(id, &draft);
                }
            },
            Intent::Blur => {
                if let EditMode::Editing(id) = self.mode {
                    let draft = self.draft.clone();
                    self.commit_edit(id, &draft);
                }
            }
        }
        self
    }

    fn create(&mut self, text: &str) -> bool {
        match self.items.add(text) {
            Some(id) => {
                info!(id, "added item");
                true
            }
            None => {
                trace!("add ignored, blank text");
                false
            }
        }
    }

    fn start_edit(&mut self, id: u64) {
        if self.mode == EditMode::Editing(id) {
            return;
        }
        let Some(text) = self.items.get(id).map(|item| item.text.clone()) else {
            trace!(id, "edit ignored, no such item");
            return;
        };

        // 切换编辑对象时，旧编辑框先失焦提交
        if let EditMode::Editing(current) = self.mode {
            let draft = self.draft.clone();
            self.commit_edit(current, &draft);
        }

        self.mode = EditMode::Editing(id);
        self.draft = text;
    }

    fn commit_edit(&mut self, id: u64, text: &str) {
        if self.items.update(id, text) {
            info!(id, "updated item");
        }
        if self.mode == EditMode::Editing(id) {
            self.mode = EditMode::Creating;
            self.draft.clear();
        }
    }
}

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::FocusInput => self.focus = Focus::Input,
            Action::FocusList => {
                self.apply(Intent::Blur);
                self.focus = Focus::List;
            }

            Action::EditSelected => {
                if let Some(id) = self.selected_id() {
                    self.apply(Intent::Edit(id));
                    self.focus = Focus::Input;
                }
            }
            Action::ToggleSelected => {
                if let Some(id) = self.selected_id() {
                    self.apply(Intent::Toggle(id));
                }
            }
            Action::DeleteSelected => {
                if let Some(id) = self.selected_id() {
                    self.apply(Intent::Delete(id));
                }
            }

            Action::Click { column, row } => self.click(column, row),

            Action::Intent(intent) => self.apply(intent),
        }
        false
    }

    /// 以新快照整体替换旧状态
    pub fn apply(&mut self, intent: Intent) {
        let toggled = match &intent {
            Intent::Toggle(id) => Some(*id),
            _ => None,
        };
        let prev_len = self.state.items.len();
        let prev_mode = self.state.mode;

        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(intent);

        let len = self.state.items.len();
        if len > prev_len {
            self.message = Some("事项已添加".to_string());
        } else if len < prev_len {
            self.message = Some("事项已删除".to_string());
        } else if prev_mode != EditMode::Creating && self.state.mode != prev_mode {
            self.message = Some("事项已更新".to_string());
        } else if let Some(item) = toggled.and_then(|id| self.state.items.get(id)) {
            self.message = Some(if item.completed {
                "已标记完成".to_string()
            } else {
                "已取消完成".to_string()
            });
        }

        self.clamp_selection();
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.state.items.len() {
            self.selected_index += 1;
        }
    }
}
