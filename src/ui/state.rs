//! App 状态定义 (Model)
//!
//! `TodoState` 是每次意图后整体替换的快照，`App` 额外持有纯界面状态

use ratatui::layout::Rect;

use crate::config::UiConfig;
use crate::models::{TodoItem, TodoList};

/// 编辑模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(u64), // 正在编辑的事项 ID
}

/// 焦点位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

/// 待办状态快照
#[derive(Debug, Clone, Default)]
pub struct TodoState {
    pub items: TodoList,
    pub draft: String,
    pub mode: EditMode,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_id(&self) -> Option<u64> {
        match self.mode {
            EditMode::Creating => None,
            EditMode::Editing(id) => Some(id),
        }
    }
}

/// 上一帧的区域划分，用于鼠标命中测试
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub input: Rect,
    pub list: Rect, // 列表边框内区域
    pub list_offset: usize,
}

/// 应用状态
pub struct App {
    pub state: TodoState,
    pub focus: Focus,
    pub selected_index: usize,
    pub message: Option<String>,
    pub ui: UiConfig,
    pub layout: ScreenLayout,
}

impl App {
    pub fn new(ui: UiConfig) -> Self {
        Self {
            state: TodoState::new(),
            focus: Focus::Input,
            selected_index: 0,
            message: None,
            ui,
            layout: ScreenLayout::default(),
        }
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.state.items.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 获取当前选中的事项
    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.state.items.items().get(self.selected_index)
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_item().map(|item| item.id)
    }
}
