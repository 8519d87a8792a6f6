//! Action / Intent 枚举定义
//!
//! - Action: 按键转化后的界面操作（焦点、导航、退出）
//! - Intent: 作用于待办状态的语义化意图

/// 界面操作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 焦点切换
    FocusInput,
    FocusList,

    // 作用于当前选中项
    EditSelected,
    ToggleSelected,
    DeleteSelected,

    // 鼠标左键点击（终端坐标）
    Click { column: u16, row: u16 },

    // 透传给状态机
    Intent(Intent),
}

/// 状态意图
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    #[allow(dead_code)]
    Create(String),
    Edit(u64),
    #[allow(dead_code)]
    CommitEdit(u64, String),
    Toggle(u64),
    Delete(u64),

    // 输入框交互
    Input(char),
    DeleteChar,
    Submit, // Enter
    Blur,   // 编辑框失去焦点
}
