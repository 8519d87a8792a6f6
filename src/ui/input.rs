//! 键盘事件映射 (Input -> Action)
//!
//! 将按键与鼠标事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::actions::{Action, Intent};
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Enter => Some(Action::Intent(Intent::Submit)),
            KeyCode::Backspace => Some(Action::Intent(Intent::DeleteChar)),
            KeyCode::Tab | KeyCode::Esc => Some(Action::FocusList),
            KeyCode::Char(c) => Some(Action::Intent(Intent::Input(c))),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Enter | KeyCode::Char('e') => Some(Action::EditSelected),
            KeyCode::Char(' ') | KeyCode::Char('x') => Some(Action::ToggleSelected),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            KeyCode::Char('i') | KeyCode::Tab => Some(Action::FocusInput),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(app.focus, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 只响应左键按下
pub fn get_mouse_action(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if let Some(action) = get_mouse_action(mouse) {
        app.dispatch(action);
    }
}
