use chrono::Utc;

/// 待办事项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// ID 生成器：基于毫秒时间戳，同一毫秒内递增
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_id_from(now)
    }

    /// 以给定时间戳生成 ID，保证严格递增
    pub fn next_id_from(&mut self, now_millis: u64) -> u64 {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        id
    }
}

/// 待办列表（仅内存中）
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
    ids: IdGenerator,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加新事项；去除首尾空白后为空则忽略
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.ids.next_id();
        self.items.push(TodoItem::new(id, text.to_string()));
        Some(id)
    }

    /// 删除事项，不存在时忽略
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// 更新文本。编辑路径不校验空字符串
    pub fn update(&mut self, id: u64, new_text: &str) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.text = new_text.trim().to_string();
                true
            }
            None => false,
        }
    }

    /// 切换完成状态
    pub fn toggle_completed(&mut self, id: u64) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    #[allow(dead_code)]
    pub fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
