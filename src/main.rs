mod config;
mod error;
mod logging;
mod models;
mod terminal;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::terminal::{Tui, setup_terminal};
use crate::ui::{App, handle_key_event, handle_mouse_event, render};

/// 终端待办清单，数据仅保存在内存中
#[derive(Debug, Parser)]
#[command(name = "todo-tui", version)]
struct Cli {
    /// 配置文件路径 (默认 ~/.config/todo-tui/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志文件路径，覆盖配置中的 log.file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let log_file = cli.log_file.or(config.log.file);
    logging::init_tracing(log_file.as_deref(), &config.log.level)?;
    info!("starting todo-tui");

    // 创建应用状态
    let mut app = App::new(config.ui);

    // 设置终端
    let (mut terminal, guard) = setup_terminal()?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    drop(guard);
    terminal.show_cursor()?;

    info!(items = app.state.items.len(), "exiting");
    result
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| render(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key_event(app, key) {
                    break;
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            _ => {}
        }
    }
    Ok(())
}
