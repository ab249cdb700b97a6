use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hdrmerge_loader::app::{ListViewState, PromptOutcome, PromptState};
use hdrmerge_loader::core::{find_action, Action, EventQueue};
use hdrmerge_loader::system::{open_default_store, resolve_selection};
use hdrmerge_loader::ui;
use hdrmerge_loader::{
    DialogTask, FilePicker, LoadOptions, LoadOptionsDialog, LoaderError, RawImageFilter,
    Result, SettingsStore,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() -> Result<ExitCode> {
    env_logger::init();

    let store = open_default_store();

    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    let mut session = TerminalSession {
        terminal: Terminal::new(backend).map_err(terminal_error)?,
    };

    // 첫 표시 전에 파일 선택기가 먼저 뜬다
    let mut dialog = LoadOptionsDialog::new(store, &mut session);
    let res = run_dialog(&mut session, &mut dialog);

    // Restore terminal
    disable_raw_mode()?;
    execute!(session.terminal.backend_mut(), LeaveAlternateScreen)?;
    session.terminal.show_cursor()?;

    match res? {
        Some(options) => {
            print!("{}", options.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

fn terminal_error(err: io::Error) -> LoaderError {
    LoaderError::Terminal(err.to_string())
}

/// 터미널을 소유하고 파일 선택기 역할도 하는 세션
struct TerminalSession<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalSession<B> {
    /// 경로 프롬프트를 모달로 띄워 입력을 받는다. 취소하면 `None`
    fn prompt_path(
        &mut self,
        initial_directory: &Path,
        filter: &RawImageFilter,
    ) -> Result<Option<String>> {
        let description = filter.description();
        let mut prompt = PromptState::new(seed_for(initial_directory));

        loop {
            self.terminal
                .draw(|f| ui::draw_prompt(f, &prompt, initial_directory, &description))?;

            if !event::poll(POLL_TIMEOUT)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match prompt.handle_key(key.modifiers, key.code) {
                PromptOutcome::Editing => {}
                PromptOutcome::Submit(value) => return Ok(Some(value)),
                PromptOutcome::Cancel => return Ok(None),
            }
        }
    }
}

impl<B: Backend> FilePicker for TerminalSession<B> {
    fn choose(&mut self, initial_directory: &Path, filter: &RawImageFilter) -> Vec<PathBuf> {
        match self.prompt_path(initial_directory, filter) {
            Ok(Some(input)) => resolve_selection(&input, initial_directory, filter),
            Ok(None) => Vec::new(),
            Err(err) => {
                log::error!("File picker failed: {}", err);
                Vec::new()
            }
        }
    }
}

/// 프롬프트 초기 값: 시작 디렉토리 + `/`
fn seed_for(directory: &Path) -> String {
    let mut seed = directory.display().to_string();
    if !seed.ends_with('/') {
        seed.push('/');
    }
    seed
}

/// 다이얼로그 이벤트 루프
///
/// 확정되면 결과를, 취소되면 `None`을 반환한다.
fn run_dialog<B: Backend, S: SettingsStore>(
    session: &mut TerminalSession<B>,
    dialog: &mut LoadOptionsDialog<S>,
) -> Result<Option<LoadOptions>> {
    let mut queue: EventQueue<DialogTask> = EventQueue::new();
    let mut view = ListViewState::new();

    loop {
        let size = session.terminal.size()?;
        view.adjust_scroll(ui::visible_list_height(size.width, size.height));
        session
            .terminal
            .draw(|f| ui::draw_dialog(f, dialog.files(), dialog.options(), &view))?;

        // 첫 프레임을 그린 뒤 표시 완료 처리
        dialog.on_shown(&mut queue);
        drain_tasks(dialog, &mut queue);
        if dialog.state().is_terminal() {
            return Ok(None);
        }

        if !event::poll(POLL_TIMEOUT)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = find_action(key.modifiers, key.code) else {
            continue;
        };

        if let Some(result) = execute_action(action, dialog, &mut view, session) {
            return Ok(Some(result));
        }
        drain_tasks(dialog, &mut queue);
        if dialog.state().is_terminal() {
            return Ok(None);
        }
    }
}

fn drain_tasks<S: SettingsStore>(
    dialog: &mut LoadOptionsDialog<S>,
    queue: &mut EventQueue<DialogTask>,
) {
    while let Some(task) = queue.pop() {
        dialog.run_task(task);
    }
}

/// 액션 실행. 확정되면 결과 반환
fn execute_action<B: Backend, S: SettingsStore>(
    action: Action,
    dialog: &mut LoadOptionsDialog<S>,
    view: &mut ListViewState,
    session: &mut TerminalSession<B>,
) -> Option<LoadOptions> {
    let len = dialog.files().count();
    match action {
        Action::MoveUp => view.move_up(),
        Action::MoveDown => view.move_down(len),
        Action::GoToTop => view.go_to_top(),
        Action::GoToBottom => view.go_to_bottom(len),
        Action::ToggleMark => view.toggle_mark(len),
        Action::AddFiles => {
            if dialog.add_files(session) > 0 {
                view.reset_after_change(dialog.files().count());
            }
        }
        Action::RemoveFiles => {
            let selection = view.removal_selection(len);
            if dialog.remove_files(&selection) > 0 {
                view.reset_after_change(dialog.files().count());
            }
        }
        Action::ToggleAlign => dialog.toggle_align(),
        Action::ToggleCrop => dialog.toggle_crop(),
        Action::Accept => return dialog.confirm(),
        Action::Cancel => dialog.cancel(),
    }
    None
}
