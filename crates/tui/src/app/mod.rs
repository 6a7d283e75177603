use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    bootstrap,
    client::Client,
    commands::{self, Command, Confirmation, Outcome},
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
    view::Page,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Amount,
    Category,
    Description,
    Date,
    Expenses,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Amount,
        Focus::Category,
        Focus::Description,
        Focus::Date,
        Focus::Expenses,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::Date => "Date",
            Self::Expenses => "Expenses",
        }
    }

    pub fn is_form_field(self) -> bool {
        self != Self::Expenses
    }

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    pub focus: Focus,
    /// Index of the highlighted expense card.
    pub selected: usize,
    pub alert: Option<&'static str>,
    /// Expense waiting for the user's answer to the delete prompt.
    pub pending_delete: Option<i64>,
    pub base_url: String,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            page: Page::default(),
            focus: Focus::Amount,
            selected: 0,
            alert: None,
            pending_delete: None,
            base_url: base_url.into(),
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        let form = &mut self.page.form;
        match self.focus {
            Focus::Amount => Some(&mut form.amount),
            Focus::Category => Some(&mut form.category),
            Focus::Description => Some(&mut form.description),
            Focus::Date => Some(&mut form.date),
            Focus::Expenses => None,
        }
    }

    fn selected_expense(&self) -> Option<i64> {
        self.page
            .expenses_container
            .items()
            .get(self.selected)
            .map(|card| card.id)
    }

    fn select_next(&mut self) {
        let len = self.page.expenses_container.items().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.page.expenses_container.items().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

pub struct App {
    client: Client,
    pub state: AppState,
    /// Terminal input. Watched for quit keys while a request is pending.
    events: mpsc::UnboundedReceiver<Event>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let state = AppState::new(config.base_url);
        // No input until `run` attaches the terminal.
        let (_, events) = mpsc::unbounded_channel();

        Ok(Self {
            client,
            state,
            events,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        self.events = ui::spawn_event_reader();
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        self.draw(terminal)?;
        let startup = bootstrap::bootstrap(&self.client, &mut self.state.page, bootstrap::today());
        if until_quit(startup, &mut self.events, self.state.focus).await.is_none() {
            tracing::info!("quit before the initial sync finished");
            return Ok(());
        }

        while !self.should_quit {
            self.draw(terminal)?;

            match self.events.recv().await {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key).await
                }
                Some(_) => {}
                None => self.should_quit = true,
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut ui::Terminal) -> Result<()> {
        terminal
            .draw(|frame| ui::render(frame, &self.state))
            .map_err(|err| AppError::Terminal(err.to_string()))?;
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.state.alert.is_some() {
            if action != AppAction::None {
                self.state.alert = None;
            }
            return;
        }

        if let Some(id) = self.state.pending_delete {
            let confirmation = match action {
                AppAction::Submit | AppAction::Input('y' | 'Y') => Confirmation::Granted,
                AppAction::Cancel | AppAction::Input('n' | 'N') => Confirmation::Declined,
                _ => return,
            };
            self.state.pending_delete = None;
            self.run_command(Command::DeleteExpense { id, confirmation })
                .await;
            return;
        }

        match action {
            AppAction::NextField => self.state.focus = self.state.focus.next(),
            AppAction::PrevField => self.state.focus = self.state.focus.prev(),
            AppAction::Submit => {
                if self.state.focus.is_form_field() {
                    self.run_command(Command::AddExpense).await;
                }
            }
            AppAction::Backspace => {
                if let Some(field) = self.state.active_field_mut() {
                    field.pop();
                }
            }
            AppAction::Delete => self.prompt_delete(),
            AppAction::Up => self.state.select_prev(),
            AppAction::Down => self.state.select_next(),
            AppAction::Input(ch) => self.handle_char(ch).await,
            AppAction::Cancel => {
                if self.state.focus.is_form_field() {
                    self.state.focus = Focus::Expenses;
                }
            }
            AppAction::Quit | AppAction::None => {}
        }
    }

    async fn handle_char(&mut self, ch: char) {
        if let Some(field) = self.state.active_field_mut() {
            field.push(ch);
            return;
        }

        match ch {
            'q' | 'Q' => self.should_quit = true,
            'j' => self.state.select_next(),
            'k' => self.state.select_prev(),
            'd' | 'D' => self.prompt_delete(),
            'r' | 'R' => self.run_command(Command::Refresh).await,
            _ => {}
        }
    }

    fn prompt_delete(&mut self) {
        if self.state.focus != Focus::Expenses {
            return;
        }
        self.state.pending_delete = self.state.selected_expense();
    }

    async fn run_command(&mut self, command: Command) {
        let work = commands::dispatch(command, &self.client, &mut self.state.page);
        let Some(outcome) = until_quit(work, &mut self.events, self.state.focus).await else {
            tracing::info!("quit with a request still pending");
            self.should_quit = true;
            return;
        };

        match outcome {
            Outcome::Alert(message) => self.state.alert = Some(message),
            Outcome::Synced => self.state.clamp_selection(),
            Outcome::Cancelled => {}
        }
    }
}

/// Drives `work` to completion unless a quit key arrives first, in which case
/// `work` is dropped and `None` returned. Other input is discarded meanwhile.
async fn until_quit<T>(
    work: impl Future<Output = T>,
    events: &mut mpsc::UnboundedReceiver<Event>,
    focus: Focus,
) -> Option<T> {
    tokio::select! {
        output = work => Some(output),
        () = quit_requested(events, focus) => None,
    }
}

async fn quit_requested(events: &mut mpsc::UnboundedReceiver<Event>, focus: Focus) {
    while let Some(event) = events.recv().await {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && is_quit_key(key, focus)
        {
            return;
        }
    }
    // Input is gone; only `work` can finish now.
    std::future::pending::<()>().await
}

fn is_quit_key(key: KeyEvent, focus: Focus) -> bool {
    match map_key(key) {
        AppAction::Quit => true,
        AppAction::Input('q' | 'Q') => !focus.is_form_field(),
        _ => false,
    }
}
