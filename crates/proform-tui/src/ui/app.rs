use super::{footer::render_footer, form::render_form, header::render_header};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use proform_core::{
    avatar::{self, ReadError},
    notify::{self, Notifier},
    pipeline::{self, SubmitOutcome},
    remote::{HttpProfileService, ProfileService, RemoteError},
    session::SubmitBlocked,
    settings::Settings,
    theme::{Element, Theme},
    EditSession, ProfileField, ProfileForm,
};
use ratatui::{
    prelude::{Alignment, Constraint, CrosstermBackend, Direction, Layout, Terminal},
    widgets::{Block, Borders, Paragraph},
};
use std::io::Stdout;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Navigating the form, locked or unlocked.
    Form,
    /// Typing into the selected field.
    EditingField,
    /// Typing the path of an avatar image to upload.
    AvatarPath,
}

/// User-facing feedback line. One per submission phase, plus the avatar
/// read failure the submission copy must not be confused with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    Pending,
    Success,
    Failure,
    AvatarReadFailed,
}

impl Toast {
    pub fn copy(&self) -> &'static str {
        match self {
            Self::Pending => notify::PENDING_COPY,
            Self::Success => notify::SUCCESS_COPY,
            Self::Failure => notify::FAILURE_COPY,
            Self::AvatarReadFailed => notify::AVATAR_READ_FAILURE_COPY,
        }
    }
}

/// Results of spawned async work, delivered back to the single UI task.
pub enum AppEvent {
    ProfileLoaded(Result<ProfileForm, RemoteError>),
    AvatarEncoded {
        ticket: u64,
        result: Result<String, ReadError>,
    },
    SubmitSettled(SubmitOutcome),
    Toast(Toast),
}

/// Notifier that forwards submission phases onto the UI event channel.
struct ChannelNotifier {
    tx: UnboundedSender<AppEvent>,
}

impl Notifier for ChannelNotifier {
    fn notify_pending(&self) {
        let _ = self.tx.send(AppEvent::Toast(Toast::Pending));
    }

    fn notify_success(&self) {
        let _ = self.tx.send(AppEvent::Toast(Toast::Success));
    }

    fn notify_failure(&self) {
        let _ = self.tx.send(AppEvent::Toast(Toast::Failure));
    }
}

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    mode: AppMode,
    session: EditSession,
    form: Option<ProfileForm>,
    load_failed: bool,
    selection: ProfileField,
    edit_buffer: String,
    toast: Option<Toast>,
    service: Arc<dyn ProfileService>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let service: Arc<dyn ProfileService> =
            Arc::new(HttpProfileService::new(settings.server_url.clone()));
        let theme = Theme::new(settings.theme);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            theme,
            settings,
            mode: AppMode::Form,
            session: EditSession::new(),
            form: None,
            load_failed: false,
            selection: ProfileField::default(),
            edit_buffer: String::new(),
            toast: None,
            service,
            events_tx,
            events_rx,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        self.spawn_fetch();
        while !self.should_quit {
            self.drain_events();
            self.draw(terminal)?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn spawn_fetch(&mut self) {
        self.load_failed = false;
        let service = Arc::clone(&self.service);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppEvent::ProfileLoaded(service.fetch_profile().await));
        });
    }

    /// Applies results of spawned async work. Interleaved callbacks on the
    /// one UI task; no locking needed.
    fn drain_events(&mut self) {
        while let Ok(app_event) = self.events_rx.try_recv() {
            match app_event {
                AppEvent::ProfileLoaded(Ok(form)) => {
                    self.form = Some(form);
                    self.load_failed = false;
                }
                AppEvent::ProfileLoaded(Err(err)) => {
                    tracing::error!(error = %err, "profile fetch failed");
                    self.load_failed = true;
                }
                AppEvent::AvatarEncoded {
                    ticket,
                    result: Ok(encoded),
                } => {
                    self.session.attach_avatar(ticket, encoded);
                }
                AppEvent::AvatarEncoded {
                    result: Err(err), ..
                } => {
                    tracing::warn!(error = %err, "avatar encode failed");
                    self.toast = Some(Toast::AvatarReadFailed);
                }
                AppEvent::SubmitSettled(outcome) => {
                    if !self.session.is_current(outcome.generation) {
                        tracing::debug!(
                            generation = outcome.generation,
                            "dropping stale submit outcome"
                        );
                        continue;
                    }
                    // The remote copy supersedes the local form on success;
                    // on failure the eager re-lock stays as it is.
                    if let Some(updated) = outcome.updated() {
                        self.form = Some(updated.clone());
                    }
                }
                AppEvent::Toast(toast) => self.toast = Some(toast),
            }
        }
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.draw(|frame| {
            let main_layout = Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background));

            let area = frame.size();
            frame.render_widget(main_layout, area);

            let app_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            render_header(
                frame,
                app_chunks[0],
                &self.theme,
                self.form.as_ref(),
                &self.session,
            );

            match &self.form {
                Some(form) => render_form(
                    frame,
                    app_chunks[1],
                    &self.theme,
                    form,
                    &self.session,
                    self.selection,
                    self.mode,
                    &self.edit_buffer,
                ),
                None => {
                    let message = if self.load_failed {
                        "Could not load your profile. [R] to retry."
                    } else {
                        "Loading profile..."
                    };
                    let style = if self.load_failed {
                        self.theme.error_style()
                    } else {
                        self.theme.ratatui_style(Element::Info)
                    };
                    let loading = Paragraph::new(message)
                        .alignment(Alignment::Center)
                        .style(style);
                    frame.render_widget(loading, app_chunks[1]);
                }
            }

            render_footer(frame, app_chunks[2], &self.theme, self.mode, self.toast);
        })?;
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match self.mode {
                        AppMode::Form => self.handle_form_key(key.code),
                        AppMode::EditingField => self.handle_field_edit_key(key.code),
                        AppMode::AvatarPath => self.handle_avatar_path_key(key.code),
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => {
                self.theme.toggle();
                self.settings.theme = self.theme.variant();
                self.settings.save().unwrap_or_default();
            }
            KeyCode::Char('r') if self.load_failed => self.spawn_fetch(),
            KeyCode::Char('e') if self.form.is_some() => {
                // The explicit Edit action; the only other lock transition
                // is the eager re-lock on submit.
                self.session.toggle_lock();
            }
            KeyCode::Up => self.selection = self.selection.previous(),
            KeyCode::Down => self.selection = self.selection.next(),
            KeyCode::Enter if !self.session.is_locked() => {
                if let Some(form) = &self.form {
                    self.edit_buffer = form.field(self.selection).to_string();
                    self.mode = AppMode::EditingField;
                }
            }
            KeyCode::Char('u') if !self.session.is_locked() && self.form.is_some() => {
                self.edit_buffer.clear();
                self.mode = AppMode::AvatarPath;
            }
            KeyCode::Char('s') if !self.session.is_locked() => self.attempt_submit(),
            _ => {}
        }
    }

    fn handle_field_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.edit_buffer.clear();
                self.mode = AppMode::Form;
            }
            KeyCode::Enter => {
                if let Some(form) = &mut self.form {
                    if !self.session.is_locked() {
                        *form.field_mut(self.selection) = self.edit_buffer.clone();
                    }
                }
                self.edit_buffer.clear();
                self.mode = AppMode::Form;
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                // Phone input is capped at the 10 digits validation allows.
                if self.selection == ProfileField::PhoneNumber && self.edit_buffer.len() >= 10 {
                    return;
                }
                self.edit_buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_avatar_path_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.edit_buffer.clear();
                self.mode = AppMode::Form;
            }
            KeyCode::Enter => {
                let path = std::mem::take(&mut self.edit_buffer);
                self.mode = AppMode::Form;
                if path.is_empty() {
                    return;
                }
                // Last write wins: a newer selection's ticket supersedes
                // any encode still in flight.
                let ticket = self.session.issue_avatar_ticket();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = avatar::encode_file(&path).await;
                    let _ = tx.send(AppEvent::AvatarEncoded { ticket, result });
                });
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => self.edit_buffer.push(c),
            _ => {}
        }
    }

    fn attempt_submit(&mut self) {
        let Some(form) = &self.form else {
            return;
        };
        match self.session.begin_submit(form) {
            Ok(request) => {
                let service = Arc::clone(&self.service);
                let notifier = ChannelNotifier {
                    tx: self.events_tx.clone(),
                };
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let outcome = pipeline::submit(service.as_ref(), &notifier, request).await;
                    let _ = tx.send(AppEvent::SubmitSettled(outcome));
                });
            }
            Err(SubmitBlocked::Invalid) => {
                // Errors are on the session now; the form renders them inline.
                tracing::debug!("submission blocked by validation gate");
            }
            Err(SubmitBlocked::Locked) => {}
        }
    }
}
