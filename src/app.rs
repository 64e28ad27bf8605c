//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: terminal
//! events are translated into [`TableAction`]s, the table state applies
//! them, and [`App::view`] draws the current state.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info, trace, warn};

use crate::config::{Config, TableConfig};
use crate::data::{DataSource, Field};
use crate::events::{Event, KeyBindings, KeyCommand};
use crate::table::{model, SortKey, TableAction, TableState};
use crate::tasks::LoaderMessage;
use crate::ui::{render_status_bar, DataTable, HelpAction, HelpView, TableHit, Theme};

/// The current view state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Displaying the table.
    #[default]
    Table,
    /// Help panel is displayed over the table.
    Help,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current view state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// Working data set, sort toggles and highlight.
    table: TableState,
    /// Column configuration.
    table_config: TableConfig,
    /// Table widget with cursor and layout.
    widget: DataTable,
    /// Help panel.
    help: HelpView,
    /// Key bindings.
    keys: KeyBindings,
    /// Color theme.
    theme: Theme,
    /// Where the records come from.
    source: DataSource,
    /// Whether the one load of this mount has been requested.
    load_requested: bool,
    /// Whether mouse clicks are handled.
    mouse: bool,
}

impl App {
    /// Create a new application instance with the given configuration.
    pub fn new(config: Config) -> Self {
        debug!("Creating new application instance");

        let keys = KeyBindings::new(config.settings.vim_mode);
        let help = HelpView::new(&keys);

        Self {
            state: AppState::Table,
            should_quit: false,
            table: TableState::new(),
            table_config: config.table,
            widget: DataTable::new(),
            help,
            keys,
            theme: Theme::named(&config.settings.theme),
            source: DataSource::parse(&config.settings.data_source),
            load_requested: false,
            mouse: config.settings.mouse,
        }
    }

    /// Take the pending load request.
    ///
    /// Returns the data source the first time it is called and `None`
    /// afterwards, so the records are fetched exactly once per mount.
    pub fn take_load_request(&mut self) -> Option<DataSource> {
        if self.load_requested {
            return None;
        }
        self.load_requested = true;
        info!(source = %self.source, "Requesting record load");
        Some(self.source.clone())
    }

    /// Handle a message from a background task.
    pub fn handle_loader_message(&mut self, message: LoaderMessage) {
        match message {
            LoaderMessage::RecordsLoaded(Ok(records)) => {
                self.dispatch(TableAction::Load(records));
            }
            LoaderMessage::RecordsLoaded(Err(error)) => {
                // The table stays empty; nothing is shown to the user.
                debug!(%error, "Record load failed, keeping empty data set");
            }
        }
    }

    /// Apply a table action.
    pub fn dispatch(&mut self, action: TableAction) {
        self.table.apply(action);
    }

    /// The table state.
    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.quit();
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => {}
        }
    }

    fn quit(&mut self) {
        self.should_quit = true;
        self.state = AppState::Exiting;
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match self.state {
            AppState::Help => {
                if let Some(HelpAction::Close) = self.help.handle_input(key_event) {
                    self.state = AppState::Table;
                }
            }
            AppState::Table => {
                if let Some(command) = self.keys.resolve(key_event) {
                    self.handle_command(command);
                }
            }
            AppState::Exiting => {}
        }
    }

    fn handle_command(&mut self, command: KeyCommand) {
        let row_count = self.table.len();
        let column_count = model::visible_fields(&self.table_config).len();

        match command {
            KeyCommand::Quit => self.quit(),
            KeyCommand::ToggleHelp => {
                self.help.reset_scroll();
                self.state = AppState::Help;
            }
            KeyCommand::RowUp => self.widget.move_up(),
            KeyCommand::RowDown => self.widget.move_down(row_count),
            KeyCommand::FirstRow => self.widget.move_to_start(),
            KeyCommand::LastRow => self.widget.move_to_end(row_count),
            KeyCommand::FocusLeft => self.widget.focus_left(),
            KeyCommand::FocusRight => self.widget.focus_right(column_count),
            KeyCommand::SortFocused => {
                if let Some(field) = self.widget.focused_field(&self.table_config) {
                    self.trigger_sort_control(field);
                }
            }
            KeyCommand::SortColumn(index) => {
                let field = model::visible_fields(&self.table_config).get(index).copied();
                if let Some(field) = field {
                    self.trigger_sort_control(field);
                }
            }
            KeyCommand::Highlight => {
                if let Some(id) = self.widget.cursor_record(&self.table).map(|r| r.id) {
                    self.dispatch(TableAction::Highlight(id));
                }
            }
            KeyCommand::OpenMail => self.open_mail(),
        }
    }

    /// Sort by `field` if its header carries a sort control.
    fn trigger_sort_control(&mut self, field: Field) {
        if !self.table_config.shows(field) || !self.table_config.is_sortable(field) {
            debug!(field = %field, "Column has no sort control");
            return;
        }
        self.dispatch(TableAction::ToggleSort(SortKey::Field(field)));
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        if !self.mouse || self.state != AppState::Table {
            return;
        }

        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .widget
                    .hit_test(mouse_event.column, mouse_event.row, &self.table);
                match hit {
                    Some(TableHit::SortControl(field)) => self.trigger_sort_control(field),
                    Some(TableHit::Action(id)) => self.dispatch(TableAction::Highlight(id)),
                    None => {}
                }
            }
            MouseEventKind::ScrollUp => self.widget.move_up(),
            MouseEventKind::ScrollDown => self.widget.move_down(self.table.len()),
            _ => {}
        }
    }

    fn open_mail(&self) {
        let Some(url) = self.widget.cursor_record(&self.table).and_then(|r| r.mailto()) else {
            return;
        };
        debug!(%url, "Opening mail link");
        if let Err(e) = open::that_detached(&url) {
            warn!(error = %e, "Failed to open mail link");
        }
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Footer/Status bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.widget.render(
            frame,
            chunks[1],
            &self.table,
            &self.table_config,
            &self.theme,
        );
        render_status_bar(frame, chunks[2], &self.table, self.keys.footer_hints());

        if self.state == AppState::Help {
            self.help.render(frame, area, &self.theme);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                " LazyTable ",
                Style::default()
                    .fg(self.theme.control)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.source.to_string(),
                Style::default().fg(self.theme.muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn people() -> Vec<Record> {
        vec![
            Record::new(2).with(Field::Email, "b@x.com"),
            Record::new(3).with(Field::Email, "c@x.com"),
            Record::new(1).with(Field::Email, "a@x.com"),
        ]
    }

    fn loaded_app(config: Config) -> App {
        let mut app = App::new(config);
        app.handle_loader_message(LoaderMessage::RecordsLoaded(Ok(people())));
        app
    }

    fn ids(app: &App) -> Vec<i64> {
        app.table().rows().iter().map(|r| r.id).collect()
    }

    impl App {
        fn widget(&self) -> &DataTable {
            &self.widget
        }

        fn source(&self) -> &DataSource {
            &self.source
        }
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(140, 12)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
    }

    #[test]
    fn test_app_new() {
        let app = App::new(Config::default());
        assert_eq!(app.state(), AppState::Table);
        assert!(!app.should_quit());
        assert!(app.table().is_empty());
        assert_eq!(app.source(), &DataSource::default());
    }

    #[test]
    fn test_load_requested_once() {
        let mut app = App::new(Config::default());
        assert_eq!(app.take_load_request(), Some(DataSource::default()));
        assert_eq!(app.take_load_request(), None);
    }

    #[test]
    fn test_failed_load_leaves_table_empty() {
        let mut app = App::new(Config::default());
        app.handle_loader_message(LoaderMessage::RecordsLoaded(Err("boom".to_string())));
        assert!(app.table().is_empty());
        assert_eq!(app.state(), AppState::Table);
    }

    #[test]
    fn test_loaded_records_replace_data() {
        let app = loaded_app(Config::default());
        assert_eq!(ids(&app), vec![2, 3, 1]);
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q')),
            key(KeyCode::Esc),
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Event::Quit,
        ] {
            let mut app = App::new(Config::default());
            app.update(event);
            assert!(app.should_quit());
            assert_eq!(app.state(), AppState::Exiting);
        }
    }

    #[test]
    fn test_help_toggle() {
        let mut app = App::new(Config::default());
        app.update(key(KeyCode::Char('?')));
        assert_eq!(app.state(), AppState::Help);

        // 'q' closes help instead of quitting.
        app.update(key(KeyCode::Char('q')));
        assert_eq!(app.state(), AppState::Table);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_help_blocks_table_commands() {
        let mut app = loaded_app(Config::default());
        app.update(key(KeyCode::Char('?')));
        app.update(key(KeyCode::Char('s')));
        assert_eq!(ids(&app), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_focused_id_column() {
        let mut app = loaded_app(Config::default());
        app.update(key(KeyCode::Char('s')));
        assert_eq!(ids(&app), vec![3, 2, 1]);
        app.update(key(KeyCode::Char('s')));
        assert_eq!(ids(&app), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_column_number() {
        let config = Config {
            table: TableConfig::new(
                vec!["id".to_string(), "email".to_string()],
                vec!["id".to_string(), "email".to_string()],
            ),
            ..Config::default()
        };
        let mut app = loaded_app(config);
        app.update(key(KeyCode::Char('2')));
        let emails: Vec<&str> = app.table().rows().iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com", "c@x.com"]);

        // No third column: nothing happens.
        app.update(key(KeyCode::Char('3')));
        assert_eq!(ids(&app), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_without_control_is_noop() {
        let config = Config {
            table: TableConfig::new(vec!["id".to_string()], vec!["email".to_string()]),
            ..Config::default()
        };
        let mut app = loaded_app(config);
        app.update(key(KeyCode::Char('s')));
        assert_eq!(ids(&app), vec![2, 3, 1]);
        assert!(app.table().last_sort().is_none());
    }

    #[test]
    fn test_highlight_cursor_row() {
        let mut app = loaded_app(Config::default());
        app.update(key(KeyCode::Char('j')));
        app.update(key(KeyCode::Char(' ')));
        assert_eq!(app.table().highlighted(), Some(3));

        app.update(key(KeyCode::Char('G')));
        app.update(key(KeyCode::Char('b')));
        assert_eq!(app.table().highlighted(), Some(1));
    }

    #[test]
    fn test_highlight_on_empty_table() {
        let mut app = App::new(Config::default());
        app.update(key(KeyCode::Char(' ')));
        assert_eq!(app.table().highlighted(), None);
    }

    #[test]
    fn test_sorting_keeps_highlight() {
        let mut app = loaded_app(Config::default());
        app.update(key(KeyCode::Char(' ')));
        app.update(key(KeyCode::Char('s')));
        assert_eq!(app.table().highlighted(), Some(2));
    }

    #[test]
    fn test_mouse_click_sort_control() {
        let mut app = loaded_app(Config::default());
        draw(&mut app);
        // Header line at row 0, table border at row 1, column headers at row 2.
        app.update(click(2, 2));
        assert_eq!(ids(&app), vec![3, 2, 1]);
    }

    #[test]
    fn test_mouse_click_action_cell() {
        let mut app = loaded_app(Config::default());
        draw(&mut app);

        let action_x = (0..140u16)
            .find(|x| app.widget().hit_test(*x, 3, app.table()).is_some())
            .unwrap();
        // Body rows start at row 3.
        app.update(click(action_x, 4));
        assert_eq!(app.table().highlighted(), Some(3));
        app.update(click(action_x, 3));
        assert_eq!(app.table().highlighted(), Some(2));
    }

    #[test]
    fn test_mouse_disabled() {
        let mut config = Config::default();
        config.settings.mouse = false;
        let mut app = loaded_app(config);
        draw(&mut app);
        app.update(click(2, 2));
        assert_eq!(ids(&app), vec![2, 3, 1]);
    }

    #[test]
    fn test_view_renders_empty_table() {
        let mut app = App::new(Config::default());
        let mut terminal = Terminal::new(TestBackend::new(140, 12)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("LazyTable"));
        assert!(text.contains("Action"));
        assert!(text.contains("0 rows"));
    }
}
