//! Interactive browser for the directory.
//!
//! Layout:
//! ```text
//! ┌ Search ─────────────────────────────────────────────────────┐
//! │ writ▏                                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ┌ Tools [2] ──────────────────────────────────────────────────┐
//! │ ▸ QuillMate  ★ 4.7  Freemium  Text                          │
//! │     Write sharper copy in half the time.                    │
//! │   LingoBridge  ★ 4.5  Free  Text                            │
//! └─────────────────────────────────────────────────────────────┘
//!  2 Results │ Showing all tools │ Most Popular │ Esc: quit
//! ```
//!
//! Keystrokes only edit the pending search text. The controller commits it
//! once typing pauses, and the list is recomputed whenever the controller's
//! revision moves. Facet and sort keys commit immediately.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use showroom::ColorMode;
use std::io::{self, Stdout};
use std::time::Duration;
use tooldir::catalog::Catalog;
use tooldir::commands::browse::{empty_hint, result_count_label, scope_label};
use tooldir::controller::Controller;
use tooldir::error::{DirectoryError, Result};
use tooldir::model::{Category, Facet, Pricing, Tool};
use tooldir::route::Route;
use tracing::debug;

const FRAME_POLL: Duration = Duration::from_millis(16);

const KEY_HINTS: &str =
    "Tab: category │ Shift-Tab: pricing │ Ctrl-S: sort │ Ctrl-R: reset │ Enter: open │ Esc: quit";

struct BrowseApp<'a> {
    catalog: &'a Catalog,
    controller: Controller,
    results: Vec<&'a Tool>,
    seen_revision: Option<u64>,
    selected: usize,
    view: Route,
    should_quit: bool,
}

impl<'a> BrowseApp<'a> {
    fn new(catalog: &'a Catalog, controller: Controller) -> Self {
        let mut app = Self {
            catalog,
            controller,
            results: Vec::new(),
            seen_revision: None,
            selected: 0,
            view: Route::Directory,
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Recomputes the list if the controller committed anything new.
    fn refresh(&mut self) {
        let revision = self.controller.revision();
        if self.seen_revision == Some(revision) {
            return;
        }
        self.results = self.controller.results(self.catalog.tools());
        self.seen_revision = Some(revision);
        self.selected = 0;
        debug!(revision, count = self.results.len(), "results recomputed");
    }

    fn tick(&mut self) {
        self.controller.poll();
        self.refresh();
    }

    fn selected_tool(&self) -> Option<&'a Tool> {
        self.results.get(self.selected).copied()
    }

    fn detail_tool(&self) -> Option<&'a Tool> {
        match &self.view {
            Route::Detail(id) => self.catalog.find_by_id(id),
            Route::Directory => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if matches!(self.view, Route::Detail(_)) {
            self.handle_detail_key(key);
        } else {
            self.handle_directory_key(key);
        }
        self.refresh();
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => self.view = Route::Directory,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_directory_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.results.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                // Enter settles a pending search before it opens anything
                if self.controller.flush() {
                    return;
                }
                if let Some(tool) = self.selected_tool() {
                    self.view = Route::detail(tool.id.clone());
                }
            }
            KeyCode::Tab => {
                let next = cycle(&self.controller.criteria().category, &Category::ALL);
                self.controller.set_category(next);
            }
            KeyCode::BackTab => {
                let next = cycle(&self.controller.criteria().pricing, &Pricing::ALL);
                self.controller.set_pricing(next);
            }
            KeyCode::Char('s') if ctrl => {
                let next = self.controller.criteria().sort_by.next();
                self.controller.set_sort_by(next);
            }
            KeyCode::Char('r') if ctrl => {
                self.controller.reset();
            }
            KeyCode::Char('u') if ctrl => self.controller.set_query_text(String::new()),
            KeyCode::Backspace => {
                let mut text = self.controller.pending_text().to_string();
                text.pop();
                self.controller.set_query_text(text);
            }
            KeyCode::Char(c) if !ctrl => {
                let mut text = self.controller.pending_text().to_string();
                text.push(c);
                self.controller.set_query_text(text);
            }
            _ => {}
        }
    }
}

/// Steps a facet through each value in order, then back to All.
fn cycle<T: Copy + PartialEq>(current: &Facet<T>, values: &[T]) -> Facet<T> {
    let next = match current {
        Facet::Only(value) => values.iter().position(|v| v == value).map(|i| i + 1),
        Facet::All | Facet::Unrecognized(_) => Some(0),
    };
    match next.and_then(|i| values.get(i)) {
        Some(value) => Facet::Only(*value),
        None => Facet::All,
    }
}

#[derive(Debug, Clone, Copy)]
struct Colors {
    accent: Color,
    muted: Color,
    rating: Color,
}

impl Colors {
    /// `None` means color is off: everything uses the terminal's own colors.
    fn for_mode(mode: Option<ColorMode>) -> Self {
        match mode {
            None => Colors {
                accent: Color::Reset,
                muted: Color::Reset,
                rating: Color::Reset,
            },
            Some(ColorMode::Light) => Colors {
                accent: Color::Blue,
                muted: Color::DarkGray,
                rating: Color::Rgb(196, 140, 0),
            },
            Some(ColorMode::Dark) => Colors {
                accent: Color::Cyan,
                muted: Color::Gray,
                rating: Color::Yellow,
            },
        }
    }
}

/// Runs the browser until the user quits. The terminal is restored even
/// when the loop fails. `mode` is `None` when color is disabled.
pub fn run(catalog: &Catalog, controller: Controller, mode: Option<ColorMode>) -> Result<()> {
    let colors = Colors::for_mode(mode);

    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    let mut app = BrowseApp::new(catalog, controller);
    let result = run_loop(&mut terminal, &mut app, colors);

    let restored = restore(&mut terminal);
    result.and(restored)
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)
}

fn terminal_error(e: io::Error) -> DirectoryError {
    DirectoryError::Terminal(e.to_string())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut BrowseApp<'_>,
    colors: Colors,
) -> Result<()> {
    loop {
        app.tick();

        terminal
            .draw(|frame| render(frame, app, colors))
            .map_err(terminal_error)?;

        if event::poll(FRAME_POLL).map_err(terminal_error)? {
            if let Event::Key(key) = event::read().map_err(terminal_error)? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn render(frame: &mut Frame, app: &BrowseApp<'_>, colors: Colors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Results or detail
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_input(frame, app, chunks[0], colors);
    match app.detail_tool() {
        Some(tool) => render_detail(frame, tool, chunks[1], colors),
        None => render_results(frame, app, chunks[1], colors),
    }
    render_status_bar(frame, app, chunks[2], colors);
}

fn render_search_input(frame: &mut Frame, app: &BrowseApp<'_>, area: Rect, colors: Colors) {
    let title = if app.controller.is_settling() {
        " Search … "
    } else {
        " Search "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent))
        .title(title);
    let line = Line::from(vec![
        Span::raw(app.controller.pending_text()),
        Span::styled("▏", Style::default().fg(colors.accent)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_results(frame: &mut Frame, app: &BrowseApp<'_>, area: Rect, colors: Colors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Tools [{}] ", app.results.len()));

    if app.results.is_empty() {
        let hint = Paragraph::new(empty_hint(app.controller.criteria()))
            .style(Style::default().fg(colors.muted))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|tool| tool_item(tool, colors))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol("▸ ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn tool_item<'t>(tool: &'t Tool, colors: Colors) -> ListItem<'t> {
    let mut heading = vec![
        Span::styled(
            tool.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ★ {:.1}", tool.rating),
            Style::default().fg(colors.rating),
        ),
        Span::styled(
            format!("  {}", tool.pricing),
            Style::default().fg(colors.muted),
        ),
        Span::styled(
            format!("  {}", tool.category),
            Style::default().fg(colors.accent),
        ),
    ];
    if tool.is_featured() {
        heading.push(Span::styled(
            "  Featured",
            Style::default()
                .fg(colors.rating)
                .add_modifier(Modifier::BOLD),
        ));
    }
    ListItem::new(vec![
        Line::from(heading),
        Line::from(Span::styled(
            format!("  {}", tool.short_description),
            Style::default().fg(colors.muted),
        )),
    ])
}

fn render_detail(frame: &mut Frame, tool: &Tool, area: Rect, colors: Colors) {
    let label = Style::default().fg(colors.muted);
    let row = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(format!("{:<12}", name), label), Span::raw(value)])
    };

    let lines = vec![
        Line::from(Span::styled(
            tool.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tool.short_description.as_str(), label)),
        Line::raw(""),
        Line::from(tool.full_description.as_str()),
        Line::raw(""),
        row("Website", tool.website_url.to_string()),
        row("Launched", tool.launch_date.format("%B %-d, %Y").to_string()),
        row("Category", tool.category.to_string()),
        row("Pricing", tool.pricing.to_string()),
        row(
            "Rating",
            format!("★ {:.1} ({} reviews)", tool.rating, tool.review_count),
        ),
        row("Tags", tool.tags.join(", ")),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent))
        .title(" ← Esc: back to directory ");
    let detail = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

fn render_status_bar(frame: &mut Frame, app: &BrowseApp<'_>, area: Rect, colors: Colors) {
    let criteria = app.controller.criteria();
    let status = format!(
        " {} │ {} │ Pricing: {} │ {} │ {}",
        result_count_label(app.results.len()),
        scope_label(criteria),
        criteria.pricing,
        criteria.sort_by.label(),
        KEY_HINTS
    );
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(colors.muted)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooldir::model::SortBy;
    use tooldir::store::bundled::BundledSource;
    use tooldir::store::CatalogSource;

    fn catalog() -> Catalog {
        Catalog::new(BundledSource.load().unwrap()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut BrowseApp<'_>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn listed_ids(app: &BrowseApp<'_>) -> Vec<String> {
        app.results.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn cycle_walks_values_then_returns_to_all() {
        let values = [Pricing::Free, Pricing::Paid];
        let first = cycle(&Facet::All, &values);
        assert_eq!(first, Facet::Only(Pricing::Free));
        let second = cycle(&first, &values);
        assert_eq!(second, Facet::Only(Pricing::Paid));
        assert_eq!(cycle(&second, &values), Facet::All);
        assert_eq!(
            cycle(&Facet::Unrecognized("x".into()), &values),
            Facet::Only(Pricing::Free)
        );
    }

    #[test]
    fn no_color_mode_uses_terminal_defaults() {
        let plain = Colors::for_mode(None);
        for color in [plain.accent, plain.muted, plain.rating] {
            assert_eq!(color, Color::Reset);
        }
        let dark = Colors::for_mode(Some(ColorMode::Dark));
        assert_ne!(dark.accent, Color::Reset);
    }

    #[test]
    fn typing_waits_for_the_controller_to_commit() {
        let catalog = catalog();
        let mut app = BrowseApp::new(&catalog, Controller::default());
        assert_eq!(app.results.len(), catalog.len());

        type_text(&mut app, "writ");
        assert_eq!(app.controller.pending_text(), "writ");
        assert_eq!(app.results.len(), catalog.len());

        // Enter settles the search instead of opening the selection
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.view, Route::Directory);
        let ids = listed_ids(&app);
        assert!(ids.contains(&"quillmate".to_string()));
        assert!(ids.contains(&"lingobridge".to_string()));
        assert!(!ids.contains(&"tempo".to_string()));
    }

    #[test]
    fn backspace_edits_pending_text() {
        let catalog = catalog();
        let mut app = BrowseApp::new(&catalog, Controller::default());
        type_text(&mut app, "code");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.controller.pending_text(), "cod");
    }

    #[test]
    fn facet_keys_commit_immediately() {
        let catalog = catalog();
        let mut app = BrowseApp::new(&catalog, Controller::default());

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(
            app.controller.criteria().category,
            Facet::Only(Category::Text)
        );
        assert!(app.results.iter().all(|t| t.category == Category::Text));

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.controller.criteria().pricing, Facet::Only(Pricing::Free));
        assert_eq!(listed_ids(&app), vec!["lingobridge".to_string()]);

        app.handle_key(ctrl('s'));
        assert_eq!(app.controller.criteria().sort_by, SortBy::Newest);

        app.handle_key(ctrl('r'));
        assert_eq!(app.controller.criteria(), &Default::default());
        assert_eq!(app.results.len(), catalog.len());
    }

    #[test]
    fn enter_opens_selection_and_escape_goes_back() {
        let catalog = catalog();
        let mut app = BrowseApp::new(&catalog, Controller::default());
        app.handle_key(key(KeyCode::Down));
        let expected = app.results[1].id.clone();

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.view, Route::detail(expected.clone()));
        assert_eq!(app.detail_tool().map(|t| t.id.clone()), Some(expected));

        // Typing in the detail view does not touch the search
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.controller.pending_text(), "");

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.view, Route::Directory);
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn selection_stays_inside_results() {
        let catalog = catalog();
        let mut app = BrowseApp::new(&catalog, Controller::default());
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected, 0);
        for _ in 0..50 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.selected, catalog.len() - 1);
    }
}
