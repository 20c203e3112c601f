//! Interactive TUI workflow browser.
//!
//! Provides a ratatui-based 3-pane browser over the catalog.
//!
//! Layout:
//! - Left (25%): Filters (platforms, then tag toggles)
//! - Center (50%): Workflows as a card grid or a list
//! - Right (25%): Detail panel
//!
//! Keybindings: `/` search, `p` cycle platform, space toggle filter,
//! `s` cycle sort, `v` switch grid/list, `c` clear filters, Tab cycle panes,
//! j/k (and h/l in grid) navigate, q/Esc quit

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use flowshelf_core::present::{
    card_view, controls, result_count_label, CardView, PageMeta, NO_MATCHES_MESSAGE,
};
use flowshelf_core::session::BrowserSession;
use flowshelf_types::view::{LayoutMode, PlatformFilter};

/// Rows taken by one card in grid layout, borders included.
const CARD_HEIGHT: u16 = 8;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Which pane currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Filters,
    Workflows,
    Details,
}

/// One selectable row of the filter pane.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterEntry {
    Platform { value: String, label: String, selected: bool },
    Tag { tag: String, selected: bool },
}

/// The TUI browser application state.
struct BrowserState {
    session: BrowserSession,
    meta: PageMeta,
    /// Cards per row in grid layout.
    grid_columns: usize,
    /// Filter pane selection.
    filter_state: ListState,
    /// Selected visible workflow (both layouts).
    workflow_state: ListState,
    active_pane: Pane,
    /// Whether search input mode is active.
    search_mode: bool,
    quit: bool,
}

impl BrowserState {
    fn new(mut session: BrowserSession, meta: PageMeta, grid_columns: usize) -> Self {
        if session.view().indices().is_none() {
            session.refresh();
        }

        let mut filter_state = ListState::default();
        filter_state.select(Some(0));

        let mut state = Self {
            session,
            meta,
            grid_columns: grid_columns.max(1),
            filter_state,
            workflow_state: ListState::default(),
            active_pane: Pane::Workflows,
            search_mode: false,
            quit: false,
        };
        state.reset_selection();
        state
    }

    fn visible_count(&self) -> usize {
        self.session.visible_count().unwrap_or(0)
    }

    /// Reset workflow selection after the visible list was re-derived.
    fn reset_selection(&mut self) {
        if self.visible_count() == 0 {
            self.workflow_state.select(None);
        } else {
            self.workflow_state.select(Some(0));
        }
    }

    fn filter_entries(&self) -> Vec<FilterEntry> {
        let controls = controls(&self.session);
        let platforms = controls.platforms.into_iter().map(|p| FilterEntry::Platform {
            value: p.value,
            label: p.label,
            selected: p.selected,
        });
        let tags = controls.tags.into_iter().map(|t| FilterEntry::Tag {
            tag: t.tag,
            selected: t.selected,
        });
        platforms.chain(tags).collect()
    }

    /// Apply the filter entry under the cursor.
    fn activate_filter(&mut self) {
        let entry = self
            .filter_state
            .selected()
            .and_then(|i| self.filter_entries().into_iter().nth(i));

        match entry {
            Some(FilterEntry::Platform { value, .. }) => {
                self.session.select_platform(PlatformFilter::from(value));
            }
            Some(FilterEntry::Tag { tag, .. }) => {
                self.session.toggle_tag(&tag);
            }
            None => return,
        }
        self.reset_selection();
    }

    /// Move to the next platform option, wrapping back to "all".
    fn cycle_platform(&mut self) {
        let mut options = vec![PlatformFilter::All];
        options.extend(
            self.session
                .catalog()
                .platforms()
                .into_iter()
                .map(PlatformFilter::from),
        );

        let current = options
            .iter()
            .position(|p| *p == self.session.state().selected_platform)
            .unwrap_or(0);
        let next = options[(current + 1) % options.len()].clone();
        self.session.select_platform(next);
        self.reset_selection();
    }

    fn cycle_sort(&mut self) {
        let next = self.session.state().sort_key.next();
        self.session.set_sort(next);
        self.reset_selection();
    }

    fn clear_filters(&mut self) {
        self.session.clear_filters();
        self.reset_selection();
    }

    fn set_search(&mut self, query: String) {
        self.session.set_search(query);
        self.reset_selection();
    }

    /// The currently selected workflow as a full (grid) card.
    fn current_card(&self) -> Option<CardView> {
        let visible = self.session.visible()?;
        let item = visible.get(self.workflow_state.selected()?)?;
        Some(card_view(item, LayoutMode::Grid))
    }

    /// Workflow cursor step for up/down in the current layout.
    fn vertical_step(&self) -> usize {
        match self.session.state().layout {
            LayoutMode::Grid => self.grid_columns,
            LayoutMode::List => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Launch the interactive browser over `session`.
pub fn run_browser(session: BrowserSession, meta: PageMeta, grid_columns: usize) -> Result<()> {
    let mut state = BrowserState::new(session, meta, grid_columns);

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

// ---------------------------------------------------------------------------
// TUI loop
// ---------------------------------------------------------------------------

fn run_tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut BrowserState,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, state))?;

        if state.quit {
            break;
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(key.code, state);
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Key handling
// ---------------------------------------------------------------------------

fn handle_key(code: KeyCode, state: &mut BrowserState) {
    if state.search_mode {
        let mut query = state.session.state().search_query.clone();
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                state.search_mode = false;
            }
            KeyCode::Backspace => {
                query.pop();
                state.set_search(query);
            }
            KeyCode::Char(c) => {
                query.push(c);
                state.set_search(query);
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.quit = true;
        }
        KeyCode::Char('/') => {
            state.search_mode = true;
        }
        KeyCode::Char('p') => state.cycle_platform(),
        KeyCode::Char('s') => state.cycle_sort(),
        KeyCode::Char('v') => {
            state.session.toggle_layout();
        }
        KeyCode::Char('c') => state.clear_filters(),
        KeyCode::Tab => {
            state.active_pane = match state.active_pane {
                Pane::Filters => Pane::Workflows,
                Pane::Workflows => Pane::Details,
                Pane::Details => Pane::Filters,
            };
        }
        KeyCode::BackTab => {
            state.active_pane = match state.active_pane {
                Pane::Filters => Pane::Details,
                Pane::Workflows => Pane::Filters,
                Pane::Details => Pane::Workflows,
            };
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let step = state.vertical_step();
            navigate(state, step as isize);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let step = state.vertical_step();
            navigate(state, -(step as isize));
        }
        KeyCode::Char('l') | KeyCode::Right => navigate(state, 1),
        KeyCode::Char('h') | KeyCode::Left => navigate(state, -1),
        KeyCode::Char(' ') | KeyCode::Enter => match state.active_pane {
            Pane::Filters => state.activate_filter(),
            Pane::Workflows => state.active_pane = Pane::Details,
            Pane::Details => {}
        },
        _ => {}
    }
}

/// Move the cursor of the active pane by `delta`, clamped to its bounds.
fn navigate(state: &mut BrowserState, delta: isize) {
    let (len, list_state) = match state.active_pane {
        Pane::Filters => (state.filter_entries().len(), &mut state.filter_state),
        Pane::Workflows => {
            let len = state.session.visible_count().unwrap_or(0);
            (len, &mut state.workflow_state)
        }
        Pane::Details => return,
    };

    if len == 0 {
        return;
    }
    let current = list_state.selected().unwrap_or(0);
    let next = current.saturating_add_signed(delta).min(len - 1);
    list_state.select(Some(next));
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn border_color(state: &BrowserState, pane: Pane) -> Color {
    if state.active_pane == pane {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn draw(frame: &mut Frame, state: &mut BrowserState) {
    let area = frame.area();

    // Main layout: header + body + footer
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // body
            Constraint::Length(3), // footer
        ])
        .split(area);

    draw_header(frame, main_layout[0], state);
    draw_body(frame, main_layout[1], state);
    draw_footer(frame, main_layout[2], state);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let view = state.session.state();
    let count = result_count_label(state.visible_count());

    let title = if state.search_mode {
        format!(" {}  |  Search: {}_ ", state.meta.title, view.search_query)
    } else if !view.search_query.is_empty() {
        format!(
            " {}  |  Filter: \"{}\"  |  {}  |  {}  |  {} ",
            state.meta.title,
            view.search_query,
            count,
            view.sort_key.label(),
            view.layout
        )
    } else {
        format!(
            " {}  |  {}  |  {}  |  {} ",
            state.meta.title,
            count,
            view.sort_key.label(),
            view.layout
        )
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, area);
}

fn draw_body(frame: &mut Frame, area: Rect, state: &mut BrowserState) {
    let body_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);

    draw_filters(frame, body_layout[0], state);
    match state.session.state().layout {
        LayoutMode::Grid => draw_grid(frame, body_layout[1], state),
        LayoutMode::List => draw_list(frame, body_layout[1], state),
    }
    draw_details(frame, body_layout[2], state);
}

fn draw_filters(frame: &mut Frame, area: Rect, state: &mut BrowserState) {
    let items: Vec<ListItem> = state
        .filter_entries()
        .into_iter()
        .map(|entry| {
            let (marker, text, selected) = match entry {
                FilterEntry::Platform { label, selected, .. } => {
                    (if selected { "(•) " } else { "( ) " }, label, selected)
                }
                FilterEntry::Tag { tag, selected } => {
                    (if selected { "[x] " } else { "[ ] " }, tag, selected)
                }
            };
            let style = if selected {
                Style::default().fg(Color::Green).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::DarkGray)),
                Span::styled(text, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Filters ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color(state, Pane::Filters))),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut state.filter_state);
}

fn workflows_block(state: &BrowserState) -> Block<'static> {
    Block::default()
        .title(" Workflows ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(state, Pane::Workflows)))
}

fn draw_empty(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let empty = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(NO_MATCHES_MESSAGE, Style::default().fg(Color::DarkGray))),
    ])
    .block(workflows_block(state))
    .wrap(Wrap { trim: true });
    frame.render_widget(empty, area);
}

fn price_span(card: &CardView) -> Span<'static> {
    match card.price.as_deref() {
        Some("Free") => Span::styled("Free", Style::default().fg(Color::Green)),
        Some(price) => Span::styled(price.to_string(), Style::default().fg(Color::Yellow)),
        None => Span::raw(""),
    }
}

fn draw_list(frame: &mut Frame, area: Rect, state: &mut BrowserState) {
    let layout = state.session.state().layout;
    let cards: Vec<CardView> = state
        .session
        .visible()
        .unwrap_or_default()
        .into_iter()
        .map(|item| card_view(item, layout))
        .collect();

    if cards.is_empty() {
        draw_empty(frame, area, state);
        return;
    }

    let desc_width = usize::from(area.width.saturating_sub(8)).max(10);
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let title = Line::from(vec![
                Span::styled(card.title.clone(), Style::default().fg(Color::White).bold()),
                Span::raw("  "),
                Span::styled(format!("[{}]", card.platform), Style::default().fg(Color::Magenta)),
                Span::raw("  "),
                price_span(card),
            ]);
            let desc = Line::from(Span::styled(
                truncate(&card.description, desc_width),
                Style::default().fg(Color::Gray),
            ));
            ListItem::new(vec![title, desc])
        })
        .collect();

    let list = List::new(items)
        .block(workflows_block(state))
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut state.workflow_state);
}

fn grid_card_lines(card: &CardView) -> Vec<Line<'static>> {
    let tags = card
        .tags
        .as_ref()
        .map(|tags| tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            format!("[{}]", card.platform),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            card.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(tags, Style::default().fg(Color::DarkGray))),
        Line::from(price_span(card)),
    ]
}

fn draw_grid(frame: &mut Frame, area: Rect, state: &mut BrowserState) {
    let cards: Vec<CardView> = state
        .session
        .visible()
        .unwrap_or_default()
        .into_iter()
        .map(|item| card_view(item, LayoutMode::Grid))
        .collect();

    if cards.is_empty() {
        draw_empty(frame, area, state);
        return;
    }

    let block = workflows_block(state);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = state.grid_columns;
    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    let selected = state.workflow_state.selected().unwrap_or(0);
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);

    for (slot, row_area) in row_areas.iter().enumerate() {
        let row = first_row + slot;
        let start = row * columns;
        if start >= cards.len() {
            break;
        }

        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (col, card) in cards[start..].iter().take(columns).enumerate() {
            let is_selected = start + col == selected;
            let border = if is_selected { Color::Cyan } else { Color::DarkGray };
            let paragraph = Paragraph::new(grid_card_lines(card))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border)),
                )
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, col_areas[col]);
        }
    }
}

fn draw_details(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

    let content = if let Some(card) = state.current_card() {
        let mut lines = vec![
            Line::from(Span::styled(card.title.clone(), Style::default().fg(Color::Cyan).bold())),
            Line::from(""),
            Line::from(value(card.description.clone())),
            Line::from(""),
            Line::from(vec![label("Platform: "), value(card.platform.clone())]),
            Line::from(vec![label("Price:    "), price_span(&card)]),
            Line::from(vec![
                label("Tags:     "),
                value(card.tags.clone().unwrap_or_default().join(", ")),
            ]),
            Line::from(vec![label("ID:       "), value(card.id.clone())]),
            Line::from(""),
        ];
        for action in &card.actions {
            if let Some(href) = action.href.as_ref().filter(|h| !h.is_empty()) {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", action.label),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(href.clone(), Style::default().fg(Color::Blue)),
                ]));
            }
        }
        lines
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled("No workflow selected", Style::default().fg(Color::DarkGray))),
        ]
    };

    let detail = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color(state, Pane::Details))),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(detail, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let help = if state.search_mode {
        " Type to search | Enter/Esc to finish "
    } else {
        " q quit | / search | p platform | space toggle | s sort | v grid/list | c clear | Tab panes "
    };

    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(footer, area);
}
