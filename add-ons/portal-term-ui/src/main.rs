//! portal-term-ui: keyboard-driven terminal frontend for the DevOps Lab
//! portal. Keys: ↑/↓ select, Enter open detail, Esc/H home, [ / ] history,
//! O launch service URL, D open docs, Q quit.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use portal_core::{Navigator, PortalConfig, SessionHistory, ViewKey};
use portal_term_ui::{card_targets, docs_url, primary_url, tree_lines, TermSurface};
use ratatui::{
    backend::CrosstermBackend,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use std::io::stdout;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PortalConfig::from_env();
    let catalog = Arc::new(config.load_catalog()?);
    let history = match &config.initial_route {
        Some(route) => SessionHistory::with_initial(route.clone()),
        None => SessionHistory::new(),
    };
    let title = config.chrome.title.clone();
    let mut nav = Navigator::start(catalog, &config, history, TermSurface::default());

    let mut selected: usize = 0;
    let mut scroll: usize = 0;
    let mut scroll_state = ScrollbarState::default();

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    loop {
        if nav.surface_mut().take_scroll_request() {
            scroll = 0;
        }
        let tree = nav.surface().current().cloned();
        let targets = tree.as_ref().map(card_targets).unwrap_or_default();
        if !targets.is_empty() {
            selected = selected.min(targets.len() - 1);
        }
        let lines = tree
            .as_ref()
            .map(|t| tree_lines(t, selected))
            .unwrap_or_default();
        scroll = scroll.min(lines.len().saturating_sub(1));
        scroll_state = scroll_state.content_length(lines.len()).position(scroll);

        let location = match nav.current_view() {
            ViewKey::Home => "Dashboard".to_string(),
            ViewKey::Service(id) => format!("Dashboard / {id}"),
        };

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(1),
                ])
                .split(f.area());

            let header = Paragraph::new(format!("{title} — {location}"))
                .block(Block::default().borders(Borders::ALL).title(" Portal "));
            f.render_widget(header, chunks[0]);

            let body = Paragraph::new(Text::from(lines.clone()))
                .block(Block::default().borders(Borders::ALL).title(format!(" {location} ")))
                .scroll((scroll as u16, 0));
            f.render_widget(body, chunks[1]);
            f.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .thumb_symbol("█")
                    .track_symbol(Some("│")),
                chunks[1],
                &mut scroll_state,
            );

            let help = Paragraph::new(
                "↑/↓ select · Enter detail · Esc home · [ / ] history · O launch · D docs · Q quit",
            );
            f.render_widget(help, chunks[2]);
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let on_home = matches!(nav.current_view(), ViewKey::Home);
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => break,
                    KeyCode::Up => {
                        if on_home {
                            selected = selected.saturating_sub(1);
                        } else {
                            scroll = scroll.saturating_sub(1);
                        }
                    }
                    KeyCode::Down => {
                        if on_home {
                            selected = (selected + 1).min(targets.len().saturating_sub(1));
                        } else {
                            scroll += 1;
                        }
                    }
                    KeyCode::PageUp => scroll = scroll.saturating_sub(10),
                    KeyCode::PageDown => scroll += 10,
                    KeyCode::Enter => {
                        if let Some(target) = targets.get(selected) {
                            if on_home {
                                nav.navigate(target);
                            }
                        }
                    }
                    KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                        nav.navigate("home");
                        selected = 0;
                    }
                    KeyCode::Char('[') => {
                        if let Some(token) = nav.history_mut().back() {
                            nav.history_changed(Some(&token));
                        }
                    }
                    KeyCode::Char(']') => {
                        if let Some(token) = nav.history_mut().forward() {
                            nav.history_changed(Some(&token));
                        }
                    }
                    KeyCode::Char('o') | KeyCode::Char('O') => {
                        if let Some(url) = tree.as_ref().and_then(|t| primary_url(t, selected)) {
                            let _ = webbrowser::open(&url);
                        }
                    }
                    KeyCode::Char('d') | KeyCode::Char('D') => {
                        if let Some(url) = tree.as_ref().and_then(docs_url) {
                            let _ = webbrowser::open(&url);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
