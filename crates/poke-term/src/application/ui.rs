#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::prelude::Backend;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::AppState;
use crate::domain::services::EventsService;
use crate::domain::services::TreeRow;

pub const TITLE: &str = "PokeAPI TUI";
const TREE_WIDTH: u16 = 40;

fn tree_item(row: &TreeRow) -> ListItem<'static> {
    let indent = "  ".repeat(row.depth);
    let line = match row.expanded {
        Some(expanded) if row.depth > 0 => {
            let marker = if expanded { "▼" } else { "▶" };
            Line::from(Span::styled(
                format!("{indent}{marker} {}", row.label),
                Style::default().fg(Color::Yellow),
            ))
        }
        Some(_) => Line::from(Span::styled(
            row.label.to_string(),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(format!("{indent}{}", row.label)),
    };

    return ListItem::new(line);
}

pub fn draw(frame: &mut Frame, app_state: &mut AppState) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(TREE_WIDTH), Constraint::Min(0)])
        .split(vertical[1]);

    // Borders take two rows of the tree panel.
    app_state.set_rect(body[0].inner(ratatui::layout::Margin::new(1, 1)));

    let header = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(header, vertical[0]);

    let items = app_state
        .tree_view
        .rows(&app_state.tree)
        .iter()
        .map(tree_item)
        .collect::<Vec<ListItem>>();
    let tree = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app_state.tree.label.to_string()),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(tree, body[0], app_state.tree_view.state_mut());

    let details = Paragraph::new(app_state.details.to_string())
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: false });
    frame.render_widget(details, body[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" q ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" Quit  "),
        Span::styled(" ↑↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" Navigate  "),
        Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" Select"),
    ]));
    frame.render_widget(footer, vertical[2]);
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    return run_loop(terminal, tx, &mut events).await;
}

/// Draws and dispatches until the user quits. The catalog is requested exactly
/// once, before the first event is read.
pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut app_state = AppState::default();
    tx.send(Action::LoadCatalog)?;

    loop {
        terminal.draw(|frame| draw(frame, &mut app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event, &tx)? {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap_or_default();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap_or_default();
    execute!(io::stdout(), cursor::Show).unwrap_or_default();
}
