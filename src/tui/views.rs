//! TUI views and rendering

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Tabs, Wrap};

use crate::session::SessionMode;

use super::state::{AppState, InteractionMode};

/// Accent color for the focus presets
const ACCENT: Color = Color::Magenta;

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    if state.zen_mode {
        render_zen(state, frame);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(state, frame, main[0]);
    render_board(state, frame, main[1]);
    render_footer(state, frame, chunks[2]);

    if matches!(state.interaction_mode, InteractionMode::Help) {
        render_help_overlay(frame, chunks[1]);
    }
}

/// Zen mode: the task board and a one-line hint, nothing else
fn render_zen(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_board(state, frame, chunks[0]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", state.session.format_remaining()), Style::default().fg(ACCENT)),
        Span::raw("│ "),
        Span::styled("z", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" leave zen mode"),
    ]));
    frame.render_widget(hint, chunks[1]);

    if matches!(state.interaction_mode, InteractionMode::Help) {
        render_help_overlay(frame, chunks[0]);
    }
}

/// Render the header bar
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled("DevMastery", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(".OS ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled("Remote Focus & Growth Engine", Style::default().fg(Color::DarkGray)),
        Span::raw(" │ "),
        Span::styled("⚡ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{} XP", state.ledger.total_xp()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])])
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the session sidebar: timer, presets, objective box
fn render_sidebar(state: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Session ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Mode title
            Constraint::Length(3), // Progress gauge
            Constraint::Length(2), // Run state
            Constraint::Length(4), // Mode presets
            Constraint::Min(5),    // Objective
        ])
        .split(inner);

    // Mode title
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "CURRENT SESSION",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.session.mode.label(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    // Progress gauge - fullness is relative to the longest preset, so a
    // Break never fills the bar
    let gauge_color = match state.session.mode {
        SessionMode::Break => Color::Green,
        _ => ACCENT,
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(state.session.progress())
        .label(Span::styled(
            state.session.format_remaining(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, chunks[1]);

    // Run state
    let run_state = if state.session.running {
        Span::styled("▶ running", Style::default().fg(Color::Green))
    } else {
        Span::styled("⏸ paused  (space to start)", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(Line::from(run_state)), chunks[2]);

    // Mode presets
    let preset_lines: Vec<Line> = SessionMode::all()
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let selected = *mode == state.session.mode;
            let style = if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(
                format!(
                    "[{}] {} ({}m)",
                    i + 1,
                    mode.label(),
                    mode.duration_secs() / 60
                ),
                style,
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(preset_lines), chunks[3]);

    render_objective(state, frame, chunks[4]);
}

/// Render the objective input and generation status
fn render_objective(state: &AppState, frame: &mut Frame, area: Rect) {
    let editing = matches!(state.interaction_mode, InteractionMode::ObjectiveInput);

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut text = state.objective.clone();
    if editing {
        text.push('█');
    } else if text.is_empty() {
        text = "What is your main goal today?".to_string();
    }

    let status = if state.is_generating {
        Line::from(Span::styled("⟳ generating plan…", Style::default().fg(ACCENT)))
    } else {
        Line::from(Span::styled(
            "o edit · enter to generate",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let input = Paragraph::new(vec![Line::from(text), Line::from(""), status])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Primary Objective "),
        );
    frame.render_widget(input, area);
}

/// Render the task board: tabs, category content, task list
fn render_board(state: &AppState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Length(4), // Category content
            Constraint::Min(0),    // Task list
        ])
        .split(area);

    // Tab bar
    let titles: Vec<Line> = state.categories.iter().map(|c| Line::from(c.label.clone())).collect();
    let tabs = Tabs::new(titles)
        .select(state.active_tab)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, chunks[0]);

    // Category hero content
    let category = state.current_category();
    let content = Paragraph::new(vec![
        Line::from(Span::styled(
            category.content_title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            category.content_description.clone(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(content, chunks[1]);

    // Task list
    let visible = state.ledger.visible(state.active_category_id());

    if visible.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("No tasks in this module yet."),
            Line::from("Press o and generate a plan from your objective."),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[2]);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let checkbox = if task.completed {
                Span::styled("[x] ", Style::default().fg(ACCENT))
            } else {
                Span::styled("[ ] ", Style::default().fg(Color::Gray))
            };

            let title_style = if task.completed {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            let header = Line::from(vec![
                checkbox,
                Span::styled(task.title.clone(), title_style),
                Span::raw(" "),
                Span::styled(format!("+{} XP", task.xp), Style::default().fg(ACCENT)),
            ]);
            let body = Line::from(Span::styled(
                format!("    {}", task.description),
                Style::default().fg(Color::DarkGray),
            ));

            let item = ListItem::new(vec![header, body]);
            if i == state.selection.selected_index {
                item.style(Style::default().bg(Color::DarkGray))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Tasks "));
    frame.render_widget(list, chunks[2]);
}

/// Render the footer bar
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = if let Some(err) = &state.error_message {
        Line::from(Span::styled(format!(" {}", err), Style::default().fg(Color::Red)))
    } else {
        Line::from(vec![
            Span::styled(" space", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Start/Pause "),
            Span::styled(" 1-3", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Mode "),
            Span::styled(" tab", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Category "),
            Span::styled(" enter", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Toggle task "),
            Span::styled(" o", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Objective "),
            Span::styled(" z", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Zen "),
            Span::styled(" ?", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Help "),
            Span::styled(" q", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Quit "),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::ALL)), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    // Clear the area
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("space      ", Style::default().fg(Color::Cyan)),
            Span::raw("Start / pause the session timer"),
        ]),
        Line::from(vec![
            Span::styled("1 / 2 / 3  ", Style::default().fg(Color::Cyan)),
            Span::raw("Pomodoro (25m) / Deep Work (50m) / Break (15m)"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("tab, ←/→   ", Style::default().fg(Color::Cyan)),
            Span::raw("Switch category"),
        ]),
        Line::from(vec![
            Span::styled("j/k, ↑/↓   ", Style::default().fg(Color::Cyan)),
            Span::raw("Move task selection"),
        ]),
        Line::from(vec![
            Span::styled("enter, x   ", Style::default().fg(Color::Cyan)),
            Span::raw("Toggle task completion"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("o          ", Style::default().fg(Color::Cyan)),
            Span::raw("Edit objective (enter generates a plan)"),
        ]),
        Line::from(vec![
            Span::styled("z          ", Style::default().fg(Color::Cyan)),
            Span::raw("Toggle zen mode"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("?, F1      ", Style::default().fg(Color::Cyan)),
            Span::raw("Toggle help"),
        ]),
        Line::from(vec![
            Span::styled("q, Ctrl+c  ", Style::default().fg(Color::Cyan)),
            Span::raw("Quit"),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help, popup_area);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
