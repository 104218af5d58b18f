use milkvendor_core::{AttendanceRepository, MonthCalendar, WEEKDAY_LABELS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    present: Color,
    today: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    present: Color::Green,
    today: Color::Yellow,
};

pub fn draw<R: AttendanceRepository>(f: &mut Frame, app: &App<R>) {
    let size = f.area();
    let calendar = app.calendar();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header / month selector
            Constraint::Min(8),    // Grid
            Constraint::Length(3), // Stats
            Constraint::Length(3), // Gauge
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ← ", Style::default().fg(THEME.text)),
        Span::styled(calendar.title.clone(), Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)),
        Span::styled(" → ", Style::default().fg(THEME.text)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_grid(f, app, &calendar, main_chunks[1]);
    draw_stats(f, app, &calendar, main_chunks[2], main_chunks[3]);

    let footer_text = match &app.status {
        Some(status) => status.clone(),
        None => "←↓↑→/hjkl: Move | space: Toggle | p/n: Month | t: Today | q: Quit".to_string(),
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn draw_grid<R: AttendanceRepository>(f: &mut Frame, app: &App<R>, calendar: &MonthCalendar, area: Rect) {
    let rows: Vec<Row> = calendar
        .weeks
        .iter()
        .map(|week| {
            let cells: Vec<Cell> = week
                .iter()
                .map(|slot| match slot {
                    None => Cell::from(""),
                    Some(day) => {
                        let mut style = Style::default().fg(THEME.text);
                        if day.present {
                            style = style.bg(THEME.present).fg(Color::Black);
                        }
                        if day.today {
                            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                            if !day.present {
                                style = style.fg(THEME.today);
                            }
                        }
                        if day.day == app.selected_day {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        Cell::from(format!("{:>3}", day.day)).style(style)
                    }
                })
                .collect();
            Row::new(cells).bottom_margin(1)
        })
        .collect();

    let widths = [Constraint::Ratio(1, 7); 7];
    let table = Table::new(rows, widths)
        .header(
            Row::new(WEEKDAY_LABELS.iter().map(|d| Cell::from(format!("{:>3}", d))))
                .style(Style::default().fg(THEME.primary))
                .bottom_margin(1),
        )
        .block(Block::default().title(" Deliveries ").borders(Borders::ALL).border_type(BorderType::Rounded));

    f.render_widget(table, area);
}

fn draw_stats<R: AttendanceRepository>(
    f: &mut Frame,
    app: &App<R>,
    calendar: &MonthCalendar,
    stats_area: Rect,
    gauge_area: Rect,
) {
    let stats = &calendar.stats;
    let line = Line::from(vec![
        Span::styled("Present: ", Style::default().fg(THEME.muted)),
        Span::styled(format!("{} days", stats.present), Style::default().fg(THEME.present).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("Bill: ", Style::default().fg(THEME.muted)),
        Span::styled(format!("{}{}", app.currency, stats.total_bill), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
    ]);
    let summary = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Summary ").borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)));
    f.render_widget(summary, stats_area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)))
        .gauge_style(Style::default().fg(THEME.present))
        .ratio(stats.ratio().clamp(0.0, 1.0))
        .label(format!("{}% attended", stats.percentage));
    f.render_widget(gauge, gauge_area);
}
