//! TUI rendering using ratatui.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app::{App, Field};

const HELP: &str = " Tab/Shift-Tab: field | \u{2190}/\u{2192}: region/tone | Ctrl-U: clear | \
                    Ctrl-Y/F/P: copy intro/follow-up/plan | PgUp/PgDn: scroll | Esc: quit";

/// Render the whole form.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // main content
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[0]);

    render_form(f, app, columns[0]);
    render_output(f, app, columns[1]);
    render_status_bar(f, app, chunks[1]);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let mut focus_span = 0..0;

    for field in Field::ALL {
        let focused = field == app.focus;
        if focused {
            focus_span.start = lines.len();
        }
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let marker = if focused { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label()),
            label_style,
        )));

        let value = app.value(field);
        if field.is_choice() {
            lines.push(Line::from(format!("    \u{25c2} {value} \u{25b8}")));
        } else if value.is_empty() && !focused {
            lines.push(Line::from(Span::styled(
                format!("    {}", field.hint()),
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            let cursor = if focused { "\u{2588}" } else { "" };
            let count = value.split('\n').count();
            for (i, line) in value.split('\n').enumerate() {
                let tail = if i + 1 == count { cursor } else { "" };
                lines.push(Line::from(format!("    {line}{tail}")));
            }
        }
        if focused {
            focus_span.end = lines.len();
        }
        lines.push(Line::from(""));
    }

    let inner = area.inner(Margin::new(1, 1));
    let scroll = form_scroll(&lines, focus_span, inner.width, inner.height);
    let form = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Spice Buyer WhatsApp Outreach "),
        );
    f.render_widget(form, area);
}

/// Rows `line` occupies when wrapped to `width`. Word wrapping can only add
/// rows, so this never overshoots.
fn wrapped_rows(line: &Line, width: u16) -> usize {
    let width = usize::from(width.max(1));
    line.width().div_ceil(width).max(1)
}

/// First visible row of the form: zero while the focused field fits on
/// screen, otherwise the row where the focused field starts.
fn form_scroll(lines: &[Line], focus: Range<usize>, width: u16, height: u16) -> u16 {
    let start: usize = lines[..focus.start]
        .iter()
        .map(|line| wrapped_rows(line, width))
        .sum();
    let rows: usize = lines[focus]
        .iter()
        .map(|line| wrapped_rows(line, width))
        .sum();
    if start + rows <= usize::from(height) {
        0
    } else {
        u16::try_from(start).unwrap_or(u16::MAX)
    }
}

fn render_output(f: &mut Frame, app: &App, area: Rect) {
    let out = &app.output;
    let section = |title: &str| {
        Line::from(Span::styled(
            title.to_owned(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let link = |label: &str, url: &str| {
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
            Span::raw(url.to_owned()),
        ])
    };

    let mut lines: Vec<Line> = vec![section(&format!(
        "Cultural guidance ({})",
        app.profile.region
    ))];
    lines.extend(out.advice.iter().map(|note| Line::from(format!("? {note}"))));
    lines.push(Line::from(""));

    lines.push(section("Introduction message"));
    lines.extend(out.intro.lines().map(|l| Line::from(l.to_owned())));
    lines.push(Line::from(""));
    lines.push(link("Open in WhatsApp", &out.intro_link));
    if let Some(direct) = &out.direct_link {
        lines.push(link("WhatsApp to number", direct));
    }
    lines.push(Line::from(""));

    lines.push(section("Follow-up message (48 hours)"));
    lines.extend(out.follow_up.lines().map(|l| Line::from(l.to_owned())));
    lines.push(Line::from(""));
    lines.push(link("Open in WhatsApp", &out.follow_up_link));
    lines.push(Line::from(""));

    lines.push(section("Step-by-step plan"));
    lines.extend(out.step_plan.lines().map(|l| Line::from(l.to_owned())));

    let output = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.output_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(" Output "));
    f.render_widget(output, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status_message {
        Some(msg) => format!(" {msg}"),
        None => HELP.to_owned(),
    };
    let bar = Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}
