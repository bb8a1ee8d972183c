//! UI rendering

mod base_power_view;
mod help_view;
mod preset_view;

use crate::app::{App, Tab};
use crate::input::NumericField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use spell_core::ComputationResult;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::BasePower => base_power_view::draw(f, app, chunks[1]),
        Tab::Presets => preset_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("r", "Reset"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::BasePower => vec![
            ("↑/↓", "Field"),
            ("0-9/-", "Type"),
            ("←/→", "∓1"),
            ("PgUp/PgDn", "±10"),
            ("m", "Attack/Healing"),
        ],
        Tab::Presets => vec![
            ("↑/↓", "Field"),
            ("←/→", "Spell / ∓1"),
            ("c", "Category"),
            ("0-9/-", "Type"),
        ],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Spell Damage Calculator "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// One input row, highlighted when focused
pub fn field_line(field: &NumericField, focused: bool) -> Line<'static> {
    let marker = if focused { "► " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(format!("{}{:18}", marker, field.label), label_style),
        Span::styled(
            format!("{:>10}", field.text()),
            Style::default().fg(Color::White),
        ),
    ];

    // Show the value actually used when the text is empty, invalid or clamped
    if field.is_adjusted() {
        spans.push(Span::styled(
            format!("  (using {})", field.value()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

pub fn stat_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Min / avg / max lines plus the range projection bar
pub fn result_lines(result: &ComputationResult, healing: bool, width: u16) -> Vec<Line<'static>> {
    let (min_label, max_label, accent) = if healing {
        ("Min Heal", "Max Heal", Color::Green)
    } else {
        ("Min Hit", "Max Hit", Color::Red)
    };

    let value_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:10}", min_label), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:>8}", result.min), value_style),
            Span::raw("    "),
            Span::styled(format!("{:10}", max_label), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:>8}", result.max), value_style),
        ]),
        Line::from(vec![
            Span::styled(format!("{:10}", "Avg"), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:>8}", result.avg),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                format!("Δ {} RANGE", result.spread()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        range_bar(result, width, accent),
    ];

    if result.has_negative() {
        lines.push(Line::from(Span::styled(
            "Equipment modifier pushed the result below zero",
            Style::default().fg(Color::Magenta),
        )));
    }

    lines
}

/// Text gauge: the range as a bar with the average marked in the middle
pub fn range_bar(result: &ComputationResult, width: u16, color: Color) -> Line<'static> {
    let left = format!("MIN {} ", result.min);
    let right = format!(" MAX {}", result.max);
    let inner = usize::from(width)
        .saturating_sub(left.chars().count() + right.chars().count())
        .max(3);
    let mid = inner / 2;
    let bar: String = (0..inner)
        .map(|i| if i == mid { '┃' } else { '█' })
        .collect();

    Line::from(vec![
        Span::styled(left, Style::default().fg(Color::Gray)),
        Span::styled(bar, Style::default().fg(color)),
        Span::styled(right, Style::default().fg(Color::Gray)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FieldRules;

    #[test]
    fn test_field_line_shows_used_value() {
        let mut field = NumericField::new("Level", 5, FieldRules::AT_LEAST_ONE);
        field.backspace();
        let line = field_line(&field, true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("(using 1)"));
        assert!(text.starts_with("► "));
    }

    #[test]
    fn test_negative_result_is_flagged() {
        let result = ComputationResult {
            min: -10,
            max: -5,
            avg: -8,
            ..Default::default()
        };
        let lines = result_lines(&result, false, 40);
        assert_eq!(lines.len(), 5);
    }
}
