//! Base-power calculator view

use super::{field_line, result_lines, section_header, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use spell_core::{level::segments, CalcMode};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_inputs(f, app, chunks[0]);
    draw_results(f, app, chunks[1]);
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.base_power;

    let mut lines = vec![section_header("Mode")];
    for mode in CalcMode::all() {
        let selected = *mode == form.calc_mode;
        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "● " } else { "○ " }, style),
            Span::styled(mode.label(), style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        form.calc_mode.description(),
        Style::default().fg(Color::DarkGray),
    )));

    lines.push(Line::from(""));
    lines.push(section_header("Inputs"));
    for (i, field) in form.fields().into_iter().enumerate() {
        lines.push(field_line(field, i == form.focus));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Base Power: Cyclopedia → Spell Archive → Combat Stats",
        Style::default().fg(Color::DarkGray),
    )));
    if form.calc_mode.uses_resistance() {
        lines.push(Line::from(Span::styled(
            "Resist: 100 neutral, above = weakness, below = resistance",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Character & Spell "));
    f.render_widget(paragraph, area);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.base_power;
    let result = &app.base_power_result;
    let constants = form.constants();
    let stats = form.stats();
    let healing = form.calc_mode == CalcMode::Healing;

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Base Power {}", form.base_power.value()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Level {} • ML {}", stats.level, stats.magic_level),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    lines.extend(result_lines(result, healing, area.width.saturating_sub(2)));

    lines.push(Line::from(""));
    lines.push(section_header("Breakdown"));
    lines.push(stat_line("Level Bonus", format!("+{}", result.level_base)));
    for segment in segments(stats.level) {
        lines.push(Line::from(Span::styled(
            format!(
                "  {} levels ÷ {} = +{}",
                segment.levels, segment.divisor, segment.bonus
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(stat_line(
        "Min Multiplier",
        format!("{:.3}", constants.min_mult),
    ));
    lines.push(stat_line(
        "Max Multiplier",
        format!("{:.3}", constants.max_mult),
    ));
    lines.push(stat_line("Min Offset", constants.min_offset.to_string()));
    lines.push(stat_line("Max Offset", constants.max_offset.to_string()));
    lines.push(stat_line(
        "ML Component",
        format!("{} - {}", result.min_stat_component, result.max_stat_component),
    ));

    let mods = form.modifiers();
    if mods.equip_bonus_percent != 0 {
        lines.push(stat_line(
            "Equipment",
            format!("{:+}%", mods.equip_bonus_percent),
        ));
    }
    if form.calc_mode.uses_resistance() && mods.target_resistance_percent != 100 {
        lines.push(stat_line(
            "Target",
            format!("{}%", mods.target_resistance_percent),
        ));
    }

    let title = if healing { " Healing " } else { " Damage " };
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}
