//! Preset calculator view

use super::{field_line, result_lines, section_header, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use spell_core::SpellType;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(chunks[0]);

    draw_spell_list(f, app, left[0]);
    draw_inputs(f, app, left[1]);
    draw_results(f, app, chunks[1]);
}

fn draw_spell_list(f: &mut Frame, app: &App, area: Rect) {
    let selector_focused = app.presets.focus == 0;
    let items: Vec<ListItem> = app
        .category_spells()
        .into_iter()
        .map(|spell| {
            let selected = spell.name == app.presets.spell;
            let style = if selected && selector_focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let prefix = if selected { "► " } else { "  " };
            let kind = match spell.spell_type {
                SpellType::Damage => Span::styled(" dmg", Style::default().fg(Color::Red)),
                SpellType::Healing => Span::styled(" heal", Style::default().fg(Color::Green)),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", prefix, spell.name), style),
                kind,
            ]))
        })
        .collect();

    let title = format!(" {} (c: category, ←/→: spell) ", app.presets.category.name());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.presets;
    let lines: Vec<Line> = form
        .fields()
        .into_iter()
        .enumerate()
        .map(|(i, field)| field_line(field, i + 1 == form.focus))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Character "));
    f.render_widget(paragraph, area);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let spell = app.selected_spell();
    let result = &app.preset_result;
    let stats = app.presets.stats();
    let stat = stats.scaling_stat(spell.scaling);

    let mut lines = vec![
        Line::from(Span::styled(
            spell.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Level {} • {} {} • {}",
                stats.level,
                spell.scaling.label(),
                stat,
                spell.category.name()
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    lines.extend(result_lines(
        result,
        spell.is_healing(),
        area.width.saturating_sub(2),
    ));

    let c = &spell.constants;
    lines.push(Line::from(""));
    lines.push(section_header("Breakdown"));
    lines.push(stat_line("Level Bonus", format!("+{} (level ÷ 5)", result.level_base)));
    lines.push(stat_line(
        "Min Formula",
        format!("{} × {:.3} + {}", spell.scaling.label(), c.min_mult, c.min_offset),
    ));
    lines.push(stat_line(
        "Max Formula",
        format!("{} × {:.3} + {}", spell.scaling.label(), c.max_mult, c.max_offset),
    ));
    lines.push(stat_line(
        &format!("{} Component", spell.scaling.label()),
        format!("{} - {}", result.min_stat_component, result.max_stat_component),
    ));

    let equip = app.presets.equip_bonus.value_i32();
    if equip != 0 {
        lines.push(stat_line("Equipment", format!("{:+}%", equip)));
    }

    let title = if spell.is_healing() { " Healing " } else { " Damage " };
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}
