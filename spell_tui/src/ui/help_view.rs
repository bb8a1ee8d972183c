//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Move between fields"),
        key_line("0-9, -", "Type into the focused field"),
        key_line("Backspace", "Delete last character"),
        key_line("←/→", "Decrease/increase by 1 (or change spell)"),
        key_line("PgDn/PgUp", "Decrease/increase by 10"),
        key_line("m", "Toggle attack/healing (Base Power tab)"),
        key_line("c", "Next spell category (Presets tab)"),
        key_line("r", "Reset inputs to defaults"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Formulas"),
        Line::from(""),
        Line::from(Span::styled(
            "Level Bonus (Base Power tab, diminishing):",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  1-500: +1 per 5 levels, 501-1100: +1 per 6 levels"),
        Line::from("  1101-1800: +1 per 7 levels, ... (+100 range, +1 divisor)"),
        Line::from(""),
        Line::from(Span::styled(
            "Level Bonus (Presets tab, flat):",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  level ÷ 5"),
        Line::from(""),
        Line::from(Span::styled(
            "Base Power Scaling:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Max Mult = √BP × 0.59     Min Mult = Max Mult × 0.55"),
        Line::from("  Max Offset = ⌊BP × 0.25⌋  Min Offset = ⌊Max Offset × 0.6⌋"),
        Line::from("  Component = ⌊ML × Mult + Offset⌋"),
        Line::from(""),
        Line::from(Span::styled(
            "Result:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Total = Level Bonus + Component"),
        Line::from("  Equipment: ⌊Total × (1 + Equip% / 100)⌋"),
        Line::from("  Resistance (attack only): ⌊Total × Resist% / 100⌋"),
        Line::from("  Avg = ⌊(Min + Max) / 2⌋"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Formulas "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
