use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::action::{Action, ActionDistribution, Decision};
use crate::cards::{Card, Suit};
use crate::profile::StrategyProfileConfig;
use crate::simulate::SampleSummary;

pub fn frequency_bar(freq: f64, width: usize) -> String {
    let freq = freq.clamp(0.0, 1.0);
    let filled = (freq * width as f64).round() as usize;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.1}%", freq * 100.0);

    if freq >= 0.5 {
        format!("{} {}", bar.green(), pct)
    } else if freq >= 0.2 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.dimmed(), pct)
    }
}

pub fn board_display(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".dimmed().to_string();
    }
    cards
        .iter()
        .map(|card| {
            let text = format!("{}{}", card.rank.to_char(), card.suit.symbol());
            match card.suit {
                Suit::Spades => text.white().to_string(),
                Suit::Hearts => text.red().to_string(),
                Suit::Diamonds => text.blue().to_string(),
                Suit::Clubs => text.green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn styled_action(action: Action) -> String {
    let name = action.as_str();
    match action {
        Action::Raise => name.red().bold().to_string(),
        Action::Call => name.green().bold().to_string(),
        Action::Fold => name.dimmed().bold().to_string(),
        Action::Check => name.yellow().bold().to_string(),
    }
}

pub fn styled_decision(decision: &Decision) -> String {
    if decision.action == Action::Raise {
        format!("{} {}", styled_action(decision.action), decision.amount)
    } else {
        styled_action(decision.action)
    }
}

pub fn distribution_table(dist: &ActionDistribution) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Action").set_alignment(CellAlignment::Left),
        Cell::new("Weight").set_alignment(CellAlignment::Left),
    ]);
    for (action, weight) in dist.iter() {
        table.add_row(vec![
            Cell::new(styled_action(action)),
            Cell::new(frequency_bar(weight, 20)),
        ]);
    }
    table.to_string()
}

pub fn candidates_table(candidates: &[(Action, f64)]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("Candidate"), Cell::new("Weight")]);
    for &(action, weight) in candidates {
        table.add_row(vec![
            Cell::new(styled_action(action)),
            Cell::new(format!("{:.3}", weight)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}

pub fn profiles_table<'a>(profiles: impl IntoIterator<Item = &'a StrategyProfileConfig>) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Name"),
        Cell::new("Strength"),
        Cell::new("Potential"),
        Cell::new("Board"),
        Cell::new("Position"),
        Cell::new("SPR"),
        Cell::new("Danger"),
        Cell::new("Bluff"),
        Cell::new("Aggr"),
        Cell::new("Depth"),
    ]);
    for p in profiles {
        let num = |v: f64| Cell::new(format!("{:.2}", v)).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            Cell::new(p.index),
            Cell::new(p.name.bold().to_string()),
            num(p.hand_strength_weight),
            num(p.potential_weight),
            num(p.board_advantage_weight),
            num(p.position_weight),
            num(p.spr_weight),
            num(p.danger_penalty_weight),
            num(p.bluff_frequency),
            num(p.aggression_factor),
            Cell::new(p.search_depth).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}

pub fn summary_table(summary: &SampleSummary) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Action"),
        Cell::new("Count").set_alignment(CellAlignment::Right),
        Cell::new("Frequency"),
    ]);
    for (action, count) in summary.iter() {
        table.add_row(vec![
            Cell::new(styled_action(action)),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(frequency_bar(summary.frequency(action), 20)),
        ]);
    }
    table.to_string()
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
