use super::ui;
use crate::core::Snapshot;
use comfy_table::{Cell, CellAlignment};

pub fn render(snapshot: &Snapshot, limit: usize) -> Option<String> {
    let top = snapshot.get_top_currencies(limit);
    if top.is_empty() {
        return None;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Currency"),
        ui::header_cell("Latest Price"),
        ui::header_cell("Change (%)"),
    ]);
    for (rank, history) in top.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&history.currency),
            ui::price_cell(history.latest_price),
            ui::change_cell(history.price_change_percent_24h),
        ]);
    }
    Some(table.to_string())
}

pub fn run(snapshot: &Snapshot, limit: usize) {
    match render(snapshot, limit) {
        Some(output) => {
            println!("{}", ui::style_text("Top Performers", ui::StyleType::Title));
            println!("{output}");
        }
        None => println!("No price data available."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::tests::snapshot_of;

    #[test]
    fn test_render_ranks_by_price_within_alphabetical_cut() {
        let snapshot = snapshot_of(&[("CCC", 1, 10.0), ("BBB", 1, 1.0), ("AAA", 1, 5.0)]);
        let output = render(&snapshot, 2).unwrap();

        assert!(output.find("AAA").unwrap() < output.find("BBB").unwrap());
        assert!(!output.contains("CCC"));
    }

    #[test]
    fn test_render_empty_snapshot() {
        assert!(render(&Snapshot::default(), 5).is_none());
    }
}
