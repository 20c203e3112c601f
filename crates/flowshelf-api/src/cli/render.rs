//! Terminal rendering of a [`PageView`] as grid cards or list rows.

use comfy_table::{presets, Cell, CellAlignment, Color, ContentArrangement, Table};

use flowshelf_core::present::{ActionKind, CardView, PageView};
use flowshelf_types::view::LayoutMode;

/// Text block for one grid card: title, platform badge, description, tag
/// chips, price and links.
pub fn grid_card_text(card: &CardView) -> String {
    let mut lines = vec![card.title.clone(), format!("[{}]", card.platform), String::new()];
    lines.push(card.description.clone());

    if let Some(tags) = card.tags.as_ref().filter(|t| !t.is_empty()) {
        lines.push(String::new());
        lines.push(tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "));
    }

    lines.push(String::new());
    if let Some(price) = &card.price {
        lines.push(price.clone());
    }
    lines.extend(link_lines(card));
    lines.join("\n")
}

/// `Label: href` for every action that has a target.
fn link_lines(card: &CardView) -> Vec<String> {
    card.actions
        .iter()
        .filter(|a| a.kind != ActionKind::Add)
        .filter_map(|a| {
            a.href
                .as_deref()
                .filter(|href| !href.is_empty())
                .map(|href| format!("{}: {href}", a.label))
        })
        .collect()
}

/// Cards laid out `columns` per row.
pub fn grid_table(page: &PageView, columns: usize) -> Table {
    let columns = columns.max(1);
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    for chunk in page.cards.chunks(columns) {
        let mut row: Vec<Cell> = chunk.iter().map(|card| Cell::new(grid_card_text(card))).collect();
        // Pad the last row so every row has the same width.
        row.resize_with(columns, || Cell::new(""));
        table.add_row(row);
    }

    table
}

/// One row per workflow. No tag chips in list layout.
pub fn list_table(page: &PageView) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Workflow").fg(Color::White),
        Cell::new("Platform").fg(Color::White),
        Cell::new("Description").fg(Color::White),
        Cell::new("Price").fg(Color::White),
        Cell::new("Links").fg(Color::White),
    ]);

    for card in &page.cards {
        let price_cell = match card.price.as_deref() {
            Some("Free") => Cell::new("Free").fg(Color::Green),
            Some(price) => Cell::new(price).fg(Color::Yellow),
            None => Cell::new("-").fg(Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(&card.title).fg(Color::Cyan),
            Cell::new(&card.platform),
            Cell::new(&card.description),
            price_cell.set_alignment(CellAlignment::Right),
            Cell::new(link_lines(card).join("\n")).fg(Color::DarkGrey),
        ]);
    }

    table
}

/// Render the results area for `page` in its own layout.
pub fn results_table(page: &PageView, columns: usize) -> Table {
    match page.layout {
        LayoutMode::Grid => grid_table(page, columns),
        LayoutMode::List => list_table(page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowshelf_core::catalog::Catalog;
    use flowshelf_core::present::{page_view, PageMeta};
    use flowshelf_core::session::BrowserSession;
    use flowshelf_types::view::ViewState;

    fn page(layout: LayoutMode) -> PageView {
        let mut session = BrowserSession::new(
            Catalog::sample(),
            ViewState {
                layout,
                ..ViewState::default()
            },
        );
        session.refresh();
        page_view(&session, PageMeta::default()).unwrap()
    }

    #[test]
    fn grid_card_text_includes_tags_and_links() {
        let page = page(LayoutMode::Grid);
        let text = grid_card_text(&page.cards[0]);
        assert!(text.starts_with("Automated Data Backup\n[n8n]"));
        assert!(text.contains("#Backup #Cloud Storage #Data Management"));
        assert!(text.contains("View Details: /docs/workflows/n8n/automated-data-backup"));
        assert!(text.contains("Download: /workflows/n8n/automated-data-backup.json"));
    }

    #[test]
    fn grid_table_pads_last_row() {
        let page = page(LayoutMode::Grid);
        let table = grid_table(&page, 2);
        assert_eq!(table.row_iter().count(), 2);
        assert!(table.row_iter().all(|row| row.cell_count() == 2));
    }

    #[test]
    fn list_table_has_one_row_per_card_without_tags() {
        let page = page(LayoutMode::List);
        let table = list_table(&page);
        assert_eq!(table.row_iter().count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("Invoice Generator"));
        assert!(!rendered.contains("#Finance"));
    }

    #[test]
    fn results_table_follows_layout() {
        let grid = results_table(&page(LayoutMode::Grid), 3);
        assert_eq!(grid.row_iter().count(), 1);
        let list = results_table(&page(LayoutMode::List), 3);
        assert_eq!(list.row_iter().count(), 3);
    }
}
