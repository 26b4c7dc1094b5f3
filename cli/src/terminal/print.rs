use colored::*;
use lbnode_common::model::ProbeInterfaceName;
use lbnode_core::report::Table;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

const DESCRIPTION: &str =
    "Finds the node that answers ARP for each LoadBalancer IP of your cluster.";

/// Writes one line of user-facing output to stdout.
pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn welcome(username: &str) {
    let text_content: String = format!("⟦ LBNODE v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).color(colors::SEPARATOR);
    print(&format!("{sep}{text}{sep}"));

    let greeting = format!("Welcome, {}!", username.color(colors::PRIMARY).bold());
    centerln(&greeting);
    centerln(&DESCRIPTION.color(colors::ACCENT).italic().to_string());
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

/// Prints the result table followed by a one-line summary.
pub fn results(table: &Table) {
    print("");
    print(&"Here is your result:".color(colors::TEXT_DEFAULT).bold().to_string());
    for line in render_table(table) {
        print(&line);
    }

    let count: ColoredString = format!("{} hosting pair(s)", table.rows.len()).bold().green();
    print(&format!("{} {}", "Found".color(colors::TEXT_DEFAULT), count));
}

pub fn interface_used(interface: &ProbeInterfaceName) {
    print("");
    print(&format!(
        "Interface used to run ARP command: {}",
        interface.as_str().green().bold()
    ));
    fat_separator();
}

/// Renders `table` with box-drawing borders, headers upper-cased.
pub fn render_table(table: &Table) -> Vec<String> {
    let headers: Vec<String> = table.headers.iter().map(|h| h.to_uppercase()).collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            table
                .rows
                .iter()
                .map(|row| UnicodeWidthStr::width(row[col].as_str()))
                .chain(std::iter::once(UnicodeWidthStr::width(headers[col].as_str())))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = |left: &str, mid: &str, right: &str| -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
            .color(colors::SEPARATOR)
            .to_string()
    };

    let line = |cells: &[String], color: Color| -> String {
        let bar = "│".color(colors::SEPARATOR).to_string();
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = " ".repeat(width - UnicodeWidthStr::width(cell.as_str()));
                format!(" {}{pad} ", cell.color(color).bold())
            })
            .collect();
        format!("{bar}{}{bar}", padded.join(bar.as_str()))
    };

    let mut out = Vec::with_capacity(table.rows.len() + 4);
    out.push(border("┌", "┬", "┐"));
    out.push(line(&headers[..], colors::TABLE_HEADER));
    out.push(border("├", "┼", "┤"));
    for row in &table.rows {
        out.push(line(&row[..], colors::TABLE_CELL));
    }
    out.push(border("└", "┴", "┘"));
    out
}
