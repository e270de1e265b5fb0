/// Monospace table rendered inside a Telegram code block.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&str>) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::from("```\n");

        output.push_str(&self.render_row(&self.headers, &widths));
        output.push('\n');
        output.push_str(&self.render_separator(&widths));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&self.render_row(row, &widths));
            output.push('\n');
        }

        output.push_str("```");
        output
    }

    // Width by character count, not bytes; cells carry "₦" and "—".
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, col) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(col.chars().count());
                }
            }
        }
        widths
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < widths.len() {
                line.push_str(col);
                if i < row.len() - 1 {
                    let padding = widths[i].saturating_sub(col.chars().count());
                    line.push_str(&" ".repeat(padding));
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    fn render_separator(&self, widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, &width) in widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_and_rows() {
        let mut table = Table::new(vec!["#", "Name", "Balance"]);
        table.add_row(vec!["01".into(), "Adaeze Obi".into(), "₦1,200.00".into()]);
        table.add_row(vec!["02".into(), "Bola".into(), "₦50.00".into()]);

        let rendered = table.render();
        assert!(rendered.starts_with("```\n"));
        assert!(rendered.ends_with("```"));
        assert!(rendered.contains("Adaeze Obi"));
        assert!(rendered.contains("-+-"));
    }

    #[test]
    fn pads_columns_to_widest_cell() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["wide cell".into(), "x".into()]);
        let rendered = table.render();
        assert!(rendered.contains("A         | B"));
    }
}
