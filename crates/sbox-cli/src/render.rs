//! Text renderings of substitution tables.

use std::fmt::Write;

/// Renders `bytes` under a `title:` line, sixteen uppercase hex values per row,
/// followed by a blank line.
pub fn render_table(bytes: &[u8], title: &str) -> String {
    let mut out = format!("{title}:\n");
    for row in bytes.chunks(16) {
        let cells: Vec<String> = row.iter().map(|b| format!("{b:02X}")).collect();
        // writing into a String cannot fail
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out.push('\n');
    out
}

/// Renders `bytes` under a `title:` line as one lowercase hex string.
pub fn render_hex(bytes: &[u8], title: &str) -> String {
    format!("{title}:\n{}\n", hex::encode(bytes))
}
