//! Startup announcement lines.

use std::io::{self, Write};

/// First announcement line, emitted verbatim.
pub const BANNER: &str = "Starting Video Chat Application...";

/// Write the two startup lines in fixed order and flush.
///
/// Line 1 is the banner; line 2 is `PORT: <resolved-port>`. Both must be on
/// stdout before the server process is launched.
pub fn announce<W: Write>(out: &mut W, port: u16) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "PORT: {port}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_two_lines_in_order() {
        let mut buf = Vec::new();
        announce(&mut buf, 8000).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Starting Video Chat Application...\nPORT: 8000\n");
    }

    #[test]
    fn port_line_reflects_override() {
        let mut buf = Vec::new();
        announce(&mut buf, 3000).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(1), Some("PORT: 3000"));
    }
}
