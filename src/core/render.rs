//! Renderer module
//!
//! Renders a `FileReport` as two text lines:
//!
//! ```text
//! a.txt: 5 bytes
//! Content start: b'hello'
//! ```

use std::fmt::Write as _;
use std::io::Write;

use crate::core::model::FileReport;

/// Render bytes as a bytes literal, escaping anything non-printable.
///
/// Printable ASCII is kept as-is; `\t`, `\n` and `\r` use their short escapes;
/// other bytes become `\xNN`. The quote is `'` unless the bytes contain `'`
/// and no `"`.
pub fn bytes_repr(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };

    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote as char);

    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\x{:02x}", byte);
            }
        }
    }

    out.push(quote as char);
    out
}

/// Render the two report lines, each terminated by a newline
pub fn render_report(report: &FileReport) -> String {
    format!(
        "{}: {} bytes\nContent start: {}\n",
        report.name,
        report.size,
        bytes_repr(&report.prefix)
    )
}

/// Write a rendered report and flush, so it survives a later fatal error
pub fn write_report<W: Write>(report: &FileReport, mut writer: W) -> std::io::Result<()> {
    writer.write_all(render_report(report).as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, size: u64, prefix: &[u8]) -> FileReport {
        FileReport::new(name, format!("/data/{}", name), size, prefix.to_vec())
    }

    #[test]
    fn test_bytes_repr_plain_text() {
        assert_eq!(bytes_repr(b"hello"), "b'hello'");
    }

    #[test]
    fn test_bytes_repr_empty() {
        assert_eq!(bytes_repr(b""), "b''");
    }

    #[test]
    fn test_bytes_repr_control_and_high_bytes() {
        assert_eq!(bytes_repr(&[0x00, 0x01, 0x7f, 0xff]), r"b'\x00\x01\x7f\xff'");
    }

    #[test]
    fn test_bytes_repr_whitespace_escapes() {
        assert_eq!(bytes_repr(b"a\tb\nc\rd e"), r"b'a\tb\nc\rd e'");
    }

    #[test]
    fn test_bytes_repr_png_header() {
        let header = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
        assert_eq!(bytes_repr(&header), r"b'\x89PNG\r\n\x1a\n'");
    }

    #[test]
    fn test_bytes_repr_backslash() {
        assert_eq!(bytes_repr(br"C:\dir"), r"b'C:\\dir'");
    }

    #[test]
    fn test_bytes_repr_single_quote_switches_delimiter() {
        assert_eq!(bytes_repr(b"it's"), "b\"it's\"");
    }

    #[test]
    fn test_bytes_repr_both_quotes_escapes_single() {
        assert_eq!(bytes_repr(b"'\""), r#"b'\'"'"#);
    }

    #[test]
    fn test_bytes_repr_double_quote_only() {
        assert_eq!(bytes_repr(b"say \"hi\""), "b'say \"hi\"'");
    }

    #[test]
    fn test_bytes_repr_utf8_is_escaped_bytewise() {
        assert_eq!(bytes_repr("é".as_bytes()), r"b'\xc3\xa9'");
    }

    #[test]
    fn test_render_report_lines() {
        let output = render_report(&report("a.txt", 5, b"hello"));
        assert_eq!(output, "a.txt: 5 bytes\nContent start: b'hello'\n");
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_render_report_empty_file() {
        let output = render_report(&report("empty.dat", 0, b""));
        assert_eq!(output, "empty.dat: 0 bytes\nContent start: b''\n");
    }

    #[test]
    fn test_render_report_size_is_full_size() {
        let output = render_report(&report("big.bin", 4096, &[b'x'; 100]));
        assert!(output.starts_with("big.bin: 4096 bytes\n"));
        assert!(output.contains(&format!("b'{}'", "x".repeat(100))));
    }

    #[test]
    fn test_write_report_to_writer() {
        let mut buffer = Vec::new();
        write_report(&report("a.txt", 5, b"hello"), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "a.txt: 5 bytes\nContent start: b'hello'\n");
    }
}
