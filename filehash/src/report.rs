use colored::*;
use std::io::{self, Write};

use crate::digest::DigestSet;

// Fallback when stdout is not a terminal (pipes, redirects, CI)
const FALLBACK_WIDTH: usize = 80;

pub fn terminal_width() -> usize {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(w), _)) => w as usize,
        None => FALLBACK_WIDTH,
    }
}

/// Write the report: green header, cyan rules sized to `width`, one
/// `NAME: hexdigest` line per algorithm in sorted name order.
pub fn print_report<W: Write>(out: &mut W, digests: &DigestSet, width: usize) -> io::Result<()> {
    let rule = "-".repeat(width);

    writeln!(out, "{}", "File Hash Data:".green())?;
    writeln!(out, "{}", rule.cyan())?;
    for (algorithm, digest) in digests.entries() {
        writeln!(out, "{algorithm}: {digest}")?;
    }
    writeln!(out, "{}", rule.cyan())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DigestSet {
        DigestSet {
            crc: "352441c2".into(),
            md5: "900150983cd24fb0d6963f7d28e17f72".into(),
            sha1: "a9993e364706816aba3e25717850c26c9cd0d89d".into(),
            sha224: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7".into(),
            sha256: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad".into(),
            sha384: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7".into(),
            sha512: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f".into(),
        }
    }

    #[test]
    fn test_report_layout() {
        colored::control::set_override(false);

        let mut out = vec![];
        print_report(&mut out, &sample(), 80).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "File Hash Data:");
        assert_eq!(lines[1], "-".repeat(80));
        assert_eq!(lines[1], lines[9]);
        assert_eq!(lines[2], "CRC: 352441c2");
        assert_eq!(lines[3], "MD5: 900150983cd24fb0d6963f7d28e17f72");
        assert!(lines[4].starts_with("SHA1: "));
        assert!(lines[8].starts_with("SHA512: "));
    }

    #[test]
    fn test_report_width() {
        colored::control::set_override(false);

        let mut out = vec![];
        print_report(&mut out, &sample(), 25).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(1).unwrap(), "-".repeat(25));
    }
}
