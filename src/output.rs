//! Byte rendering for reported substrings
//!
//! Bytes print as themselves when printable ASCII or high-bit; everything
//! else gets a C-style escape or three-digit octal. In paired mode the
//! buffer is consumed two bytes at a time: the first of each pair is a
//! colour tag selecting a bold foreground for the second, emitted only when
//! the sink supports colour (the tag byte passes through verbatim
//! otherwise).

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Render `bytes` to `out`, paired-colour mode when `color` is set.
pub fn print_bytes<W: WriteColor>(out: &mut W, bytes: &[u8], color: bool) -> io::Result<()> {
    if color {
        print_paired(out, bytes)
    } else {
        print_plain(out, bytes)
    }
}

fn print_plain<W: WriteColor>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for &byte in bytes {
        write_escaped(out, byte)?;
    }
    Ok(())
}

fn print_paired<W: WriteColor>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    let mut i = 0;
    while i < bytes.len() {
        if i + 1 < bytes.len() {
            let tag = bytes[i];
            if out.supports_color() {
                out.set_color(ColorSpec::new().set_fg(Some(tag_color(tag))).set_bold(true))?;
            } else {
                out.write_all(&[tag])?;
            }
            write_escaped(out, bytes[i + 1])?;
            i += 2;
        } else {
            // Odd trailing byte carries no tag.
            write_escaped(out, bytes[i])?;
            i += 1;
        }
    }
    out.reset()?;
    Ok(())
}

/// Colour tags count up from 'A' through the eight ANSI foregrounds.
fn tag_color(tag: u8) -> Color {
    match tag.wrapping_sub(b'A') % 8 {
        0 => Color::Black,
        1 => Color::Red,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Blue,
        5 => Color::Magenta,
        6 => Color::Cyan,
        _ => Color::White,
    }
}

fn write_escaped<W: Write>(out: &mut W, byte: u8) -> io::Result<()> {
    if (0x20..0x7F).contains(&byte) || byte & 0x80 != 0 {
        return out.write_all(&[byte]);
    }
    match byte {
        0x07 => write!(out, "\\a"),
        0x08 => write!(out, "\\b"),
        b'\t' => write!(out, "\\t"),
        b'\n' => write!(out, "\\n"),
        0x0B => write!(out, "\\v"),
        0x0C => write!(out, "\\f"),
        b'\r' => write!(out, "\\r"),
        _ => write!(out, "\\{:03o}", byte),
    }
}
