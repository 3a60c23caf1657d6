//! Renderer module
//!
//! Formats matched source files as output lines, plain or quoted.

use std::io::{self, Write};

/// How each output line is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Plain,
    Quoted,
}

impl LineStyle {
    /// Quoted when a second positional argument was given, whatever its value
    pub fn from_flag(present: bool) -> Self {
        if present {
            LineStyle::Quoted
        } else {
            LineStyle::Plain
        }
    }
}

/// A matched source file, reduced to what the output line needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Last segment of the containing directory, '/'-normalized
    pub dir_segment: String,
    pub file_name: String,
}

impl SourceFile {
    pub fn new(dir_segment: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            dir_segment: dir_segment.into(),
            file_name: file_name.into(),
        }
    }

    /// `{dir}/{file}` with forward slashes only. The segment is already
    /// normalized; file names may still carry backslashes.
    pub fn fragment(&self) -> String {
        format!("{}/{}", self.dir_segment, self.file_name).replace('\\', "/")
    }
}

/// Format a single output line
pub fn render_line(file: &SourceFile, style: LineStyle) -> String {
    let fragment = file.fragment();
    match style {
        LineStyle::Plain => fragment,
        LineStyle::Quoted => format!("\"{}\"", fragment),
    }
}

/// Writes rendered lines to an output sink
pub struct LineWriter<W: Write> {
    writer: W,
    style: LineStyle,
    written: usize,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W, style: LineStyle) -> Self {
        Self {
            writer,
            style,
            written: 0,
        }
    }

    pub fn write(&mut self, file: &SourceFile) -> io::Result<()> {
        writeln!(self.writer, "{}", render_line(file, self.style))?;
        self.written += 1;
        Ok(())
    }

    /// Number of lines written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let file = SourceFile::new("foo", "bar.cpp");
        assert_eq!(render_line(&file, LineStyle::Plain), "foo/bar.cpp");
    }

    #[test]
    fn test_render_quoted() {
        let file = SourceFile::new("foo", "bar.cpp");
        assert_eq!(render_line(&file, LineStyle::Quoted), "\"foo/bar.cpp\"");
    }

    #[test]
    fn test_quoting_after_slash_normalization() {
        let file = SourceFile::new("win\\dir", "main.c");
        assert_eq!(render_line(&file, LineStyle::Quoted), "\"win/dir/main.c\"");
    }

    #[test]
    fn test_backslash_in_file_name_normalized() {
        let file = SourceFile::new("src", "odd\\name.c");
        assert_eq!(render_line(&file, LineStyle::Plain), "src/odd/name.c");
    }

    #[test]
    fn test_line_style_from_flag() {
        assert_eq!(LineStyle::from_flag(false), LineStyle::Plain);
        assert_eq!(LineStyle::from_flag(true), LineStyle::Quoted);
        assert_eq!(LineStyle::default(), LineStyle::Plain);
    }

    #[test]
    fn test_line_writer_counts_lines() {
        let mut out = Vec::new();
        {
            let mut writer = LineWriter::new(&mut out, LineStyle::Plain);
            writer.write(&SourceFile::new("src", "a.c")).unwrap();
            writer.write(&SourceFile::new("lib", "b.cpp")).unwrap();
            assert_eq!(writer.written(), 2);
            writer.flush().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "src/a.c\nlib/b.cpp\n");
    }
}
