//! Plain text output formatter

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::config::OutputConfig;
use super::utils::ruler;

/// Writes wrapped text, optionally preceded by a column ruler.
pub struct TextFormatter {
    config: OutputConfig,
}

impl TextFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write `wrapped` to any color-capable writer.
    ///
    /// `width` is the normalized wrap width and sizes the ruler.
    pub fn write_to<W: WriteColor>(&self, out: &mut W, width: usize, wrapped: &str) -> io::Result<()> {
        if self.config.ruler {
            if self.config.use_color {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_dimmed(true))?;
            }
            write!(out, "{}", ruler(width))?;
            if self.config.use_color {
                out.reset()?;
            }
            writeln!(out)?;
        }
        writeln!(out, "{}", wrapped)?;
        out.flush()
    }

    /// Write `wrapped` to stdout.
    pub fn print(&self, width: usize, wrapped: &str) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(&mut stdout, width, wrapped)
    }
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;

    fn render(config: OutputConfig, width: usize, wrapped: &str) -> String {
        let mut buf = if config.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        TextFormatter::new(config)
            .write_to(&mut buf, width, wrapped)
            .unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_output() {
        let out = render(OutputConfig::default(), 20, "hello\nworld");
        assert_eq!(out, "hello\nworld\n");
    }

    #[test]
    fn test_ruler_without_color() {
        let config = OutputConfig {
            use_color: false,
            ruler: true,
        };
        let out = render(config, 12, "     hi");
        assert_eq!(out, "123456789012\n     hi\n");
    }

    #[test]
    fn test_ruler_with_color_emits_escapes() {
        let config = OutputConfig {
            use_color: true,
            ruler: true,
        };
        let out = render(config, 10, "x");
        assert!(out.contains("\x1b["), "expected ANSI escapes: {:?}", out);
        assert!(out.contains("1234567890"));
        assert!(out.ends_with("x\n"));
    }

    #[test]
    fn test_color_without_ruler_is_plain() {
        let config = OutputConfig {
            use_color: true,
            ruler: false,
        };
        assert_eq!(render(config, 10, "x"), "x\n");
    }
}
