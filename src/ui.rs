use anstyle::{AnsiColor, Style};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, Write};

const LABEL_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Plain,
    Success,
    Info,
    Warn,
}

impl Tone {
    fn style(self) -> Style {
        let color = match self {
            Tone::Plain => AnsiColor::Cyan,
            Tone::Success => AnsiColor::Green,
            Tone::Info => AnsiColor::Blue,
            Tone::Warn => AnsiColor::Yellow,
        };
        Style::new().bold().fg_color(Some(color.into()))
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tone::Warn)
    }
}

fn color_enabled(is_tty: bool) -> bool {
    is_tty && std::env::var_os("NO_COLOR").is_none()
}

fn emit(tone: Tone, label: &str, message: &str) {
    if tone.to_stderr() {
        let stderr = io::stderr();
        let color = color_enabled(stderr.is_terminal());
        write_lines(&mut stderr.lock(), tone, label, message, color);
    } else {
        let stdout = io::stdout();
        let color = color_enabled(stdout.is_terminal());
        write_lines(&mut stdout.lock(), tone, label, message, color);
    }
}

fn write_lines(out: &mut impl Write, tone: Tone, label: &str, message: &str, color: bool) {
    let (start, end) = if color {
        let style = tone.style();
        (style.render().to_string(), style.render_reset().to_string())
    } else {
        (String::new(), String::new())
    };

    for (idx, line) in message.lines().enumerate() {
        if idx == 0 {
            let _ = writeln!(out, "{start}{label:>LABEL_WIDTH$}{end} {line}");
        } else {
            let _ = writeln!(out, "{:>LABEL_WIDTH$} {line}", "");
        }
    }
    let _ = out.flush();
}

pub fn status(label: &str, message: impl Display) {
    emit(Tone::Plain, label, &message.to_string());
}

pub fn info(message: impl Display) {
    emit(Tone::Info, "Info", &message.to_string());
}

pub fn warn(message: impl Display) {
    emit(Tone::Warn, "Warning", &message.to_string());
}

pub fn success(label: &str, message: impl Display) {
    emit(Tone::Success, label, &message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(label: &str, message: &str) -> String {
        let mut buf = Vec::new();
        write_lines(&mut buf, Tone::Info, label, message, false);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_label_right_aligned() {
        assert_eq!(render("Profile", "default"), "     Profile default\n");
    }

    #[test]
    fn test_continuation_lines_indented() {
        let out = render("Saved", "first\nsecond");
        assert_eq!(out, "       Saved first\n             second\n");
    }
}
