use std::io::{self, Write};

pub mod cc {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    pub const LIGHT_RED: &str = "\x1b[91m";
}

#[macro_export]
macro_rules! log {
    // -----------------------------------------------------------------
    // 1) colored, no extra args
    //    log!(cc::RED, "hello");
    // -----------------------------------------------------------------
    ($color:expr, $fmt:literal $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
                $color,
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};

    // -----------------------------------------------------------------
    // 2) colored, with args
    //    log!(cc::LIGHT_RED, "TX failed: {}", e);
    // -----------------------------------------------------------------
    ($color:expr, $fmt:literal, $($arg:tt)+ $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
                $color,
                $($arg)+,
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};

    // -----------------------------------------------------------------
    // 3) default color, no args
    // -----------------------------------------------------------------
    ($fmt:literal $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", $fmt, "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};

    // -----------------------------------------------------------------
    // 4) default color, with args
    // -----------------------------------------------------------------
    ($fmt:literal, $($arg:tt)+ $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", $fmt, "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
                $($arg)+,
            ),
        );
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                "{}{}{}",
                $crate::libs::writing::cc::ORANGE,
                format_args!($($arg)*),
                $crate::libs::writing::cc::RESET,
            ),
        );
        let _ = ::std::io::Write::write_fmt(&mut _stderr, format_args!("\n"));
    }};
}

/// Console report writer. Flows print their blocks through this so tests can
/// hand in a `Vec<u8>` instead of stdout.
pub struct Colors<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Colors<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: true }
    }

    /// Same writer with escape codes suppressed (`NO_COLOR`, tests).
    pub fn plain(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn with_color(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn cprint(&mut self, text: &str, color: &str) {
        if self.color {
            let _ = writeln!(self.out, "{}{}{}", color, text, cc::RESET);
        } else {
            let _ = writeln!(self.out, "{}", text);
        }
    }

    pub fn print(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    /// `Label : value` row of a report block.
    pub fn field(&mut self, label: &str, value: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{label}: {value}");
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    pub fn err_print(&mut self, text: &str) {
        self.cprint(text, cc::RED);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Colors<io::StdoutLock<'static>> {
    pub fn stdout(color: bool) -> Self {
        Self::with_color(io::stdout().lock(), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_log_variants_compile() {
        crate::log!(crate::libs::writing::cc::GREEN, "colored no args");
        crate::log!(crate::libs::writing::cc::GREEN, "colored with arg: {}", 123);
        crate::log!("plain no args");
        crate::log!("plain with arg: {}", 456);
        crate::warn!("warn with arg: {}", 789);
    }

    #[test]
    fn plain_writer_has_no_escape_codes() {
        let mut c = Colors::plain(Vec::new());
        c.cprint("--- block ---", cc::CYAN);
        c.field("Address ", "0xabc");
        c.err_print("err");
        let out = String::from_utf8(c.into_inner()).unwrap();
        assert_eq!(out, "--- block ---\nAddress : 0xabc\nerr\n");
    }

    #[test]
    fn colored_writer_wraps_text() {
        let mut c = Colors::new(Vec::new());
        c.cprint("hello", cc::GREEN);
        let out = String::from_utf8(c.into_inner()).unwrap();
        assert_eq!(out, format!("{}hello{}\n", cc::GREEN, cc::RESET));
    }
}
