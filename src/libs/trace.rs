use std::env;
use std::fs::{create_dir_all, OpenOptions};
use std::io::{self, Write};

/// Append an RPC trace line to `logs/zen_<hour-day-month-year>.txt`.
/// Does nothing unless `DEBUG_LOGS=true`.
pub fn save_log_to_file(log: &str) {
    if !is_debug_logs_enabled() {
        return;
    }

    if let Err(e) = create_dir_all("logs") {
        eprintln!("save_log_to_file mkdir error: {e}");
        return;
    }
    let now = chrono::Utc::now().format("%H-%d-%m-%Y").to_string();
    let file_name = format!("logs/zen_{}.txt", now);
    let time_now = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
    let log_with_time = format!("[{}] {log}", time_now);

    if let Err(e) = append_line(&file_name, &log_with_time) {
        eprintln!("save_log_to_file error: {e}");
    }
}

fn is_debug_logs_enabled() -> bool {
    match env::var("DEBUG_LOGS") {
        Ok(val) => val.eq_ignore_ascii_case("true"),
        Err(_) => false,
    }
}

fn append_line(path: &str, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// Shorten a response body for error messages and traces.
pub fn trim_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_chars_respects_char_boundaries() {
        assert_eq!(trim_chars("", 4), "");
        assert_eq!(trim_chars("abcdef", 3), "abc");
        assert_eq!(trim_chars("…ab", 2), "…a");
    }

    #[test]
    fn append_line_writes_file() {
        let dir = std::env::temp_dir().join(format!("zenkit-trace-{}", std::process::id()));
        create_dir_all(&dir).unwrap();
        let path = dir.join("t.txt");
        let path_s = path.to_str().unwrap();
        append_line(path_s, "one").unwrap();
        append_line(path_s, "two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
