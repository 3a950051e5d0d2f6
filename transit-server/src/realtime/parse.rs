//! curlbus arrival-board parsing.
//!
//! The board is a terminal-oriented table. Rows look like
//!
//! ```text
//! │405  │אגד    │תחנה מרכזית ירושלים  │13 min, 28 min│
//! ```
//!
//! with cells route / operator / headsign / ETA. ETA cells mix formats:
//! `now`, minute offsets (`3m`, `15 min`), wall-clock times (`14:32`),
//! and comma-separated combinations of those.

/// Cap on arrivals returned per stop. The board can list a whole hour of
/// departures; only the first few are decision-relevant.
const MAX_ARRIVALS: usize = 5;

/// Extract the upcoming arrivals for one line from a raw board.
///
/// Rows are filtered by normalized line equality, entries deduplicated
/// in order, and the result capped at [`MAX_ARRIVALS`].
pub fn parse_board(text: &str, expected_line: &str) -> Vec<String> {
    let expected = normalize_line(expected_line);
    let mut arrivals = Vec::new();

    for line in text.lines() {
        let Some((route_cell, eta_cell)) = row_cells(line) else {
            continue;
        };

        if normalize_line(route_cell) != expected {
            continue;
        }

        for part in eta_cell.split(',') {
            parse_eta_part(part, &mut arrivals);
        }
    }

    let mut seen = std::collections::HashSet::new();
    arrivals.retain(|a| seen.insert(a.clone()));
    arrivals.truncate(MAX_ARRIVALS);
    arrivals
}

/// Normalize a line/route identifier for comparison.
///
/// Operators format line numbers inconsistently: leading zeros, operator
/// prefixes ("אגד 405"). Take the last whitespace-separated token,
/// lowercased, with leading zeros stripped.
pub fn normalize_line(line: &str) -> String {
    let token = line
        .split_whitespace()
        .next_back()
        .unwrap_or("")
        .to_lowercase();

    let stripped = token.trim_start_matches('0');
    if stripped.is_empty() && !token.is_empty() {
        // "0" and "000" are still line zero
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Split a table row into its route and ETA cells.
///
/// Returns `None` for border lines, headers drawn without `│`, and
/// anything else that does not have four cells.
fn row_cells(line: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = line.split('│').collect();
    if parts.len() < 6 {
        return None;
    }
    Some((parts[1].trim(), parts[4].trim()))
}

/// Parse one comma-separated ETA entry into zero or more arrivals.
fn parse_eta_part(part: &str, out: &mut Vec<String>) {
    let lower = part.trim().to_lowercase();
    if lower.is_empty() {
        return;
    }

    if lower.contains("now") {
        out.push("now".to_string());
        // "now 3m" style entries carry a minute offset too
        for minutes in extract_minutes(&lower) {
            out.push(format!("{minutes} min"));
        }
        return;
    }

    let minutes = extract_minutes(&lower);
    if !minutes.is_empty() {
        for m in minutes {
            out.push(format!("{m} min"));
        }
        return;
    }

    if let Some(time) = extract_clock_time(&lower) {
        out.push(time);
    }
}

/// Find digit runs followed (after optional spaces) by `m`, as in `3m`,
/// `15 min`.
fn extract_minutes(s: &str) -> Vec<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let mut j = i;
            while j < bytes.len() && bytes[j] == b' ' {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'm' {
                out.push(s[start..i].to_string());
            }
        } else {
            i += 1;
        }
    }

    out
}

/// Find the first `H:MM` / `HH:MM` wall-clock time in a cell.
fn extract_clock_time(s: &str) -> Option<String> {
    let bytes = s.as_bytes();

    for (i, &b) in bytes.iter().enumerate() {
        if b != b':' {
            continue;
        }
        if i + 2 >= bytes.len() || !bytes[i + 1].is_ascii_digit() || !bytes[i + 2].is_ascii_digit()
        {
            continue;
        }

        let mut start = i;
        while start > 0 && bytes[start - 1].is_ascii_digit() && i - start < 2 {
            start -= 1;
        }
        if start == i {
            continue;
        }

        return Some(s[start..i + 3].to_string());
    }

    None
}
