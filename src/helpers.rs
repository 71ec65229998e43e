/// Builds a multi-line reply: `DDD-first`, body lines indented by one space,
/// then `DDD last`.
pub fn format_multiline(code: u16, first: &str, body: &[&str], last: &str) -> String {
    let mut reply = format!("{}-{}\r\n", code, first);
    for line in body {
        reply.push(' ');
        reply.push_str(line);
        reply.push_str("\r\n");
    }
    reply.push_str(&format!("{} {}", code, last));
    reply
}

/// Quotes a path for a 257 reply, doubling embedded quotes.
pub fn quote_path(path: &str) -> String {
    format!("\"{}\"", path.replace('"', "\"\""))
}

/// Splits reply text into lines and terminates each one with CRLF.
pub fn to_wire(text: &str) -> String {
    let mut wire = String::with_capacity(text.len() + 2);
    for line in text.lines() {
        wire.push_str(line.trim_end_matches('\r'));
        wire.push_str("\r\n");
    }
    if wire.is_empty() {
        wire.push_str("\r\n");
    }
    wire
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_multiline() {
        let reply = format_multiline(214, "Commands:", &["USER PASS", "QUIT"], "Help OK.");
        assert_eq!(reply, "214-Commands:\r\n USER PASS\r\n QUIT\r\n214 Help OK.");
    }

    #[test]
    fn test_quote_path() {
        assert_eq!(quote_path("/pub"), "\"/pub\"");
        assert_eq!(quote_path("/say \"hi\""), "\"/say \"\"hi\"\"\"");
    }

    #[test]
    fn test_to_wire() {
        assert_eq!(to_wire("250 Done"), "250 Done\r\n");
        assert_eq!(to_wire("211-a\n b\r\n211 End"), "211-a\r\n b\r\n211 End\r\n");
        assert_eq!(to_wire("200 ok\r\n"), "200 ok\r\n");
    }
}
