use std::fmt::Display;

/// Substitute `%N$s` placeholders with the Nth (1-based) argument.
/// Placeholders without a matching argument are left untouched.
pub fn format_positional<T: Display>(template: &str, args: &[T]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        result.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let digits = tail.chars().take_while(|c| c.is_ascii_digit()).count();
        let index = tail[..digits].parse::<usize>().ok();
        let arg = index
            .filter(|_| tail[digits..].starts_with("$s"))
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| args.get(i));

        match arg {
            Some(arg) => {
                result.push_str(&arg.to_string());
                rest = &tail[digits + 2..];
            }
            None => {
                result.push('%');
                rest = tail;
            }
        }
    }

    result.push_str(rest);
    result
}

/// Format a whole number of seconds for logs
pub fn format_seconds(secs: i64) -> String {
    format!("{} second{}", secs, if secs == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_substitution() {
        assert_eq!(
            format_positional("%1$s posts in %2$s s, wait %3$s s", &[2, 30, 60]),
            "2 posts in 30 s, wait 60 s"
        );
        assert_eq!(format_positional("%2$s before %1$s", &["a", "b"]), "b before a");
    }

    #[test]
    fn test_unmatched_placeholders() {
        assert_eq!(format_positional("%4$s left", &[1, 2, 3]), "%4$s left");
        assert_eq!(format_positional("100% sure", &[1]), "100% sure");
        assert_eq!(format_positional("%0$s", &[1]), "%0$s");
        assert_eq!(format_positional("trailing %", &[1]), "trailing %");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(1), "1 second");
        assert_eq!(format_seconds(30), "30 seconds");
    }
}
