/// Split a `TITLE:` / `BODY:` response into headline and article text.
///
/// Without markers the first line is the title and the rest the body.
pub fn parse_story(response: &str) -> (String, String) {
    let lines: Vec<&str> = response.trim().lines().collect();
    let mut title = String::new();
    let mut body = String::new();

    for (i, line) in lines.iter().enumerate() {
        let upper = line.to_uppercase();
        if upper.starts_with("TITLE:") {
            title = line.get("TITLE:".len()..).unwrap_or_default().trim().to_string();
        } else if upper.starts_with("BODY:") {
            body = lines[i + 1..].join("\n").trim().to_string();
            break;
        }
    }

    if title.is_empty() {
        if let Some((first, rest)) = lines.split_first() {
            title = first.trim().to_string();
            body = rest.join("\n").trim().to_string();
        }
    }

    (title, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_markers() {
        let response = "TITLE: Phillies Land Ace\n\nBODY:\nFirst paragraph.\n\nSecond paragraph.";
        let (title, body) = parse_story(response);
        assert_eq!(title, "Phillies Land Ace");
        assert_eq!(body, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let (title, body) = parse_story("title: Quiet Night\nbody:\nNothing happened.");
        assert_eq!(title, "Quiet Night");
        assert_eq!(body, "Nothing happened.");
    }

    #[test]
    fn test_falls_back_to_first_line() {
        let (title, body) = parse_story("Yankees Win Again\nThey won.\nAgain.");
        assert_eq!(title, "Yankees Win Again");
        assert_eq!(body, "They won.\nAgain.");
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(parse_story("   "), (String::new(), String::new()));
    }
}
