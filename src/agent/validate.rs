use regex::Regex;

/// The import line every runnable Abaqus script carries. Its presence is the
/// acceptance heuristic separating real script output from refusals and
/// clarification requests.
pub const REQUIRED_IMPORT_MARKER: &str = "from abaqus import";

/// Check a completion response against the acceptance predicate.
/// Returns `None` when the response is accepted, otherwise the reason.
pub fn acceptance_failure(response: &str) -> Option<&'static str> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Some("response was empty");
    }
    if !trimmed.contains(REQUIRED_IMPORT_MARKER) {
        return Some("response lacks the Abaqus import marker");
    }
    None
}

pub fn is_valid_script(response: &str) -> bool {
    acceptance_failure(response).is_none()
}

/// Extract the Python script body from a completion response using a cascade:
///
/// 1. `<CODE>...</CODE>` XML tags (case-insensitive)
/// 2. `` ```python ... ``` `` markdown fence
/// 3. Any `` ``` `` block containing the Abaqus import marker
/// 4. The raw response, when it carries the marker with no fencing at all
///
/// Returns `None` if no script body is found.
pub fn extract_script_body(response: &str) -> Option<String> {
    if let Some(code) = try_xml_tags(response) {
        return Some(code);
    }
    if let Some(code) = try_markdown_fence(response) {
        return Some(code);
    }
    if let Some(code) = try_heuristic(response) {
        return Some(code);
    }
    // Models sometimes return the bare script with no fencing.
    let trimmed = response.trim();
    if trimmed.contains(REQUIRED_IMPORT_MARKER) {
        return Some(trimmed.to_string());
    }
    None
}

fn try_xml_tags(response: &str) -> Option<String> {
    let re = Regex::new(r"(?si)<CODE>([\s\S]*?)</CODE>").ok()?;
    let cap = re.captures(response)?;
    let code = cap[1].trim().to_string();
    if code.is_empty() {
        return None;
    }
    Some(code)
}

fn try_markdown_fence(response: &str) -> Option<String> {
    let re = Regex::new(r"```python\s*\n([\s\S]*?)```").ok()?;
    let cap = re.captures(response)?;
    let code = cap[1].trim().to_string();
    if code.is_empty() {
        return None;
    }
    Some(code)
}

fn try_heuristic(response: &str) -> Option<String> {
    let re = Regex::new(r"```\w*\s*\n([\s\S]*?)```").ok()?;
    for cap in re.captures_iter(response) {
        let code = cap[1].trim().to_string();
        if !code.is_empty() && code.contains(REQUIRED_IMPORT_MARKER) {
            return Some(code);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "from abaqus import *\nfrom abaqusConstants import *\nmdb.Model(name='Beam')";

    #[test]
    fn accepts_response_with_marker() {
        assert!(is_valid_script(SCRIPT));
        assert!(acceptance_failure(SCRIPT).is_none());
    }

    #[test]
    fn rejects_empty_response() {
        assert_eq!(acceptance_failure("   \n"), Some("response was empty"));
    }

    #[test]
    fn rejects_refusal_without_marker() {
        let refusal = "Could you clarify the beam dimensions before I generate the script?";
        assert!(!is_valid_script(refusal));
        assert_eq!(
            acceptance_failure(refusal),
            Some("response lacks the Abaqus import marker")
        );
    }

    #[test]
    fn extract_from_xml_tags() {
        let response = format!("Here is the script:\n<CODE>\n{}\n</CODE>\nDone.", SCRIPT);
        let code = extract_script_body(&response).unwrap();
        assert!(code.starts_with("from abaqus import *"));
        assert!(!code.contains("<CODE>"));
    }

    #[test]
    fn extract_from_markdown_fence() {
        let response = format!("Here is the script:\n```python\n{}\n```\nDone.", SCRIPT);
        let code = extract_script_body(&response).unwrap();
        assert!(code.contains("mdb.Model"));
        assert!(!code.contains("```"));
    }

    #[test]
    fn extract_heuristic_requires_marker() {
        let response = "```\nprint('hello world')\n```";
        assert!(extract_script_body(response).is_none());

        let with_marker = format!("```\n{}\n```", SCRIPT);
        assert!(extract_script_body(&with_marker).is_some());
    }

    #[test]
    fn extract_falls_back_to_bare_script() {
        let code = extract_script_body(SCRIPT).unwrap();
        assert_eq!(code, SCRIPT);
    }

    #[test]
    fn extract_xml_preferred_over_fence() {
        let response =
            "<CODE>\nfrom abaqus import *\na = 1\n</CODE>\n```python\nfrom abaqus import *\nb = 2\n```";
        let code = extract_script_body(response).unwrap();
        assert!(code.contains("a = 1"));
        assert!(!code.contains("b = 2"));
    }

    #[test]
    fn extract_plain_prose_returns_none() {
        assert!(extract_script_body("No script here, just prose.").is_none());
    }
}
