use regex::Regex;

/// Redacts known secret patterns from the input string.
///
/// Covers push registration tokens (FCM `…:APA91b…` and the local uuid form),
/// bearer tokens, and generic secrets after `key=`, `token=`, `secret=`.
pub fn sanitize_secrets(input: &str) -> String {
    // More specific patterns first, generic last.
    let patterns: &[&str] = &[
        // FCM registration tokens
        r"[A-Za-z0-9_\-]{8,}:APA91b[A-Za-z0-9_\-]+",
        // Locally issued registration tokens (uuid v4)
        r"[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}",
        // Bearer tokens
        r"Bearer [a-zA-Z0-9._\-]+",
        // Generic secrets after key=, token=, secret=, password=
        r"(?i)((?:key|token|secret|password)=)[a-zA-Z0-9_\-]{32,}",
    ];

    let mut result = input.to_string();

    for pattern in patterns {
        // Static literals; a compile failure is a programming error caught by the tests.
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        if pattern.starts_with("(?i)((?:key") {
            result = re.replace_all(&result, "${1}[REDACTED]").into_owned();
        } else {
            result = re.replace_all(&result, "[REDACTED]").into_owned();
        }
    }

    result
}
