mod report;
mod sanitize;

pub use report::write_crash_report;
pub use sanitize::sanitize_secrets;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_redacts_push_token() {
        let token = "dGhpc2lzYXRva2Vu:APA91bHPRgkF3JUikC4ENAHEeMrd41Zxv3hVZjC9KtT8OvPVGJ";
        let input = format!("panicked while saving token {token}");
        let result = sanitize_secrets(&input);
        assert!(!result.contains("APA91b"), "got: {result}");
        assert!(result.contains("[REDACTED]"));
    }

    #[test]
    fn sanitize_redacts_bearer_and_key_values() {
        let result = sanitize_secrets("Authorization: Bearer abc.def-ghi");
        assert!(!result.contains("abc.def-ghi"));

        let secret = "a".repeat(40);
        let result = sanitize_secrets(&format!("url?token={secret}&x=1"));
        assert!(result.contains("token=[REDACTED]"), "got: {result}");
        assert!(result.contains("&x=1"));
    }

    #[test]
    fn sanitize_leaves_ordinary_text() {
        let input = "failed to load https://israeliparliament.org/boca/user/events/42";
        assert_eq!(sanitize_secrets(input), input);
    }

    #[test]
    fn sanitize_redacts_uuid_style_local_token() {
        let input = "token 7f9c2b1e-4d3a-4b8e-9f10-2a3b4c5d6e7f rotated";
        let result = sanitize_secrets(input);
        assert!(!result.contains("7f9c2b1e-4d3a"), "got: {result}");
    }
}
