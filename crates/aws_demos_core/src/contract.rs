//! Command-line contract primitives shared by every example command.
//!
//! The only CLI precondition an example enforces is positional-argument
//! arity; semantic validation of the values belongs to the remote service.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn usage_line(command: &str, fields: &[&str]) -> String {
    let mut line = format!("Usage: {command}");
    for field in fields {
        line.push_str(&format!(" <{field}>"));
    }
    line
}

/// Validates that exactly one argument was supplied per named field.
///
/// On a mismatch the returned error carries the usage line, so callers can
/// print it verbatim and exit without touching any client.
pub fn expect_args(
    command: &str,
    fields: &[&str],
    args: &[String],
) -> Result<Vec<String>, ValidationError> {
    if args.len() != fields.len() {
        return Err(ValidationError::new(usage_line(command, fields)));
    }
    Ok(args.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn usage_line_names_each_positional_field() {
        let line = usage_line("publish_message", &["topic_arn", "message"]);
        assert_eq!(line, "Usage: publish_message <topic_arn> <message>");
    }

    #[test]
    fn usage_line_for_zero_arity_command_is_bare() {
        assert_eq!(usage_line("list_buckets", &[]), "Usage: list_buckets");
    }

    #[test]
    fn expect_args_accepts_exact_arity() {
        let fields = expect_args("delete_topic", &["topic_arn"], &args(&["arn:aws:sns:t"]))
            .expect("arity should match");
        assert_eq!(fields, vec!["arn:aws:sns:t".to_string()]);
    }

    #[test]
    fn expect_args_rejects_missing_arguments_with_usage() {
        let error = expect_args("delete_topic", &["topic_arn"], &[]).expect_err("should reject");
        assert_eq!(error.message(), "Usage: delete_topic <topic_arn>");
    }

    #[test]
    fn expect_args_rejects_extra_arguments_with_usage() {
        let error = expect_args("list_buckets", &[], &args(&["unexpected"]))
            .expect_err("should reject");
        assert_eq!(error.message(), "Usage: list_buckets");
    }
}
