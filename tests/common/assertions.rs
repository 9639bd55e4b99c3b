//! Assertion macros with descriptive failure messages.

/// Assert that a command succeeded, showing its output otherwise.
///
/// # Example
/// ```ignore
/// assert_success!(env.run(&["list"]));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        let result = &$result;
        assert!(
            result.success,
            "Expected success, got exit code {}\n\
             stdout:\n{}\n\
             stderr:\n{}",
            result.exit_code,
            result.stdout,
            result.stderr
        );
    };
}

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Imported 1 applications");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
