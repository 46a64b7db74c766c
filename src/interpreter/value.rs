/// Runtime values.
///
/// Defines the `Value` enum carried by literals, stored in the environment and
/// produced by operators, along with its textual form used by `print` and
/// `println`.
pub mod core;
