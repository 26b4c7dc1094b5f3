use crate::error::InputError;

/// Answers to the questions a run asks the operator.
///
/// Each method is called at most once per run, in the order declared here.
pub trait InputSource {
    /// User the remote transport logs in as.
    fn username(&mut self) -> Result<String, InputError>;

    /// Raw answer to "auto-discover LoadBalancer IPs?" (`yes` / `no`).
    fn selection(&mut self) -> Result<String, InputError>;

    /// Raw comma-separated list of addresses to probe.
    fn candidates(&mut self) -> Result<String, InputError>;
}
