#[cfg(test)]
use mockall::automock;

/// Notifications from the monitor to the hosting application.
///
/// The renewal prompt is a request/response pair: the monitor opens it via
/// `renewal_prompt_opened` and the host answers by calling `renew()` or
/// `force_logout()` on the monitor.
#[cfg_attr(test, automock)]
pub trait SessionEvents: Send + Sync {
    fn renewal_prompt_opened(&self);
    fn renewal_prompt_closed(&self);
    /// The session was renewed; the host should replace any cached token.
    fn session_renewed(&self, token: &str);
    /// The session ended; the host should drop all authenticated state and
    /// return to a public view.
    fn session_ended(&self);
}
