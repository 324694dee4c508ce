use boca_common::{Alert, AlertChoice, BocaError};

/// The embedded browser surface, as the view controller drives it.
pub trait Surface {
    fn load_url(&mut self, url: &str) -> Result<(), BocaError>;

    /// Replace the document with static markup.
    fn load_html(&mut self, html: &str) -> Result<(), BocaError>;

    fn reload(&mut self) -> Result<(), BocaError>;

    fn go_back(&mut self) -> Result<(), BocaError>;

    fn evaluate_script(&mut self, script: &str) -> Result<(), BocaError>;
}

/// Presents blocking alerts and returns the user's choice.
pub trait Prompter {
    fn prompt(&mut self, alert: &Alert) -> AlertChoice;
}
