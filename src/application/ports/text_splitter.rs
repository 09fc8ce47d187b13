/// Splits a text into ordered segments sized for one vendor call each.
pub trait TextSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}
