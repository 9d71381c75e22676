/// Scans messages for safety-critical phrases.
///
/// Returns matches in the fixed list's declaration order, not the order the
/// phrases happen to appear in the text; downstream reporting relies on that
/// stable ordering.
#[derive(Debug, Clone)]
pub struct UrgentScanner {
    phrases: Vec<String>,
}

impl UrgentScanner {
    pub fn new(phrases: &[String]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// The ordered subset of critical phrases contained in the message
    pub fn scan(&self, text: &str) -> Vec<&str> {
        let cleaned = text.to_lowercase();
        let cleaned = cleaned.trim();
        self.phrases
            .iter()
            .filter(|p| cleaned.contains(p.as_str()))
            .map(|p| p.as_str())
            .collect()
    }
}
