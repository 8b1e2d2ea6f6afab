use crate::errors::ConciergeResult;

/// Text generation backend used to polish raw tool output.
pub trait ILanguageModel: Send + Sync {
    fn generate(&self, prompt: &str) -> ConciergeResult<String>;

    fn name(&self) -> &str;

    fn is_available(&self) -> bool {
        true
    }
}

/// Translates user input to English and answers back into the user's language.
pub trait ILanguageNormalizer: Send + Sync {
    /// Returns the English text and the detected language code.
    fn normalize(&self, text: &str) -> ConciergeResult<(String, String)>;

    fn localize(&self, text: &str, language: &str) -> ConciergeResult<String>;
}
