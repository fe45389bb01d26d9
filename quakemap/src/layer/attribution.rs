//! Credits for the data shown by a layer.

/// Represents an attribution, typically used for citing sources or providing credit.
///
/// The text may contain HTML markup. If a URL is given, renderers link the whole text to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    text: String,
    url: Option<String>,
}

impl Attribution {
    /// Creates a new `Attribution` with the given text and optional URL.
    pub fn new(text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            text: text.into(),
            url,
        }
    }

    /// HTML fragment of the attribution.
    pub fn to_html(&self) -> String {
        match &self.url {
            Some(url) => format!("<a href=\"{url}\">{}</a>", self.text),
            None => self.text.clone(),
        }
    }
}
