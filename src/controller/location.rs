use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use url::Url;

use super::error::LayoutError;

/// Characters left alone by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_fragment(id: &str) -> String {
    utf8_percent_encode(id, COMPONENT).to_string()
}

/// Decoded, trimmed fragment content. Empty means nothing is addressed.
pub fn decode_fragment(fragment: &str) -> String {
    percent_decode_str(fragment)
        .decode_utf8_lossy()
        .trim()
        .to_owned()
}

/// Addressable location of the view. Its fragment is the only persisted,
/// shareable piece of selection state.
#[derive(Clone, Debug)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Address of a named view, `thoughts://<view>/`.
    pub fn for_view(view: &str) -> Result<Self, LayoutError> {
        Ok(Self::new(Url::parse(&format!("thoughts://{view}/"))?))
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Raw (still encoded) fragment, empty when absent.
    pub fn fragment(&self) -> &str {
        self.url.fragment().unwrap_or_default()
    }

    pub fn selected_id(&self) -> String {
        decode_fragment(self.fragment())
    }

    /// Replaces the fragment with an already encoded value, like
    /// `location.replace('#...')`. Returns whether the fragment changed.
    pub fn replace_fragment(&mut self, fragment: &str) -> bool {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let before = self.fragment().to_owned();
        self.url.set_fragment(Some(fragment));
        self.fragment() != before
    }

    pub fn select(&mut self, id: &str) -> bool {
        self.replace_fragment(&encode_fragment(id))
    }

    pub fn clear(&mut self) -> bool {
        self.replace_fragment("")
    }
}
