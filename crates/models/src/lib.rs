use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hosting backends an upload can be sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "catbox")]
    Catbox,
    #[serde(rename = "litterbox")]
    Litterbox,
    #[serde(rename = "pixeldrain")]
    Pixeldrain,
    #[serde(rename = "0x0")]
    ZeroX0,
    #[serde(rename = "transfer.sh")]
    TransferSh,
}

/// Order tried by the `auto` mode when the configuration does not override it
pub const DEFAULT_AUTO_ORDER: [ProviderKind; 5] = [
    ProviderKind::Catbox,
    ProviderKind::Litterbox,
    ProviderKind::Pixeldrain,
    ProviderKind::ZeroX0,
    ProviderKind::TransferSh,
];

/// Provider used when the requested mode name is not recognized
pub const FALLBACK_PROVIDER: ProviderKind = ProviderKind::Catbox;

/// Expiry hints litterbox understands; the empty string means "no explicit expiry"
pub const EXPIRY_CHOICES: [&str; 5] = ["1h", "12h", "24h", "72h", ""];

/// Expiry used when no hint is given or the hint is not an allowed choice
pub const DEFAULT_EXPIRY: &str = "1h";

impl ProviderKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Catbox => "catbox",
            ProviderKind::Litterbox => "litterbox",
            ProviderKind::Pixeldrain => "pixeldrain",
            ProviderKind::ZeroX0 => "0x0",
            ProviderKind::TransferSh => "transfer.sh",
        }
    }

    /// Case-insensitive lookup by provider name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        DEFAULT_AUTO_ORDER.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-selected strategy: a single provider or the ordered fallback sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderMode {
    #[default]
    Auto,
    Single(ProviderKind),
}

impl ProviderMode {
    /// Parses a mode name, returning `None` for names that match nothing
    pub fn parse(name: &str) -> Option<Self> {
        if name.trim().eq_ignore_ascii_case("auto") {
            return Some(ProviderMode::Auto);
        }
        ProviderKind::from_name(name).map(ProviderMode::Single)
    }

    /// Parses a mode name; unknown names map to the single fallback provider,
    /// not to the `auto` sequence.
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or(ProviderMode::Single(FALLBACK_PROVIDER))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProviderMode::Auto => "auto",
            ProviderMode::Single(kind) => kind.name(),
        }
    }

    /// Every selectable mode name, `auto` first
    pub fn all_names() -> Vec<&'static str> {
        std::iter::once("auto")
            .chain(DEFAULT_AUTO_ORDER.iter().map(|kind| kind.name()))
            .collect()
    }
}

impl fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single upload call: what to send and where to try sending it.
///
/// The payload is reference-counted, so every provider attempt sees the
/// same immutable bytes.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    filename: String,
    payload: Bytes,
    mode: String,
    hint: Option<String>,
}

impl UploadRequest {
    pub fn new(filename: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            payload: payload.into(),
            mode: ProviderMode::Auto.name().to_string(),
            hint: None,
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Provider-specific hint, currently only the litterbox expiry
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn size(&self) -> usize {
        self.payload.len()
    }
}
