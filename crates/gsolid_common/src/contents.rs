use std::borrow::Cow;

/// Module contents handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
  Bytes(Vec<u8>),
  Text(String),
}

impl Contents {
  pub fn as_bytes(&self) -> &[u8] {
    match self {
      Contents::Bytes(bytes) => bytes,
      Contents::Text(text) => text.as_bytes(),
    }
  }

  pub fn to_string_lossy(&self) -> Cow<'_, str> {
    match self {
      Contents::Bytes(bytes) => String::from_utf8_lossy(bytes),
      Contents::Text(text) => Cow::Borrowed(text),
    }
  }
}

impl From<String> for Contents {
  fn from(value: String) -> Self {
    Self::Text(value)
  }
}

impl From<Vec<u8>> for Contents {
  fn from(value: Vec<u8>) -> Self {
    Self::Bytes(value)
  }
}
