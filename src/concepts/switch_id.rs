use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A switch datapath id: 16 hex digits, stored in the canonical
/// colon-grouped lowercase form, e.g. `00:00:70:72:cf:d2:47:a6`.
///
/// Parsing accepts both the colon-grouped and the bare 16-digit form.
///
/// ```
/// use flowpath::concepts::switch_id::SwitchId;
///
/// let a: SwitchId = "00:00:70:72:CF:D2:47:A6".parse().unwrap();
/// let b: SwitchId = "00007072cfd247a6".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "00:00:70:72:cf:d2:47:a6");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SwitchId(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchIdError {
    #[error("switch id \"{0}\" is not a 16 hex digit datapath id")]
    MalformedDatapathId(String),
}

impl SwitchId {
    /// The canonical colon-grouped lowercase representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SwitchId {
    type Err = SwitchIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|c| *c != ':').collect();
        if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SwitchIdError::MalformedDatapathId(s.to_string()));
        }
        // colon placement must match the canonical grouping, if present
        if s.len() != 16 && s.len() != 23 {
            return Err(SwitchIdError::MalformedDatapathId(s.to_string()));
        }
        let lower = digits.to_ascii_lowercase();
        let grouped: Vec<&str> = (0..8).map(|i| &lower[i * 2..i * 2 + 2]).collect();
        Ok(SwitchId(grouped.join(":")))
    }
}

impl Display for SwitchId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
