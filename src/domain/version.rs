/// How much of the text after the first `-` is kept as the qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualifierMode {
    /// Only the text between the first and second `-`; anything after a second
    /// `-` is dropped. `1.0.0-rc-1` -> (`1.0.0`, `rc`).
    #[default]
    FirstSegment,
    /// Everything after the first `-`. `1.0.0-rc-1` -> (`1.0.0`, `rc-1`).
    Remainder,
}

/// A raw version split into its stable root and optional trailing qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVersion {
    pub root: String,
    pub qualifier: Option<String>,
}

impl RawVersion {
    /// Split `raw` on its first `-`.
    ///
    /// At most one split occurs. Surrounding whitespace is trimmed from both parts and
    /// an empty qualifier is reported as `None`. Any input is accepted, including "".
    ///
    /// # Example
    /// ```
    /// # use mkver::domain::{QualifierMode, RawVersion};
    /// let v = RawVersion::split("1.0.0-SNAPSHOT", QualifierMode::FirstSegment);
    /// assert_eq!(v.root, "1.0.0");
    /// assert_eq!(v.qualifier.as_deref(), Some("SNAPSHOT"));
    /// ```
    pub fn split(raw: &str, mode: QualifierMode) -> Self {
        let Some((root, rest)) = raw.split_once('-') else {
            return RawVersion {
                root: raw.trim().to_string(),
                qualifier: None,
            };
        };

        let qualifier = match mode {
            QualifierMode::FirstSegment => rest.split('-').next().unwrap_or_default(),
            QualifierMode::Remainder => rest,
        }
        .trim();

        RawVersion {
            root: root.trim().to_string(),
            qualifier: (!qualifier.is_empty()).then(|| qualifier.to_string()),
        }
    }
}
