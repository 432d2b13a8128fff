use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentTreeError {
    /// A point access past the end of the sequence.
    IndexOutOfBounds { index: usize, len: usize },
    /// A query whose bounds are reversed or reach past the end of the sequence.
    InvalidRange { l: usize, r: usize, len: usize },
    UnknownOperation(String),
}

pub type Result<T> = std::result::Result<T, SegmentTreeError>;

impl fmt::Display for SegmentTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentTreeError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} is out of bounds for length {}", index, len)
            }
            SegmentTreeError::InvalidRange { l, r, len } => {
                write!(f, "range [{}, {}] is not valid for length {}", l, r, len)
            }
            SegmentTreeError::UnknownOperation(name) => {
                write!(f, "unknown segment operation `{}`, expected sum, min or max", name)
            }
        }
    }
}

impl std::error::Error for SegmentTreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            SegmentTreeError::IndexOutOfBounds { index: 5, len: 5 }.to_string(),
            "index 5 is out of bounds for length 5"
        );
        assert_eq!(
            SegmentTreeError::InvalidRange { l: 3, r: 1, len: 4 }.to_string(),
            "range [3, 1] is not valid for length 4"
        );
        assert_eq!(
            SegmentTreeError::UnknownOperation("avg".into()).to_string(),
            "unknown segment operation `avg`, expected sum, min or max"
        );
    }
}
