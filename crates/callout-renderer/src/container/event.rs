//! Structural events emitted for container markers.

/// Which side of a container block an event marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Nesting {
    /// Opening marker (`::: details Summary`).
    Open = 1,
    /// Closing marker (`:::`).
    Close = -1,
}

impl Nesting {
    /// Numeric nesting sign: `1` for open, `-1` for close.
    #[must_use]
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

/// One opening or closing marker of a container block.
///
/// `info` is the raw text following the colons, e.g. `" details Click me"`
/// for `::: details Click me`. Handlers trim it themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockEvent {
    /// Whether this event opens or closes a block.
    pub nesting: Nesting,
    /// Raw trailing text of the marker line.
    pub info: String,
}

impl BlockEvent {
    /// Create an opening event.
    #[must_use]
    pub fn open(info: impl Into<String>) -> Self {
        Self {
            nesting: Nesting::Open,
            info: info.into(),
        }
    }

    /// Create a closing event.
    #[must_use]
    pub fn close(info: impl Into<String>) -> Self {
        Self {
            nesting: Nesting::Close,
            info: info.into(),
        }
    }

    /// Check if this event opens a block.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.nesting == Nesting::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting_values() {
        assert_eq!(Nesting::Open.as_i8(), 1);
        assert_eq!(Nesting::Close.as_i8(), -1);
    }

    #[test]
    fn test_open_event() {
        let event = BlockEvent::open("details Summary");
        assert!(event.is_open());
        assert_eq!(event.info, "details Summary");
    }

    #[test]
    fn test_close_event() {
        let event = BlockEvent::close("");
        assert!(!event.is_open());
        assert_eq!(event.nesting, Nesting::Close);
    }
}
