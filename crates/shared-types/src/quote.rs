use serde::Serialize;

/// A quote shown in the dashboard carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

/// Quotes rotated through on the dashboard, in display order.
pub const INSPIRATIONAL_QUOTES: &[Quote] = &[
    Quote {
        text: "Your health is an investment, not an expense.",
        author: "Unknown",
    },
    Quote {
        text: "The greatest wealth is health.",
        author: "Virgil",
    },
    Quote {
        text: "Take care of your body. It's the only place you have to live.",
        author: "Jim Rohn",
    },
    Quote {
        text: "Health is not valued until sickness comes.",
        author: "Thomas Fuller",
    },
    Quote {
        text: "Prevention is better than cure.",
        author: "Desiderius Erasmus",
    },
];

/// Default time between carousel advances.
pub const DEFAULT_QUOTE_INTERVAL_MS: u64 = 5_000;

/// Index into a fixed, non-empty list that wraps around on every advance.
///
/// The index is always in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Start at the first item. A zero length is treated as a single item so
    /// the index stays valid.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    /// Carousel over [`INSPIRATIONAL_QUOTES`].
    pub fn for_quotes() -> Self {
        Self::new(INSPIRATIONAL_QUOTES.len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Move to the next item, wrapping to the first after the last.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// The quote at the current index, for carousels built with
    /// [`Carousel::for_quotes`].
    pub fn current(&self) -> Quote {
        INSPIRATIONAL_QUOTES[self.index % INSPIRATIONAL_QUOTES.len()]
    }
}

/// Which item a carousel started at mount shows after `elapsed_ms`.
///
/// Equals `floor(elapsed_ms / interval_ms) mod len`. A zero interval or
/// length yields 0.
pub fn quote_index_at(elapsed_ms: u64, interval_ms: u64, len: usize) -> usize {
    if interval_ms == 0 || len == 0 {
        return 0;
    }
    ((elapsed_ms / interval_ms) % len as u64) as usize
}
