//! FAQ accordion state

/// One question/answer pair
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Questions shown in the FAQ accordion
pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "What is this application?",
        answer: "A small showcase of interactive terminal widgets: an event log, \
                 a counter, this FAQ, and a sign-up form with live validation.",
    },
    FaqItem {
        question: "How do I move between panels?",
        answer: "Use the left and right arrow keys, or click a tab in the bar at the top.",
    },
    FaqItem {
        question: "Why is the submit button disabled?",
        answer: "Every required field has to hold a valid value first. \
                 Phone is optional and never blocks submission.",
    },
    FaqItem {
        question: "Is any of my data stored?",
        answer: "No. Form values live in memory only and are cleared a few seconds \
                 after a successful submission.",
    },
    FaqItem {
        question: "Can I change the colors?",
        answer: "Press Ctrl+T to switch between the dark and light themes at any time.",
    },
];

/// Accordion state: a cursor plus at most one open item
#[derive(Debug, Default)]
pub struct FaqState {
    cursor: usize,
    open: Option<usize>,
}

impl FaqState {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < FAQ_ITEMS.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Toggle the item under the cursor
    pub fn toggle_selected(&mut self) {
        self.toggle_at(self.cursor);
    }

    /// Toggle a specific item and move the cursor to it; opening an item
    /// closes whichever one was open before
    pub fn toggle_at(&mut self, index: usize) {
        if index >= FAQ_ITEMS.len() {
            return;
        }
        self.cursor = index;
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}
