//! Entry form buffers and focus.
//!
//! Holds raw text only. Nothing here validates; see [`crate::validate`].

use crate::validate::ReviewInput;

/// One of the four form inputs, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Title,
    Author,
    Rating,
    Comment,
}

impl Field {
    /// All fields in display and focus order.
    pub const ALL: [Field; 4] = [Field::Title, Field::Author, Field::Rating, Field::Comment];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Book Title",
            Field::Author => "Author",
            Field::Rating => "Rating 1-5",
            Field::Comment => "Comment",
        }
    }

    /// Next field, wrapping from Comment back to Title.
    pub fn next(self) -> Field {
        match self {
            Field::Title => Field::Author,
            Field::Author => Field::Rating,
            Field::Rating => Field::Comment,
            Field::Comment => Field::Title,
        }
    }

    /// Previous field, wrapping from Title to Comment.
    pub fn prev(self) -> Field {
        match self {
            Field::Title => Field::Comment,
            Field::Author => Field::Title,
            Field::Rating => Field::Author,
            Field::Comment => Field::Rating,
        }
    }
}

/// In-progress review as typed. Survives rejected saves unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub author: String,
    pub rating: String,
    pub comment: String,
    pub focus: Field,
}

impl EntryForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Rating => &self.rating,
            Field::Comment => &self.comment,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Rating => &mut self.rating,
            Field::Comment => &mut self.comment,
        }
    }

    /// Append a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Borrow the buffers as validator input.
    pub fn as_input(&self) -> ReviewInput<'_> {
        ReviewInput {
            title: &self.title,
            author: &self.author,
            rating: &self.rating,
            comment: &self.comment,
        }
    }
}
