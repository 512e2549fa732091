//! FAQ and testimonial records

use serde::{Deserialize, Serialize};

/// Highest testimonial rating
pub const MAX_RATING: u8 = 5;

/// Frequently asked question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    /// Unique ID
    pub id: u32,
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
}

impl Faq {
    /// Create FAQ entry
    #[must_use]
    pub fn new(id: u32, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Customer testimonial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Unique ID
    pub id: u32,
    /// Quote
    pub text: String,
    /// Author display name
    pub author: String,
    /// Rating, 1..=5
    pub rating: u8,
}

impl Testimonial {
    /// Create testimonial
    #[must_use]
    pub fn new(id: u32, text: impl Into<String>, author: impl Into<String>, rating: u8) -> Self {
        Self {
            id,
            text: text.into(),
            author: author.into(),
            rating,
        }
    }

    /// Star string: filled stars for the rating, empty stars for the rest
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING);
        let mut out = "★".repeat(usize::from(filled));
        out.push_str(&"☆".repeat(usize::from(MAX_RATING - filled)));
        out
    }
}
