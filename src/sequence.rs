//! Ordered result of one analysis run.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::classifier::{Category, ClassifiedToken};

/// Classified tokens in document order, one per lexeme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<ClassifiedToken>,
}

/// Number of tokens per category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    /// Count for one category, zero if absent.
    pub fn get(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}

impl TokenSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        TokenSequence { tokens: Vec::new() }
    }

    /// Append a token.
    pub fn push(&mut self, token: ClassifiedToken) {
        self.tokens.push(token);
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Borrow the tokens as a slice.
    pub fn tokens(&self) -> &[ClassifiedToken] {
        &self.tokens
    }

    /// Iterate over the tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedToken> {
        self.tokens.iter()
    }

    /// Tokens of one category, in order.
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &ClassifiedToken> {
        self.tokens.iter().filter(move |t| t.category == category)
    }

    /// Tally tokens per category.
    pub fn counts(&self) -> CategoryCounts {
        let mut by_category = BTreeMap::new();
        for token in &self.tokens {
            *by_category.entry(token.category).or_insert(0) += 1;
        }
        CategoryCounts {
            total: self.tokens.len(),
            by_category,
        }
    }

    /// Consume the sequence and return the tokens.
    pub fn into_vec(self) -> Vec<ClassifiedToken> {
        self.tokens
    }
}

impl From<Vec<ClassifiedToken>> for TokenSequence {
    fn from(tokens: Vec<ClassifiedToken>) -> Self {
        TokenSequence { tokens }
    }
}

impl FromIterator<ClassifiedToken> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = ClassifiedToken>>(iter: I) -> Self {
        TokenSequence {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenSequence {
    type Item = ClassifiedToken;
    type IntoIter = std::vec::IntoIter<ClassifiedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a ClassifiedToken;
    type IntoIter = std::slice::Iter<'a, ClassifiedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenSequence {
    type Output = ClassifiedToken;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}
