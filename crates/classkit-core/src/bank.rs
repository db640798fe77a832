//! Question authoring and process-wide question identifiers.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::model::Question;

/// Process-wide question id allocator.
///
/// Clones share the underlying counter, so every bank built from clones of
/// one `QuestionIds` mints strictly increasing, non-overlapping ids. Ids
/// start at 1 and are never reused; there is no reset. The increment is
/// atomic, which is all the thread safety this system promises.
#[derive(Debug, Clone)]
pub struct QuestionIds {
    next: Arc<AtomicU32>,
}

impl QuestionIds {
    pub fn new() -> Self {
        Self {
            next: Arc::new(AtomicU32::new(1)),
        }
    }

    fn allocate(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for QuestionIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Mints [`Question`]s with ids drawn from a shared [`QuestionIds`].
///
/// The bank holds no question storage and offers no delete: once minted, a
/// question lives wherever quizzes carry it, so there is no
/// dangling-reference policy to enforce.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    ids: QuestionIds,
}

impl QuestionBank {
    pub fn new(ids: QuestionIds) -> Self {
        Self { ids }
    }

    /// Mint a question with the next process-wide id.
    ///
    /// Input is accepted as-is: no check that `options` is non-empty or
    /// that `correct_answer` appears among them.
    pub fn create(&self, text: &str, options: Vec<String>, correct_answer: &str) -> Question {
        Question::new(self.ids.allocate(), text, options, correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_from_one() {
        let bank = QuestionBank::new(QuestionIds::new());
        let a = bank.create("a", vec![], "");
        let b = bank.create("b", vec![], "");
        let c = bank.create("c", vec![], "");
        assert_eq!((a.id(), b.id(), c.id()), (1, 2, 3));
    }

    #[test]
    fn banks_sharing_an_allocator_never_overlap() {
        let ids = QuestionIds::new();
        let first = QuestionBank::new(ids.clone());
        let second = QuestionBank::new(ids);

        let a = first.create("a", vec![], "");
        let b = second.create("b", vec![], "");
        let c = first.create("c", vec![], "");
        assert_eq!((a.id(), b.id(), c.id()), (1, 2, 3));
    }

    #[test]
    fn independent_allocators_restart_at_one() {
        let first = QuestionBank::new(QuestionIds::new());
        let second = QuestionBank::new(QuestionIds::new());
        assert_eq!(first.create("a", vec![], "").id(), 1);
        assert_eq!(second.create("b", vec![], "").id(), 1);
    }
}
