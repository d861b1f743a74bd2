use crate::model::Record;

/// Page-at-a-time cursor over a snapshot of records.
///
/// The records are copied when the paginator is built, so changes to the
/// book afterwards are not observed. It is single pass: once exhausted it
/// keeps returning `None`.
#[derive(Debug, Clone)]
pub struct Paginator {
    records: Vec<Record>,
    page_size: usize,
    position: usize,
}

impl Paginator {
    /// A `page_size` of zero is treated as one.
    pub fn new(records: Vec<Record>, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            position: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pages not yet yielded.
    pub fn remaining_pages(&self) -> usize {
        let left = self.records.len() - self.position;
        left.div_ceil(self.page_size)
    }
}

impl Iterator for Paginator {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.records.len() {
            return None;
        }
        let end = (self.position + self.page_size).min(self.records.len());
        let page = self.records[self.position..end].to_vec();
        self.position = end;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining_pages();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Paginator {}

impl std::iter::FusedIterator for Paginator {}
