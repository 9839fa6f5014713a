//! Chunking: consecutive, order-preserving slices of at most `batch_size` files.

use std::path::PathBuf;

/// Number of batches needed for `total` files: ceil(total / batch_size). `batch_size` must be > 0.
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    total.div_ceil(batch_size)
}

/// One outgoing group of files. `index` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    pub index: usize,
    pub total: usize,
    pub files: &'a [PathBuf],
}

impl Batch<'_> {
    pub fn caption(&self) -> String {
        format!("Uploading batch {}/{}", self.index, self.total)
    }

    pub fn is_last(&self) -> bool {
        self.index == self.total
    }
}

/// Splits `files` into batches; the last one may be shorter. `batch_size` must be > 0.
pub fn plan_batches(files: &[PathBuf], batch_size: usize) -> Vec<Batch<'_>> {
    let total = batch_count(files.len(), batch_size);
    files
        .chunks(batch_size)
        .enumerate()
        .map(|(i, files)| Batch {
            index: i + 1,
            total,
            files,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("{:03}.png", i))).collect()
    }

    #[test]
    fn test_batch_count_is_ceiling() {
        assert_eq!(batch_count(0, 10), 0);
        assert_eq!(batch_count(1, 10), 1);
        assert_eq!(batch_count(10, 10), 1);
        assert_eq!(batch_count(11, 10), 2);
        assert_eq!(batch_count(25, 4), 7);
    }

    #[test]
    fn test_plan_batches_preserves_order_and_covers_every_file_once() {
        for n in 0..40 {
            for size in 1..12 {
                let all = files(n);
                let batches = plan_batches(&all, size);

                assert_eq!(batches.len(), batch_count(n, size));
                assert!(batches.iter().all(|b| !b.files.is_empty() && b.files.len() <= size));

                let flattened: Vec<_> = batches.iter().flat_map(|b| b.files.iter().cloned()).collect();
                assert_eq!(flattened, all);
            }
        }
    }

    #[test]
    fn test_plan_batches_last_batch_shorter() {
        let all = files(11);
        let batches = plan_batches(&all, 10);

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].files.len(), 10);
        assert_eq!(batches[1].files.len(), 1);
        assert_eq!(batches[1].caption(), "Uploading batch 2/2");
        assert!(batches[1].is_last());
        assert!(!batches[0].is_last());
    }
}
