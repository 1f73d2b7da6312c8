//! Ordered, duplicate-free list of the PDF files queued for merging.
//!
//! The order of the list is the merge order. The list also tracks which
//! entries are selected, the way a list box does: several entries may be
//! selected at once, and the lowest selected index is the *primary*
//! selection that the move commands act on.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// What happened to each candidate passed to [`FileList::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Paths appended to the list, in the order they were appended.
    pub added: Vec<PathBuf>,

    /// Paths skipped because the list already contained them.
    pub duplicates: Vec<PathBuf>,

    /// Paths skipped because they do not name an existing file.
    pub missing: Vec<PathBuf>,
}

impl AddOutcome {
    /// True if nothing was appended.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
    }
}

/// The merge queue.
#[derive(Debug, Clone, Default)]
pub struct FileList {
    paths: Vec<PathBuf>,
    selected: BTreeSet<usize>,
}

impl FileList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every candidate that exists as a file and is not already
    /// queued, preserving the candidates' order.
    ///
    /// Existence is checked now, at add-time; files that disappear later
    /// are reported by the merge instead.
    pub fn add<I, P>(&mut self, candidates: I) -> AddOutcome
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut outcome = AddOutcome::default();

        for candidate in candidates {
            let path = candidate.into();

            if !path.is_file() {
                outcome.missing.push(path);
            } else if self.contains(&path) {
                outcome.duplicates.push(path);
            } else {
                self.paths.push(path.clone());
                outcome.added.push(path);
            }
        }

        outcome
    }

    /// Remove every selected entry. Remaining entries keep their relative
    /// order and the selection is cleared.
    ///
    /// Returns the removed paths; empty when nothing was selected.
    pub fn remove_selected(&mut self) -> Vec<PathBuf> {
        if self.selected.is_empty() {
            return Vec::new();
        }

        let selected = std::mem::take(&mut self.selected);
        let mut removed = Vec::with_capacity(selected.len());
        let mut kept = Vec::with_capacity(self.paths.len() - selected.len());

        for (index, path) in self.paths.drain(..).enumerate() {
            if selected.contains(&index) {
                removed.push(path);
            } else {
                kept.push(path);
            }
        }

        self.paths = kept;
        removed
    }

    /// Swap the primary selection with its predecessor.
    ///
    /// Returns false (and changes nothing) when nothing is selected or the
    /// first entry is selected. The selection follows the moved entry.
    pub fn move_up(&mut self) -> bool {
        match self.selected_index() {
            Some(index) if index > 0 => {
                self.paths.swap(index, index - 1);
                self.select_only(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Swap the primary selection with its successor.
    ///
    /// Returns false (and changes nothing) when nothing is selected or the
    /// last entry is selected. The selection follows the moved entry.
    pub fn move_down(&mut self) -> bool {
        match self.selected_index() {
            Some(index) if index + 1 < self.paths.len() => {
                self.paths.swap(index, index + 1);
                self.select_only(index + 1);
                true
            }
            _ => false,
        }
    }

    /// Make `index` the only selected entry. Out-of-range indices clear
    /// the selection and return false.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.paths.len() {
            self.selected.clear();
            return false;
        }
        self.select_only(index);
        true
    }

    /// Add `index` to the selection. Out-of-range indices are ignored.
    pub fn extend_selection(&mut self, index: usize) -> bool {
        if index >= self.paths.len() {
            return false;
        }
        self.selected.insert(index);
        true
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// The primary (lowest) selected index.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.first().copied()
    }

    /// Whether the entry at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// The selected paths, in list order.
    pub fn selected_paths(&self) -> Vec<&Path> {
        self.selected
            .iter()
            .filter_map(|&index| self.paths.get(index))
            .map(PathBuf::as_path)
            .collect()
    }

    /// The queued paths in merge order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Whether `path` is already queued.
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|queued| queued == path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn select_only(&mut self, index: usize) {
        self.selected.clear();
        self.selected.insert(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"%PDF-1.4\n").unwrap();
        path
    }

    fn list_of(dir: &TempDir, names: &[&str]) -> (FileList, Vec<PathBuf>) {
        let paths: Vec<PathBuf> = names.iter().map(|name| touch(dir, name)).collect();
        let mut list = FileList::new();
        list.add(paths.clone());
        (list, paths)
    }

    #[test]
    fn test_add_preserves_selection_order() {
        let dir = TempDir::new().unwrap();
        let (list, paths) = list_of(&dir, &["c.pdf", "a.pdf", "b.pdf"]);

        assert_eq!(list.paths(), paths.as_slice());
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let dir = TempDir::new().unwrap();
        let (mut list, paths) = list_of(&dir, &["a.pdf", "b.pdf"]);

        let outcome = list.add([paths[0].clone()]);

        assert_eq!(list.len(), 2);
        assert!(outcome.is_empty());
        assert_eq!(outcome.duplicates, vec![paths[0].clone()]);
    }

    #[test]
    fn test_add_duplicate_within_one_batch() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "a.pdf");
        let mut list = FileList::new();

        let outcome = list.add([a.clone(), a.clone()]);

        assert_eq!(list.paths(), &[a.clone()]);
        assert_eq!(outcome.duplicates, vec![a]);
    }

    #[test]
    fn test_add_filters_missing_files() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "a.pdf");
        let ghost = dir.path().join("ghost.pdf");
        let mut list = FileList::new();

        let outcome = list.add([ghost.clone(), a.clone()]);

        assert_eq!(list.paths(), &[a]);
        assert_eq!(outcome.missing, vec![ghost.clone()]);
        assert!(!list.contains(&ghost));
    }

    #[test]
    fn test_add_rejects_directories() {
        let dir = TempDir::new().unwrap();
        let mut list = FileList::new();

        let outcome = list.add([dir.path()]);

        assert!(list.is_empty());
        assert_eq!(outcome.missing.len(), 1);
    }

    #[test]
    fn test_remove_selected_keeps_relative_order() {
        let dir = TempDir::new().unwrap();
        let (mut list, paths) = list_of(&dir, &["a.pdf", "b.pdf", "c.pdf", "d.pdf", "e.pdf"]);
        list.select(1);
        list.extend_selection(3);

        let removed = list.remove_selected();

        assert_eq!(removed, vec![paths[1].clone(), paths[3].clone()]);
        assert_eq!(
            list.paths(),
            &[paths[0].clone(), paths[2].clone(), paths[4].clone()]
        );
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn test_remove_without_selection_is_noop() {
        let dir = TempDir::new().unwrap();
        let (mut list, paths) = list_of(&dir, &["a.pdf", "b.pdf"]);

        assert!(list.remove_selected().is_empty());
        assert_eq!(list.paths(), paths.as_slice());
    }

    #[test]
    fn test_move_up_swaps_and_selection_follows() {
        let dir = TempDir::new().unwrap();
        let (mut list, paths) = list_of(&dir, &["a.pdf", "b.pdf", "c.pdf"]);
        list.select(2);

        assert!(list.move_up());
        assert_eq!(
            list.paths(),
            &[paths[0].clone(), paths[2].clone(), paths[1].clone()]
        );
        assert_eq!(list.selected_index(), Some(1));
    }

    #[test]
    fn test_move_down_swaps_and_selection_follows() {
        let dir = TempDir::new().unwrap();
        let (mut list, paths) = list_of(&dir, &["a.pdf", "b.pdf", "c.pdf"]);
        list.select(0);

        assert!(list.move_down());
        assert_eq!(
            list.paths(),
            &[paths[1].clone(), paths[0].clone(), paths[2].clone()]
        );
        assert_eq!(list.selected_index(), Some(1));
    }

    #[rstest]
    #[case::up_on_first(Some(0), true)]
    #[case::down_on_last(Some(2), false)]
    #[case::up_without_selection(None, true)]
    #[case::down_without_selection(None, false)]
    fn test_move_at_boundary_is_noop(#[case] selected: Option<usize>, #[case] up: bool) {
        let dir = TempDir::new().unwrap();
        let (mut list, paths) = list_of(&dir, &["a.pdf", "b.pdf", "c.pdf"]);
        if let Some(index) = selected {
            list.select(index);
        }

        let moved = if up { list.move_up() } else { list.move_down() };

        assert!(!moved);
        assert_eq!(list.paths(), paths.as_slice());
        assert_eq!(list.selected_index(), selected);
    }

    #[test]
    fn test_move_uses_lowest_selected_index() {
        let dir = TempDir::new().unwrap();
        let (mut list, paths) = list_of(&dir, &["a.pdf", "b.pdf", "c.pdf"]);
        list.select(2);
        list.extend_selection(1);

        assert!(list.move_up());
        assert_eq!(
            list.paths(),
            &[paths[1].clone(), paths[0].clone(), paths[2].clone()]
        );
        assert_eq!(list.selected_paths(), vec![paths[1].as_path()]);
    }

    #[test]
    fn test_select_out_of_range_clears_selection() {
        let dir = TempDir::new().unwrap();
        let (mut list, _) = list_of(&dir, &["a.pdf"]);
        list.select(0);

        assert!(!list.select(5));
        assert_eq!(list.selected_index(), None);
        assert!(!list.extend_selection(5));
    }
}
