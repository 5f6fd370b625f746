//! Shared narrative state
//!
//! The fixed set of observable cells a story's view components read and
//! write while the reader scrolls: where the reader is, what the current
//! chapter holds, which side panels are open, and the chapter's glossary,
//! asides, and references.
//!
//! Chapter, panel, aside, and reference payloads are author-supplied JSON
//! content; they stay as [`serde_json`] values so this crate imposes no
//! schema on story files.
//!
//! No cell enforces consistency with any other. Callers keep related cells
//! in agreement themselves, e.g. writing [`chapter`](StoryState::chapter)
//! whenever [`chapter_index`](StoryState::chapter_index) moves.

use crate::store::Store;
use serde_json::{Map, Value};

/// The ten observable cells of a running story.
///
/// Created once by the embedding application and shared (via clones of the
/// individual [`Store`] handles) with every view component. Cells live for
/// the life of the state; none is destroyed individually.
pub struct StoryState {
    /// Position within the overall story.
    pub story_index: Store<usize>,
    /// Position within the chapter list.
    pub chapter_index: Store<usize>,
    /// Content of the current chapter.
    pub chapter: Store<Map<String, Value>>,
    /// Descriptor of the open primary panel, if any.
    pub panel1: Store<Option<Value>>,
    /// Active subsection within the primary panel, if any.
    pub panel1_active_subsection: Store<Option<usize>>,
    /// Set when a scroll to the active subsection is pending.
    pub scroll_to_subsection: Store<bool>,
    /// Descriptor of the open secondary panel, if any.
    pub panel2: Store<Option<Value>>,
    /// Glossary terms of the current chapter, in document order.
    pub terms: Store<Vec<Value>>,
    /// Asides keyed by id.
    pub asides: Store<Map<String, Value>>,
    /// References keyed by id.
    pub references: Store<Map<String, Value>>,
}

impl StoryState {
    /// Creates the cells at their start-of-story values: both indices at 0,
    /// panels closed, no pending scroll, and empty chapter content.
    pub fn new() -> Self {
        Self {
            story_index: Store::new(0),
            chapter_index: Store::new(0),
            chapter: Store::new(Map::new()),
            panel1: Store::new(None),
            panel1_active_subsection: Store::new(None),
            scroll_to_subsection: Store::new(false),
            panel2: Store::new(None),
            terms: Store::new(Vec::new()),
            asides: Store::new(Map::new()),
            references: Store::new(Map::new()),
        }
    }
}

impl Default for StoryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_values() {
        let state = StoryState::new();
        assert_eq!(state.story_index.get(), 0);
        assert_eq!(state.chapter_index.get(), 0);
        assert!(state.chapter.get().is_empty());
        assert_eq!(state.panel1.get(), None);
        assert_eq!(state.panel1_active_subsection.get(), None);
        assert!(!state.scroll_to_subsection.get());
        assert_eq!(state.panel2.get(), None);
        assert!(state.terms.get().is_empty());
        assert!(state.asides.get().is_empty());
        assert!(state.references.get().is_empty());
    }

    #[test]
    fn test_chapter_advance_flow() {
        let state = StoryState::new();
        let observed = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&observed);
        let _on_index = state
            .chapter_index
            .subscribe(move |i| log.borrow_mut().push(format!("index:{i}")));
        let log = Rc::clone(&observed);
        let _on_chapter = state.chapter.subscribe(move |c| {
            let title = c.get("title").and_then(Value::as_str).unwrap_or("");
            log.borrow_mut().push(format!("chapter:{title}"));
        });

        // The embedding app keeps index and content in agreement; the cells
        // themselves do not.
        state.chapter_index.update(|i| i + 1);
        let mut content = Map::new();
        content.insert("title".into(), json!("The Ocean Floor"));
        state.chapter.set(content);

        assert_eq!(
            *observed.borrow(),
            vec!["index:1".to_string(), "chapter:The Ocean Floor".to_string()]
        );
    }

    #[test]
    fn test_panel_open_close() {
        let state = StoryState::new();

        state.panel1.set(Some(json!({ "id": "methods" })));
        state.panel1_active_subsection.set(Some(2));
        state.scroll_to_subsection.set(true);

        assert_eq!(
            state.panel1.get().and_then(|p| p["id"].as_str().map(String::from)),
            Some("methods".to_string())
        );

        state.panel1.set(None);
        state.panel1_active_subsection.set(None);
        assert_eq!(state.panel1.get(), None);
        // Closing the panel does not clear the pending-scroll flag; callers own that.
        assert!(state.scroll_to_subsection.get());
    }

    #[test]
    fn test_keyed_collections() {
        let state = StoryState::new();

        state.terms.update(|mut terms| {
            terms.push(json!({ "term": "bathymetry" }));
            terms.push(json!({ "term": "abyssal plain" }));
            terms
        });
        state.asides.update(|mut asides| {
            asides.insert("a1".into(), json!({ "text": "See chapter 2." }));
            asides
        });

        assert_eq!(state.terms.get().len(), 2);
        assert!(state.asides.get().contains_key("a1"));
        assert!(state.references.get().is_empty());
    }
}
