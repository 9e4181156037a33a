//! Restoration to baseline: every spliced run collapses back into the
//! single text node it replaced, and the fragments are discarded.

use pagesearch_dom::{HostDocument, NodeId};
use tracing::debug;

use super::{Highlighter, SplicedRun};

impl Highlighter {
    /// Remove all highlighting and reset match state. Safe to call when
    /// nothing is highlighted.
    pub fn clear<D: HostDocument + ?Sized>(&mut self, doc: &mut D) {
        if self.runs.is_empty() && self.matches.is_empty() {
            self.cursor = None;
            return;
        }

        let runs = std::mem::take(&mut self.runs);
        let restored = runs.len();
        for run in runs {
            restore_run(doc, run);
        }

        self.matches.clear();
        self.cursor = None;
        debug!(segments = restored, "highlights cleared");
    }
}

fn restore_run<D: HostDocument + ?Sized>(doc: &mut D, run: SplicedRun) {
    let attached: Vec<NodeId> = run
        .fragments
        .iter()
        .copied()
        .filter(|&f| doc.parent(f) == Some(run.parent))
        .collect();

    if !attached.is_empty()
        && attached.len() == run.fragments.len()
        && is_contiguous(doc, run.parent, &attached)
    {
        let original = reusable_original(doc, &run);
        doc.replace_with(attached[0], &[original]);
        for &fragment in &attached {
            doc.remove(fragment);
        }
        return;
    }

    // The run was disturbed by someone else. Unwrap every mark we still
    // own wherever it now lives, drop our detached leftovers, and let
    // normalization merge the neighbours.
    let mut touched = vec![run.parent];
    for &fragment in &run.fragments {
        if !doc.contains(fragment) {
            continue;
        }
        let parent = doc.parent(fragment);
        let is_mark = doc.tag_name(fragment) == Some("mark");
        match parent {
            Some(parent) if is_mark => {
                let content = doc.text_content(fragment);
                let text = doc.create_text(&content);
                doc.replace_with(fragment, &[text]);
                doc.remove(fragment);
                if !touched.contains(&parent) {
                    touched.push(parent);
                }
            }
            Some(_) => {}
            None => doc.remove(fragment),
        }
    }
    if doc.parent(run.original_node).is_none() {
        doc.remove(run.original_node);
    }
    for parent in touched {
        doc.normalize(parent);
    }
}

/// The text node the run replaced, reset to its original text, or a fresh
/// one if that node is gone or has been reattached elsewhere.
fn reusable_original<D: HostDocument + ?Sized>(doc: &mut D, run: &SplicedRun) -> NodeId {
    let node = run.original_node;
    if doc.contains(node) && doc.parent(node).is_none() && doc.text(node).is_some() {
        doc.set_text_content(node, &run.original);
        return node;
    }
    doc.create_text(&run.original)
}

/// True if `nodes` sit next to each other, in order, under `parent`.
fn is_contiguous<D: HostDocument + ?Sized>(doc: &D, parent: NodeId, nodes: &[NodeId]) -> bool {
    let children = doc.children(parent);
    let Some(start) = children.iter().position(|&c| c == nodes[0]) else {
        return false;
    };
    children.get(start..start + nodes.len()) == Some(nodes)
}
