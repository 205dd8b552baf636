//! Human-readable rendering of nodes and trees.
//!
//! One line per node, children indented two spaces under their parent:
//!
//! ```text
//! * {project} Ship v1
//!   + {task}  [no estimate] Write parser
//!   + {task} Write docs
//!     - {subtask} Proofread
//! ```
//!
//! `*` marks the root, `+` a child with siblings, `-` an only child.
//! Data that would overrun the line width is cut and suffixed with `...`.

use std::fmt;

use tally_core::constants::OUTLINE_WIDTH;
use tally_core::Distribution;

use crate::node::NodeId;
use crate::tree::CostTree;

const INDENT: &str = "  ";
const ELLIPSIS: &str = "...";

impl CostTree {
    /// The node's own distribution as `(p10,p50,p90)`, rounded to whole
    /// units. Empty when the node has no distribution.
    pub fn format_distribution(&self, id: NodeId) -> String {
        let Some(dist) = self.node(id).distribution() else {
            return String::new();
        };
        let settings = self.numeric().bisection_settings();
        let [p10, p50, p90] = [0.10, 0.50, 0.90].map(|p| {
            dist.quantile_with(p, &settings)
                .map(|q| format!("{q:.0}"))
                .unwrap_or_default()
        });
        format!("({p10},{p50},{p90})")
    }

    /// Render the subtree rooted at `id`.
    pub fn outline(&self, id: NodeId) -> String {
        self.check_valid(id);
        let mut out = String::new();
        self.write_outline(id, "", &mut out);
        out
    }

    fn write_outline(&self, id: NodeId, prefix: &str, out: &mut String) {
        let node = self.node(id);
        let marker = match node.parent() {
            None => "* ",
            Some(parent) if self.children(parent).len() > 1 => "+ ",
            Some(_) => "- ",
        };

        let mut line = format!("{prefix}{marker}{{{}}} ", node.tag());
        if let Some(diagnostic) = node.diagnostic().filter(|d| !d.is_empty()) {
            line.push_str(&format!(" [{diagnostic}] "));
        }
        let room = OUTLINE_WIDTH.saturating_sub(line.chars().count());
        line.push_str(&truncate(node.data(), room));
        out.push_str(&line);
        out.push('\n');

        let child_prefix = format!("{prefix}{INDENT}");
        for &child in node.children() {
            self.write_outline(child, &child_prefix, out);
        }
    }
}

fn truncate(data: &str, room: usize) -> String {
    if data.chars().count() <= room {
        return data.to_string();
    }
    let keep = room.saturating_sub(ELLIPSIS.len());
    let mut cut: String = data.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

impl fmt::Display for CostTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outline(self.root()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_data_is_untouched() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("abcdefghij", 10), "abcdefghij");
    }

    #[test]
    fn long_data_is_cut_with_ellipsis() {
        assert_eq!(truncate("abcdefghijk", 10), "abcdefg...");
        assert_eq!(truncate("abcdefghijk", 10).chars().count(), 10);
    }

    #[test]
    fn no_room_leaves_only_ellipsis() {
        assert_eq!(truncate("abcdef", 2), "...");
    }
}
