//! Bracket structuring: turns flat text into a paren tree.
//!
//! Whitespace is insignificant in type expressions, so it is dropped first.
//! Every remaining character keeps its byte offset in the original text so
//! later stages can still report accurate spans.

use tracing::trace;

use super::token::Span;
use crate::error::{ParseError, Result};

/// A character of the input together with its byte offset.
pub type Located = (usize, char);

/// A run of consecutive non-parenthesis characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub chars: Vec<Located>,
}

impl Run {
    pub fn text(&self) -> String {
        self.chars.iter().map(|&(_, c)| c).collect()
    }

    pub fn span(&self) -> Span {
        located_span(&self.chars).unwrap_or_default()
    }
}

/// A node of the paren tree: either a leaf or a parenthesized group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParenNode<L> {
    Leaf(L),
    Group(ParenGroup<L>),
}

/// An ordered sequence of nodes. The span of a parenthesized group covers
/// both parentheses; the top-level group spans the whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenGroup<L> {
    pub nodes: Vec<ParenNode<L>>,
    pub span: Span,
}

/// Drop all whitespace, remembering where each kept character came from.
/// `base` is added to every offset, for text that is a slice of a larger input.
pub fn strip_whitespace(source: &str, base: usize) -> Vec<Located> {
    source
        .char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(pos, c)| (base + pos, c))
        .collect()
}

/// Span from the first to the last located character, if there are any.
pub fn located_span(chars: &[Located]) -> Option<Span> {
    let &(start, _) = chars.first()?;
    let &(last, c) = chars.last()?;
    Some(Span::new(start, last + c.len_utf8()))
}

/// Structure `chars` into nested groups.
///
/// Open groups live on an explicit stack, so nesting depth is unbounded.
/// `span` becomes the span of the returned top-level group.
pub fn build_paren_tree(chars: &[Located], span: Span) -> Result<ParenGroup<Run>> {
    // (offset of the opening paren, the enclosing group's nodes so far)
    let mut open: Vec<(usize, Vec<ParenNode<Run>>)> = Vec::new();
    let mut current: Vec<ParenNode<Run>> = Vec::new();
    let mut run: Vec<Located> = Vec::new();
    let mut max_depth = 0;

    for &(pos, c) in chars {
        match c {
            '(' => {
                flush_run(&mut run, &mut current);
                open.push((pos, std::mem::take(&mut current)));
                max_depth = max_depth.max(open.len());
            }
            ')' => {
                flush_run(&mut run, &mut current);
                let (start, mut parent) = open.pop().ok_or(ParseError::UnmatchedCloseParen {
                    span: Span::char_at(pos, c),
                })?;
                parent.push(ParenNode::Group(ParenGroup {
                    nodes: std::mem::take(&mut current),
                    span: Span::new(start, pos + 1),
                }));
                current = parent;
            }
            _ => run.push((pos, c)),
        }
    }

    if let Some((start, _)) = open.pop() {
        return Err(ParseError::UnclosedParen {
            span: Span::new(start, start + 1),
        });
    }
    flush_run(&mut run, &mut current);

    trace!(max_depth, nodes = current.len(), "built paren tree");
    Ok(ParenGroup {
        nodes: current,
        span,
    })
}

fn flush_run(run: &mut Vec<Located>, nodes: &mut Vec<ParenNode<Run>>) {
    if !run.is_empty() {
        nodes.push(ParenNode::Leaf(Run {
            chars: std::mem::take(run),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Render a paren tree compactly: leaves as text, groups as `[..]`.
    fn shape(group: &ParenGroup<Run>) -> String {
        let parts: Vec<String> = group
            .nodes
            .iter()
            .map(|node| match node {
                ParenNode::Leaf(run) => run.text(),
                ParenNode::Group(inner) => format!("[{}]", shape(inner)),
            })
            .collect();
        parts.join(" ")
    }

    fn tree(source: &str) -> Result<ParenGroup<Run>> {
        let chars = strip_whitespace(source, 0);
        build_paren_tree(&chars, Span::new(0, source.len()))
    }

    #[test]
    fn test_strip_whitespace_keeps_offsets() {
        let chars = strip_whitespace(" a\t b", 10);
        assert_eq!(chars, vec![(11, 'a'), (14, 'b')]);
    }

    #[test]
    fn test_flat_text_is_single_leaf() {
        let t = tree("Int -> Bool").unwrap();
        assert_eq!(shape(&t), "Int->Bool");
    }

    #[test]
    fn test_groups_nest() {
        let t = tree("(a -> b) -> c").unwrap();
        assert_eq!(shape(&t), "[a->b] ->c");
    }

    #[test]
    fn test_deep_nesting_returns_to_correct_level() {
        // Three levels deep; closing must pop back through every level.
        let t = tree("(((a) b) c) d").unwrap();
        assert_eq!(shape(&t), "[[[a] b] c] d");
    }

    #[test]
    fn test_group_span_covers_parens() {
        let t = tree("x (y)").unwrap();
        match &t.nodes[1] {
            ParenNode::Group(g) => assert_eq!(g.span, Span::new(2, 5)),
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_paren() {
        assert_eq!(
            tree("(Int -> (Bool)"),
            Err(ParseError::UnclosedParen {
                span: Span::new(0, 1)
            })
        );
    }

    #[test]
    fn test_unmatched_close_paren() {
        assert_eq!(
            tree("Int) -> Bool"),
            Err(ParseError::UnmatchedCloseParen {
                span: Span::new(3, 4)
            })
        );
    }

    #[test]
    fn test_empty_group_is_kept() {
        let t = tree("()").unwrap();
        assert_eq!(shape(&t), "[]");
    }
}
