//! Arrow tokenization over a paren tree.
//!
//! Whitespace is gone by the time this runs, so `a->b` and `a -> b` look the
//! same. Each text run is split so that `->` and `=>` stand alone as tokens.

use super::paren::{located_span, Located, ParenGroup, ParenNode, Run};
use super::token::{Span, Spanned, Token};

/// Split the arrows out of every run in the tree. Group structure is kept.
pub fn separate_arrows(group: ParenGroup<Run>) -> ParenGroup<Spanned<Token>> {
    let mut nodes = Vec::with_capacity(group.nodes.len());
    for node in group.nodes {
        match node {
            ParenNode::Group(inner) => nodes.push(ParenNode::Group(separate_arrows(inner))),
            ParenNode::Leaf(run) => nodes.extend(split_run(&run).into_iter().map(ParenNode::Leaf)),
        }
    }
    ParenGroup {
        nodes,
        span: group.span,
    }
}

/// Split one run into identifier and arrow tokens, dropping empty fragments.
pub fn split_run(run: &Run) -> Vec<Spanned<Token>> {
    let chars = &run.chars;
    let mut tokens = Vec::new();
    let mut ident: Vec<Located> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        let arrow = match (c, chars.get(i + 1)) {
            ('-', Some(&(_, '>'))) => Some(Token::Arrow),
            ('=', Some(&(_, '>'))) => Some(Token::FatArrow),
            _ => None,
        };

        match arrow {
            Some(token) => {
                flush_ident(&mut ident, &mut tokens);
                let (end, _) = chars[i + 1];
                tokens.push(Spanned::new(token, Span::new(pos, end + 1)));
                i += 2;
            }
            None => {
                ident.push((pos, c));
                i += 1;
            }
        }
    }
    flush_ident(&mut ident, &mut tokens);

    tokens
}

fn flush_ident(ident: &mut Vec<Located>, tokens: &mut Vec<Spanned<Token>>) {
    if let Some(span) = located_span(ident) {
        let name = ident.iter().map(|&(_, c)| c).collect();
        tokens.push(Spanned::new(Token::Ident(name), span));
    }
    ident.clear();
}
