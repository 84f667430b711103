//! Parser for type expressions and substitutions.
//!
//! Parsing runs in three stages: whitespace is stripped and the text is
//! structured into a paren tree, arrows are split out into tokens, and a
//! recursive descent over the tokenized tree builds the [`Type`].
//!
//! Precedence, loosest first: `=>` (a chain of single-name binders), then
//! `->` (right-associative), then atoms and parenthesized groups.

#[cfg(test)]
mod proptests;

use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::lexer::{
    build_paren_tree, located_span, separate_arrows, strip_whitespace, Located, ParenNode, Span,
    Spanned, Token,
};
use crate::types::{Primitive, Subst, Type, TypeScheme};

type Node = ParenNode<Spanned<Token>>;

/// Parse a type expression such as `a => (a -> Int) -> Bool`.
pub fn parse_type(source: &str) -> Result<Type> {
    debug!(source, "parsing type");
    parse_type_at(source, 0)
}

/// Parse a substitution such as `{a: Int, b: (a -> Bool)}`.
///
/// The braces may be omitted as a pair. `{}` is the empty substitution.
/// A name bound twice keeps its first position and takes the last type.
pub fn parse_substitution(source: &str) -> Result<Subst> {
    debug!(source, "parsing substitution");
    parse_substitution_at(source, 0)
}

/// Parse an application line: a substitution, one space, then a type, as in
/// `{a: Int} a -> b`. The line is split at the last `"} "`.
pub fn parse_application(source: &str) -> Result<(Subst, Type)> {
    debug!(source, "parsing application");
    let malformed = || ParseError::MalformedInput {
        span: Span::new(0, source.len()),
    };

    if !source.starts_with('{') {
        return Err(malformed());
    }
    let split = source.rfind("} ").ok_or_else(malformed)?;
    let type_start = split + 2;

    let subst = parse_substitution_at(&source[..=split], 0)?;
    let ty = parse_type_at(&source[type_start..], type_start)?;
    Ok((subst, ty))
}

/// Parse `source`, which starts at byte `base` of the caller's input.
fn parse_type_at(source: &str, base: usize) -> Result<Type> {
    let chars = strip_whitespace(source, base);
    parse_located(&chars, Span::new(base, base + source.len()))
}

fn parse_located(chars: &[Located], span: Span) -> Result<Type> {
    let tree = build_paren_tree(chars, span)?;
    let tokens = separate_arrows(tree);
    trace!(nodes = tokens.nodes.len(), "tokenized paren tree");
    parse_nodes(&tokens.nodes, tokens.span)
}

fn parse_substitution_at(source: &str, base: usize) -> Result<Subst> {
    let span = Span::new(base, base + source.len());
    let chars = strip_whitespace(source, base);
    let inner = strip_braces(&chars)?;

    let mut subst = Subst::empty();
    if inner.is_empty() {
        return Ok(subst);
    }
    for entry in inner.split(|&(_, c)| c == ',') {
        let (name, ty) = parse_entry(entry, span)?;
        subst.insert(name, ty);
    }
    Ok(subst)
}

fn strip_braces(chars: &[Located]) -> Result<&[Located]> {
    match (chars.first(), chars.last()) {
        (Some(&(_, '{')), Some(&(_, '}'))) => Ok(&chars[1..chars.len() - 1]),
        (Some(&(pos, c @ '{')), _) | (_, Some(&(pos, c @ '}'))) => {
            Err(ParseError::UnbalancedBraces {
                span: Span::char_at(pos, c),
            })
        }
        _ => Ok(chars),
    }
}

/// Parse one `name: Type` entry. `span` locates an empty entry.
fn parse_entry(entry: &[Located], span: Span) -> Result<(String, Type)> {
    let entry_span = located_span(entry).unwrap_or(span);
    let malformed = || ParseError::MalformedEntry {
        entry: entry.iter().map(|&(_, c)| c).collect(),
        span: entry_span,
    };

    let mut parts = entry.split(|&(_, c)| c == ':');
    let (key, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) if !key.is_empty() && !value.is_empty() => (key, value),
        _ => return Err(malformed()),
    };

    let name: String = key.iter().map(|&(_, c)| c).collect();
    if !is_ident(&name) {
        return Err(malformed());
    }

    let value_span = located_span(value).unwrap_or(entry_span);
    let ty = parse_located(value, value_span)?;
    Ok((name, ty))
}

/// Identifiers are any run of characters without parentheses or arrows.
fn is_ident(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(|c: char| c == '(' || c == ')')
        && !name.contains("->")
        && !name.contains("=>")
}

/// Recursive descent over a sequence of tokens and groups.
/// `span` covers the sequence and locates errors when it is empty.
fn parse_nodes(nodes: &[Node], span: Span) -> Result<Type> {
    if let Some(last) = nodes.iter().rposition(|n| is_token(n, Token::is_fat_arrow)) {
        return parse_scheme(nodes, last);
    }
    if let Some(first) = nodes.iter().position(|n| is_token(n, Token::is_arrow)) {
        return parse_function(nodes, first);
    }

    match nodes {
        [] => Err(ParseError::EmptyType { span }),
        [ParenNode::Group(group)] => parse_nodes(&group.nodes, group.span),
        [ParenNode::Leaf(token)] => parse_atom(token),
        [_, extra, ..] => Err(ParseError::UnexpectedToken {
            found: describe(extra),
            span: node_span(extra),
        }),
    }
}

/// `a => b => T`: every segment before a `=>` names one bound variable, the
/// segment after the last `=>` is the body.
fn parse_scheme(nodes: &[Node], last: usize) -> Result<Type> {
    let mut vars = Vec::new();
    let mut start = 0;
    for (i, node) in nodes.iter().enumerate().take(last + 1) {
        if is_token(node, Token::is_fat_arrow) {
            vars.push(parse_binder(&nodes[start..i], node_span(node))?);
            start = i + 1;
        }
    }

    let body = &nodes[last + 1..];
    let body = match nodes_span(body) {
        Some(span) => parse_nodes(body, span)?,
        None => {
            return Err(ParseError::MissingOperand {
                arrow: Token::FatArrow.to_string(),
                span: node_span(&nodes[last]),
            })
        }
    };

    trace!(?vars, "parsed scheme binders");
    Ok(Type::Scheme(TypeScheme {
        vars,
        body: Box::new(body),
    }))
}

fn parse_binder(segment: &[Node], arrow_span: Span) -> Result<String> {
    match segment {
        [ParenNode::Leaf(Spanned {
            value: Token::Ident(name),
            ..
        })] => Ok(name.clone()),
        _ => Err(ParseError::InvalidBinder {
            span: nodes_span(segment).unwrap_or(arrow_span),
        }),
    }
}

/// Split at the first `->`; the right side recurses, so arrows nest to the right.
fn parse_function(nodes: &[Node], first: usize) -> Result<Type> {
    let (left, right) = (&nodes[..first], &nodes[first + 1..]);
    let (Some(left_span), Some(right_span)) = (nodes_span(left), nodes_span(right)) else {
        return Err(ParseError::MissingOperand {
            arrow: Token::Arrow.to_string(),
            span: node_span(&nodes[first]),
        });
    };

    let domain = parse_nodes(left, left_span)?;
    let codomain = parse_nodes(right, right_span)?;
    Ok(Type::func(domain, codomain))
}

fn parse_atom(token: &Spanned<Token>) -> Result<Type> {
    match &token.value {
        Token::Ident(name) => Ok(match Primitive::from_name(name) {
            Some(p) => Type::Primitive(p),
            None => Type::var(name.as_str()),
        }),
        other => Err(ParseError::UnexpectedToken {
            found: other.to_string(),
            span: token.span,
        }),
    }
}

fn is_token(node: &Node, pred: impl Fn(&Token) -> bool) -> bool {
    matches!(node, ParenNode::Leaf(token) if pred(&token.value))
}

fn node_span(node: &Node) -> Span {
    match node {
        ParenNode::Leaf(token) => token.span,
        ParenNode::Group(group) => group.span,
    }
}

fn nodes_span(nodes: &[Node]) -> Option<Span> {
    Some(node_span(nodes.first()?).merge(node_span(nodes.last()?)))
}

fn describe(node: &Node) -> String {
    match node {
        ParenNode::Leaf(token) => token.value.to_string(),
        ParenNode::Group(_) => "(".to_string(),
    }
}
