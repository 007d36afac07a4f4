//! Syntax tree of the node DSL.
//!
//! ```text
//! forest := child*
//! child  := ".." expr | node
//! node   := Ident ( "(" args ")" )? ( "{" child* "}" )?
//! args   := (expr ",")* (Ident ":" expr ",")*
//! ```

use std::collections::HashSet;

use syn::{
    Expr, Ident, Result, Token, braced, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token,
};

/// Top-level input of `layout!`.
#[derive(Debug)]
pub struct Forest {
    pub children: Vec<Child>,
}

#[derive(Debug)]
pub enum Child {
    Node(NodeSpec),
    /// `..expr`: every item of an iterator, converted into a node.
    Splat(Expr),
}

#[derive(Debug)]
pub struct NodeSpec {
    pub name: Ident,
    /// Arguments to `::new`.
    pub args: Vec<Expr>,
    /// `name: value` pairs, applied as `.with_name(value)` in source order.
    pub attrs: Vec<Attr>,
    /// `None` when the node was written without braces.
    pub children: Option<Vec<Child>>,
}

#[derive(Debug)]
pub struct Attr {
    pub name: Ident,
    pub value: Expr,
}

enum Arg {
    Positional(Expr),
    Named(Attr),
}

impl Parse for Arg {
    fn parse(input: ParseStream) -> Result<Self> {
        // `name: value`, but not a `path::to::value` expression
        if input.peek(Ident) && input.peek2(Token![:]) && !input.peek2(Token![::]) {
            let name = input.parse()?;
            input.parse::<Token![:]>()?;
            let value = input.parse()?;
            Ok(Arg::Named(Attr { name, value }))
        } else {
            input.parse().map(Arg::Positional)
        }
    }
}

fn parse_children(input: ParseStream) -> Result<Vec<Child>> {
    let mut children = Vec::new();
    while !input.is_empty() {
        children.push(input.parse()?);
    }
    Ok(children)
}

impl Parse for Forest {
    fn parse(input: ParseStream) -> Result<Self> {
        let children = parse_children(input)?;
        if children.is_empty() {
            return Err(input.error("expected at least one node or `..` splat"));
        }
        Ok(Forest { children })
    }
}

impl Parse for Child {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Token![..]) {
            input.parse::<Token![..]>()?;
            return input.parse().map(Child::Splat);
        }
        input.parse().map(Child::Node)
    }
}

impl Parse for NodeSpec {
    fn parse(input: ParseStream) -> Result<Self> {
        let name: Ident = input.parse()?;
        let mut args = Vec::new();
        let mut attrs: Vec<Attr> = Vec::new();

        if input.peek(token::Paren) {
            let content;
            parenthesized!(content in input);
            let mut seen = HashSet::new();

            for arg in Punctuated::<Arg, Token![,]>::parse_terminated(&content)? {
                match arg {
                    Arg::Positional(expr) if attrs.is_empty() => args.push(expr),
                    Arg::Positional(expr) => {
                        return Err(syn::Error::new_spanned(
                            expr,
                            "positional arguments must come before `name: value` attributes",
                        ));
                    }
                    Arg::Named(attr) => {
                        if !seen.insert(attr.name.to_string()) {
                            return Err(syn::Error::new(
                                attr.name.span(),
                                format!("`{}` is set more than once", attr.name),
                            ));
                        }
                        attrs.push(attr);
                    }
                }
            }
        }

        let children = if input.peek(token::Brace) {
            let content;
            braced!(content in input);
            Some(parse_children(&content)?)
        } else {
            None
        };

        Ok(NodeSpec {
            name,
            args,
            attrs,
            children,
        })
    }
}
