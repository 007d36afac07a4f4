//! Expansion of parsed node trees into builder expressions.
//!
//! Every node becomes `::flexgrid::Node::from(Type::new(args).with_a(x)...)`,
//! so any type with a `new` constructor, `with_*` setters and an
//! `Into<Node>` conversion can appear in a tree.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Expr, ExprLit, Ident, Lit};

use crate::parse::{Attr, Child, Forest, NodeSpec};

const SPAN_ATTRS: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

/// Expands a forest into a `Vec<Node>` expression.
pub fn expand_forest(forest: Forest) -> TokenStream {
    expand_children(&forest.children)
}

/// Expands one node into a `Node` expression.
pub fn expand_node(node: &NodeSpec) -> TokenStream {
    let ty = node_type(&node.name);
    let args = &node.args;
    let setters = node.attrs.iter().map(expand_attr);
    let children = node
        .children
        .as_ref()
        .map(|children| {
            let children = expand_children(children);
            quote! { .with_children(#children) }
        })
        .unwrap_or_default();

    quote! {
        ::flexgrid::Node::from(#ty::new(#(#args),*) #(#setters)* #children)
    }
}

fn node_type(name: &Ident) -> TokenStream {
    match name.to_string().as_str() {
        "Grid" | "Element" | "Text" | "Empty" => quote! { ::flexgrid::#name },
        _ => quote! { #name },
    }
}

fn expand_children(children: &[Child]) -> TokenStream {
    if children.iter().all(|child| matches!(child, Child::Node(_))) {
        let nodes = children.iter().filter_map(|child| match child {
            Child::Node(node) => Some(expand_node(node)),
            Child::Splat(_) => None,
        });
        return quote! { ::std::vec![#(#nodes),*] };
    }

    let pushes = children.iter().map(|child| match child {
        Child::Node(node) => {
            let node = expand_node(node);
            quote! { __nodes.push(#node); }
        }
        Child::Splat(iter) => quote! {
            __nodes.extend(::core::iter::IntoIterator::into_iter(#iter).map(::flexgrid::Node::from));
        },
    });

    quote! {
        {
            let mut __nodes: ::std::vec::Vec<::flexgrid::Node> = ::std::vec::Vec::new();
            #(#pushes)*
            __nodes
        }
    }
}

fn expand_attr(attr: &Attr) -> TokenStream {
    let setter = format_ident!("with_{}", attr.name);
    let value = expand_value(attr);
    quote! { .#setter(#value) }
}

/// Literal spacing levels and column spans are range-checked here and
/// become typed values; every other value is passed through as written.
fn expand_value(attr: &Attr) -> TokenStream {
    let name = attr.name.to_string();
    let value = &attr.value;
    let lit = match value {
        Expr::Lit(ExprLit { lit, .. }) => Some(lit),
        _ => None,
    };

    match (name.as_str(), lit) {
        ("spacing", Some(Lit::Int(int))) => match int.base10_parse::<u8>() {
            Ok(level) if level <= 10 => {
                quote! { ::flexgrid::SpacingLevel::new(#level).unwrap_or_default() }
            }
            _ => syn::Error::new(int.span(), "spacing must be between 0 and 10").to_compile_error(),
        },
        (span, Some(Lit::Int(int))) if SPAN_ATTRS.contains(&span) => {
            match int.base10_parse::<u8>() {
                Ok(columns) if (1..=12).contains(&columns) => {
                    quote! { ::flexgrid::GridSize::columns(#columns).unwrap_or_default() }
                }
                _ => syn::Error::new(int.span(), "column span must be between 1 and 12")
                    .to_compile_error(),
            }
        }
        (span, Some(Lit::Str(text))) if SPAN_ATTRS.contains(&span) => match text.value().as_str() {
            "auto" => quote! { ::flexgrid::GridSize::Auto },
            _ => syn::Error::new(text.span(), "column span must be `auto`, a bool or 1 to 12")
                .to_compile_error(),
        },
        _ => quote! { #value },
    }
}
