// Boolean expression parsing and expansion for shape composition

use proc_macro2::{Delimiter, TokenStream, TokenTree};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Expr, Token,
};

// =============================================================================
// Shape Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum ShapeExpr {
    Operand(Box<Expr>),
    Union(Box<ShapeExpr>, Box<ShapeExpr>),
    Intersect(Box<ShapeExpr>, Box<ShapeExpr>),
    Complement(Box<ShapeExpr>),
}

impl Parse for ShapeExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let expr = parse_union(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after shape expression"));
        }
        Ok(expr)
    }
}

// Recursive descent parser: Union -> Intersect -> Unary -> Primary
// `||` and `&&` are accepted as spellings of `|` and `&`.

fn parse_union(input: ParseStream) -> syn::Result<ShapeExpr> {
    let mut lhs = parse_intersect(input)?;

    while input.peek(Token![|]) {
        if input.peek(Token![||]) {
            input.parse::<Token![||]>()?;
        } else {
            input.parse::<Token![|]>()?;
        }
        let rhs = parse_intersect(input)?;
        lhs = ShapeExpr::Union(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_intersect(input: ParseStream) -> syn::Result<ShapeExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        if input.peek(Token![&&]) {
            input.parse::<Token![&&]>()?;
        } else {
            input.parse::<Token![&]>()?;
        }
        let rhs = parse_unary(input)?;
        lhs = ShapeExpr::Intersect(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<ShapeExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(ShapeExpr::Complement(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

/// An operand is every token tree up to the next top-level `|` or `&`.
/// A lone parenthesized group is a nested shape expression.
fn parse_primary(input: ParseStream) -> syn::Result<ShapeExpr> {
    let span = input.span();
    let mut tokens = Vec::new();
    while !input.is_empty() && !input.peek(Token![|]) && !input.peek(Token![&]) {
        tokens.push(input.parse::<TokenTree>()?);
    }

    match tokens.as_slice() {
        [] => Err(syn::Error::new(span, "expected a shape operand")),
        [TokenTree::Group(group)] if group.delimiter() == Delimiter::Parenthesis => {
            syn::parse2::<ShapeExpr>(group.stream())
        }
        _ => {
            let stream: TokenStream = tokens.into_iter().collect();
            let expr = syn::parse2::<Expr>(stream)?;
            Ok(ShapeExpr::Operand(Box::new(expr)))
        }
    }
}

// =============================================================================
// ShapeExpr Utilities
// =============================================================================

/// Convert ShapeExpr to human-readable string
#[cfg(test)]
pub fn shape_expr_to_string(expr: &ShapeExpr) -> String {
    match expr {
        ShapeExpr::Operand(e) => quote::ToTokens::to_token_stream(e).to_string().replace(' ', ""),
        ShapeExpr::Union(lhs, rhs) => {
            format!("({} | {})", shape_expr_to_string(lhs), shape_expr_to_string(rhs))
        }
        ShapeExpr::Intersect(lhs, rhs) => {
            format!("({} & {})", shape_expr_to_string(lhs), shape_expr_to_string(rhs))
        }
        ShapeExpr::Complement(operand) => format!("!{}", shape_expr_to_string(operand)),
    }
}

/// Convert ShapeExpr to nested combinator calls
pub fn shape_expr_to_tokens(expr: &ShapeExpr) -> TokenStream {
    match expr {
        ShapeExpr::Operand(e) => quote! { #e },
        ShapeExpr::Union(lhs, rhs) => {
            let l = shape_expr_to_tokens(lhs);
            let r = shape_expr_to_tokens(rhs);
            quote! { ::shape_algebra::union(#l, #r) }
        }
        ShapeExpr::Intersect(lhs, rhs) => {
            let l = shape_expr_to_tokens(lhs);
            let r = shape_expr_to_tokens(rhs);
            quote! { ::shape_algebra::intersect(#l, #r) }
        }
        ShapeExpr::Complement(operand) => {
            let o = shape_expr_to_tokens(operand);
            quote! { ::shape_algebra::complement(#o) }
        }
    }
}
