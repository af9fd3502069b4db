use std::fmt;

use proc_macro2::Span;
use syn::{
    braced,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    token, Expr, Ident, Lit, Token,
};

/// `<name attr=value ...>children</name>` or `<name ... />`.
pub struct Element {
    pub name: Name,
    pub attrs: Vec<Attr>,
    pub children: Vec<Child>,
}

impl Parse for Element {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        input.parse::<Token![<]>()?;
        let name: Name = input.parse()?;

        let mut attrs = vec![];
        while !(input.peek(Token![>]) || input.peek(Token![/])) {
            attrs.push(input.parse()?);
        }

        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            input.parse::<Token![>]>()?;
            return Ok(Self {
                name,
                attrs,
                children: vec![],
            });
        }
        input.parse::<Token![>]>()?;

        let mut children = vec![];
        while !(input.peek(Token![<]) && input.peek2(Token![/])) {
            if input.is_empty() {
                return Err(syn::Error::new(
                    name.span(),
                    format!("unclosed element `<{name}>`"),
                ));
            }
            children.push(input.parse()?);
        }

        input.parse::<Token![<]>()?;
        input.parse::<Token![/]>()?;
        let close: Name = input.parse()?;
        if close.to_string() != name.to_string() {
            let mut err = syn::Error::new(
                close.span(),
                format!("expected `</{name}>`, found `</{close}>`"),
            );
            err.combine(syn::Error::new(name.span(), "element opened here"));
            return Err(err);
        }
        input.parse::<Token![>]>()?;

        Ok(Self {
            name,
            attrs,
            children,
        })
    }
}

/// A tag or attribute name; dashes are allowed (`data-id`, `my-widget`).
pub struct Name {
    parts: Vec<Ident>,
}

impl Name {
    pub fn span(&self) -> Span {
        self.parts[0].span()
    }
}

impl Parse for Name {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // keywords are valid names: `<input type="text">`, `<label for="x">`
        let mut parts = vec![Ident::parse_any(input)?];
        while input.peek(Token![-]) {
            input.parse::<Token![-]>()?;
            parts.push(Ident::parse_any(input)?);
        }
        Ok(Self { parts })
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", part.unraw())?;
        }
        Ok(())
    }
}

pub struct Attr {
    pub name: Name,
    pub value: AttrValue,
}

pub enum AttrValue {
    Lit(Lit),
    Expr(Expr),
    /// A bare attribute, `<input disabled />`.
    Flag(Span),
}

impl Parse for Attr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Name = input.parse()?;

        let value = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            if input.peek(token::Brace) {
                let content;
                braced!(content in input);
                AttrValue::Expr(content.parse()?)
            } else if input.peek(Lit) {
                AttrValue::Lit(input.parse()?)
            } else {
                return Err(input.error("expected a literal or a `{...}` block"));
            }
        } else {
            AttrValue::Flag(name.span())
        };

        Ok(Self { name, value })
    }
}

pub enum Child {
    Element(Element),
    Lit(Lit),
    Expr(Expr),
}

impl Parse for Child {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![<]) {
            input.parse().map(Self::Element)
        } else if input.peek(token::Brace) {
            let content;
            braced!(content in input);
            content.parse().map(Self::Expr)
        } else if input.peek(Lit) {
            input.parse().map(Self::Lit)
        } else {
            Err(input.error("text must be a string literal or a `{...}` block"))
        }
    }
}
