use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned, ToTokens};
use syn::{spanned::Spanned, Ident, LitStr};

use crate::{
    parse::{AttrValue, Child, Element},
    util::*,
};

impl ToTokens for Element {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Paths {
            create_element,
            Child,
            PropMap,
            PropValue,
        } = paths();

        let Self {
            name,
            attrs,
            children,
        } = self;
        let name = LitStr::new(&name.to_string(), name.span());

        let props = if attrs.is_empty() {
            quote!(::core::option::Option::None)
        } else {
            let entries = attrs.iter().map(|attr| {
                let key = LitStr::new(&attr.name.to_string(), attr.name.span());
                let value = &attr.value;
                let span = value.span().resolved_at(value.span());
                quote_spanned! {span=>
                    (::std::string::String::from(#key), #PropValue::from(#value))
                }
            });
            quote! {
                ::core::option::Option::Some(
                    <#PropMap as ::core::iter::FromIterator<_>>::from_iter([#(#entries),*])
                )
            }
        };

        let len = children.len();
        let children = children.iter().map(|child| {
            let span = child.span().resolved_at(child.span());
            quote_spanned! {span=> #Child::from(#child) }
        });

        let ident = Ident::new("__children", Span::mixed_site());
        tokens.extend(quote! {{
            let #ident: [#Child; #len] = [#(#children),*];
            #create_element(#name, #props, #ident)
        }});
    }
}

impl ToTokens for AttrValue {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Lit(lit) => lit.to_tokens(tokens),
            Self::Expr(expr) => expr.to_tokens(tokens),
            Self::Flag(span) => tokens.extend(quote_spanned!(*span=> true)),
        }
    }
}

impl ToTokens for Child {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Element(element) => element.to_tokens(tokens),
            Self::Lit(lit) => lit.to_tokens(tokens),
            Self::Expr(expr) => expr.to_tokens(tokens),
        }
    }
}
