#![warn(clippy::use_self)]

mod generate;
mod parse;
mod util;

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

use crate::parse::Element;

/// Markup syntax for building element trees.
///
/// ```ignore
/// let element = jsx! {
///     <div style="background: salmon">
///         <h1>"Hello World"</h1>
///         <h2 style="text-align:right">"from Caract"</h2>
///     </div>
/// };
/// ```
///
/// Expands to nested `create_element` calls. Text must be a literal or a
/// `{...}` block; attribute values are literals, `{...}` blocks, or absent
/// (`<input disabled />` sets `disabled` to `true`).
#[proc_macro]
pub fn jsx(input: TokenStream) -> TokenStream {
    let element = parse_macro_input!(input as Element);
    quote!(#element).into()
}
