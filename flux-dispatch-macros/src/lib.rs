//! Procedural macros for flux-dispatch

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<ActionVariant, ()>,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit type constant, replaces the SCREAMING_SNAKE_CASE default
    #[darling(default)]
    rename: Option<String>,
}

/// Convert PascalCase to SCREAMING_SNAKE_CASE
///
/// A run of capitals counts as one word: `HTTPRequest` becomes `HTTP_REQUEST`.
fn to_screaming_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.extend(ch.to_uppercase());
    }
    result
}

/// Derive macro for the Action trait
///
/// Generates:
/// - `name()` returning the variant name, e.g. `"UpdateUsername"`
/// - `action_type()` returning the type constant, e.g. `"UPDATE_USERNAME"`
///
/// Use `#[action(rename = "...")]` on a variant to pick the type constant.
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum PrefsAction {
///     UpdateUsername { value: String },
///     #[action(rename = "UPDATE_FONT_SIZE_PREFERENCE")]
///     FontSize(String),
/// }
///
/// let action = PrefsAction::FontSize("large".into());
/// assert_eq!(action.name(), "FontSize");
/// assert_eq!(action.action_type(), "UPDATE_FONT_SIZE_PREFERENCE");
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let patterns: Vec<_> = variants
        .iter()
        .map(|v| {
            let variant_name = &v.ident;
            match &v.fields.style {
                darling::ast::Style::Unit => quote! { #name::#variant_name },
                darling::ast::Style::Tuple => quote! { #name::#variant_name(..) },
                darling::ast::Style::Struct => quote! { #name::#variant_name { .. } },
            }
        })
        .collect();

    let name_strs: Vec<_> = variants.iter().map(|v| v.ident.to_string()).collect();

    let type_strs: Vec<_> = variants
        .iter()
        .map(|v| {
            v.rename
                .clone()
                .unwrap_or_else(|| to_screaming_snake_case(&v.ident.to_string()))
        })
        .collect();

    let expanded = if variants.is_empty() {
        quote! {
            impl #impl_generics flux_dispatch::Action for #name #ty_generics #where_clause {
                fn name(&self) -> &'static str {
                    match *self {}
                }

                fn action_type(&self) -> &'static str {
                    match *self {}
                }
            }
        }
    } else {
        quote! {
            impl #impl_generics flux_dispatch::Action for #name #ty_generics #where_clause {
                fn name(&self) -> &'static str {
                    match self {
                        #(#patterns => #name_strs),*
                    }
                }

                fn action_type(&self) -> &'static str {
                    match self {
                        #(#patterns => #type_strs),*
                    }
                }
            }
        }
    };

    TokenStream::from(expanded)
}
