use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, Lit, LitBool, LitStr, MetaNameValue, spanned::Spanned};

use crate::path::fp::OptionFP;

/// The documentation of one field, if any.
///
/// This corresponds to `ortb_describe::info::PropertyMetadata::docs`.
///
/// By default this is the content of `#[doc = "..."]`, which includes `/// ...`.
/// An explicit `#[ortb(doc = "...")]` replaces it.
///
/// `enabled` is only true when the `docs` feature is enabled.
#[derive(Debug)]
pub(crate) struct DescribeDocs {
    enabled: bool,
    is_custom: bool,
    docs: Vec<String>,
}

impl Default for DescribeDocs {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl DescribeDocs {
    #[inline]
    pub const fn new() -> Self {
        Self {
            enabled: cfg!(feature = "docs"),
            is_custom: false,
            docs: Vec::new(),
        }
    }

    /// Parse `#[doc = "..."]`.
    ///
    /// The caller guarantees the key is `doc`.
    pub fn parse_default_docs(&mut self, pair: &MetaNameValue) -> syn::Result<()> {
        if !self.enabled || self.is_custom {
            return Ok(());
        }
        match &pair.value {
            Expr::Lit(syn::ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) => {
                self.docs.push(lit_str.value());
                Ok(())
            }
            other => Err(syn::Error::new(
                other.span(),
                "`#[doc = ...]` expected a string literal value",
            )),
        }
    }

    /// Parse `#[ortb(doc = "...")]` or `#[ortb(doc = false)]`.
    pub fn parse_custom_docs(&mut self, lit: &Lit) -> syn::Result<()> {
        match lit {
            Lit::Str(lit_str) => self.push_custom(lit_str),
            Lit::Bool(LitBool { value: false, .. }) => {
                self.enabled = false;
                self.docs.clear();
            }
            Lit::Bool(lit_bool) => {
                return Err(syn::Error::new(
                    lit_bool.span(),
                    "explicit `true` is invalid, docs are recorded by default with the `docs` feature",
                ));
            }
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "expected a string or `false` literal",
                ));
            }
        }
        Ok(())
    }

    fn push_custom(&mut self, lit_str: &LitStr) {
        if !self.enabled {
            return;
        }
        if !self.is_custom {
            self.docs.clear();
            self.is_custom = true;
        }
        self.docs.push(lit_str.value());
    }

    /// Lines are trimmed; `None` if nothing is left.
    fn doc_string(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let doc = self
            .docs
            .iter()
            .map(|line| line.trim())
            .collect::<Vec<_>>()
            .join("\n");
        let doc = doc.trim();
        (!doc.is_empty()).then(|| doc.to_owned())
    }

    /// Empty if there is nothing to record, otherwise:
    ///
    /// ```ignore
    /// .with_docs(::core::option::Option::Some("......"))
    /// ```
    pub fn get_expression_with(&self) -> TokenStream {
        match self.doc_string() {
            Some(doc) => quote! {
                .with_docs(#OptionFP::Some(#doc))
            },
            None => TokenStream::new(),
        }
    }
}

#[cfg(all(test, feature = "docs"))]
mod tests {
    use super::DescribeDocs;
    use syn::{MetaNameValue, parse_quote};

    #[test]
    fn custom_docs_replace_default() {
        let mut docs = DescribeDocs::new();
        let line: MetaNameValue = parse_quote!(doc = " Bid floor. ");
        docs.parse_default_docs(&line).unwrap();
        assert_eq!(docs.doc_string().as_deref(), Some("Bid floor."));

        docs.parse_custom_docs(&parse_quote!("Minimum bid")).unwrap();
        docs.parse_default_docs(&line).unwrap();
        assert_eq!(docs.doc_string().as_deref(), Some("Minimum bid"));

        docs.parse_custom_docs(&parse_quote!(false)).unwrap();
        assert_eq!(docs.doc_string(), None);
    }
}
