//! Parsing of `#[ortb(...)]` and `#[doc]` attributes.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, LitStr, Meta, UnOp, spanned::Spanned};

use crate::DESCRIBE_ATTRIBUTE_NAME;
use crate::declared_type::DeclaredType;
use crate::describe_docs::DescribeDocs;
use crate::path;

// -----------------------------------------------------------------------------
// Type Attributes

/// Attributes on the deriving type.
///
/// - `#[ortb(type_path = "openrtb::bid_request::App")]`
/// - `#[ortb(auto_register)]`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<LitStr>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(DESCRIBE_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(meta.error("`type_path` cannot be empty"));
                    }
                    set_once(&meta, &mut this.type_path, lit)
                } else if meta.path.is_ident("auto_register") {
                    set_once(&meta, &mut this.auto_register, meta.path.span())
                } else {
                    Err(meta.error("unknown type attribute, expected `type_path` or `auto_register`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Field Attributes

/// A literal recorded by `#[ortb(default = ...)]`.
#[derive(Debug)]
pub(crate) enum DefaultLit {
    Bool(bool),
    Int(TokenStream),
    Float(TokenStream),
    Str(LitStr),
}

impl DefaultLit {
    fn parse(expr: &Expr) -> syn::Result<Self> {
        match expr {
            Expr::Lit(ExprLit { lit, .. }) => match lit {
                Lit::Bool(b) => Ok(Self::Bool(b.value)),
                Lit::Int(i) => Ok(Self::Int(i.base10_digits().parse::<i64>().map_or_else(
                    |_| quote!(#i),
                    |v| quote!(#v),
                ))),
                Lit::Float(f) => Ok(Self::Float(quote!(#f))),
                Lit::Str(s) => Ok(Self::Str(s.clone())),
                other => Err(syn::Error::new(other.span(), DEFAULT_ERROR)),
            },
            Expr::Unary(ExprUnary {
                op: UnOp::Neg(_),
                expr: inner,
                ..
            }) => match Self::parse(inner)? {
                Self::Int(v) => Ok(Self::Int(quote!(-#v))),
                Self::Float(v) => Ok(Self::Float(quote!(-#v))),
                _ => Err(syn::Error::new(expr.span(), DEFAULT_ERROR)),
            },
            other => Err(syn::Error::new(other.span(), DEFAULT_ERROR)),
        }
    }

    /// `DefaultValue::Xxx(..)`
    pub fn to_tokens(&self, krate: &syn::Path) -> TokenStream {
        let default_value_ = path::default_value_(krate);
        match self {
            Self::Bool(v) => quote!(#default_value_::Bool(#v)),
            Self::Int(v) => quote!(#default_value_::Int(#v)),
            Self::Float(v) => quote!(#default_value_::Float(#v)),
            Self::Str(v) => quote!(#default_value_::Str(#v)),
        }
    }
}

const DEFAULT_ERROR: &str = "`default` expects an integer, float, bool or string literal";

/// Attributes on one named field.
///
/// - `#[ortb(required)]`, `#[ortb(recommended)]`, `#[ortb(skip)]`
/// - `#[ortb(default = 1)]`
/// - `#[ortb(kind = "collection")]`
/// - `#[ortb(rename = "type")]`
/// - `#[ortb(doc = "...")]`, `#[ortb(doc = false)]`
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub required: Option<Span>,
    pub recommended: Option<Span>,
    pub skip: Option<Span>,
    pub default: Option<DefaultLit>,
    pub kind: Option<DeclaredType>,
    pub rename: Option<LitStr>,
    pub docs: DescribeDocs,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident("doc") {
                if let Meta::NameValue(pair) = &attr.meta {
                    this.docs.parse_default_docs(pair)?;
                }
                continue;
            }
            if !attr.path().is_ident(DESCRIBE_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| this.parse_meta(&meta))?;
        }

        if let (Some(_), Some(skip)) = (this.required, this.skip) {
            return Err(syn::Error::new(
                skip,
                "`skip` cannot be combined with `required`",
            ));
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.span();
        if meta.path.is_ident("required") {
            set_once(meta, &mut self.required, span)
        } else if meta.path.is_ident("recommended") {
            set_once(meta, &mut self.recommended, span)
        } else if meta.path.is_ident("skip") {
            set_once(meta, &mut self.skip, span)
        } else if meta.path.is_ident("default") {
            let expr: Expr = meta.value()?.parse()?;
            set_once(meta, &mut self.default, DefaultLit::parse(&expr)?)
        } else if meta.path.is_ident("kind") {
            let lit: LitStr = meta.value()?.parse()?;
            set_once(meta, &mut self.kind, DeclaredType::from_lit(&lit)?)
        } else if meta.path.is_ident("rename") {
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(meta.error("`rename` cannot be empty"));
            }
            set_once(meta, &mut self.rename, lit)
        } else if meta.path.is_ident("doc") {
            let lit: Lit = meta.value()?.parse()?;
            self.docs.parse_custom_docs(&lit)
        } else {
            Err(meta.error(
                "unknown field attribute, expected one of `required`, `recommended`, \
                 `skip`, `default`, `kind`, `rename`, `doc`",
            ))
        }
    }
}

fn set_once<T>(meta: &ParseNestedMeta, slot: &mut Option<T>, value: T) -> syn::Result<()> {
    if slot.is_some() {
        let name = meta
            .path
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();
        return Err(meta.error(format!("duplicate `{name}` attribute")));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DefaultLit, FieldAttributes, TypeAttributes};
    use crate::declared_type::DeclaredType;
    use syn::{Attribute, parse_quote};

    #[test]
    fn field_markers() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[ortb(required, kind = "collection")]),
            parse_quote!(#[ortb(default = -2, rename = "type")]),
        ];
        let parsed = FieldAttributes::parse_attrs(&attrs).unwrap();
        assert!(parsed.required.is_some());
        assert!(parsed.recommended.is_none());
        assert_eq!(parsed.kind, Some(DeclaredType::Collection));
        assert_eq!(parsed.rename.unwrap().value(), "type");
        match parsed.default {
            Some(DefaultLit::Int(tokens)) => assert_eq!(tokens.to_string(), "- 2i64"),
            other => panic!("unexpected default: {other:?}"),
        }
    }

    #[test]
    fn invalid_field_attributes() {
        let cases: [Attribute; 4] = [
            parse_quote!(#[ortb(required, skip)]),
            parse_quote!(#[ortb(kind = "vector")]),
            parse_quote!(#[ortb(default = [1])]),
            parse_quote!(#[ortb(required, required)]),
        ];
        for attr in cases {
            assert!(FieldAttributes::parse_attrs(&[attr]).is_err());
        }
    }

    #[test]
    fn type_markers() {
        let attrs: Vec<Attribute> = vec![parse_quote!(
            #[ortb(type_path = "openrtb::bid_request::App", auto_register)]
        )];
        let parsed = TypeAttributes::parse_attrs(&attrs).unwrap();
        assert_eq!(parsed.type_path.unwrap().value(), "openrtb::bid_request::App");
        assert!(parsed.auto_register.is_some());

        let unknown: Attribute = parse_quote!(#[ortb(Reflect)]);
        assert!(TypeAttributes::parse_attrs(&[unknown]).is_err());
    }
}
