use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, LitStr, PathArguments, Type};

use crate::path;

/// Mirror of `ortb_describe::info::DeclaredType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeclaredType {
    String,
    Int,
    Float,
    Bool,
    Array,
    Object,
    Collection,
    Extension,
}

impl DeclaredType {
    const ALL: [(&'static str, DeclaredType); 8] = [
        ("string", Self::String),
        ("int", Self::Int),
        ("float", Self::Float),
        ("bool", Self::Bool),
        ("array", Self::Array),
        ("object", Self::Object),
        ("collection", Self::Collection),
        ("extension", Self::Extension),
    ];

    /// Parse `kind = "..."`.
    pub fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        let value = lit.value();
        match Self::ALL.iter().find(|(name, _)| *name == value) {
            Some((_, ty)) => Ok(*ty),
            None => {
                let expected = Self::ALL.map(|(name, _)| name).join("`, `");
                Err(syn::Error::new(
                    lit.span(),
                    format!("unknown declared type `{value}`, expected one of `{expected}`"),
                ))
            }
        }
    }

    /// Infer the declared type from the field type.
    pub fn infer(ty: &Type) -> Self {
        let ty = peel(ty);
        let Some((ident, arg)) = last_segment(ty) else {
            return Self::Object;
        };

        match ident.as_str() {
            "String" | "str" | "Cow" => Self::String,
            "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize" => {
                Self::Int
            }
            "f32" | "f64" => Self::Float,
            "bool" => Self::Bool,
            "Vec" => match arg {
                Some(inner) if Self::infer(inner).is_scalar() => Self::Array,
                _ => Self::Collection,
            },
            "Collection" => Self::Collection,
            "Extension" => Self::Extension,
            _ => Self::Object,
        }
    }

    #[inline]
    fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::String | Self::Int | Self::Float | Self::Bool | Self::Array
        )
    }

    /// `DeclaredType::Xxx`
    pub fn to_tokens(self, krate: &syn::Path) -> TokenStream {
        let declared_type_ = path::declared_type_(krate);
        let variant = match self {
            Self::String => quote!(String),
            Self::Int => quote!(Int),
            Self::Float => quote!(Float),
            Self::Bool => quote!(Bool),
            Self::Array => quote!(Array),
            Self::Object => quote!(Object),
            Self::Collection => quote!(Collection),
            Self::Extension => quote!(Extension),
        };
        quote! { #declared_type_::#variant }
    }

    /// The conversion trait used to read a field of this type.
    pub fn conversion_trait(self, krate: &syn::Path) -> TokenStream {
        match self {
            Self::Object | Self::Extension => path::object_property_(krate),
            Self::Collection => path::collection_property_(krate),
            _ => path::scalar_property_(krate),
        }
    }
}

/// Strip `Option`, `Box`, references, groups and parentheses.
fn peel(mut ty: &Type) -> &Type {
    loop {
        ty = match ty {
            Type::Reference(r) => &r.elem,
            Type::Group(g) => &g.elem,
            Type::Paren(p) => &p.elem,
            Type::Path(_) => match last_segment(ty) {
                Some((ident, Some(inner))) if ident == "Option" || ident == "Box" => inner,
                _ => return ty,
            },
            _ => return ty,
        };
    }
}

/// The last path segment and its first type argument.
fn last_segment(ty: &Type) -> Option<(String, Option<&Type>)> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    let arg = match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        }),
        _ => None,
    };
    Some((segment.ident.to_string(), arg))
}

#[cfg(test)]
mod tests {
    use super::DeclaredType;
    use syn::parse_quote;

    #[test]
    fn inference() {
        let cases: [(syn::Type, DeclaredType); 10] = [
            (parse_quote!(Option<String>), DeclaredType::String),
            (parse_quote!(&'static str), DeclaredType::String),
            (parse_quote!(Option<u32>), DeclaredType::Int),
            (parse_quote!(f64), DeclaredType::Float),
            (parse_quote!(Option<bool>), DeclaredType::Bool),
            (parse_quote!(Vec<String>), DeclaredType::Array),
            (parse_quote!(Vec<Vec<i32>>), DeclaredType::Array),
            (parse_quote!(Vec<Asset>), DeclaredType::Collection),
            (parse_quote!(Option<Box<Image>>), DeclaredType::Object),
            (parse_quote!(ortb::ser::Extension), DeclaredType::Extension),
        ];
        for (ty, expected) in cases {
            assert_eq!(DeclaredType::infer(&ty), expected);
        }
    }
}
