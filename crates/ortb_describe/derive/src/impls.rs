//! Code generation.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{Data, DeriveInput, Fields, ItemImpl, LitStr, spanned::Spanned};

use crate::attributes::{FieldAttributes, TypeAttributes};
use crate::declared_type::DeclaredType;
use crate::path::{self, fp::ConcatFP, fp::ModulePathFP};

// -----------------------------------------------------------------------------
// Describe

/// One declared property of the deriving struct.
struct DescribeField<'a> {
    member: &'a syn::Ident,
    ty: &'a syn::Type,
    name: LitStr,
    declared_type: DeclaredType,
    attrs: FieldAttributes,
}

pub(crate) fn impl_describe(ast: &DeriveInput) -> syn::Result<TokenStream> {
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new(
            ast.generics.span(),
            "`Describe` cannot be derived for generic types",
        ));
    }

    let named = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named,
            _ => {
                return Err(syn::Error::new(
                    ast.ident.span(),
                    "`Describe` requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`Describe` can only be derived for structs",
            ));
        }
    };

    let type_attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

    let mut fields = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        if attrs.skip.is_some() {
            continue;
        }
        let Some(member) = field.ident.as_ref() else {
            continue;
        };
        let name = match &attrs.rename {
            Some(lit) => lit.clone(),
            None => {
                let raw = member.to_string();
                let raw = raw.strip_prefix("r#").unwrap_or(&raw);
                LitStr::new(raw, member.span())
            }
        };
        let declared_type = attrs
            .kind
            .unwrap_or_else(|| DeclaredType::infer(&field.ty));
        fields.push(DescribeField {
            member,
            ty: &field.ty,
            name,
            declared_type,
            attrs,
        });
    }

    for (i, field) in fields.iter().enumerate() {
        if fields[..i].iter().any(|f| f.name.value() == field.name.value()) {
            return Err(syn::Error::new(
                field.name.span(),
                format!("duplicate property name `{}`", field.name.value()),
            ));
        }
    }

    let krate = path::ortb_describe();
    let ident = &ast.ident;

    let describe_impl = impl_trait_describe(&krate, ident, &type_attrs, &fields);
    let serializable_impl = impl_trait_serializable(&krate, ident, &fields);
    let object_property_impl = impl_trait_object_property(&krate, ident);
    let auto_register_impl = impl_auto_register(&krate, ident, &type_attrs);

    Ok(quote! {
        const _: () = {
            #describe_impl

            #serializable_impl

            #object_property_impl

            #auto_register_impl
        };
    })
}

fn impl_trait_describe(
    krate: &syn::Path,
    ident: &syn::Ident,
    type_attrs: &TypeAttributes,
    fields: &[DescribeField],
) -> TokenStream {
    let describe_ = path::describe_(krate);
    let class_descriptor_ = path::class_descriptor_(krate);
    let property_metadata_ = path::property_metadata_(krate);

    let type_name = LitStr::new(&ident.to_string(), ident.span());
    let type_path = match &type_attrs.type_path {
        Some(lit) => quote!(#lit),
        None => quote!(#ConcatFP!(#ModulePathFP!(), "::", #type_name)),
    };

    let properties = fields.iter().map(|field| {
        let name = &field.name;
        let declared_type = field.declared_type.to_tokens(krate);
        let required = field.attrs.required.is_some();
        let recommended = field.attrs.recommended.is_some();
        let with_default = field.attrs.default.as_ref().map(|lit| {
            let value = lit.to_tokens(krate);
            quote!(.with_default(#value))
        });
        let with_docs = field.attrs.docs.get_expression_with();
        quote! {
            #property_metadata_::new(#name, #declared_type)
                .with_required(#required)
                .with_recommended(#recommended)
                #with_default
                #with_docs
        }
    });

    quote! {
        impl #describe_ for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            fn class_descriptor() -> #class_descriptor_ {
                #class_descriptor_::new(
                    <Self as #describe_>::type_path(),
                    <Self as #describe_>::type_name(),
                    &[ #(#properties),* ],
                )
            }
        }
    }
}

fn impl_trait_serializable(
    krate: &syn::Path,
    ident: &syn::Ident,
    fields: &[DescribeField],
) -> TokenStream {
    let describe_ = path::describe_(krate);
    let serializable_ = path::serializable_(krate);
    let class_descriptor_ = path::class_descriptor_(krate);
    let property_ = path::property_(krate);

    let arms = fields.iter().enumerate().map(|(index, field)| {
        let member = field.member;
        let ty = field.ty;
        let conversion = field.declared_type.conversion_trait(krate);
        quote_spanned! { ty.span() =>
            #index => <#ty as #conversion>::to_property(&self.#member),
        }
    });

    quote! {
        impl #serializable_ for #ident {
            #[inline]
            fn describe_type_path(&self) -> &'static str {
                <Self as #describe_>::type_path()
            }

            #[inline]
            fn describe_class(&self) -> #class_descriptor_ {
                <Self as #describe_>::class_descriptor()
            }

            fn property(&self, index: usize) -> #property_<'_> {
                match index {
                    #(#arms)*
                    _ => #property_::Null,
                }
            }
        }
    }
}

fn impl_trait_object_property(krate: &syn::Path, ident: &syn::Ident) -> TokenStream {
    let object_property_ = path::object_property_(krate);
    let property_ = path::property_(krate);

    quote! {
        impl #object_property_ for #ident {
            #[inline]
            fn to_property(&self) -> #property_<'_> {
                #property_::Object(self)
            }
        }
    }
}

#[cfg(feature = "auto_register")]
fn impl_auto_register(
    krate: &syn::Path,
    ident: &syn::Ident,
    type_attrs: &TypeAttributes,
) -> TokenStream {
    let Some(span) = type_attrs.auto_register else {
        return TokenStream::new();
    };
    let auto_register_ = path::auto_register_(krate);

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

#[cfg(not(feature = "auto_register"))]
fn impl_auto_register(_: &syn::Path, _: &syn::Ident, _: &TypeAttributes) -> TokenStream {
    TokenStream::new()
}

// -----------------------------------------------------------------------------
// describe_methods

#[cfg(feature = "auto_register")]
pub(crate) fn impl_describe_methods(ast: &ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, trait_path, _)) = &ast.trait_ {
        return Err(syn::Error::new(
            trait_path.span(),
            "`describe_methods` expects an inherent impl block",
        ));
    }
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new(
            ast.generics.span(),
            "`describe_methods` cannot be used on generic impl blocks",
        ));
    }

    use crate::path::fp::TypeIdFP;

    let krate = path::ortb_describe();
    let auto_register_ = path::auto_register_(&krate);
    let method_info_ = path::method_info_(&krate);
    let self_ty = &ast.self_ty;

    let methods = ast.items.iter().filter_map(|item| match item {
        syn::ImplItem::Fn(method) => {
            let name = LitStr::new(&method.sig.ident.to_string(), method.sig.ident.span());
            let public = matches!(method.vis, syn::Visibility::Public(_));
            Some(quote!(#method_info_::new(#name, #public)))
        }
        _ => None,
    });

    Ok(quote! {
        #ast

        #auto_register_::inventory::submit!{
            #auto_register_::__MethodTable {
                type_id: #TypeIdFP::of::<#self_ty>,
                methods: &[ #(#methods),* ],
            }
        }
    })
}

#[cfg(not(feature = "auto_register"))]
pub(crate) fn impl_describe_methods(ast: &ItemImpl) -> syn::Result<TokenStream> {
    Ok(quote!(#ast))
}
