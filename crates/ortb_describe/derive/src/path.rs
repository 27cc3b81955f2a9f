//! Paths of the runtime items that generated code refers to.
//!
//! Keeping them here confines the changes needed when `ortb_describe` is
//! restructured to this file.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) use ortb_macro_utils::full_path as fp;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `ortb_describe` crate.
///
/// 1. For crates that depend on `ortb_describe`, `::ortb_describe` is returned.
/// 2. For crates that depend on `openrtb`, `::openrtb::describe` is returned.
/// 3. For crates that depend on `ortb_core`, `::ortb_core::describe` is returned.
/// 4. For crates that depend on `ortb`, `::ortb::describe` is returned.
/// 5. Otherwise `::ortb_describe` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so the path is computed once per
/// expansion and passed around.
pub(crate) fn ortb_describe() -> syn::Path {
    ortb_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("ortb_describe"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn describe_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::Describe }
}

#[inline(always)]
pub(crate) fn class_descriptor_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::info::ClassDescriptor }
}

#[inline(always)]
pub(crate) fn property_metadata_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::info::PropertyMetadata }
}

#[inline(always)]
pub(crate) fn declared_type_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::info::DeclaredType }
}

#[inline(always)]
pub(crate) fn default_value_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::info::DefaultValue }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn method_info_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::info::MethodInfo }
}

#[inline(always)]
pub(crate) fn serializable_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::ser::Serializable }
}

#[inline(always)]
pub(crate) fn property_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::ser::Property }
}

#[inline(always)]
pub(crate) fn scalar_property_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::ser::ScalarProperty }
}

#[inline(always)]
pub(crate) fn object_property_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::ser::ObjectProperty }
}

#[inline(always)]
pub(crate) fn collection_property_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::ser::CollectionProperty }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(krate: &syn::Path) -> TokenStream {
    quote! { #krate::__macro_exports::auto_register }
}
