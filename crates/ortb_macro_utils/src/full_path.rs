//! Fully qualified paths of `core`/`alloc` items for generated code.
//!
//! Generated code must not depend on what the caller has in scope, so every
//! prelude item is spelled out. Each marker implements [`ToTokens`] and can be
//! interpolated directly: `quote!(#OptionFP::Some(x))`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! full_path {
    ($($(#[$meta:meta])* $name:ident => [$($path:tt)+];)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($($path)+));
                }
            }
        )*
    };
}

full_path! {
    /// `::core::option::Option`
    OptionFP => [::core::option::Option];
    /// `::core::any::TypeId`
    TypeIdFP => [::core::any::TypeId];
    /// `::core::module_path!`
    ModulePathFP => [::core::module_path];
    /// `::core::concat!`
    ConcatFP => [::core::concat];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_absolute() {
        assert_eq!(
            quote!(#OptionFP::None).to_string(),
            ":: core :: option :: Option :: None"
        );
        assert_eq!(
            TypeIdFP.to_token_stream().to_string(),
            ":: core :: any :: TypeId"
        );
        let path = quote!(#ConcatFP!(#ModulePathFP!(), "::", "Item")).to_string();
        assert!(path.starts_with(":: core :: concat !"));
        assert!(path.contains(":: core :: module_path !"));
    }
}
