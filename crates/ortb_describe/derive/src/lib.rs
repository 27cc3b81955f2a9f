//! See following macros:
//!
//! - [`Describe`]
//! - [`describe_methods`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

static DESCRIBE_ATTRIBUTE_NAME: &str = "ortb";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod declared_type;
mod describe_docs;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Describe Derivation
///
/// `#[derive(Describe)]` on a struct with named fields implements:
///
/// - `Describe`: type path, type name and the compile-time `ClassDescriptor`.
/// - `Serializable`: reads a property by its declaration index.
/// - `ObjectProperty`: lets the type be nested in other described types.
///
/// Generic types, tuple structs, unit structs, enums and unions are rejected.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Describe)]
/// struct Native {
///     #[ortb(required)]
///     assets: Collection<Assets>,
///     #[ortb(recommended, default = 1)]
///     ver: Option<i32>,
///     #[ortb(kind = "string", rename = "type")]
///     kind: Option<MimeName>,
///     #[ortb(skip)]
///     cache: u64,
/// }
/// ```
///
/// - `required`: serialization fails when the property produces no output.
/// - `recommended`: advisory marker, recorded only.
/// - `default = <literal>`: an int, float, bool or string recorded as metadata.
/// - `kind = "<tag>"`: the declared type, one of `string`, `int`, `float`,
///   `bool`, `array`, `object`, `collection`, `extension`.
/// - `rename = "<name>"`: the wire name (defaults to the field name).
/// - `skip`: the field is not a declared property. Cannot be combined with `required`.
///
/// ## Declared Type Inference
///
/// Without `kind`, the declared type follows the field type. `Option<T>` and
/// `Box<T>` are looked through.
///
/// | field type                        | declared type |
/// |-----------------------------------|---------------|
/// | `String`, `&str`, `Cow<str>`      | `string`      |
/// | integer primitives                | `int`         |
/// | `f32`, `f64`                      | `float`       |
/// | `bool`                            | `bool`        |
/// | `Vec<S>` with `S` scalar          | `array`       |
/// | `Vec<T>`, `Collection<T>`         | `collection`  |
/// | `Extension`                       | `extension`   |
/// | anything else                     | `object`      |
///
/// ## Type Attributes
///
/// - `type_path = "..."`: overrides the default `module_path!() :: Ident`.
/// - `auto_register`: adds the type to `TypeRegistry::auto_register`.
///   A no-op when the `auto_register` feature is disabled.
///
/// ## Documentation
///
/// With the `docs` feature, `///` comments on fields are recorded in
/// `PropertyMetadata::docs`. `#[ortb(doc = "...")]` replaces them and
/// `#[ortb(doc = false)]` drops them.
#[proc_macro_derive(Describe, attributes(ortb))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impls::impl_describe(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Records the methods of an inherent `impl` block and their visibility.
///
/// The recorded methods appear in the type's `ClassDescriptor` method map.
/// Several annotated blocks for one type are concatenated in link order.
///
/// Requires the `auto_register` feature; without it the block is left as-is
/// and the method map stays empty.
///
/// ```rust, ignore
/// #[describe_methods]
/// impl Link {
///     pub fn set_url(&mut self, url: &str) { /* ... */ }
///     fn check(&self) -> bool { /* ... */ }
/// }
/// ```
#[proc_macro_attribute]
pub fn describe_methods(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(item as ItemImpl);

    match impls::impl_describe_methods(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
