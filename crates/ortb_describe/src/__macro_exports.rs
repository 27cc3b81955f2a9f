//! Items used by generated code. Not part of the public API.
#![doc(hidden)]

use alloc::vec::Vec;
use core::any::TypeId;

use crate::info::MethodInfo;

// -----------------------------------------------------------------------------
// Method tables

/// Returns the methods recorded by `#[describe_methods]` for `type_id`, in
/// declaration order. Several annotated `impl` blocks are concatenated.
pub(crate) fn methods_of(type_id: TypeId) -> Vec<MethodInfo> {
    #[cfg(feature = "auto_register")]
    {
        inventory::iter::<auto_register::__MethodTable>
            .into_iter()
            .filter(|table| (table.type_id)() == type_id)
            .flat_map(|table| table.methods.iter().copied())
            .collect()
    }
    #[cfg(not(feature = "auto_register"))]
    {
        let _ = type_id;
        Vec::new()
    }
}

// -----------------------------------------------------------------------------
// auto_register

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use core::any::TypeId;

    pub use inventory;

    use crate::info::{ClassDescriptor, MethodInfo};
    use crate::registry::TypeRegistry;
    use crate::ser::{Property, Serializable};
    use crate::Describe;

    /// A registration function submitted by `#[ortb(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// The methods of one `#[describe_methods]` impl block.
    pub struct __MethodTable {
        pub type_id: fn() -> TypeId,
        pub methods: &'static [MethodInfo],
    }

    inventory::collect!(__MethodTable);

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: Describe> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Registered unconditionally; its presence tells that `inventory` works here.
    pub struct __AvailFlag;

    impl Serializable for __AvailFlag {
        fn describe_type_path(&self) -> &'static str {
            <Self as Describe>::type_path()
        }

        fn describe_class(&self) -> ClassDescriptor {
            <Self as Describe>::class_descriptor()
        }

        fn property(&self, _: usize) -> Property<'_> {
            Property::Null
        }
    }

    impl Describe for __AvailFlag {
        fn type_path() -> &'static str {
            "ortb_describe::__macro_exports::auto_register::__AvailFlag"
        }

        fn type_name() -> &'static str {
            "__AvailFlag"
        }

        fn class_descriptor() -> ClassDescriptor {
            ClassDescriptor::new(Self::type_path(), Self::type_name(), &[])
        }
    }

    inventory::submit! {
        __AutoRegisterFunc(<__AvailFlag as __RegisterType>::__register)
    }

    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
