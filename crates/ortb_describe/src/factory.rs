use alloc::string::ToString;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::cache::{CachedValue, DescriptorCache, MemoryCache, NoOpCache};
use crate::info::ClassDescriptor;
use crate::registry::{TypeRegistration, TypeRegistry};
use crate::ser::Serializable;
use crate::{Describe, DescribeError};

// -----------------------------------------------------------------------------
// DescriptorFactory

/// Returns [`ClassDescriptor`]s, memoized through a [`DescriptorCache`].
///
/// A descriptor is looked up by static type, by live instance, or by type path
/// or short name through the factory's [`TypeRegistry`]. The cache key is the
/// type path. On a miss the descriptor is built from the type's compile-time
/// metadata, completed with its recorded methods, and stored.
///
/// Two threads missing the same key both build it; the descriptors are equal,
/// and the last store wins.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ortb_describe::{DescriptorFactory, MemoryCache, derive::Describe};
///
/// #[derive(Describe)]
/// struct Publisher {
///     id: Option<String>,
/// }
///
/// let factory = DescriptorFactory::new(Arc::new(MemoryCache::new()));
/// let a = factory.describe::<Publisher>();
/// let b = factory.describe_value(&Publisher { id: None });
/// assert!(Arc::ptr_eq(&a, &b));
///
/// factory.register::<Publisher>();
/// let c = factory.describe_by_name("Publisher").unwrap();
/// assert!(Arc::ptr_eq(&a, &c));
/// assert!(factory.describe_by_name("Missing").is_err());
/// ```
pub struct DescriptorFactory {
    cache: Arc<dyn DescriptorCache>,
    registry: RwLock<TypeRegistry>,
}

impl DescriptorFactory {
    /// Creates a factory over `cache` with an empty registry.
    pub fn new(cache: Arc<dyn DescriptorCache>) -> Self {
        Self {
            cache,
            registry: RwLock::new(TypeRegistry::new()),
        }
    }

    /// Creates a factory that rebuilds descriptors on every lookup.
    pub fn uncached() -> Self {
        Self::new(Arc::new(NoOpCache))
    }

    /// Returns the process-wide factory.
    ///
    /// It is backed by a [`MemoryCache`], and its registry is filled with
    /// [`TypeRegistry::auto_register`] on first access.
    pub fn shared() -> &'static DescriptorFactory {
        static SHARED: OnceLock<DescriptorFactory> = OnceLock::new();
        SHARED.get_or_init(|| {
            let factory = Self::new(Arc::new(MemoryCache::new()));
            factory.auto_register();
            factory
        })
    }

    /// Returns the cache backing this factory.
    #[inline]
    pub fn cache(&self) -> &dyn DescriptorCache {
        &*self.cache
    }

    /// Takes a read lock on the registry.
    pub fn registry(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the registry.
    pub fn registry_mut(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `T` for lookups by path and name.
    #[inline]
    pub fn register<T: Describe>(&self) -> bool {
        self.registry_mut().register::<T>()
    }

    /// See [`TypeRegistry::auto_register`].
    #[inline]
    pub fn auto_register(&self) -> bool {
        self.registry_mut().auto_register()
    }

    /// Returns the descriptor of `T`.
    pub fn describe<T: Describe>(&self) -> Arc<ClassDescriptor> {
        self.describe_with(T::type_path(), TypeId::of::<T>(), T::class_descriptor)
    }

    /// Returns the descriptor of the runtime type of `value`.
    pub fn describe_value(&self, value: &dyn Serializable) -> Arc<ClassDescriptor> {
        self.describe_with(value.describe_type_path(), value.describe_type_id(), || {
            value.describe_class()
        })
    }

    /// Returns the descriptor of the registered type with the given full path.
    pub fn describe_by_path(
        &self,
        type_path: &str,
    ) -> Result<Arc<ClassDescriptor>, DescribeError> {
        let registration = self.registry().get_with_type_path(type_path).copied();
        self.describe_registration(registration, type_path)
    }

    /// Returns the descriptor of the registered type with the given short name.
    ///
    /// Fails if the name is ambiguous.
    pub fn describe_by_name(
        &self,
        type_name: &str,
    ) -> Result<Arc<ClassDescriptor>, DescribeError> {
        let registration = self.registry().get_with_type_name(type_name).copied();
        self.describe_registration(registration, type_name)
    }

    fn describe_registration(
        &self,
        registration: Option<TypeRegistration>,
        identity: &str,
    ) -> Result<Arc<ClassDescriptor>, DescribeError> {
        match registration {
            Some(reg) => Ok(self.describe_with(reg.type_path(), reg.type_id(), || {
                reg.build_descriptor()
            })),
            None => Err(DescribeError::UnknownType {
                identity: identity.to_string(),
            }),
        }
    }

    fn describe_with(
        &self,
        type_path: &'static str,
        type_id: TypeId,
        build: impl FnOnce() -> ClassDescriptor,
    ) -> Arc<ClassDescriptor> {
        // Type paths are not unique (local items, custom `type_path`), the id is.
        let key = format!("describe::{type_path}::{type_id:?}");
        if let Some(hit) = self.cache.fetch(&key)
            && let Ok(descriptor) = hit.downcast::<ClassDescriptor>()
        {
            return descriptor;
        }

        log::debug!("descriptor cache miss for `{type_path}`");
        let methods = crate::__macro_exports::methods_of(type_id);
        let descriptor = Arc::new(build().with_methods(methods));
        self.cache.store(&key, Arc::clone(&descriptor) as CachedValue);
        descriptor
    }
}

impl fmt::Debug for DescriptorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorFactory")
            .field("registry", &*self.registry())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::DescriptorFactory;
    use crate::derive::{Describe, describe_methods};
    use crate::{DescribeError, MemoryCache};

    #[derive(Describe)]
    #[ortb(type_path = "tests::Device")]
    struct Device {
        #[ortb(recommended)]
        ua: Option<String>,
        #[ortb(skip)]
        _scratch: u8,
        ip: Option<String>,
    }

    #[describe_methods]
    impl Device {
        pub fn set_ua(&mut self, ua: &str) {
            self.ua = Some(ua.into());
        }

        #[expect(dead_code, reason = "recorded as a non-public method")]
        fn reset(&mut self) {
            self.ip = None;
        }
    }

    #[test]
    fn cache_transparency() {
        let cached = DescriptorFactory::new(Arc::new(MemoryCache::new()));
        let uncached = DescriptorFactory::uncached();

        let a = cached.describe::<Device>();
        let b = uncached.describe::<Device>();
        let c = uncached.describe::<Device>();

        assert_eq!(a.property_names(), &["ua", "ip"]);
        assert_eq!(a.property_names(), b.property_names());
        assert!(!Arc::ptr_eq(&b, &c));
        assert!(Arc::ptr_eq(&a, &cached.describe::<Device>()));

        let mut device = Device {
            ua: None,
            _scratch: 0,
            ip: None,
        };
        device.set_ua("Mozilla/5.0");
        let b = cached.describe_value(&device);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn methods_are_recorded() {
        let info = DescriptorFactory::uncached().describe::<Device>();
        assert_eq!(info.method("set_ua"), Some(true));
        assert_eq!(info.method("reset"), Some(false));
        assert!(!info.is_public("reset"));
    }

    #[test]
    fn unknown_types() {
        let factory = DescriptorFactory::uncached();
        assert_eq!(
            factory.describe_by_path("tests::Device").unwrap_err(),
            DescribeError::UnknownType {
                identity: "tests::Device".into()
            }
        );

        factory.register::<Device>();
        let info = factory.describe_by_path("tests::Device").unwrap();
        assert_eq!(info.type_name(), "Device");
        assert!(factory.describe_by_name("Device").is_ok());
    }
}
