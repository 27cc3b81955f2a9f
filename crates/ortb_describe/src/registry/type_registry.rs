use core::any::TypeId;

use ortb_utils::TypeIdMap;
use ortb_utils::hash::{HashMap, HashSet};

use crate::Describe;
use crate::info::ClassDescriptor;

// -----------------------------------------------------------------------------
// TypeRegistration

/// The identity of one described type, and how to build its descriptor.
#[derive(Clone, Copy, Debug)]
pub struct TypeRegistration {
    type_id: TypeId,
    type_path: &'static str,
    type_name: &'static str,
    class_descriptor: fn() -> ClassDescriptor,
}

impl TypeRegistration {
    /// Creates the registration for `T`.
    #[inline]
    pub fn of<T: Describe>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: T::type_path(),
            type_name: T::type_name(),
            class_descriptor: T::class_descriptor,
        }
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Builds a fresh descriptor, see [`Describe::class_descriptor`].
    #[inline]
    pub fn build_descriptor(&self) -> ClassDescriptor {
        (self.class_descriptor)()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of [described] types.
///
/// Types are indexed by [`TypeId`], by full type path and by short type name.
/// A short name shared by two registered types is ambiguous and no longer
/// resolves.
///
/// # Example
///
/// ```
/// use ortb_describe::registry::TypeRegistry;
///
/// mod request {
///     #[derive(ortb_describe::derive::Describe)]
///     pub struct Data { pub id: Option<String> }
/// }
/// mod response {
///     #[derive(ortb_describe::derive::Describe)]
///     pub struct Data { pub value: Option<String> }
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<request::Data>();
/// assert!(registry.get_with_type_name("Data").is_some());
///
/// registry.register::<response::Data>();
/// assert!(registry.is_ambiguous("Data"));
/// assert!(registry.get_with_type_name("Data").is_none());
///
/// let path = registry.iter().next().unwrap().type_path();
/// assert!(registry.get_with_type_path(path).is_some());
/// ```
///
/// [described]: crate::Describe
#[derive(Debug, Default)]
pub struct TypeRegistry {
    registrations: TypeIdMap<TypeRegistration>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl TypeRegistry {
    /// Create an empty [`TypeRegistry`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            registrations: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(ortb_utils::hash::FixedHashState),
            type_name_to_id: HashMap::with_hasher(ortb_utils::hash::FixedHashState),
            ambiguous_names: HashSet::with_hasher(ortb_utils::hash::FixedHashState),
        }
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        registration: &TypeRegistration,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let type_name = registration.type_name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                log::warn!(
                    "type name `{type_name}` is ambiguous, look up `{}` by its type path",
                    registration.type_path(),
                );
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, registration.type_id());
            }
        }

        // The first registration keeps the path.
        let type_path = registration.type_path();
        if type_path_to_id.contains_key(type_path) {
            log::warn!("type path `{type_path}` is already registered, only the first type is reachable by it");
        } else {
            type_path_to_id.insert(type_path, registration.type_id());
        }
    }

    /// Try add or do nothing.
    ///
    /// - If the [`TypeId`] already exists, the function does nothing and returns `false`.
    /// - Otherwise the registration is inserted and the function returns `true`.
    pub fn try_insert(&mut self, registration: TypeRegistration) -> bool {
        self.registrations.try_insert(registration.type_id(), || {
            log::debug!("registered `{}`", registration.type_path());
            Self::add_new_type_indices(
                &registration,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            registration
        })
    }

    /// Registers `T` if it has not been registered already.
    ///
    /// Returns `true` if `T` was newly registered.
    #[inline]
    pub fn register<T: Describe>(&mut self) -> bool {
        if self.contains(TypeId::of::<T>()) {
            return false;
        }
        self.try_insert(TypeRegistration::of::<T>())
    }

    /// Automatically registers all types annotated with `#[ortb(auto_register)]`.
    ///
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration works on the current platform.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it does
    /// nothing and returns `false`.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;
            // Reduce the cost of duplicate registrations.
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        false
    }

    /// Whether the type with given [`TypeId`] has been registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.registrations.contains(&type_id)
    }

    /// Returns the registration of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeRegistration> {
        self.registrations.get(&type_id)
    }

    /// Returns the registration of the type with the given full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeRegistration> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the registration of the type with the given short name.
    ///
    /// If the name is ambiguous, or no such type has been registered, returns `None`.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeRegistration> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if the short name matches multiple registered types.
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Returns an iterator over all registrations in arbitrary order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeRegistration> {
        self.registrations.values()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::derive::Describe;

    #[derive(Describe)]
    #[ortb(type_path = "tests::Segment")]
    struct Segment {
        id: Option<String>,
    }

    #[test]
    fn register_once() {
        let mut registry = TypeRegistry::new();
        assert!(registry.register::<Segment>());
        assert!(!registry.register::<Segment>());
        assert_eq!(registry.len(), 1);

        let reg = registry.get(TypeId::of::<Segment>()).unwrap();
        assert_eq!(reg.type_path(), "tests::Segment");
        assert_eq!(reg.type_name(), "Segment");
        assert_eq!(reg.build_descriptor().property_names(), &["id"]);
        assert!(registry.get_with_type_path("tests::Segment").is_some());
        assert!(registry.get_with_type_path("Segment").is_none());
    }

    #[derive(Describe)]
    #[ortb(type_path = "tests::Segment")]
    struct OtherSegment {
        name: Option<String>,
    }

    #[test]
    fn duplicate_path_keeps_the_first_type() {
        let mut registry = TypeRegistry::new();
        assert!(registry.register::<Segment>());
        assert!(registry.register::<OtherSegment>());
        assert_eq!(registry.len(), 2);

        let reg = registry.get_with_type_path("tests::Segment").unwrap();
        assert_eq!(reg.type_id(), TypeId::of::<Segment>());
        assert!(registry.get(TypeId::of::<OtherSegment>()).is_some());
    }

    #[derive(Describe)]
    #[ortb(type_path = "tests::Geo", auto_register)]
    struct Geo {
        lat: Option<f64>,
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_collects_marked_types() {
        let mut registry = TypeRegistry::new();
        assert!(registry.auto_register());
        assert!(registry.contains(TypeId::of::<Geo>()));
        assert!(registry.get_with_type_name("Geo").is_some());
        // Repeated calls do not duplicate entries.
        let len = registry.len();
        assert!(registry.auto_register());
        assert_eq!(registry.len(), len);
    }
}
