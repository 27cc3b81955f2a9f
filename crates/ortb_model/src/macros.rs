/// Getter and validating setter pairs for integer code fields.
///
/// ```ignore
/// impl App {
///     coded_accessors! {
///         /// Sets the paid flag.
///         paid, set_paid => validate_in::<BitType>;
///     }
/// }
/// ```
macro_rules! coded_accessors {
    ($($(#[$meta:meta])* $field:ident, $setter:ident => $check:expr;)*) => {$(
        #[inline]
        pub fn $field(&self) -> Option<i32> {
            self.$field
        }

        $(#[$meta])*
        pub fn $setter(&mut self, value: i32) -> Result<&mut Self, $crate::InvalidValueError> {
            ($check)(::core::stringify!($field), value)?;
            self.$field = Some(value);
            Ok(self)
        }
    )*};
}

pub(crate) use coded_accessors;
