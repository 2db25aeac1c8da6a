//! Helper macro for declaring port error enums with snake_case constructors.

/// Declare a `thiserror` enum whose struct variants get a constructor named
/// after the variant, accepting `impl Into<T>` for every field.
///
/// ```ignore
/// define_port_error! {
///     pub enum StoreError {
///         Connection { message: String } => "connection failed: {message}",
///     }
/// }
/// let err = StoreError::connection("refused");
/// ```
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Construct [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Lost { message: String } => "lost: {message}",
            Clash { acc_id: i64, message: String } => "clash on {acc_id}: {message}",
        }
    }

    #[test]
    fn constructor_accepts_str() {
        assert_eq!(SamplePortError::lost("socket").to_string(), "lost: socket");
    }

    #[test]
    fn constructor_keeps_field_order() {
        let err = SamplePortError::clash(3_i64, "taken");
        assert_eq!(err.to_string(), "clash on 3: taken");
    }
}
