//! Helper macro for declaring port error enums with snake-case constructors.

macro_rules! define_port_error {
    (@ctor $(#[$ctor_meta:meta])* $variant:ident) => {
        ::paste::paste! {
            $(#[$ctor_meta])*
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $(#[$ctor_meta:meta])* $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl [$(#[$ctor_meta])*] $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl [$($ctor_meta:tt)*] $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            $($ctor_meta)*
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl [$($ctor_meta:tt)*] $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            [$($ctor_meta)*]
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[doc = $doc:expr])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(
                    @ctor
                    #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
                    $variant $( { $($field : $ty),* } )?
                );
            )*
        }
    };
}

pub(crate) use define_port_error;
