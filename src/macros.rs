#[cfg(feature = "tracing")]
macro_rules! log {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log {
    ($level:ident, $($arg:tt)+) => {};
}

macro_rules! header_names {
    ($($(#[$doc:meta])* ($konst:ident, $canonical:literal, $lower:literal);)*) => {
        $(
            $(#[$doc])*
            pub const $konst: HeaderName = HeaderName::from_static($lower);
        )*

        /// The same header names spelled the way htmx documents them.
        ///
        /// Ordered-pair and record sinks store keys exactly as given, so these are the
        /// names written into them.
        pub mod canonical {
            $(
                #[doc = concat!("`", $canonical, "`")]
                pub const $konst: &str = $canonical;
            )*
        }
    };
}
