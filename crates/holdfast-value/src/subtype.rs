//! The is-a relation used for derived-to-base conversions.
//!
//! Rust has no struct inheritance; "`Derived` is a subtype of `Base`" here
//! means a `Box<Derived>` can be turned into a `Box<Base>` by unsized
//! coercion, typically `Base = dyn Trait` with `Derived: Trait`. The
//! relation is declared with [`subtype!`](crate::subtype!) so that the
//! coercion happens where the concrete type is still known.
//!
//! ```
//! use holdfast_value::{subtype, Subtype};
//!
//! trait Greet {
//!     fn hello(&self) -> String;
//! }
//!
//! struct English;
//! impl Greet for English {
//!     fn hello(&self) -> String { "hello".into() }
//! }
//!
//! subtype!(English => dyn Greet);
//!
//! let base = Subtype::<dyn Greet>::into_base(Box::new(English));
//! assert_eq!(base.hello(), "hello");
//! ```

/// `Self` is a subtype of `Base`: an owned `Self` can be viewed as a `Base`
/// without copying and without losing its runtime type.
///
/// Every type is a subtype of itself. Further relations are declared with
/// [`subtype!`](crate::subtype!).
pub trait Subtype<Base: ?Sized> {
    /// Convert an owning reference to `Self` into an owning reference to
    /// `Base`. The allocation and the runtime type are unchanged.
    fn into_base(self: Box<Self>) -> Box<Base>;
}

impl<T: ?Sized> Subtype<T> for T {
    fn into_base(self: Box<Self>) -> Box<T> {
        self
    }
}

/// Declare one or more `Derived => Base` subtype relations.
///
/// `Base` is usually a trait object (`dyn Trait`) that `Derived`
/// implements; `Derived` may itself be a trait object of a sub-trait.
/// The body of each generated impl is a plain unsized coercion, so an
/// invalid relation fails to compile.
///
/// ```compile_fail
/// use holdfast_value::subtype;
///
/// trait Shape {}
/// struct NotAShape;
///
/// // `NotAShape` does not implement `Shape`.
/// subtype!(NotAShape => dyn Shape);
/// ```
#[macro_export]
macro_rules! subtype {
    ($($derived:ty => $base:ty),+ $(,)?) => {
        $(
            impl $crate::Subtype<$base> for $derived {
                fn into_base(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<$base> {
                    self
                }
            }
        )+
    };
}
