//! Macros for node implementation.

/// Generates `with_*` builder methods that forward to the same-named
/// [`LayoutIntent`](crate::intent::LayoutIntent) setter on a nested
/// `outer.inner` field.
///
/// # Usage
///
/// ```ignore
/// impl_intent_setters!(Grid => props.intent {
///     with_container(container: bool),
///     with_xs(size: impl Into<GridSize>),
/// });
/// ```
macro_rules! impl_intent_setters {
    ($ty:ident => $outer:ident . $inner:ident { $($method:ident($arg:ident: $arg_ty:ty)),* $(,)? }) => {
        impl $ty {
            $(
                pub fn $method(mut self, $arg: $arg_ty) -> Self {
                    self.$outer.$inner = self.$outer.$inner.$method($arg);
                    self
                }
            )*
        }
    };
}

pub(crate) use impl_intent_setters;
