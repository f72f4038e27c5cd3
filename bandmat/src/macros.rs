/// Macro for forwarding owning-matrix methods to the equivalent view method
///
/// `&self` methods go through `as_view()`, `&mut self` methods through
/// `as_view_mut()`. Methods handing out borrows tied to the view's own
/// lifetime cannot be forwarded this way and are written by hand.
macro_rules! forward_to_view {
    ($(#[$attr:meta])* fn $name:ident(&mut self $(, $arg:ident: $ty:ty)*) -> $ret:ty) => {
        $(#[$attr])*
        #[inline]
        pub fn $name(&mut self $(, $arg: $ty)*) -> $ret {
            self.as_view_mut().$name($($arg),*)
        }
    };
    ($(#[$attr:meta])* fn $name:ident(&self $(, $arg:ident: $ty:ty)*) -> $ret:ty) => {
        $(#[$attr])*
        #[inline]
        pub fn $name(&self $(, $arg: $ty)*) -> $ret {
            self.as_view().$name($($arg),*)
        }
    };
}
