/// Defines a function whose every call is timed as one split of the global
/// chronograph named after the function.
///
/// ```
/// use chronograph::{chronograph_fn, get_chronograph};
///
/// chronograph_fn! {
///     fn load(count: usize) -> usize {
///         count * 2
///     }
/// }
///
/// chronograph_fn! {
///     name = "doc::storage";
///     fn store() {}
/// }
///
/// assert_eq!(load(2), 4);
/// store();
///
/// assert_eq!(get_chronograph("load").lock().splits()[0].label(), Some("load"));
/// assert_eq!(get_chronograph("doc::storage").lock().splits()[0].label(), Some("store"));
/// ```
///
/// Arguments must be plain `name: Type` pairs; generic functions are not
/// supported, use [`add_chronograph`](crate::add_chronograph) for those.
#[macro_export]
macro_rules! chronograph_fn {
    (
        name = $name:expr;
        $(#[$meta:meta])*
        $vis:vis fn $fn_name:ident ( $( $arg:ident : $arg_ty:ty ),* $(,)? ) $( -> $ret:ty )? $body:block
    ) => {
        $(#[$meta])*
        $vis fn $fn_name( $( $arg: $arg_ty ),* ) $( -> $ret )? {
            let _chronograph_scope = $crate::decorator::enter(
                &$crate::decorator::DecoratorOptions::new($name).with_label(stringify!($fn_name)),
            );
            $body
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis fn $fn_name:ident ( $( $arg:ident : $arg_ty:ty ),* $(,)? ) $( -> $ret:ty )? $body:block
    ) => {
        $(#[$meta])*
        $vis fn $fn_name( $( $arg: $arg_ty ),* ) $( -> $ret )? {
            let _chronograph_scope = $crate::decorator::enter(
                &$crate::decorator::DecoratorOptions::new(stringify!($fn_name)),
            );
            $body
        }
    };
}
