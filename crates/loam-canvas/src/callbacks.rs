//! Callback types injected into the facade adapters.
//!
//! Owned boxed closures, handed over at construction. No global state:
//! a facade's callbacks belong to that facade alone.

/// Per-cell draw callback: `(row, column, new_value)`.
///
/// Invoked synchronously once per committed cell mutation, in the
/// order the mutations occur. Never invoked for reads.
pub type DrawFn = Box<dyn FnMut(i32, i32, u32)>;

/// Resize callback for the rectangular adapters: `(rows, columns)`.
///
/// Invoked at most once per mutating operation, after all of that
/// operation's draw callbacks, and only if a dimension changed.
pub type ResizeFn = Box<dyn FnMut(i32, i32)>;

/// Resize callback for the radius-addressed adapter: `(radius)`.
pub type RadiusResizeFn = Box<dyn FnMut(i32)>;

/// Optional per-cell initializer: `(row, column) -> value`.
pub type InitFn = Box<dyn Fn(i32, i32) -> u32>;
