//! Power-set enumeration by depth-first recursion.
//!
//! Each level decides whether one element is left out or taken, always
//! trying "left out" first. For `[a, b]` the order is `()`, `(b)`, `(a)`,
//! `(a, b)`.

use std::fmt::Display;

use smallvec::SmallVec;

/// Subset buffer; sets of up to eight elements stay on the stack.
type Picked<'a, T> = SmallVec<[&'a T; 8]>;

/// Calls `visit` once per subset of `items`, in depth-first order.
///
/// The slice passed to `visit` borrows from `items` and keeps their order.
pub fn for_each_subset<T, F>(items: &[T], mut visit: F)
where
    F: FnMut(&[&T]),
{
    let mut picked = Picked::new();
    descend(items, 0, &mut picked, &mut visit);
}

fn descend<'a, T, F>(items: &'a [T], idx: usize, picked: &mut Picked<'a, T>, visit: &mut F)
where
    F: FnMut(&[&T]),
{
    if idx == items.len() {
        visit(picked.as_slice());
        return;
    }

    descend(items, idx + 1, picked, visit);

    picked.push(&items[idx]);
    descend(items, idx + 1, picked, visit);
    picked.pop();
}

/// Returns all `2^n` subsets of `items`, in depth-first order.
#[must_use]
pub fn powerset<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut subsets = Vec::with_capacity(1usize << items.len().min(20));
    for_each_subset(items, |subset| {
        subsets.push(subset.iter().map(|&item| item.clone()).collect());
    });
    subsets
}

/// Formats a subset as `(a, b, c)`; the empty subset is `()`.
#[must_use]
pub fn format_subset<T: Display>(subset: &[&T]) -> String {
    let inner: Vec<String> = subset.iter().map(ToString::to_string).collect();
    format!("({})", inner.join(", "))
}
