//! Flattening, partitioning, cardinality checks and pruning

use serde_json::{Map, Value};

use crate::container::is_truthy;

/// Values with a notion of "empty" or "false"
pub trait Truthy {
    /// Whether the value counts as true
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        is_truthy(self)
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! truthy_int {
    ($($t:ty),*) => {$(
        impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        }
    )*};
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Concatenate an iterable of iterables one level deep.
pub fn as_flattened_list<I>(nested: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    nested.into_iter().flatten().collect()
}

/// Split `items` by `pred`.
///
/// Returns `(rejected, accepted)`: items for which `pred` is false come
/// first, each side in original order.
pub fn partition<T, I, P>(mut pred: P, items: I) -> (Vec<T>, Vec<T>)
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    let (accepted, rejected) = items.into_iter().partition(|item| pred(item));
    (rejected, accepted)
}

/// True if exactly one item is truthy.
pub fn exactly_one<I>(items: I) -> bool
where
    I: IntoIterator,
    I::Item: Truthy,
{
    count_truthy(items, 2) == 1
}

/// True if no more than one item is truthy.
pub fn at_most_one<I>(items: I) -> bool
where
    I: IntoIterator,
    I::Item: Truthy,
{
    count_truthy(items, 2) <= 1
}

// Stops once `limit` truthy items have been seen.
fn count_truthy<I>(items: I, limit: usize) -> usize
where
    I: IntoIterator,
    I::Item: Truthy,
{
    items
        .into_iter()
        .filter(Truthy::is_truthy)
        .take(limit)
        .count()
}

/// Which values [`prune_dict`] removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneMode {
    /// Remove only `null`
    #[default]
    Strict,
    /// Remove every falsy value
    Truthy,
}

impl PruneMode {
    fn is_empty(self, value: &Value) -> bool {
        match self {
            PruneMode::Strict => value.is_null(),
            PruneMode::Truthy => !is_truthy(value),
        }
    }
}

/// Recursively remove empty entries from objects and arrays.
///
/// Nested containers are pruned first and dropped if nothing is left in them.
/// A non-container value is returned as is.
pub fn prune_dict(value: &Value, mode: PruneMode) -> Value {
    match value {
        Value::Object(map) => {
            let mut pruned = Map::new();
            for (key, item) in map {
                if let Some(kept) = prune_item(item, mode) {
                    pruned.insert(key.clone(), kept);
                }
            }
            Value::Object(pruned)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .filter_map(|item| prune_item(item, mode))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn prune_item(item: &Value, mode: PruneMode) -> Option<Value> {
    if mode.is_empty(item) {
        return None;
    }
    match item {
        Value::Object(_) | Value::Array(_) => {
            let pruned = prune_dict(item, mode);
            is_truthy(&pruned).then_some(pruned)
        }
        scalar => Some(scalar.clone()),
    }
}
