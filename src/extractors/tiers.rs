use log::debug;

/// One strategy in an ordered chain of decreasing precision.
///
/// `run` returns `None` when the tier has nothing to contribute, which hands
/// the input to the next tier. Tiers that produce lists return `None` for an
/// empty list.
pub struct Tier<I: ?Sized, T> {
    pub name: &'static str,
    pub run: fn(&I) -> Option<T>,
}

impl<I: ?Sized, T> Tier<I, T> {
    pub const fn new(name: &'static str, run: fn(&I) -> Option<T>) -> Self {
        Self { name, run }
    }
}

/// Evaluate `tiers` in order and return the first result.
pub fn first_match<I: ?Sized, T>(tiers: &[Tier<I, T>], input: &I) -> Option<T> {
    for tier in tiers {
        if let Some(result) = (tier.run)(input) {
            debug!("Tier '{}' matched", tier.name);
            return Some(result);
        }
    }
    None
}

/// Wrap a list so that an empty one counts as a miss.
pub fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
