#![forbid(unsafe_code)]

//! Property enumeration for scope locking.
//!
//! Scope locking has to see instance methods defined on a prototype, so it
//! enumerates like `for..in`: own enumerable keys first, then each prototype
//! level's, walking the whole chain. A name shadowed further down the chain
//! is reported once, at its nearest occurrence. The wasm layer collects the
//! per-level key lists from the live object; the merge order is pure and
//! lives here.

/// Merge per-level enumerable key lists into `for..in` order.
///
/// `levels` is ordered nearest-first (the object's own keys, then its
/// prototype's, and so on). First occurrence of a name wins.
#[must_use]
pub fn chain_keys(levels: &[Vec<String>]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for level in levels {
        for name in level {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

/// Whether scope locking rewrites a property of this name.
///
/// A property literally named `constructor` is left alone; it shows up when
/// a prototype was assigned from an object literal carrying an enumerable
/// `constructor`, and binding it would break `instanceof`-style checks.
#[must_use]
pub fn should_rebind(name: &str) -> bool {
    name != "constructor"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn level(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prototype_keys_follow_own_keys() {
        let keys = chain_keys(&[level(&["name"]), level(&["greet", "leave"])]);
        assert_eq!(keys, level(&["name", "greet", "leave"]));
    }

    #[test]
    fn methods_only_on_the_prototype_are_still_seen() {
        // An instance with no own properties: everything comes from the
        // prototype level, so it must not collapse to nothing.
        let keys = chain_keys(&[level(&[]), level(&["greet"])]);
        assert_eq!(keys, level(&["greet"]));
    }

    #[test]
    fn shadowed_names_are_reported_once_nearest_first() {
        let keys = chain_keys(&[
            level(&["greet"]),
            level(&["greet", "leave"]),
            level(&["leave", "toString"]),
        ]);
        assert_eq!(keys, level(&["greet", "leave", "toString"]));
    }

    #[test]
    fn constructor_survives_enumeration_but_not_rebinding() {
        // The skip happens at rebind time, not during enumeration.
        let keys = chain_keys(&[level(&[]), level(&["constructor", "greet"])]);
        assert_eq!(keys, level(&["constructor", "greet"]));
        assert!(!should_rebind("constructor"));
        assert!(should_rebind("greet"));
        assert!(should_rebind("constructor2"));
    }
}
