//! Extracting the key set from a map, for any key and value types.

use std::collections::HashMap;

/// Collects every key of `map` into a vector.
///
/// The keys come back in whatever order the map yields them, which for a
/// [`HashMap`] varies from run to run. Sort the result if a stable order
/// matters.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use generics::mapkeys;
///
/// let mut counts = HashMap::new();
/// counts.insert("apple", 5);
/// counts.insert("banana", 3);
/// counts.insert("cherry", 7);
///
/// let mut keys = mapkeys::keys(&counts);
/// keys.sort_unstable();
/// assert_eq!(keys, ["apple", "banana", "cherry"]);
/// ```
pub fn keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
    let mut out = Vec::with_capacity(map.len());
    for key in map.keys() {
        out.push(key.clone());
    }
    out
}
