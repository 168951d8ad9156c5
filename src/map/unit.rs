use std::sync::Arc;

/// An atomic, indivisible area (a county) with an external id and a weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: Arc<str>, // e.g., "31001", leading zeros kept
    pub weight: f64,  // e.g., population
}

impl Unit {
    pub fn new(id: impl Into<Arc<str>>, weight: f64) -> Self {
        Self { id: id.into(), weight }
    }

    /// Group key made of the first `len` characters of the id.
    /// If the id is shorter than `len`, the full id is the key.
    pub fn group_key(&self, len: usize) -> &str {
        match self.id.char_indices().nth(len) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Unit;

    #[test]
    fn group_key_truncates_to_prefix() {
        let unit = Unit::new("31001", 1.0);
        assert_eq!(unit.group_key(2), "31");
        assert_eq!(unit.group_key(5), "31001");
        assert_eq!(unit.group_key(9), "31001");
        assert_eq!(unit.group_key(0), "");
    }
}
