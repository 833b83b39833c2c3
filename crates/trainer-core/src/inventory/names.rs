use crate::inventory::Category;

/// External display-name lookup, implemented by whatever loaded the name
/// tables (the GUI side). Consulted once per accepted item during a scan;
/// `None` never fails the scan.
pub trait NameLookup {
    fn display_name(&self, category: Category, id: &str) -> Option<String>;
}

/// Lookup that knows nothing; every item keeps its raw id.
pub struct NoNames;

impl NameLookup for NoNames {
    fn display_name(&self, _category: Category, _id: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    /// Table-backed lookup for tests.
    #[derive(Default)]
    pub struct StaticNames {
        entries: HashMap<(Category, String), String>,
    }

    impl StaticNames {
        pub fn with(mut self, category: Category, id: &str, name: &str) -> Self {
            self.entries
                .insert((category, id.to_string()), name.to_string());
            self
        }
    }

    impl NameLookup for StaticNames {
        fn display_name(&self, category: Category, id: &str) -> Option<String> {
            self.entries.get(&(category, id.to_string())).cloned()
        }
    }
}
