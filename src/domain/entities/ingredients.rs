#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
}

impl Chip {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Ingredients typed into the comma-separated form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn parse(raw: &str) -> Self {
        let items = raw
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn chips(&self) -> Vec<Chip> {
        self.items.iter().map(Chip::new).collect()
    }
}

#[cfg(test)]
impl IngredientList {
    pub fn items(&self) -> &[String] {
        &self.items
    }
}
