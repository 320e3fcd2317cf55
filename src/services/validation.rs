/// Accumulates field-level messages for the caller to show the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    results: Vec<ValidationResult>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: String,
    pub message: String,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result<F: Into<String>, M: Into<String>>(&mut self, field: F, message: M) {
        self.results.push(ValidationResult {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn results_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.results
            .iter()
            .filter(move |r| r.field == field)
            .map(|r| r.message.as_str())
    }

    pub fn is_valid(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_results_per_field() {
        let mut validation = Validation::new();
        assert!(validation.is_valid());

        validation.add_result("Body", "too fast");
        validation.add_result("Name", "required");
        validation.add_result("Body", "still too fast");

        assert!(!validation.is_valid());
        assert_eq!(validation.results().len(), 3);
        assert_eq!(
            validation.results_for("Body").collect::<Vec<_>>(),
            vec!["too fast", "still too fast"]
        );

        validation.clear();
        assert!(validation.is_valid());
    }
}
