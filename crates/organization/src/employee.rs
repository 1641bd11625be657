use crate::name::Name;

/// An employee shares the person's name model but carries no identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: Name,
}

impl Employee {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            name: Name::new(first, last),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn full_name(&self) -> String {
        self.name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_comes_from_composed_name() {
        let employee = Employee::new("Grace", "Hopper");
        assert_eq!(employee.full_name(), "Grace Hopper");
        assert_eq!(employee.name(), &Name::new("Grace", "Hopper"));
    }
}
