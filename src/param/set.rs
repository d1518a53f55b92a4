use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::binder::BindError;
use super::descriptor::ParamDescriptor;
use crate::table::Table;

/// Ordered, uniquely named collection of parameters handed to a statement.
///
/// The `add_*` methods mirror the [`ParamDescriptor`] constructors and return
/// a reference to the descriptor that was added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    params: Vec<ParamDescriptor>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, descriptor: ParamDescriptor) -> Result<&ParamDescriptor, BindError> {
        if self.get(&descriptor.name).is_some() {
            return Err(BindError::DuplicateName(descriptor.name));
        }
        let index = self.params.len();
        self.params.push(descriptor);
        Ok(&self.params[index])
    }

    pub fn get(&self, name: &str) -> Option<&ParamDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamDescriptor> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn into_vec(self) -> Vec<ParamDescriptor> {
        self.params
    }

    pub fn add_nullable_string(&mut self, name: &str, value: Option<&str>) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::nullable_string(name, value)?)
    }

    pub fn add_nvarchar(&mut self, name: &str, value: Option<&str>, size: u32) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::nvarchar(name, value, size)?)
    }

    pub fn add_nvarchar_max(&mut self, name: &str, value: Option<&str>) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::nvarchar_max(name, value)?)
    }

    pub fn add_nullable_datetime(&mut self, name: &str, value: Option<NaiveDateTime>) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::nullable_datetime(name, value)?)
    }

    pub fn add_smallint(&mut self, name: &str, value: i16) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::smallint(name, value)?)
    }

    pub fn add_int(&mut self, name: &str, value: i32) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::int(name, value)?)
    }

    pub fn add_nullable_int(&mut self, name: &str, value: Option<i32>) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::nullable_int(name, value)?)
    }

    pub fn add_nullable_money(&mut self, name: &str, value: Option<Decimal>) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::nullable_money(name, value)?)
    }

    pub fn add_nullable_decimal(
        &mut self,
        name: &str,
        value: Option<Decimal>,
        precision: u8,
        scale: u8,
    ) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::nullable_decimal(name, value, precision, scale)?)
    }

    pub fn add_bit(&mut self, name: &str, value: bool) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::bit(name, value)?)
    }

    pub fn add_nullable_bit(&mut self, name: &str, value: Option<bool>) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::nullable_bit(name, value)?)
    }

    pub fn add_bit_with_default(
        &mut self,
        name: &str,
        value: Option<bool>,
        default_if_null: bool,
    ) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::bit_with_default(name, value, default_if_null)?)
    }

    pub fn add_table(&mut self, name: &str, value: Table) -> Result<&ParamDescriptor, BindError> {
        self.push(ParamDescriptor::table(name, value)?)
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a ParamDescriptor;
    type IntoIter = std::slice::Iter<'a, ParamDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl IntoIterator for ParameterSet {
    type Item = ParamDescriptor;
    type IntoIter = std::vec::IntoIter<ParamDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut params = ParameterSet::new();
        params.add_int("id", 7).unwrap();
        params.add_nvarchar("name", Some("Ada"), 50).unwrap();
        params.add_nullable_bit("active", None).unwrap();

        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "active"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut params = ParameterSet::new();
        params.add_int("id", 1).unwrap();
        let err = params.add_int("id", 2).unwrap_err();
        assert_eq!(err, BindError::DuplicateName("id".to_string()));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_misuse_is_not_added() {
        let mut params = ParameterSet::new();
        assert!(params.add_nvarchar("code", Some("x"), 0).is_err());
        assert!(params.is_empty());
    }
}
