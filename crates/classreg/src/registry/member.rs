//! Class members: attributes, methods and method parameters

use std::fmt;
use std::str::FromStr;

use crate::core::{RegistryError, Visibility};

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub param_type: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.param_type)
    }
}

impl FromStr for Parameter {
    type Err = RegistryError;

    /// Parses `name:Type`. Both halves must be non-empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((name, ty)) if !name.trim().is_empty() && !ty.trim().is_empty() => {
                Ok(Parameter::new(name.trim(), ty.trim()))
            }
            _ => Err(RegistryError::invalid_parameter(s)),
        }
    }
}

/// An attribute (field) of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub attr_type: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub default_value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, attr_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attr_type: attr_type.into(),
            visibility: Visibility::default(),
            is_static: false,
            default_value: None,
        }
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}: {}",
            self.visibility.to_char(),
            self.name,
            self.attr_type
        )?;
        if self.is_static {
            write!(f, "$")?;
        }
        if let Some(default) = &self.default_value {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// A method (operation) of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub return_type: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub parameters: Vec<Parameter>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            visibility: Visibility::default(),
            is_static: false,
            is_abstract: false,
            parameters: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}(", self.visibility.to_char(), self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, "): {}", self.return_type)?;
        if self.is_abstract {
            write!(f, "*")?;
        }
        if self.is_static {
            write!(f, "$")?;
        }
        Ok(())
    }
}
