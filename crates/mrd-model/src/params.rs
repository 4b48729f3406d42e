//! Named user parameters.

use serde::{Deserialize, Serialize};

/// A named integer parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserParameterLong {
    pub name: String,
    pub value: i64,
}

/// A named floating-point parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserParameterDouble {
    pub name: String,
    pub value: f64,
}

/// A named string parameter, also used for base64-encoded payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserParameterString {
    pub name: String,
    pub value: String,
}

/// Four independently ordered sequences of named parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserParameters {
    pub user_parameter_long: Vec<UserParameterLong>,
    pub user_parameter_double: Vec<UserParameterDouble>,
    pub user_parameter_string: Vec<UserParameterString>,
    pub user_parameter_base64: Vec<UserParameterString>,
}
