use serde::{Deserialize, Serialize};

/// Contact details captured before results are revealed. Created once per
/// session from an already-validated request; immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Lead {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Lead {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}
